use crate::{Point, Rectangle};

/// Handle to a node stored in the tree's arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) const fn get(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum NodeKind {
    Leaf(Vec<Point>),
    Internal(Vec<NodeId>),
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Node {
    pub(crate) mbr: Rectangle,
    pub(crate) parent: Option<NodeId>,
    pub(crate) kind: NodeKind,
}

impl Default for Node {
    fn default() -> Self {
        Node::new_leaf(Vec::new())
    }
}

impl Node {
    pub(crate) fn new_leaf(points: Vec<Point>) -> Self {
        Node {
            mbr: Rectangle::of(&points),
            parent: None,
            kind: NodeKind::Leaf(points),
        }
    }

    pub(crate) fn new_internal() -> Self {
        Node {
            mbr: Rectangle::new_empty(),
            parent: None,
            kind: NodeKind::Internal(Vec::new()),
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    pub(crate) fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Number of points (leaf) or children (internal).
    pub(crate) fn len(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf(points) => points.len(),
            NodeKind::Internal(children) => children.len(),
        }
    }

    pub(crate) fn is_overflow(&self, degree: usize) -> bool {
        self.len() > degree
    }

    pub(crate) fn add_point(&mut self, point: Point) {
        match &mut self.kind {
            NodeKind::Leaf(points) => points.push(point),
            NodeKind::Internal(_) => unreachable!("points can only be added to a leaf"),
        }
        self.mbr.expand(point);
    }

    /// Appends `child` and widens this node to cover `child_mbr`. The caller
    /// owns the child's parent link.
    pub(crate) fn add_child(&mut self, child: NodeId, child_mbr: Rectangle) {
        match &mut self.kind {
            NodeKind::Internal(children) => children.push(child),
            NodeKind::Leaf(_) => unreachable!("children can only be added to an internal node"),
        }
        self.mbr.expand(child_mbr);
    }

    pub(crate) fn remove_child(&mut self, child: NodeId) {
        if let NodeKind::Internal(children) = &mut self.kind {
            children.retain(|&c| c != child);
        }
    }

    pub(crate) fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Internal(children) => children,
            NodeKind::Leaf(_) => &[],
        }
    }
}
