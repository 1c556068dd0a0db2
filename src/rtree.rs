use log::{debug, trace, warn};

use crate::node::{Node, NodeId, NodeKind};
use crate::utils::min_fill;
use crate::{HasEnvelope, Point, PointIndex, Rectangle};

pub const DEFAULT_DEGREE: usize = 4;

type ChildEntry = (NodeId, Rectangle);
impl HasEnvelope for ChildEntry {
    fn envelope(&self) -> Rectangle {
        self.1
    }
}

/// Dynamic R-tree over points with perimeter-driven subtree choice and
/// exhaustive split search.
///
/// Nodes live in an arena owned by the tree; parent links are arena handles.
#[derive(Clone, Debug, PartialEq)]
pub struct RTree {
    degree: usize,
    min_fill: usize,
    size: usize,
    root: NodeId,
    nodes: Vec<Node>,
    free: Vec<NodeId>,
}

impl Default for RTree {
    fn default() -> Self {
        RTree::with_degree(DEFAULT_DEGREE)
    }
}

impl RTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_degree(mut degree: usize) -> Self {
        if degree < 2 {
            warn!("R-tree degree {} cannot split, using 2", degree);
            degree = 2;
        }
        RTree {
            degree,
            min_fill: min_fill(degree),
            size: 0,
            root: NodeId::new(0),
            nodes: vec![Node::default()],
            free: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn min_fill(&self) -> usize {
        self.min_fill
    }

    /// Number of levels; a lone root leaf has height 1.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut node = self.node(self.root);
        while let Some(&child) = node.children().first() {
            height += 1;
            node = self.node(child);
        }
        height
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    pub fn envelope(&self) -> Rectangle {
        self.node(self.root).mbr
    }

    pub fn insert(&mut self, point: Point) {
        self.insert_at(self.root, point);
        self.size += 1;
    }

    pub fn query(&self, rect: &Rectangle) -> usize {
        let mut count = 0;
        self.visit_leaves(rect, |points| {
            count += points.iter().filter(|p| rect.contains(*p)).count();
        });
        count
    }

    pub fn query_ids(&self, rect: &Rectangle) -> Vec<i64> {
        let mut results = Vec::new();
        self.visit_leaves(rect, |points| {
            results.extend(points.iter().filter(|p| rect.contains(*p)).map(|p| p.id));
        });
        results
    }

    fn visit_leaves<F: FnMut(&[Point])>(&self, rect: &Rectangle, mut visit: F) {
        let mut stack = Vec::new();
        if rect.intersects(self.envelope()) {
            stack.push(self.root);
        }
        while let Some(id) = stack.pop() {
            match &self.node(id).kind {
                NodeKind::Leaf(points) => visit(points),
                NodeKind::Internal(children) => {
                    for &child in children {
                        if rect.intersects(self.node(child).mbr) {
                            stack.push(child);
                        }
                    }
                }
            }
        }
    }

    fn insert_at(&mut self, id: NodeId, point: Point) {
        if self.node(id).is_leaf() {
            self.node_mut(id).add_point(point);
            if self.node(id).is_overflow(self.degree) {
                self.handle_overflow(id);
            }
        } else {
            let child = self.choose_subtree(id, &point);
            self.insert_at(child, point);
            // children may have been replaced by a split below
            self.refresh_mbr(id);
        }
    }

    fn choose_subtree(&self, id: NodeId, point: &Point) -> NodeId {
        let mut best: Option<(i64, NodeId)> = None;
        for &child in self.node(id).children() {
            let increase = self.node(child).mbr.perimeter_increase(point);
            if best.map_or(true, |(min_increase, _)| increase < min_increase) {
                best = Some((increase, child));
            }
        }
        match best {
            Some((_, child)) => child,
            None => unreachable!("choose_subtree called on a leaf"),
        }
    }

    fn handle_overflow(&mut self, mut id: NodeId) {
        while let Some(parent) = self.node(id).parent {
            self.node_mut(parent).remove_child(id);
            let (first, second) = self.split(id);
            self.attach(parent, first);
            self.attach(parent, second);
            if !self.node(parent).is_overflow(self.degree) {
                return;
            }
            id = parent;
        }

        debug_assert!(self.node(id).is_root() && id == self.root);
        let (first, second) = self.split(id);
        let root = self.alloc(Node::new_internal());
        self.attach(root, first);
        self.attach(root, second);
        self.root = root;
        debug!(
            "root split, height is now {} across {} nodes",
            self.height(),
            self.node_count()
        );
    }

    /// Replaces an overflowing node with two siblings, returning them detached.
    fn split(&mut self, id: NodeId) -> (NodeId, NodeId) {
        let node = self.release(id);
        assert!(
            node.is_overflow(self.degree),
            "split called on a node within capacity"
        );

        match node.kind {
            NodeKind::Leaf(points) => {
                let mut by_x = points.clone();
                by_x.sort_by_key(|p| p.x);
                let mut by_y = points;
                by_y.sort_by_key(|p| p.y);
                let mut orderings = vec![by_x, by_y];

                let (ordering, at) = self.choose_split(&orderings);
                let mut first = orderings.swap_remove(ordering);
                let second = first.split_off(at);
                trace!(
                    "split leaf into {} + {} points",
                    first.len(),
                    second.len()
                );
                let first = self.alloc(Node::new_leaf(first));
                let second = self.alloc(Node::new_leaf(second));
                (first, second)
            }
            NodeKind::Internal(children) => {
                let entries: Vec<ChildEntry> = children
                    .into_iter()
                    .map(|child| (child, self.node(child).mbr))
                    .collect();
                let sort_keys: [fn(&ChildEntry) -> i32; 4] = [
                    |e: &ChildEntry| e.1.x_min,
                    |e: &ChildEntry| e.1.x_max,
                    |e: &ChildEntry| e.1.y_min,
                    |e: &ChildEntry| e.1.y_max,
                ];
                let mut orderings: Vec<Vec<ChildEntry>> = sort_keys
                    .iter()
                    .map(|key| {
                        let mut ordering = entries.clone();
                        ordering.sort_by_key(*key);
                        ordering
                    })
                    .collect();

                let (ordering, at) = self.choose_split(&orderings);
                let mut first = orderings.swap_remove(ordering);
                let second = first.split_off(at);
                trace!(
                    "split internal node into {} + {} children",
                    first.len(),
                    second.len()
                );
                let first = self.adopt(first);
                let second = self.adopt(second);
                (first, second)
            }
        }
    }

    /// Returns (ordering index, split index) with the smallest summed perimeter.
    /// Ties keep the earliest candidate.
    fn choose_split<T: HasEnvelope>(&self, orderings: &[Vec<T>]) -> (usize, usize) {
        let mut best: Option<(i64, usize, usize)> = None;
        for (o, ordering) in orderings.iter().enumerate() {
            let m = ordering.len();
            for at in self.min_fill..=(m - self.min_fill) {
                let cost = Rectangle::of(&ordering[..at]).perimeter()
                    + Rectangle::of(&ordering[at..]).perimeter();
                if best.map_or(true, |(best_cost, _, _)| cost < best_cost) {
                    best = Some((cost, o, at));
                }
            }
        }
        match best {
            Some((_, ordering, at)) => (ordering, at),
            None => unreachable!("no split index leaves both halves at minimum fill"),
        }
    }

    /// Builds an internal node over `entries`, re-parenting each child to it.
    fn adopt(&mut self, entries: Vec<ChildEntry>) -> NodeId {
        let id = self.alloc(Node::new_internal());
        for (child, _) in entries {
            self.attach(id, child);
        }
        id
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        let child_mbr = self.node(child).mbr;
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).add_child(child, child_mbr);
    }

    fn refresh_mbr(&mut self, id: NodeId) {
        let mbr = match &self.node(id).kind {
            NodeKind::Leaf(points) => Rectangle::of(points),
            NodeKind::Internal(children) => children
                .iter()
                .fold(Rectangle::new_empty(), |mbr, &c| mbr.merge(self.node(c).mbr)),
        };
        self.node_mut(id).mbr = mbr;
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id.get()] = node;
                id
            }
            None => {
                self.nodes.push(node);
                NodeId::new(self.nodes.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Node {
        self.free.push(id);
        std::mem::take(&mut self.nodes[id.get()])
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.get()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.get()]
    }
}

impl PointIndex for RTree {
    fn len(&self) -> usize {
        RTree::len(self)
    }

    fn envelope(&self) -> Rectangle {
        RTree::envelope(self)
    }

    fn insert(&mut self, point: Point) {
        RTree::insert(self, point)
    }

    fn query(&self, rect: &Rectangle) -> usize {
        RTree::query(self, rect)
    }

    fn query_ids(&self, rect: &Rectangle) -> Vec<i64> {
        RTree::query_ids(self, rect)
    }
}

impl Extend<Point> for RTree {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for point in iter {
            self.insert(point);
        }
    }
}
