use tinyvec::TinyVec;

use crate::error::Result;
use crate::kdtree::node::{Node, Side};
use crate::kdtree::traversal::{NodeRef, Points};
use crate::point::Point;
use crate::r#trait::PointSet;

/// A set of points in the unit square, organised as a 2-D tree.
///
/// The root splits its region on x, its children on y, and so on, alternating every level. Each
/// node records the rectangle it owns, which lets [`range`][PointSet::range] and
/// [`nearest`][PointSet::nearest] skip whole subtrees.
///
/// Nodes live in a single arena and refer to their children by index. The tree is append-only
/// and not self-balancing, so every traversal runs on an explicit stack rather than recursion.
///
/// ```
/// use unit_kdtree::{KdTree, Point, PointSet};
///
/// let mut tree = KdTree::new();
/// tree.insert(Point::new(0.7, 0.2)).unwrap();
/// tree.insert(Point::new(0.5, 0.4)).unwrap();
///
/// assert_eq!(tree.size(), 2);
/// assert_eq!(
///     tree.nearest(Point::new(0.55, 0.41)).unwrap(),
///     Some(Point::new(0.5, 0.4))
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KdTree {
    /// Node arena. The root, if any, is at index 0.
    pub(crate) nodes: Vec<Node>,
}

/// Where the descent for a point ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Descent {
    /// The tree has no nodes
    Empty,
    /// A node holding an equal point
    Found(usize),
    /// The empty child slot where the point would be attached
    Vacant { parent: usize, side: Side },
}

impl KdTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tree with room for `capacity` points before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Build a tree by inserting `points` in order.
    ///
    /// Stops at, and returns, the first domain error.
    pub fn try_from_points(points: impl IntoIterator<Item = Point>) -> Result<Self> {
        let points = points.into_iter();
        let mut tree = Self::with_capacity(points.size_hint().0);
        for p in points {
            tree.insert(p)?;
        }
        Ok(tree)
    }

    /// Access the root node of the tree for manual traversal.
    pub fn root(&self) -> Option<NodeRef<'_>> {
        NodeRef::from_root(self)
    }

    /// Iterate over the stored points in order: left/bottom subtree, node, right/top subtree.
    pub fn points(&self) -> Points<'_> {
        Points::new(self)
    }

    /// The number of levels in the tree; 0 when empty.
    pub fn height(&self) -> usize {
        if self.nodes.is_empty() {
            return 0;
        }

        let mut stack: TinyVec<[(usize, usize); 33]> = TinyVec::new();
        stack.push((0, 1));

        let mut height = 0;
        while let Some((index, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[index];
            if let Some(left) = node.left {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right {
                stack.push((right, depth + 1));
            }
        }
        height
    }

    /// Walk from the root towards `p`, one coordinate comparison per level.
    ///
    /// Equality short-circuits the walk as soon as a node with an equal point is reached.
    pub(crate) fn locate(&self, p: &Point) -> Descent {
        if self.nodes.is_empty() {
            return Descent::Empty;
        }

        let mut index = 0;
        loop {
            let node = &self.nodes[index];
            if node.point == *p {
                return Descent::Found(index);
            }
            let side = node.side_of(p);
            match node.child(side) {
                Some(child) => index = child,
                None => {
                    return Descent::Vacant {
                        parent: index,
                        side,
                    }
                }
            }
        }
    }

    /// Attach a new node for `p` at the slot found by [`KdTree::locate`].
    pub(crate) fn attach(&mut self, p: Point, at: Descent) -> bool {
        match at {
            Descent::Found(_) => {
                log::trace!("point ({}, {}) already present", p.x(), p.y());
                false
            }
            Descent::Empty => {
                log::trace!("creating root at ({}, {})", p.x(), p.y());
                self.nodes.push(Node::root(p));
                true
            }
            Descent::Vacant { parent, side } => {
                let child = self.nodes[parent].make_child(p, side);
                let index = self.nodes.len();
                log::trace!(
                    "creating node {index} at ({}, {}) under node {parent} ({side:?})",
                    p.x(),
                    p.y()
                );
                self.nodes.push(child);
                self.nodes[parent].set_child(side, index);
                true
            }
        }
    }
}
