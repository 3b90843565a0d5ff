//! Utilities to traverse the KdTree structure.

use geo_traits::RectTrait;
use tinyvec::TinyVec;

use crate::kdtree::node::Node;
use crate::kdtree::KdTree;
use crate::point::{Axis, Point};
use crate::rect::Rect;

/// A borrowed view of one node in a [`KdTree`].
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    /// The tree that this node is a reference onto
    tree: &'a KdTree,

    /// Index into the tree's node arena
    index: usize,

    /// Distance from the root; the root is at depth 0.
    depth: usize,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn from_root(tree: &'a KdTree) -> Option<Self> {
        if tree.nodes.is_empty() {
            return None;
        }
        Some(Self {
            tree,
            index: 0,
            depth: 0,
        })
    }

    #[inline]
    fn node(&self) -> &'a Node {
        &self.tree.nodes[self.index]
    }

    fn descend(&self, child: Option<usize>) -> Option<NodeRef<'a>> {
        child.map(|index| Self {
            tree: self.tree,
            index,
            depth: self.depth + 1,
        })
    }

    /// The point stored at this node.
    pub fn point(&self) -> Point {
        self.node().point
    }

    /// The rectangle bounding every point in this node's subtree.
    pub fn region(&self) -> Rect {
        self.node().region
    }

    /// The axis this node splits its region on.
    pub fn axis(&self) -> Axis {
        self.node().axis
    }

    /// Distance from the root; the root is at depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The child holding points strictly less than this one on [`NodeRef::axis`].
    pub fn left_child(&self) -> Option<NodeRef<'a>> {
        self.descend(self.node().left)
    }

    /// The child holding points greater than or equal to this one on [`NodeRef::axis`].
    pub fn right_child(&self) -> Option<NodeRef<'a>> {
        self.descend(self.node().right)
    }

    /// Returns `true` if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        let node = self.node();
        node.left.is_none() && node.right.is_none()
    }

    /// The segment along which this node cuts its region.
    ///
    /// For an x split this is the vertical segment at the point's x spanning the region's y
    /// extent; for a y split, the horizontal segment at the point's y spanning the x extent.
    pub fn split_line(&self) -> (Point, Point) {
        let node = self.node();
        let region = node.region;
        match node.axis {
            Axis::X => (
                Point::new(node.point.x(), region.ymin()),
                Point::new(node.point.x(), region.ymax()),
            ),
            Axis::Y => (
                Point::new(region.xmin(), node.point.y()),
                Point::new(region.xmax(), node.point.y()),
            ),
        }
    }
}

impl RectTrait for NodeRef<'_> {
    type T = f64;
    type CoordType<'b>
        = Point
    where
        Self: 'b;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn min(&self) -> Self::CoordType<'_> {
        let region = self.region();
        Point::new(region.xmin(), region.ymin())
    }

    fn max(&self) -> Self::CoordType<'_> {
        let region = self.region();
        Point::new(region.xmax(), region.ymax())
    }
}

/// In-order iterator over the points of a [`KdTree`], created by [`KdTree::points`].
#[derive(Debug, Clone)]
pub struct Points<'a> {
    tree: &'a KdTree,
    /// Nodes whose left subtree is being walked
    stack: TinyVec<[usize; 33]>,
    /// Next subtree to slide down the left spine of
    current: Option<usize>,
}

impl<'a> Points<'a> {
    pub(crate) fn new(tree: &'a KdTree) -> Self {
        let current = if tree.nodes.is_empty() { None } else { Some(0) };
        Self {
            tree,
            stack: TinyVec::new(),
            current,
        }
    }
}

impl Iterator for Points<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(index) = self.current {
            self.stack.push(index);
            self.current = self.tree.nodes[index].left;
        }

        let index = self.stack.pop()?;
        let node = &self.tree.nodes[index];
        self.current = node.right;
        Some(node.point)
    }
}
