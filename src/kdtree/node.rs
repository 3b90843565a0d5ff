use crate::point::{Axis, Point};
use crate::rect::Rect;

/// Which child slot of a node a point descends into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    /// Strictly less than the node's point on the split axis
    LeftBottom,
    /// Greater than or equal to the node's point on the split axis
    RightTop,
}

/// One vertex of the tree, stored in the tree's node arena.
///
/// `region` bounds every point in the subtree rooted here. Children are indices into the same
/// arena. Once created, only an empty child slot is ever written.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Node {
    pub(crate) point: Point,
    pub(crate) region: Rect,
    /// The axis this node's point splits its region on.
    pub(crate) axis: Axis,
    pub(crate) left: Option<usize>,
    pub(crate) right: Option<usize>,
}

impl Node {
    /// The root owns the whole unit square and splits on x.
    pub(crate) fn root(point: Point) -> Self {
        Self {
            point,
            region: Rect::unit(),
            axis: Axis::X,
            left: None,
            right: None,
        }
    }

    /// Build the node that holds `point` in this node's `side` slot.
    ///
    /// The child's region is this region cut at this node's point on this node's axis, and the
    /// child splits on the other axis.
    pub(crate) fn make_child(&self, point: Point, side: Side) -> Self {
        let at = self.point.coord(self.axis);
        let region = match side {
            Side::LeftBottom => self.region.lower_half(self.axis, at),
            Side::RightTop => self.region.upper_half(self.axis, at),
        };
        debug_assert!(region.contains(&point));
        Self {
            point,
            region,
            axis: self.axis.flip(),
            left: None,
            right: None,
        }
    }

    /// The child slot `p` descends into from this node.
    #[inline]
    pub(crate) fn side_of(&self, p: &Point) -> Side {
        if p.coord(self.axis) < self.point.coord(self.axis) {
            Side::LeftBottom
        } else {
            Side::RightTop
        }
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> Option<usize> {
        match side {
            Side::LeftBottom => self.left,
            Side::RightTop => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, index: usize) {
        let slot = match side {
            Side::LeftBottom => &mut self.left,
            Side::RightTop => &mut self.right,
        };
        debug_assert!(slot.is_none(), "child slot already taken");
        *slot = Some(index);
    }
}
