use geo_traits::{CoordTrait, RectTrait};

use crate::error::Result;
use crate::point::Point;
use crate::rect::Rect;

/// A set of distinct points in the unit square.
///
/// Implemented by the kd-tree [`KdTree`][crate::KdTree] and the linear-scan
/// [`BruteForcePointSet`][crate::BruteForcePointSet], so that one can be checked against the
/// other by driving both with the same operations.
pub trait PointSet: Sized {
    /// The number of distinct points stored
    fn size(&self) -> usize;

    /// Whether no point has been stored yet
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Add `p` to the set.
    ///
    /// Returns `Ok(true)` if the point was new and `Ok(false)` if an equal point was already
    /// present. A point outside the unit square is rejected with
    /// [`KdTreeError::PointOutOfDomain`][crate::KdTreeError::PointOutOfDomain] and the set is
    /// left untouched.
    fn insert(&mut self, p: Point) -> Result<bool>;

    /// Whether a point exactly equal to `p` is stored.
    ///
    /// Points outside the unit square can never be stored, so for them this returns `false`
    /// rather than an error.
    fn contains(&self, p: Point) -> bool;

    /// All stored points inside `rect`, boundary included.
    ///
    /// The result holds no duplicates and has no defined order. Fails with
    /// [`KdTreeError::RectOutOfDomain`][crate::KdTreeError::RectOutOfDomain] if `rect` is not
    /// contained in the unit square.
    fn range(&self, rect: &Rect) -> Result<Vec<Point>>;

    /// A stored point closest to `q` by Euclidean distance, or `None` if the set is empty.
    ///
    /// Fails with [`KdTreeError::PointOutOfDomain`][crate::KdTreeError::PointOutOfDomain] if `q`
    /// is outside the unit square. How exact ties are broken is documented on each
    /// implementation.
    fn nearest(&self, q: Point) -> Result<Option<Point>>;

    /// Search the set for points within any geo-traits rectangle.
    fn range_rect(&self, rect: &impl RectTrait<T = f64>) -> Result<Vec<Point>> {
        self.range(&Rect::from_rect_trait(rect)?)
    }

    /// Find the point nearest to any geo-traits coordinate.
    fn nearest_coord(&self, coord: &impl CoordTrait<T = f64>) -> Result<Option<Point>> {
        self.nearest(Point::new(coord.x(), coord.y()))
    }
}
