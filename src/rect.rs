//! Axis-aligned rectangles.

use geo_traits::RectTrait;

use crate::error::{KdTreeError, Result};
use crate::point::{Axis, Point};

/// An immutable axis-aligned rectangle with `xmin <= xmax` and `ymin <= ymax`.
///
/// All predicates treat the boundary as part of the rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    xmin: f64,
    ymin: f64,
    xmax: f64,
    ymax: f64,
}

impl Rect {
    /// Create a new rectangle, failing if either pair of bounds is inverted or NaN.
    pub fn try_new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<Self> {
        // Negated so that NaN bounds are rejected too
        if !(xmin <= xmax && ymin <= ymax) {
            log::debug!("rejecting inverted rectangle [{xmin}, {xmax}] x [{ymin}, {ymax}]");
            return Err(KdTreeError::RectOutOfDomain {
                xmin,
                ymin,
                xmax,
                ymax,
            });
        }
        Ok(Self {
            xmin,
            ymin,
            xmax,
            ymax,
        })
    }

    /// The unit square `[0, 1] x [0, 1]`.
    pub const fn unit() -> Self {
        Self {
            xmin: 0.0,
            ymin: 0.0,
            xmax: 1.0,
            ymax: 1.0,
        }
    }

    /// The minimum x coordinate
    #[inline]
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    /// The minimum y coordinate
    #[inline]
    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    /// The maximum x coordinate
    #[inline]
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    /// The maximum y coordinate
    #[inline]
    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    /// Whether `p` lies inside this rectangle or on its boundary.
    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        p.x() >= self.xmin && p.x() <= self.xmax && p.y() >= self.ymin && p.y() <= self.ymax
    }

    /// Whether the two rectangles share at least one point. Touching edges count.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.xmax >= other.xmin
            && self.ymax >= other.ymin
            && other.xmax >= self.xmin
            && other.ymax >= self.ymin
    }

    /// Squared distance from `p` to the closest point of this rectangle; 0 if `p` is inside.
    #[inline]
    pub fn distance_squared_to(&self, p: &Point) -> f64 {
        let dx = axis_dist(p.x(), self.xmin, self.xmax);
        let dy = axis_dist(p.y(), self.ymin, self.ymax);
        dx * dx + dy * dy
    }

    /// Whether this rectangle lies entirely inside the unit square.
    pub fn is_in_unit_square(&self) -> bool {
        self.xmin >= 0.0 && self.ymin >= 0.0 && self.xmax <= 1.0 && self.ymax <= 1.0
    }

    /// The part of this rectangle on the low side of `at` along `axis`.
    ///
    /// The max bound on `axis` is clamped to `at`; every other bound is kept.
    pub fn lower_half(&self, axis: Axis, at: f64) -> Self {
        let mut out = *self;
        match axis {
            Axis::X => out.xmax = at,
            Axis::Y => out.ymax = at,
        }
        out
    }

    /// The part of this rectangle on the high side of `at` along `axis`.
    ///
    /// The min bound on `axis` is clamped to `at`; every other bound is kept.
    pub fn upper_half(&self, axis: Axis, at: f64) -> Self {
        let mut out = *self;
        match axis {
            Axis::X => out.xmin = at,
            Axis::Y => out.ymin = at,
        }
        out
    }

    /// Return this rectangle unchanged if it lies in the unit square, else a domain error.
    pub(crate) fn check_domain(self) -> Result<Self> {
        if self.is_in_unit_square() {
            Ok(self)
        } else {
            log::debug!(
                "rejecting rectangle [{}, {}] x [{}, {}] outside the unit square",
                self.xmin,
                self.xmax,
                self.ymin,
                self.ymax
            );
            Err(KdTreeError::RectOutOfDomain {
                xmin: self.xmin,
                ymin: self.ymin,
                xmax: self.xmax,
                ymax: self.ymax,
            })
        }
    }

    /// Copy the bounds out of any geo-traits rectangle.
    pub fn from_rect_trait(rect: &impl RectTrait<T = f64>) -> Result<Self> {
        use geo_traits::CoordTrait;

        let min = rect.min();
        let max = rect.max();
        Self::try_new(min.x(), min.y(), max.x(), max.y())
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::unit()
    }
}

impl RectTrait for Rect {
    type T = f64;
    type CoordType<'a>
        = Point
    where
        Self: 'a;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn min(&self) -> Self::CoordType<'_> {
        Point::new(self.xmin, self.ymin)
    }

    fn max(&self) -> Self::CoordType<'_> {
        Point::new(self.xmax, self.ymax)
    }
}

/// 1D distance from a value to a range.
#[inline]
fn axis_dist(k: f64, min: f64, max: f64) -> f64 {
    if k < min {
        min - k
    } else if k <= max {
        0.0
    } else {
        k - max
    }
}
