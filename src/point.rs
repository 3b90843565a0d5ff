//! Points in the plane and the axes they are split on.

use geo_traits::CoordTrait;

use crate::error::{KdTreeError, Result};

/// The coordinate compared at one level of a kd-tree.
///
/// The root splits on [`Axis::X`] (a vertical cut) and every level below flips to the other axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Compare x coordinates. The split line is vertical.
    X,
    /// Compare y coordinates. The split line is horizontal.
    Y,
}

impl Axis {
    /// The axis used one level further down the tree.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// An immutable 2-D point.
///
/// Equality is exact `f64` equality on both coordinates; there is no tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Create a new point. No domain check happens here; the point sets validate on use.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The x coordinate
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// The y coordinate
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// The coordinate of this point along `axis`.
    #[inline]
    pub fn coord(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Squared Euclidean distance between two points.
    #[inline]
    pub fn distance_squared_to(&self, other: &Point) -> f64 {
        sq_dist(self.x, self.y, other.x, other.y)
    }

    /// Whether both coordinates lie in `[0.0, 1.0]`. NaN coordinates never do.
    #[inline]
    pub fn is_in_unit_square(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }

    /// Return this point unchanged if it lies in the unit square, else a domain error.
    pub(crate) fn check_domain(self) -> Result<Self> {
        if self.is_in_unit_square() {
            Ok(self)
        } else {
            log::debug!("rejecting point ({}, {}) outside the unit square", self.x, self.y);
            Err(KdTreeError::PointOutOfDomain {
                x: self.x,
                y: self.y,
            })
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl CoordTrait for Point {
    type T = f64;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("Invalid index of coord"),
        }
    }
}

#[inline]
pub(crate) fn sq_dist(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = ax - bx;
    let dy = ay - by;
    dx * dx + dy * dy
}
