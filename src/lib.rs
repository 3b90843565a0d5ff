#![doc = include_str!("../README.md")]

mod brute;
mod error;
pub mod kdtree;
mod point;
mod rect;
mod r#trait;

pub use brute::BruteForcePointSet;
pub use error::{KdTreeError, Result};
pub use kdtree::KdTree;
pub use point::{Axis, Point};
pub use r#trait::PointSet;
pub use rect::Rect;

#[cfg(test)]
pub(crate) mod test;
