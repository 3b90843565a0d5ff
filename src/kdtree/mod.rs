//! A mutable 2-D kd-tree over points in the unit square.

#![warn(missing_docs)]

mod index;
mod node;
mod r#trait;
mod traversal;

pub use index::KdTree;
pub use traversal::{NodeRef, Points};
