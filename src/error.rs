use thiserror::Error;

/// Enum with all errors in this crate.
///
/// Both variants are domain errors: the caller handed in geometry that lies outside the unit
/// square (or a rectangle whose bounds are inverted). They are returned before any mutation.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum KdTreeError {
    #[error("Point ({x}, {y}) is outside the unit square")]
    PointOutOfDomain { x: f64, y: f64 },

    #[error("Rectangle [{xmin}, {xmax}] x [{ymin}, {ymax}] is inverted or outside the unit square")]
    RectOutOfDomain {
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
    },
}

pub type Result<T> = std::result::Result<T, KdTreeError>;
