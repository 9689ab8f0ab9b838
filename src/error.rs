//! Error types for contour validation.

use thiserror::Error;

/// Errors reported when a contour fails pre-clipping validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegionError {
    /// The contour has fewer points than a polygon boundary needs.
    #[error("contour has {count} points, at least 3 are required")]
    TooFewPoints {
        /// Number of points provided.
        count: usize,
    },

    /// The contour encloses no area.
    #[error("contour encloses no area")]
    ZeroArea,

    /// Two non-adjacent edges of the contour cross each other.
    #[error("contour edges {first} and {second} cross each other")]
    SelfIntersection {
        /// Index of the first crossing edge.
        first: usize,
        /// Index of the second crossing edge.
        second: usize,
    },
}
