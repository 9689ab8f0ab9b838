//! regionum - Boolean operations on simple polygons
//!
//! Union, difference, and intersection of two simple polygons, computed by
//! enriching a pair of circular vertex rings with twinned crossing vertices
//! and walking them under operation-specific rules. Inputs are plain point
//! sequences; results are one or more closed contours.

pub mod clip;
pub mod error;
pub mod predicates;
pub mod primitives;

pub use clip::{
    contour_difference, contour_intersection, contour_union, contours_match, validate_contour,
    Contour,
};
pub use error::RegionError;
pub use predicates::{segment_crossing, signed_area, CrossingDirection, SegmentCrossing};
pub use primitives::{Point2, Segment2, Vec2};
