//! Geometric predicates for the clipping engine.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Computes twice the signed area of the triangle `(a, b, c)`.
///
/// Positive when `a`, `b`, `c` wind counter-clockwise, which places `c`
/// to the left of the directed line from `a` to `b`. A counter-clockwise
/// ring therefore keeps its interior on the side where this value is
/// positive for each of its edges.
#[inline]
pub fn signed_area<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    (a - c).cross(b - c)
}

/// The direction in which a segment crosses the boundary of the other
/// polygon, relative to forward traversal of its host ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossingDirection {
    /// The segment passes from the exterior to the interior.
    OutToIn,
    /// The segment passes from the interior to the exterior.
    InToOut,
}

/// A transversal crossing between two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentCrossing<F> {
    /// Parameter of the crossing along the first segment (0 = start, 1 = end).
    pub t: F,
    /// How the first segment crosses the second.
    pub first: CrossingDirection,
    /// How the second segment crosses the first.
    pub second: CrossingDirection,
}

/// Tests whether two segments cross transversally.
///
/// Returns the parametric position of the crossing along `first` together
/// with the crossing direction of each segment over the other, assuming
/// both segments belong to counter-clockwise rings. Parallel segments,
/// segments on the same side of each other, and grazing contacts where an
/// endpoint of `first` lies on the line of `second` all return `None`;
/// results for other exact tangencies are unspecified.
///
/// # Example
///
/// ```
/// use regionum::predicates::{segment_crossing, CrossingDirection};
/// use regionum::Segment2;
///
/// // An upward segment crossing a rightward one at its midpoint.
/// let up: Segment2<f64> = Segment2::from_coords(1.0, 0.0, 1.0, 1.0);
/// let right = Segment2::from_coords(0.5, 0.5, 1.5, 0.5);
///
/// let crossing = segment_crossing(up, right).unwrap();
/// assert_eq!(crossing.t, 0.5);
/// assert_eq!(crossing.first, CrossingDirection::OutToIn);
/// assert_eq!(crossing.second, CrossingDirection::InToOut);
/// ```
pub fn segment_crossing<F: Float>(
    first: Segment2<F>,
    second: Segment2<F>,
) -> Option<SegmentCrossing<F>> {
    let a1 = signed_area(first.start, first.end, second.end);
    let a2 = signed_area(first.start, first.end, second.start);
    // Both endpoints of `second` on the same side of `first`.
    if a1 * a2 > F::zero() {
        return None;
    }

    let a3 = signed_area(second.start, second.end, first.start);
    let a4 = a3 + a2 - a1;
    if a3 * a4 < F::zero() {
        // A negative area puts the start on the right of the other segment,
        // which for counter-clockwise rings is the exterior side.
        let direction = |area: F| {
            if area < F::zero() {
                CrossingDirection::OutToIn
            } else {
                CrossingDirection::InToOut
            }
        };
        Some(SegmentCrossing {
            t: a3 / (a3 - a4),
            first: direction(a3),
            second: direction(a2),
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_signed_area_ccw() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 1.0);
        assert!(signed_area(a, b, c) > 0.0);
    }

    #[test]
    fn test_signed_area_cw() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(0.0, 1.0);
        let c = Point2::new(1.0, 0.0);
        assert!(signed_area(a, b, c) < 0.0);
    }

    #[test]
    fn test_signed_area_collinear() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 1.0);
        let c = Point2::new(2.0, 2.0);
        assert_eq!(signed_area(a, b, c), 0.0);
    }

    #[test]
    fn test_crossing_directions() {
        // Upward through a rightward segment: the upward segment enters the
        // region on the rightward segment's left, the rightward one exits
        // the region on the upward segment's left.
        let up: Segment2<f64> = Segment2::from_coords(1.0, 0.0, 1.0, 1.0);
        let right = Segment2::from_coords(0.5, 0.5, 1.5, 0.5);

        let crossing = segment_crossing(up, right).unwrap();
        assert_relative_eq!(crossing.t, 0.5, epsilon = 1e-12);
        assert_eq!(crossing.first, CrossingDirection::OutToIn);
        assert_eq!(crossing.second, CrossingDirection::InToOut);

        // Swapping the operands mirrors both directions.
        let swapped = segment_crossing(right, up).unwrap();
        assert_relative_eq!(swapped.t, 0.5, epsilon = 1e-12);
        assert_eq!(swapped.first, CrossingDirection::InToOut);
        assert_eq!(swapped.second, CrossingDirection::OutToIn);
    }

    #[test]
    fn test_crossing_off_center() {
        let first: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 4.0, 0.0);
        let second = Segment2::from_coords(1.0, -1.0, 1.0, 1.0);

        let crossing = segment_crossing(first, second).unwrap();
        assert_relative_eq!(crossing.t, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_no_crossing_same_side() {
        let first: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 4.0, 0.0);
        let second = Segment2::from_coords(1.0, 1.0, 3.0, 2.0);
        assert!(segment_crossing(first, second).is_none());
    }

    #[test]
    fn test_no_crossing_parallel() {
        let first: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 4.0, 0.0);
        let second = Segment2::from_coords(0.0, 1.0, 4.0, 1.0);
        assert!(segment_crossing(first, second).is_none());
    }

    #[test]
    fn test_no_crossing_collinear() {
        let first: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 2.0, 0.0);
        let second = Segment2::from_coords(1.0, 0.0, 3.0, 0.0);
        assert!(segment_crossing(first, second).is_none());
    }

    #[test]
    fn test_no_crossing_endpoint_tangency() {
        // The first segment starts exactly on the second; tangency is
        // treated as no crossing.
        let first: Segment2<f64> = Segment2::from_coords(1.0, 0.0, 1.0, 1.0);
        let second = Segment2::from_coords(0.0, 0.0, 2.0, 0.0);
        assert!(segment_crossing(first, second).is_none());
    }

    #[test]
    fn test_no_crossing_beyond_segment() {
        // The lines cross, but outside the extent of the second segment.
        let first: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 4.0, 0.0);
        let second = Segment2::from_coords(1.0, 1.0, 1.0, 3.0);
        assert!(segment_crossing(first, second).is_none());
    }
}
