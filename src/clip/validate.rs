//! Contour validation.

use super::Contour;
use crate::error::RegionError;
use crate::predicates::segment_crossing;
use crate::primitives::Segment2;
use num_traits::Float;

/// Checks that a contour is usable as a clipping operand.
///
/// Verifies the point count, a non-zero enclosed area, and that no two
/// non-adjacent edges cross each other. The boolean operations do not run
/// this themselves; it is an opt-in pre-check for callers that want early
/// rejection of malformed input.
///
/// # Example
///
/// ```
/// use regionum::clip::{validate_contour, Contour};
/// use regionum::Point2;
///
/// let square = Contour::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ]);
/// assert!(validate_contour(&square).is_ok());
///
/// // A figure-8 crosses itself.
/// let figure8 = Contour::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(0.0, 2.0),
/// ]);
/// assert!(validate_contour(&figure8).is_err());
/// ```
pub fn validate_contour<F: Float>(contour: &Contour<F>) -> Result<(), RegionError> {
    let n = contour.len();
    if n < 3 {
        return Err(RegionError::TooFewPoints { count: n });
    }
    if contour.area() <= F::epsilon() {
        return Err(RegionError::ZeroArea);
    }

    for i in 0..n {
        let a = Segment2::new(contour.points[i], contour.points[(i + 1) % n]);

        // Adjacent edges share a vertex and cannot cross properly.
        for j in (i + 2)..n {
            if (j + 1) % n == i {
                continue;
            }

            let b = Segment2::new(contour.points[j], contour.points[(j + 1) % n]);
            if segment_crossing(a, b).is_some() {
                return Err(RegionError::SelfIntersection {
                    first: i,
                    second: j,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Point2;

    fn contour(points: &[(f64, f64)]) -> Contour<f64> {
        Contour::new(points.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    #[test]
    fn test_valid_square() {
        let square = contour(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert_eq!(validate_contour(&square), Ok(()));
    }

    #[test]
    fn test_valid_concave() {
        let l_shape = contour(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (0.0, 2.0),
        ]);
        assert_eq!(validate_contour(&l_shape), Ok(()));
    }

    #[test]
    fn test_too_few_points() {
        let segment = contour(&[(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(
            validate_contour(&segment),
            Err(RegionError::TooFewPoints { count: 2 })
        );
    }

    #[test]
    fn test_zero_area() {
        let collinear = contour(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        assert_eq!(validate_contour(&collinear), Err(RegionError::ZeroArea));
    }

    #[test]
    fn test_self_intersection() {
        let figure8 = contour(&[(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)]);
        assert_eq!(
            validate_contour(&figure8),
            Err(RegionError::SelfIntersection {
                first: 0,
                second: 2
            })
        );
    }
}
