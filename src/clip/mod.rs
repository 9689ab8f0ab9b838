//! Boolean operations on simple polygons.
//!
//! The subject and clip polygons are given as [`Contour`]s: ordered,
//! implicitly closed sequences of points winding counter-clockwise. Each
//! operation builds a pair of circular vertex rings, enriches them with
//! twinned crossing vertices wherever subject and clip edges meet, tags
//! every vertex as inside or outside the other polygon, and then walks the
//! rings under operation-specific rules to emit the result boundary.
//!
//! Inputs must be simple (not self-intersecting) and free of exact
//! tangencies; see [`validate_contour`](crate::clip::validate_contour) for
//! an opt-in pre-check.
//!
//! # Example
//!
//! ```
//! use regionum::clip::{contour_intersection, Contour};
//! use regionum::Point2;
//!
//! let subject = Contour::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ]);
//!
//! let clip = Contour::new(vec![
//!     Point2::new(0.5, 0.5),
//!     Point2::new(1.5, 0.5),
//!     Point2::new(1.5, 1.5),
//!     Point2::new(0.5, 1.5),
//! ]);
//!
//! let overlap = contour_intersection(&subject, &clip);
//! assert_eq!(overlap.len(), 1);
//! assert!((overlap[0].area() - 0.25).abs() < 1e-12);
//! ```

mod build;
mod ring;
mod trace;
mod validate;

pub use validate::validate_contour;

use crate::primitives::Point2;
use num_traits::Float;

/// A simple polygon boundary: an ordered cyclic sequence of points.
///
/// The contour is implicitly closed; the last point connects back to the
/// first and no duplicate closing point is stored. Counter-clockwise
/// winding bounds the interior on the left of each directed edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour<F> {
    /// The boundary points in counter-clockwise order.
    pub points: Vec<Point2<F>>,
}

impl<F: Float> Contour<F> {
    /// Creates a contour from boundary points.
    #[inline]
    pub fn new(points: Vec<Point2<F>>) -> Self {
        Self { points }
    }

    /// Creates an empty contour.
    #[inline]
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Returns true if the contour has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns the signed area enclosed by the contour.
    ///
    /// Positive for counter-clockwise winding, negative for clockwise.
    pub fn signed_area(&self) -> F {
        if self.points.len() < 3 {
            return F::zero();
        }

        let mut area = F::zero();
        let n = self.points.len();
        for i in 0..n {
            let j = (i + 1) % n;
            area = area + self.points[i].x * self.points[j].y;
            area = area - self.points[j].x * self.points[i].y;
        }
        area / F::from(2.0).unwrap()
    }

    /// Returns the absolute area enclosed by the contour.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns a contour with reversed winding order.
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Tests whether `other` is a cyclic rotation of this contour, comparing
    /// points by squared distance against `eps`.
    pub fn cyclically_close(&self, other: &Self, eps: F) -> bool {
        if self.len() != other.len() {
            return false;
        }
        if self.is_empty() {
            return true;
        }

        let n = self.len();
        (0..n).any(|offset| {
            (0..n).all(|i| {
                self.points[(offset + i) % n].distance_squared(other.points[i]) <= eps
            })
        })
    }
}

/// Tests whether two contour lists are equal as multisets, matching
/// individual contours with [`Contour::cyclically_close`].
pub fn contours_match<F: Float>(left: &[Contour<F>], right: &[Contour<F>], eps: F) -> bool {
    if left.len() != right.len() {
        return false;
    }

    let mut used = vec![false; right.len()];
    for contour in left {
        let matched = right
            .iter()
            .enumerate()
            .find(|(i, candidate)| !used[*i] && contour.cyclically_close(candidate, eps));
        match matched {
            Some((i, _)) => used[i] = true,
            None => return false,
        }
    }
    true
}

/// Computes the union of two overlapping polygons.
///
/// Returns the single contour bounding the combined region, or an empty
/// contour when the boundaries never cross (disjoint, nested, or identical
/// inputs all land here).
///
/// # Example
///
/// ```
/// use regionum::clip::{contour_union, Contour};
/// use regionum::Point2;
///
/// let subject = Contour::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ]);
///
/// let clip = Contour::new(vec![
///     Point2::new(0.5, 0.5),
///     Point2::new(1.5, 0.5),
///     Point2::new(1.5, 1.5),
///     Point2::new(0.5, 1.5),
/// ]);
///
/// let combined = contour_union(&subject, &clip);
/// assert_eq!(combined.len(), 8);
/// assert!((combined.area() - 1.75).abs() < 1e-12);
/// ```
pub fn contour_union<F: Float>(subject: &Contour<F>, clip: &Contour<F>) -> Contour<F> {
    if subject.len() < 3 || clip.len() < 3 {
        return Contour::empty();
    }
    let (subject_ring, clip_ring) = build::build_ring_pair(subject, clip);
    trace::trace_union(&subject_ring, &clip_ring)
}

/// Computes the difference `subject - clip`.
///
/// Returns one contour per remaining piece; the clip polygon can split the
/// subject into several. The list is empty when the boundaries never cross.
///
/// # Example
///
/// ```
/// use regionum::clip::{contour_difference, Contour};
/// use regionum::Point2;
///
/// let subject = Contour::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ]);
///
/// let clip = Contour::new(vec![
///     Point2::new(0.5, 0.5),
///     Point2::new(1.5, 0.5),
///     Point2::new(1.5, 1.5),
///     Point2::new(0.5, 1.5),
/// ]);
///
/// let remainder = contour_difference(&subject, &clip);
/// assert_eq!(remainder.len(), 1);
/// assert!((remainder[0].area() - 0.75).abs() < 1e-12);
/// ```
pub fn contour_difference<F: Float>(subject: &Contour<F>, clip: &Contour<F>) -> Vec<Contour<F>> {
    if subject.len() < 3 || clip.len() < 3 {
        return Vec::new();
    }
    let (mut subject_ring, mut clip_ring) = build::build_ring_pair(subject, clip);
    trace::trace_difference(&mut subject_ring, &mut clip_ring)
}

/// Computes the intersection of two polygons.
///
/// Returns one contour per overlapping piece. The list is empty when the
/// boundaries never cross.
pub fn contour_intersection<F: Float>(subject: &Contour<F>, clip: &Contour<F>) -> Vec<Contour<F>> {
    if subject.len() < 3 || clip.len() < 3 {
        return Vec::new();
    }
    let (mut subject_ring, mut clip_ring) = build::build_ring_pair(subject, clip);
    trace::trace_intersection(&mut subject_ring, &mut clip_ring)
}
