//! Boolean ring walks.
//!
//! Each walk starts at a crossing vertex, emits points while moving along
//! the current ring, and hops across twin links to the opposite ring at
//! operation-specific crossings. A contour is finished when the walk comes
//! back to its starting vertex or to that vertex's twin.

use super::ring::{Direction, Ring, VertexId, VertexTag};
use super::Contour;
use num_traits::Float;

/// Which of the two rings a cursor currently stands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Subject,
    Clip,
}

impl Side {
    #[inline]
    fn opposite(self) -> Self {
        match self {
            Side::Subject => Side::Clip,
            Side::Clip => Side::Subject,
        }
    }
}

/// A position within the ring pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    side: Side,
    id: VertexId,
}

/// Mutable view over both rings during a walk.
struct RingPair<'a, F> {
    subject: &'a mut Ring<F>,
    clip: &'a mut Ring<F>,
}

impl<F: Float> RingPair<'_, F> {
    #[inline]
    fn ring(&self, side: Side) -> &Ring<F> {
        match side {
            Side::Subject => self.subject,
            Side::Clip => self.clip,
        }
    }

    #[inline]
    fn ring_mut(&mut self, side: Side) -> &mut Ring<F> {
        match side {
            Side::Subject => self.subject,
            Side::Clip => self.clip,
        }
    }

    /// Returns the cursor on the opposite ring paired with this one.
    #[inline]
    fn twin_of(&self, cursor: Cursor) -> Option<Cursor> {
        self.ring(cursor.side)[cursor.id].twin.map(|id| Cursor {
            side: cursor.side.opposite(),
            id,
        })
    }
}

/// Walks the union of the two rings into a single contour.
///
/// Starts at the first entering crossing of the subject ring and follows it
/// forward. At every twinned vertex the walk detours along the clip ring
/// until the clip ring links back into the subject, then resumes past the
/// landing vertex. Without an entering crossing there is no union to trace
/// and the result is empty.
pub(crate) fn trace_union<F: Float>(subject: &Ring<F>, clip: &Ring<F>) -> Contour<F> {
    let start = match subject.find_from(subject.head(), |v| v.tag == VertexTag::OutToIn) {
        Some(id) => id,
        None => return Contour::empty(),
    };

    let mut points = Vec::new();
    let mut cur = start;
    loop {
        points.push(subject[cur].point);

        let mut next = subject[cur].next;
        if let Some(twin) = subject[cur].twin {
            let mut c = clip[twin].next;
            loop {
                points.push(clip[c].point);
                match clip[c].twin {
                    Some(landing) => {
                        next = subject[landing].next;
                        break;
                    }
                    None => c = clip[c].next,
                }
            }
        }

        cur = next;
        if cur == start {
            break;
        }
    }

    Contour::new(points)
}

/// Walks the subject minus the clip region, one contour per worklist start.
///
/// Starts at leaving crossings of the subject ring. Every twin hop flips the
/// traversal direction: the clip ring bounds the removed region, so it must
/// be swept in reverse to keep the remaining interior on the same side.
pub(crate) fn trace_difference<F: Float>(
    subject: &mut Ring<F>,
    clip: &mut Ring<F>,
) -> Vec<Contour<F>> {
    let first = match subject.find_from(subject.head(), |v| v.tag == VertexTag::InToOut) {
        Some(id) => id,
        None => return Vec::new(),
    };

    let mut rings = RingPair { subject, clip };
    let mut contours = Vec::new();
    let mut pending = vec![Cursor {
        side: Side::Subject,
        id: first,
    }];

    while let Some(start) = pending.pop() {
        if rings.ring(start.side)[start.id].visited {
            continue;
        }

        let mut cursor = start;
        let mut direction = Direction::Forward;
        let mut points = Vec::new();

        loop {
            {
                let ring = rings.ring_mut(cursor.side);
                points.push(ring[cursor.id].point);
                ring[cursor.id].visited = true;
                cursor.id = ring.neighbor(cursor.id, direction);
            }

            if let Some(twin) = rings.twin_of(cursor) {
                // The clip region can split the result apart. Reaching an
                // unvisited entering crossing, the next leaving crossing
                // past it starts another contour on the far side.
                if direction == Direction::Forward {
                    let ring = rings.ring(cursor.side);
                    if !ring[cursor.id].visited && ring[cursor.id].tag == VertexTag::OutToIn {
                        if let Some(leave) =
                            ring.find_from(cursor.id, |v| v.tag == VertexTag::InToOut)
                        {
                            pending.push(Cursor {
                                side: cursor.side,
                                id: leave,
                            });
                        }
                    }
                }
                direction = direction.flipped();
                cursor = twin;
            }

            if cursor == start || rings.twin_of(cursor) == Some(start) {
                break;
            }
        }

        contours.push(Contour::new(points));
    }

    contours
}

/// Walks the overlap of the two rings, one contour per worklist start.
///
/// Starts at entering crossings of the subject ring and always moves
/// forward. Whenever the walk is about to leave the other polygon it hops
/// to the twin and keeps tracing the overlap boundary on the opposite ring.
pub(crate) fn trace_intersection<F: Float>(
    subject: &mut Ring<F>,
    clip: &mut Ring<F>,
) -> Vec<Contour<F>> {
    let first = match subject.find_from(subject.head(), |v| v.tag == VertexTag::OutToIn) {
        Some(id) => id,
        None => return Vec::new(),
    };

    let mut rings = RingPair { subject, clip };
    let mut contours = Vec::new();
    let mut pending = vec![Cursor {
        side: Side::Subject,
        id: first,
    }];

    while let Some(start) = pending.pop() {
        if rings.ring(start.side)[start.id].visited {
            continue;
        }

        let mut cursor = start;
        let mut points = Vec::new();

        loop {
            {
                let ring = rings.ring_mut(cursor.side);
                points.push(ring[cursor.id].point);
                ring[cursor.id].visited = true;
                cursor.id = ring.neighbor(cursor.id, Direction::Forward);
            }

            if rings.ring(cursor.side)[cursor.id].tag == VertexTag::InToOut {
                // Another stretch of overlap may lie beyond this exit; the
                // next entering crossing past it is a candidate start.
                let ring = rings.ring(cursor.side);
                if !ring[cursor.id].visited {
                    if let Some(entering) =
                        ring.find_from(cursor.id, |v| v.tag == VertexTag::OutToIn)
                    {
                        pending.push(Cursor {
                            side: cursor.side,
                            id: entering,
                        });
                    }
                }
                if let Some(twin) = rings.twin_of(cursor) {
                    cursor = twin;
                }
            }

            if cursor == start || rings.twin_of(cursor) == Some(start) {
                break;
            }
        }

        contours.push(Contour::new(points));
    }

    contours
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip::build::build_ring_pair;
    use crate::primitives::Point2;

    fn contour(points: &[(f64, f64)]) -> Contour<f64> {
        Contour::new(points.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    fn unit_square() -> Contour<f64> {
        contour(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    fn offset_square() -> Contour<f64> {
        contour(&[(0.5, 0.5), (1.5, 0.5), (1.5, 1.5), (0.5, 1.5)])
    }

    fn tall_square() -> Contour<f64> {
        contour(&[(0.0, 0.0), (3.0, 0.0), (3.0, 3.0), (0.0, 3.0)])
    }

    fn piercing_slab() -> Contour<f64> {
        contour(&[(-1.0, 1.0), (4.0, 1.0), (4.0, 1.5), (-1.0, 1.5)])
    }

    const EPS: f64 = 1e-9;

    #[test]
    fn test_union_of_overlapping_squares() {
        let (subject, clip) = build_ring_pair(&unit_square(), &offset_square());
        let result = trace_union(&subject, &clip);

        let expected = contour(&[
            (1.0, 0.5),
            (1.5, 0.5),
            (1.5, 1.5),
            (0.5, 1.5),
            (0.5, 1.0),
            (0.0, 1.0),
            (0.0, 0.0),
            (1.0, 0.0),
        ]);
        assert!(result.cyclically_close(&expected, EPS));
    }

    #[test]
    fn test_intersection_of_overlapping_squares() {
        let (mut subject, mut clip) = build_ring_pair(&unit_square(), &offset_square());
        let result = trace_intersection(&mut subject, &mut clip);

        assert_eq!(result.len(), 1);
        let expected = contour(&[(1.0, 0.5), (1.0, 1.0), (0.5, 1.0), (0.5, 0.5)]);
        assert!(result[0].cyclically_close(&expected, EPS));
    }

    #[test]
    fn test_difference_of_overlapping_squares() {
        let (mut subject, mut clip) = build_ring_pair(&unit_square(), &offset_square());
        let result = trace_difference(&mut subject, &mut clip);

        assert_eq!(result.len(), 1);
        let expected = contour(&[
            (1.0, 0.5),
            (0.5, 0.5),
            (0.5, 1.0),
            (0.0, 1.0),
            (0.0, 0.0),
            (1.0, 0.0),
        ]);
        assert!(result[0].cyclically_close(&expected, EPS));
    }

    #[test]
    fn test_union_of_pierced_square() {
        let (subject, clip) = build_ring_pair(&tall_square(), &piercing_slab());
        let result = trace_union(&subject, &clip);

        let expected = contour(&[
            (3.0, 1.0),
            (4.0, 1.0),
            (4.0, 1.5),
            (3.0, 1.5),
            (3.0, 3.0),
            (0.0, 3.0),
            (0.0, 1.5),
            (-1.0, 1.5),
            (-1.0, 1.0),
            (0.0, 1.0),
            (0.0, 0.0),
            (3.0, 0.0),
        ]);
        assert!(result.cyclically_close(&expected, EPS));
    }

    #[test]
    fn test_intersection_of_pierced_square() {
        let (mut subject, mut clip) = build_ring_pair(&tall_square(), &piercing_slab());
        let result = trace_intersection(&mut subject, &mut clip);

        assert_eq!(result.len(), 1);
        let expected = contour(&[(3.0, 1.0), (3.0, 1.5), (0.0, 1.5), (0.0, 1.0)]);
        assert!(result[0].cyclically_close(&expected, EPS));
    }

    #[test]
    fn test_difference_of_pierced_square_splits_in_two() {
        let (mut subject, mut clip) = build_ring_pair(&tall_square(), &piercing_slab());
        let result = trace_difference(&mut subject, &mut clip);

        assert_eq!(result.len(), 2);
        let bottom = contour(&[(0.0, 0.0), (3.0, 0.0), (3.0, 1.0), (0.0, 1.0)]);
        let top = contour(&[(0.0, 1.5), (3.0, 1.5), (3.0, 3.0), (0.0, 3.0)]);
        for piece in [&bottom, &top] {
            assert!(
                result.iter().any(|c| c.cyclically_close(piece, EPS)),
                "missing piece {:?}",
                piece
            );
        }
    }

    #[test]
    fn test_walks_without_crossings_are_empty() {
        let far = contour(&[(5.0, 5.0), (6.0, 5.0), (6.0, 6.0), (5.0, 6.0)]);
        let (mut subject, mut clip) = build_ring_pair(&unit_square(), &far);

        assert!(trace_union(&subject, &clip).is_empty());
        assert!(trace_intersection(&mut subject, &mut clip).is_empty());
        assert!(trace_difference(&mut subject, &mut clip).is_empty());
    }
}
