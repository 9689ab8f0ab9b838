//! Construction, enrichment, and classification of the ring pair.

use super::ring::{Ring, VertexId, VertexTag};
use super::Contour;
use crate::predicates::segment_crossing;
use crate::primitives::Segment2;
use num_traits::Float;

/// Builds the twin-linked, classified ring pair for one boolean operation.
///
/// Both contours are assumed to be simple and counter-clockwise.
pub(crate) fn build_ring_pair<F: Float>(
    subject: &Contour<F>,
    clip: &Contour<F>,
) -> (Ring<F>, Ring<F>) {
    let mut subject_ring = Ring::from_contour(&subject.points);
    let mut clip_ring = Ring::from_contour(&clip.points);

    enrich(&mut subject_ring, &mut clip_ring);
    classify(&mut subject_ring);
    classify(&mut clip_ring);

    (subject_ring, clip_ring)
}

/// Clips every subject edge against the clip ring, materializing twinned
/// crossing vertices on both rings.
///
/// The forward pointer of each subject vertex is captured before its edge is
/// processed, so vertices spliced into the edge are not themselves re-clipped;
/// they are collinear with the edge already handled.
fn enrich<F: Float>(subject: &mut Ring<F>, clip: &mut Ring<F>) {
    let head = subject.head();
    let mut cur = head;
    loop {
        let next = subject[cur].next;
        clip_edge(subject, cur, next, clip);
        cur = next;
        if cur == head {
            break;
        }
    }
}

/// Clips the subject edge `(start, end)` against every clip edge.
///
/// Each clip edge can meet the subject edge at most once, so clip-side
/// vertices are spliced immediately. The subject edge may be crossed several
/// times, discovered in clip-ring order rather than parametric order, so
/// subject-side vertices are deferred, sorted by ascending `t`, and then
/// threaded between `start` and `end` as a chain.
fn clip_edge<F: Float>(subject: &mut Ring<F>, start: VertexId, end: VertexId, clip: &mut Ring<F>) {
    let edge = Segment2::new(subject[start].point, subject[end].point);

    let mut found: Vec<(VertexId, F)> = Vec::new();
    let clip_head = clip.head();
    let mut k = clip_head;
    loop {
        let k_next = clip[k].next;

        let clip_segment = Segment2::new(clip[k].point, clip[k_next].point);
        if let Some(crossing) = segment_crossing(edge, clip_segment) {
            if crossing.t >= F::zero() && crossing.t <= F::one() {
                let point = edge.point_at(crossing.t);

                let clip_vertex = clip.push_detached(point, crossing.second.into());
                clip.splice_between(k, k_next, clip_vertex);

                let subject_vertex = subject.push_detached(point, crossing.first.into());
                clip[clip_vertex].twin = Some(subject_vertex);
                subject[subject_vertex].twin = Some(clip_vertex);

                found.push((subject_vertex, crossing.t));
            }
        }

        k = k_next;
        if k == clip_head {
            break;
        }
    }

    found.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut prev = start;
    for &(vertex, _) in &found {
        subject.link(prev, vertex);
        prev = vertex;
    }
    if !found.is_empty() {
        subject.link(prev, end);
    }
}

/// Tags every original vertex as `Inside` or `Outside`.
///
/// Walks forward from the first crossing vertex, carrying the side implied by
/// the crossings passed so far. A ring without crossings is tagged entirely
/// `Inside`; the boolean walks all gate on crossings, so a crossing-free ring
/// never contributes points either way.
fn classify<F: Float>(ring: &mut Ring<F>) {
    let head = ring.head();
    let first = ring.find_from(head, |v| v.tag.is_crossing());

    match first {
        Some(first) => {
            let mut side = if ring[first].tag == VertexTag::InToOut {
                VertexTag::Outside
            } else {
                VertexTag::Inside
            };
            let mut cur = first;
            loop {
                match ring[cur].tag {
                    VertexTag::None => ring[cur].tag = side,
                    VertexTag::InToOut => side = VertexTag::Outside,
                    VertexTag::OutToIn => side = VertexTag::Inside,
                    _ => {}
                }
                cur = ring[cur].next;
                if cur == first {
                    break;
                }
            }
        }
        None => {
            let mut cur = head;
            loop {
                ring[cur].tag = VertexTag::Inside;
                cur = ring[cur].next;
                if cur == head {
                    break;
                }
            }
        }
    }
}
