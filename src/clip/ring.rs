//! Circular doubly-linked vertex rings.
//!
//! A ring owns its vertices in an arena; neighbor links and cross-ring twin
//! links are indices rather than pointers, so the two rings of a clipping
//! operation can reference each other without shared ownership.

use crate::predicates::CrossingDirection;
use crate::primitives::Point2;
use num_traits::Float;
use std::ops::{Index, IndexMut};

/// Handle to a vertex within a ring's arena.
///
/// A twin handle stored on one ring indexes the arena of the opposite ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct VertexId(usize);

/// Classification of a ring vertex relative to the other polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VertexTag {
    /// Not yet classified.
    None,
    /// Crossing vertex entering the other polygon.
    OutToIn,
    /// Crossing vertex leaving the other polygon.
    InToOut,
    /// Original vertex inside the other polygon.
    Inside,
    /// Original vertex outside the other polygon.
    Outside,
}

impl VertexTag {
    /// Returns true for the two crossing classifications.
    #[inline]
    pub(crate) fn is_crossing(self) -> bool {
        matches!(self, VertexTag::OutToIn | VertexTag::InToOut)
    }
}

impl From<CrossingDirection> for VertexTag {
    fn from(direction: CrossingDirection) -> Self {
        match direction {
            CrossingDirection::OutToIn => VertexTag::OutToIn,
            CrossingDirection::InToOut => VertexTag::InToOut,
        }
    }
}

/// Traversal direction along a ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Returns the opposite direction.
    #[inline]
    pub(crate) fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// A vertex of a ring.
#[derive(Debug, Clone)]
pub(crate) struct Vertex<F> {
    pub point: Point2<F>,
    pub tag: VertexTag,
    pub visited: bool,
    /// Handle of the paired crossing vertex on the opposite ring.
    pub twin: Option<VertexId>,
    pub next: VertexId,
    pub prev: VertexId,
}

/// A non-empty cyclic doubly-linked sequence of vertices.
///
/// The ring owns every vertex it contains; dropping the ring drops them all.
/// The head is an arbitrary entry point, not a distinguished vertex.
#[derive(Debug, Clone)]
pub(crate) struct Ring<F> {
    verts: Vec<Vertex<F>>,
    head: VertexId,
}

impl<F: Float> Ring<F> {
    /// Builds a ring from a contour, wiring neighbors cyclically in order.
    pub(crate) fn from_contour(points: &[Point2<F>]) -> Self {
        debug_assert!(!points.is_empty());
        let count = points.len();
        let verts = points
            .iter()
            .enumerate()
            .map(|(i, &point)| Vertex {
                point,
                tag: VertexTag::None,
                visited: false,
                twin: None,
                next: VertexId((i + 1) % count),
                prev: VertexId((i + count - 1) % count),
            })
            .collect();
        Self {
            verts,
            head: VertexId(0),
        }
    }

    /// Returns the ring's entry vertex.
    #[inline]
    pub(crate) fn head(&self) -> VertexId {
        self.head
    }

    /// Creates a vertex that is not yet linked into the cycle.
    ///
    /// The vertex points at itself until [`Ring::link`] or
    /// [`Ring::splice_between`] threads it in.
    pub(crate) fn push_detached(&mut self, point: Point2<F>, tag: VertexTag) -> VertexId {
        let id = VertexId(self.verts.len());
        self.verts.push(Vertex {
            point,
            tag,
            visited: false,
            twin: None,
            next: id,
            prev: id,
        });
        id
    }

    /// Makes `b` the forward neighbor of `a`.
    #[inline]
    pub(crate) fn link(&mut self, a: VertexId, b: VertexId) {
        self.verts[a.0].next = b;
        self.verts[b.0].prev = a;
    }

    /// Splices `vertex` between the adjacent pair `before` and `after`.
    pub(crate) fn splice_between(&mut self, before: VertexId, after: VertexId, vertex: VertexId) {
        debug_assert_eq!(self.verts[before.0].next, after);
        self.link(before, vertex);
        self.link(vertex, after);
    }

    /// Returns the neighbor of `id` in the given direction.
    #[inline]
    pub(crate) fn neighbor(&self, id: VertexId, direction: Direction) -> VertexId {
        match direction {
            Direction::Forward => self.verts[id.0].next,
            Direction::Backward => self.verts[id.0].prev,
        }
    }

    /// Finds the first vertex matching `predicate`, walking forward from
    /// `start` (inclusive) for at most one full cycle.
    pub(crate) fn find_from<P>(&self, start: VertexId, predicate: P) -> Option<VertexId>
    where
        P: Fn(&Vertex<F>) -> bool,
    {
        let mut cur = start;
        loop {
            if predicate(&self.verts[cur.0]) {
                return Some(cur);
            }
            cur = self.verts[cur.0].next;
            if cur == start {
                return None;
            }
        }
    }

    /// Collects the vertex points in ring order, starting at the head.
    #[cfg(test)]
    pub(crate) fn points(&self) -> Vec<Point2<F>> {
        let mut out = Vec::with_capacity(self.verts.len());
        let mut cur = self.head;
        loop {
            out.push(self.verts[cur.0].point);
            cur = self.verts[cur.0].next;
            if cur == self.head {
                break;
            }
        }
        out
    }
}

impl<F> Index<VertexId> for Ring<F> {
    type Output = Vertex<F>;

    #[inline]
    fn index(&self, id: VertexId) -> &Vertex<F> {
        &self.verts[id.0]
    }
}

impl<F> IndexMut<VertexId> for Ring<F> {
    #[inline]
    fn index_mut(&mut self, id: VertexId) -> &mut Vertex<F> {
        &mut self.verts[id.0]
    }
}
