//! Winding of a face relative to a seam edge, and the loop transforms that
//! line up two mirrored faces.
//!
//! A mirror reflection reverses winding order, so the right face of a pair
//! is read backwards relative to the left one. Which reading is correct also
//! depends on the direction each side's seam edge happens to be stored in;
//! [`Traversal`] captures that per face and [`Parity`] compares two faces.
//!
//! All transforms are cyclic rotations and reversals applied in place. A
//! vertex loop and its co-rotational edge loop are transformed separately
//! (each is aligned to its own seam element), so callers work on scratch
//! copies and never break the stored alignment.

use core::fmt::{Debug, Formatter};

use itertools::Itertools;

use crate::topology::ids::{EdgeId, VertexId};
use crate::topology::mesh::find_local_index;

/// Direction in which a face loop walks an edge.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum Traversal {
    /// The edge's `(v0, v1)` appear as consecutive loop entries.
    Forward,
    /// The edge is walked `v1 -> v0` (or not at all).
    Backward,
}

impl Debug for Traversal {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Traversal::Forward => f.write_str("Forward"),
            Traversal::Backward => f.write_str("Backward"),
        }
    }
}

impl Traversal {
    /// Classify how `face_loop` walks the ordered pair `endpoints`.
    #[inline]
    pub fn of(face_loop: &[VertexId], endpoints: [VertexId; 2]) -> Self {
        if is_forward_traversal(face_loop, endpoints) {
            Traversal::Forward
        } else {
            Traversal::Backward
        }
    }

    /// Relative parity of two traversals.
    /// Compose = XOR on the flip bit, as for a 1-bit orientation group.
    #[inline]
    pub fn parity(self, other: Traversal) -> Parity {
        if self == other {
            Parity::Same
        } else {
            Parity::Opposite
        }
    }
}

/// Whether two mirrored faces walk their seam edges in the same absolute direction.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Parity {
    /// Both forward or both backward.
    Same,
    /// One forward, one backward: the usual case for a consistently wound mesh.
    Opposite,
}

/// True iff `(endpoints[0], endpoints[1])` appear as `(loop[i], loop[i + 1 mod n])` for some `i`.
#[inline]
pub fn is_forward_traversal(face_loop: &[VertexId], endpoints: [VertexId; 2]) -> bool {
    let [a, b] = endpoints;
    face_loop
        .iter()
        .copied()
        .circular_tuple_windows()
        .any(|(u, v)| u == a && v == b)
}

/// Cyclically left-rotate `items` so that `start` becomes element 0.
///
/// Returns the offset that was applied, or `None` if `start` is absent.
#[inline]
pub fn align_loop_to_start<T: PartialEq + Copy>(items: &mut [T], start: T) -> Option<usize> {
    let offset = find_local_index(items, start)?;
    items.rotate_left(offset);
    Some(offset)
}

/// Reverse the loop, then rotate so the former last element leads again.
#[inline]
fn reverse_keep_lead<T>(items: &mut [T]) {
    items.reverse();
    items.rotate_right(1);
}

/// Transform the right face's vertex loop so entry `i` mirrors entry `i` of
/// the left loop.
///
/// `right` must already be aligned to start at `seam[0]`, the first endpoint
/// of the right seam edge. For [`Parity::Same`] the loop is first re-aligned
/// to `seam[1]`; in both cases it is then reversed with its lead kept in place.
/// Returns `None` if the second seam endpoint is missing from the loop.
pub fn mirror_right_loop(
    right: &mut [VertexId],
    seam: [VertexId; 2],
    parity: Parity,
) -> Option<()> {
    if parity == Parity::Same {
        align_loop_to_start(right, seam[1])?;
    }
    reverse_keep_lead(right);
    Some(())
}

/// Align the right face's edge loop to its seam edge and mirror it.
///
/// No parity branch is needed: the seam edge itself is the fixed lead and the
/// remaining edges only have to be read in reverse winding.
pub fn mirror_edge_loop(right: &mut [EdgeId], seam: EdgeId) -> Option<()> {
    align_loop_to_start(right, seam)?;
    reverse_keep_lead(right);
    Some(())
}
