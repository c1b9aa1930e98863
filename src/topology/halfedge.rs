//! Half-edge enumeration and ordering.
//!
//! Every edge of every face is one **half-edge**: the edge as seen from that
//! face's side. This module turns a face list into a flat set of canonicalized
//! half-edge records and establishes the total order that makes records of
//! the same undirected edge contiguous. The dense adjacency builder scans
//! that sorted sequence; no semantic linking happens here.

use crate::mesh::FaceList;

/// One occurrence of an edge as seen from one incident face.
///
/// The endpoints are canonicalized so `lo <= hi`, making records of the same
/// undirected edge compare equal on their key. `corner` names the face's
/// local edge slot: the edge runs from the face's `corner`-th vertex to its
/// `(corner+1)`-th, cyclically.
///
/// The derived ordering is the load-bearing total order `(lo, hi, face,
/// corner)`: lexicographic on the edge key, ties broken by face then corner,
/// so sorting is deterministic on any input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HalfEdgeRecord {
    /// Smaller endpoint of the undirected edge.
    pub lo: usize,
    /// Larger endpoint of the undirected edge.
    pub hi: usize,
    /// The face this half-edge belongs to.
    pub face: usize,
    /// The face's local edge slot.
    pub corner: usize,
}

impl HalfEdgeRecord {
    /// Whether two records belong to the same undirected edge.
    #[inline]
    pub fn same_edge(&self, other: &HalfEdgeRecord) -> bool {
        self.lo == other.lo && self.hi == other.hi
    }
}

/// Enumerate every half-edge of a face list, in face-then-corner order.
///
/// Produces `m * arity` records, one per (face, corner) pair. Directed
/// endpoints `(F[f][c], F[f][(c+1) % arity])` are swapped where needed so
/// each record carries its canonical undirected key.
pub fn collect_half_edges<F: FaceList + ?Sized>(faces: &F) -> Vec<HalfEdgeRecord> {
    let m = faces.num_faces();
    let w = faces.arity();
    let mut records = Vec::with_capacity(m * w);

    for f in 0..m {
        for c in 0..w {
            let mut lo = faces.vertex(f, c);
            let mut hi = faces.vertex(f, (c + 1) % w);
            if lo > hi {
                std::mem::swap(&mut lo, &mut hi);
            }
            records.push(HalfEdgeRecord {
                lo,
                hi,
                face: f,
                corner: c,
            });
        }
    }

    records
}

/// Enumerate and sort all half-edges so records of one undirected edge land
/// in one contiguous run.
///
/// The sort is a total order (see [`HalfEdgeRecord`]), so the output is
/// byte-identical across repeated calls on the same input.
pub fn sorted_half_edges<F: FaceList + ?Sized>(faces: &F) -> Vec<HalfEdgeRecord> {
    let mut records = collect_half_edges(faces);
    // Total order, so unstable sorting cannot reorder equal keys.
    records.sort_unstable();
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_single_triangle() {
        let faces = [[0usize, 1, 2]];
        let records = collect_half_edges(&faces[..]);

        assert_eq!(records.len(), 3);
        assert_eq!(
            records[0],
            HalfEdgeRecord { lo: 0, hi: 1, face: 0, corner: 0 }
        );
        assert_eq!(
            records[1],
            HalfEdgeRecord { lo: 1, hi: 2, face: 0, corner: 1 }
        );
        // Directed edge (2, 0) canonicalizes to (0, 2)
        assert_eq!(
            records[2],
            HalfEdgeRecord { lo: 0, hi: 2, face: 0, corner: 2 }
        );
    }

    #[test]
    fn test_collect_counts_quads() {
        let faces = vec![vec![0usize, 1, 2, 3], vec![1, 4, 5, 2]];
        let records = collect_half_edges(&faces[..]);
        assert_eq!(records.len(), 8);

        // Wrap-around edge of the first quad: (3, 0) -> (0, 3)
        assert_eq!(
            records[3],
            HalfEdgeRecord { lo: 0, hi: 3, face: 0, corner: 3 }
        );
    }

    #[test]
    fn test_sorted_shared_edge_contiguous() {
        // Faces 0 and 1 share edge (1, 2); face 1 sees it as (2, 1).
        let faces = [[0usize, 1, 2], [1, 3, 2]];
        let records = sorted_half_edges(&faces[..]);

        let shared: Vec<_> = records
            .iter()
            .filter(|r| r.lo == 1 && r.hi == 2)
            .collect();
        assert_eq!(shared.len(), 2);
        // Tie broken by face index
        assert_eq!(shared[0].face, 0);
        assert_eq!(shared[1].face, 1);
        // And they sit next to each other in the sorted run
        let pos: Vec<_> = records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.lo == 1 && r.hi == 2)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(pos[1], pos[0] + 1);
    }

    #[test]
    fn test_sort_deterministic() {
        let faces = [[0usize, 1, 2], [1, 0, 3], [0, 1, 4], [2, 3, 4]];
        let a = sorted_half_edges(&faces[..]);
        let b = sorted_half_edges(&faces[..]);
        assert_eq!(a, b);
    }
}
