//! Dense (fixed-width) triangle-triangle adjacency.
//!
//! The dense builder sorts all half-edge records and scans immediately
//! adjacent pairs: whenever two neighboring records carry the same undirected
//! edge key, the two faces are linked across that edge. This is the classic
//! sort-and-scan construction: `O(mw log mw)` time, single-threaded, built
//! for 2-manifold meshes but degrading predictably on anything else.
//!
//! # Non-manifold degradation
//!
//! Only *sort-adjacent* records are ever compared. A unique edge shared by
//! `k > 2` faces therefore produces `k - 1` pairwise links forming a chain in
//! sort order, with each link overwriting the previous entry of the middle
//! faces — never a full neighbor set, and not necessarily symmetric. This is
//! intentional, long-standing behavior of the dense form; callers needing
//! full multiplicity use [`adjacency_lists`](crate::topology::adjacency_lists).

use nalgebra::Point3;

use crate::mesh::{CornerId, FaceId, FaceList, MeshIndex};

use super::halfedge::sorted_half_edges;

/// Fixed-width face-neighbor matrices.
///
/// `neighbor(f, c)` is the face across corner `c` of face `f`, or the invalid
/// index if the edge is unmatched (boundary edges, and edge slots never
/// linked by the scan). When built with corners, `neighbor_corner(f, c)` is
/// the corresponding edge slot on that neighbor.
#[derive(Debug, Clone)]
pub struct DenseAdjacency<I: MeshIndex = u32> {
    num_faces: usize,
    arity: usize,
    tt: Vec<FaceId<I>>,
    tti: Option<Vec<CornerId<I>>>,
}

impl<I: MeshIndex> DenseAdjacency<I> {
    /// Number of faces (rows).
    pub fn num_faces(&self) -> usize {
        self.num_faces
    }

    /// Number of edge slots per face (columns).
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// The face across corner `c` of face `f`, or the invalid index.
    #[inline]
    pub fn neighbor(&self, f: usize, c: usize) -> FaceId<I> {
        self.tt[f * self.arity + c]
    }

    /// The neighbor's corresponding edge slot, if corners were built.
    ///
    /// `None` means the matrix was built without corners; `Some(invalid)`
    /// means the edge slot itself is unmatched.
    #[inline]
    pub fn neighbor_corner(&self, f: usize, c: usize) -> Option<CornerId<I>> {
        self.tti.as_ref().map(|tti| tti[f * self.arity + c])
    }

    /// Whether the corner cross-reference matrix was built.
    pub fn has_corners(&self) -> bool {
        self.tti.is_some()
    }

    /// All neighbor entries of face `f`, one per edge slot.
    pub fn neighbors_of(&self, f: usize) -> &[FaceId<I>] {
        &self.tt[f * self.arity..(f + 1) * self.arity]
    }

    /// Whether the edge at corner `c` of face `f` has no matched neighbor.
    #[inline]
    pub fn is_boundary(&self, f: usize, c: usize) -> bool {
        !self.neighbor(f, c).is_valid()
    }
}

/// Compute dense face-neighbor adjacency.
///
/// `vertices` is accepted for call symmetry with geometric queries and never
/// read; adjacency is purely combinatorial. Accepts any fixed arity >= 3.
///
/// # Example
///
/// ```
/// use seam::prelude::*;
/// use nalgebra::Point3;
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.5, 1.0, 0.0),
///     Point3::new(0.5, -1.0, 0.0),
/// ];
/// // Two triangles sharing edge (1, 2)
/// let faces = [[0usize, 1, 2], [1, 3, 2]];
///
/// let adj: DenseAdjacency = dense_adjacency(&vertices, &faces[..]);
/// assert_eq!(adj.neighbor(0, 1), FaceId::new(1));
/// assert!(adj.is_boundary(0, 0));
/// ```
pub fn dense_adjacency<I: MeshIndex, F: FaceList + ?Sized>(
    vertices: &[Point3<f64>],
    faces: &F,
) -> DenseAdjacency<I> {
    build_dense(vertices, faces, false)
}

/// Compute dense face-neighbor adjacency together with the corner
/// cross-reference matrix.
///
/// The corner matrix enables fast traversal: crossing from `(f, c)` lands on
/// face `neighbor(f, c)` at its edge slot `neighbor_corner(f, c)`.
pub fn dense_adjacency_with_corners<I: MeshIndex, F: FaceList + ?Sized>(
    vertices: &[Point3<f64>],
    faces: &F,
) -> DenseAdjacency<I> {
    build_dense(vertices, faces, true)
}

fn build_dense<I: MeshIndex, F: FaceList + ?Sized>(
    _vertices: &[Point3<f64>],
    faces: &F,
    with_corners: bool,
) -> DenseAdjacency<I> {
    let m = faces.num_faces();
    let w = faces.arity();

    let records = sorted_half_edges(faces);

    let mut tt = vec![FaceId::invalid(); m * w];
    let mut tti = with_corners.then(|| vec![CornerId::invalid(); m * w]);

    for pair in records.windows(2) {
        let (r1, r2) = (&pair[0], &pair[1]);
        if r1.same_edge(r2) {
            tt[r1.face * w + r1.corner] = FaceId::new(r2.face);
            tt[r2.face * w + r2.corner] = FaceId::new(r1.face);
            if let Some(tti) = tti.as_mut() {
                tti[r1.face * w + r1.corner] = CornerId::new(r2.corner);
                tti[r2.face * w + r2.corner] = CornerId::new(r1.corner);
            }
        }
    }

    log::trace!(
        "dense adjacency: {} faces, arity {}, {} half-edges",
        m,
        w,
        records.len()
    );

    DenseAdjacency {
        num_faces: m,
        arity: w,
        tt,
        tti,
    }
}
