//! List-valued (non-manifold-safe) triangle-triangle adjacency.
//!
//! Where the dense form caps each edge slot at one neighbor, the list-valued
//! form records, per face and corner, *every* other face incident to the
//! unique edge at that corner. A multiplicity-k edge yields a length k-1 list
//! on each of its k faces, so branching (non-manifold) edges are represented
//! with full fidelity. Triangle meshes only.
//!
//! The builder walks the `(face, corner)` index space against a
//! [`UniqueEdgeMap`]. Each slot's output is written by exactly one unit of
//! work and never read during the pass, so the loop parallelizes over faces
//! with no locking; whether it actually runs in parallel is a scheduling
//! heuristic (see [`AdjacencyListsOptions`]) that never changes the output.

use rayon::prelude::*;

use crate::error::Result;
use crate::mesh::{CornerId, FaceId, FaceList, MeshIndex};

use super::edge_map::UniqueEdgeMap;

/// Minimum number of directed edges before the face loop runs in parallel.
/// Below this, thread spawn overhead outweighs the work.
const PARALLEL_MIN_EDGES: usize = 1000;

/// Options for the list-valued adjacency builder.
#[derive(Debug, Clone)]
pub struct AdjacencyListsOptions {
    /// Whether to also build the neighbor-corner lists (default: true).
    pub with_corners: bool,

    /// Whether to allow parallel execution (default: true). Parallelism only
    /// engages above a minimum work size and never affects the output.
    pub parallel: bool,
}

impl Default for AdjacencyListsOptions {
    fn default() -> Self {
        Self {
            with_corners: true,
            parallel: true,
        }
    }
}

impl AdjacencyListsOptions {
    /// Set whether to build the neighbor-corner lists.
    pub fn with_corners(mut self, with_corners: bool) -> Self {
        self.with_corners = with_corners;
        self
    }

    /// Set whether to allow parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Create options for single-threaded execution.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

/// Per-(face, corner) neighbor lists.
///
/// `neighbors(f, c)` lists all other faces incident to the unique edge at
/// corner `c` of face `f`, in the unique-edge map's deterministic occurrence
/// order. `f` itself is never included, so a multiplicity-k edge gives every
/// incident face a list of length k-1.
#[derive(Debug, Clone)]
pub struct AdjacencyLists<I: MeshIndex = u32> {
    tt: Vec<[Vec<FaceId<I>>; 3]>,
    tti: Option<Vec<[Vec<CornerId<I>>; 3]>>,
}

impl<I: MeshIndex> AdjacencyLists<I> {
    /// Number of faces.
    pub fn num_faces(&self) -> usize {
        self.tt.len()
    }

    /// All other faces incident to the edge at corner `c` of face `f`.
    #[inline]
    pub fn neighbors(&self, f: usize, c: usize) -> &[FaceId<I>] {
        &self.tt[f][c]
    }

    /// The neighbors' own corner slots for that edge, if corners were built.
    ///
    /// Parallel to [`neighbors`](Self::neighbors): the `i`-th corner belongs
    /// to the `i`-th neighbor face.
    #[inline]
    pub fn neighbor_corners(&self, f: usize, c: usize) -> Option<&[CornerId<I>]> {
        self.tti.as_ref().map(|tti| tti[f][c].as_slice())
    }

    /// Whether the neighbor-corner lists were built.
    pub fn has_corners(&self) -> bool {
        self.tti.is_some()
    }

    /// Whether the edge at corner `c` of face `f` has no other incident face.
    #[inline]
    pub fn is_boundary(&self, f: usize, c: usize) -> bool {
        self.tt[f][c].is_empty()
    }
}

/// Compute list-valued adjacency for a triangle face list, with default
/// options (corners built, parallelism allowed).
///
/// The unique-edge index is built internally; use
/// [`adjacency_lists_from_edge_map`] to supply one.
///
/// # Errors
///
/// Returns [`TopologyError::NonTriangularFace`](crate::error::TopologyError)
/// if the face list's arity is not 3.
///
/// # Example
///
/// ```
/// use seam::prelude::*;
///
/// // Three triangles all sharing edge (0, 1)
/// let faces = [[0usize, 1, 2], [1, 0, 3], [0, 1, 4]];
/// let adj: AdjacencyLists = adjacency_lists(&faces[..]).unwrap();
///
/// // Every face sees both of the other two across that edge
/// assert_eq!(adj.neighbors(0, 0), &[FaceId::new(1), FaceId::new(2)]);
/// assert_eq!(adj.neighbors(1, 0), &[FaceId::new(0), FaceId::new(2)]);
/// assert_eq!(adj.neighbors(2, 0), &[FaceId::new(0), FaceId::new(1)]);
/// ```
pub fn adjacency_lists<I: MeshIndex, F: FaceList + ?Sized>(
    faces: &F,
) -> Result<AdjacencyLists<I>> {
    adjacency_lists_with(faces, &AdjacencyListsOptions::default())
}

/// Compute list-valued adjacency with explicit options.
///
/// # Errors
///
/// Returns [`TopologyError::NonTriangularFace`](crate::error::TopologyError)
/// if the face list's arity is not 3.
pub fn adjacency_lists_with<I: MeshIndex, F: FaceList + ?Sized>(
    faces: &F,
    options: &AdjacencyListsOptions,
) -> Result<AdjacencyLists<I>> {
    let edge_map = UniqueEdgeMap::from_triangles(faces)?;
    Ok(adjacency_lists_from_edge_map(&edge_map, options))
}

/// Compute list-valued adjacency from a caller-supplied unique-edge index.
///
/// This is the collaborator boundary: the index must honor the corner-major
/// row layout documented on [`UniqueEdgeMap`], or the recovered neighbor
/// faces are silently wrong.
pub fn adjacency_lists_from_edge_map<I: MeshIndex>(
    edge_map: &UniqueEdgeMap<I>,
    options: &AdjacencyListsOptions,
) -> AdjacencyLists<I> {
    let m = edge_map.num_faces();
    let with_corners = options.with_corners;

    // One closure per face: fills that face's three slots and nothing else,
    // so the parallel and sequential paths produce identical rows.
    let build_face = |f: usize| -> [(Vec<FaceId<I>>, Vec<CornerId<I>>); 3] {
        std::array::from_fn(|c| {
            let e = edge_map.row_of(f, c);
            let occurrences = edge_map.occurrences(edge_map.unique_of(e));

            let mut faces = Vec::with_capacity(occurrences.len().saturating_sub(1));
            let mut corners = Vec::new();
            if with_corners {
                corners.reserve(occurrences.len().saturating_sub(1));
            }

            // Skip the slot's own row; a simplicial mesh never lists the
            // same face twice for one unique edge, so no further filtering
            // is needed.
            for &ne in occurrences {
                if ne == e {
                    continue;
                }
                faces.push(FaceId::new(edge_map.face_of(ne)));
                if with_corners {
                    corners.push(CornerId::new(edge_map.corner_of(ne)));
                }
            }
            (faces, corners)
        })
    };

    let run_parallel = options.parallel && edge_map.num_directed_edges() > PARALLEL_MIN_EDGES;
    log::trace!(
        "adjacency lists: {} faces, parallel = {}",
        m,
        run_parallel
    );

    let rows: Vec<[(Vec<FaceId<I>>, Vec<CornerId<I>>); 3]> = if run_parallel {
        (0..m).into_par_iter().map(build_face).collect()
    } else {
        (0..m).map(build_face).collect()
    };

    let mut tt = Vec::with_capacity(m);
    let mut tti = with_corners.then(|| Vec::with_capacity(m));
    for row in rows {
        let [(f0, c0), (f1, c1), (f2, c2)] = row;
        tt.push([f0, f1, f2]);
        if let Some(tti) = tti.as_mut() {
            tti.push([c0, c1, c2]);
        }
    }

    AdjacencyLists { tt, tti }
}
