//! Unique-edge index for triangle meshes.
//!
//! Buckets every directed edge (half-edge occurrence) of a triangle mesh into
//! its undirected-edge equivalence class. The index is the substrate of the
//! list-valued adjacency builder and the explicit contract boundary for
//! callers that already hold an equivalent structure.
//!
//! # Layout contract
//!
//! The directed-edge table has `3m` rows **grouped by corner**: rows
//! `[0, m)` hold every face's corner-0 edge, `[m, 2m)` corner-1, `[2m, 3m)`
//! corner-2. Row `f + m*c` is the directed edge `(F[f][c], F[f][(c+1)%3])`.
//! This grouping is load-bearing: consumers recover the owning face and
//! corner of row `e` as `e % m` and `e / m`. A substitute index supplied via
//! [`UniqueEdgeMap::from_parts`] must honor it exactly, or neighbor-index
//! arithmetic silently produces wrong faces.

use std::collections::HashMap;

use crate::error::{Result, TopologyError};
use crate::mesh::{ensure_triangles, EdgeId, FaceList, HalfEdgeId, MeshIndex, VertexId};

/// Maps every directed edge of a triangle mesh to its unique (undirected)
/// edge, and every unique edge back to all its occurrences.
///
/// Unique-edge ids are assigned in order of first occurrence during the row
/// scan, and each occurrence list keeps row-scan order, so the whole
/// structure is deterministic for a given face list.
#[derive(Debug, Clone)]
pub struct UniqueEdgeMap<I: MeshIndex = u32> {
    num_faces: usize,
    /// Directed-edge table `E`, row `f + m*c`.
    directed: Vec<[VertexId<I>; 2]>,
    /// Canonical endpoints (`lo <= hi`) per unique edge.
    unique: Vec<[VertexId<I>; 2]>,
    /// `EMAP`: directed-edge row -> unique-edge id.
    edge_to_unique: Vec<EdgeId<I>>,
    /// Reverse map: unique-edge id -> contributing rows, in row-scan order.
    unique_to_directed: Vec<Vec<HalfEdgeId<I>>>,
}

impl<I: MeshIndex> UniqueEdgeMap<I> {
    /// Build the index from a triangle face list.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::NonTriangularFace`] if the list's arity is
    /// not 3; no output is produced in that case.
    pub fn from_triangles<F: FaceList + ?Sized>(faces: &F) -> Result<Self> {
        ensure_triangles(faces)?;
        let m = faces.num_faces();

        // Row f + m*c, so fill corner-major.
        let mut directed = Vec::with_capacity(3 * m);
        for c in 0..3 {
            for f in 0..m {
                directed.push([
                    VertexId::new(faces.vertex(f, c)),
                    VertexId::new(faces.vertex(f, (c + 1) % 3)),
                ]);
            }
        }

        let mut unique = Vec::new();
        let mut edge_to_unique = Vec::with_capacity(directed.len());
        let mut unique_to_directed: Vec<Vec<HalfEdgeId<I>>> = Vec::new();
        let mut seen: HashMap<(usize, usize), usize> = HashMap::new();

        for (e, row) in directed.iter().enumerate() {
            let (a, b) = (row[0].index(), row[1].index());
            let key = if a <= b { (a, b) } else { (b, a) };
            let uid = *seen.entry(key).or_insert_with(|| {
                unique.push([VertexId::new(key.0), VertexId::new(key.1)]);
                unique_to_directed.push(Vec::new());
                unique.len() - 1
            });
            edge_to_unique.push(EdgeId::new(uid));
            unique_to_directed[uid].push(HalfEdgeId::new(e));
        }

        log::debug!(
            "unique edge map: {} faces, {} directed edges, {} unique edges",
            m,
            directed.len(),
            unique.len()
        );

        Ok(Self {
            num_faces: m,
            directed,
            unique,
            edge_to_unique,
            unique_to_directed,
        })
    }

    /// Assemble the index from parts built elsewhere.
    ///
    /// This is the collaborator boundary: `directed` must follow the
    /// corner-major row layout described at the module level, `edge_to_unique`
    /// maps each row to its unique-edge id, and `unique_to_directed` lists
    /// each unique edge's contributing rows.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::MalformedEdgeTable`] if the table's row count
    /// is not a multiple of three, or [`TopologyError::MismatchedEdgeMap`] if
    /// `edge_to_unique` does not cover the table.
    pub fn from_parts(
        directed: Vec<[VertexId<I>; 2]>,
        edge_to_unique: Vec<EdgeId<I>>,
        unique_to_directed: Vec<Vec<HalfEdgeId<I>>>,
    ) -> Result<Self> {
        if directed.len() % 3 != 0 {
            return Err(TopologyError::MalformedEdgeTable {
                rows: directed.len(),
            });
        }
        if edge_to_unique.len() != directed.len() {
            return Err(TopologyError::MismatchedEdgeMap {
                map_len: edge_to_unique.len(),
                rows: directed.len(),
            });
        }

        let unique = unique_to_directed
            .iter()
            .map(|rows| {
                rows.first().map_or([VertexId::invalid(); 2], |&e| {
                    let [a, b] = directed[e.index()];
                    if a <= b {
                        [a, b]
                    } else {
                        [b, a]
                    }
                })
            })
            .collect();

        Ok(Self {
            num_faces: directed.len() / 3,
            directed,
            unique,
            edge_to_unique,
            unique_to_directed,
        })
    }

    /// Number of faces `m` in the underlying mesh.
    pub fn num_faces(&self) -> usize {
        self.num_faces
    }

    /// Number of directed-edge rows (`3m`).
    pub fn num_directed_edges(&self) -> usize {
        self.directed.len()
    }

    /// Number of unique (undirected) edges.
    pub fn num_unique_edges(&self) -> usize {
        self.unique.len()
    }

    /// Directed endpoints of row `e`.
    #[inline]
    pub fn directed_edge(&self, e: HalfEdgeId<I>) -> [VertexId<I>; 2] {
        self.directed[e.index()]
    }

    /// Canonical (`lo <= hi`) endpoints of unique edge `u`.
    #[inline]
    pub fn unique_edge(&self, u: EdgeId<I>) -> [VertexId<I>; 2] {
        self.unique[u.index()]
    }

    /// The unique edge that row `e` belongs to.
    #[inline]
    pub fn unique_of(&self, e: HalfEdgeId<I>) -> EdgeId<I> {
        self.edge_to_unique[e.index()]
    }

    /// All rows contributing to unique edge `u`, in row-scan order.
    #[inline]
    pub fn occurrences(&self, u: EdgeId<I>) -> &[HalfEdgeId<I>] {
        &self.unique_to_directed[u.index()]
    }

    /// The directed-edge row of face `f` at corner `c`.
    #[inline]
    pub fn row_of(&self, f: usize, c: usize) -> HalfEdgeId<I> {
        HalfEdgeId::new(f + self.num_faces * c)
    }

    /// The face owning row `e`.
    #[inline]
    pub fn face_of(&self, e: HalfEdgeId<I>) -> usize {
        e.index() % self.num_faces
    }

    /// The corner of row `e` on its owning face.
    #[inline]
    pub fn corner_of(&self, e: HalfEdgeId<I>) -> usize {
        e.index() / self.num_faces
    }

    /// Number of half-edge occurrences of unique edge `u`.
    ///
    /// 1 = boundary, 2 = manifold interior, >2 = non-manifold.
    #[inline]
    pub fn multiplicity(&self, u: EdgeId<I>) -> usize {
        self.unique_to_directed[u.index()].len()
    }

    /// Whether unique edge `u` lies on the mesh boundary (multiplicity 1).
    pub fn is_boundary_edge(&self, u: EdgeId<I>) -> bool {
        self.multiplicity(u) == 1
    }

    /// Whether unique edge `u` is manifold (multiplicity 2).
    pub fn is_manifold_edge(&self, u: EdgeId<I>) -> bool {
        self.multiplicity(u) == 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_triangle() {
        let faces = [[0usize, 1, 2]];
        let map: UniqueEdgeMap = UniqueEdgeMap::from_triangles(&faces[..]).unwrap();

        assert_eq!(map.num_faces(), 1);
        assert_eq!(map.num_directed_edges(), 3);
        assert_eq!(map.num_unique_edges(), 3);
        for u in 0..3 {
            let u = EdgeId::new(u);
            assert!(map.is_boundary_edge(u));
        }
    }

    #[test]
    fn test_corner_major_layout() {
        let faces = [[0usize, 1, 2], [1, 3, 2]];
        let map: UniqueEdgeMap = UniqueEdgeMap::from_triangles(&faces[..]).unwrap();

        // Row f + m*c with m = 2: row 3 is face 1, corner 1 -> edge (3, 2).
        let e = map.row_of(1, 1);
        assert_eq!(e.index(), 3);
        assert_eq!(map.directed_edge(e), [VertexId::new(3), VertexId::new(2)]);
        assert_eq!(map.face_of(e), 1);
        assert_eq!(map.corner_of(e), 1);
    }

    #[test]
    fn test_shared_edge_multiplicity() {
        // Edge (1, 2) shared by both faces; the other four edges are boundary.
        let faces = [[0usize, 1, 2], [1, 3, 2]];
        let map: UniqueEdgeMap = UniqueEdgeMap::from_triangles(&faces[..]).unwrap();

        assert_eq!(map.num_unique_edges(), 5);

        let shared = map.unique_of(map.row_of(0, 1));
        assert_eq!(map.multiplicity(shared), 2);
        assert!(map.is_manifold_edge(shared));
        assert_eq!(
            map.unique_edge(shared),
            [VertexId::new(1), VertexId::new(2)]
        );

        // Both occurrences resolve to the expected (face, corner) pairs.
        let occ = map.occurrences(shared);
        assert_eq!(occ.len(), 2);
        let pairs: Vec<_> = occ.iter().map(|&e| (map.face_of(e), map.corner_of(e))).collect();
        assert!(pairs.contains(&(0, 1)));
        assert!(pairs.contains(&(1, 2)));
    }

    #[test]
    fn test_non_manifold_multiplicity() {
        let faces = [[0usize, 1, 2], [1, 0, 3], [0, 1, 4]];
        let map: UniqueEdgeMap = UniqueEdgeMap::from_triangles(&faces[..]).unwrap();

        let u = map.unique_of(map.row_of(0, 0));
        assert_eq!(map.multiplicity(u), 3);
        assert!(!map.is_manifold_edge(u));
        assert!(!map.is_boundary_edge(u));
    }

    #[test]
    fn test_every_row_in_exactly_one_bucket() {
        let faces = [[0usize, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]];
        let map: UniqueEdgeMap = UniqueEdgeMap::from_triangles(&faces[..]).unwrap();

        let mut seen = vec![0usize; map.num_directed_edges()];
        for u in 0..map.num_unique_edges() {
            for &e in map.occurrences(EdgeId::new(u)) {
                seen[e.index()] += 1;
                assert_eq!(map.unique_of(e), EdgeId::new(u));
            }
        }
        assert!(seen.iter().all(|&n| n == 1));
    }

    #[test]
    fn test_deterministic_ids() {
        let faces = [[0usize, 1, 2], [1, 3, 2], [3, 4, 2]];
        let a: UniqueEdgeMap = UniqueEdgeMap::from_triangles(&faces[..]).unwrap();
        let b: UniqueEdgeMap = UniqueEdgeMap::from_triangles(&faces[..]).unwrap();

        assert_eq!(a.num_unique_edges(), b.num_unique_edges());
        for e in 0..a.num_directed_edges() {
            assert_eq!(a.unique_of(HalfEdgeId::new(e)), b.unique_of(HalfEdgeId::new(e)));
        }
        for u in 0..a.num_unique_edges() {
            assert_eq!(a.occurrences(EdgeId::new(u)), b.occurrences(EdgeId::new(u)));
        }
    }

    #[test]
    fn test_rejects_non_triangles() {
        let faces = vec![vec![0usize, 1, 2, 3]];
        let err = UniqueEdgeMap::<u32>::from_triangles(&faces[..]).unwrap_err();
        assert!(matches!(err, TopologyError::NonTriangularFace { .. }));
    }

    #[test]
    fn test_from_parts_roundtrip() {
        let faces = [[0usize, 1, 2], [1, 3, 2]];
        let built: UniqueEdgeMap = UniqueEdgeMap::from_triangles(&faces[..]).unwrap();

        let rebuilt: UniqueEdgeMap = UniqueEdgeMap::from_parts(
            built.directed.clone(),
            built.edge_to_unique.clone(),
            built.unique_to_directed.clone(),
        )
        .unwrap();

        assert_eq!(rebuilt.num_faces(), 2);
        assert_eq!(rebuilt.num_unique_edges(), built.num_unique_edges());
        let u = rebuilt.unique_of(rebuilt.row_of(0, 1));
        assert_eq!(
            rebuilt.unique_edge(u),
            [VertexId::new(1), VertexId::new(2)]
        );
    }

    #[test]
    fn test_from_parts_validation() {
        let err = UniqueEdgeMap::<u32>::from_parts(
            vec![[VertexId::new(0), VertexId::new(1)]; 4],
            vec![EdgeId::new(0); 4],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, TopologyError::MalformedEdgeTable { rows: 4 }));

        let err = UniqueEdgeMap::<u32>::from_parts(
            vec![[VertexId::new(0), VertexId::new(1)]; 3],
            vec![EdgeId::new(0); 2],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TopologyError::MismatchedEdgeMap { map_len: 2, rows: 3 }
        ));
    }
}
