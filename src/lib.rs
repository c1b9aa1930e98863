//! # Seam
//!
//! Triangle-triangle adjacency and edge topology for triangle meshes.
//!
//! Seam answers one question about a face list: for every triangle and every
//! one of its three edges, which other triangle(s) share that edge, and which
//! local edge slot on the neighbor corresponds? It works correctly on
//! ordinary 2-manifold meshes and degrades predictably on non-manifold
//! input, offering two output shapes:
//!
//! - **Dense matrices** for the common manifold case: one neighbor per edge
//!   slot, sentinel for boundary edges
//! - **Neighbor lists** for full non-manifold fidelity: every incident face
//!   per edge slot, whatever the edge's multiplicity
//!
//! ## Features
//!
//! - **Purely combinatorial**: vertex indices are opaque; no coordinates are
//!   ever dereferenced
//! - **Flexible indexing**: type-safe ids over 16-bit, 32-bit, or 64-bit
//!   integers
//! - **Parallel list construction**: the list-valued builder runs
//!   data-parallel over faces on large meshes
//! - **Explicit collaborator boundary**: bring your own unique-edge index,
//!   or let seam build it
//!
//! ## Quick Start
//!
//! ```
//! use seam::prelude::*;
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//!     Point3::new(0.5, -1.0, 0.0),
//! ];
//! // Two triangles sharing edge (1, 2)
//! let faces = [[0usize, 1, 2], [1, 3, 2]];
//!
//! // Dense form: one neighbor per edge slot
//! let dense: DenseAdjacency = dense_adjacency_with_corners(&vertices, &faces[..]);
//! assert_eq!(dense.neighbor(0, 1), FaceId::new(1));
//! assert!(dense.is_boundary(0, 0));
//!
//! // List form: all neighbors per edge slot
//! let lists: AdjacencyLists = adjacency_lists(&faces[..]).unwrap();
//! assert_eq!(lists.neighbors(0, 1), &[FaceId::new(1)]);
//! ```
//!
//! ## Non-Manifold Meshes
//!
//! The two forms differ exactly where meshes stop being manifold. On an edge
//! shared by three faces, the dense matrix can only hold a chain of pairwise
//! links, while the lists carry the complete incidence:
//!
//! ```
//! use seam::prelude::*;
//!
//! // Three triangles all sharing edge (0, 1)
//! let faces = [[0usize, 1, 2], [1, 0, 3], [0, 1, 4]];
//!
//! let lists: AdjacencyLists = adjacency_lists(&faces[..]).unwrap();
//! assert_eq!(lists.neighbors(0, 0).len(), 2);
//! assert_eq!(lists.neighbors(1, 0).len(), 2);
//! assert_eq!(lists.neighbors(2, 0).len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod mesh;
pub mod topology;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use seam::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Result, TopologyError};
    pub use crate::mesh::{CornerId, EdgeId, FaceId, FaceList, HalfEdgeId, MeshIndex, VertexId};
    pub use crate::topology::{
        adjacency_lists, adjacency_lists_from_edge_map, adjacency_lists_with, dense_adjacency,
        dense_adjacency_with_corners, AdjacencyLists, AdjacencyListsOptions, DenseAdjacency,
        UniqueEdgeMap,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;
