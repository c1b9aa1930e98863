//! Core mesh input types.
//!
//! This module provides the building blocks the adjacency algorithms consume:
//! type-safe element indices and the face-list input abstraction.
//!
//! # Index Types
//!
//! Mesh elements are identified by type-safe index wrappers:
//! - [`VertexId`] - Identifies a vertex
//! - [`FaceId`] - Identifies a face
//! - [`CornerId`] - Identifies a face's local edge slot
//! - [`HalfEdgeId`] - Identifies a row of the directed-edge table
//! - [`EdgeId`] - Identifies a unique (undirected) edge
//!
//! These indices are generic over the underlying integer type ([`MeshIndex`] trait),
//! allowing you to choose `u16`, `u32`, or `u64` based on mesh size. The invalid
//! index of each type is the sentinel marking "no neighbor" in dense output.
//!
//! # Face Lists
//!
//! Input meshes are plain face lists seen through the [`FaceList`] trait:
//!
//! ```
//! use seam::mesh::FaceList;
//!
//! let faces = [[0usize, 1, 2], [1, 3, 2]];
//! let list: &[[usize; 3]] = &faces;
//! assert_eq!(list.num_faces(), 2);
//! assert_eq!(list.arity(), 3);
//! ```

mod faces;
mod index;

pub use faces::{ensure_triangles, FaceList};
pub use index::{CornerId, EdgeId, FaceId, HalfEdgeId, MeshIndex, VertexId};
