//! Triangle-triangle adjacency algorithms.
//!
//! Two independent constructions with different shapes and guarantees:
//!
//! - **Dense** ([`dense_adjacency`], [`dense_adjacency_with_corners`]): an
//!   `m x arity` neighbor matrix built by sorting half-edge records and
//!   linking sort-adjacent pairs. At most one neighbor per edge slot, so a
//!   non-manifold edge degrades to a chain of pairwise links. Any fixed
//!   arity >= 3.
//! - **List-valued** ([`adjacency_lists`] and friends): per `(face, corner)`
//!   the complete list of other incident faces, built on a
//!   [`UniqueEdgeMap`]. Full non-manifold fidelity, data-parallel over
//!   faces. Triangle meshes only.
//!
//! Both recompute from scratch on every call; nothing persists or mutates
//! across calls.

mod dense;
mod edge_map;
mod halfedge;
mod lists;

pub use dense::{dense_adjacency, dense_adjacency_with_corners, DenseAdjacency};
pub use edge_map::UniqueEdgeMap;
pub use halfedge::{collect_half_edges, sorted_half_edges, HalfEdgeRecord};
pub use lists::{
    adjacency_lists, adjacency_lists_from_edge_map, adjacency_lists_with, AdjacencyLists,
    AdjacencyListsOptions,
};
