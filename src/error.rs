//! Error types for seam.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias using [`TopologyError`].
pub type Result<T> = std::result::Result<T, TopologyError>;

/// Errors that can occur while building adjacency structures.
///
/// All variants are precondition violations: the call returns an error
/// before any output is produced, never a partial result. Out-of-range
/// vertex indices are *not* checked here; validating them is the
/// responsibility of the layer that owns the vertex set.
#[derive(Error, Debug)]
pub enum TopologyError {
    /// A triangle-only entry point received a face with a different arity.
    #[error("face {face} has {arity} vertices, expected a triangle")]
    NonTriangularFace {
        /// The offending face index.
        face: usize,
        /// The number of vertices the face actually has.
        arity: usize,
    },

    /// A caller-supplied directed-edge table does not have `3m` rows.
    #[error("directed edge table has {rows} rows, expected a multiple of three")]
    MalformedEdgeTable {
        /// The number of rows in the supplied table.
        rows: usize,
    },

    /// A caller-supplied edge-id map does not cover the directed-edge table.
    #[error("edge-id map has {map_len} entries but the edge table has {rows} rows")]
    MismatchedEdgeMap {
        /// Length of the supplied edge-id map.
        map_len: usize,
        /// Number of rows in the directed-edge table.
        rows: usize,
    },
}
