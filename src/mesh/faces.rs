//! Face-list input abstraction.
//!
//! Adjacency builders consume a mesh purely as an ordered list of faces, each
//! a fixed-arity tuple of vertex indices. The [`FaceList`] trait captures that
//! capability so callers can pass whatever container their pipeline already
//! holds — a slice of fixed-size arrays, or row vectors parsed from a file —
//! without copying into an intermediate matrix.
//!
//! Vertex indices are opaque: the builders never dereference coordinates, so
//! out-of-range indices flow through uninterpreted.

use crate::error::{Result, TopologyError};

/// An ordered list of fixed-arity faces over an external vertex set.
///
/// Implementations must return the same arity for every face; builders index
/// corners only in `[0, arity)`.
pub trait FaceList {
    /// Number of faces in the list.
    fn num_faces(&self) -> usize;

    /// Number of vertices per face (3 for triangle meshes).
    fn arity(&self) -> usize;

    /// The vertex index at `corner` of face `face`.
    fn vertex(&self, face: usize, corner: usize) -> usize;

    /// Whether the list contains no faces.
    fn is_empty(&self) -> bool {
        self.num_faces() == 0
    }
}

impl<const W: usize> FaceList for [[usize; W]] {
    #[inline]
    fn num_faces(&self) -> usize {
        self.len()
    }

    #[inline]
    fn arity(&self) -> usize {
        W
    }

    #[inline]
    fn vertex(&self, face: usize, corner: usize) -> usize {
        self[face][corner]
    }
}

impl FaceList for [Vec<usize>] {
    #[inline]
    fn num_faces(&self) -> usize {
        self.len()
    }

    #[inline]
    fn arity(&self) -> usize {
        self.first().map_or(0, Vec::len)
    }

    #[inline]
    fn vertex(&self, face: usize, corner: usize) -> usize {
        self[face][corner]
    }
}

/// Check that every face in the list is a triangle.
///
/// Triangle-only entry points call this before producing any output, so a
/// violation never yields a partial result.
pub fn ensure_triangles<F: FaceList + ?Sized>(faces: &F) -> Result<()> {
    // A homogeneous list is checked by its shared arity; ragged containers
    // surface the first offending row.
    if faces.arity() != 3 {
        return Err(TopologyError::NonTriangularFace {
            face: 0,
            arity: faces.arity(),
        });
    }
    Ok(())
}
