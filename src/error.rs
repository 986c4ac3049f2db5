//! Error types for catclark.
//!
//! This module defines all error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

use crate::mesh::{FaceId, Point};

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur during mesh operations.
#[derive(Error, Debug)]
pub enum MeshError {
    /// The mesh has no faces.
    #[error("mesh has no faces")]
    EmptyMesh,

    /// A face references an invalid vertex index.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A face has duplicate vertices (degenerate quad).
    #[error("face {face} is degenerate (has duplicate vertices)")]
    DegenerateFace {
        /// The face index.
        face: usize,
    },

    /// An average was requested over zero points.
    #[error("cannot average an empty set of points")]
    EmptyAverage,

    /// An edge is not shared by exactly two faces.
    #[error("edge {v0} - {v1} has {} incident faces {faces:?}, expected 2", .faces.len())]
    NonManifoldEdge {
        /// First vertex of the edge.
        v0: Point,
        /// Second vertex of the edge.
        v1: Point,
        /// Faces that contain the edge.
        faces: Vec<FaceId>,
    },

    /// A corner does not have exactly two bounding edges inside one of its faces.
    #[error("corner {corner} has {found} bounding edges in face {face}, expected 2")]
    BoundingEdges {
        /// The corner point.
        corner: Point,
        /// The face being split around the corner.
        face: FaceId,
        /// Number of bounding edges found.
        found: usize,
    },

    /// The two bounding edges of a corner do not share exactly one face.
    #[error("bounding edges of corner {corner} in face {face} share faces {candidates:?}, expected exactly one")]
    AmbiguousCommonFace {
        /// The corner point.
        corner: Point,
        /// The face being split around the corner.
        face: FaceId,
        /// Faces shared by both bounding edges.
        candidates: Vec<FaceId>,
    },

    /// A subdivision pass would exceed the configured face budget.
    #[error("subdivision would exceed maximum mesh size ({current} -> {projected} faces, max {max})")]
    MeshTooLarge {
        /// Current face count.
        current: usize,
        /// Projected face count after the pass.
        projected: usize,
        /// Maximum allowed face count.
        max: usize,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error saving mesh to file.
    #[error("failed to save mesh to {path}: {message}")]
    SaveError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Unsupported file format.
    #[error("unsupported file format: {extension}")]
    UnsupportedFormat {
        /// The file extension.
        extension: String,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },
}

impl MeshError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        MeshError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }

    /// Whether this error reports broken mesh connectivity (an open or
    /// non-manifold mesh).
    pub fn is_topology_error(&self) -> bool {
        matches!(
            self,
            MeshError::NonManifoldEdge { .. } | MeshError::BoundingEdges { .. }
        )
    }
}
