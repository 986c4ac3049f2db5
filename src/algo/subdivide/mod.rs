//! Catmull-Clark subdivision of closed quad meshes.
//!
//! Catmull-Clark subdivision (Catmull & Clark, 1978) is an approximating
//! subdivision scheme for quad meshes. Each pass:
//!
//! 1. Creates a face point at each face centroid
//! 2. Creates an edge point for each edge from its end points and the face
//!    points on either side
//! 3. Moves every original corner using a weighted average of its neighbors
//! 4. Replaces each face with four quads, one per corner
//!
//! All arithmetic is exact, so the same input always produces exactly the same
//! points, and vertices are matched across faces by coordinate equality.
//!
//! Each pass is a pure function from one [`QuadMesh`](crate::mesh::QuadMesh)
//! to a new one. Topology is rebuilt from scratch every pass.
//!
//! # Example
//!
//! ```
//! use catclark::algo::subdivide::{catmull_clark_subdivide, SubdivideOptions};
//! use catclark::mesh::unit_cube;
//!
//! let cube = unit_cube();
//! let smooth = catmull_clark_subdivide(&cube, &SubdivideOptions::new(2)).unwrap();
//! assert_eq!(smooth.num_faces(), 6 * 16);
//! ```
//!
//! # References
//!
//! - Catmull, E. & Clark, J. (1978). "Recursively generated B-spline surfaces
//!   on arbitrary topological meshes." Computer-Aided Design, 10(6), 350-355.

mod catmull_clark;
mod rebuild;
pub mod rules;

pub use catmull_clark::{catmull_clark_subdivide, catmull_clark_subdivide_with_progress, refine};
pub use crate::mesh::TopologyPolicy;

use crate::error::{MeshError, Result};

/// Options for subdivision.
#[derive(Debug, Clone)]
pub struct SubdivideOptions {
    /// Number of subdivision iterations.
    pub iterations: usize,

    /// Whether to rebuild corners in parallel (default: true).
    pub parallel: bool,

    /// How broken connectivity is handled (default: strict).
    pub policy: TopologyPolicy,

    /// Maximum number of faces a pass may produce.
    pub max_faces: usize,
}

impl Default for SubdivideOptions {
    fn default() -> Self {
        Self {
            iterations: 3,
            parallel: true,
            policy: TopologyPolicy::Strict,
            max_faces: 10_000_000,
        }
    }
}

impl SubdivideOptions {
    /// Create options with the specified number of iterations.
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }

    /// Set whether to use parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Create options for single-threaded execution.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set how integrity violations are handled.
    pub fn with_policy(mut self, policy: TopologyPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Log and skip integrity violations instead of failing.
    pub fn lenient(self) -> Self {
        self.with_policy(TopologyPolicy::Lenient)
    }

    /// Set the face budget.
    pub fn with_max_faces(mut self, max_faces: usize) -> Self {
        self.max_faces = max_faces;
        self
    }

    /// Check that the options are usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_faces == 0 {
            return Err(MeshError::invalid_param(
                "max_faces",
                self.max_faces,
                "must be at least 1",
            ));
        }
        Ok(())
    }
}
