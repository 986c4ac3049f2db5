//! # catclark
//!
//! Exact-arithmetic Catmull-Clark subdivision for closed quad meshes.
//!
//! A [`QuadMesh`](mesh::QuadMesh) is refined by replacing every face with four
//! quads and smoothing the vertex positions. Coordinates are arbitrary
//! precision rationals, so repeated refinement never accumulates rounding
//! error and vertices can be identified by exact coordinate equality.
//! Floating point only appears when a mesh is written out.
//!
//! ## Features
//!
//! - **Exact geometry**: points with rational coordinates, usable as map keys
//! - **On-demand topology**: edges and vertex adjacency derived from the face list each pass
//! - **Typed integrity errors**: open, non-manifold and ambiguous connectivity is reported, not papered over
//! - **Parallel passes**: corners are rebuilt in parallel with deterministic output order
//! - **OBJ output**: deduplicated vertex list with 1-based face indices
//!
//! ## Quick Start
//!
//! ```
//! use catclark::prelude::*;
//!
//! let cube = unit_cube();
//! let smooth = catmull_clark_subdivide(&cube, &SubdivideOptions::new(3)).unwrap();
//! assert_eq!(smooth.num_faces(), 384);
//!
//! let stats = mesh_stats(&smooth).unwrap();
//! assert_eq!(stats.euler_characteristic(), 2);
//! ```
//!
//! ## Building Meshes Programmatically
//!
//! ```
//! use catclark::prelude::*;
//!
//! let vertices = vec![
//!     Point::from_integers(0, 0, 0),
//!     Point::from_integers(1, 0, 0),
//!     Point::from_integers(1, 1, 0),
//!     Point::from_integers(0, 1, 0),
//! ];
//! let quad = build_from_quads(&vertices, &[[0, 1, 2, 3]]).unwrap();
//!
//! // A lone quad is open: its edges border only one face.
//! let err = catmull_clark_subdivide(&quad, &SubdivideOptions::new(1)).unwrap_err();
//! assert!(err.is_topology_error());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod io;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use catclark::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::subdivide::{
        catmull_clark_subdivide, refine, SubdivideOptions, TopologyPolicy,
    };
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::{
        build_from_quads, mesh_stats, unit_cube, Edge, Face, FaceId, MeshStats, Point, QuadMesh,
        Topology,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_cube() {
        let cube = unit_cube();

        assert_eq!(cube.num_vertices(), 8);
        assert_eq!(cube.num_faces(), 6);

        let stats = mesh_stats(&cube).unwrap();
        assert_eq!(stats.edges, 12);
        assert_eq!(stats.euler_characteristic(), 2);

        // Closed mesh: every corner has a full fan of faces
        let topology = Topology::extract(&cube, TopologyPolicy::Strict).unwrap();
        for corner in topology.corner_points() {
            assert_eq!(topology.adjacent_faces(corner).len(), 3, "corner {}", corner);
        }
    }
}
