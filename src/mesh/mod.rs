//! Core mesh data structures.
//!
//! This module provides the exact-arithmetic value types that the refiner
//! operates on.
//!
//! # Overview
//!
//! The primary type is [`QuadMesh`], an immutable list of quad [`Face`]s. A
//! face is four [`Point`]s in winding order, and a point has exact rational
//! coordinates. There are no vertex records: a vertex is identified purely by
//! its coordinates, which is sound because no arithmetic in this crate rounds.
//!
//! Edges and vertex adjacency are derived on demand by [`Topology`].
//!
//! # Construction
//!
//! ```
//! use catclark::mesh::{build_from_quads, Point};
//!
//! let vertices = vec![
//!     Point::from_integers(0, 0, 0),
//!     Point::from_integers(1, 0, 0),
//!     Point::from_integers(1, 1, 0),
//!     Point::from_integers(0, 1, 0),
//! ];
//! let mesh = build_from_quads(&vertices, &[[0, 1, 2, 3]]).unwrap();
//! assert_eq!(mesh.num_faces(), 1);
//! ```

mod builder;
mod index;
mod point;
mod quad;
mod topology;

pub use builder::{build_from_quads, to_face_vertex_quads, unit_cube};
pub use index::{EdgeId, FaceId};
pub use point::{add_points, average, ratio, scalar, Point, Scalar};
pub use quad::{Face, QuadMesh};
pub use topology::{
    adjacent_edges, extract_edges, mesh_stats, Edge, MeshStats, Topology, TopologyPolicy,
};
