//! Mesh processing algorithms.
//!
//! - **Subdivision**: exact-arithmetic Catmull-Clark refinement of closed quad meshes
//! - **Progress**: callbacks for reporting progress of multi-pass algorithms

pub mod progress;
pub mod subdivide;

pub use progress::Progress;
