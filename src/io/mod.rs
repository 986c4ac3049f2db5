//! Mesh file output.
//!
//! Refined meshes are written in the Wavefront OBJ format:
//!
//! ```no_run
//! use catclark::io::save;
//! use catclark::mesh::unit_cube;
//!
//! save(&unit_cube(), "cube.obj").unwrap();
//! ```

pub mod obj;

use std::path::Path;

use crate::error::{MeshError, Result};
use crate::mesh::QuadMesh;

/// Save a mesh to a file, choosing the format from the file extension.
///
/// Only `.obj` is supported.
pub fn save<P: AsRef<Path>>(mesh: &QuadMesh, path: P) -> Result<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("(none)");

    if extension.eq_ignore_ascii_case("obj") {
        obj::save(mesh, path)
    } else {
        Err(MeshError::UnsupportedFormat {
            extension: extension.to_string(),
        })
    }
}
