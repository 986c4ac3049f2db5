//! Wavefront OBJ output.
//!
//! Vertices are written as `v x y z` lines, deduplicated by exact value and
//! numbered in order of first appearance while walking the faces. Faces follow
//! as `f i1 i2 i3 i4` lines with 1-based indices. Coordinates are converted
//! to `f64` here and nowhere else, and printed with the shortest
//! representation that round-trips (`1.0`, `0.5`, `0.2962962962962963`).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{MeshError, Result};
use crate::mesh::{to_face_vertex_quads, QuadMesh};

/// Write `mesh` in OBJ format to `writer`.
///
/// # Example
///
/// ```
/// use catclark::io::obj;
/// use catclark::mesh::unit_cube;
///
/// let mut out = Vec::new();
/// obj::write(&unit_cube(), &mut out).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("v 0.0 0.0 0.0\n"));
/// ```
pub fn write<W: Write>(mesh: &QuadMesh, writer: &mut W) -> Result<()> {
    let (vertices, faces) = to_face_vertex_quads(mesh);

    for v in &vertices {
        let p = v.to_point3().ok_or_else(|| {
            MeshError::invalid_param("vertex", v, "coordinate has no f64 representation")
        })?;
        writeln!(writer, "v {:?} {:?} {:?}", p.x, p.y, p.z)?;
    }

    for [a, b, c, d] in &faces {
        writeln!(writer, "f {} {} {} {}", a + 1, b + 1, c + 1, d + 1)?;
    }

    Ok(())
}

/// Save `mesh` to an OBJ file.
///
/// # Example
///
/// ```no_run
/// use catclark::io::obj;
/// use catclark::mesh::unit_cube;
///
/// obj::save(&unit_cube(), "cube.obj").unwrap();
/// ```
pub fn save<P: AsRef<Path>>(mesh: &QuadMesh, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write(mesh, &mut writer)?;
    writer.flush().map_err(|e| MeshError::SaveError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(())
}
