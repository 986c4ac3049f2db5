//! Mesh construction utilities.
//!
//! This module converts between [`QuadMesh`] and indexed face-vertex lists as
//! commonly found in mesh file formats, and provides the reference cube.

use std::collections::HashMap;

use super::point::Point;
use super::quad::{Face, QuadMesh};
use crate::error::{MeshError, Result};

/// Build a quad mesh from vertices and quad faces.
///
/// # Arguments
/// * `vertices` - List of vertex positions
/// * `faces` - List of quad faces, each as [v0, v1, v2, v3] indices in winding order
///
/// # Returns
/// A quad mesh, or an error if the input is invalid.
///
/// # Example
/// ```
/// use catclark::mesh::{build_from_quads, Point};
///
/// let vertices = vec![
///     Point::from_integers(0, 0, 0),
///     Point::from_integers(1, 0, 0),
///     Point::from_integers(1, 1, 0),
///     Point::from_integers(0, 1, 0),
/// ];
/// let faces = vec![[0, 1, 2, 3]];
///
/// let mesh = build_from_quads(&vertices, &faces).unwrap();
/// assert_eq!(mesh.num_vertices(), 4);
/// assert_eq!(mesh.num_faces(), 1);
/// ```
pub fn build_from_quads(vertices: &[Point], faces: &[[usize; 4]]) -> Result<QuadMesh> {
    if faces.is_empty() {
        return Err(MeshError::EmptyMesh);
    }

    // Validate vertex indices
    for (fi, face) in faces.iter().enumerate() {
        for &vi in face {
            if vi >= vertices.len() {
                return Err(MeshError::InvalidVertexIndex { face: fi, vertex: vi });
            }
        }
    }

    let faces = faces
        .iter()
        .map(|&[a, b, c, d]| {
            Face::new([
                vertices[a].clone(),
                vertices[b].clone(),
                vertices[c].clone(),
                vertices[d].clone(),
            ])
        })
        .collect();

    QuadMesh::new(faces)
}

/// Convert a quad mesh to a deduplicated vertex list and indexed quads.
///
/// Vertices are numbered in order of first appearance while walking the faces
/// in order. Two corners share an index exactly when their coordinates are
/// equal.
pub fn to_face_vertex_quads(mesh: &QuadMesh) -> (Vec<Point>, Vec<[usize; 4]>) {
    let mut vertices: Vec<Point> = Vec::new();
    let mut index_of: HashMap<&Point, usize> = HashMap::new();

    let faces = mesh
        .faces()
        .iter()
        .map(|face| {
            let mut quad = [0; 4];
            for (slot, p) in quad.iter_mut().zip(face.vertices()) {
                *slot = *index_of.entry(p).or_insert_with(|| {
                    vertices.push(p.clone());
                    vertices.len() - 1
                });
            }
            quad
        })
        .collect();

    (vertices, faces)
}

/// The axis-aligned unit cube with corners at 0 and 1: 6 quads, 8 corners and
/// 12 edges, every face wound consistently.
pub fn unit_cube() -> QuadMesh {
    let p = Point::from_integers;
    QuadMesh::from_valid_faces(vec![
        Face::new([p(0, 0, 0), p(0, 1, 0), p(1, 1, 0), p(1, 0, 0)]),
        Face::new([p(0, 0, 0), p(0, 0, 1), p(0, 1, 1), p(0, 1, 0)]),
        Face::new([p(0, 0, 0), p(1, 0, 0), p(1, 0, 1), p(0, 0, 1)]),
        Face::new([p(0, 0, 1), p(1, 0, 1), p(1, 1, 1), p(0, 1, 1)]),
        Face::new([p(1, 0, 0), p(1, 1, 0), p(1, 1, 1), p(1, 0, 1)]),
        Face::new([p(0, 1, 0), p(0, 1, 1), p(1, 1, 1), p(1, 1, 0)]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_quads() -> (Vec<Point>, Vec<[usize; 4]>) {
        let vertices = vec![
            Point::from_integers(0, 0, 0),
            Point::from_integers(1, 0, 0),
            Point::from_integers(1, 1, 0),
            Point::from_integers(0, 1, 0),
            Point::from_integers(2, 0, 0),
            Point::from_integers(2, 1, 0),
        ];
        let faces = vec![[0, 1, 2, 3], [1, 4, 5, 2]];
        (vertices, faces)
    }

    #[test]
    fn test_build_from_quads_two_quads() {
        let (vertices, faces) = two_quads();
        let mesh = build_from_quads(&vertices, &faces).unwrap();

        assert_eq!(mesh.num_faces(), 2);
        assert_eq!(mesh.num_vertices(), 6);
    }

    #[test]
    fn test_roundtrip_quads() {
        let (vertices, faces) = two_quads();
        let mesh = build_from_quads(&vertices, &faces).unwrap();

        let (out_vertices, out_faces) = to_face_vertex_quads(&mesh);
        assert_eq!(out_vertices, vertices);
        assert_eq!(out_faces, faces);
    }

    #[test]
    fn test_invalid_vertex_index() {
        let (vertices, _) = two_quads();
        let result = build_from_quads(&vertices, &[[0, 1, 2, 9]]);
        assert!(matches!(
            result,
            Err(MeshError::InvalidVertexIndex { face: 0, vertex: 9 })
        ));
    }

    #[test]
    fn test_quad_degenerate_face() {
        let (vertices, _) = two_quads();
        let result = build_from_quads(&vertices, &[[0, 1, 2, 3], [0, 1, 1, 3]]);
        assert!(matches!(result, Err(MeshError::DegenerateFace { face: 1 })));
    }

    #[test]
    fn test_empty_faces() {
        let (vertices, _) = two_quads();
        assert!(matches!(
            build_from_quads(&vertices, &[]),
            Err(MeshError::EmptyMesh)
        ));
    }

    #[test]
    fn test_unit_cube() {
        let cube = unit_cube();
        assert_eq!(cube.num_faces(), 6);
        assert_eq!(cube.num_vertices(), 8);
        assert!(cube.faces().iter().all(|f| !f.is_degenerate()));
        // Constructing through the validating path gives the same mesh.
        assert_eq!(QuadMesh::new(cube.faces().to_vec()).unwrap(), cube);
    }
}
