//! Quad faces and immutable quad meshes.

use std::collections::HashSet;

use super::index::FaceId;
use super::point::Point;
use crate::error::{MeshError, Result};

/// A quadrilateral face: four points in winding order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Face {
    vertices: [Point; 4],
}

impl Face {
    /// Create a face from its four corners in winding order.
    pub fn new(vertices: [Point; 4]) -> Self {
        Self { vertices }
    }

    /// The corners in winding order.
    #[inline]
    pub fn vertices(&self) -> &[Point; 4] {
        &self.vertices
    }

    /// Whether `point` is one of the corners of this face.
    pub fn contains(&self, point: &Point) -> bool {
        self.vertices.contains(point)
    }

    /// The four boundary edges as consecutive (cyclic) vertex pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&Point, &Point)> + '_ {
        (0..4).map(move |i| (&self.vertices[i], &self.vertices[(i + 1) % 4]))
    }

    /// Whether any two corners coincide.
    pub fn is_degenerate(&self) -> bool {
        let v = &self.vertices;
        v[0] == v[1] || v[1] == v[2] || v[2] == v[3] || v[3] == v[0] || v[0] == v[2] || v[1] == v[3]
    }
}

impl From<[Point; 4]> for Face {
    fn from(vertices: [Point; 4]) -> Self {
        Self::new(vertices)
    }
}

/// An immutable mesh of quad faces.
///
/// There are no explicit vertex or edge records: a vertex is any point that
/// appears in a face, and edges are derived on demand by
/// [`Topology`](super::Topology). Subdivision never modifies a `QuadMesh`; it
/// produces a new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuadMesh {
    faces: Vec<Face>,
}

impl QuadMesh {
    /// Create a mesh from a face list.
    ///
    /// Fails with [`MeshError::EmptyMesh`] if there are no faces and with
    /// [`MeshError::DegenerateFace`] if any face repeats a corner.
    pub fn new(faces: Vec<Face>) -> Result<Self> {
        if faces.is_empty() {
            return Err(MeshError::EmptyMesh);
        }
        if let Some(face) = faces.iter().position(Face::is_degenerate) {
            return Err(MeshError::DegenerateFace { face });
        }
        Ok(Self { faces })
    }

    /// Wrap a face list already known to be valid.
    pub(crate) fn from_valid_faces(faces: Vec<Face>) -> Self {
        debug_assert!(!faces.is_empty());
        debug_assert!(!faces.iter().any(Face::is_degenerate));
        Self { faces }
    }

    /// All faces in order.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Consume the mesh, returning its faces.
    pub fn into_faces(self) -> Vec<Face> {
        self.faces
    }

    /// The face with the given id.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this mesh.
    #[inline]
    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.index()]
    }

    /// Iterate over all face ids.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> {
        (0..self.faces.len()).map(FaceId::new)
    }

    /// Number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// The distinct corner points of the mesh, in order of first appearance.
    pub fn corner_points(&self) -> Vec<&Point> {
        let mut seen = HashSet::new();
        self.faces
            .iter()
            .flat_map(|face| face.vertices().iter())
            .filter(|&p| seen.insert(p))
            .collect()
    }

    /// Number of distinct vertices.
    pub fn num_vertices(&self) -> usize {
        self.corner_points().len()
    }

    /// Axis-aligned bounding box in floating point, as `(min, max)`.
    pub fn bounding_box(&self) -> Option<(nalgebra::Point3<f64>, nalgebra::Point3<f64>)> {
        let mut corners = self.corner_points().into_iter();
        let first = corners.next()?.to_point3()?;
        corners.try_fold((first, first), |(min, max), p| {
            let p = p.to_point3()?;
            Some((min.inf(&p), max.sup(&p)))
        })
    }
}
