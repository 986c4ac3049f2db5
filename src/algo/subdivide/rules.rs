//! Catmull-Clark point rules.
//!
//! - **Face point**: centroid of the face's four corners
//! - **Edge point**: average of the two end points and the two incident face points
//! - **Corner point**: `(F + 2R + (n-3)P) / n` where:
//!   - F = average of the face points of the n faces around P
//!   - R = average of the midpoints of the edges at P
//!   - P = original position
//!   - n = valence

use crate::error::Result;
use crate::mesh::{average, ratio, scalar, Edge, Face, FaceId, Point, QuadMesh};

/// Face point of a single face.
pub fn face_point(face: &Face) -> Result<Point> {
    average(face.vertices())
}

/// Face points of every face, indexed by [`FaceId`].
pub fn face_points(mesh: &QuadMesh) -> Result<Vec<Point>> {
    mesh.faces().iter().map(face_point).collect()
}

/// Edge point of `edge`, given the face points of the mesh it belongs to.
pub fn edge_point(edge: &Edge, face_points: &[Point]) -> Result<Point> {
    let [a, b] = edge.vertices();
    let [f0, f1] = edge.faces();
    average([a, b, &face_points[f0.index()], &face_points[f1.index()]])
}

/// Smoothed position of the corner `corner`.
///
/// `faces` are the faces around the corner and `edges` the edges ending at
/// it. The valence is the number of faces. Fails with
/// [`MeshError::EmptyAverage`](crate::error::MeshError::EmptyAverage) if the
/// corner has no faces or no edges.
pub fn corner_point<'a, Faces, Edges>(
    corner: &Point,
    faces: Faces,
    edges: Edges,
    face_points: &[Point],
) -> Result<Point>
where
    Faces: IntoIterator<Item = FaceId>,
    Edges: IntoIterator<Item = &'a Edge>,
{
    let adjacent: Vec<&Point> = faces
        .into_iter()
        .map(|f| &face_points[f.index()])
        .collect();
    let midpoints: Vec<Point> = edges.into_iter().map(Edge::midpoint).collect();

    let f = average(adjacent.iter().copied())?;
    let r = average(&midpoints)?;

    let n = adjacent.len() as i64;
    let sum = f + r.scale(&scalar(2)) + corner.scale(&scalar(n - 3));
    Ok(sum.scale(&ratio(1, n)))
}
