//! Derived edge topology of a quad mesh.
//!
//! Edges are not stored in a [`QuadMesh`]. They are recomputed from the face
//! list whenever they are needed: every consecutive (cyclic) corner pair of a
//! face is a face-edge, and face-edges with the same unordered vertex pair are
//! merged into one [`Edge`] carrying both incident faces.
//!
//! Matching is done in one pass through a map keyed by the normalized vertex
//! pair, so extraction is linear in the number of face-edges.

use std::collections::{BTreeSet, HashMap};

use super::index::{EdgeId, FaceId};
use super::point::Point;
use super::quad::QuadMesh;
use crate::error::{MeshError, Result};

/// How integrity violations in the mesh connectivity are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TopologyPolicy {
    /// Any edge without exactly two incident faces, or any corner/face pair
    /// without exactly two bounding edges, fails the pass.
    #[default]
    Strict,

    /// Violations are logged and skipped: unmatched edges are dropped and the
    /// affected corner/face pairs produce no output quad. The result may be
    /// missing faces.
    Lenient,
}

/// An edge shared by exactly two faces.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    vertices: [Point; 2],
    faces: [FaceId; 2],
}

impl Edge {
    /// The two end points, in ascending order.
    #[inline]
    pub fn vertices(&self) -> &[Point; 2] {
        &self.vertices
    }

    /// The two incident faces, in ascending order.
    #[inline]
    pub fn faces(&self) -> [FaceId; 2] {
        self.faces
    }

    /// Whether `point` is an end point of this edge.
    pub fn contains_vertex(&self, point: &Point) -> bool {
        self.vertices.contains(point)
    }

    /// Whether `face` is one of the two incident faces.
    pub fn borders(&self, face: FaceId) -> bool {
        self.faces.contains(&face)
    }

    /// Plain average of the two end points.
    pub fn midpoint(&self) -> Point {
        self.vertices[0].midpoint(&self.vertices[1])
    }
}

/// Edge set of a mesh together with vertex adjacency.
#[derive(Debug, Clone)]
pub struct Topology {
    edges: Vec<Edge>,
    corners: Vec<Point>,
    vertex_edges: HashMap<Point, Vec<EdgeId>>,
}

impl Topology {
    /// Derive the edges and vertex adjacency of `mesh`.
    ///
    /// Edges are listed in order of first appearance while walking the faces.
    pub fn extract(mesh: &QuadMesh, policy: TopologyPolicy) -> Result<Self> {
        let mut order: Vec<(&Point, &Point)> = Vec::new();
        let mut incident: HashMap<(&Point, &Point), Vec<FaceId>> = HashMap::new();

        for face_id in mesh.face_ids() {
            for (a, b) in mesh.face(face_id).edges() {
                let key = if a <= b { (a, b) } else { (b, a) };
                let faces = incident.entry(key).or_insert_with(|| {
                    order.push(key);
                    Vec::new()
                });
                faces.push(face_id);
            }
        }

        let mut edges = Vec::with_capacity(order.len());
        for key in order {
            let faces = &incident[&key];
            if let &[f0, f1] = faces.as_slice() {
                edges.push(Edge {
                    vertices: [key.0.clone(), key.1.clone()],
                    faces: [f0.min(f1), f0.max(f1)],
                });
                continue;
            }

            let (v0, v1) = key;
            match policy {
                TopologyPolicy::Strict => {
                    return Err(MeshError::NonManifoldEdge {
                        v0: v0.clone(),
                        v1: v1.clone(),
                        faces: faces.clone(),
                    });
                }
                TopologyPolicy::Lenient => {
                    log::warn!(
                        "dropping edge {} - {} with {} incident faces",
                        v0,
                        v1,
                        faces.len()
                    );
                }
            }
        }

        let corners: Vec<Point> = mesh.corner_points().into_iter().cloned().collect();

        let mut vertex_edges: HashMap<Point, Vec<EdgeId>> = HashMap::with_capacity(corners.len());
        for (i, edge) in edges.iter().enumerate() {
            for v in &edge.vertices {
                vertex_edges
                    .entry(v.clone())
                    .or_default()
                    .push(EdgeId::new(i));
            }
        }

        Ok(Self {
            edges,
            corners,
            vertex_edges,
        })
    }

    /// All edges.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The edge with the given id.
    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    /// Number of edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Distinct corner points, in order of first appearance.
    #[inline]
    pub fn corner_points(&self) -> &[Point] {
        &self.corners
    }

    /// Ids of the edges that have `point` as an end point.
    pub fn adjacent_edge_ids(&self, point: &Point) -> &[EdgeId] {
        self.vertex_edges.get(point).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Edges that have `point` as an end point.
    pub fn adjacent_edges<'a>(&'a self, point: &Point) -> impl Iterator<Item = &'a Edge> + 'a {
        self.adjacent_edge_ids(point).iter().map(|&id| self.edge(id))
    }

    /// Faces incident to any edge at `point`, in ascending order.
    pub fn adjacent_faces(&self, point: &Point) -> BTreeSet<FaceId> {
        self.adjacent_edges(point)
            .flat_map(|edge| edge.faces())
            .collect()
    }
}

/// Derive the edge set of `mesh`, failing on any edge that is not shared by
/// exactly two faces.
pub fn extract_edges(mesh: &QuadMesh) -> Result<Vec<Edge>> {
    Ok(Topology::extract(mesh, TopologyPolicy::Strict)?.edges)
}

/// Every edge in `edges` that has `point` as an end point.
pub fn adjacent_edges<'a>(point: &Point, edges: &'a [Edge]) -> Vec<&'a Edge> {
    edges.iter().filter(|e| e.contains_vertex(point)).collect()
}

/// Element counts of a closed quad mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshStats {
    /// Number of distinct vertices.
    pub vertices: usize,
    /// Number of edges.
    pub edges: usize,
    /// Number of faces.
    pub faces: usize,
}

impl MeshStats {
    /// Euler characteristic `V - E + F`.
    pub fn euler_characteristic(&self) -> i64 {
        self.vertices as i64 - self.edges as i64 + self.faces as i64
    }
}

/// Count vertices, edges and faces of a closed manifold quad mesh.
pub fn mesh_stats(mesh: &QuadMesh) -> Result<MeshStats> {
    let topology = Topology::extract(mesh, TopologyPolicy::Strict)?;
    Ok(MeshStats {
        vertices: topology.corner_points().len(),
        edges: topology.num_edges(),
        faces: mesh.num_faces(),
    })
}
