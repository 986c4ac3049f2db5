//! Face rebuilding for one Catmull-Clark pass.
//!
//! Every corner of the old mesh contributes one new quad per face around it.
//! The quad is made of the moved corner, the edge points of the two edges that
//! bound the corner inside that face, and the face point, listed in the same
//! cyclic order as the corresponding corners of the parent face so the
//! winding of the old mesh carries over.

use crate::error::{MeshError, Result};
use crate::mesh::{Edge, EdgeId, Face, FaceId, Point, QuadMesh, Topology, TopologyPolicy};

use super::rules::corner_point;

/// Everything a pass reads. Shared immutably across corners.
pub(super) struct PassContext<'a> {
    pub mesh: &'a QuadMesh,
    pub topology: &'a Topology,
    pub face_points: &'a [Point],
    pub edge_points: &'a [Point],
    pub policy: TopologyPolicy,
}

/// Emit the new quads around `corner`.
pub(super) fn rebuild_corner(ctx: &PassContext<'_>, corner: &Point) -> Result<Vec<Face>> {
    let edge_ids = ctx.topology.adjacent_edge_ids(corner);
    let adjacent_faces = ctx.topology.adjacent_faces(corner);

    if adjacent_faces.is_empty() && ctx.policy == TopologyPolicy::Lenient {
        log::warn!("corner {} has no shared edges, skipping", corner);
        return Ok(Vec::new());
    }

    let moved = corner_point(
        corner,
        adjacent_faces.iter().copied(),
        ctx.topology.adjacent_edges(corner),
        ctx.face_points,
    )?;

    let mut faces = Vec::with_capacity(adjacent_faces.len());
    for &face in &adjacent_faces {
        let bounding: Vec<EdgeId> = edge_ids
            .iter()
            .copied()
            .filter(|&e| ctx.topology.edge(e).borders(face))
            .collect();

        let &[e1, e2] = bounding.as_slice() else {
            let err = MeshError::BoundingEdges {
                corner: corner.clone(),
                face,
                found: bounding.len(),
            };
            match ctx.policy {
                TopologyPolicy::Strict => return Err(err),
                TopologyPolicy::Lenient => {
                    log::warn!("{}, skipping", err);
                    continue;
                }
            }
        };

        let edge1 = ctx.topology.edge(e1);
        let edge2 = ctx.topology.edge(e2);
        let parent = common_face(corner, face, edge1, edge2)?;

        let face_point = &ctx.face_points[parent.index()];
        let edge_point1 = &ctx.edge_points[e1.index()];
        let edge_point2 = &ctx.edge_points[e2.index()];

        let parent_vertices = ctx.mesh.face(parent).vertices();
        let vertices = std::array::from_fn(|i| {
            let v = &parent_vertices[i];
            if v == corner {
                moved.clone()
            } else if edge1.contains_vertex(v) {
                edge_point1.clone()
            } else if edge2.contains_vertex(v) {
                edge_point2.clone()
            } else {
                face_point.clone()
            }
        });
        faces.push(Face::new(vertices));
    }

    Ok(faces)
}

/// The single face shared by both bounding edges of `corner` in `face`.
fn common_face(corner: &Point, face: FaceId, edge1: &Edge, edge2: &Edge) -> Result<FaceId> {
    let candidates: Vec<FaceId> = edge1
        .faces()
        .into_iter()
        .filter(|&f| edge2.borders(f))
        .collect();

    if let &[parent] = candidates.as_slice() {
        return Ok(parent);
    }
    Err(MeshError::AmbiguousCommonFace {
        corner: corner.clone(),
        face,
        candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::subdivide::rules::{edge_point, face_points};
    use crate::mesh::{build_from_quads, unit_cube};

    fn run_corner(mesh: &QuadMesh, policy: TopologyPolicy, corner: &Point) -> Result<Vec<Face>> {
        let topology = Topology::extract(mesh, policy)?;
        let face_points = face_points(mesh)?;
        let edge_points = topology
            .edges()
            .iter()
            .map(|e| edge_point(e, &face_points))
            .collect::<Result<Vec<_>>>()?;
        let ctx = PassContext {
            mesh,
            topology: &topology,
            face_points: &face_points,
            edge_points: &edge_points,
            policy,
        };
        rebuild_corner(&ctx, corner)
    }

    #[test]
    fn test_cube_corner_emits_one_quad_per_face() {
        let cube = unit_cube();
        let origin = Point::origin();
        let faces = run_corner(&cube, TopologyPolicy::Strict, &origin).unwrap();
        assert_eq!(faces.len(), 3);

        let moved = Point::new(
            crate::mesh::ratio(2, 9),
            crate::mesh::ratio(2, 9),
            crate::mesh::ratio(2, 9),
        );
        for (face, parent) in faces.iter().zip(cube.faces()) {
            // The moved corner sits where the origin sat in the parent face.
            let slot = parent.vertices().iter().position(|v| *v == origin).unwrap();
            assert_eq!(face.vertices()[slot], moved);
            // The opposite slot holds the parent's face point.
            let opposite = &face.vertices()[(slot + 2) % 4];
            assert_eq!(opposite, &crate::algo::subdivide::rules::face_point(parent).unwrap());
        }
    }

    #[test]
    fn test_faces_sharing_two_edges_are_ambiguous() {
        // Two quads folded onto each other along a-b and a-d.
        let a = Point::from_integers(0, 0, 0);
        let vertices = vec![
            a.clone(),
            Point::from_integers(1, 0, 0),
            Point::from_integers(1, 1, 0),
            Point::from_integers(0, 1, 0),
            Point::from_integers(0, 0, 1),
        ];
        let mesh = build_from_quads(&vertices, &[[0, 1, 2, 3], [1, 0, 3, 4]]).unwrap();

        let err = run_corner(&mesh, TopologyPolicy::Lenient, &a).unwrap_err();
        match err {
            MeshError::AmbiguousCommonFace { corner, candidates, .. } => {
                assert_eq!(corner, a);
                assert_eq!(candidates, vec![FaceId::new(0), FaceId::new(1)]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_bounding_edge() {
        let vertices = vec![
            Point::from_integers(0, 0, 0),
            Point::from_integers(1, 0, 0),
            Point::from_integers(1, 1, 0),
            Point::from_integers(0, 1, 0),
            Point::from_integers(2, 0, 0),
            Point::from_integers(2, 1, 0),
        ];
        let mesh = build_from_quads(&vertices, &[[0, 1, 2, 3], [1, 4, 5, 2]]).unwrap();

        // Only the shared edge survives, so (1,0,0) has one bounding edge per face.
        let faces = run_corner(&mesh, TopologyPolicy::Lenient, &vertices[1]).unwrap();
        assert!(faces.is_empty());

        // A corner with no surviving edges is skipped outright.
        let faces = run_corner(&mesh, TopologyPolicy::Lenient, &vertices[0]).unwrap();
        assert!(faces.is_empty());
    }
}
