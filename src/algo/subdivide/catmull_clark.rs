//! Catmull-Clark subdivision for closed quad meshes.

use rayon::prelude::*;

use crate::algo::Progress;
use crate::error::{MeshError, Result};
use crate::mesh::{Face, Point, QuadMesh, Topology};

use super::rebuild::{rebuild_corner, PassContext};
use super::rules::{edge_point, face_points};
use super::SubdivideOptions;

/// Performs Catmull-Clark subdivision on a closed quad mesh.
///
/// Each iteration quadruples the number of quads. The input is left untouched
/// and the refined mesh is returned.
///
/// # Arguments
///
/// * `mesh` - The quad mesh to subdivide
/// * `options` - Subdivision parameters
///
/// # Errors
///
/// Under [`TopologyPolicy::Strict`](super::TopologyPolicy::Strict) any pass
/// that meets an open or non-manifold edge fails with
/// [`MeshError::NonManifoldEdge`] or [`MeshError::BoundingEdges`]. A corner
/// whose bounding edges share more than one face fails with
/// [`MeshError::AmbiguousCommonFace`] under either policy.
pub fn catmull_clark_subdivide(mesh: &QuadMesh, options: &SubdivideOptions) -> Result<QuadMesh> {
    catmull_clark_subdivide_with_progress(mesh, options, &Progress::none())
}

/// Catmull-Clark subdivision with progress reporting.
pub fn catmull_clark_subdivide_with_progress(
    mesh: &QuadMesh,
    options: &SubdivideOptions,
    progress: &Progress,
) -> Result<QuadMesh> {
    options.validate()?;

    if options.iterations == 0 {
        return Ok(mesh.clone());
    }

    progress.report(0, options.iterations, "Catmull-Clark subdivision");
    let mut current = refine(mesh, options)?;
    for iter in 1..options.iterations {
        progress.report(iter, options.iterations, "Catmull-Clark subdivision");
        current = refine(&current, options)?;
    }
    progress.report(options.iterations, options.iterations, "Catmull-Clark subdivision");

    Ok(current)
}

/// Perform one pass of Catmull-Clark subdivision.
///
/// Only `parallel`, `policy` and `max_faces` of `options` are used.
pub fn refine(mesh: &QuadMesh, options: &SubdivideOptions) -> Result<QuadMesh> {
    let projected = mesh.num_faces().saturating_mul(4);
    if projected > options.max_faces {
        return Err(MeshError::MeshTooLarge {
            current: mesh.num_faces(),
            projected,
            max: options.max_faces,
        });
    }

    // Step 1: Derive edges and adjacency
    let topology = Topology::extract(mesh, options.policy)?;

    // Step 2: Face points and edge points
    let face_points = face_points(mesh)?;
    let edge_points = topology
        .edges()
        .iter()
        .map(|edge| edge_point(edge, &face_points))
        .collect::<Result<Vec<Point>>>()?;

    let ctx = PassContext {
        mesh,
        topology: &topology,
        face_points: &face_points,
        edge_points: &edge_points,
        policy: options.policy,
    };

    // Step 3: Move each corner and emit one quad per face around it
    let corners = topology.corner_points();
    let per_corner: Vec<Vec<Face>> = if options.parallel {
        corners
            .par_iter()
            .map(|corner| rebuild_corner(&ctx, corner))
            .collect::<Result<_>>()?
    } else {
        corners
            .iter()
            .map(|corner| rebuild_corner(&ctx, corner))
            .collect::<Result<_>>()?
    };

    let faces: Vec<Face> = per_corner.into_iter().flatten().collect();
    log::debug!(
        "Catmull-Clark pass: {} corners, {} edges, {} faces -> {} faces",
        corners.len(),
        topology.num_edges(),
        mesh.num_faces(),
        faces.len()
    );

    QuadMesh::new(faces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::subdivide::TopologyPolicy;
    use crate::mesh::{build_from_quads, mesh_stats, ratio, scalar, unit_cube};
    use nalgebra::Vector3;
    use std::collections::HashSet;

    fn flat_grid(n: i64) -> QuadMesh {
        let mut vertices = Vec::new();
        for j in 0..=n {
            for i in 0..=n {
                vertices.push(Point::from_integers(i, j, 0));
            }
        }
        let n = n as usize;
        let mut faces = Vec::new();
        for j in 0..n {
            for i in 0..n {
                let v00 = j * (n + 1) + i;
                let v10 = v00 + 1;
                let v01 = v00 + (n + 1);
                let v11 = v01 + 1;
                faces.push([v00, v10, v11, v01]);
            }
        }
        build_from_quads(&vertices, &faces).unwrap()
    }

    /// Every face normal points away from the center of the unit cube.
    fn assert_outward(mesh: &QuadMesh) {
        let center = Vector3::new(0.5, 0.5, 0.5);
        for face in mesh.faces() {
            let p: Vec<_> = face
                .vertices()
                .iter()
                .map(|v| v.to_point3().unwrap())
                .collect();
            let normal = (p[1] - p[0]).cross(&(p[2] - p[0]));
            let centroid = p.iter().map(|q| q.coords).sum::<Vector3<f64>>() / 4.0;
            assert!(normal.dot(&(centroid - center)) > 0.0);
        }
    }

    #[test]
    fn test_cube_one_iteration() {
        let cube = unit_cube();
        let refined = refine(&cube, &SubdivideOptions::new(1)).unwrap();

        assert_eq!(refined.num_faces(), 24);
        // 8 corners + 12 edge points + 6 face points
        assert_eq!(refined.num_vertices(), 26);

        let corners: HashSet<&Point> = refined.corner_points().into_iter().collect();
        let moved_origin = Point::new(ratio(2, 9), ratio(2, 9), ratio(2, 9));
        assert!(corners.contains(&moved_origin));
        assert!(!corners.contains(&Point::origin()));
        // The bottom face point is untouched by smoothing.
        assert!(corners.contains(&Point::new(ratio(1, 2), ratio(1, 2), scalar(0))));
    }

    #[test]
    fn test_vertex_count_growth() {
        let mut mesh = unit_cube();
        for _ in 0..2 {
            let before = mesh_stats(&mesh).unwrap();
            mesh = refine(&mesh, &SubdivideOptions::default()).unwrap();
            let after = mesh_stats(&mesh).unwrap();

            assert_eq!(after.vertices, before.vertices + before.edges + before.faces);
            assert_eq!(after.faces, 4 * before.faces);
            assert_eq!(after.euler_characteristic(), before.euler_characteristic());
        }
    }

    #[test]
    fn test_closure_preserved() {
        let refined = catmull_clark_subdivide(&unit_cube(), &SubdivideOptions::new(2)).unwrap();
        // Strict extraction succeeds only if every edge borders exactly 2 faces.
        let stats = mesh_stats(&refined).unwrap();
        assert_eq!(stats.edges * 2, stats.faces * 4);
    }

    #[test]
    fn test_three_iterations() {
        let refined = catmull_clark_subdivide(&unit_cube(), &SubdivideOptions::new(3)).unwrap();
        assert_eq!(refined.num_faces(), 6 * 4 * 4 * 4);
        assert_eq!(refined.num_faces(), 384);
    }

    #[test]
    fn test_zero_iterations() {
        let cube = unit_cube();
        let result = catmull_clark_subdivide(&cube, &SubdivideOptions::new(0)).unwrap();
        assert_eq!(result, cube);
    }

    #[test]
    fn test_deterministic_and_order_independent_of_threads() {
        let cube = unit_cube();
        let parallel = catmull_clark_subdivide(&cube, &SubdivideOptions::new(2)).unwrap();
        let again = catmull_clark_subdivide(&cube, &SubdivideOptions::new(2)).unwrap();
        let sequential =
            catmull_clark_subdivide(&cube, &SubdivideOptions::new(2).sequential()).unwrap();

        assert_eq!(parallel, again);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_winding_preserved() {
        let cube = unit_cube();
        assert_outward(&cube);

        let refined = catmull_clark_subdivide(&cube, &SubdivideOptions::new(2)).unwrap();
        assert_outward(&refined);
    }

    #[test]
    fn test_symmetric_shrinking() {
        // Every moved corner of the cube lands on a body diagonal.
        let refined = refine(&unit_cube(), &SubdivideOptions::default()).unwrap();
        let far = Point::new(ratio(7, 9), ratio(7, 9), ratio(7, 9));
        assert!(refined.corner_points().contains(&&far));
    }

    #[test]
    fn test_single_quad_is_rejected() {
        let quad = flat_grid(1);
        let err = catmull_clark_subdivide(&quad, &SubdivideOptions::new(1)).unwrap_err();
        assert!(err.is_topology_error(), "unexpected error: {err}");
    }

    #[test]
    fn test_lenient_flat_grid_stays_flat() {
        // Only the 4 interior corners of a 3x3 grid have a complete fan.
        let grid = flat_grid(3);
        let options = SubdivideOptions::new(1).lenient();
        let refined = catmull_clark_subdivide(&grid, &options).unwrap();

        assert_eq!(refined.num_faces(), 16);
        assert!(refined
            .corner_points()
            .iter()
            .all(|p| p.z == scalar(0)));
    }

    #[test]
    fn test_face_budget() {
        let options = SubdivideOptions::new(1).with_max_faces(23);
        let err = catmull_clark_subdivide(&unit_cube(), &options).unwrap_err();
        assert!(matches!(
            err,
            MeshError::MeshTooLarge {
                current: 6,
                projected: 24,
                max: 23
            }
        ));
    }

    #[test]
    fn test_progress_reports_every_pass() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let progress = Progress::new(move |_, total, _| {
            assert_eq!(total, 2);
            counter.fetch_add(1, Ordering::Relaxed);
        });

        catmull_clark_subdivide_with_progress(&unit_cube(), &SubdivideOptions::new(2), &progress)
            .unwrap();
        assert_eq!(calls.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn test_strict_policy_is_default() {
        assert_eq!(SubdivideOptions::default().policy, TopologyPolicy::Strict);
    }
}
