//! Crate-level behaviour through the [`solve`] entry point.

use super::*;
use align_geom::{GeomError, GeometricPrimitive, Mat4, Modifiers, Quat, Vec3};
use config::constants::EngineConfig;

fn engine() -> EngineConfig {
    EngineConfig::default()
}

fn moved_by(result: &AlignmentResult, points: &[Vec3]) -> Vec<Vec3> {
    let m = result.world_after(&Mat4::IDENTITY);
    points.iter().map(|p| m.transform_point3(*p)).collect()
}

fn points_request(modifiers: Modifiers) -> AlignmentRequest {
    AlignmentRequest::Points {
        source: GeometricPrimitive::point(Vec3::ZERO),
        destination: GeometricPrimitive::point(Vec3::new(1.0, 2.0, 3.0)),
        config: AlignPointsConfig {
            modifiers,
            target: TargetSpace::ObjectWorld,
        },
    }
}

#[test]
fn align_points_deltas() {
    let cases = [
        (Modifiers::default(), Vec3::new(1.0, 2.0, 3.0)),
        (Modifiers::new(false, true, 1.0), Vec3::new(-1.0, -2.0, -3.0)),
        (Modifiers::new(false, false, 2.0), Vec3::new(2.0, 4.0, 6.0)),
    ];
    for (modifiers, expected) in cases {
        let result = solve(&points_request(modifiers), &Mat4::IDENTITY, &engine()).unwrap();
        assert_eq!(result.object, Some(ObjectEdit::Translate(expected)));
        assert!(result.mesh.is_none());
    }
}

#[test]
fn second_point_alignment_is_a_no_op() {
    let destination = GeometricPrimitive::point(Vec3::new(-4.0, 0.5, 9.0));
    let source = Vec3::new(3.0, 3.0, 3.0);
    let first = solve(
        &AlignmentRequest::Points {
            source: GeometricPrimitive::point(source),
            destination,
            config: AlignPointsConfig::default(),
        },
        &Mat4::IDENTITY,
        &engine(),
    )
    .unwrap();
    let moved = moved_by(&first, &[source]);
    let second = solve(
        &AlignmentRequest::Points {
            source: GeometricPrimitive::point(moved[0]),
            destination,
            config: AlignPointsConfig::default(),
        },
        &Mat4::IDENTITY,
        &engine(),
    )
    .unwrap();
    assert!(second.object.unwrap().matrix().abs_diff_eq(Mat4::IDENTITY, 1e-9));
}

#[test]
fn second_line_alignment_is_a_no_op() {
    let source = [Vec3::new(1.0, 2.0, 0.0), Vec3::new(2.0, -1.0, 4.0)];
    let destination = GeometricPrimitive::line(Vec3::new(5.0, 5.0, 5.0), Vec3::new(5.0, 7.0, 6.0));
    let first = solve(
        &AlignmentRequest::Lines {
            source: GeometricPrimitive::line(source[0], source[1]),
            destination,
            config: AlignLinesConfig::default(),
        },
        &Mat4::IDENTITY,
        &engine(),
    )
    .unwrap();
    let moved = moved_by(&first, &source);
    let second = solve(
        &AlignmentRequest::Lines {
            source: GeometricPrimitive::line(moved[0], moved[1]),
            destination,
            config: AlignLinesConfig::default(),
        },
        &Mat4::IDENTITY,
        &engine(),
    )
    .unwrap();
    assert!(second.object.unwrap().matrix().abs_diff_eq(Mat4::IDENTITY, 1e-9));
}

#[test]
fn second_plane_alignment_is_a_no_op() {
    let source = [Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.0, 1.0, 2.0)];
    let destination = GeometricPrimitive::plane(
        Vec3::new(3.0, 3.0, 3.0),
        Vec3::new(4.0, 3.0, 1.0),
        Vec3::new(2.0, 6.0, 2.0),
    );
    let first = solve(
        &AlignmentRequest::Planes {
            source: GeometricPrimitive::plane(source[0], source[1], source[2]),
            destination,
            config: AlignPlanesConfig::default(),
        },
        &Mat4::IDENTITY,
        &engine(),
    )
    .unwrap();
    let moved = moved_by(&first, &source);
    let second = solve(
        &AlignmentRequest::Planes {
            source: GeometricPrimitive::plane(moved[0], moved[1], moved[2]),
            destination,
            config: AlignPlanesConfig::default(),
        },
        &Mat4::IDENTITY,
        &engine(),
    )
    .unwrap();
    assert!(second.object.unwrap().matrix().abs_diff_eq(Mat4::IDENTITY, 1e-9));
}

#[test]
fn scale_match_through_solve() {
    let request = AlignmentRequest::ScaleMatchEdge {
        source: GeometricPrimitive::line(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0)),
        destination: GeometricPrimitive::line(Vec3::ONE, Vec3::new(1.0, 7.0, 1.0)),
        config: ScaleMatchConfig::default(),
    };
    let result = solve(&request, &Mat4::IDENTITY, &engine()).unwrap();
    let m = result.world_after(&Mat4::IDENTITY);
    assert!(m.transform_point3(Vec3::X).abs_diff_eq(Vec3::new(3.0, 0.0, 0.0), 1e-12));

    let degenerate = AlignmentRequest::ScaleMatchEdge {
        source: GeometricPrimitive::line(Vec3::ONE, Vec3::ONE),
        destination: GeometricPrimitive::line(Vec3::ZERO, Vec3::X),
        config: ScaleMatchConfig::default(),
    };
    assert!(matches!(
        solve(&degenerate, &Mat4::IDENTITY, &engine()),
        Err(AlignError::DegenerateEdge { .. })
    ));
}

#[test]
fn local_world_round_trip() {
    let worlds = [
        Mat4::from_scale_rotation_translation(
            Vec3::new(2.0, 0.5, 3.0),
            Quat::from_axis_angle(Vec3::new(0.3, -1.1, 2.0).normalize(), 1.7),
            Vec3::new(-7.0, 1.0, 0.25),
        ),
        Mat4::from_translation(Vec3::new(100.0, 0.0, -3.0)),
    ];
    let p = Vec3::new(1.5, -2.5, 8.0);
    for world in worlds {
        let frame = LocalFrame::new(world, engine().tolerance).unwrap();
        assert!(frame.to_world(frame.to_local(p)).abs_diff_eq(p, 1e-9));
    }
}

#[test]
fn singular_world_rejects_mesh_targets() {
    let flat = Mat4::from_scale(Vec3::new(1.0, 0.0, 1.0));
    let request = AlignmentRequest::Slide {
        direction: GeometricPrimitive::line(Vec3::ZERO, Vec3::X),
        config: SlideConfig {
            modifiers: Modifiers::default(),
            target: TargetSpace::MeshLocalWhole,
        },
    };
    assert!(matches!(
        solve(&request, &flat, &engine()),
        Err(AlignError::Geometry(GeomError::SingularMatrix { .. }))
    ));

    // Object-level moves never invert the world matrix.
    let object_level = AlignmentRequest::Slide {
        direction: GeometricPrimitive::line(Vec3::ZERO, Vec3::X),
        config: SlideConfig::default(),
    };
    assert!(solve(&object_level, &flat, &engine()).is_ok());
}

#[test]
fn wrong_operand_kind_fails_fast() {
    let request = AlignmentRequest::AxisRotate {
        axis: GeometricPrimitive::point(Vec3::ONE),
        config: AxisRotateConfig::default(),
    };
    assert!(matches!(
        solve(&request, &Mat4::IDENTITY, &engine()),
        Err(AlignError::Geometry(GeomError::InvalidOperandKind { .. }))
    ));
}

#[test]
fn set_origin_through_solve_keeps_vertices() {
    let world = Mat4::from_translation(Vec3::new(0.0, 0.0, 1.0));
    let request = AlignmentRequest::SetOrigin {
        destination: GeometricPrimitive::plane(Vec3::new(6.0, 2.0, 0.0), Vec3::new(5.0, 2.0, 0.0), Vec3::new(5.0, 3.0, 0.0)),
        config: SetOriginConfig::default(),
    };
    let result = solve(&request, &world, &engine()).unwrap();
    assert!(result
        .world_after(&world)
        .transform_point3(Vec3::ZERO)
        .abs_diff_eq(Vec3::new(5.0, 2.0, 0.0), 1e-9));
    let local = Vec3::new(1.0, 1.0, 1.0);
    assert!(result
        .vertex_world_after(&world, local)
        .abs_diff_eq(world.transform_point3(local), 1e-9));
}

#[test]
fn request_from_json() {
    let json = r#"{
        "operation": "points",
        "source": { "kind": "point", "coord": [0.0, 0.0, 0.0] },
        "destination": {
            "kind": "point",
            "coord": [1.0, 2.0, 3.0],
            "modifiers": { "make_unit_vector": false, "flip_direction": false, "multiplier": 2.0 }
        }
    }"#;
    let request: AlignmentRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.name(), "align points");
    let result = solve(&request, &Mat4::IDENTITY, &engine()).unwrap();
    assert_eq!(result.object, Some(ObjectEdit::Translate(Vec3::new(2.0, 4.0, 6.0))));
}

#[test]
fn invalid_engine_tolerance_is_reported() {
    let engine = EngineConfig {
        tolerance: -1.0,
        angle_unit: config::constants::AngleUnit::Radians,
    };
    let request = AlignmentRequest::Slide {
        direction: GeometricPrimitive::line(Vec3::ZERO, Vec3::X),
        config: SlideConfig {
            modifiers: Modifiers::default(),
            target: TargetSpace::MeshLocalWhole,
        },
    };
    assert!(matches!(
        solve(&request, &Mat4::ZERO, &engine),
        Err(AlignError::Config(_))
    ));
}
