//! # Pointed Circle Tests

use super::*;
use crate::error::ValidationError;
use approx::{assert_abs_diff_eq, assert_relative_eq};

#[test]
fn test_zero_shift_is_plain_circle() {
    let shape = build_pointed_circle(1.0, 8, DVec2::ZERO).unwrap();

    assert_eq!(shape.mesh.vertex(0), DVec3::ZERO);
    assert_eq!(shape.collider, ColliderShape::Circle(Circle::new(DVec2::ZERO, 1.0)));
}

#[test]
fn test_far_shift_adds_triangle() {
    let shape = build_pointed_circle(1.0, 8, DVec2::new(3.0, 0.0)).unwrap();

    let ColliderShape::CircleWithTriangle { circle, triangle } = shape.collider else {
        panic!("expected circle with triangle, got {:?}", shape.collider);
    };
    assert_eq!(circle, Circle::new(DVec2::ZERO, 1.0));
    assert_eq!(triangle[0], DVec2::new(3.0, 0.0));
    assert_abs_diff_eq!(triangle[1].x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(triangle[1].y, -1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(triangle[2].x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(triangle[2].y, 1.0, epsilon = 1e-12);
}

#[test]
fn test_triangle_base_is_perpendicular_to_shift() {
    let shift = DVec2::new(-2.0, 2.0);
    let shape = build_pointed_circle(1.5, 12, shift).unwrap();
    let triangle = shape.collider.outline().unwrap();

    for p in &triangle[1..] {
        assert_relative_eq!(p.length(), 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(p.dot(shift), 0.0, epsilon = 1e-12);
    }
    // Minus a quarter turn first, then plus a quarter turn
    assert!(shift.perp_dot(triangle[1]) < 0.0);
    assert!(shift.perp_dot(triangle[2]) > 0.0);
}

#[test]
fn test_degeneration_compares_squared_shift() {
    // |shift| = 0.9 < radius 1, but |shift|^2 = 0.81 is still < 1: plain circle
    assert!(matches!(
        build_pointed_circle(1.0, 8, DVec2::new(0.9, 0.0)).unwrap().collider,
        ColliderShape::Circle(_)
    ));
    // |shift| = 1.5 < radius 2, but |shift|^2 = 2.25 > 2: triangle appears
    assert!(matches!(
        build_pointed_circle(2.0, 8, DVec2::new(1.5, 0.0)).unwrap().collider,
        ColliderShape::CircleWithTriangle { .. }
    ));
    // |shift|^2 == radius exactly: strict comparison keeps the plain circle
    assert!(matches!(
        build_pointed_circle(4.0, 8, DVec2::new(2.0, 0.0)).unwrap().collider,
        ColliderShape::Circle(_)
    ));
}

#[test]
fn test_apex_is_vertex_zero() {
    let shift = DVec2::new(0.25, -3.0);
    let shape = build_pointed_circle(1.0, 6, shift).unwrap();
    assert_eq!(shape.mesh.vertex(0), shift.extend(0.0));
    assert_eq!(shape.mesh.vertex_count(), 7);
    assert_eq!(shape.mesh.triangle_count(), 6);
}

#[test]
fn test_rim_starts_on_first_step() {
    // No extra offset: i = 1 sits at angle delta
    let shape = build_pointed_circle(2.0, 4, DVec2::ZERO).unwrap();
    let first = shape.mesh.vertex(1);
    assert_abs_diff_eq!(first.x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(first.y, 2.0, epsilon = 1e-12);

    let last = shape.mesh.vertex(4);
    assert_abs_diff_eq!(last.x, 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(last.y, 0.0, epsilon = 1e-12);

    for v in &shape.mesh.vertices()[1..] {
        assert_relative_eq!(v.length(), 2.0, epsilon = 1e-12);
    }
}

#[test]
fn test_fan_triangles_wrap_around() {
    let shape = build_pointed_circle(1.0, 3, DVec2::ZERO).unwrap();
    assert_eq!(shape.mesh.triangles(), &[[2, 1, 0], [3, 2, 0], [1, 3, 0]]);
}

#[test]
fn test_uvs_cover_apex_and_rim() {
    let shape = build_pointed_circle(1.0, 4, DVec2::new(3.0, 0.0)).unwrap();
    let uvs = shape.mesh.uvs();

    // Bounding box spans x in [-1, 3], y in [-1, 1]
    assert!(uvs[0].abs_diff_eq(DVec2::new(1.0, 0.5), 1e-12));
    assert_abs_diff_eq!(uvs[2].x, 0.0, epsilon = 1e-12); // rim vertex at (-1, 0)
    assert!(uvs.iter().all(|uv| (0.0..=1.0).contains(&uv.x) && (0.0..=1.0).contains(&uv.y)));
}

#[test]
fn test_negative_radius_is_flipped() {
    let shift = DVec2::new(2.0, 1.0);
    assert_eq!(
        build_pointed_circle(-1.5, 10, shift).unwrap(),
        build_pointed_circle(1.5, 10, shift).unwrap()
    );
}

#[test]
fn test_validation() {
    assert_eq!(
        build_pointed_circle(1.0, 1, DVec2::ZERO).unwrap_err(),
        ValidationError::SidesTooFew { sides: 1 }
    );
    assert_eq!(
        build_pointed_circle(0.0, 8, DVec2::ZERO).unwrap_err(),
        ValidationError::ZeroRadius
    );
    assert_eq!(
        build_pointed_circle(0.0, 0, DVec2::ZERO).unwrap_err(),
        ValidationError::SidesTooFew { sides: 0 }
    );
}

#[test]
fn test_build_is_idempotent() {
    let params = PointedCircleParams::new(0.8, 11, DVec2::new(-1.3, 0.4));
    assert_eq!(params.build().unwrap(), params.build().unwrap());
}

#[test]
fn test_params_is_pointed() {
    assert!(!PointedCircleParams::default().is_pointed());
    assert!(PointedCircleParams::new(1.0, 8, DVec2::new(3.0, 0.0)).is_pointed());
    assert!(PointedCircleParams::new(-1.0, 8, DVec2::new(0.0, 1.5)).is_pointed());
}
