use super::*;

#[test]
fn default_modifiers_are_identity() {
    let m = Modifiers::default();
    let v = Vec3::new(3.0, -2.0, 7.5);
    assert_eq!(m.apply(v), v);
}

#[test]
fn pipeline_order_is_normalize_flip_multiply() {
    let m = Modifiers::new(true, true, 4.0);
    let out = apply_point_modifiers(Vec3::new(0.0, 10.0, 0.0), &m);
    assert!(out.abs_diff_eq(Vec3::new(0.0, -4.0, 0.0), 1e-12));
}

#[test]
fn unit_vector_on_zero_coordinate_is_noop() {
    let m = Modifiers::new(true, false, 5.0);
    assert_eq!(apply_point_modifiers(Vec3::ZERO, &m), Vec3::ZERO);
}

#[test]
fn multiplier_alone_scales_point() {
    let m = Modifiers::new(false, false, 0.5);
    assert_eq!(apply_point_modifiers(Vec3::new(2.0, 4.0, 6.0), &m), Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn line_modifiers_keep_start() {
    let start = Vec3::new(-1.0, 2.0, 0.0);
    let end = Vec3::new(3.0, 2.0, 0.0);
    let (s, e) = apply_line_modifiers(start, end, &Modifiers::new(false, true, 1.0));
    assert_eq!(s, start);
    assert_eq!(e, Vec3::new(-5.0, 2.0, 0.0));
}

#[test]
fn degenerate_line_stays_degenerate() {
    let p = Vec3::new(1.0, 1.0, 1.0);
    let (s, e) = apply_line_modifiers(p, p, &Modifiers::new(true, true, 9.0));
    assert_eq!(s, p);
    assert_eq!(e, p);
}

#[test]
fn modifiers_serialize_with_field_names() {
    let json = serde_json::to_string(&Modifiers::new(true, false, 2.0)).unwrap();
    assert!(json.contains("\"make_unit_vector\":true"));
    assert!(json.contains("\"multiplier\":2.0"));
}
