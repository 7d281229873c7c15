use daydial::core::dial::angle::{
    angle_to_minutes, describe_arc, describe_donut_slice, minutes_to_angle, normalize_angle,
    polar_to_cartesian,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn zero_degrees_is_twelve_o_clock_and_angles_run_clockwise() {
    let top = polar_to_cartesian(200.0, 200.0, 100.0, 0.0);
    assert!(close(top.x, 200.0) && close(top.y, 100.0));

    let right = polar_to_cartesian(200.0, 200.0, 100.0, 90.0);
    assert!(close(right.x, 300.0) && close(right.y, 200.0));

    let bottom = polar_to_cartesian(200.0, 200.0, 100.0, 180.0);
    assert!(close(bottom.x, 200.0) && close(bottom.y, 300.0));

    let left = polar_to_cartesian(200.0, 200.0, 100.0, 270.0);
    assert!(close(left.x, 100.0) && close(left.y, 200.0));
}

#[test]
fn minutes_map_linearly_onto_half_degrees() {
    assert_eq!(minutes_to_angle(0.0), 0.0);
    assert_eq!(minutes_to_angle(60.0), 30.0);
    assert_eq!(minutes_to_angle(360.0), 180.0);
    assert_eq!(minutes_to_angle(720.0), 360.0);
    assert_eq!(angle_to_minutes(300.0), 600.0);
}

#[test]
fn normalize_angle_wraps_into_range() {
    assert_eq!(normalize_angle(360.0), 0.0);
    assert_eq!(normalize_angle(-90.0), 270.0);
    assert_eq!(normalize_angle(725.0), 5.0);
}

#[test]
fn arc_is_drawn_from_end_back_to_start() {
    let d = describe_arc(200.0, 200.0, 100.0, 0.0, 90.0);
    assert_eq!(d, "M 300 200 A 100 100 0 0 0 200 100");
}

#[test]
fn arc_uses_large_flag_past_half_circle() {
    let d = describe_arc(200.0, 200.0, 100.0, 0.0, 270.0);
    assert!(d.contains("A 100 100 0 1 0"), "{d}");
}

#[test]
fn donut_slice_is_a_closed_path_with_reversed_inner_arc() {
    let d = describe_donut_slice(200.0, 200.0, 40.0, 110.0, 0.0, 30.0);
    assert!(d.starts_with("M "));
    assert!(d.ends_with(" Z"));
    assert!(d.contains("A 110 110 0 0 0"));
    assert!(d.contains("A 40 40 0 0 1"));
    assert_eq!(d.matches(" L ").count(), 1);
}
