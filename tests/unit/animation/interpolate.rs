use super::*;

#[test]
fn clamp_holds_exact_boundaries() {
    let opts = InterpolateOpts::clamp();
    for f in [-100.0, -1.0, 0.0] {
        assert_eq!(lerp(f, [0.0, 180.0], [3.0, -2.0], opts), 3.0);
    }
    for f in [180.0, 181.0, 10_000.0] {
        assert_eq!(lerp(f, [0.0, 180.0], [3.0, -2.0], opts), -2.0);
    }
}

#[test]
fn clamped_ramp_is_monotone_between_ends() {
    let opts = InterpolateOpts::clamp().with_ease(Ease::InOutSine);
    let mut prev = lerp(0.0, [10.0, 70.0], [0.0, 400.0], opts);
    for f in 0..100 {
        let v = lerp(f64::from(f), [10.0, 70.0], [0.0, 400.0], opts);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn extend_continues_linear_slope() {
    let opts = InterpolateOpts::default();
    assert_eq!(interpolate(20.0, [0.0, 10.0], [0.0, 1.0], opts), 2.0);
    assert_eq!(interpolate(-10.0, [0.0, 10.0], [0.0, 1.0], opts), -1.0);
}

#[test]
fn sides_are_independent() {
    let opts = InterpolateOpts::clamp_right();
    assert_eq!(interpolate(-5.0, [0.0, 10.0], [0.0, 10.0], opts), -5.0);
    assert_eq!(interpolate(15.0, [0.0, 10.0], [0.0, 10.0], opts), 10.0);
}

#[test]
fn easing_shapes_the_interior_only() {
    let opts = InterpolateOpts::clamp().with_ease(Ease::OutQuad);
    let mid = interpolate(90.0, [0.0, 180.0], [-50.0, 20.0], opts);
    // OutQuad(0.5) = 0.75
    assert!((mid - (-50.0 + 0.75 * 70.0)).abs() < 1e-9);
}

#[test]
fn degenerate_domain_and_non_finite_input_stay_total() {
    let opts = InterpolateOpts::default();
    assert_eq!(interpolate(4.0, [5.0, 5.0], [1.0, 2.0], opts), 1.0);
    assert_eq!(interpolate(5.0, [5.0, 5.0], [1.0, 2.0], opts), 2.0);
    assert_eq!(interpolate(f64::NAN, [0.0, 1.0], [7.0, 9.0], opts), 7.0);
    assert_eq!(interpolate(f64::INFINITY, [0.0, 1.0], [7.0, 9.0], opts), 7.0);
}

#[test]
fn mix_maps_spring_progress() {
    assert_eq!(mix(0.0, -120.0, 0.0), -120.0);
    assert_eq!(mix(1.0, -120.0, 0.0), 0.0);
    assert!((mix(0.5, 0.9, 1.0) - 0.95).abs() < 1e-12);
}
