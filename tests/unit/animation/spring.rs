use super::*;

fn fps60() -> Fps {
    Fps::integer(60).unwrap()
}

#[test]
fn zero_before_and_at_delay() {
    let cfg = SpringConfig::smooth();
    for f in 0..=25 {
        assert_eq!(spring(f64::from(f), fps60(), cfg, 25.0), 0.0);
    }
    assert!(spring(26.0, fps60(), cfg, 25.0) > 0.0);
}

#[test]
fn frame_zero_without_delay_is_zero() {
    assert_eq!(spring(0.0, fps60(), SpringConfig::smooth(), 0.0), 0.0);
    assert_eq!(spring(0.0, fps60(), SpringConfig::default(), 0.0), 0.0);
}

#[test]
fn smooth_spring_is_monotone_and_converges() {
    let cfg = SpringConfig::smooth();
    assert!(cfg.is_overshoot_free());
    let mut prev = 0.0;
    for f in 0..600 {
        let v = spring(f64::from(f), fps60(), cfg, 10.0);
        assert!(v >= prev, "decreased at frame {f}");
        assert!(v <= 1.0);
        prev = v;
    }
    assert!((1.0 - spring(10.0 + 120.0, fps60(), cfg, 10.0)) < 1e-3);
}

#[test]
fn low_damping_overshoots_then_settles() {
    let cfg = SpringConfig::default().with_damping(4.0);
    assert!(!cfg.is_overshoot_free());
    let peak = (0..120)
        .map(|f| spring(f64::from(f), fps60(), cfg, 0.0))
        .fold(0.0_f64, f64::max);
    assert!(peak > 1.05);
    assert!((spring(60.0 * 10.0, fps60(), cfg, 0.0) - 1.0).abs() < 1e-3);
}

#[test]
fn higher_damping_rings_less() {
    let peak = |damping: f64| {
        let cfg = SpringConfig::default().with_damping(damping);
        (0..240)
            .map(|f| spring(f64::from(f), fps60(), cfg, 0.0))
            .fold(0.0_f64, f64::max)
    };
    assert!(peak(4.0) > peak(10.0));
    assert!(peak(10.0) > peak(18.0));
}

#[test]
fn evaluation_is_call_order_independent() {
    let cfg = SpringConfig::default();
    let forward: Vec<f64> = (0..90)
        .map(|f| spring(f64::from(f), fps60(), cfg, 5.0))
        .collect();
    let backward: Vec<f64> = (0..90)
        .rev()
        .map(|f| spring(f64::from(f), fps60(), cfg, 5.0))
        .collect();
    let backward: Vec<f64> = backward.into_iter().rev().collect();
    assert_eq!(forward, backward);
}

#[test]
fn continuous_across_fractional_frames() {
    let cfg = SpringConfig::smooth();
    let a = spring(30.0, fps60(), cfg, 0.0);
    let b = spring(30.001, fps60(), cfg, 0.0);
    assert!((a - b).abs() < 1e-3);
}

#[test]
fn degenerate_inputs_never_produce_nan() {
    let weird = SpringConfig {
        stiffness: 0.0,
        damping: f64::NAN,
        mass: -1.0,
    };
    for f in [0.0, 1.0, 1e6, 1e300] {
        assert!(spring(f, fps60(), weird, 0.0).is_finite());
        assert!(spring(f, fps60(), SpringConfig::smooth(), 0.0).is_finite());
    }
    assert_eq!(spring(f64::NAN, fps60(), SpringConfig::smooth(), 0.0), 0.0);
}

#[test]
fn smooth_spring_settles_within_a_second() {
    let frames = settle_frames(fps60(), SpringConfig::smooth(), 1e-3).unwrap();
    assert!(frames > 30);
    assert!(frames <= 60);
}

#[test]
fn undamped_spring_never_settles() {
    let cfg = SpringConfig::default().with_damping(0.0);
    assert_eq!(settle_frames(fps60(), cfg, 1e-3), None);
}

#[test]
fn settle_time_is_independent_of_frame_rate() {
    let base = settle_frames(fps60(), SpringConfig::smooth(), 1e-3).unwrap() as f64 / 60.0;
    let fast = Fps::integer(1_000_000).unwrap();
    let secs = settle_frames(fast, SpringConfig::smooth(), 1e-3).unwrap() as f64 / 1e6;
    assert!((secs - base).abs() <= 1.0 / 60.0, "{secs} vs {base}");
}

#[test]
fn ringing_spring_settles_after_its_last_overshoot() {
    let cfg = SpringConfig::default().with_damping(4.0);
    let f = settle_frames(fps60(), cfg, 1e-3).unwrap();
    assert!((spring(f as f64 - 1.0, fps60(), cfg, 0.0) - 1.0).abs() > 1e-3);
    for g in f..f + 600 {
        assert!((spring(g as f64, fps60(), cfg, 0.0) - 1.0).abs() <= 1e-3, "frame {g}");
    }
}
