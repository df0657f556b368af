use super::*;

fn fps60() -> Fps {
    Fps::integer(60).unwrap()
}

#[test]
fn float_is_bounded_and_zero_at_origin() {
    assert_eq!(float_offset(0.0, 0.8, 4.0), 0.0);
    for f in 0..2000 {
        let v = float_offset(f64::from(f), 1.3, 4.0);
        assert!(v.abs() <= 4.0);
    }
}

#[test]
fn float_period_scales_inversely_with_speed() {
    let period = |speed: f64| std::f64::consts::TAU / (FLOAT_BASE_RATE * speed);
    let p1 = period(1.0);
    let p2 = period(2.0);
    assert!((p1 / p2 - 2.0).abs() < 1e-12);
    let v = float_offset(12.3, 2.0, 3.0);
    assert!((float_offset(12.3 + p2, 2.0, 3.0) - v).abs() < 1e-9);
}

#[test]
fn drift_twins_share_amplitude() {
    for f in 0..500 {
        let c = drift_cos(f64::from(f), 35.0, 0.015, 2.0);
        let s = drift_sin(f64::from(f), 35.0, 0.015, 2.0);
        assert!(((c * c + s * s).sqrt() - 2.0).abs() < 1e-9);
    }
}

#[test]
fn typewriter_prefix_is_monotone_and_completes() {
    let text = "AI agents collapsed the gap between idea and execution";
    let n = text.chars().count();
    let delay = 70.0;
    let speed = 2.0;
    let done_at = delay + n as f64 * speed * 60.0 / 60.0;

    let mut prev = 0;
    for f in 0..400 {
        let r = typewriter_reveal(text, f64::from(f), delay, speed, fps60());
        assert!(r.revealed_chars >= prev);
        assert_eq!(r.visible.chars().count(), r.revealed_chars);
        assert!(text.starts_with(&r.visible));
        prev = r.revealed_chars;
        if f64::from(f) >= done_at {
            assert_eq!(r.visible, text);
            assert!(r.caret_opacity.is_none());
        }
    }
}

#[test]
fn typewriter_shows_caret_before_start() {
    let r = typewriter_reveal("hello", 10.0, 70.0, 2.0, fps60());
    assert_eq!(r.visible, "");
    let caret = r.caret_opacity.unwrap();
    assert!((caret - 0.5).abs() < 1e-12);
}

#[test]
fn typewriter_caret_stays_in_unit_range() {
    for f in 0..300 {
        let r = typewriter_reveal("Applied learning", f64::from(f), 0.0, 4.0, fps60());
        if let Some(c) = r.caret_opacity {
            assert!((0.0..=1.0).contains(&c));
        }
    }
}

#[test]
fn typewriter_is_idempotent() {
    let a = typewriter_reveal("0 → 1 shipping", 17.0, 3.0, 2.0, fps60());
    let b = typewriter_reveal("0 → 1 shipping", 17.0, 3.0, 2.0, fps60());
    assert_eq!(a, b);
}

#[test]
fn typewriter_counts_characters_not_bytes() {
    // 14 frames at speed 2 reveals 7 characters; the arrow is one char, three bytes.
    let r = typewriter_reveal("0 → 1 shipping", 14.0, 0.0, 2.0, fps60());
    assert_eq!(r.revealed_chars, 7);
    assert_eq!(r.visible, "0 → 1 s");
}

#[test]
fn empty_text_reveals_nothing() {
    let r = typewriter_reveal("", 100.0, 0.0, 2.0, fps60());
    assert_eq!(r.visible, "");
    assert!(r.caret_opacity.is_none());
}
