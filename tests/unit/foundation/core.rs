use super::*;

#[test]
fn frame_range_length_is_exclusive_of_end() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert_eq!(r.len_frames(), 3);
    assert!(!r.is_empty());
    assert!(FrameRange::new(FrameIndex(4), FrameIndex(4)).unwrap().is_empty());
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(60, 0).is_err());
}

#[test]
fn secs_to_frames_rounds_to_nearest() {
    let fps = Fps::integer(60).unwrap();
    assert_eq!(fps.secs_to_frames_round(0.5), 30);
    assert_eq!(fps.secs_to_frames_round(3.5), 210);
    assert_eq!(fps.secs_to_frames_round(4.5), 270);

    let ntsc = Fps::new(30000, 1001).unwrap();
    // 1s at 29.97 fps is 29.97 frames.
    assert_eq!(ntsc.secs_to_frames_round(1.0), 30);
    assert_eq!(ntsc.secs_to_frames_round(-1.0), 0);
    assert_eq!(ntsc.secs_to_frames_round(f64::NAN), 0);
}

#[test]
fn straight_alpha_is_premultiplied() {
    let c = Rgba8Premul::from_rgb_alpha(255, 255, 255, 0.8);
    assert_eq!(c.a, 204);
    assert_eq!(c.r, 204);

    let black = Rgba8Premul::from_rgb_alpha(0, 0, 0, 0.06);
    assert_eq!(black, Rgba8Premul { r: 0, g: 0, b: 0, a: 15 });
}

#[test]
fn canvas_center_is_half_extent() {
    let canvas = Canvas {
        width: 1920,
        height: 1080,
    };
    assert_eq!(canvas.center(), Point::new(960.0, 540.0));
}
