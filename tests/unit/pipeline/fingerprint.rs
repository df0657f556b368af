use super::*;
use crate::{
    composition::model::{Composition, Session},
    foundation::core::FrameIndex,
};

fn session() -> Session {
    Session::new(&Composition::introduction()).unwrap()
}

#[test]
fn same_frame_same_fingerprint() {
    let s = session();
    let a = fingerprint_frame(&s.evaluate(321).unwrap()).unwrap();
    let b = fingerprint_frame(&s.evaluate(321).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn moving_frames_differ() {
    let s = session();
    let a = fingerprint_frame(&s.evaluate(10).unwrap()).unwrap();
    let b = fingerprint_frame(&s.evaluate(11).unwrap()).unwrap();
    assert_ne!(a, b);
}

#[test]
fn opacity_change_changes_fingerprint() {
    let s = session();
    let frame = s.evaluate(500).unwrap();
    let mut tweaked = frame.clone();
    tweaked.layers[0].root.children[0].opacity = 0.5;
    assert_ne!(
        fingerprint_frame(&frame).unwrap(),
        fingerprint_frame(&tweaked).unwrap()
    );
}

#[test]
fn frame_index_is_not_hashed() {
    let s = session();
    let frame = s.evaluate(42).unwrap();
    let mut moved = frame.clone();
    moved.frame = FrameIndex(9999);
    assert_eq!(
        fingerprint_frame(&frame).unwrap(),
        fingerprint_frame(&moved).unwrap()
    );
}

#[test]
fn displays_as_32_hex_digits() {
    let fp = FrameFingerprint { hi: 1, lo: 0xff };
    assert_eq!(fp.to_string(), format!("{:016x}{:016x}", 1, 0xff));
    assert_eq!(fp.to_string().len(), 32);
}
