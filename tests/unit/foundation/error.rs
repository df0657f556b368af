use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ReelError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ReelError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        ReelError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn range_errors_name_the_frame() {
    let err = ReelError::FrameOutOfRange {
        frame: 1740,
        total: 1740,
    };
    let msg = err.to_string();
    assert!(msg.contains("1740"));
    assert!(msg.contains("out of range"));

    assert!(ReelError::InvalidFrame(-1.0).to_string().contains("-1"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ReelError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
