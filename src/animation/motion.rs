use crate::{
    animation::interpolate::{InterpolateOpts, interpolate},
    foundation::core::Fps,
};

/// Base angular rate (radians per frame) of idle floating motion at `speed = 1`.
pub const FLOAT_BASE_RATE: f64 = 0.02;

/// Caret blink rate in radians per frame; independent of typing speed.
const CARET_RATE: f64 = 0.3;

/// Bounded, zero-mean idle oscillation: `amplitude * sin(frame * 0.02 * speed)`.
pub fn float_offset(frame: f64, speed: f64, amplitude: f64) -> f64 {
    amplitude * (frame * FLOAT_BASE_RATE * speed).sin()
}

/// Secondary idle drift on a cosine carrier, phase-shifted by `phase` frames.
pub fn drift_cos(frame: f64, phase: f64, rate: f64, amplitude: f64) -> f64 {
    amplitude * ((frame + phase) * rate).cos()
}

/// Sine twin of [`drift_cos`].
pub fn drift_sin(frame: f64, phase: f64, rate: f64, amplitude: f64) -> f64 {
    amplitude * ((frame + phase) * rate).sin()
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TypewriterReveal {
    /// Revealed prefix of the source text.
    pub visible: String,
    /// Revealed length in characters.
    pub revealed_chars: usize,
    /// Caret opacity while typing; `None` once the full text is shown.
    pub caret_opacity: Option<f64>,
}

/// Character-by-character reveal of `text`.
///
/// `speed` is frames per character at 60 fps; the typing span scales with `fps` so the wall
/// clock duration is frame-rate independent.
pub fn typewriter_reveal(
    text: &str,
    frame: f64,
    delay: f64,
    speed: f64,
    fps: Fps,
) -> TypewriterReveal {
    let total = text.chars().count();
    let effective = (frame - delay).max(0.0);
    let span = total as f64 * speed * fps.as_f64() / 60.0;
    let progress = interpolate(
        effective,
        [0.0, span],
        [0.0, total as f64],
        InterpolateOpts::clamp_right(),
    );

    let revealed_chars = (progress.ceil().max(0.0) as usize).min(total);
    let visible = text.chars().take(revealed_chars).collect();
    let caret_opacity =
        (progress < total as f64).then(|| 0.5 + (effective * CARET_RATE).sin() * 0.5);

    TypewriterReveal {
        visible,
        revealed_chars,
        caret_opacity,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/motion.rs"]
mod tests;
