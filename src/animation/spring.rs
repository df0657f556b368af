use crate::foundation::core::Fps;

/// Springs still outside tolerance after this long count as never settling.
const SETTLE_HORIZON_SECS: f64 = 120.0;

/// Mass-spring-damper parameters for a 0 → 1 entrance.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
        }
    }
}

impl SpringConfig {
    /// Heavily damped entrance with no overshoot.
    pub fn smooth() -> Self {
        Self {
            damping: 200.0,
            ..Self::default()
        }
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    fn sanitized(self) -> (f64, f64, f64) {
        let k = finite_or(self.stiffness, 100.0).max(1e-9);
        let m = finite_or(self.mass, 1.0).max(1e-9);
        let c = finite_or(self.damping, 10.0).max(0.0);
        (k, c, m)
    }

    /// Damping ratio `ζ`; values at or above 1 never overshoot.
    pub fn damping_ratio(self) -> f64 {
        let (k, c, m) = self.sanitized();
        c / (2.0 * (k * m).sqrt())
    }

    pub fn is_overshoot_free(self) -> bool {
        self.damping_ratio() >= 1.0
    }
}

fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}

/// Spring progress from rest at 0 toward 1, starting `delay` frames after frame 0.
///
/// Closed-form solution evaluated at `t = (frame - delay) / fps`, so the value depends on its
/// arguments only. Under-damped configs (`ζ < 1`) overshoot and ring; configs at or above
/// critical damping follow the critically damped curve and approach 1 monotonically.
pub fn spring(frame: f64, fps: Fps, config: SpringConfig, delay: f64) -> f64 {
    let local = frame - delay;
    if !(local > 0.0) || !local.is_finite() {
        return 0.0;
    }

    let (k, c, m) = config.sanitized();
    let t = local / fps.as_f64();
    let omega0 = (k / m).sqrt();
    let zeta = c / (2.0 * (k * m).sqrt());

    if zeta < 1.0 {
        let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
        let envelope = (-zeta * omega0 * t).exp();
        if envelope == 0.0 {
            return 1.0;
        }
        let phase = omega1 * t;
        1.0 - envelope * (phase.cos() + (zeta * omega0 / omega1) * phase.sin())
    } else {
        let envelope = (-omega0 * t).exp();
        if envelope == 0.0 {
            return 1.0;
        }
        1.0 - envelope * (1.0 + omega0 * t)
    }
}

/// Frames after the delay until the response stays within `tolerance` of 1.
///
/// Returns `None` when the spring keeps ringing past two minutes of timeline. The search never
/// walks the whole horizon: damped-through configs are monotone and bisected, and ringing ones
/// are scanned backwards from the point where their decay envelope drops under `tolerance`.
pub fn settle_frames(fps: Fps, config: SpringConfig, tolerance: f64) -> Option<u64> {
    let horizon = fps.secs_to_frames_round(SETTLE_HORIZON_SECS);
    let outside = |f: u64| (1.0 - spring(f as f64, fps, config, 0.0)).abs() > tolerance;

    let (k, c, m) = config.sanitized();
    let omega0 = (k / m).sqrt();
    let zeta = c / (2.0 * (k * m).sqrt());

    if zeta >= 1.0 {
        if outside(horizon) {
            return None;
        }
        let (mut lo, mut hi) = (0, horizon);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if outside(mid) {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        return Some(lo);
    }

    // |1 - x(t)| <= e^{-ζω0t} / sqrt(1 - ζ²); nothing rings past where that bound meets tolerance.
    if zeta <= 0.0 || !(tolerance > 0.0) {
        return None;
    }
    let amplitude = 1.0 / (1.0 - zeta * zeta).sqrt();
    let bound_secs = (amplitude / tolerance).ln().max(0.0) / (zeta * omega0);
    let bound = (bound_secs * fps.as_f64()).ceil();
    if !bound.is_finite() || bound > horizon as f64 {
        return None;
    }
    let bound = bound as u64;
    Some((0..=bound).rev().find(|&f| outside(f)).map_or(0, |f| f + 1))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
