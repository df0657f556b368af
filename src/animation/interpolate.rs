use crate::animation::ease::Ease;

/// Behavior outside the input domain, chosen independently for each side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Hold the boundary output value.
    Clamp,
    /// Continue the linear slope past the boundary.
    #[default]
    Extend,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InterpolateOpts {
    #[serde(default)]
    pub ease: Ease,
    #[serde(default)]
    pub left: Extrapolate,
    #[serde(default)]
    pub right: Extrapolate,
}

impl InterpolateOpts {
    pub fn clamp() -> Self {
        Self {
            ease: Ease::Linear,
            left: Extrapolate::Clamp,
            right: Extrapolate::Clamp,
        }
    }

    pub fn clamp_right() -> Self {
        Self {
            right: Extrapolate::Clamp,
            ..Self::default()
        }
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

/// Map `input` from `domain` to `range`.
///
/// Inside the domain the normalized progress goes through `opts.ease`. Outside it each side
/// follows its [`Extrapolate`] policy; `Extend` continues the un-eased linear slope so eased
/// curves stay finite and monotone past their ends.
///
/// Total over its inputs: a degenerate domain steps from `range[0]` to `range[1]` at
/// `domain[0]`, and a non-finite `input` yields `range[0]`.
pub fn interpolate(input: f64, domain: [f64; 2], range: [f64; 2], opts: InterpolateOpts) -> f64 {
    let [a, b] = domain;
    let [c, d] = range;
    if !input.is_finite() {
        return c;
    }
    if a == b {
        return if input < a { c } else { d };
    }

    let t = (input - a) / (b - a);
    if t < 0.0 {
        return match opts.left {
            Extrapolate::Clamp => c,
            Extrapolate::Extend => c + t * (d - c),
        };
    }
    if t > 1.0 {
        return match opts.right {
            Extrapolate::Clamp => d,
            Extrapolate::Extend => c + t * (d - c),
        };
    }
    if t == 1.0 {
        return d;
    }
    c + opts.ease.apply(t) * (d - c)
}

/// Short form of [`interpolate`] for frame-driven ramps.
pub fn lerp(frame: f64, domain: [f64; 2], range: [f64; 2], opts: InterpolateOpts) -> f64 {
    interpolate(frame, domain, range, opts)
}

/// Map a normalized driver (usually a spring) onto `[from, to]`. Overshoot past 1 carries through.
pub fn mix(progress: f64, from: f64, to: f64) -> f64 {
    interpolate(progress, [0.0, 1.0], [from, to], InterpolateOpts::default())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
