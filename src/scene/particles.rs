use crate::foundation::math::wrap;

pub const PARTICLE_COUNT: usize = 50;

/// Static placement of one background particle, derived in closed form from index and seed.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Particle {
    pub index: usize,
    /// Horizontal anchor in percent of canvas width.
    pub x_pct: f64,
    /// Vertical anchor in percent of canvas height.
    pub y_pct: f64,
    pub z: f64,
    pub size: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ParticleState {
    pub x_offset: f64,
    pub y_offset: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn new(index: usize, seed: u32) -> Self {
        let i = index as f64;
        let seed = f64::from(seed);
        Self {
            index,
            x_pct: wrap(i * 137.5 + seed * 50.0, 100.0),
            y_pct: wrap(i * 73.7 + seed * 30.0, 100.0),
            z: (index % 5) as f64 * -120.0 - 40.0,
            size: 1.0 + (index % 4) as f64 * 1.2,
        }
    }

    /// Slow two-axis drift plus a faint flicker.
    pub fn animate(&self, frame: f64) -> ParticleState {
        let i = self.index as f64;
        let tier = (self.index % 4) as f64;
        ParticleState {
            x_offset: ((frame * 0.2 + i * 10.0) * 0.012).cos() * 15.0,
            y_offset: ((frame * 0.25 + i * 12.0) * 0.015).sin() * 25.0,
            opacity: 0.02 + tier * 0.015 + (frame * 0.02 + i).sin() * 0.01,
        }
    }
}

pub fn particle_field(seed: u32) -> impl Iterator<Item = Particle> {
    (0..PARTICLE_COUNT).map(move |i| Particle::new(i, seed))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/particles.rs"]
mod tests;
