use crate::{
    foundation::core::Rgba8Premul,
    scene::model::{FamilyRole, Tone},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Immutable palette and font families shared by every scene.
pub struct Theme {
    pub background: Rgba8Premul,
    pub background_end: Rgba8Premul,
    pub text: Rgba8Premul,
    pub text_muted: Rgba8Premul,
    pub glass: Rgba8Premul,
    pub glass_border: Rgba8Premul,
    pub glass_emphasis: Rgba8Premul,
    pub glass_border_emphasis: Rgba8Premul,
    pub particle: Rgba8Premul,
    pub rule: Rgba8Premul,
    pub spine: Rgba8Premul,
    pub dot: Rgba8Premul,
    pub display_family: String,
    pub body_family: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// White background with near-black ink and frosted glass panels.
    pub fn light() -> Self {
        Self {
            background: Rgba8Premul::opaque(0xff, 0xff, 0xff),
            background_end: Rgba8Premul::opaque(0xfa, 0xfa, 0xfa),
            text: Rgba8Premul::opaque(0x18, 0x18, 0x1b),
            text_muted: Rgba8Premul::opaque(0x71, 0x71, 0x7a),
            glass: Rgba8Premul::from_rgb_alpha(255, 255, 255, 0.7),
            glass_border: Rgba8Premul::from_rgb_alpha(0, 0, 0, 0.08),
            glass_emphasis: Rgba8Premul::from_rgb_alpha(248, 250, 252, 0.9),
            glass_border_emphasis: Rgba8Premul::from_rgb_alpha(0, 0, 0, 0.12),
            particle: Rgba8Premul::from_rgb_alpha(0, 0, 0, 0.06),
            rule: Rgba8Premul::from_rgb_alpha(0, 0, 0, 0.2),
            spine: Rgba8Premul::from_rgb_alpha(0, 0, 0, 0.15),
            dot: Rgba8Premul::from_rgb_alpha(0, 0, 0, 0.12),
            display_family: "Outfit".to_owned(),
            body_family: "Geist".to_owned(),
        }
    }

    pub fn family(&self, role: FamilyRole) -> &str {
        match role {
            FamilyRole::Display => &self.display_family,
            FamilyRole::Body => &self.body_family,
        }
    }

    pub fn tone(&self, tone: Tone) -> Rgba8Premul {
        match tone {
            Tone::Primary => self.text,
            Tone::Muted => self.text_muted,
        }
    }

    /// Black at `alpha`, for faint watermarks and glows.
    pub fn ink(&self, alpha: f64) -> Rgba8Premul {
        Rgba8Premul::from_rgb_alpha(0, 0, 0, alpha)
    }
}
