use crate::{
    animation::{ease::Ease, spring::SpringConfig},
    foundation::error::{ReelError, ReelResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Static description of one scene.
///
/// Descriptors are plain data: every scene variant (title card, card rows, alternating timeline,
/// grouped pills, contact list) is expressed through the same beats and evaluated by the same
/// code. Descriptors are validated once, when the composition is defined.
pub struct SceneDescriptor {
    /// Stable scene identifier, unique within a composition.
    pub id: String,
    /// Seed for the background particle field.
    pub seed: u32,
    /// Spring used by every entrance in this scene.
    #[serde(default = "SpringConfig::smooth")]
    pub spring: SpringConfig,
    /// Slow viewing sweep across the scene.
    pub camera: CameraSweep,
    /// Depth layers drawn behind the content.
    #[serde(default)]
    pub backdrop: Vec<Backdrop>,
    /// Optional spring delay fading the whole content block in.
    #[serde(default)]
    pub content_fade: Option<f64>,
    /// Foreground content, top to bottom.
    pub beats: Vec<Beat>,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One camera track: `from` at local frame 0, `to` at the end of the sweep span.
pub struct Sweep {
    pub from: f64,
    pub to: f64,
    #[serde(default)]
    pub ease: Ease,
}

impl Sweep {
    pub fn new(from: f64, to: f64) -> Self {
        Self {
            from,
            to,
            ease: Ease::Linear,
        }
    }

    pub fn eased(from: f64, to: f64, ease: Ease) -> Self {
        Self { from, to, ease }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraSweep {
    /// Sweep length in frames; tracks hold their end value afterwards.
    pub span: f64,
    #[serde(default)]
    pub rotate_x: Option<Sweep>,
    #[serde(default)]
    pub rotate_y: Option<Sweep>,
    #[serde(default)]
    pub translate_z: Option<Sweep>,
    /// Horizontal perspective origin in percent; 50 when absent.
    #[serde(default)]
    pub origin_x: Option<Sweep>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Backdrop {
    /// Soft radial disc that bobs with idle float.
    Glow {
        z: f64,
        opacity: f64,
        diameter: f64,
        /// Peak ink alpha at the disc center.
        ink: f64,
        /// Fraction of the radius where the falloff reaches transparent.
        extent: f64,
        float_speed: f64,
        float_amplitude: f64,
    },
    /// Oversized faint word behind the content.
    Watermark {
        z: f64,
        opacity: f64,
        text: String,
        size: f64,
        letter_spacing: f64,
        ink: f64,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyRole {
    /// Headline face.
    Display,
    #[default]
    Body,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Primary,
    Muted,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextStyle {
    pub family: FamilyRole,
    pub weight: u16,
    pub size: f64,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub letter_spacing: f64,
    #[serde(default)]
    pub uppercase: bool,
    #[serde(default = "default_line_height")]
    pub line_height: f64,
}

fn default_line_height() -> f64 {
    1.2
}

impl TextStyle {
    pub fn display(size: f64, weight: u16) -> Self {
        Self {
            family: FamilyRole::Display,
            weight,
            size,
            tone: Tone::Primary,
            letter_spacing: 0.0,
            uppercase: false,
            line_height: default_line_height(),
        }
    }

    pub fn body(size: f64, weight: u16) -> Self {
        Self {
            family: FamilyRole::Body,
            ..Self::display(size, weight)
        }
    }

    pub fn muted(mut self) -> Self {
        self.tone = Tone::Muted;
        self
    }

    pub fn tracking(mut self, px: f64) -> Self {
        self.letter_spacing = px;
        self
    }

    pub fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    pub fn leading(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }

    fn validate(&self, what: &str) -> ReelResult<()> {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(ReelError::validation(format!(
                "{what} text size must be finite and > 0"
            )));
        }
        if !(self.line_height.is_finite() && self.line_height > 0.0) {
            return Err(ReelError::validation(format!(
                "{what} line_height must be finite and > 0"
            )));
        }
        if !self.letter_spacing.is_finite() {
            return Err(ReelError::validation(format!(
                "{what} letter_spacing must be finite"
            )));
        }
        if self.weight == 0 || self.weight > 1000 {
            return Err(ReelError::validation(format!(
                "{what} font weight must be in 1..=1000"
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Resting depth of item `i`: `base + i * step + (i % 2) * parity`.
pub struct RestDepth {
    #[serde(default)]
    pub base: f64,
    #[serde(default)]
    pub step: f64,
    #[serde(default)]
    pub parity: f64,
}

impl RestDepth {
    pub fn z(&self, index: usize) -> f64 {
        self.base + index as f64 * self.step + (index % 2) as f64 * self.parity
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Off-screen starting pose that settles into the resting pose as the entrance spring goes 0 → 1.
pub struct Entrance {
    #[serde(default)]
    pub from_x: f64,
    #[serde(default)]
    pub from_y: f64,
    #[serde(default)]
    pub from_z: f64,
    #[serde(default = "one")]
    pub from_scale: f64,
    #[serde(default)]
    pub rest: RestDepth,
    /// Flip `from_x` on odd items.
    #[serde(default)]
    pub mirror_x: bool,
    /// Opacity follows the spring when set.
    #[serde(default = "yes")]
    pub fade: bool,
}

fn one() -> f64 {
    1.0
}

fn yes() -> bool {
    true
}

impl Default for Entrance {
    fn default() -> Self {
        Self {
            from_x: 0.0,
            from_y: 0.0,
            from_z: 0.0,
            from_scale: 1.0,
            rest: RestDepth::default(),
            mirror_x: false,
            fade: true,
        }
    }
}

impl Entrance {
    pub fn depth(from_z: f64) -> Self {
        Self {
            from_z,
            ..Self::default()
        }
    }

    pub fn scale_from(mut self, scale: f64) -> Self {
        self.from_scale = scale;
        self
    }

    pub fn slide_x(mut self, px: f64) -> Self {
        self.from_x = px;
        self
    }

    pub fn slide_y(mut self, px: f64) -> Self {
        self.from_y = px;
        self
    }

    pub fn rest(mut self, rest: RestDepth) -> Self {
        self.rest = rest;
        self
    }

    pub fn mirrored(mut self) -> Self {
        self.mirror_x = true;
        self
    }

    pub fn no_fade(mut self) -> Self {
        self.fade = false;
        self
    }

    fn validate(&self, what: &str) -> ReelResult<()> {
        let values = [
            self.from_x,
            self.from_y,
            self.from_z,
            self.from_scale,
            self.rest.base,
            self.rest.step,
            self.rest.parity,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ReelError::validation(format!(
                "{what} entrance values must be finite"
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wave {
    #[default]
    Cos,
    Sin,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Secondary horizontal idle drift: `amplitude * wave((frame + phase) * rate)`.
pub struct Drift {
    #[serde(default)]
    pub wave: Wave,
    pub rate: f64,
    pub phase_step: f64,
    #[serde(default)]
    pub group_phase_step: f64,
    pub amplitude: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Idle float of item `i` in group `g` runs at `speed + i * speed_step + g * group_speed_step`.
pub struct IdleMotion {
    pub speed: f64,
    #[serde(default)]
    pub speed_step: f64,
    #[serde(default)]
    pub group_speed_step: f64,
    pub amplitude: f64,
    #[serde(default)]
    pub drift: Option<Drift>,
}

impl IdleMotion {
    pub fn new(speed: f64, speed_step: f64, amplitude: f64) -> Self {
        Self {
            speed,
            speed_step,
            group_speed_step: 0.0,
            amplitude,
            drift: None,
        }
    }

    pub fn still() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn with_drift(mut self, drift: Drift) -> Self {
        self.drift = Some(drift);
        self
    }

    pub fn group_step(mut self, step: f64) -> Self {
        self.group_speed_step = step;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Chrome {
    /// Frosted glass panel.
    Glass { radius: f64, pad_x: f64, pad_y: f64 },
    /// Text only.
    Plain,
}

impl Chrome {
    pub fn glass(radius: f64, pad_x: f64, pad_y: f64) -> Self {
        Self::Glass {
            radius,
            pad_x,
            pad_y,
        }
    }

    pub fn padding(&self) -> (f64, f64) {
        match *self {
            Self::Glass { pad_x, pad_y, .. } => (pad_x, pad_y),
            Self::Plain => (0.0, 0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardLayout {
    /// Centered wrapping row.
    #[default]
    Row,
    /// Centered column.
    Column,
    /// Bipartite timeline: even items left of center, odd items right.
    Alternating,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardItem {
    pub text: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl CardItem {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            caption: None,
            icon: None,
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Vertical line through an alternating layout with a dot beside each card.
///
/// Dot springs start `dot_scale_offset` / `dot_fade_offset` frames relative to their card.
pub struct Spine {
    pub delay: f64,
    pub height: f64,
    pub dot_size: f64,
    pub dot_scale_offset: f64,
    pub dot_fade_offset: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HeadingBeat {
    pub text: String,
    pub style: TextStyle,
    #[serde(default)]
    pub delay: f64,
    #[serde(default)]
    pub entrance: Entrance,
    #[serde(default)]
    pub typewriter: Option<Typewriter>,
    #[serde(default)]
    pub max_width: Option<f64>,
    #[serde(default)]
    pub margin_bottom: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Typewriter {
    pub delay: f64,
    /// Frames per character at 60 fps.
    pub speed: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Divider that grows from zero to `width` with its spring.
pub struct RuleBeat {
    pub delay: f64,
    pub width: f64,
    #[serde(default = "default_rule_thickness")]
    pub thickness: f64,
    #[serde(default = "yes")]
    pub fade: bool,
    #[serde(default)]
    pub margin_bottom: f64,
}

fn default_rule_thickness() -> f64 {
    2.0
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardsBeat {
    pub items: Vec<CardItem>,
    #[serde(default)]
    pub layout: CardLayout,
    pub chrome: Chrome,
    pub style: TextStyle,
    #[serde(default)]
    pub caption_style: Option<TextStyle>,
    #[serde(default)]
    pub icon_style: Option<TextStyle>,
    /// Entrance delay of item 0.
    pub delay: f64,
    /// Extra delay per item.
    pub stagger: f64,
    pub entrance: Entrance,
    pub idle: IdleMotion,
    #[serde(default)]
    pub gap: f64,
    #[serde(default)]
    pub max_width: Option<f64>,
    #[serde(default)]
    pub spine: Option<Spine>,
    #[serde(default)]
    pub margin_bottom: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardGroup {
    pub label: String,
    pub delay: f64,
    pub items: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Overrides for the first group of a [`GroupsBeat`].
pub struct Emphasis {
    pub style: TextStyle,
    pub chrome: Chrome,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Categorized rows of pills; each group fades in with its own spring.
pub struct GroupsBeat {
    pub groups: Vec<CardGroup>,
    pub label_style: TextStyle,
    pub item_style: TextStyle,
    pub chrome: Chrome,
    #[serde(default)]
    pub emphasis: Option<Emphasis>,
    /// Item `i` starts `item_offset + i * item_stagger` frames after its group.
    pub item_offset: f64,
    pub item_stagger: f64,
    pub entrance: Entrance,
    pub idle: IdleMotion,
    #[serde(default)]
    pub gap: f64,
    #[serde(default)]
    pub label_gap: f64,
    #[serde(default)]
    pub group_gap: f64,
    #[serde(default)]
    pub margin_bottom: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "beat", rename_all = "snake_case")]
pub enum Beat {
    Heading(HeadingBeat),
    Rule(RuleBeat),
    Cards(CardsBeat),
    Groups(GroupsBeat),
}

impl Beat {
    /// Latest entrance spring start within the beat, in local frames.
    pub fn last_entrance(&self) -> f64 {
        match self {
            Self::Heading(h) => h.delay,
            Self::Rule(r) => r.delay,
            Self::Cards(c) => {
                let last = c.delay + c.items.len().saturating_sub(1) as f64 * c.stagger;
                c.spine.map_or(last, |s| last.max(s.delay))
            }
            Self::Groups(g) => g
                .groups
                .iter()
                .map(|group| {
                    group.delay
                        + g.item_offset
                        + group.items.len().saturating_sub(1) as f64 * g.item_stagger
                })
                .fold(0.0, f64::max),
        }
    }

    /// Settled-state end of the typewriter reveal, if any.
    pub fn typewriter_end(&self, fps: f64) -> Option<f64> {
        match self {
            Self::Heading(HeadingBeat {
                text,
                typewriter: Some(tw),
                ..
            }) => Some(tw.delay + text.chars().count() as f64 * tw.speed * fps / 60.0),
            _ => None,
        }
    }

    fn validate(&self, scene: &str, index: usize) -> ReelResult<()> {
        let what = format!("scene '{scene}' beat {index}");
        match self {
            Self::Heading(h) => {
                non_empty(&h.text, &what)?;
                finite_non_negative(h.delay, &format!("{what} delay"))?;
                h.style.validate(&what)?;
                h.entrance.validate(&what)?;
                if let Some(tw) = h.typewriter {
                    finite_non_negative(tw.delay, &format!("{what} typewriter delay"))?;
                    if !(tw.speed.is_finite() && tw.speed > 0.0) {
                        return Err(ReelError::validation(format!(
                            "{what} typewriter speed must be finite and > 0"
                        )));
                    }
                }
                if let Some(w) = h.max_width {
                    positive(w, &format!("{what} max_width"))?;
                }
                finite_non_negative(h.margin_bottom, &format!("{what} margin_bottom"))
            }
            Self::Rule(r) => {
                finite_non_negative(r.delay, &format!("{what} delay"))?;
                positive(r.width, &format!("{what} width"))?;
                positive(r.thickness, &format!("{what} thickness"))?;
                finite_non_negative(r.margin_bottom, &format!("{what} margin_bottom"))
            }
            Self::Cards(c) => {
                if c.items.is_empty() {
                    return Err(ReelError::validation(format!("{what} has no cards")));
                }
                for item in &c.items {
                    non_empty(&item.text, &what)?;
                    if let Some(caption) = &item.caption {
                        non_empty(caption, &format!("{what} caption"))?;
                    }
                }
                c.style.validate(&what)?;
                if let Some(s) = &c.caption_style {
                    s.validate(&format!("{what} caption"))?;
                }
                if let Some(s) = &c.icon_style {
                    s.validate(&format!("{what} icon"))?;
                }
                finite_non_negative(c.delay, &format!("{what} delay"))?;
                finite_non_negative(c.stagger, &format!("{what} stagger"))?;
                finite_non_negative(c.gap, &format!("{what} gap"))?;
                finite_non_negative(c.margin_bottom, &format!("{what} margin_bottom"))?;
                if let Some(w) = c.max_width {
                    positive(w, &format!("{what} max_width"))?;
                }
                c.entrance.validate(&what)?;
                validate_chrome(&c.chrome, &what)?;
                validate_idle(&c.idle, &what)?;
                if let Some(spine) = c.spine {
                    if c.layout != CardLayout::Alternating {
                        return Err(ReelError::validation(format!(
                            "{what} spine requires the alternating layout"
                        )));
                    }
                    finite_non_negative(spine.delay, &format!("{what} spine delay"))?;
                    positive(spine.height, &format!("{what} spine height"))?;
                    positive(spine.dot_size, &format!("{what} spine dot_size"))?;
                    if !(spine.dot_scale_offset.is_finite() && spine.dot_fade_offset.is_finite()) {
                        return Err(ReelError::validation(format!(
                            "{what} spine dot offsets must be finite"
                        )));
                    }
                }
                Ok(())
            }
            Self::Groups(g) => {
                if g.groups.is_empty() {
                    return Err(ReelError::validation(format!("{what} has no groups")));
                }
                for group in &g.groups {
                    non_empty(&group.label, &format!("{what} group label"))?;
                    finite_non_negative(group.delay, &format!("{what} group delay"))?;
                    if group.items.is_empty() {
                        return Err(ReelError::validation(format!(
                            "{what} group '{}' has no items",
                            group.label
                        )));
                    }
                    for item in &group.items {
                        non_empty(item, &format!("{what} group '{}'", group.label))?;
                    }
                }
                g.label_style.validate(&format!("{what} label"))?;
                g.item_style.validate(&what)?;
                validate_chrome(&g.chrome, &what)?;
                if let Some(e) = &g.emphasis {
                    e.style.validate(&format!("{what} emphasis"))?;
                    validate_chrome(&e.chrome, &format!("{what} emphasis"))?;
                }
                finite_non_negative(g.item_offset, &format!("{what} item_offset"))?;
                finite_non_negative(g.item_stagger, &format!("{what} item_stagger"))?;
                for (name, v) in [
                    ("gap", g.gap),
                    ("label_gap", g.label_gap),
                    ("group_gap", g.group_gap),
                    ("margin_bottom", g.margin_bottom),
                ] {
                    finite_non_negative(v, &format!("{what} {name}"))?;
                }
                g.entrance.validate(&what)?;
                validate_idle(&g.idle, &what)
            }
        }
    }
}

impl SceneDescriptor {
    pub fn validate(&self) -> ReelResult<()> {
        if self.id.trim().is_empty() {
            return Err(ReelError::validation("scene id must be non-empty"));
        }
        let id = &self.id;
        if self.beats.is_empty() {
            return Err(ReelError::validation(format!(
                "scene '{id}' must have at least one beat"
            )));
        }

        let s = self.spring;
        if ![s.stiffness, s.damping, s.mass].iter().all(|v| v.is_finite())
            || s.stiffness <= 0.0
            || s.mass <= 0.0
            || s.damping < 0.0
        {
            return Err(ReelError::validation(format!(
                "scene '{id}' spring needs stiffness > 0, mass > 0, damping >= 0"
            )));
        }

        let cam = &self.camera;
        positive(cam.span, &format!("scene '{id}' camera span"))?;
        for sweep in [cam.rotate_x, cam.rotate_y, cam.translate_z, cam.origin_x]
            .into_iter()
            .flatten()
        {
            if !(sweep.from.is_finite() && sweep.to.is_finite()) {
                return Err(ReelError::validation(format!(
                    "scene '{id}' camera sweep values must be finite"
                )));
            }
        }

        for layer in &self.backdrop {
            let (z, opacity) = match layer {
                Backdrop::Glow {
                    z,
                    opacity,
                    diameter,
                    ink,
                    extent,
                    float_speed,
                    float_amplitude,
                } => {
                    positive(*diameter, &format!("scene '{id}' glow diameter"))?;
                    unit(*ink, &format!("scene '{id}' glow ink"))?;
                    unit(*extent, &format!("scene '{id}' glow extent"))?;
                    if !(float_speed.is_finite() && float_amplitude.is_finite()) {
                        return Err(ReelError::validation(format!(
                            "scene '{id}' glow float must be finite"
                        )));
                    }
                    (*z, *opacity)
                }
                Backdrop::Watermark {
                    z,
                    opacity,
                    text,
                    size,
                    letter_spacing,
                    ink,
                } => {
                    non_empty(text, &format!("scene '{id}' watermark"))?;
                    positive(*size, &format!("scene '{id}' watermark size"))?;
                    unit(*ink, &format!("scene '{id}' watermark ink"))?;
                    if !letter_spacing.is_finite() {
                        return Err(ReelError::validation(format!(
                            "scene '{id}' watermark letter_spacing must be finite"
                        )));
                    }
                    (*z, *opacity)
                }
            };
            if !z.is_finite() {
                return Err(ReelError::validation(format!(
                    "scene '{id}' backdrop z must be finite"
                )));
            }
            unit(opacity, &format!("scene '{id}' backdrop opacity"))?;
        }

        if let Some(delay) = self.content_fade {
            finite_non_negative(delay, &format!("scene '{id}' content_fade"))?;
        }

        for (i, beat) in self.beats.iter().enumerate() {
            beat.validate(id, i)?;
        }
        Ok(())
    }

    /// Latest entrance spring start across all beats.
    pub fn last_entrance(&self) -> f64 {
        self.beats
            .iter()
            .map(Beat::last_entrance)
            .fold(self.content_fade.unwrap_or(0.0), f64::max)
    }
}

fn non_empty(text: &str, what: &str) -> ReelResult<()> {
    if text.trim().is_empty() {
        return Err(ReelError::validation(format!("{what} text must be non-empty")));
    }
    Ok(())
}

fn finite_non_negative(v: f64, what: &str) -> ReelResult<()> {
    if !v.is_finite() || v < 0.0 {
        return Err(ReelError::validation(format!("{what} must be finite and >= 0")));
    }
    Ok(())
}

fn positive(v: f64, what: &str) -> ReelResult<()> {
    if !v.is_finite() || v <= 0.0 {
        return Err(ReelError::validation(format!("{what} must be finite and > 0")));
    }
    Ok(())
}

fn unit(v: f64, what: &str) -> ReelResult<()> {
    if !(0.0..=1.0).contains(&v) {
        return Err(ReelError::validation(format!("{what} must be in [0, 1]")));
    }
    Ok(())
}

fn validate_chrome(chrome: &Chrome, what: &str) -> ReelResult<()> {
    if let Chrome::Glass {
        radius,
        pad_x,
        pad_y,
    } = *chrome
    {
        for (name, v) in [("radius", radius), ("pad_x", pad_x), ("pad_y", pad_y)] {
            finite_non_negative(v, &format!("{what} chrome {name}"))?;
        }
    }
    Ok(())
}

fn validate_idle(idle: &IdleMotion, what: &str) -> ReelResult<()> {
    let mut values = vec![
        idle.speed,
        idle.speed_step,
        idle.group_speed_step,
        idle.amplitude,
    ];
    if let Some(d) = idle.drift {
        values.extend([d.rate, d.phase_step, d.group_phase_step, d.amplitude]);
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(ReelError::validation(format!(
            "{what} idle motion must be finite"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
