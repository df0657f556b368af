use std::{collections::BTreeSet, fs::File, io::BufReader, path::Path};

use crate::{
    animation::{ease::Ease, spring::settle_frames},
    composition::introduction::{INTRODUCTION_ID, introduction_scenes},
    foundation::{
        core::{Canvas, Fps},
        error::{ReelError, ReelResult},
    },
    scene::{evaluator::SceneEvaluator, model::SceneDescriptor, theme::Theme},
    timeline::{
        compositor::{Compositor, FrameOutput},
        sequencer::Timeline,
    },
    typography::font::{FontRequest, collect_font_requests},
};

/// Entrance springs count as settled within this distance of 1.
const SETTLE_TOLERANCE: f64 = 1e-3;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A complete reel: output format, palette and the ordered scene list.
///
/// Pure configuration. It can be built in code ([`Composition::introduction`]) or loaded from
/// JSON, and is validated once before any frame is evaluated.
pub struct Composition {
    pub id: String,
    pub fps: Fps,
    pub canvas: Canvas,
    /// Declared total length; must equal the sum of the rounded scene durations.
    pub duration_frames: u64,
    /// Crossfade length between neighbouring scenes.
    pub transition_secs: f64,
    #[serde(default)]
    pub transition_ease: Ease,
    #[serde(default)]
    pub theme: Theme,
    pub scenes: Vec<SceneEntry>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneEntry {
    pub duration_secs: f64,
    pub scene: SceneDescriptor,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// What an external render driver needs to know before requesting frames.
pub struct CompositionManifest {
    pub id: String,
    pub duration_in_frames: u64,
    pub fps: u32,
    pub width: u32,
    pub height: u32,
}

impl Composition {
    /// The built-in introduction: seven scenes, 1920x1080 at 60 fps, 0.5 s fades.
    pub fn introduction() -> Self {
        Self {
            id: INTRODUCTION_ID.to_owned(),
            fps: Fps { num: 60, den: 1 },
            canvas: Canvas {
                width: 1920,
                height: 1080,
            },
            duration_frames: 1560,
            transition_secs: 0.5,
            transition_ease: Ease::Linear,
            theme: Theme::light(),
            scenes: introduction_scenes()
                .into_iter()
                .map(|(duration_secs, scene)| SceneEntry {
                    duration_secs,
                    scene,
                })
                .collect(),
        }
    }

    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse composition JSON: {e}")))
    }

    pub fn from_json(s: &str) -> ReelResult<Self> {
        serde_json::from_str(s).map_err(|e| ReelError::serde(format!("parse composition JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::validation(format!("open composition JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn to_json_pretty(&self) -> ReelResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ReelError::serde(format!("serialize composition JSON: {e}")))
    }

    /// Rounded frame length of each scene, in order.
    pub fn scene_frames(&self) -> Vec<u64> {
        self.scenes
            .iter()
            .map(|e| self.fps.secs_to_frames_round(e.duration_secs))
            .collect()
    }

    pub fn transition_frames(&self) -> u64 {
        self.fps.secs_to_frames_round(self.transition_secs)
    }

    pub fn timeline(&self) -> ReelResult<Timeline> {
        let scenes: Vec<(String, u64)> = self
            .scenes
            .iter()
            .zip(self.scene_frames())
            .map(|(e, frames)| (e.scene.id.clone(), frames))
            .collect();
        Timeline::new(&scenes, self.transition_frames(), self.transition_ease)
    }

    pub fn manifest(&self) -> CompositionManifest {
        CompositionManifest {
            id: self.id.clone(),
            duration_in_frames: self.duration_frames,
            // Whole-number rates only; validate() rejects the rest.
            fps: self.fps.num / self.fps.den.max(1),
            width: self.canvas.width,
            height: self.canvas.height,
        }
    }

    pub fn validate(&self) -> ReelResult<()> {
        if self.id.trim().is_empty() {
            return Err(ReelError::validation("composition id must be non-empty"));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(ReelError::validation("fps must have num>0 and den>0"));
        }
        if self.fps.num % self.fps.den != 0 {
            return Err(ReelError::validation("fps must be a whole number of frames per second"));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ReelError::validation("canvas width/height must be > 0"));
        }
        if self.duration_frames == 0 {
            return Err(ReelError::validation("duration must be > 0 frames"));
        }
        if !self.transition_secs.is_finite() || self.transition_secs < 0.0 {
            return Err(ReelError::validation(
                "transition_secs must be finite and >= 0",
            ));
        }
        if self.theme.display_family.trim().is_empty() || self.theme.body_family.trim().is_empty()
        {
            return Err(ReelError::validation("theme font families must be non-empty"));
        }
        if self.scenes.is_empty() {
            return Err(ReelError::validation("composition needs at least one scene"));
        }

        let mut ids = BTreeSet::new();
        for entry in &self.scenes {
            entry.scene.validate()?;
            if !ids.insert(entry.scene.id.as_str()) {
                return Err(ReelError::validation(format!(
                    "duplicate scene id '{}'",
                    entry.scene.id
                )));
            }
            if !entry.duration_secs.is_finite() || entry.duration_secs <= 0.0 {
                return Err(ReelError::validation(format!(
                    "scene '{}' duration_secs must be finite and > 0",
                    entry.scene.id
                )));
            }
        }

        let summed: u64 = self.scene_frames().iter().sum();
        if summed != self.duration_frames {
            return Err(ReelError::validation(format!(
                "declared duration {} frames does not match the scene total of {summed} frames",
                self.duration_frames
            )));
        }

        // Builds and checks window and transition lengths.
        self.timeline()?;
        self.warn_unsettled();
        Ok(())
    }

    /// Log scenes whose last entrance (or typing) cannot finish before the scene ends.
    fn warn_unsettled(&self) {
        let fps = self.fps.as_f64();
        for (entry, frames) in self.scenes.iter().zip(self.scene_frames()) {
            let scene = &entry.scene;
            let Some(settle) = settle_frames(self.fps, scene.spring, SETTLE_TOLERANCE) else {
                tracing::warn!(scene = %scene.id, "entrance spring never settles");
                continue;
            };
            let settled_at = scene.last_entrance() + settle as f64;
            if settled_at > frames as f64 {
                tracing::warn!(
                    scene = %scene.id,
                    settled_at,
                    scene_frames = frames,
                    "last entrance settles after the scene ends"
                );
            }
            for beat in &scene.beats {
                if let Some(end) = beat.typewriter_end(fps)
                    && end > frames as f64
                {
                    tracing::warn!(
                        scene = %scene.id,
                        typed_at = end,
                        scene_frames = frames,
                        "typewriter finishes after the scene ends"
                    );
                }
            }
        }
    }
}

/// Validated composition ready for per-frame evaluation.
///
/// Construction does all definition-time checks once; [`Session::evaluate`] is then a pure
/// function of the frame index and safe to call from many threads.
#[derive(Clone, Debug)]
pub struct Session {
    comp: Composition,
    scenes: Vec<SceneDescriptor>,
    timeline: Timeline,
}

impl Session {
    pub fn new(comp: &Composition) -> ReelResult<Self> {
        comp.validate()?;
        let timeline = comp.timeline()?;
        tracing::info!(
            id = %comp.id,
            frames = timeline.total_frames(),
            scenes = comp.scenes.len(),
            "session ready"
        );
        Ok(Self {
            comp: comp.clone(),
            scenes: comp.scenes.iter().map(|e| e.scene.clone()).collect(),
            timeline,
        })
    }

    pub fn composition(&self) -> &Composition {
        &self.comp
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn manifest(&self) -> CompositionManifest {
        self.comp.manifest()
    }

    pub fn total_frames(&self) -> u64 {
        self.timeline.total_frames()
    }

    /// Element layers visible at global frame `frame`.
    pub fn evaluate(&self, frame: i64) -> ReelResult<FrameOutput> {
        Compositor::new(&self.timeline, &self.scenes, self.evaluator())?.compose(frame)
    }

    /// Every font request any scene makes. Text elements exist from a scene's first frame,
    /// faded or not, so frame 0 of each scene is enough.
    pub fn font_requests(&self) -> ReelResult<BTreeSet<FontRequest>> {
        let evaluator = self.evaluator();
        let mut out = BTreeSet::new();
        for scene in &self.scenes {
            out.extend(collect_font_requests(&evaluator.evaluate(scene, 0.0)?));
        }
        Ok(out)
    }

    fn evaluator(&self) -> SceneEvaluator<'_> {
        SceneEvaluator::new(self.comp.fps, self.comp.canvas, &self.comp.theme)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
