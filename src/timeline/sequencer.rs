use crate::{
    animation::ease::Ease,
    foundation::{
        core::{FrameIndex, FrameRange},
        error::{ReelError, ReelResult},
    },
};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SceneWindow {
    /// Position in the scene list.
    pub index: usize,
    pub scene_id: String,
    pub start: u64,
    pub duration: u64,
}

impl SceneWindow {
    pub fn end(&self) -> u64 {
        self.start + self.duration
    }

    pub fn range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(self.start),
            end: FrameIndex(self.end()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Crossfade occupying the last `duration` frames of the `from` window.
pub struct TransitionWindow {
    pub from: String,
    pub to: String,
    pub start: u64,
    pub duration: u64,
    pub ease: Ease,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RouteLayer {
    /// Index into the timeline's scene list.
    pub scene: usize,
    pub local_frame: u64,
    pub weight: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum FrameRoute {
    Single(RouteLayer),
    /// Inside a transition; `incoming` is held at its first frame while it fades in.
    Blend {
        outgoing: RouteLayer,
        incoming: RouteLayer,
        progress: f64,
    },
}

impl FrameRoute {
    /// Layers in render order (outgoing first).
    pub fn layers(&self) -> Vec<RouteLayer> {
        match *self {
            Self::Single(l) => vec![l],
            Self::Blend {
                outgoing, incoming, ..
            } => vec![outgoing, incoming],
        }
    }
}

/// Partition of `[0, total)` into back-to-back scene windows with fixed-length fades between
/// neighbours. Fades sit inside the outgoing window, so the total is the sum of scene durations.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    windows: Vec<SceneWindow>,
    transition_frames: u64,
    ease: Ease,
    total: u64,
}

impl Timeline {
    pub fn new(
        scenes: &[(String, u64)],
        transition_frames: u64,
        ease: Ease,
    ) -> ReelResult<Self> {
        if scenes.is_empty() {
            return Err(ReelError::validation("timeline needs at least one scene"));
        }

        let mut windows = Vec::with_capacity(scenes.len());
        let mut start = 0u64;
        for (index, (scene_id, duration)) in scenes.iter().enumerate() {
            if *duration == 0 {
                return Err(ReelError::validation(format!(
                    "scene '{scene_id}' must last at least one frame"
                )));
            }
            if scenes.len() > 1 && transition_frames > *duration {
                return Err(ReelError::validation(format!(
                    "transition of {transition_frames} frames is longer than scene '{scene_id}' ({duration} frames)"
                )));
            }
            windows.push(SceneWindow {
                index,
                scene_id: scene_id.clone(),
                start,
                duration: *duration,
            });
            start = start.checked_add(*duration).ok_or_else(|| {
                ReelError::validation("timeline length overflows u64 frames")
            })?;
        }

        tracing::debug!(
            scenes = windows.len(),
            total_frames = start,
            transition_frames,
            "built timeline"
        );
        Ok(Self {
            windows,
            transition_frames,
            ease,
            total: start,
        })
    }

    pub fn total_frames(&self) -> u64 {
        self.total
    }

    pub fn transition_frames(&self) -> u64 {
        self.transition_frames
    }

    pub fn windows(&self) -> &[SceneWindow] {
        &self.windows
    }

    pub fn transitions(&self) -> Vec<TransitionWindow> {
        if self.transition_frames == 0 {
            return Vec::new();
        }
        self.windows
            .windows(2)
            .map(|pair| TransitionWindow {
                from: pair[0].scene_id.clone(),
                to: pair[1].scene_id.clone(),
                start: pair[0].end() - self.transition_frames,
                duration: self.transition_frames,
                ease: self.ease,
            })
            .collect()
    }

    /// Route global frame `g` to the scene (or pair of scenes) visible at it.
    ///
    /// Frames before 0 or at/after the total are rejected rather than clamped.
    pub fn route(&self, g: i64) -> ReelResult<FrameRoute> {
        let out_of_range = || ReelError::FrameOutOfRange {
            frame: g,
            total: self.total,
        };
        let g = u64::try_from(g).map_err(|_| out_of_range())?;
        if g >= self.total {
            return Err(out_of_range());
        }

        let idx = self.windows.partition_point(|w| w.start <= g) - 1;
        let w = &self.windows[idx];
        let local = g - w.start;
        let t = self.transition_frames;
        let has_next = idx + 1 < self.windows.len();

        if has_next && t > 0 && local >= w.duration - t {
            let transition_start = w.end() - t;
            let progress = self.ease.apply((g - transition_start) as f64 / t as f64);
            return Ok(FrameRoute::Blend {
                outgoing: RouteLayer {
                    scene: idx,
                    local_frame: local,
                    weight: 1.0 - progress,
                },
                incoming: RouteLayer {
                    scene: idx + 1,
                    local_frame: 0,
                    weight: progress,
                },
                progress,
            });
        }

        Ok(FrameRoute::Single(RouteLayer {
            scene: idx,
            local_frame: local,
            weight: 1.0,
        }))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/sequencer.rs"]
mod tests;
