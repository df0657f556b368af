use crate::{
    foundation::{
        core::FrameIndex,
        error::{ReelError, ReelResult},
    },
    scene::{element::VisualElement, evaluator::SceneEvaluator, model::SceneDescriptor},
    timeline::sequencer::{FrameRoute, Timeline},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneLayer {
    pub scene_id: String,
    pub local_frame: u64,
    /// Blend weight; also folded into `root.opacity`.
    pub weight: f64,
    pub root: VisualElement,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Everything visible at one global frame, bottom layer first.
pub struct FrameOutput {
    pub frame: FrameIndex,
    pub layers: Vec<SceneLayer>,
}

impl FrameOutput {
    pub fn total_weight(&self) -> f64 {
        self.layers.iter().map(|l| l.weight).sum()
    }

    pub fn is_blend(&self) -> bool {
        self.layers.len() > 1
    }
}

/// Evaluates routed scenes and stacks them into a [`FrameOutput`].
#[derive(Clone, Copy, Debug)]
pub struct Compositor<'a> {
    timeline: &'a Timeline,
    scenes: &'a [SceneDescriptor],
    evaluator: SceneEvaluator<'a>,
}

impl<'a> Compositor<'a> {
    pub fn new(
        timeline: &'a Timeline,
        scenes: &'a [SceneDescriptor],
        evaluator: SceneEvaluator<'a>,
    ) -> ReelResult<Self> {
        if scenes.len() != timeline.windows().len() {
            return Err(ReelError::validation(format!(
                "timeline has {} windows but {} scenes were supplied",
                timeline.windows().len(),
                scenes.len()
            )));
        }
        Ok(Self {
            timeline,
            scenes,
            evaluator,
        })
    }

    #[tracing::instrument(skip(self))]
    pub fn compose(&self, frame: i64) -> ReelResult<FrameOutput> {
        let route = self.timeline.route(frame)?;
        let layers = route
            .layers()
            .into_iter()
            .map(|l| {
                let scene = &self.scenes[l.scene];
                let mut root = self.evaluator.evaluate(scene, l.local_frame as f64)?;
                root.opacity *= l.weight;
                Ok(SceneLayer {
                    scene_id: scene.id.clone(),
                    local_frame: l.local_frame,
                    weight: l.weight,
                    root,
                })
            })
            .collect::<ReelResult<Vec<_>>>()?;

        if let FrameRoute::Blend { progress, .. } = route {
            tracing::trace!(progress, "blended transition frame");
        }
        Ok(FrameOutput {
            // `route` rejected negative frames.
            frame: FrameIndex(frame as u64),
            layers,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/compositor.rs"]
mod tests;
