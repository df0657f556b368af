use super::*;
use crate::{
    animation::ease::Ease,
    composition::introduction::introduction_scenes,
    foundation::core::{Canvas, Fps},
    scene::theme::Theme,
};

struct Fixture {
    timeline: Timeline,
    scenes: Vec<SceneDescriptor>,
    theme: Theme,
}

impl Fixture {
    fn new() -> Self {
        let fps = Fps::integer(60).unwrap();
        let (windows, scenes): (Vec<_>, Vec<_>) = introduction_scenes()
            .into_iter()
            .map(|(secs, s)| ((s.id.clone(), fps.secs_to_frames_round(secs)), s))
            .unzip();
        Self {
            timeline: Timeline::new(&windows, 30, Ease::Linear).unwrap(),
            scenes,
            theme: Theme::light(),
        }
    }

    fn compositor(&self) -> Compositor<'_> {
        let evaluator = SceneEvaluator::new(
            Fps::integer(60).unwrap(),
            Canvas {
                width: 1920,
                height: 1080,
            },
            &self.theme,
        );
        Compositor::new(&self.timeline, &self.scenes, evaluator).unwrap()
    }
}

#[test]
fn plain_frame_has_one_full_weight_layer() {
    let fx = Fixture::new();
    let out = fx.compositor().compose(60).unwrap();
    assert_eq!(out.frame, FrameIndex(60));
    assert!(!out.is_blend());
    assert_eq!(out.layers[0].scene_id, "title");
    assert_eq!(out.layers[0].local_frame, 60);
    assert_eq!(out.layers[0].root.opacity, 1.0);
}

#[test]
fn transition_stacks_outgoing_under_incoming() {
    let fx = Fixture::new();
    // Title runs 0..180; its fade into who-i-am covers 150..180.
    let out = fx.compositor().compose(165).unwrap();
    assert!(out.is_blend());
    let ids: Vec<&str> = out.layers.iter().map(|l| l.scene_id.as_str()).collect();
    assert_eq!(ids, ["title", "who-i-am"]);
    assert_eq!(out.layers[0].local_frame, 165);
    assert_eq!(out.layers[1].local_frame, 0);
    assert!((out.layers[0].weight - 0.5).abs() < 1e-12);
    assert!((out.total_weight() - 1.0).abs() < 1e-12);
    for layer in &out.layers {
        assert_eq!(layer.root.opacity, layer.weight);
        assert_eq!(layer.root.id, layer.scene_id);
    }
}

#[test]
fn first_frame_after_a_fade_is_the_incoming_scene() {
    let fx = Fixture::new();
    let out = fx.compositor().compose(180).unwrap();
    assert!(!out.is_blend());
    assert_eq!(out.layers[0].scene_id, "who-i-am");
    assert_eq!(out.layers[0].local_frame, 0);
}

#[test]
fn out_of_range_is_an_error() {
    let fx = Fixture::new();
    let c = fx.compositor();
    assert!(matches!(
        c.compose(1560),
        Err(ReelError::FrameOutOfRange { total: 1560, .. })
    ));
    assert!(c.compose(-5).is_err());
    assert!(c.compose(1559).is_ok());
}

#[test]
fn scene_count_must_match_windows() {
    let fx = Fixture::new();
    let evaluator = SceneEvaluator::new(
        Fps::integer(60).unwrap(),
        Canvas {
            width: 1920,
            height: 1080,
        },
        &fx.theme,
    );
    assert!(Compositor::new(&fx.timeline, &fx.scenes[..3], evaluator).is_err());
}
