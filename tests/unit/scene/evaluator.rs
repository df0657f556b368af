use super::*;
use crate::{
    animation::{ease::Ease, transform3d::TransformOp},
    composition::introduction::introduction_scenes,
    scene::element::ElementKind,
};

const HD: Canvas = Canvas {
    width: 1920,
    height: 1080,
};

fn fps60() -> Fps {
    Fps::integer(60).unwrap()
}

fn scenes() -> Vec<(u64, SceneDescriptor)> {
    introduction_scenes()
        .into_iter()
        .map(|(secs, s)| (fps60().secs_to_frames_round(secs), s))
        .collect()
}

fn scene(id: &str) -> SceneDescriptor {
    scenes()
        .into_iter()
        .map(|(_, s)| s)
        .find(|s| s.id == id)
        .unwrap()
}

fn eval(scene: &SceneDescriptor, f: f64) -> VisualElement {
    let theme = Theme::light();
    SceneEvaluator::new(fps60(), HD, &theme)
        .evaluate(scene, f)
        .unwrap()
}

fn child_ids(el: &VisualElement) -> Vec<&str> {
    el.children.iter().map(|c| c.id.as_str()).collect()
}

#[test]
fn rejects_negative_and_non_finite_frames() {
    let theme = Theme::light();
    let ev = SceneEvaluator::new(fps60(), HD, &theme);
    let s = scene("title");
    for bad in [-1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            ev.evaluate(&s, bad),
            Err(ReelError::InvalidFrame(_))
        ));
    }
}

#[test]
fn tree_has_particles_backdrop_then_content() {
    let root = eval(&scene("title"), 30.0);
    assert_eq!(root.id, "title");
    assert!(root.transform.is_identity());
    assert_eq!(child_ids(&root), ["background", "camera"]);

    let camera = &root.children[1];
    assert_eq!(camera.transform, camera_transform(&scene("title").camera, 30.0));
    assert_eq!(child_ids(camera), ["particles", "backdrop-0", "content"]);
    assert_eq!(camera.children[0].children.len(), 50);
    assert_eq!(camera.children[0].children[7].id, "particle-7");
    assert_eq!(child_ids(&camera.children[1]), ["glow"]);

    let content = root.find("content").unwrap();
    assert_eq!(child_ids(content), ["beat-0", "beat-1", "beat-2", "beat-3"]);
}

#[test]
fn every_scene_paints_an_opaque_gradient_background() {
    let theme = Theme::light();
    for (_, s) in scenes() {
        let root = eval(&s, 0.0);
        let bg = &root.children[0];
        assert_eq!(bg.id, "background", "{}", s.id);
        assert_eq!(bg.opacity, 1.0);
        assert!(bg.transform.is_identity());
        assert_eq!(bg.rect, Rect::new(0.0, 0.0, 1920.0, 1080.0));
        let ElementKind::Shape(spec) = &bg.kind else {
            panic!("background should be a shape");
        };
        assert_eq!(
            spec.fill,
            Fill::Vertical {
                top: theme.background,
                bottom: theme.background_end,
            }
        );
    }
}

#[test]
fn watermark_backdrop_sits_behind_content() {
    let root = eval(&scene("shift"), 0.0);
    let layer = root.find("backdrop-0").unwrap();
    assert_eq!(layer.opacity, 0.2);
    assert_eq!(layer.transform.ops, [TransformOp::TranslateZ { px: -140.0 }]);
    let ElementKind::Text(run) = &root.find("watermark").unwrap().kind else {
        panic!("watermark should be text");
    };
    assert_eq!(run.content, "SHIFT");
    assert_eq!(run.font.family, "Outfit");
}

#[test]
fn every_scene_starts_invisible() {
    for (_, s) in scenes() {
        let root = eval(&s, 0.0);
        root.find("content").unwrap().walk(&mut |el, opacity| {
            if el.is_leaf() {
                assert!(
                    opacity == 0.0 || el.rect.area() == 0.0,
                    "{}: {} visible at frame 0 (opacity {opacity})",
                    s.id,
                    el.id
                );
            }
        });
    }
}

#[test]
fn every_scene_is_settled_on_its_last_frame() {
    for (frames, s) in scenes() {
        let root = eval(&s, (frames - 1) as f64);
        root.find("content").unwrap().walk(&mut |el, opacity| {
            if el.is_leaf() {
                assert!(
                    opacity >= 0.99,
                    "{}: {} at opacity {opacity} on the last frame",
                    s.id,
                    el.id
                );
            }
        });
    }
}

#[test]
fn entrance_pose_interpolates_to_rest() {
    let s = scene("title");
    let start = eval(&s, 0.0);
    let name = start.find("beat-0").unwrap();
    assert_eq!(
        name.transform.ops,
        [
            TransformOp::TranslateY { px: 100.0 },
            TransformOp::TranslateX { px: 0.0 },
            TransformOp::TranslateZ { px: -120.0 },
            TransformOp::Scale { factor: 0.9 },
        ]
    );
    assert_eq!(name.opacity, 0.0);

    let end = eval(&s, 179.0);
    let name = end.find("beat-0").unwrap();
    for op in &name.transform.ops {
        match *op {
            TransformOp::TranslateX { px }
            | TransformOp::TranslateY { px }
            | TransformOp::TranslateZ { px } => assert!(px.abs() < 0.01, "{op:?}"),
            TransformOp::Scale { factor } => assert!((factor - 1.0).abs() < 1e-3),
            other => panic!("unexpected op {other:?}"),
        }
    }
}

#[test]
fn rule_grows_from_zero_width() {
    let s = scene("title");
    assert_eq!(eval(&s, 0.0).find("beat-1").unwrap().rect.width(), 0.0);
    assert_eq!(eval(&s, 25.0).find("beat-1").unwrap().rect.width(), 0.0);
    let settled = eval(&s, 179.0).find("beat-1").unwrap().rect;
    assert!((settled.width() - 400.0).abs() < 0.5);
    assert!((settled.center().x - 960.0).abs() < 1e-9);
}

#[test]
fn mirrored_cards_slide_in_from_both_sides() {
    let root = eval(&scene("shift"), 0.0);
    let first = root.find("beat-1/card-0").unwrap();
    let second = root.find("beat-1/card-1").unwrap();
    assert_eq!(first.transform.ops[1], TransformOp::TranslateX { px: -50.0 });
    assert_eq!(second.transform.ops[1], TransformOp::TranslateX { px: 50.0 });
}

#[test]
fn alternating_cards_straddle_the_spine() {
    let root = eval(&scene("shift"), 200.0);
    let spine = root.find("beat-1/spine").unwrap();
    assert_eq!(spine.rect.center().x, 960.0);
    assert!((spine.rect.height() - 400.0).abs() < 0.5);

    let left = root.find("beat-1/card-0").unwrap().rect;
    let right = root.find("beat-1/card-1").unwrap().rect;
    assert!(left.x1 < 960.0);
    assert!(right.x0 > 960.0);
    assert!(right.y0 > left.y1);

    let dot = root.find("beat-1/dot-1").unwrap();
    assert_eq!(dot.rect.center().x, 960.0);
    assert!((dot.rect.center().y - right.center().y).abs() < 1e-9);
    assert!(root.find("beat-1/card-2/caption").is_some());
}

#[test]
fn typewriter_reveals_prefix_then_drops_caret() {
    let s = scene("current-focus");
    let mid = eval(&s, 101.0);
    let heading = mid.find("beat-2").unwrap();
    let ElementKind::Text(run) = &heading.kind else {
        panic!("heading should be text");
    };
    // 31 frames past the delay at two frames per character rounds up to 16 characters.
    assert_eq!(run.content, "AI agents collap");
    assert!(mid.find("beat-2/caret").is_some());

    let done = eval(&s, 269.0);
    let ElementKind::Text(run) = &done.find("beat-2").unwrap().kind else {
        panic!("heading should be text");
    };
    assert_eq!(
        run.content,
        "AI agents collapsed the gap between idea and execution"
    );
    assert!(done.find("beat-2/caret").is_none());
}

#[test]
fn first_group_is_emphasized() {
    let root = eval(&scene("skills"), 150.0);
    let theme = Theme::light();
    let fill = |id: &str| match &root.find(id).unwrap().kind {
        ElementKind::Shape(spec) => spec.fill,
        other => panic!("{id} is {other:?}"),
    };
    assert_eq!(
        fill("beat-1/group-0/item-0"),
        Fill::Solid {
            color: theme.glass_emphasis
        }
    );
    assert_eq!(
        fill("beat-1/group-1/item-0"),
        Fill::Solid { color: theme.glass }
    );
    assert!(root.find("beat-1/group-2/label").is_some());
}

#[test]
fn groups_fade_in_on_their_own_delay() {
    let s = scene("skills");
    let root = eval(&s, 30.0);
    assert!(root.find("beat-1/group-0").unwrap().opacity > 0.5);
    assert_eq!(root.find("beat-1/group-1").unwrap().opacity, 0.0);
    assert_eq!(root.find("beat-1/group-2").unwrap().opacity, 0.0);
}

#[test]
fn content_fade_gates_the_whole_block() {
    let s = scene("contact");
    assert_eq!(eval(&s, 0.0).find("content").unwrap().opacity, 0.0);
    assert!(eval(&s, 120.0).find("content").unwrap().opacity > 0.99);
    // The heading itself skips the fade.
    assert_eq!(eval(&s, 0.0).find("beat-0").unwrap().opacity, 1.0);
}

#[test]
fn contact_icons_precede_text() {
    let root = eval(&scene("contact"), 150.0);
    let icon = root.find("beat-2/card-0/icon").unwrap().rect;
    let text = root.find("beat-2/card-0/text").unwrap().rect;
    assert!(icon.x1 <= text.x0);
}

#[test]
fn camera_sweeps_then_holds() {
    let s = scene("title");
    assert_eq!(
        camera_transform(&s.camera, 0.0).to_string(),
        "perspective(1200px at 50% 50%) rotateX(-2deg) rotateY(3deg) translateZ(-50px)"
    );
    assert_eq!(
        camera_transform(&s.camera, 180.0),
        camera_transform(&s.camera, 1000.0)
    );
    assert_eq!(
        camera_transform(&s.camera, 180.0).to_string(),
        "perspective(1200px at 50% 50%) rotateX(1.5deg) rotateY(-2deg) translateZ(20px)"
    );
}

#[test]
fn camera_origin_sweeps_horizontally() {
    let cam = CameraSweep {
        span: 100.0,
        origin_x: Some(Sweep::eased(40.0, 60.0, Ease::Linear)),
        ..CameraSweep::default()
    };
    assert_eq!(
        camera_transform(&cam, 50.0).ops[0],
        TransformOp::Perspective {
            distance: 1200.0,
            origin_x_pct: 50.0,
            origin_y_pct: 50.0,
        }
    );
}

#[test]
fn evaluation_is_deterministic() {
    for (_, s) in scenes() {
        for f in [0.0, 17.0, 90.0, 143.5] {
            assert_eq!(eval(&s, f), eval(&s, f));
        }
    }
}
