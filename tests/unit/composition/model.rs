use super::*;

#[test]
fn introduction_is_1560_frames_at_60fps() {
    let comp = Composition::introduction();
    comp.validate().unwrap();
    assert_eq!(
        comp.manifest(),
        CompositionManifest {
            id: "Introduction".to_owned(),
            duration_in_frames: 1560,
            fps: 60,
            width: 1920,
            height: 1080,
        }
    );
    assert_eq!(
        comp.scene_frames(),
        [180, 210, 270, 240, 240, 210, 210]
    );
    assert_eq!(comp.transition_frames(), 30);
}

#[test]
fn timeline_matches_manifest() {
    let comp = Composition::introduction();
    let timeline = comp.timeline().unwrap();
    assert_eq!(timeline.total_frames(), comp.manifest().duration_in_frames);
    assert_eq!(timeline.transitions().len(), 6);
    let ids: Vec<&str> = timeline
        .windows()
        .iter()
        .map(|w| w.scene_id.as_str())
        .collect();
    assert_eq!(
        ids,
        [
            "title",
            "who-i-am",
            "current-focus",
            "shift",
            "building",
            "skills",
            "contact"
        ]
    );
}

#[test]
fn json_round_trip_preserves_definition() {
    let comp = Composition::introduction();
    let json = comp.to_json_pretty().unwrap();
    let back = Composition::from_json(&json).unwrap();
    assert_eq!(back, comp);
    back.validate().unwrap();
}

#[test]
fn json_defaults_theme_and_ease() {
    let mut v = serde_json::to_value(Composition::introduction()).unwrap();
    let obj = v.as_object_mut().unwrap();
    obj.remove("theme");
    obj.remove("transition_ease");
    let comp = Composition::from_reader(v.to_string().as_bytes()).unwrap();
    assert_eq!(comp.theme, Theme::light());
    assert_eq!(comp.transition_ease, Ease::Linear);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = Composition::from_json("{ \"id\": 3 }").unwrap_err();
    assert!(matches!(err, ReelError::Serde(_)));
}

#[test]
fn missing_file_is_reported_with_path() {
    let err = Composition::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.json"), "{err}");
}

#[test]
fn declared_duration_must_match_scenes() {
    let mut comp = Composition::introduction();
    comp.duration_frames = 1800;
    let err = comp.validate().unwrap_err().to_string();
    assert!(err.contains("1560"), "{err}");
}

#[test]
fn rejects_duplicate_scene_ids() {
    let mut comp = Composition::introduction();
    comp.scenes[1].scene.id = "title".to_owned();
    let err = comp.validate().unwrap_err().to_string();
    assert!(err.contains("duplicate"), "{err}");
}

#[test]
fn rejects_bad_format_and_durations() {
    let mut comp = Composition::introduction();
    comp.fps = Fps { num: 30000, den: 1001 };
    assert!(comp.validate().is_err());

    let mut comp = Composition::introduction();
    comp.canvas.width = 0;
    assert!(comp.validate().is_err());

    let mut comp = Composition::introduction();
    comp.scenes[0].duration_secs = -1.0;
    assert!(comp.validate().is_err());

    let mut comp = Composition::introduction();
    comp.scenes.clear();
    assert!(comp.validate().is_err());

    let mut comp = Composition::introduction();
    comp.theme.body_family = String::new();
    assert!(comp.validate().is_err());
}

#[test]
fn transition_longer_than_a_scene_is_rejected() {
    let mut comp = Composition::introduction();
    comp.transition_secs = 3.2;
    let err = comp.validate().unwrap_err().to_string();
    assert!(err.contains("transition"), "{err}");
}

#[test]
fn session_evaluates_frames() {
    let session = Session::new(&Composition::introduction()).unwrap();
    assert_eq!(session.total_frames(), 1560);
    assert_eq!(session.manifest().duration_in_frames, 1560);

    let out = session.evaluate(0).unwrap();
    assert_eq!(out.layers.len(), 1);
    assert_eq!(out.layers[0].scene_id, "title");

    let last = session.evaluate(1559).unwrap();
    assert_eq!(last.layers[0].scene_id, "contact");
    assert_eq!(last.layers[0].local_frame, 209);
    assert!(session.evaluate(1560).is_err());
}

#[test]
fn session_rejects_invalid_composition() {
    let mut comp = Composition::introduction();
    comp.id.clear();
    assert!(Session::new(&comp).is_err());
}

#[test]
fn font_requests_cover_every_scene_and_track_the_theme() {
    let session = Session::new(&Composition::introduction()).unwrap();
    let requests = session.font_requests().unwrap();
    assert!(requests.iter().any(|r| r.family == "Outfit"));
    assert!(requests.iter().any(|r| r.family == "Geist"));
    assert!(requests.iter().all(|r| r.family == "Outfit" || r.family == "Geist"));

    let mut comp = Composition::introduction();
    comp.theme.display_family = "Inter".to_owned();
    let session = Session::new(&comp).unwrap();
    let requests = session.font_requests().unwrap();
    assert!(requests.iter().any(|r| r.family == "Inter"));
    assert!(requests.iter().all(|r| r.family != "Outfit"));
}

#[test]
fn high_frame_rates_validate() {
    let mut comp = Composition::introduction();
    comp.fps = Fps { num: 240_000, den: 1 };
    comp.duration_frames = comp.scene_frames().iter().sum();
    assert_eq!(comp.duration_frames, 26 * 240_000);
    comp.validate().unwrap();
}
