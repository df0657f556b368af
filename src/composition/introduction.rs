//! Built-in seven-scene introduction reel.

use crate::{
    animation::{ease::Ease, spring::SpringConfig},
    scene::model::{
        Backdrop, Beat, CameraSweep, CardGroup, CardItem, CardLayout, CardsBeat, Chrome, Drift,
        Emphasis, Entrance, GroupsBeat, HeadingBeat, IdleMotion, RestDepth, RuleBeat,
        SceneDescriptor, Spine, Sweep, TextStyle, Typewriter, Wave,
    },
};

pub const INTRODUCTION_ID: &str = "Introduction";

/// Static profile text shown by the reel.
#[derive(Clone, Copy, Debug)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub identity: &'static str,
    pub strengths: [&'static str; 3],
    pub professional: [&'static str; 2],
    pub liberation: &'static str,
    pub insights: [&'static str; 3],
    pub building_theme: &'static str,
    pub experiments: [&'static str; 4],
    pub frontier: [&'static str; 3],
    pub core: [&'static str; 4],
    pub platform: [&'static str; 3],
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Ankur Kakroo",
    title: "Director of Engineering",
    company: "HackerRank",
    identity: "Asymmetric engineering leader for the AI era",
    strengths: [
        "Strong business, product & design sense",
        "Moves across altitude with ease",
        "Ships fast with high bias for action",
    ],
    professional: [
        "Building AI Interviewer (0 → 1)",
        "Modernizing API, Web & AI platforms",
    ],
    liberation: "AI agents collapsed the gap between idea and execution",
    insights: [
        "The harness matters more than the model",
        "Token abundance replaced cognitive load",
        "Building became ambient, not specialized",
    ],
    building_theme: "Applied learning in unfamiliar terrain",
    experiments: [
        "Hardware hacking with my kid",
        "Kindle dashboards via agents",
        "Audio-reactive particles",
        "Mobile-first development",
    ],
    frontier: ["LLMs", "RAG", "AI Agents"],
    core: ["Python", "JavaScript", "React", "FastAPI"],
    platform: ["API Systems", "Web Platforms", "AWS"],
    email: "ankurkakroo2@gmail.com",
    github: "github.com/ankurkakroo2",
    linkedin: "linkedin.com/in/akakro",
};

/// `(seconds, scene)` in playback order.
pub fn introduction_scenes() -> Vec<(f64, SceneDescriptor)> {
    vec![
        (3.0, title(&PROFILE)),
        (3.5, who_i_am(&PROFILE)),
        (4.5, current_focus(&PROFILE)),
        (4.0, shift(&PROFILE)),
        (4.0, building(&PROFILE)),
        (3.5, skills(&PROFILE)),
        (3.5, contact(&PROFILE)),
    ]
}

fn scene(id: &str, seed: u32, camera: CameraSweep, beats: Vec<Beat>) -> SceneDescriptor {
    SceneDescriptor {
        id: id.to_owned(),
        seed,
        spring: SpringConfig::smooth(),
        camera,
        backdrop: Vec::new(),
        content_fade: None,
        beats,
    }
}

fn heading(text: &str, style: TextStyle, delay: f64, entrance: Entrance) -> HeadingBeat {
    HeadingBeat {
        text: text.to_owned(),
        style,
        delay,
        entrance,
        typewriter: None,
        max_width: None,
        margin_bottom: 0.0,
    }
}

/// Small tracked uppercase label above a scene's content.
fn eyebrow(text: &str, margin_bottom: f64) -> Beat {
    Beat::Heading(HeadingBeat {
        margin_bottom,
        ..heading(
            text,
            TextStyle::body(20.0, 500).muted().uppercase().tracking(10.0),
            0.0,
            Entrance::default(),
        )
    })
}

fn statement(text: &str, size: f64, delay: f64, entrance: Entrance) -> HeadingBeat {
    heading(
        text,
        TextStyle::display(size, 700).tracking(-2.0).leading(1.15),
        delay,
        entrance,
    )
}

fn watermark(text: &str, z: f64, opacity: f64, size: f64, letter_spacing: f64, ink: f64) -> Backdrop {
    Backdrop::Watermark {
        z,
        opacity,
        text: text.to_owned(),
        size,
        letter_spacing,
        ink,
    }
}

fn cards(items: Vec<CardItem>, chrome: Chrome, style: TextStyle) -> CardsBeat {
    CardsBeat {
        items,
        layout: CardLayout::Row,
        chrome,
        style,
        caption_style: None,
        icon_style: None,
        delay: 0.0,
        stagger: 0.0,
        entrance: Entrance::default(),
        idle: IdleMotion::still(),
        gap: 0.0,
        max_width: None,
        spine: None,
        margin_bottom: 0.0,
    }
}

fn items(texts: &[&str]) -> Vec<CardItem> {
    texts.iter().map(|t| CardItem::text(*t)).collect()
}

fn title(p: &Profile) -> SceneDescriptor {
    let camera = CameraSweep {
        span: 180.0,
        rotate_x: Some(Sweep::eased(-2.0, 1.5, Ease::InOutSine)),
        rotate_y: Some(Sweep::eased(3.0, -2.0, Ease::InOutSine)),
        translate_z: Some(Sweep::eased(-50.0, 20.0, Ease::OutQuad)),
        origin_x: None,
    };
    let mut s = scene(
        "title",
        0,
        camera,
        vec![
            Beat::Heading(HeadingBeat {
                margin_bottom: 40.0,
                ..heading(
                    p.name,
                    TextStyle::display(140.0, 700).tracking(-5.0),
                    0.0,
                    Entrance::depth(-120.0).slide_y(100.0).scale_from(0.9),
                )
            }),
            Beat::Rule(RuleBeat {
                delay: 25.0,
                width: 400.0,
                thickness: 2.0,
                fade: true,
                margin_bottom: 40.0,
            }),
            Beat::Heading(HeadingBeat {
                margin_bottom: 16.0,
                ..heading(
                    p.title,
                    TextStyle::body(48.0, 500),
                    15.0,
                    Entrance::depth(-60.0),
                )
            }),
            Beat::Heading(heading(
                &format!("@ {}", p.company),
                TextStyle::body(34.0, 400).muted(),
                15.0,
                Entrance::depth(-40.0),
            )),
        ],
    );
    s.backdrop.push(Backdrop::Glow {
        z: -200.0,
        opacity: 0.15,
        diameter: 700.0,
        ink: 0.03,
        extent: 0.7,
        float_speed: 0.8,
        float_amplitude: 4.0,
    });
    s
}

fn who_i_am(p: &Profile) -> SceneDescriptor {
    let camera = CameraSweep {
        span: 210.0,
        rotate_x: None,
        rotate_y: Some(Sweep::eased(-4.0, 4.0, Ease::InOutSine)),
        translate_z: None,
        origin_x: Some(Sweep::new(42.0, 58.0)),
    };
    scene(
        "who-i-am",
        1,
        camera,
        vec![
            eyebrow("Who I Am", 55.0),
            Beat::Heading(HeadingBeat {
                max_width: Some(1240.0),
                margin_bottom: 60.0,
                ..statement(
                    p.identity,
                    68.0,
                    0.0,
                    Entrance::depth(-90.0).scale_from(0.94),
                )
            }),
            Beat::Cards(CardsBeat {
                delay: 30.0,
                stagger: 15.0,
                entrance: Entrance::depth(-80.0).scale_from(0.9).rest(RestDepth {
                    step: -12.0,
                    ..RestDepth::default()
                }),
                idle: IdleMotion::new(0.6, 0.2, 3.0),
                gap: 28.0,
                ..cards(
                    items(&p.strengths),
                    Chrome::glass(16.0, 36.0, 24.0),
                    TextStyle::body(24.0, 500),
                )
            }),
        ],
    )
}

fn current_focus(p: &Profile) -> SceneDescriptor {
    let camera = CameraSweep {
        span: 270.0,
        rotate_x: Some(Sweep::eased(3.0, -3.0, Ease::InOutSine)),
        rotate_y: Some(Sweep::eased(-3.0, 3.0, Ease::InOutSine)),
        translate_z: Some(Sweep::new(20.0, -30.0)),
        origin_x: None,
    };
    let mut s = scene(
        "current-focus",
        2,
        camera,
        vec![
            eyebrow("Current Focus", 50.0),
            Beat::Cards(CardsBeat {
                delay: 20.0,
                stagger: 15.0,
                entrance: Entrance::depth(-90.0).rest(RestDepth {
                    step: -12.0,
                    ..RestDepth::default()
                }),
                idle: IdleMotion::new(0.5, 0.3, 4.0),
                gap: 18.0,
                margin_bottom: 65.0,
                ..cards(
                    items(&p.professional),
                    Chrome::glass(16.0, 44.0, 24.0),
                    TextStyle::body(26.0, 500),
                )
            }),
            Beat::Heading(HeadingBeat {
                style: TextStyle::display(58.0, 700).tracking(-1.0).leading(1.25),
                typewriter: Some(Typewriter {
                    delay: 70.0,
                    speed: 2.0,
                }),
                max_width: Some(1100.0),
                ..statement(
                    p.liberation,
                    58.0,
                    60.0,
                    Entrance::depth(-70.0).scale_from(0.95),
                )
            }),
        ],
    );
    s.backdrop
        .push(watermark("FOCUS", -80.0, 0.12, 200.0, -5.0, 0.015));
    s
}

fn shift(p: &Profile) -> SceneDescriptor {
    let camera = CameraSweep {
        span: 240.0,
        rotate_x: Some(Sweep::eased(-2.5, 2.5, Ease::InOutSine)),
        rotate_y: Some(Sweep::new(-1.0, 1.0)),
        translate_z: Some(Sweep::new(40.0, -25.0)),
        origin_x: None,
    };
    let insights = p
        .insights
        .iter()
        .zip(["BEFORE", "DURING", "AFTER"])
        .map(|(text, caption)| CardItem::text(*text).caption(caption))
        .collect();
    let mut s = scene(
        "shift",
        3,
        camera,
        vec![
            eyebrow("The Shift", 75.0),
            Beat::Cards(CardsBeat {
                layout: CardLayout::Alternating,
                caption_style: Some(TextStyle::body(13.0, 500).muted().tracking(2.0)),
                delay: 25.0,
                stagger: 25.0,
                entrance: Entrance::depth(-110.0)
                    .scale_from(0.88)
                    .slide_x(-50.0)
                    .mirrored()
                    .rest(RestDepth {
                        step: -15.0,
                        ..RestDepth::default()
                    }),
                idle: IdleMotion::new(0.4, 0.25, 3.0),
                gap: 50.0,
                max_width: Some(1180.0),
                spine: Some(Spine {
                    delay: 15.0,
                    height: 400.0,
                    dot_size: 16.0,
                    dot_scale_offset: -5.0,
                    dot_fade_offset: -10.0,
                }),
                ..cards(
                    insights,
                    Chrome::glass(20.0, 48.0, 30.0),
                    TextStyle::body(27.0, 500).leading(1.35),
                )
            }),
        ],
    );
    s.backdrop
        .push(watermark("SHIFT", -140.0, 0.2, 300.0, -10.0, 0.012));
    s
}

fn building(p: &Profile) -> SceneDescriptor {
    let camera = CameraSweep {
        span: 240.0,
        rotate_x: None,
        rotate_y: Some(Sweep::eased(6.0, -6.0, Ease::InOutSine)),
        translate_z: Some(Sweep::new(25.0, -15.0)),
        origin_x: None,
    };
    scene(
        "building",
        4,
        camera,
        vec![
            eyebrow("Building in Public", 50.0),
            Beat::Heading(HeadingBeat {
                margin_bottom: 65.0,
                ..statement(
                    p.building_theme,
                    64.0,
                    20.0,
                    Entrance::depth(-70.0).scale_from(0.94),
                )
            }),
            Beat::Cards(CardsBeat {
                delay: 45.0,
                stagger: 10.0,
                entrance: Entrance::depth(-90.0).scale_from(0.9).rest(RestDepth {
                    base: -15.0,
                    step: 0.0,
                    parity: 25.0,
                }),
                idle: IdleMotion::new(0.5, 0.2, 4.0).with_drift(Drift {
                    wave: Wave::Cos,
                    rate: 0.015,
                    phase_step: 35.0,
                    group_phase_step: 0.0,
                    amplitude: 2.0,
                }),
                gap: 22.0,
                ..cards(
                    items(&p.experiments),
                    Chrome::glass(100.0, 38.0, 20.0),
                    TextStyle::body(22.0, 500),
                )
            }),
        ],
    )
}

fn skills(p: &Profile) -> SceneDescriptor {
    let camera = CameraSweep {
        span: 210.0,
        rotate_x: Some(Sweep::new(2.5, -2.5)),
        rotate_y: Some(Sweep::eased(-5.0, 5.0, Ease::InOutSine)),
        translate_z: Some(Sweep::new(15.0, -20.0)),
        origin_x: None,
    };
    let group = |label: &str, delay: f64, names: &[&str]| CardGroup {
        label: label.to_owned(),
        delay,
        items: names.iter().map(|s| (*s).to_owned()).collect(),
    };
    let mut s = scene(
        "skills",
        5,
        camera,
        vec![
            eyebrow("Tech Stack", 55.0),
            Beat::Groups(GroupsBeat {
                groups: vec![
                    group("Frontier", 5.0, &p.frontier[..]),
                    group("Core", 35.0, &p.core[..]),
                    group("Platform", 65.0, &p.platform[..]),
                ],
                label_style: TextStyle::body(14.0, 500).muted().uppercase().tracking(5.0),
                item_style: TextStyle::body(22.0, 500),
                chrome: Chrome::glass(100.0, 34.0, 18.0),
                emphasis: Some(Emphasis {
                    style: TextStyle::body(28.0, 500),
                    chrome: Chrome::glass(100.0, 42.0, 22.0),
                }),
                item_offset: 8.0,
                item_stagger: 8.0,
                entrance: Entrance::depth(-90.0).scale_from(0.9),
                idle: IdleMotion::new(0.6, 0.15, 3.0)
                    .group_step(0.3)
                    .with_drift(Drift {
                        wave: Wave::Sin,
                        rate: 0.02,
                        phase_step: 20.0,
                        group_phase_step: 40.0,
                        amplitude: 2.0,
                    }),
                gap: 18.0,
                label_gap: 18.0,
                group_gap: 35.0,
                margin_bottom: 0.0,
            }),
        ],
    );
    s.backdrop
        .push(watermark("STACK", -100.0, 0.15, 250.0, -8.0, 0.012));
    s
}

fn contact(p: &Profile) -> SceneDescriptor {
    let camera = CameraSweep {
        span: 210.0,
        rotate_x: Some(Sweep::new(1.0, -1.0)),
        rotate_y: Some(Sweep::eased(4.0, -2.0, Ease::InOutSine)),
        translate_z: Some(Sweep::eased(-70.0, 25.0, Ease::OutQuad)),
        origin_x: None,
    };
    let contacts = [("✉", p.email), ("⌘", p.github), ("◈", p.linkedin)]
        .into_iter()
        .map(|(icon, text)| CardItem::text(text).icon(icon))
        .collect();
    let mut s = scene(
        "contact",
        6,
        camera,
        vec![
            Beat::Heading(HeadingBeat {
                margin_bottom: 30.0,
                ..heading(
                    "Let's Connect",
                    TextStyle::display(90.0, 700).tracking(-4.0),
                    15.0,
                    Entrance::depth(-60.0).scale_from(0.9).no_fade(),
                )
            }),
            Beat::Rule(RuleBeat {
                delay: 15.0,
                width: 180.0,
                thickness: 2.0,
                fade: false,
                margin_bottom: 60.0,
            }),
            Beat::Cards(CardsBeat {
                layout: CardLayout::Column,
                icon_style: Some(TextStyle::body(24.0, 400).muted()),
                delay: 25.0,
                stagger: 15.0,
                entrance: Entrance::depth(-50.0)
                    .slide_x(-30.0)
                    .scale_from(0.92)
                    .rest(RestDepth {
                        step: -8.0,
                        ..RestDepth::default()
                    }),
                idle: IdleMotion::new(0.3, 0.2, 2.5),
                gap: 26.0,
                margin_bottom: 65.0,
                ..cards(contacts, Chrome::Plain, TextStyle::body(26.0, 400).muted())
            }),
            Beat::Heading(heading(
                p.name,
                TextStyle::display(54.0, 600).tracking(-1.0),
                70.0,
                Entrance::depth(-40.0).rest(RestDepth {
                    base: 20.0,
                    ..RestDepth::default()
                }),
            )),
        ],
    );
    s.content_fade = Some(0.0);
    s.backdrop.push(Backdrop::Glow {
        z: -180.0,
        opacity: 0.18,
        diameter: 550.0,
        ink: 0.04,
        extent: 0.6,
        float_speed: 0.4,
        float_amplitude: 3.0,
    });
    s
}
