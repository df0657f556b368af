//! Introreel is a frame-driven animation evaluation engine for short programmatic videos.
//!
//! Every visual property is a pure function of an integer frame index. The public API is
//! session-oriented:
//!
//! - Build or load a [`Composition`] (the built-in one is [`Composition::introduction`])
//! - Validate it once by creating a [`Session`]
//! - Evaluate single frames with [`Session::evaluate`], or stream a range into a [`FrameSink`]
//!
//! Output is a tree of [`VisualElement`]s per scene layer. Rasterizing and encoding the tree is
//! left to the consumer.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod composition;
pub(crate) mod pipeline;
pub(crate) mod scene;
pub(crate) mod timeline;
pub(crate) mod typography;

pub use crate::foundation::core::{
    Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Rgba8Premul, Size, Vec2,
};
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::interpolate::{Extrapolate, InterpolateOpts, interpolate, lerp, mix};
pub use crate::animation::motion::{
    FLOAT_BASE_RATE, TypewriterReveal, drift_cos, drift_sin, float_offset, typewriter_reveal,
};
pub use crate::animation::spring::{SpringConfig, settle_frames, spring};
pub use crate::animation::transform3d::{PERSPECTIVE_PX, Transform3D, TransformOp, project};

pub use crate::scene::element::{
    ElementKind, Fill, ShapeKind, ShapeSpec, Stroke, TextAlign, TextRun, VisualElement,
};
pub use crate::scene::evaluator::{SceneEvaluator, camera_transform};
pub use crate::scene::model::{
    Backdrop, Beat, CameraSweep, CardGroup, CardItem, CardLayout, CardsBeat, Chrome, Drift,
    Emphasis, Entrance, FamilyRole, GroupsBeat, HeadingBeat, IdleMotion, RestDepth, RuleBeat,
    SceneDescriptor, Spine, Sweep, TextStyle, Tone, Typewriter, Wave,
};
pub use crate::scene::particles::{PARTICLE_COUNT, Particle, ParticleState, particle_field};
pub use crate::scene::theme::Theme;

pub use crate::typography::font::{
    FontHandle, FontRequest, FontResolver, StaticFontResolver, collect_font_requests,
    resolve_fonts,
};

pub use crate::timeline::compositor::{Compositor, FrameOutput, SceneLayer};
pub use crate::timeline::sequencer::{
    FrameRoute, RouteLayer, SceneWindow, Timeline, TransitionWindow,
};

pub use crate::composition::introduction::{INTRODUCTION_ID, PROFILE, Profile, introduction_scenes};
pub use crate::composition::model::{Composition, CompositionManifest, SceneEntry, Session};

pub use crate::pipeline::fingerprint::{FrameFingerprint, fingerprint_frame};
pub use crate::pipeline::render::{
    EvalThreading, RenderStats, evaluate_frames, full_range, render_range,
};
pub use crate::pipeline::sink::{FrameSink, InMemorySink, JsonLinesSink, SinkConfig};
