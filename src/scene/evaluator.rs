use crate::{
    animation::{
        interpolate::{InterpolateOpts, interpolate, mix},
        motion::{drift_cos, drift_sin, float_offset, typewriter_reveal},
        spring::spring,
        transform3d::Transform3D,
    },
    foundation::{
        core::{Canvas, Fps, Point, Rect, Size},
        error::{ReelError, ReelResult},
    },
    scene::{
        element::{Fill, ShapeKind, ShapeSpec, Stroke, TextAlign, TextRun, VisualElement},
        layout::{self, Placed},
        model::{
            Backdrop, Beat, CameraSweep, CardLayout, CardsBeat, Chrome, Entrance, GroupsBeat,
            HeadingBeat, IdleMotion, RuleBeat, SceneDescriptor, Sweep, TextStyle, Wave,
        },
        particles::particle_field,
        theme::Theme,
    },
    typography::font::FontRequest,
};

/// Horizontal inset of wrapping rows from each canvas edge.
const ROW_INSET: f64 = 160.0;
/// Gap between an icon and its card text.
const ICON_GAP: f64 = 24.0;
/// Space between a card's text and its caption.
const CAPTION_GAP: f64 = 10.0;
/// Alternating cards end this far left of the spine...
const LEFT_CARD_INSET: f64 = 70.0;
/// ...and start this far right of it.
const RIGHT_CARD_INSET: f64 = 40.0;
/// Spine line starts this far below the top of its block.
const SPINE_TOP: f64 = 20.0;
const SPINE_WIDTH: f64 = 2.0;

/// Evaluates scene descriptors into element trees for one canvas, frame rate and theme.
///
/// Stateless: every call is a pure function of the descriptor and the local frame.
#[derive(Clone, Copy, Debug)]
pub struct SceneEvaluator<'a> {
    fps: Fps,
    canvas: Canvas,
    theme: &'a Theme,
}

/// Entrance state of one item at the current frame.
#[derive(Clone, Copy, Debug)]
struct Motion {
    progress: f64,
    float_y: f64,
    drift_x: f64,
}

impl<'a> SceneEvaluator<'a> {
    pub fn new(fps: Fps, canvas: Canvas, theme: &'a Theme) -> Self {
        Self { fps, canvas, theme }
    }

    /// Full element tree for `scene` at `local_frame`.
    ///
    /// Tree shape: scene root holding an opaque `background`, then `camera` (camera transform)
    /// with `particles`, one `backdrop-N` group per backdrop layer, and `content` with one
    /// `beat-N` subtree per beat.
    #[tracing::instrument(skip(self, scene), fields(scene = %scene.id))]
    pub fn evaluate(
        &self,
        scene: &SceneDescriptor,
        local_frame: f64,
    ) -> ReelResult<VisualElement> {
        if !local_frame.is_finite() || local_frame < 0.0 {
            return Err(ReelError::InvalidFrame(local_frame));
        }
        let f = local_frame;
        let bounds = Rect::from_origin_size(Point::ORIGIN, self.canvas.size());

        let mut camera = VisualElement::group("camera", bounds)
            .with_transform(camera_transform(&scene.camera, f));
        camera.push(self.particles(scene.seed, f));
        for (i, layer) in scene.backdrop.iter().enumerate() {
            camera.push(self.backdrop(i, layer, f));
        }

        let heights: Vec<f64> = scene.beats.iter().map(|b| self.beat_height(b)).collect();
        let stacked: f64 = heights.iter().sum::<f64>()
            + scene
                .beats
                .iter()
                .take(scene.beats.len().saturating_sub(1))
                .map(margin_bottom)
                .sum::<f64>();

        let mut content = VisualElement::group("content", bounds);
        if let Some(delay) = scene.content_fade {
            content.opacity = self.spring(scene, f, delay);
        }
        let mut top = (bounds.height() - stacked) / 2.0;
        for (bi, (beat, height)) in scene.beats.iter().zip(&heights).enumerate() {
            content.push(self.beat(scene, bi, beat, top, f));
            top += height + margin_bottom(beat);
        }
        camera.push(content);

        let mut root = VisualElement::group(scene.id.clone(), bounds);
        root.push(self.background(bounds));
        root.push(camera);
        Ok(root)
    }

    /// Full-canvas gradient behind the camera; opaque, so a fading scene occludes the other.
    fn background(&self, bounds: Rect) -> VisualElement {
        VisualElement::shape(
            "background",
            bounds,
            ShapeSpec {
                shape: ShapeKind::Rect,
                fill: Fill::Vertical {
                    top: self.theme.background,
                    bottom: self.theme.background_end,
                },
                stroke: None,
                corner_radius: 0.0,
            },
        )
    }

    fn spring(&self, scene: &SceneDescriptor, frame: f64, delay: f64) -> f64 {
        spring(frame, self.fps, scene.spring, delay)
    }

    fn center_x(&self) -> f64 {
        self.canvas.center().x
    }

    fn run(&self, content: impl Into<String>, style: &TextStyle, align: TextAlign) -> TextRun {
        TextRun {
            content: content.into(),
            font: FontRequest::new(self.theme.family(style.family), style.weight),
            size: style.size,
            color: self.theme.tone(style.tone),
            letter_spacing: style.letter_spacing,
            uppercase: style.uppercase,
            line_height: style.line_height,
            align,
        }
    }

    fn particles(&self, seed: u32, f: f64) -> VisualElement {
        let size = self.canvas.size();
        let children = particle_field(seed)
            .map(|p| {
                let state = p.animate(f);
                let origin = Point::new(size.width * p.x_pct / 100.0, size.height * p.y_pct / 100.0);
                let spec = ShapeSpec {
                    shape: ShapeKind::Ellipse,
                    fill: Fill::Solid {
                        color: self.theme.particle,
                    },
                    stroke: None,
                    corner_radius: 0.0,
                };
                VisualElement::shape(
                    format!("particle-{}", p.index),
                    Rect::from_origin_size(origin, Size::new(p.size, p.size)),
                    spec,
                )
                .with_transform(
                    Transform3D::identity()
                        .translate_z(p.z)
                        .translate_y(state.y_offset)
                        .translate_x(state.x_offset),
                )
                .with_opacity(state.opacity)
            })
            .collect();
        VisualElement::group("particles", Rect::from_origin_size(Point::ORIGIN, size))
            .with_children(children)
    }

    fn backdrop(&self, index: usize, layer: &Backdrop, f: f64) -> VisualElement {
        let bounds = Rect::from_origin_size(Point::ORIGIN, self.canvas.size());
        let center = self.canvas.center();
        let (z, opacity, child) = match layer {
            Backdrop::Glow {
                z,
                opacity,
                diameter,
                ink,
                extent,
                float_speed,
                float_amplitude,
            } => {
                let rect = Rect::from_center_size(center, Size::new(*diameter, *diameter));
                let glow = VisualElement::shape(
                    "glow",
                    rect,
                    ShapeSpec {
                        shape: ShapeKind::Ellipse,
                        fill: Fill::Radial {
                            color: self.theme.ink(*ink),
                            extent: *extent,
                        },
                        stroke: None,
                        corner_radius: 0.0,
                    },
                )
                .with_transform(
                    Transform3D::identity().translate_y(float_offset(
                        f,
                        *float_speed,
                        *float_amplitude,
                    )),
                );
                (*z, *opacity, glow)
            }
            Backdrop::Watermark {
                z,
                opacity,
                text,
                size,
                letter_spacing,
                ink,
            } => {
                let style = TextStyle::display(*size, 700).tracking(*letter_spacing);
                let block = layout::text_block(text, &style, None);
                let mut run = self.run(text.clone(), &style, TextAlign::Center);
                run.color = self.theme.ink(*ink);
                let word = VisualElement::text(
                    "watermark",
                    Rect::from_center_size(center, block),
                    run,
                );
                (*z, *opacity, word)
            }
        };
        VisualElement::group(format!("backdrop-{index}"), bounds)
            .with_transform(Transform3D::identity().translate_z(z))
            .with_opacity(opacity)
            .with_children(vec![child])
    }

    fn beat_height(&self, beat: &Beat) -> f64 {
        match beat {
            Beat::Heading(h) => layout::text_block(&h.text, &h.style, h.max_width).height,
            Beat::Rule(r) => r.thickness,
            Beat::Cards(c) => self.place_cards(c, 0.0).height,
            Beat::Groups(g) => self.place_groups(g, 0.0).height,
        }
    }

    fn beat(
        &self,
        scene: &SceneDescriptor,
        bi: usize,
        beat: &Beat,
        top: f64,
        f: f64,
    ) -> VisualElement {
        let id = format!("beat-{bi}");
        match beat {
            Beat::Heading(h) => self.heading(scene, id, h, top, f),
            Beat::Rule(r) => self.rule(scene, id, r, top, f),
            Beat::Cards(c) => self.cards(scene, id, c, top, f),
            Beat::Groups(g) => self.groups(scene, id, g, top, f),
        }
    }

    fn heading(
        &self,
        scene: &SceneDescriptor,
        id: String,
        h: &HeadingBeat,
        top: f64,
        f: f64,
    ) -> VisualElement {
        let block = layout::text_block(&h.text, &h.style, h.max_width);
        let rect = layout::centered(block, self.center_x(), top);
        let progress = self.spring(scene, f, h.delay);
        let motion = Motion {
            progress,
            float_y: 0.0,
            drift_x: 0.0,
        };

        let Some(tw) = h.typewriter else {
            let run = self.run(h.text.clone(), &h.style, TextAlign::Center);
            return VisualElement::text(id, rect, run)
                .with_transform(pose(&h.entrance, motion, 0))
                .with_opacity(entrance_opacity(&h.entrance, progress));
        };

        let reveal = typewriter_reveal(&h.text, f, tw.delay, tw.speed, self.fps);
        let typed = layout::text_width(&reveal.visible, &h.style).min(block.width);
        let run = self.run(reveal.visible, &h.style, TextAlign::Center);
        let mut el = VisualElement::text(id.clone(), rect, run)
            .with_transform(pose(&h.entrance, motion, 0))
            .with_opacity(entrance_opacity(&h.entrance, progress));
        if let Some(caret_opacity) = reveal.caret_opacity {
            let lh = layout::line_height(&h.style);
            let caret = Rect::from_origin_size(
                Point::new(self.center_x() + typed / 2.0, rect.y1 - lh),
                Size::new(h.style.size * 0.3, lh),
            );
            el.push(
                VisualElement::text(
                    format!("{id}/caret"),
                    caret,
                    self.run("|", &h.style, TextAlign::Left),
                )
                .with_opacity(caret_opacity),
            );
        }
        el
    }

    fn rule(
        &self,
        scene: &SceneDescriptor,
        id: String,
        r: &RuleBeat,
        top: f64,
        f: f64,
    ) -> VisualElement {
        let progress = self.spring(scene, f, r.delay);
        let width = mix(progress, 0.0, r.width);
        let rect = layout::centered(Size::new(width, r.thickness), self.center_x(), top);
        let spec = ShapeSpec {
            shape: ShapeKind::Rect,
            fill: Fill::Fade {
                color: self.theme.rule,
            },
            stroke: None,
            corner_radius: r.thickness / 2.0,
        };
        let opacity = if r.fade { progress } else { 1.0 };
        VisualElement::shape(id, rect, spec).with_opacity(opacity)
    }

    fn card_size(&self, c: &CardsBeat, index: usize, fixed_width: Option<f64>) -> Size {
        let item = &c.items[index];
        let (pad_x, pad_y) = c.chrome.padding();
        let icon_width = match (&item.icon, &c.icon_style) {
            (Some(icon), Some(style)) => layout::text_width(icon, style) + ICON_GAP,
            (Some(icon), None) => layout::text_width(icon, &c.style) + ICON_GAP,
            _ => 0.0,
        };
        let caption_height = match (&item.caption, &c.caption_style) {
            (Some(_), Some(style)) => CAPTION_GAP + layout::line_height(style),
            (Some(_), None) => CAPTION_GAP + layout::line_height(&c.style),
            _ => 0.0,
        };
        match fixed_width {
            Some(width) => {
                let inner = (width - 2.0 * pad_x - icon_width).max(1.0);
                let text = layout::text_block(&item.text, &c.style, Some(inner));
                Size::new(width, text.height + caption_height + 2.0 * pad_y)
            }
            None => {
                let text = layout::text_block(&item.text, &c.style, None);
                Size::new(
                    text.width + icon_width + 2.0 * pad_x,
                    text.height + caption_height + 2.0 * pad_y,
                )
            }
        }
    }

    fn row_width(&self, max_width: Option<f64>) -> f64 {
        max_width.unwrap_or((self.canvas.size().width - 2.0 * ROW_INSET).max(1.0))
    }

    fn place_cards(&self, c: &CardsBeat, top: f64) -> Placed {
        let cx = self.center_x();
        match c.layout {
            CardLayout::Row => {
                let sizes: Vec<Size> = (0..c.items.len())
                    .map(|i| self.card_size(c, i, None))
                    .collect();
                layout::flow_row(&sizes, c.gap, self.row_width(c.max_width), cx, top)
            }
            CardLayout::Column => {
                let sizes: Vec<Size> = (0..c.items.len())
                    .map(|i| self.card_size(c, i, None))
                    .collect();
                layout::column(&sizes, c.gap, cx, top)
            }
            CardLayout::Alternating => {
                let container = self.row_width(c.max_width);
                let width = (container / 2.0 - LEFT_CARD_INSET).max(1.0);
                let mut y = top;
                let rects = (0..c.items.len())
                    .map(|i| {
                        if i > 0 {
                            y += c.gap;
                        }
                        let size = self.card_size(c, i, Some(width));
                        let x = if i % 2 == 0 {
                            cx - LEFT_CARD_INSET - width
                        } else {
                            cx + RIGHT_CARD_INSET
                        };
                        let r = Rect::from_origin_size(Point::new(x, y), size);
                        y += size.height;
                        r
                    })
                    .collect();
                Placed {
                    rects,
                    height: y - top,
                }
            }
        }
    }

    fn cards(
        &self,
        scene: &SceneDescriptor,
        id: String,
        c: &CardsBeat,
        top: f64,
        f: f64,
    ) -> VisualElement {
        let placed = self.place_cards(c, top);
        let bounds = Rect::new(0.0, top, self.canvas.size().width, top + placed.height);
        let mut group = VisualElement::group(id.clone(), bounds);

        if let Some(spine) = c.spine {
            let progress = self.spring(scene, f, spine.delay);
            let rect = Rect::from_origin_size(
                Point::new(self.center_x() - SPINE_WIDTH / 2.0, top + SPINE_TOP),
                Size::new(SPINE_WIDTH, mix(progress, 0.0, spine.height)),
            );
            group.push(VisualElement::shape(
                format!("{id}/spine"),
                rect,
                ShapeSpec {
                    shape: ShapeKind::Rect,
                    fill: Fill::Fade {
                        color: self.theme.spine,
                    },
                    stroke: None,
                    corner_radius: SPINE_WIDTH / 2.0,
                },
            ));
        }

        for (i, (item, rect)) in c.items.iter().zip(&placed.rects).enumerate() {
            let delay = c.delay + i as f64 * c.stagger;
            let progress = self.spring(scene, f, delay);
            let motion = Motion {
                progress,
                float_y: idle_float(&c.idle, f, i, 0),
                drift_x: idle_drift(&c.idle, f, i, 0),
            };

            if let Some(spine) = c.spine {
                let scale = self.spring(scene, f, delay + spine.dot_scale_offset);
                let fade = self.spring(scene, f, delay + spine.dot_fade_offset);
                let dot = Rect::from_center_size(
                    Point::new(self.center_x(), rect.center().y),
                    Size::new(spine.dot_size, spine.dot_size),
                );
                group.push(
                    VisualElement::shape(
                        format!("{id}/dot-{i}"),
                        dot,
                        ShapeSpec {
                            shape: ShapeKind::Ellipse,
                            fill: Fill::Solid {
                                color: self.theme.dot,
                            },
                            stroke: None,
                            corner_radius: 0.0,
                        },
                    )
                    .with_transform(Transform3D::identity().scale(scale))
                    .with_opacity(fade),
                );
            }

            let align = match c.layout {
                CardLayout::Alternating if i % 2 == 0 => TextAlign::Right,
                CardLayout::Alternating => TextAlign::Left,
                _ => TextAlign::Center,
            };
            let (pad_x, pad_y) = c.chrome.padding();
            let inner = rect.inset((-pad_x, -pad_y));
            let mut children = Vec::new();
            let mut text_x0 = inner.x0;
            if let Some(icon) = &item.icon {
                let style = c.icon_style.as_ref().unwrap_or(&c.style);
                let w = layout::text_width(icon, style);
                let r = Rect::new(
                    inner.x0,
                    inner.y0,
                    inner.x0 + w,
                    inner.y0 + layout::line_height(style),
                );
                children.push(VisualElement::text(
                    format!("{id}/card-{i}/icon"),
                    r,
                    self.run(icon.clone(), style, TextAlign::Left),
                ));
                text_x0 += w + ICON_GAP;
            }
            let caption_style = c.caption_style.as_ref().unwrap_or(&c.style);
            let caption_height = item
                .caption
                .as_ref()
                .map_or(0.0, |_| CAPTION_GAP + layout::line_height(caption_style));
            let text_rect = Rect::new(text_x0, inner.y0, inner.x1, inner.y1 - caption_height);
            children.push(VisualElement::text(
                format!("{id}/card-{i}/text"),
                text_rect,
                self.run(item.text.clone(), &c.style, align),
            ));
            if let Some(caption) = &item.caption {
                let r = Rect::new(
                    text_x0,
                    inner.y1 - layout::line_height(caption_style),
                    inner.x1,
                    inner.y1,
                );
                children.push(VisualElement::text(
                    format!("{id}/card-{i}/caption"),
                    r,
                    self.run(caption.clone(), caption_style, align),
                ));
            }

            group.push(
                self.card_shell(format!("{id}/card-{i}"), *rect, &c.chrome, false)
                    .with_transform(pose(&c.entrance, motion, i))
                    .with_opacity(entrance_opacity(&c.entrance, progress))
                    .with_children(children),
            );
        }
        group
    }

    fn card_shell(&self, id: String, rect: Rect, chrome: &Chrome, emphasized: bool) -> VisualElement {
        match *chrome {
            Chrome::Glass { radius, .. } => {
                let (fill, border) = if emphasized {
                    (self.theme.glass_emphasis, self.theme.glass_border_emphasis)
                } else {
                    (self.theme.glass, self.theme.glass_border)
                };
                VisualElement::shape(
                    id,
                    rect,
                    ShapeSpec {
                        shape: ShapeKind::Rect,
                        fill: Fill::Solid { color: fill },
                        stroke: Some(Stroke {
                            color: border,
                            width: 1.0,
                        }),
                        corner_radius: radius.min(rect.height() / 2.0),
                    },
                )
            }
            Chrome::Plain => VisualElement::group(id, rect),
        }
    }

    fn group_style<'g>(&self, g: &'g GroupsBeat, gi: usize) -> (&'g TextStyle, &'g Chrome, bool) {
        match &g.emphasis {
            Some(e) if gi == 0 => (&e.style, &e.chrome, true),
            _ => (&g.item_style, &g.chrome, false),
        }
    }

    fn pill_size(text: &str, style: &TextStyle, chrome: &Chrome) -> Size {
        let (pad_x, pad_y) = chrome.padding();
        let block = layout::text_block(text, style, None);
        Size::new(block.width + 2.0 * pad_x, block.height + 2.0 * pad_y)
    }

    /// Rects of each group's label followed by its pills, and the block height.
    fn place_groups(&self, g: &GroupsBeat, top: f64) -> GroupsPlacement {
        let cx = self.center_x();
        let label_h = layout::line_height(&g.label_style);
        let mut y = top;
        let mut groups = Vec::with_capacity(g.groups.len());
        for (gi, group) in g.groups.iter().enumerate() {
            if gi > 0 {
                y += g.group_gap;
            }
            let group_top = y;
            let label = layout::centered(
                Size::new(layout::text_width(&group.label, &g.label_style), label_h),
                cx,
                y,
            );
            y += label_h + g.label_gap;
            let (style, chrome, _) = self.group_style(g, gi);
            let sizes: Vec<Size> = group
                .items
                .iter()
                .map(|t| Self::pill_size(t, style, chrome))
                .collect();
            let row = layout::flow_row(&sizes, g.gap, self.row_width(None), cx, y);
            y += row.height;
            groups.push((
                Rect::new(0.0, group_top, self.canvas.size().width, y),
                label,
                row.rects,
            ));
        }
        GroupsPlacement {
            groups,
            height: y - top,
        }
    }

    fn groups(
        &self,
        scene: &SceneDescriptor,
        id: String,
        g: &GroupsBeat,
        top: f64,
        f: f64,
    ) -> VisualElement {
        let placed = self.place_groups(g, top);
        let bounds = Rect::new(0.0, top, self.canvas.size().width, top + placed.height);
        let mut block = VisualElement::group(id.clone(), bounds);

        for (gi, (group, (group_rect, label_rect, pill_rects))) in
            g.groups.iter().zip(placed.groups).enumerate()
        {
            let group_id = format!("{id}/group-{gi}");
            let (style, chrome, emphasized) = self.group_style(g, gi);
            let mut children = vec![VisualElement::text(
                format!("{group_id}/label"),
                label_rect,
                self.run(group.label.clone(), &g.label_style, TextAlign::Center),
            )];

            for (i, (item, rect)) in group.items.iter().zip(pill_rects).enumerate() {
                let delay = group.delay + g.item_offset + i as f64 * g.item_stagger;
                let progress = self.spring(scene, f, delay);
                let motion = Motion {
                    progress,
                    float_y: idle_float(&g.idle, f, i, gi),
                    drift_x: idle_drift(&g.idle, f, i, gi),
                };
                let item_id = format!("{group_id}/item-{i}");
                let text = VisualElement::text(
                    format!("{item_id}/text"),
                    rect.inset((-chrome.padding().0, -chrome.padding().1)),
                    self.run(item.clone(), style, TextAlign::Center),
                );
                children.push(
                    self.card_shell(item_id, rect, chrome, emphasized)
                        .with_transform(pose(&g.entrance, motion, i))
                        .with_opacity(entrance_opacity(&g.entrance, progress))
                        .with_children(vec![text]),
                );
            }

            block.push(
                VisualElement::group(group_id, group_rect)
                    .with_opacity(self.spring(scene, f, group.delay))
                    .with_children(children),
            );
        }
        block
    }
}

struct GroupsPlacement {
    /// Per group: block bounds, label rect, pill rects.
    groups: Vec<(Rect, Rect, Vec<Rect>)>,
    height: f64,
}

/// Camera at local frame `f`: each track sweeps across `span` frames, clamped at both ends.
pub fn camera_transform(camera: &CameraSweep, f: f64) -> Transform3D {
    let track = |sweep: Option<Sweep>, rest: f64| {
        sweep.map_or(rest, |s| {
            interpolate(
                f,
                [0.0, camera.span],
                [s.from, s.to],
                InterpolateOpts::clamp().with_ease(s.ease),
            )
        })
    };
    Transform3D::camera(
        track(camera.rotate_x, 0.0),
        track(camera.rotate_y, 0.0),
        track(camera.translate_z, 0.0),
        track(camera.origin_x, 50.0),
        50.0,
    )
}

fn margin_bottom(beat: &Beat) -> f64 {
    match beat {
        Beat::Heading(h) => h.margin_bottom,
        Beat::Rule(r) => r.margin_bottom,
        Beat::Cards(c) => c.margin_bottom,
        Beat::Groups(g) => g.margin_bottom,
    }
}

fn entrance_opacity(entrance: &Entrance, progress: f64) -> f64 {
    if entrance.fade { progress } else { 1.0 }
}

/// `translateY translateX translateZ scale`, interpolated from the entrance pose to rest.
fn pose(entrance: &Entrance, motion: Motion, index: usize) -> Transform3D {
    let from_x = if entrance.mirror_x && index % 2 == 1 {
        -entrance.from_x
    } else {
        entrance.from_x
    };
    let p = motion.progress;
    Transform3D::identity()
        .translate_y(mix(p, entrance.from_y, 0.0) + motion.float_y)
        .translate_x(mix(p, from_x, 0.0) + motion.drift_x)
        .translate_z(mix(p, entrance.from_z, entrance.rest.z(index)))
        .scale(mix(p, entrance.from_scale, 1.0))
}

fn idle_float(idle: &IdleMotion, f: f64, i: usize, gi: usize) -> f64 {
    let speed = idle.speed + i as f64 * idle.speed_step + gi as f64 * idle.group_speed_step;
    float_offset(f, speed, idle.amplitude)
}

fn idle_drift(idle: &IdleMotion, f: f64, i: usize, gi: usize) -> f64 {
    let Some(d) = idle.drift else {
        return 0.0;
    };
    let phase = i as f64 * d.phase_step + gi as f64 * d.group_phase_step;
    match d.wave {
        Wave::Cos => drift_cos(f, phase, d.rate, d.amplitude),
        Wave::Sin => drift_sin(f, phase, d.rate, d.amplitude),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/evaluator.rs"]
mod tests;
