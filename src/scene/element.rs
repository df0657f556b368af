use crate::{
    animation::transform3d::Transform3D,
    foundation::core::{Rect, Rgba8Premul},
    typography::font::FontRequest,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One fully resolved node of a frame's element tree.
///
/// `rect` is the untransformed layout box in canvas pixels; `transform` applies about the box
/// center. `opacity` multiplies down the tree.
pub struct VisualElement {
    pub id: String,
    pub kind: ElementKind,
    pub rect: Rect,
    pub transform: Transform3D,
    pub opacity: f64,
    pub children: Vec<VisualElement>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementKind {
    Group,
    Text(TextRun),
    Shape(ShapeSpec),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextRun {
    pub content: String,
    pub font: FontRequest,
    pub size: f64,
    pub color: Rgba8Premul,
    pub letter_spacing: f64,
    pub uppercase: bool,
    pub line_height: f64,
    pub align: TextAlign,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Rect,
    Ellipse,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "paint", rename_all = "snake_case")]
pub enum Fill {
    Solid {
        color: Rgba8Premul,
    },
    /// Radial falloff from `color` at the center to transparent at `extent` (0..1 of radius).
    Radial {
        color: Rgba8Premul,
        extent: f64,
    },
    /// Transparent ends with `color` at the midpoint along the long axis.
    Fade {
        color: Rgba8Premul,
    },
    /// Linear gradient from `top` to `bottom`.
    Vertical {
        top: Rgba8Premul,
        bottom: Rgba8Premul,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Stroke {
    pub color: Rgba8Premul,
    pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ShapeSpec {
    pub shape: ShapeKind,
    pub fill: Fill,
    pub stroke: Option<Stroke>,
    pub corner_radius: f64,
}

impl VisualElement {
    pub fn group(id: impl Into<String>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            kind: ElementKind::Group,
            rect,
            transform: Transform3D::identity(),
            opacity: 1.0,
            children: Vec::new(),
        }
    }

    pub fn text(id: impl Into<String>, rect: Rect, run: TextRun) -> Self {
        Self {
            kind: ElementKind::Text(run),
            ..Self::group(id, rect)
        }
    }

    pub fn shape(id: impl Into<String>, rect: Rect, spec: ShapeSpec) -> Self {
        Self {
            kind: ElementKind::Shape(spec),
            ..Self::group(id, rect)
        }
    }

    pub fn with_transform(mut self, transform: Transform3D) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_children(mut self, children: Vec<VisualElement>) -> Self {
        self.children = children;
        self
    }

    pub fn push(&mut self, child: VisualElement) {
        self.children.push(child);
    }

    /// Depth-first search by id.
    pub fn find(&self, id: &str) -> Option<&VisualElement> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    /// Visit every node depth-first with its accumulated opacity.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a VisualElement, f64)) {
        self.walk_inner(1.0, f);
    }

    fn walk_inner<'a>(&'a self, parent_opacity: f64, f: &mut impl FnMut(&'a VisualElement, f64)) {
        let opacity = parent_opacity * self.opacity;
        f(self, opacity);
        for child in &self.children {
            child.walk_inner(opacity, f);
        }
    }

    pub fn count(&self) -> usize {
        1 + self.children.iter().map(VisualElement::count).sum::<usize>()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/element.rs"]
mod tests;
