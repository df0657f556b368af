//! Deterministic block layout for scene content.
//!
//! Text is measured with a fixed per-character advance, so boxes are estimates. Exact shaping is
//! left to the rasterizer; the estimates only need to be stable frame to frame.

use crate::{
    foundation::core::{Point, Rect, Size},
    scene::model::{FamilyRole, TextStyle},
};

/// Average glyph advance as a fraction of the font size.
fn advance_em(style: &TextStyle) -> f64 {
    match (style.family, style.uppercase) {
        (_, true) => 0.66,
        (FamilyRole::Display, false) => 0.54,
        (FamilyRole::Body, false) => 0.5,
    }
}

pub fn text_width(text: &str, style: &TextStyle) -> f64 {
    let n = text.chars().count() as f64;
    if n == 0.0 {
        return 0.0;
    }
    (n * style.size * advance_em(style) + (n - 1.0) * style.letter_spacing).max(0.0)
}

pub fn line_height(style: &TextStyle) -> f64 {
    style.size * style.line_height
}

/// Box for `text`, wrapped into lines of at most `max_width` when given.
pub fn text_block(text: &str, style: &TextStyle, max_width: Option<f64>) -> Size {
    let width = text_width(text, style);
    match max_width {
        Some(max) if width > max => {
            let lines = (width / max).ceil();
            Size::new(max, lines * line_height(style))
        }
        _ => Size::new(width, line_height(style)),
    }
}

/// Rect of `size` horizontally centered on `center_x` with its top edge at `top`.
pub fn centered(size: Size, center_x: f64, top: f64) -> Rect {
    Rect::from_origin_size(Point::new(center_x - size.width / 2.0, top), size)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Placed {
    pub rects: Vec<Rect>,
    pub height: f64,
}

/// Centered wrapping row: items fill lines up to `max_width`; each line is centered.
pub fn flow_row(sizes: &[Size], gap: f64, max_width: f64, center_x: f64, top: f64) -> Placed {
    let mut lines: Vec<Vec<usize>> = Vec::new();
    let mut line_width = 0.0;
    for (i, size) in sizes.iter().enumerate() {
        let needed = if line_width > 0.0 {
            line_width + gap + size.width
        } else {
            size.width
        };
        match lines.last_mut() {
            Some(line) if needed <= max_width || line.is_empty() => {
                line.push(i);
                line_width = needed;
            }
            _ => {
                lines.push(vec![i]);
                line_width = size.width;
            }
        }
    }

    let mut rects = vec![Rect::ZERO; sizes.len()];
    let mut y = top;
    for (li, line) in lines.iter().enumerate() {
        if li > 0 {
            y += gap;
        }
        let width: f64 = line.iter().map(|&i| sizes[i].width).sum::<f64>()
            + gap * line.len().saturating_sub(1) as f64;
        let height = line.iter().map(|&i| sizes[i].height).fold(0.0, f64::max);
        let mut x = center_x - width / 2.0;
        for &i in line {
            let s = sizes[i];
            rects[i] = Rect::from_origin_size(Point::new(x, y + (height - s.height) / 2.0), s);
            x += s.width + gap;
        }
        y += height;
    }
    Placed {
        rects,
        height: y - top,
    }
}

/// Centered column with `gap` between items.
pub fn column(sizes: &[Size], gap: f64, center_x: f64, top: f64) -> Placed {
    let mut y = top;
    let rects = sizes
        .iter()
        .enumerate()
        .map(|(i, &s)| {
            if i > 0 {
                y += gap;
            }
            let r = centered(s, center_x, y);
            y += s.height;
            r
        })
        .collect();
    Placed {
        rects,
        height: y - top,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/layout.rs"]
mod tests;
