use std::fmt;

use glam::{DMat4, DVec3, DVec4};

use crate::foundation::core::{Point, Size};

/// Camera perspective distance in pixels.
pub const PERSPECTIVE_PX: f64 = 1200.0;

/// One step of a 3D transform list. Angles are degrees, distances are pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TransformOp {
    Perspective {
        distance: f64,
        origin_x_pct: f64,
        origin_y_pct: f64,
    },
    RotateX {
        deg: f64,
    },
    RotateY {
        deg: f64,
    },
    TranslateX {
        px: f64,
    },
    TranslateY {
        px: f64,
    },
    TranslateZ {
        px: f64,
    },
    Scale {
        factor: f64,
    },
}

/// Ordered transform list; ops apply in list order, exactly like a CSS `transform` value.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Transform3D {
    pub ops: Vec<TransformOp>,
}

impl Transform3D {
    pub fn identity() -> Self {
        Self::default()
    }

    /// Viewing transform: perspective about the origin, then rotateX, rotateY, translateZ.
    pub fn camera(
        rotate_x_deg: f64,
        rotate_y_deg: f64,
        translate_z_px: f64,
        origin_x_pct: f64,
        origin_y_pct: f64,
    ) -> Self {
        Self {
            ops: vec![
                TransformOp::Perspective {
                    distance: PERSPECTIVE_PX,
                    origin_x_pct,
                    origin_y_pct,
                },
                TransformOp::RotateX { deg: rotate_x_deg },
                TransformOp::RotateY { deg: rotate_y_deg },
                TransformOp::TranslateZ { px: translate_z_px },
            ],
        }
    }

    pub fn then(mut self, op: TransformOp) -> Self {
        self.ops.push(op);
        self
    }

    pub fn translate_x(self, px: f64) -> Self {
        self.then(TransformOp::TranslateX { px })
    }

    pub fn translate_y(self, px: f64) -> Self {
        self.then(TransformOp::TranslateY { px })
    }

    pub fn translate_z(self, px: f64) -> Self {
        self.then(TransformOp::TranslateZ { px })
    }

    pub fn scale(self, factor: f64) -> Self {
        self.then(TransformOp::Scale { factor })
    }

    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    /// Compose into one matrix for a box of `size` whose transform origin is its center.
    pub fn to_matrix(&self, size: Size) -> DMat4 {
        let center = DVec3::new(size.width / 2.0, size.height / 2.0, 0.0);
        self.ops.iter().fold(DMat4::IDENTITY, |acc, op| {
            let local = match *op {
                TransformOp::Perspective {
                    distance,
                    origin_x_pct,
                    origin_y_pct,
                } => about(
                    DVec3::new(
                        size.width * origin_x_pct / 100.0,
                        size.height * origin_y_pct / 100.0,
                        0.0,
                    ),
                    perspective(distance),
                ),
                other => about(center, op_matrix(other)),
            };
            acc * local
        })
    }
}

impl fmt::Display for Transform3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ops.is_empty() {
            return f.write_str("none");
        }
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match *op {
                TransformOp::Perspective {
                    distance,
                    origin_x_pct,
                    origin_y_pct,
                } => write!(
                    f,
                    "perspective({distance}px at {origin_x_pct}% {origin_y_pct}%)"
                )?,
                TransformOp::RotateX { deg } => write!(f, "rotateX({deg}deg)")?,
                TransformOp::RotateY { deg } => write!(f, "rotateY({deg}deg)")?,
                TransformOp::TranslateX { px } => write!(f, "translateX({px}px)")?,
                TransformOp::TranslateY { px } => write!(f, "translateY({px}px)")?,
                TransformOp::TranslateZ { px } => write!(f, "translateZ({px}px)")?,
                TransformOp::Scale { factor } => write!(f, "scale({factor})")?,
            }
        }
        Ok(())
    }
}

/// Apply `m` to a 3D point and divide by `w`. Returns `None` behind the viewer.
pub fn project(m: &DMat4, p: Point, z: f64) -> Option<Point> {
    let v = m.mul_vec4(DVec4::new(p.x, p.y, z, 1.0));
    if v.w <= 0.0 {
        return None;
    }
    Some(Point::new(v.x / v.w, v.y / v.w))
}

fn op_matrix(op: TransformOp) -> DMat4 {
    match op {
        TransformOp::Perspective { distance, .. } => perspective(distance),
        TransformOp::RotateX { deg } => DMat4::from_rotation_x(deg.to_radians()),
        TransformOp::RotateY { deg } => DMat4::from_rotation_y(deg.to_radians()),
        TransformOp::TranslateX { px } => DMat4::from_translation(DVec3::new(px, 0.0, 0.0)),
        TransformOp::TranslateY { px } => DMat4::from_translation(DVec3::new(0.0, px, 0.0)),
        TransformOp::TranslateZ { px } => DMat4::from_translation(DVec3::new(0.0, 0.0, px)),
        TransformOp::Scale { factor } => DMat4::from_scale(DVec3::new(factor, factor, 1.0)),
    }
}

/// CSS `perspective(d)`: `w' = w - z / d`.
fn perspective(distance: f64) -> DMat4 {
    if distance <= 0.0 {
        return DMat4::IDENTITY;
    }
    DMat4::from_cols(
        DVec4::X,
        DVec4::Y,
        DVec4::new(0.0, 0.0, 1.0, -1.0 / distance),
        DVec4::W,
    )
}

fn about(origin: DVec3, m: DMat4) -> DMat4 {
    DMat4::from_translation(origin) * m * DMat4::from_translation(-origin)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transform3d.rs"]
mod tests;
