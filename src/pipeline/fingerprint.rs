use crate::{
    foundation::{
        error::{ReelError, ReelResult},
        math::Fnv1a64,
    },
    scene::element::VisualElement,
    timeline::compositor::FrameOutput,
};

/// 128-bit content hash of an evaluated frame.
///
/// Two frames with equal fingerprints produce identical element trees; consumers use this to skip
/// re-rasterizing held frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FrameFingerprint {
    pub hi: u64,
    pub lo: u64,
}

impl std::fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// The frame index itself is not hashed, only what is visible.
pub fn fingerprint_frame(frame: &FrameOutput) -> ReelResult<FrameFingerprint> {
    let mut h = PairHasher::new();
    h.write_u64(frame.layers.len() as u64);
    for layer in &frame.layers {
        h.write_str(&layer.scene_id);
        h.write_f64(layer.weight);
        write_element(&mut h, &layer.root)?;
    }
    Ok(h.finish())
}

fn write_element(h: &mut PairHasher, el: &VisualElement) -> ReelResult<()> {
    h.write_str(&el.id);
    for v in [el.rect.x0, el.rect.y0, el.rect.x1, el.rect.y1, el.opacity] {
        h.write_f64(v);
    }
    h.write_str(&el.transform.to_string());
    let kind = serde_json::to_value(&el.kind)
        .map_err(|e| ReelError::serde(format!("fingerprint element '{}': {e}", el.id)))?;
    write_json_value(h, &kind);

    h.write_u64(el.children.len() as u64);
    for child in &el.children {
        write_element(h, child)?;
    }
    Ok(())
}

fn write_json_value(h: &mut PairHasher, v: &serde_json::Value) {
    match v {
        serde_json::Value::Null => h.write_u8(0),
        serde_json::Value::Bool(x) => {
            h.write_u8(1);
            h.write_u8(u8::from(*x));
        }
        serde_json::Value::Number(n) => {
            h.write_u8(2);
            h.write_str(&n.to_string());
        }
        serde_json::Value::String(s) => {
            h.write_u8(3);
            h.write_str(s);
        }
        serde_json::Value::Array(items) => {
            h.write_u8(4);
            h.write_u64(items.len() as u64);
            for item in items {
                write_json_value(h, item);
            }
        }
        serde_json::Value::Object(map) => {
            h.write_u8(5);
            let mut keys = map.keys().collect::<Vec<_>>();
            keys.sort();
            h.write_u64(keys.len() as u64);
            for k in keys {
                h.write_str(k);
                write_json_value(h, &map[k]);
            }
        }
    }
}

/// Two FNV streams with different seeds, fed identical bytes.
struct PairHasher {
    a: Fnv1a64,
    b: Fnv1a64,
}

impl PairHasher {
    fn new() -> Self {
        Self {
            a: Fnv1a64::new_default(),
            b: Fnv1a64::new(0x9ae1_6a3b_2f90_404f),
        }
    }

    fn write_u8(&mut self, v: u8) {
        self.a.write_u8(v);
        self.b.write_u8(v);
    }

    fn write_u64(&mut self, v: u64) {
        self.a.write_u64(v);
        self.b.write_u64(v);
    }

    fn write_f64(&mut self, v: f64) {
        self.a.write_f64(v);
        self.b.write_f64(v);
    }

    fn write_str(&mut self, s: &str) {
        self.a.write_str(s);
        self.b.write_str(s);
    }

    fn finish(self) -> FrameFingerprint {
        FrameFingerprint {
            hi: self.a.finish(),
            lo: self.b.finish(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/fingerprint.rs"]
mod tests;
