use std::collections::{BTreeMap, BTreeSet};

use crate::{
    foundation::{
        error::{ReelError, ReelResult},
        math::Fnv1a64,
    },
    scene::{
        element::{ElementKind, VisualElement},
        theme::Theme,
    },
};

const DISPLAY_WEIGHTS: &[u16] = &[400, 500, 600, 700];
const BODY_WEIGHTS: &[u16] = &[400, 500];

#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Logical font selection carried on text elements.
pub struct FontRequest {
    pub family: String,
    pub weight: u16,
}

impl FontRequest {
    pub fn new(family: impl Into<String>, weight: u16) -> Self {
        Self {
            family: family.into(),
            weight,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
/// Stable identifier for a concrete face, as handed to the rasterizer.
pub struct FontHandle {
    pub id: u64,
    pub family: String,
    pub weight: u16,
}

/// Maps a logical request to a concrete face.
///
/// Implementations must be deterministic: the same request always yields the same handle.
pub trait FontResolver: Send + Sync {
    fn resolve(&self, request: &FontRequest) -> ReelResult<FontHandle>;
}

#[derive(Clone, Debug, Default)]
/// In-process resolver over a fixed table of loaded families and weights.
///
/// Unloaded weights fall back to the nearest loaded one, preferring the heavier face on ties.
pub struct StaticFontResolver {
    families: BTreeMap<String, BTreeSet<u16>>,
}

impl StaticFontResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_family(mut self, family: impl Into<String>, weights: &[u16]) -> Self {
        self.families
            .entry(family.into())
            .or_default()
            .extend(weights.iter().copied());
        self
    }

    /// Faces for a theme's two families: 400-700 for display text, 400/500 for body text.
    pub fn for_theme(theme: &Theme) -> Self {
        Self::new()
            .with_family(&theme.display_family, DISPLAY_WEIGHTS)
            .with_family(&theme.body_family, BODY_WEIGHTS)
    }

    /// Outfit for display text and Geist for body text.
    pub fn introduction() -> Self {
        Self::for_theme(&Theme::light())
    }

    pub fn families(&self) -> impl Iterator<Item = (&str, &BTreeSet<u16>)> {
        self.families.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FontResolver for StaticFontResolver {
    fn resolve(&self, request: &FontRequest) -> ReelResult<FontHandle> {
        let weights = self
            .families
            .get(&request.family)
            .filter(|w| !w.is_empty())
            .ok_or_else(|| {
                ReelError::validation(format!("font family '{}' is not loaded", request.family))
            })?;

        let weight = weights
            .iter()
            .copied()
            .min_by_key(|w| (w.abs_diff(request.weight), std::cmp::Reverse(*w)))
            .unwrap_or(request.weight);

        let mut h = Fnv1a64::new_default();
        h.write_str(&request.family);
        h.write_u64(u64::from(weight));
        Ok(FontHandle {
            id: h.finish(),
            family: request.family.clone(),
            weight,
        })
    }
}

/// Distinct font requests used anywhere in `root`, in sorted order.
pub fn collect_font_requests(root: &VisualElement) -> BTreeSet<FontRequest> {
    let mut out = BTreeSet::new();
    root.walk(&mut |el, _| {
        if let ElementKind::Text(run) = &el.kind {
            out.insert(run.font.clone());
        }
    });
    out
}

/// Resolve every request, failing on the first family the resolver cannot serve.
pub fn resolve_fonts<'a>(
    resolver: &dyn FontResolver,
    requests: impl IntoIterator<Item = &'a FontRequest>,
) -> ReelResult<BTreeMap<FontRequest, FontHandle>> {
    requests
        .into_iter()
        .map(|r| Ok((r.clone(), resolver.resolve(r)?)))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/typography/font.rs"]
mod tests;
