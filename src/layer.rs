use crate::id::LayerId;
use crate::snapshot::Snapshot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What produced the content of a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerKind {
    Raster,
    Vector,
    AiGenerated,
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerKind::Raster => write!(f, "raster"),
            LayerKind::Vector => write!(f, "vector"),
            LayerKind::AiGenerated => write!(f, "ai-generated"),
        }
    }
}

/// The pixel-compositing function combining a layer with the layers beneath it.
///
/// Opaque to this crate beyond being a stored value; the canvas surface
/// collaborator interprets it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
}

/// An independently toggleable drawing surface contributing to the composited
/// canvas, painted in ascending `position` order (0 = bottom).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Unique identifier for the layer
    pub id: LayerId,
    /// Display name of the layer
    pub name: String,
    /// What produced the layer content
    #[serde(rename = "type")]
    pub kind: LayerKind,
    /// Encoded content payload, owned by the canvas surface collaborator
    pub data: Snapshot,
    /// Layer opacity in `[0, 1]`
    pub opacity: f32,
    #[serde(rename = "blendMode")]
    pub blend_mode: BlendMode,
    /// When true, the layer rejects content mutations; visibility, ordering
    /// and the lock flag itself stay togglable
    pub locked: bool,
    /// Whether the layer is currently visible
    pub visible: bool,
    /// Paint-order index within the project, dense `0..n`
    pub position: usize,
}

impl Layer {
    /// Creates a fresh raster layer at the given paint position
    pub fn new(name: &str, position: usize) -> Self {
        Self {
            id: LayerId::generate(),
            name: name.to_string(),
            kind: LayerKind::Raster,
            data: Snapshot::empty(),
            opacity: 1.0,
            blend_mode: BlendMode::Normal,
            locked: false,
            visible: true,
            position,
        }
    }

    /// The sole initial layer every new project starts with
    pub fn background() -> Self {
        Self::new("Background", 0)
    }

    /// Applies a partial update in place. Opacity is clamped to `[0, 1]`.
    pub fn apply(&mut self, patch: LayerPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(data) = patch.data {
            self.data = data;
        }
        if let Some(opacity) = patch.opacity {
            self.opacity = opacity.clamp(0.0, 1.0);
        }
        if let Some(blend_mode) = patch.blend_mode {
            self.blend_mode = blend_mode;
        }
        if let Some(locked) = patch.locked {
            self.locked = locked;
        }
        if let Some(visible) = patch.visible {
            self.visible = visible;
        }
    }
}

/// A partial layer update; unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerPatch {
    pub name: Option<String>,
    pub kind: Option<LayerKind>,
    pub data: Option<Snapshot>,
    pub opacity: Option<f32>,
    pub blend_mode: Option<BlendMode>,
    pub locked: Option<bool>,
    pub visible: Option<bool>,
}

impl LayerPatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn kind(mut self, kind: LayerKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn data(mut self, data: Snapshot) -> Self {
        self.data = Some(data);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn blend_mode(mut self, blend_mode: BlendMode) -> Self {
        self.blend_mode = Some(blend_mode);
        self
    }

    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = Some(locked);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    /// True if the patch mutates layer content or appearance rather than
    /// visibility or the lock flag. Locked layers reject these.
    pub fn touches_content(&self) -> bool {
        self.name.is_some()
            || self.kind.is_some()
            || self.data.is_some()
            || self.opacity.is_some()
            || self.blend_mode.is_some()
    }
}
