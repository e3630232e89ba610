use crate::error::SkaitchError;
use crate::history::{EntryKind, HistoryEntry, HistoryLog};
use crate::id::{LayerId, ProjectId};
use crate::layer::{Layer, LayerPatch};
use crate::util::time;
use serde::{Deserialize, Serialize};

/// Smallest accepted canvas side length in pixels
pub const MIN_CANVAS_SIZE: u32 = 100;
/// Largest accepted canvas side length in pixels
pub const MAX_CANVAS_SIZE: u32 = 8192;

/// Version written into new project documents
pub const SKAITCH_VERSION: &str = "1.0.0";

/// Bookkeeping block carried by every project document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Creation time, milliseconds since the UNIX epoch
    pub created: u64,
    /// Last modification time, milliseconds since the UNIX epoch
    pub modified: u64,
    /// Running count of AI assist operations applied to this project
    pub ai_assists_count: u32,
    /// Schema version the document was written with
    pub skaitch_version: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub thumbnail: Option<String>,
}

impl ProjectMetadata {
    fn new() -> Self {
        let now = time::timestamp_ms();
        Self {
            created: now,
            modified: now,
            ai_assists_count: 0,
            skaitch_version: SKAITCH_VERSION.to_string(),
            thumbnail: None,
        }
    }
}

/// The aggregate root: canvas dimensions, ordered layers, history log and
/// metadata. Owns its layers and history exclusively.
///
/// Invariants upheld by every mutation:
/// - at least one layer is always present
/// - layer `position` values are a dense permutation of `0..n`
/// - the selected layer id always names an existing layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub version: String,
    #[serde(rename = "projectName")]
    pub project_name: String,
    pub width: u32,
    pub height: u32,
    layers: Vec<Layer>,
    pub history: HistoryLog,
    pub metadata: ProjectMetadata,
    /// Non-owning back-reference to the active layer; not part of the
    /// persisted document, re-pointed at the first layer on load
    #[serde(skip)]
    selected_layer_id: Option<LayerId>,
}

impl Project {
    /// Creates a project with a single "Background" raster layer, which
    /// starts selected. Fails with `InvalidDimensions` when either side is
    /// outside `[100, 8192]`.
    pub fn new(width: u32, height: u32, name: &str) -> Result<Self, SkaitchError> {
        if !(MIN_CANVAS_SIZE..=MAX_CANVAS_SIZE).contains(&width)
            || !(MIN_CANVAS_SIZE..=MAX_CANVAS_SIZE).contains(&height)
        {
            return Err(SkaitchError::InvalidDimensions { width, height });
        }
        let background = Layer::background();
        let selected = background.id;
        log::info!("creating project '{name}' at {width}x{height}");
        Ok(Self {
            id: ProjectId::generate(),
            version: SKAITCH_VERSION.to_string(),
            project_name: name.to_string(),
            width,
            height,
            layers: vec![background],
            history: HistoryLog::new(),
            metadata: ProjectMetadata::new(),
            selected_layer_id: Some(selected),
        })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    pub fn selected_layer_id(&self) -> Option<LayerId> {
        self.selected_layer_id
    }

    pub fn selected_layer(&self) -> Option<&Layer> {
        self.selected_layer_id.and_then(|id| self.layer(id))
    }

    /// Marks the project as modified now
    pub fn touch(&mut self) {
        self.metadata.modified = time::timestamp_ms();
    }

    /// Appends a raster layer at the top paint position and selects it
    pub fn add_layer(&mut self, name: &str) -> LayerId {
        let layer = Layer::new(name, self.layers.len());
        let id = layer.id;
        self.layers.push(layer);
        self.selected_layer_id = Some(id);
        self.touch();
        id
    }

    /// Removes a layer. No-op when the id is unknown or the layer is the last
    /// one remaining; returns whether anything changed. If the removed layer
    /// was selected, selection moves to the first remaining layer.
    pub fn remove_layer(&mut self, id: LayerId) -> bool {
        if self.layers.len() == 1 {
            return false;
        }
        let Some(index) = self.layers.iter().position(|l| l.id == id) else {
            return false;
        };
        self.layers.remove(index);
        self.renumber_positions();
        if self.selected_layer_id == Some(id) {
            self.selected_layer_id = self.layers.first().map(|l| l.id);
        }
        self.touch();
        true
    }

    /// Applies a partial attribute update to the layer with the given id.
    /// No-op when the id is unknown; returns whether anything changed.
    ///
    /// Lock enforcement happens one level up, in the session controller; this
    /// method applies whatever it is given.
    pub fn update_layer(&mut self, id: LayerId, patch: LayerPatch) -> bool {
        let Some(layer) = self.layers.iter_mut().find(|l| l.id == id) else {
            return false;
        };
        layer.apply(patch);
        self.touch();
        true
    }

    /// Moves a layer to `new_position` (clamped to the valid range) and
    /// renumbers all positions into a dense `0..n` sequence. No-op when the
    /// id is unknown.
    pub fn reorder_layer(&mut self, id: LayerId, new_position: usize) -> bool {
        let Some(index) = self.layers.iter().position(|l| l.id == id) else {
            return false;
        };
        let target = new_position.min(self.layers.len() - 1);
        let layer = self.layers.remove(index);
        self.layers.insert(target, layer);
        self.renumber_positions();
        true
    }

    /// Points the selection at an existing layer; no-op for unknown ids
    pub fn select_layer(&mut self, id: LayerId) -> bool {
        if self.layer(id).is_some() {
            self.selected_layer_id = Some(id);
            true
        } else {
            false
        }
    }

    pub(crate) fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.id == id)
    }

    /// Appends a history entry, bumping the AI assist counter for `ai-assist`
    /// entries and touching the modified timestamp.
    pub fn record(&mut self, entry: HistoryEntry) {
        if entry.kind == EntryKind::AiAssist {
            self.metadata.ai_assists_count += 1;
        }
        self.history.append(entry);
        self.touch();
    }

    /// Restores the invariants that are not part of the persisted document:
    /// the history cursor points at the tail and the first layer is selected.
    pub fn restore_after_load(&mut self) {
        self.history.reset_cursor_to_tail();
        self.selected_layer_id = self.layers.first().map(|l| l.id);
    }

    fn renumber_positions(&mut self) {
        for (i, layer) in self.layers.iter_mut().enumerate() {
            layer.position = i;
        }
    }
}
