use crate::assist::{AssistGateway, AssistKind, AssistParameters, AssistRequest, SelectionArea};
use crate::error::SkaitchError;
use crate::history::{EntryKind, HistoryEntry};
use crate::id::LayerId;
use crate::layer::{LayerKind, LayerPatch};
use crate::project::Project;
use crate::snapshot::Snapshot;
use crate::surface::CanvasSurface;
use crate::tool::{ToolSettings, ToolType};

/// The stateful facade a UI drives.
///
/// Owns the open project plus the ephemeral, never-persisted flags: the
/// active tool, whether a stroke is in progress, whether an AI assist request
/// is in flight, and a pending AI preview awaiting acceptance.
///
/// All mutation happens on one logical owner; the only suspension point is
/// the awaited gateway call, guarded so that at most one assist request is in
/// flight at a time.
#[derive(Debug, Default)]
pub struct Session {
    project: Option<Project>,
    current_tool: ToolType,
    tool_settings: ToolSettings,
    is_drawing: bool,
    is_processing: bool,
    ai_preview: Option<Snapshot>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fresh project and makes it the open one
    pub fn create_project(
        &mut self,
        width: u32,
        height: u32,
        name: &str,
    ) -> Result<&Project, SkaitchError> {
        let project = Project::new(width, height, name)?;
        self.ai_preview = None;
        self.is_drawing = false;
        self.is_processing = false;
        Ok(self.project.insert(project))
    }

    /// Opens an existing project: the history cursor moves to the tail and
    /// the first layer becomes selected
    pub fn load_project(&mut self, mut project: Project) {
        project.restore_after_load();
        log::info!("loaded project '{}'", project.project_name);
        self.project = Some(project);
        self.ai_preview = None;
        self.is_drawing = false;
        self.is_processing = false;
    }

    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    fn project_mut(&mut self) -> Result<&mut Project, SkaitchError> {
        self.project.as_mut().ok_or(SkaitchError::NoProject)
    }

    pub fn current_tool(&self) -> ToolType {
        self.current_tool
    }

    pub fn set_tool(&mut self, tool: ToolType) {
        self.current_tool = tool;
    }

    pub fn tool_settings(&self) -> &ToolSettings {
        &self.tool_settings
    }

    pub fn tool_settings_mut(&mut self) -> &mut ToolSettings {
        &mut self.tool_settings
    }

    pub fn is_drawing(&self) -> bool {
        self.is_drawing
    }

    pub fn set_drawing(&mut self, drawing: bool) {
        self.is_drawing = drawing;
    }

    pub fn is_processing(&self) -> bool {
        self.is_processing
    }

    /// UI-driven override of the assist-in-flight flag
    pub fn set_processing(&mut self, processing: bool) {
        self.is_processing = processing;
    }

    pub fn ai_preview(&self) -> Option<&Snapshot> {
        self.ai_preview.as_ref()
    }

    pub fn set_ai_preview(&mut self, preview: Option<Snapshot>) {
        self.ai_preview = preview;
    }

    pub fn select_layer(&mut self, id: LayerId) -> Result<(), SkaitchError> {
        self.project_mut()?.select_layer(id);
        Ok(())
    }

    pub fn add_layer(&mut self, name: &str) -> Result<LayerId, SkaitchError> {
        Ok(self.project_mut()?.add_layer(name))
    }

    pub fn remove_layer(&mut self, id: LayerId) -> Result<(), SkaitchError> {
        self.project_mut()?.remove_layer(id);
        Ok(())
    }

    /// Applies a partial layer update, refusing content mutations on locked
    /// layers. Toggling visibility or the lock flag itself is always allowed.
    pub fn update_layer(&mut self, id: LayerId, patch: LayerPatch) -> Result<(), SkaitchError> {
        let project = self.project_mut()?;
        if let Some(layer) = project.layer(id) {
            if layer.locked && patch.touches_content() {
                return Err(SkaitchError::LayerLocked(layer.name.clone()));
            }
        }
        project.update_layer(id, patch);
        Ok(())
    }

    /// Moves a layer in the paint order; allowed even for locked layers
    pub fn reorder_layer(&mut self, id: LayerId, new_position: usize) -> Result<(), SkaitchError> {
        self.project_mut()?.reorder_layer(id, new_position);
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        self.project.as_ref().is_some_and(|p| p.history.can_undo())
    }

    pub fn can_redo(&self) -> bool {
        self.project.as_ref().is_some_and(|p| p.history.can_redo())
    }

    /// Appends an edit to project history
    pub fn record(&mut self, entry: HistoryEntry) -> Result<(), SkaitchError> {
        self.project_mut()?.record(entry);
        Ok(())
    }

    /// Rewinds one history entry, restoring its "before" snapshot into the
    /// surface. Returns whether anything was undone.
    pub fn undo(&mut self, surface: &mut dyn CanvasSurface) -> bool {
        let Some(project) = self.project.as_mut() else {
            return false;
        };
        if project.history.undo(surface).is_some() {
            project.touch();
            true
        } else {
            false
        }
    }

    /// Re-applies one rewound history entry, restoring its "after" snapshot
    /// into the surface. Returns whether anything was redone.
    pub fn redo(&mut self, surface: &mut dyn CanvasSurface) -> bool {
        let Some(project) = self.project.as_mut() else {
            return false;
        };
        if project.history.redo(surface).is_some() {
            project.touch();
            true
        } else {
            false
        }
    }

    /// Submits one AI assist request built around the current canvas content.
    ///
    /// At most one request may be in flight: a second call while processing
    /// fails with `AlreadyProcessing` rather than queueing. On success the
    /// result image becomes the pending preview and an `ai-assist` entry is
    /// recorded; on failure nothing in the project changes and the error is
    /// surfaced to the caller without retry.
    pub async fn request_ai_assist(
        &mut self,
        gateway: &dyn AssistGateway,
        operation: AssistKind,
        selection: Option<SelectionArea>,
        prompt: &str,
        parameters: AssistParameters,
        surface: &dyn CanvasSurface,
    ) -> Result<Snapshot, SkaitchError> {
        if self.project.is_none() {
            return Err(SkaitchError::NoProject);
        }
        if !gateway.is_configured() {
            return Err(SkaitchError::NotConfigured);
        }
        if self.is_processing {
            return Err(SkaitchError::AlreadyProcessing);
        }

        self.is_processing = true;
        let before = surface.capture();
        let request = AssistRequest {
            operation,
            canvas: before.clone(),
            selection,
            prompt: prompt.to_string(),
            parameters,
        };

        let outcome = gateway.submit(request).await;
        let response = match outcome {
            Ok(response) => response,
            Err(err) => {
                log::warn!("assist request failed: {err}");
                self.is_processing = false;
                return Err(err);
            }
        };

        let image = match (response.success, response.result_image) {
            (true, Some(image)) => image,
            _ => {
                let reason = response
                    .error
                    .unwrap_or_else(|| "backend returned no result image".to_string());
                log::warn!("assist request failed: {reason}");
                self.is_processing = false;
                return Err(SkaitchError::Gateway(reason));
            }
        };

        let entry = HistoryEntry::new(EntryKind::AiAssist, before, image.clone())
            .with_prompt(prompt)
            .with_description(operation.to_string());
        self.project
            .as_mut()
            .ok_or(SkaitchError::NoProject)?
            .record(entry);

        self.ai_preview = Some(image.clone());
        self.is_processing = false;
        Ok(image)
    }

    /// Writes an accepted AI result into the selected layer, marking it
    /// `ai-generated`, and clears the pending preview and processing flag
    pub fn apply_ai_result(&mut self, image: Snapshot) -> Result<(), SkaitchError> {
        let project = self.project_mut()?;
        let Some(id) = project.selected_layer_id() else {
            return Err(SkaitchError::NoLayerSelected);
        };
        if let Some(layer) = project.layer(id) {
            if layer.locked {
                return Err(SkaitchError::LayerLocked(layer.name.clone()));
            }
        }
        if let Some(layer) = project.layer_mut(id) {
            layer.data = image;
            layer.kind = LayerKind::AiGenerated;
        }
        project.touch();
        self.ai_preview = None;
        self.is_processing = false;
        Ok(())
    }
}
