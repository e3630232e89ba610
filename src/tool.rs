use serde::{Deserialize, Serialize};

/// The drawing tools a session can have active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolType {
    #[default]
    Brush,
    Eraser,
    Shape,
    Select,
    Fill,
    Eyedropper,
    Text,
    AiAssist,
}

/// Stroke settings shared by the drawing tools. The canvas surface
/// collaborator interprets these; the core only carries them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSettings {
    /// Brush size in pixels
    pub size: f32,
    /// Hex color string, e.g. "#000000"
    pub color: String,
    /// Stroke opacity in `[0, 1]`
    pub opacity: f32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            size: 4.0,
            color: "#000000".to_string(),
            opacity: 1.0,
        }
    }
}
