use thiserror::Error;

/// Errors surfaced by the project state model and session controller.
///
/// All variants are returned as typed results to the caller; none of them is
/// retried internally. A failed AI assist request is terminal for that request
/// and must be re-issued explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkaitchError {
    /// Canvas dimensions outside the accepted bounds at project creation
    #[error("invalid canvas dimensions {width}x{height}: each side must be within [100, 8192] px")]
    InvalidDimensions { width: u32, height: u32 },

    /// The AI assist gateway has no credentials configured
    #[error("AI service not configured")]
    NotConfigured,

    /// The assist operation name is not one of the supported kinds
    #[error("unsupported assist operation: {0}")]
    UnsupportedOperation(String),

    /// An AI assist request is already in flight for this session
    #[error("an AI assist operation is already processing")]
    AlreadyProcessing,

    /// A command that needs a selected layer was issued without one
    #[error("no layer selected")]
    NoLayerSelected,

    /// A content mutation was issued against a locked layer
    #[error("layer '{0}' is locked")]
    LayerLocked(String),

    /// A session command was issued before any project was created or loaded
    #[error("no project is open")]
    NoProject,

    /// The gateway accepted the request but failed to produce a result
    #[error("AI assist failed: {0}")]
    Gateway(String),
}
