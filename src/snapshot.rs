use serde::{Deserialize, Serialize};

/// An opaque encoded representation of canvas content at a point in time.
///
/// The payload is produced and consumed by the canvas surface collaborator
/// (base64 image data or surface-specific JSON); this crate stores and moves
/// it without ever parsing it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(String);

impl Snapshot {
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// An empty snapshot, used as the initial content of fresh layers
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Snapshot {
    fn from(encoded: String) -> Self {
        Self(encoded)
    }
}

impl From<&str> for Snapshot {
    fn from(encoded: &str) -> Self {
        Self(encoded.to_string())
    }
}
