use crate::snapshot::Snapshot;

/// The external canvas collaborator: accepts drawing output as opaque
/// snapshots and can replace its visible content with one.
///
/// The state core never inspects pixel data; undo and redo go through this
/// seam so that rewinding the history cursor actually restores what the user
/// sees, instead of being index bookkeeping alone.
pub trait CanvasSurface {
    /// Serializes the current visible canvas content
    fn capture(&self) -> Snapshot;

    /// Replaces the visible canvas content with the given snapshot
    fn load_snapshot(&mut self, snapshot: &Snapshot);
}

/// An in-memory surface holding a single snapshot. Stands in for a real
/// rendering surface in tests and headless use.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    current: Snapshot,
    loads: Vec<Snapshot>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(snapshot: Snapshot) -> Self {
        Self {
            current: snapshot,
            loads: Vec::new(),
        }
    }

    pub fn set_content(&mut self, snapshot: Snapshot) {
        self.current = snapshot;
    }

    /// Every snapshot that has been loaded into this surface, oldest first
    pub fn loaded(&self) -> &[Snapshot] {
        &self.loads
    }
}

impl CanvasSurface for MemorySurface {
    fn capture(&self) -> Snapshot {
        self.current.clone()
    }

    fn load_snapshot(&mut self, snapshot: &Snapshot) {
        self.current = snapshot.clone();
        self.loads.push(snapshot.clone());
    }
}
