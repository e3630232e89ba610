use crate::id::HistoryEntryId;
use crate::snapshot::Snapshot;
use crate::surface::CanvasSurface;
use crate::util::time;
use serde::{Deserialize, Serialize};

/// The kind of edit a history entry records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    Draw,
    Erase,
    Transform,
    LayerChange,
    AiAssist,
}

/// A single recorded edit. Immutable once appended to the log.
///
/// Entries carry canvas-wide snapshots rather than per-layer diffs; undo and
/// redo restore whole-canvas content through the surface collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: HistoryEntryId,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Milliseconds since the UNIX epoch
    pub timestamp: u64,
    /// Canvas content before the edit
    pub before: Snapshot,
    /// Canvas content after the edit
    pub after: Snapshot,
    /// Prompt text, meaningful only for `ai-assist` entries
    #[serde(rename = "aiPrompt", skip_serializing_if = "Option::is_none", default)]
    pub ai_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
}

impl HistoryEntry {
    pub fn new(kind: EntryKind, before: Snapshot, after: Snapshot) -> Self {
        Self {
            id: HistoryEntryId::generate(),
            kind,
            timestamp: time::timestamp_ms(),
            before,
            after,
            ai_prompt: None,
            description: None,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.ai_prompt = Some(prompt.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Append-only log of recorded edits plus an undo/redo cursor.
///
/// The cursor names the last applied entry; `None` means nothing is applied.
/// Appending while rewound discards every entry past the cursor first, so the
/// log never holds a stale redo branch. The cursor itself is ephemeral and not
/// part of the persisted document; loading a project resets it to the tail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    #[serde(skip)]
    cursor: Option<usize>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Index of the last applied entry, if any
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn can_redo(&self) -> bool {
        match self.cursor {
            Some(i) => i + 1 < self.entries.len(),
            None => !self.entries.is_empty(),
        }
    }

    /// Points the cursor at the last entry, as when a saved project is loaded
    pub fn reset_cursor_to_tail(&mut self) {
        self.cursor = self.entries.len().checked_sub(1);
    }

    /// Appends an entry at the tail and moves the cursor onto it.
    ///
    /// If the cursor was rewound, the entries past it are discarded before the
    /// insert; `can_redo` is false afterwards.
    pub fn append(&mut self, entry: HistoryEntry) {
        let keep = match self.cursor {
            Some(i) => i + 1,
            None => 0,
        };
        if keep < self.entries.len() {
            log::debug!(
                "discarding {} rewound history entries before append",
                self.entries.len() - keep
            );
            self.entries.truncate(keep);
        }
        self.entries.push(entry);
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Un-applies the entry at the cursor by loading its "before" snapshot
    /// into the surface. Returns the entry, or `None` when there is nothing
    /// to undo.
    pub fn undo(&mut self, surface: &mut dyn CanvasSurface) -> Option<&HistoryEntry> {
        let index = self.cursor?;
        let entry = &self.entries[index];
        surface.load_snapshot(&entry.before);
        self.cursor = index.checked_sub(1);
        Some(entry)
    }

    /// Re-applies the entry past the cursor by loading its "after" snapshot
    /// into the surface. Returns the entry, or `None` when there is nothing
    /// to redo.
    pub fn redo(&mut self, surface: &mut dyn CanvasSurface) -> Option<&HistoryEntry> {
        let next = match self.cursor {
            Some(i) => i + 1,
            None => 0,
        };
        if next >= self.entries.len() {
            return None;
        }
        let entry = &self.entries[next];
        surface.load_snapshot(&entry.after);
        self.cursor = Some(next);
        Some(entry)
    }
}
