use skaitch_core::history::{EntryKind, HistoryEntry, HistoryLog};
use skaitch_core::project::Project;
use skaitch_core::snapshot::Snapshot;
use skaitch_core::surface::{CanvasSurface, MemorySurface};

fn entry(kind: EntryKind, before: &str, after: &str) -> HistoryEntry {
    HistoryEntry::new(kind, Snapshot::from(before), Snapshot::from(after))
}

#[test]
fn append_moves_cursor_to_tail_and_clears_redo() {
    let mut log = HistoryLog::new();
    for i in 0..4 {
        log.append(entry(EntryKind::Draw, "b", "a"));
        assert_eq!(log.cursor(), Some(i));
        assert_eq!(log.len(), i + 1);
        assert!(log.can_undo());
        assert!(!log.can_redo());
    }
}

#[test]
fn undo_on_empty_log_is_a_noop() {
    let mut log = HistoryLog::new();
    let mut surface = MemorySurface::new();
    assert!(!log.can_undo());
    assert!(log.undo(&mut surface).is_none());
    assert!(surface.loaded().is_empty());
}

#[test]
fn undo_restores_the_before_snapshot() {
    let mut log = HistoryLog::new();
    let mut surface = MemorySurface::with_content(Snapshot::from("s1"));
    log.append(entry(EntryKind::Draw, "s0", "s1"));

    let undone = log.undo(&mut surface).unwrap();
    assert_eq!(undone.before.as_str(), "s0");
    assert_eq!(surface.capture().as_str(), "s0");
    assert_eq!(log.cursor(), None);
    assert!(!log.can_undo());
    assert!(log.can_redo());
}

#[test]
fn redo_restores_the_after_snapshot() {
    let mut log = HistoryLog::new();
    let mut surface = MemorySurface::new();
    log.append(entry(EntryKind::Draw, "s0", "s1"));
    log.append(entry(EntryKind::Erase, "s1", "s2"));

    log.undo(&mut surface);
    log.undo(&mut surface);
    assert_eq!(surface.capture().as_str(), "s0");

    let redone = log.redo(&mut surface).unwrap();
    assert_eq!(redone.after.as_str(), "s1");
    assert_eq!(surface.capture().as_str(), "s1");
    assert_eq!(log.cursor(), Some(0));
}

#[test]
fn undo_then_redo_round_trips_cursor_and_content() {
    let mut log = HistoryLog::new();
    let mut surface = MemorySurface::with_content(Snapshot::from("s3"));
    log.append(entry(EntryKind::Draw, "s0", "s1"));
    log.append(entry(EntryKind::Draw, "s1", "s2"));
    log.append(entry(EntryKind::Draw, "s2", "s3"));

    let cursor_before = log.cursor();
    log.undo(&mut surface);
    log.redo(&mut surface);
    assert_eq!(log.cursor(), cursor_before);
    assert_eq!(surface.capture().as_str(), "s3");

    // nothing further to redo
    assert!(log.redo(&mut surface).is_none());
}

#[test]
fn append_after_rewind_discards_the_stale_branch() {
    let mut log = HistoryLog::new();
    let mut surface = MemorySurface::new();
    log.append(entry(EntryKind::Draw, "s0", "s1"));
    log.append(entry(EntryKind::Draw, "s1", "s2"));
    log.append(entry(EntryKind::Draw, "s2", "s3"));

    log.undo(&mut surface);
    log.undo(&mut surface);
    assert_eq!(log.cursor(), Some(0));
    assert!(log.can_undo());
    assert!(log.can_redo());

    log.append(entry(EntryKind::Erase, "s1", "s4"));
    assert_eq!(log.len(), 2);
    assert_eq!(log.cursor(), Some(1));
    assert!(!log.can_redo());
    assert_eq!(log.entries()[0].after.as_str(), "s1");
    assert_eq!(log.entries()[1].after.as_str(), "s4");
}

#[test]
fn cursor_resets_to_tail_after_load() {
    let mut log = HistoryLog::new();
    log.append(entry(EntryKind::Draw, "s0", "s1"));
    log.append(entry(EntryKind::Draw, "s1", "s2"));

    let json = serde_json::to_string(&log).unwrap();
    let mut restored: HistoryLog = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.len(), 2);
    assert_eq!(restored.cursor(), None);

    restored.reset_cursor_to_tail();
    assert_eq!(restored.cursor(), Some(1));
    assert!(restored.can_undo());
    assert!(!restored.can_redo());
}

#[test]
fn ai_assist_entries_bump_the_counter() {
    let mut project = Project::new(512, 512, "count").unwrap();
    let kinds = [
        EntryKind::Draw,
        EntryKind::AiAssist,
        EntryKind::Erase,
        EntryKind::AiAssist,
        EntryKind::LayerChange,
        EntryKind::Transform,
        EntryKind::AiAssist,
    ];
    for kind in kinds {
        project.record(entry(kind, "b", "a"));
    }
    assert_eq!(project.metadata.ai_assists_count, 3);
    assert_eq!(project.history.len(), kinds.len());
}

#[test]
fn recording_touches_the_modified_timestamp() {
    let mut project = Project::new(512, 512, "touch").unwrap();
    let modified = project.metadata.modified;
    project.record(entry(EntryKind::Draw, "b", "a"));
    assert!(project.metadata.modified >= modified);
    assert!(project.history.can_undo());
}

#[test]
fn history_entry_serializes_with_wire_field_names() {
    let e = entry(EntryKind::AiAssist, "b", "a")
        .with_prompt("a dragon")
        .with_description("SKETCH_TO_ART");
    let json: serde_json::Value = serde_json::to_value(&e).unwrap();
    assert_eq!(json["type"], "ai-assist");
    assert_eq!(json["aiPrompt"], "a dragon");
    assert_eq!(json["before"], "b");
    assert_eq!(json["after"], "a");
    assert!(json.get("timestamp").is_some());

    let plain = entry(EntryKind::LayerChange, "b", "a");
    let json: serde_json::Value = serde_json::to_value(&plain).unwrap();
    assert_eq!(json["type"], "layer-change");
    assert!(json.get("aiPrompt").is_none());
    assert!(json.get("description").is_none());
}
