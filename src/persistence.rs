use crate::project::{Project, SKAITCH_VERSION};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while saving or loading a project document
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to serialize project: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to write project: {0}")]
    Write(#[from] std::io::Error),

    #[error("failed to read project file: {0}")]
    Read(String),
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Writes the project document as pretty-printed JSON.
///
/// Persistence is an explicit lifecycle call, not a side effect of mutation;
/// the ephemeral session flags and the history cursor are not written.
pub fn save_project(project: &Project, path: &Path) -> PersistenceResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(project)?;
    fs::write(path, json)?;
    log::info!("saved project '{}' to {}", project.project_name, path.display());
    Ok(())
}

/// Reads a project document back. The returned project still carries its
/// load-time defaults for the skipped fields; `Session::load_project` (or
/// `Project::restore_after_load`) re-establishes cursor and selection.
pub fn load_project(path: &Path) -> PersistenceResult<Project> {
    let json = fs::read_to_string(path).map_err(|e| PersistenceError::Read(e.to_string()))?;
    let project: Project = serde_json::from_str(&json)?;

    if project.metadata.skaitch_version != SKAITCH_VERSION {
        log::warn!(
            "project '{}' was written with version {}, current is {}",
            project.project_name,
            project.metadata.skaitch_version,
            SKAITCH_VERSION
        );
    }

    Ok(project)
}
