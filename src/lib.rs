#![warn(clippy::all, rust_2018_idioms)]

pub mod assist;
pub mod error;
pub mod history;
pub mod id;
pub mod layer;
pub mod persistence;
pub mod project;
pub mod session;
pub mod snapshot;
pub mod surface;
pub mod tool;
pub mod util;

pub use assist::{
    AssistGateway, AssistKind, AssistMetadata, AssistParameters, AssistRequest, AssistResponse,
    DetailLevel, GatewayConfig, HttpGateway, SelectionArea,
};
pub use error::SkaitchError;
pub use history::{EntryKind, HistoryEntry, HistoryLog};
pub use id::{HistoryEntryId, LayerId, ProjectId};
pub use layer::{BlendMode, Layer, LayerKind, LayerPatch};
pub use persistence::{PersistenceError, PersistenceResult};
pub use project::{MAX_CANVAS_SIZE, MIN_CANVAS_SIZE, Project, ProjectMetadata, SKAITCH_VERSION};
pub use session::Session;
pub use snapshot::Snapshot;
pub use surface::{CanvasSurface, MemorySurface};
pub use tool::{ToolSettings, ToolType};
