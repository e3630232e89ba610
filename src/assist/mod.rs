//! AI assist gateway contract.
//!
//! The gateway is an opaque asynchronous collaborator: the core builds a
//! request around the current canvas snapshot, awaits a result image, and
//! records the outcome in project history. Image generation itself lives
//! behind the [`AssistGateway`] trait.

mod http;

pub use http::{GatewayConfig, HttpGateway};

use crate::error::SkaitchError;
use crate::snapshot::Snapshot;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The supported assist operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssistKind {
    SketchToArt,
    Inpaint,
    PerfectShape,
    StyleTransfer,
    EnhanceDetail,
    StraightenLine,
    ColorSuggestion,
    CleanSketch,
}

impl AssistKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssistKind::SketchToArt => "SKETCH_TO_ART",
            AssistKind::Inpaint => "INPAINT",
            AssistKind::PerfectShape => "PERFECT_SHAPE",
            AssistKind::StyleTransfer => "STYLE_TRANSFER",
            AssistKind::EnhanceDetail => "ENHANCE_DETAIL",
            AssistKind::StraightenLine => "STRAIGHTEN_LINE",
            AssistKind::ColorSuggestion => "COLOR_SUGGESTION",
            AssistKind::CleanSketch => "CLEAN_SKETCH",
        }
    }
}

impl fmt::Display for AssistKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssistKind {
    type Err = SkaitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SKETCH_TO_ART" => Ok(AssistKind::SketchToArt),
            "INPAINT" => Ok(AssistKind::Inpaint),
            "PERFECT_SHAPE" => Ok(AssistKind::PerfectShape),
            "STYLE_TRANSFER" => Ok(AssistKind::StyleTransfer),
            "ENHANCE_DETAIL" => Ok(AssistKind::EnhanceDetail),
            "STRAIGHTEN_LINE" => Ok(AssistKind::StraightenLine),
            "COLOR_SUGGESTION" => Ok(AssistKind::ColorSuggestion),
            "CLEAN_SKETCH" => Ok(AssistKind::CleanSketch),
            other => Err(SkaitchError::UnsupportedOperation(other.to_string())),
        }
    }
}

/// Rectangular target region for region-scoped operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionArea {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Optional encoded mask image
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mask: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    Low,
    Medium,
    High,
}

/// Knobs forwarded verbatim to the generation backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssistParameters {
    /// Effect strength, 0-100
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub strength: Option<u8>,
    #[serde(
        rename = "preserveColors",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub preserve_colors: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub style: Option<String>,
    #[serde(
        rename = "detailLevel",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub detail_level: Option<DetailLevel>,
    #[serde(
        rename = "colorPalette",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub color_palette: Option<Vec<String>>,
}

/// One assist request as sent over the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistRequest {
    #[serde(rename = "operationType")]
    pub operation: AssistKind,
    #[serde(rename = "canvasSnapshot")]
    pub canvas: Snapshot,
    #[serde(
        rename = "selectionRegion",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub selection: Option<SelectionArea>,
    pub prompt: String,
    pub parameters: AssistParameters,
}

/// Backend-reported details about a completed generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistMetadata {
    pub model: String,
    #[serde(rename = "processingTime")]
    pub processing_time: f64,
    pub prompt: String,
}

/// The gateway's answer to an assist request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistResponse {
    pub success: bool,
    #[serde(rename = "resultImage", skip_serializing_if = "Option::is_none", default)]
    pub result_image: Option<Snapshot>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub metadata: Option<AssistMetadata>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

/// The external AI assist collaborator.
///
/// Implementations must not retry on their own; every failure is terminal for
/// the request that triggered it.
#[async_trait]
pub trait AssistGateway: Send + Sync {
    /// Whether the gateway has credentials to reach its backend
    fn is_configured(&self) -> bool;

    /// Submits one assist request and awaits the result
    async fn submit(&self, request: AssistRequest) -> Result<AssistResponse, SkaitchError>;
}
