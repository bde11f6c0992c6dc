// src/error.rs
use thiserror::Error;
use toyframe_style::StyleParseError;

/// Errors raised while loading frame configuration or building frames from it.
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Style error: {0}")]
    Style(#[from] StyleParseError),

    #[error("No frame style named '{0}'")]
    UnknownStyle(String),

    #[error("Frame style '{0}' does not define a space")]
    MissingSpace(String),
}
