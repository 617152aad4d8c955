use thiserror::Error;

/// Errors originating from the core configuration model.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid hex color: {0:?} (expected #RGB or #RRGGBB)")]
    InvalidColor(String),

    #[error("unknown preset: {0:?}")]
    UnknownPreset(String),
}
