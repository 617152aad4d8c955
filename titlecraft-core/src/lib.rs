pub mod color;
pub mod config;
pub mod effect;
pub mod error;
pub mod history;
pub mod preset;

// Re-export primary types for convenience.
pub use color::{rainbow_color, HexColor};
pub use config::{ConfigPatch, TitleConfig};
pub use effect::{
    compute_character_shadow, compute_character_transform, compute_visuals, CharacterTransform,
    CharacterVisual, LayerColor, ShadowKind, ShadowLayer,
};
pub use error::CoreError;
pub use history::{History, MAX_HISTORY};
pub use preset::{builtin_presets, find_preset, random_patch, Preset, RANDOM_TEXTS};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
