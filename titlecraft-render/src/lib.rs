pub mod css;
pub mod error;
pub mod export;
pub mod projection;

pub use css::{format_shadow_layer, format_text_shadow, format_transform};
pub use error::RenderError;
pub use export::{build_html, build_html_for, export_html};
pub use projection::{float_offset, project, Projection, PERSPECTIVE_PX};

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
