use std::path::PathBuf;

use thiserror::Error;

/// Errors originating from the export pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write export to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("export path has no file name: {}", .0.display())]
    InvalidPath(PathBuf),
}
