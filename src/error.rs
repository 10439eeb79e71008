use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building the function index.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("can only process output of Doxygen 1.5.4, sorry ({} has no version marker)", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("marker `{marker}` not found in {}", .path.display())]
    MissingMarker { marker: &'static str, path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid markup pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("invalid template: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("failed to render template: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("invalid factory table: {0}")]
    Factories(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IndexError>;
