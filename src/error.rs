use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving identifiers or rendering symbols.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocError {
    /// The identifier does not name a loadable symbol, or its dump failed to load.
    #[error("{message}")]
    Resolution { message: String },

    /// The identifier looks like a filesystem path but nothing exists there.
    #[error("file '{}' does not exist", path.display())]
    PathNotFound { path: PathBuf },

    /// Nesting went past the renderer's depth limit (usually a cyclic hierarchy).
    #[error("symbol nesting exceeds the depth limit of {limit}")]
    DepthExceeded { limit: usize },
}

impl DocError {
    pub fn not_found(identifier: &str) -> Self {
        DocError::Resolution {
            message: format!("no documentation found for '{}'", identifier),
        }
    }

    pub fn load_failed(module: &str, cause: impl std::fmt::Display) -> Self {
        DocError::Resolution {
            message: format!("problem in {} - {}", module, cause),
        }
    }
}

pub type Result<T> = std::result::Result<T, DocError>;
