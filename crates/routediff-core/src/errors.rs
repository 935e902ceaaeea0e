//! Error types for routediff-core.
//!
//! Only the extractor can fail; the comparator is total over its inputs.
//! Both variants are terminal for the extraction call: nothing in this
//! crate retries, and transient I/O problems are the caller's concern.

use std::path::PathBuf;

use thiserror::Error;

pub type ExtractResult<T> = Result<T, ExtractError>;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The directory is missing the client manifest or the server pages
    /// directory, so it does not match the one supported build layout.
    #[error("not a recognized nuxt2 build directory: {}", dir.display())]
    NotRecognizedBuildFormat { dir: PathBuf },

    /// A specific file or directory could not be read. Covers permissions,
    /// files disappearing mid-scan, and non-UTF-8 page content.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractError {
    pub fn not_recognized(dir: impl Into<PathBuf>) -> Self {
        Self::NotRecognizedBuildFormat { dir: dir.into() }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Path the error is about, for diagnostics.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotRecognizedBuildFormat { dir } => dir,
            Self::Io { path, .. } => path,
        }
    }
}
