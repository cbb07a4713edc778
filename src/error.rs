//! Library error types

use std::path::PathBuf;

use crate::links::ValidationReport;

/// Errors raised while building a catalog or checking its links
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("duplicate catalog title: {0:?}")]
    DuplicateTitle(String),

    #[error("failed to read catalog {path:?}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {path:?}: {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{0}")]
    BrokenLinks(ValidationReport),
}

pub type Result<T> = std::result::Result<T, Error>;
