use terrace_map::CatalogError;

use std::fmt;

/// Failure to load a config or catalog file.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Ron(ron::error::SpannedError),
    Catalog(CatalogError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Ron(e) => write!(f, "malformed RON: {}", e),
            Self::Catalog(e) => write!(f, "invalid catalog: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Ron(e) => Some(e),
            Self::Catalog(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ron::error::SpannedError> for LoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        Self::Ron(e)
    }
}

impl From<CatalogError> for LoadError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e)
    }
}
