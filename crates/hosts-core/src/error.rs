//! Error types for hosts-core

use std::fmt;

/// Result type for hosts-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in hosts-core operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A candidate group body has a line that is not `address name...`.
    #[error("syntax error at line {line}: {content:?}")]
    Syntax { line: usize, content: String },

    /// The hosts file has an unmatched or misordered region marker.
    #[error("hosts file format error: {0}")]
    MalformedRegion(RegionFault),
}

/// The way a managed region's markers are inconsistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionFault {
    /// The start marker is present but the end marker is not.
    MissingFooter,
    /// The end marker is present but the start marker is not.
    MissingHeader,
    /// The first end marker comes before the first start marker.
    FooterBeforeHeader,
}

impl fmt::Display for RegionFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionFault::MissingFooter => write!(f, "managed region has no end marker"),
            RegionFault::MissingHeader => write!(f, "managed region has no start marker"),
            RegionFault::FooterBeforeHeader => {
                write!(f, "managed region end marker precedes its start marker")
            }
        }
    }
}

impl Error {
    pub fn syntax(line: usize, content: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            content: content.into(),
        }
    }
}
