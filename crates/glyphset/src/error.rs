//! Error types for the icon-set registry.

use std::io;
use std::path::PathBuf;

/// Errors raised while registering icon sets or loading registry
/// configuration.
///
/// These represent caller mistakes rather than transient conditions; the
/// intended reaction is to abort startup and fix the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// Neither a path nor a disk was given for the set.
    #[error("no source defined for icon set '{set}': provide either a path or a disk")]
    NoSourceDefined { set: String },

    /// The set options lack a prefix.
    #[error("no prefix defined for icon set '{set}'")]
    NoPrefixDefined { set: String },

    /// Another registered set already claims the prefix.
    #[error("prefix '{prefix}' of icon set '{set}' collides with icon set '{existing}'")]
    PrefixCollision {
        set: String,
        existing: String,
        prefix: String,
    },

    /// The configured path does not exist on the filesystem.
    #[error("path '{path}' for icon set '{set}' was not found")]
    PathNotFound { set: String, path: PathBuf },

    /// Failed to read a configuration file.
    #[error("failed to read registry configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to parse a configuration file.
    #[error("failed to parse registry configuration '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigurationError {
    /// Create a missing-source error.
    pub fn no_source(set: impl Into<String>) -> Self {
        Self::NoSourceDefined { set: set.into() }
    }

    /// Create a missing-prefix error.
    pub fn no_prefix(set: impl Into<String>) -> Self {
        Self::NoPrefixDefined { set: set.into() }
    }

    /// Create a prefix-collision error.
    pub fn prefix_collision(
        set: impl Into<String>,
        existing: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        Self::PrefixCollision {
            set: set.into(),
            existing: existing.into(),
            prefix: prefix.into(),
        }
    }

    /// Create a missing-path error.
    pub fn path_not_found(set: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::PathNotFound {
            set: set.into(),
            path: path.into(),
        }
    }

    /// Create a configuration I/O error.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration parse error.
    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised while resolving a qualified icon name to SVG content.
#[derive(Debug, thiserror::Error)]
pub enum SvgError {
    /// The icon could not be located: the set is unknown, the disk is
    /// unknown, or the underlying file is missing. Always carries the set
    /// and bare name that failed to resolve.
    #[error("unable to locate icon '{name}' in icon set '{set}'")]
    NotFound { set: String, name: String },

    /// An unexpected filesystem error, passed through untranslated.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl SvgError {
    /// Create a not-found error.
    pub fn not_found(set: impl Into<String>, name: impl Into<String>) -> Self {
        Self::NotFound {
            set: set.into(),
            name: name.into(),
        }
    }
}
