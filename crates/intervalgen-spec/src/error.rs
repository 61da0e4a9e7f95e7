//! Error types for plugin discovery and specification loading.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the three independent dimensions of specification selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// The target programming language.
    Language,
    /// The unit-test library used by the generated code.
    TestLibrary,
    /// The interval-arithmetic library under test.
    ArithLibrary,
}

impl Axis {
    /// Returns the axis as a human-readable string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Language => "language",
            Axis::TestLibrary => "test library",
            Axis::ArithLibrary => "arithmetic library",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors raised while resolving plugins against the plugin tree.
///
/// All variants describe local data-integrity problems with the tree; none
/// are transient or retryable, and none are recovered internally.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// A path expected to be a directory does not exist or is not one.
    #[error("not a directory: {}", .path.display())]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// A language, test-library, or arithmetic-library plugin directory is absent.
    #[error("{axis} plugin '{plugin}' has no directory at {}", .path.display())]
    PluginDirectoryMissing {
        /// Which selection axis the missing plugin belongs to.
        axis: Axis,
        /// The plugin identifier that failed to resolve.
        plugin: String,
        /// The directory that was expected to exist.
        path: PathBuf,
    },

    /// The required configuration file is absent inside an existing plugin directory.
    #[error("{axis} plugin '{plugin}' is missing its specification file {}", .path.display())]
    SpecificationFileMissing {
        /// Which selection axis the plugin belongs to.
        axis: Axis,
        /// The plugin identifier whose file is missing.
        plugin: String,
        /// The file that was expected to exist.
        path: PathBuf,
    },

    /// The configuration file exists but does not parse as a key-value document.
    #[error("malformed specification {}: {source}", .path.display())]
    MalformedSpecification {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// A file-system read failed after the path passed its existence check.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The path being read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
