use crate::resolve::LaunchKind;
use std::path::PathBuf;

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, LauncherError>;

/// Error type for `fnv-launcher`.
#[derive(thiserror::Error, Debug)]
pub enum LauncherError {
    /// Install directory is missing or not a directory.
    #[error("invalid Fallout: New Vegas install directory: {path}")]
    InvalidInstallDir {
        /// Path that failed validation.
        path: PathBuf,
    },

    /// The custom launch command was requested but none is set.
    #[error("no custom launch command has been set")]
    NotConfigured,

    /// A loader executable expected in the install directory is absent.
    #[error("{name} does not appear to be installed (expected {path})")]
    NotInstalled {
        /// Display name of the loader (e.g. `NVSE`).
        name: &'static str,
        /// Path that was checked.
        path: PathBuf,
    },

    /// Checking a candidate executable failed for a reason other than absence.
    #[error("failed to check {kind} command at {path}: {source}")]
    Probe {
        /// Launch variant being resolved.
        kind: LaunchKind,
        /// Path being checked.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Spawn failed.
    #[error("failed to spawn {program}: {message}")]
    Spawn {
        /// Program that could not be started.
        program: PathBuf,
        /// Human-readable message.
        message: String,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
