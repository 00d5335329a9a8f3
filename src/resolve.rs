//! Command resolution and default selection.
//!
//! Nothing here is cached: every call re-reads the filesystem, so options and
//! the default follow files being installed or removed between calls.

use crate::error::{LauncherError, Result};
use crate::install::{GameInstall, GameProfile};
use crate::platform::path::{expand_env_vars, is_rooted, strip_invalid_path_chars};
use crate::settings::CustomCommand;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A launch variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LaunchKind {
    /// The game executable itself.
    Plain,
    /// The script extender loader.
    Extender,
    /// The large-address-aware patch launcher.
    Patch,
    /// A user-configured command.
    Custom,
}

impl LaunchKind {
    /// All variants, in the order options are offered.
    pub const ALL: [LaunchKind; 4] = [
        LaunchKind::Plain,
        LaunchKind::Extender,
        LaunchKind::Patch,
        LaunchKind::Custom,
    ];

    /// Stable identifier.
    pub fn key(self) -> &'static str {
        match self {
            LaunchKind::Plain => "plain",
            LaunchKind::Extender => "extender",
            LaunchKind::Patch => "patch",
            LaunchKind::Custom => "custom",
        }
    }

    /// Parse a stable identifier back into a variant.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }
}

impl fmt::Display for LaunchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A resolved launch variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateCommand {
    /// Which variant this is.
    pub kind: LaunchKind,
    /// Resolved executable. `None` only for an unconfigured custom command.
    pub path: Option<PathBuf>,
    /// True iff `path` was a file on disk when resolved.
    pub exists: bool,
}

/// A user-selectable launch entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOption {
    /// Resolved command behind this entry.
    pub command: CandidateCommand,
    /// Short label, e.g. `Launch NVSE`.
    pub label: String,
    /// One-line description.
    pub description: String,
}

impl LaunchOption {
    /// Stable identifier of the variant.
    pub fn key(&self) -> &'static str {
        self.command.kind.key()
    }

    /// Executable to take an icon from, when it exists.
    pub fn icon_source(&self) -> Option<&Path> {
        self.command
            .path
            .as_deref()
            .filter(|_| self.command.exists)
    }
}

/// Label and description of the default launch entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultAction {
    /// Short label.
    pub label: String,
    /// One-line description.
    pub description: String,
}

/// Resolves candidate commands for one installation.
#[derive(Debug, Clone)]
pub struct LaunchResolver {
    install: GameInstall,
}

impl LaunchResolver {
    /// Create a resolver for an install.
    pub fn new(install: GameInstall) -> Self {
        Self { install }
    }

    /// The install this resolver reads.
    pub fn install(&self) -> &GameInstall {
        &self.install
    }

    fn profile(&self) -> &GameProfile {
        self.install.profile()
    }

    /// Primary game executable, or the alternate one when the primary is absent.
    ///
    /// The alternate path is returned even if it does not exist either.
    pub fn resolve_plain(&self) -> Result<PathBuf> {
        let dir = self.install.game_dir();
        let primary = dir.join(self.profile().primary_exe);
        if file_exists(LaunchKind::Plain, &primary)? {
            return Ok(primary);
        }
        Ok(dir.join(self.profile().alternate_exe))
    }

    /// Script extender loader path (not checked).
    pub fn resolve_extender(&self) -> PathBuf {
        self.install.game_dir().join(self.profile().extender_exe)
    }

    /// Patch launcher path (not checked).
    pub fn resolve_patch(&self) -> PathBuf {
        self.install.game_dir().join(self.profile().patch_exe)
    }

    /// Custom command path, or `None` when no command is set.
    ///
    /// `%VAR%` references are expanded and invalid path characters removed.
    /// A command that is not rooted is taken relative to the install directory.
    pub fn resolve_custom(&self, custom: &CustomCommand) -> Option<PathBuf> {
        if !custom.is_configured() {
            return None;
        }
        let command = strip_invalid_path_chars(&expand_env_vars(&custom.command));
        if is_rooted(&command) {
            Some(PathBuf::from(command))
        } else {
            Some(self.install.game_dir().join(command))
        }
    }

    /// Resolve one variant and check whether its executable exists.
    pub fn candidate(&self, kind: LaunchKind, custom: &CustomCommand) -> Result<CandidateCommand> {
        let path = match kind {
            LaunchKind::Plain => Some(self.resolve_plain()?),
            LaunchKind::Extender => Some(self.resolve_extender()),
            LaunchKind::Patch => Some(self.resolve_patch()),
            LaunchKind::Custom => self.resolve_custom(custom),
        };
        let exists = match (&path, kind) {
            (None, _) => false,
            // A custom command is only checked for real at launch time.
            (Some(p), LaunchKind::Custom) => file_exists(kind, p).unwrap_or_else(|e| {
                tracing::warn!(path = %p.display(), error = %e, "cannot check custom command");
                false
            }),
            (Some(p), _) => file_exists(kind, p)?,
        };
        tracing::debug!(
            %kind,
            path = ?path.as_deref().map(Path::display),
            exists,
            "resolved launch command"
        );
        Ok(CandidateCommand { kind, path, exists })
    }

    /// Options in offer order: plain, extender, patch, custom.
    ///
    /// Plain and custom are always offered. Extender and patch are offered
    /// only when their executable exists right now.
    pub fn build_launch_options(&self, custom: &CustomCommand) -> Result<Vec<LaunchOption>> {
        let mut options = Vec::with_capacity(LaunchKind::ALL.len());
        for kind in LaunchKind::ALL {
            let command = self.candidate(kind, custom)?;
            let offered = match kind {
                LaunchKind::Plain | LaunchKind::Custom => true,
                LaunchKind::Extender | LaunchKind::Patch => command.exists,
            };
            if offered {
                options.push(self.option(command));
            }
        }
        Ok(options)
    }

    /// Pick the variant the default action runs.
    ///
    /// A configured custom command wins, then the script extender if
    /// installed, then the plain game. The patch launcher is never picked
    /// automatically; it is only available as an explicit option.
    pub fn select_default(&self, custom: &CustomCommand) -> Result<CandidateCommand> {
        if custom.is_configured() {
            return self.candidate(LaunchKind::Custom, custom);
        }
        let extender = self.candidate(LaunchKind::Extender, custom)?;
        if extender.exists {
            return Ok(extender);
        }
        self.candidate(LaunchKind::Plain, custom)
    }

    /// Label and description for the default entry.
    pub fn default_action(&self) -> DefaultAction {
        let name = self.profile().display_name;
        DefaultAction {
            label: format!("Launch {name}"),
            description: format!("Launches {name}."),
        }
    }

    fn option(&self, command: CandidateCommand) -> LaunchOption {
        let p = self.profile();
        let name = p.display_name;
        let (label, description) = match command.kind {
            LaunchKind::Plain => (
                format!("Launch {name}"),
                format!("Launches plain {name}."),
            ),
            LaunchKind::Extender => (
                format!("Launch {}", p.extender_name),
                format!("Launches {name} with {}.", p.extender_name),
            ),
            LaunchKind::Patch => (
                format!("Launch {}", p.patch_name),
                format!("Launches {name} with {}.", p.patch_name),
            ),
            LaunchKind::Custom => (
                format!("Launch Custom {name}"),
                format!("Launches {name} with custom command."),
            ),
        };
        LaunchOption {
            command,
            label,
            description,
        }
    }
}

/// True if `path` is a file. Missing paths are `false`; other OS errors are reported.
fn file_exists(kind: LaunchKind, path: &Path) -> Result<bool> {
    match std::fs::metadata(path) {
        Ok(meta) => Ok(meta.is_file()),
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => Ok(false),
        Err(source) => Err(LauncherError::Probe {
            kind,
            path: path.to_path_buf(),
            source,
        }),
    }
}
