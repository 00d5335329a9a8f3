use crate::error::{LauncherError, Result};
use std::path::{Path, PathBuf};

mod detect;
mod profile;

pub use detect::{detect_install_candidates, detect_install_path};
pub use profile::GameProfile;

/// A game installation directory together with the profile describing its files.
#[derive(Debug, Clone)]
pub struct GameInstall {
    game_dir: PathBuf,
    profile: GameProfile,
}

impl GameInstall {
    /// Validate a Fallout: New Vegas install directory.
    pub fn new(game_dir: impl Into<PathBuf>) -> Result<Self> {
        Self::with_profile(game_dir, GameProfile::FALLOUT_NV)
    }

    /// Validate an install directory for an arbitrary profile.
    ///
    /// Relative paths are made absolute against the current directory. The
    /// game executables are not required to exist here; absence is reported
    /// when a launch is attempted.
    pub fn with_profile(game_dir: impl Into<PathBuf>, profile: GameProfile) -> Result<Self> {
        let game_dir = game_dir.into();
        if !game_dir.is_dir() {
            return Err(LauncherError::InvalidInstallDir { path: game_dir });
        }
        let game_dir = std::path::absolute(&game_dir)?;

        Ok(Self { game_dir, profile })
    }

    /// Game directory.
    pub fn game_dir(&self) -> &Path {
        &self.game_dir
    }

    /// Profile (file names and labels).
    pub fn profile(&self) -> &GameProfile {
        &self.profile
    }

    /// True if either game executable is present.
    pub fn has_game_executable(&self) -> bool {
        [self.profile.primary_exe, self.profile.alternate_exe]
            .iter()
            .any(|exe| self.game_dir.join(exe).is_file())
    }
}
