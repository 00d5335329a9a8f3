use crate::install::{GameInstall, GameProfile};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Return install candidates for `profile` (best-effort), ordered by likelihood.
///
/// This uses:
/// - `FNV_DIR` env override (if set and valid)
/// - OS-specific default Steam library locations
///
/// A directory qualifies when it holds one of the game executables.
pub fn detect_install_candidates(profile: &GameProfile) -> Vec<GameInstall> {
    let mut out: Vec<GameInstall> = Vec::new();
    let mut seen: BTreeSet<PathBuf> = BTreeSet::new();

    let mut consider = |dir: PathBuf| {
        let Ok(install) = GameInstall::with_profile(dir, *profile) else {
            return;
        };
        if install.has_game_executable() && seen.insert(install.game_dir().to_path_buf()) {
            tracing::debug!(dir = %install.game_dir().display(), "found install candidate");
            out.push(install);
        }
    };

    if let Some(p) = std::env::var_os("FNV_DIR").map(PathBuf::from) {
        consider(p);
    }

    for root in default_steam_roots() {
        consider(root.join("steamapps").join("common").join(profile.steam_dir_name));
    }

    out
}

/// Return the single most likely install (best-effort).
pub fn detect_install_path(profile: &GameProfile) -> Option<GameInstall> {
    detect_install_candidates(profile).into_iter().next()
}

#[cfg(target_os = "windows")]
fn default_steam_roots() -> Vec<PathBuf> {
    vec![
        PathBuf::from(r"C:\Program Files (x86)\Steam"),
        PathBuf::from(r"C:\Program Files\Steam"),
    ]
}

#[cfg(not(target_os = "windows"))]
fn default_steam_roots() -> Vec<PathBuf> {
    let Some(home) = std::env::var_os("HOME").map(PathBuf::from) else {
        return Vec::new();
    };
    vec![
        home.join(".steam/steam"),
        home.join(".steam/root"),
        home.join(".local/share/Steam"),
        home.join(".var/app/com.valvesoftware.Steam/.local/share/Steam"),
    ]
}
