#![doc = r#"
`fnv-launcher` decides how to start Fallout: New Vegas and starts it.

Core capabilities:
- Resolve the plain, NVSE, FNV4Gb and custom launch commands for an install
- Offer the available commands as an ordered list of options
- Pick the default command (custom, then NVSE, then the plain game)
- Spawn the chosen command, refusing unset or uninstalled variants

Resolution never caches: every call re-checks the install directory.
"#]

mod error;
mod install;
mod launch;
mod platform;
mod resolve;
mod settings;

pub use crate::error::{LauncherError, Result};
pub use crate::install::{detect_install_candidates, detect_install_path, GameInstall, GameProfile};
pub use crate::launch::{
    CommandSpec, GameLauncher, LaunchOutcome, ProcessLauncher, SystemLauncher,
};
pub use crate::resolve::{
    CandidateCommand, DefaultAction, LaunchKind, LaunchOption, LaunchResolver,
};
pub use crate::settings::{CustomCommand, MemorySettings, SettingsStore};
