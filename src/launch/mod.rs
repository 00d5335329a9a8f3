use crate::error::{LauncherError, Result};
use crate::install::GameInstall;
use crate::resolve::{CandidateCommand, DefaultAction, LaunchKind, LaunchOption, LaunchResolver};
use crate::settings::{CustomCommand, SettingsStore};
use std::path::PathBuf;

mod args;
mod process;

pub use process::{CommandSpec, ProcessLauncher, SystemLauncher};

/// Success flag plus message, for callers that report launches as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOutcome {
    /// Whether a process was started.
    pub success: bool,
    /// Human-readable result.
    pub message: String,
}

impl LaunchOutcome {
    /// Summarize a launch result.
    pub fn from_result(result: &Result<CommandSpec>) -> Self {
        match result {
            Ok(spec) => Self {
                success: true,
                message: format!("Launched {}", spec.program.display()),
            },
            Err(e) => Self {
                success: false,
                message: e.to_string(),
            },
        }
    }
}

/// Main entry point: resolve options, pick the default, and start the game.
#[derive(Debug, Clone)]
pub struct GameLauncher<S, L = SystemLauncher> {
    resolver: LaunchResolver,
    settings: S,
    launcher: L,
}

impl<S: SettingsStore> GameLauncher<S, SystemLauncher> {
    /// Create a launcher that spawns real processes.
    pub fn new(install: GameInstall, settings: S) -> Self {
        Self {
            resolver: LaunchResolver::new(install),
            settings,
            launcher: SystemLauncher,
        }
    }
}

impl<S: SettingsStore, L: ProcessLauncher> GameLauncher<S, L> {
    /// Replace the process launcher.
    pub fn process_launcher<L2: ProcessLauncher>(self, launcher: L2) -> GameLauncher<S, L2> {
        GameLauncher {
            resolver: self.resolver,
            settings: self.settings,
            launcher,
        }
    }

    /// Access the resolver.
    pub fn resolver(&self) -> &LaunchResolver {
        &self.resolver
    }

    /// Access the settings store.
    pub fn settings(&self) -> &S {
        &self.settings
    }

    /// Access the process launcher.
    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Current custom command for this game.
    pub fn custom_command(&self) -> CustomCommand {
        self.settings
            .custom_command(self.resolver.install().profile().mode_id)
    }

    /// Options to offer, in order: plain, extender, patch, custom.
    pub fn options(&self) -> Result<Vec<LaunchOption>> {
        let custom = self.custom_command();
        let options = self.resolver.build_launch_options(&custom)?;
        for o in &options {
            tracing::debug!(key = o.key(), label = %o.label, available = o.command.exists, "launch option");
        }
        Ok(options)
    }

    /// Label and description of the default entry.
    pub fn default_action(&self) -> DefaultAction {
        self.resolver.default_action()
    }

    /// Build the command for `kind` without spawning it.
    ///
    /// Fails with [`LauncherError::NotConfigured`] for an unset custom command
    /// and [`LauncherError::NotInstalled`] for a missing extender or patch
    /// launcher. The plain command is never refused here.
    pub fn plan(&self, kind: LaunchKind) -> Result<CommandSpec> {
        let custom = self.custom_command();
        let candidate = self.resolver.candidate(kind, &custom)?;
        self.plan_candidate(candidate, &custom)
    }

    /// Start the game using `kind`.
    pub fn launch(&self, kind: LaunchKind) -> Result<CommandSpec> {
        tracing::info!(%kind, "launching {}", self.display_name());
        let spec = self.plan(kind)?;
        self.spawn(spec)
    }

    /// Start the game using the default variant, chosen from current disk and settings state.
    pub fn launch_default(&self) -> Result<CommandSpec> {
        let custom = self.custom_command();
        let candidate = self.resolver.select_default(&custom)?;
        tracing::info!(kind = %candidate.kind, "launching {} (default)", self.display_name());
        let spec = self.plan_candidate(candidate, &custom)?;
        self.spawn(spec)
    }

    fn plan_candidate(
        &self,
        candidate: CandidateCommand,
        custom: &CustomCommand,
    ) -> Result<CommandSpec> {
        let profile = self.resolver.install().profile();
        let program = match candidate.kind {
            LaunchKind::Custom => candidate.path.ok_or_else(|| {
                tracing::error!("no custom launch command has been set");
                LauncherError::NotConfigured
            })?,
            LaunchKind::Extender | LaunchKind::Patch => {
                let name = match candidate.kind {
                    LaunchKind::Extender => profile.extender_name,
                    _ => profile.patch_name,
                };
                let path = candidate.path.unwrap_or_default();
                if !candidate.exists {
                    tracing::error!(path = %path.display(), "{name} does not appear to be installed");
                    return Err(LauncherError::NotInstalled { name, path });
                }
                path
            }
            LaunchKind::Plain => candidate.path.unwrap_or_default(),
        };

        let args = match candidate.kind {
            LaunchKind::Custom => args::split_args(&custom.arguments),
            _ => Vec::new(),
        };

        Ok(CommandSpec {
            program,
            args,
            cwd: Some(self.game_dir()),
        })
    }

    fn spawn(&self, spec: CommandSpec) -> Result<CommandSpec> {
        tracing::info!(command = %spec.program.display(), args = ?spec.args, "starting process");
        self.launcher.launch(&spec)?;
        Ok(spec)
    }

    fn game_dir(&self) -> PathBuf {
        self.resolver.install().game_dir().to_path_buf()
    }

    fn display_name(&self) -> &'static str {
        self.resolver.install().profile().display_name
    }
}
