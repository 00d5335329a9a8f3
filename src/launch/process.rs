use crate::error::{LauncherError, Result};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

/// A resolved command, ready to hand to a [`ProcessLauncher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Executable to run.
    pub program: PathBuf,
    /// Arguments passed to the executable.
    pub args: Vec<OsString>,
    /// Working directory for the spawned process.
    pub cwd: Option<PathBuf>,
}

/// Starts processes for resolved commands.
pub trait ProcessLauncher {
    /// Start `spec`. Returns once the process has been spawned.
    fn launch(&self, spec: &CommandSpec) -> Result<()>;
}

/// Spawns real processes without waiting for them.
///
/// Each child is reaped by a background thread when it exits, so a
/// long-running host does not collect zombies.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl ProcessLauncher for SystemLauncher {
    fn launch(&self, spec: &CommandSpec) -> Result<()> {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);
        if let Some(cwd) = &spec.cwd {
            cmd.current_dir(cwd);
        }
        let mut child = cmd.spawn().map_err(|e| LauncherError::Spawn {
            program: spec.program.clone(),
            message: e.to_string(),
        })?;

        let pid = child.id();
        tracing::info!(pid, program = %spec.program.display(), "spawned game process");
        std::thread::spawn(move || match child.wait() {
            Ok(status) => tracing::debug!(pid, %status, "game process exited"),
            Err(e) => tracing::warn!(pid, error = %e, "failed to wait for game process"),
        });
        Ok(())
    }
}

impl<L: ProcessLauncher + ?Sized> ProcessLauncher for &L {
    fn launch(&self, spec: &CommandSpec) -> Result<()> {
        (**self).launch(spec)
    }
}
