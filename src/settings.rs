use std::collections::BTreeMap;

/// A user-supplied command overriding the default launch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomCommand {
    /// Executable, absolute or relative to the install directory. May contain `%VAR%`.
    pub command: String,
    /// Raw argument string passed to the executable.
    pub arguments: String,
}

impl CustomCommand {
    /// A command with no arguments.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            arguments: String::new(),
        }
    }

    /// Set the argument string.
    pub fn with_arguments(mut self, arguments: impl Into<String>) -> Self {
        self.arguments = arguments.into();
        self
    }

    /// False when no command is set.
    ///
    /// A command made only of whitespace counts as unset, so it never wins
    /// default selection.
    pub fn is_configured(&self) -> bool {
        !self.command.trim().is_empty()
    }
}

/// Read access to per-game custom commands.
pub trait SettingsStore {
    /// Custom command for `game_id`; an empty command when none is stored.
    fn custom_command(&self, game_id: &str) -> CustomCommand;
}

/// In-memory settings keyed by game id.
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    commands: BTreeMap<String, CustomCommand>,
}

impl MemorySettings {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the custom command for `game_id`, replacing any previous one.
    pub fn set_custom_command(&mut self, game_id: impl Into<String>, command: CustomCommand) {
        self.commands.insert(game_id.into(), command);
    }

    /// Forget the custom command for `game_id`.
    pub fn clear_custom_command(&mut self, game_id: &str) {
        self.commands.remove(game_id);
    }
}

impl SettingsStore for MemorySettings {
    fn custom_command(&self, game_id: &str) -> CustomCommand {
        self.commands.get(game_id).cloned().unwrap_or_default()
    }
}

impl<S: SettingsStore + ?Sized> SettingsStore for &S {
    fn custom_command(&self, game_id: &str) -> CustomCommand {
        (**self).custom_command(game_id)
    }
}
