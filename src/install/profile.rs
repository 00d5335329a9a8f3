/// Fixed file names and labels for one game title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameProfile {
    /// Settings key for per-game values (custom command, arguments).
    pub mode_id: &'static str,
    /// Human-readable title, used in option labels.
    pub display_name: &'static str,
    /// Preferred game executable.
    pub primary_exe: &'static str,
    /// Fallback game executable, used when `primary_exe` is absent.
    pub alternate_exe: &'static str,
    /// Script extender loader.
    pub extender_exe: &'static str,
    /// Short name of the script extender.
    pub extender_name: &'static str,
    /// Large-address-aware patch launcher.
    pub patch_exe: &'static str,
    /// Short name of the patch launcher.
    pub patch_name: &'static str,
    /// Folder name under `steamapps/common`.
    pub steam_dir_name: &'static str,
}

impl GameProfile {
    /// Fallout: New Vegas (Steam, GOG and retail layouts).
    pub const FALLOUT_NV: GameProfile = GameProfile {
        mode_id: "FalloutNV",
        display_name: "Fallout: New Vegas",
        primary_exe: "falloutNV.exe",
        alternate_exe: "falloutNVng.exe",
        extender_exe: "nvse_loader.exe",
        extender_name: "NVSE",
        patch_exe: "fnv4gb.exe",
        patch_name: "FNV4Gb",
        steam_dir_name: "Fallout New Vegas",
    };
}

impl Default for GameProfile {
    fn default() -> Self {
        Self::FALLOUT_NV
    }
}
