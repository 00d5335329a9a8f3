//! Integration tests for command resolution and default selection.
use fnv_launcher::{CustomCommand, GameInstall, GameProfile, LaunchKind, LaunchResolver, LauncherError};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn resolver_with(dir: &Path, files: &[&str]) -> LaunchResolver {
    for f in files {
        fs::write(dir.join(f), b"").unwrap();
    }
    LaunchResolver::new(GameInstall::new(dir).unwrap())
}

fn long_name() -> &'static str {
    Box::leak("a".repeat(300).into_boxed_str())
}

fn keys(resolver: &LaunchResolver, custom: &CustomCommand) -> Vec<&'static str> {
    resolver
        .build_launch_options(custom)
        .unwrap()
        .iter()
        .map(|o| o.key())
        .collect()
}

#[test]
fn plain_prefers_primary_executable() {
    let d = tempdir().unwrap();
    let r = resolver_with(d.path(), &["falloutNV.exe", "falloutNVng.exe"]);
    assert_eq!(r.resolve_plain().unwrap(), d.path().join("falloutNV.exe"));
}

#[test]
fn plain_falls_back_to_alternate_even_if_missing() {
    let d = tempdir().unwrap();
    let r = resolver_with(d.path(), &["falloutNVng.exe"]);
    assert_eq!(r.resolve_plain().unwrap(), d.path().join("falloutNVng.exe"));

    let empty = tempdir().unwrap();
    let r = resolver_with(empty.path(), &[]);
    let plain = r.resolve_plain().unwrap();
    assert_eq!(plain, empty.path().join("falloutNVng.exe"));
    assert!(!plain.exists());
}

#[test]
fn loader_paths_are_fixed_joins() {
    let d = tempdir().unwrap();
    let r = resolver_with(d.path(), &[]);
    assert_eq!(r.resolve_extender(), d.path().join("nvse_loader.exe"));
    assert_eq!(r.resolve_patch(), d.path().join("fnv4gb.exe"));
    assert!(r.resolve_extender().is_absolute());
}

#[test]
fn relative_install_dir_is_made_absolute() {
    let install = GameInstall::new(".").unwrap();
    let r = LaunchResolver::new(install);
    assert!(r.resolve_extender().is_absolute());
    assert!(r.resolve_plain().unwrap().is_absolute());
}

#[test]
fn missing_install_dir_is_rejected() {
    let d = tempdir().unwrap();
    let err = GameInstall::new(d.path().join("nope")).unwrap_err();
    assert!(err.to_string().contains("invalid Fallout: New Vegas install directory"));
}

#[test]
fn custom_unset_resolves_to_none() {
    let d = tempdir().unwrap();
    let r = resolver_with(d.path(), &[]);
    assert_eq!(r.resolve_custom(&CustomCommand::default()), None);
    assert_eq!(r.resolve_custom(&CustomCommand::new("   ")), None);
}

#[test]
fn custom_expands_environment_variables() {
    std::env::set_var("FNV_LAUNCHER_TEST_GAMES", r"C:\Games");
    let d = tempdir().unwrap();
    let r = resolver_with(d.path(), &[]);
    let custom = CustomCommand::new(r"%FNV_LAUNCHER_TEST_GAMES%\sub\game.exe");
    assert_eq!(
        r.resolve_custom(&custom),
        Some(PathBuf::from(r"C:\Games\sub\game.exe"))
    );
}

#[test]
fn custom_relative_joins_install_dir() {
    let d = tempdir().unwrap();
    let r = resolver_with(d.path(), &[]);
    let custom = CustomCommand::new("\"mo2/ModOrganizer.exe\"");
    assert_eq!(
        r.resolve_custom(&custom),
        Some(d.path().join("mo2/ModOrganizer.exe"))
    );
}

#[test]
fn custom_rooted_is_returned_unchanged() {
    let d = tempdir().unwrap();
    let other = tempdir().unwrap();
    let exe = other.path().join("tool.exe");
    fs::write(&exe, b"").unwrap();

    let r = resolver_with(d.path(), &[]);
    let custom = CustomCommand::new(exe.to_string_lossy());
    assert_eq!(r.resolve_custom(&custom), Some(exe.clone()));

    let c = r.candidate(LaunchKind::Custom, &custom).unwrap();
    assert!(c.exists);
}

#[test]
fn options_are_ordered_and_always_include_plain_and_custom() {
    let d = tempdir().unwrap();
    let r = resolver_with(d.path(), &["falloutNV.exe", "nvse_loader.exe", "fnv4gb.exe"]);
    assert_eq!(
        keys(&r, &CustomCommand::default()),
        ["plain", "extender", "patch", "custom"]
    );

    let bare = tempdir().unwrap();
    let r = resolver_with(bare.path(), &[]);
    let options = r.build_launch_options(&CustomCommand::default()).unwrap();
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].key(), "plain");
    assert_eq!(options[1].key(), "custom");
    assert_eq!(options[1].command.path, None);
    assert_eq!(options[1].icon_source(), None);
}

#[test]
fn loader_options_follow_disk_state() {
    let d = tempdir().unwrap();
    let r = resolver_with(d.path(), &["falloutNV.exe"]);
    let custom = CustomCommand::default();
    assert_eq!(keys(&r, &custom), ["plain", "custom"]);

    fs::write(d.path().join("nvse_loader.exe"), b"").unwrap();
    assert_eq!(keys(&r, &custom), ["plain", "extender", "custom"]);

    fs::write(d.path().join("fnv4gb.exe"), b"").unwrap();
    assert_eq!(keys(&r, &custom), ["plain", "extender", "patch", "custom"]);

    fs::remove_file(d.path().join("nvse_loader.exe")).unwrap();
    assert_eq!(keys(&r, &custom), ["plain", "patch", "custom"]);
}

#[test]
fn option_labels_name_the_variant() {
    let d = tempdir().unwrap();
    let r = resolver_with(d.path(), &["falloutNV.exe", "nvse_loader.exe"]);
    let options = r.build_launch_options(&CustomCommand::default()).unwrap();
    assert_eq!(options[0].label, "Launch Fallout: New Vegas");
    assert_eq!(options[0].description, "Launches plain Fallout: New Vegas.");
    assert_eq!(options[0].icon_source(), Some(d.path().join("falloutNV.exe").as_path()));
    assert_eq!(options[1].label, "Launch NVSE");
    assert_eq!(options[2].label, "Launch Custom Fallout: New Vegas");

    let default = r.default_action();
    assert_eq!(default.label, "Launch Fallout: New Vegas");
    assert_eq!(default.description, "Launches Fallout: New Vegas.");
}

#[test]
fn default_prefers_configured_custom() {
    let d = tempdir().unwrap();
    let r = resolver_with(d.path(), &["falloutNV.exe", "nvse_loader.exe", "fnv4gb.exe"]);
    let custom = CustomCommand::new("missing.exe");
    let chosen = r.select_default(&custom).unwrap();
    assert_eq!(chosen.kind, LaunchKind::Custom);
    assert_eq!(chosen.path, Some(d.path().join("missing.exe")));
    assert!(!chosen.exists);
}

#[test]
fn default_uses_extender_when_installed() {
    let d = tempdir().unwrap();
    let r = resolver_with(d.path(), &["falloutNV.exe", "nvse_loader.exe"]);
    let chosen = r.select_default(&CustomCommand::default()).unwrap();
    assert_eq!(chosen.kind, LaunchKind::Extender);
    assert!(chosen.exists);
}

#[test]
fn default_never_picks_patch_launcher() {
    let d = tempdir().unwrap();
    let r = resolver_with(d.path(), &["falloutNV.exe", "fnv4gb.exe"]);
    let chosen = r.select_default(&CustomCommand::default()).unwrap();
    assert_eq!(chosen.kind, LaunchKind::Plain);
    assert_eq!(chosen.path, Some(d.path().join("falloutNV.exe")));
}

#[test]
fn launch_kind_keys_round_trip() {
    for kind in LaunchKind::ALL {
        assert_eq!(LaunchKind::from_key(kind.key()), Some(kind));
    }
    assert_eq!(LaunchKind::from_key("fose"), None);
}

#[test]
fn unreadable_custom_command_keeps_options() {
    let d = tempdir().unwrap();
    let r = resolver_with(d.path(), &["falloutNV.exe"]);
    let custom = CustomCommand::new("a".repeat(300));

    assert_eq!(keys(&r, &custom), ["plain", "custom"]);

    let chosen = r.select_default(&custom).unwrap();
    assert_eq!(chosen.kind, LaunchKind::Custom);
    assert!(!chosen.exists);
}

#[test]
fn check_errors_name_the_variant() {
    let d = tempdir().unwrap();
    let profile = GameProfile {
        extender_exe: long_name(),
        ..GameProfile::FALLOUT_NV
    };
    let r = LaunchResolver::new(GameInstall::with_profile(d.path(), profile).unwrap());
    match r.candidate(LaunchKind::Extender, &CustomCommand::default()) {
        Err(LauncherError::Probe { kind, path, .. }) => {
            assert_eq!(kind, LaunchKind::Extender);
            assert_eq!(path, d.path().join(long_name()));
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(r.build_launch_options(&CustomCommand::default()).is_err());

    let profile = GameProfile {
        primary_exe: long_name(),
        ..GameProfile::FALLOUT_NV
    };
    let r = LaunchResolver::new(GameInstall::with_profile(d.path(), profile).unwrap());
    assert!(matches!(
        r.resolve_plain(),
        Err(LauncherError::Probe { kind: LaunchKind::Plain, .. })
    ));
}

#[test]
fn path_below_a_file_counts_as_absent() {
    let d = tempdir().unwrap();
    fs::write(d.path().join("marker"), b"").unwrap();
    let profile = GameProfile {
        primary_exe: "marker/falloutNV.exe",
        ..GameProfile::FALLOUT_NV
    };
    let r = LaunchResolver::new(GameInstall::with_profile(d.path(), profile).unwrap());

    assert_eq!(r.resolve_plain().unwrap(), d.path().join("falloutNVng.exe"));
    let plain = r.candidate(LaunchKind::Plain, &CustomCommand::default()).unwrap();
    assert!(!plain.exists);
}
