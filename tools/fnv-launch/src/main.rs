use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use fnv_launcher::{
    detect_install_path, CustomCommand, GameInstall, GameLauncher, GameProfile, LaunchKind,
    MemorySettings,
};

/// Standalone launcher for Fallout: New Vegas.
#[derive(Parser)]
struct Args {
    /// Install directory (detected from `FNV_DIR` or Steam if omitted).
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Custom launch command (absolute, or relative to the install directory).
    #[arg(long)]
    custom: Option<String>,

    /// Arguments for the custom command.
    #[arg(long, default_value = "")]
    custom_args: String,

    /// Launch this variant instead of the default.
    #[arg(short, long, value_enum)]
    variant: Option<Variant>,

    /// Print the available options and exit.
    #[arg(long)]
    list: bool,

    /// Print the command that would run without starting it.
    #[arg(long)]
    dry_run: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Variant {
    Plain,
    Extender,
    Patch,
    Custom,
}

impl From<Variant> for LaunchKind {
    fn from(v: Variant) -> Self {
        match v {
            Variant::Plain => LaunchKind::Plain,
            Variant::Extender => LaunchKind::Extender,
            Variant::Patch => LaunchKind::Patch,
            Variant::Custom => LaunchKind::Custom,
        }
    }
}

fn find_install(dir: Option<PathBuf>) -> anyhow::Result<GameInstall> {
    if let Some(dir) = dir {
        return Ok(GameInstall::new(dir)?);
    }
    detect_install_path(&GameProfile::FALLOUT_NV).ok_or_else(|| {
        anyhow::anyhow!(
            "Could not locate Fallout: New Vegas. Provide --dir <install_dir> (or set FNV_DIR)."
        )
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let install = find_install(args.dir)?;

    let mut settings = MemorySettings::new();
    if let Some(command) = args.custom {
        settings.set_custom_command(
            install.profile().mode_id,
            CustomCommand::new(command).with_arguments(args.custom_args),
        );
    }

    let launcher = GameLauncher::new(install, settings);

    if args.list {
        for option in launcher.options()? {
            let path = option
                .command
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<not set>".to_string());
            println!("{:<9} {:<36} {}", option.key(), option.label, path);
        }
        let default = launcher.default_action();
        println!("default   {:<36} {}", default.label, default.description);
        return Ok(());
    }

    if args.dry_run {
        let kind = match args.variant {
            Some(v) => LaunchKind::from(v),
            None => {
                launcher
                    .resolver()
                    .select_default(&launcher.custom_command())?
                    .kind
            }
        };
        let spec = launcher.plan(kind)?;
        println!("{kind}: {} {:?}", spec.program.display(), spec.args);
        return Ok(());
    }

    let spec = match args.variant {
        Some(v) => launcher.launch(v.into())?,
        None => launcher.launch_default()?,
    };
    println!("Launched {}", spec.program.display());

    Ok(())
}
