mod cli;
mod commands;
mod output;
mod settings;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use settings::Settings;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins; otherwise warn, or info with --verbose
    let default_filter = if args.verbose {
        "bmsmeta=info,bmsmeta_core=info"
    } else {
        "bmsmeta=warn,bmsmeta_core=warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut settings = match &args.config {
        Some(path) => {
            let settings = Settings::load(path)?;
            info!("Loaded settings from {:?}", path);
            settings
        }
        None => Settings::default(),
    };
    settings.apply_args(&args);

    match &args.command {
        Command::Parse { file } => commands::parse::run(file, &settings),
        Command::Group { dir } => commands::group::run(dir, &settings),
        Command::Scan { root } => commands::scan::run(root, &settings),
        Command::Title { text } => commands::title::run(text),
    }
}
