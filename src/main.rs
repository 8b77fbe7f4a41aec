use clap::Parser;
use quill::core::config::{self, CliOverrides, EnvOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quill", about = "Writing assistant and translation panel")]
struct Args {
    /// Initial route to open ("/" is the tool surface)
    #[arg(long)]
    path: Option<String>,

    /// Config file to load instead of ~/.quill/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Quiet period before a suggestion is requested
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Log level for quill.log (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The log level can come from the config file, so config is loaded
    // before the logger exists. Load errors are logged once it does.
    let loaded = config::load_config(args.config.as_deref());
    let cli = CliOverrides {
        path: args.path,
        debounce_ms: args.debounce_ms,
        log_level: args.log_level,
    };
    let fallback = config::QuillConfig::default();
    let resolved = config::resolve(
        loaded.as_ref().unwrap_or(&fallback),
        &EnvOverrides::from_env(),
        &cli,
    );

    // Initialize file logger - writes to quill.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = resolved.log_filter();

    if let Ok(log_file) = File::create("quill.log") {
        let _ = WriteLogger::init(level.unwrap_or(LevelFilter::Debug), log_config, log_file);
    }

    if let Err(e) = &loaded {
        log::warn!("Failed to load config, using defaults: {}", e);
    }
    if level.is_none() {
        log::warn!("Unknown log level {:?}, using debug", resolved.log_level);
    }
    log::info!(
        "Quill starting up at {} (debounce={}ms)",
        resolved.start_path,
        resolved.debounce.as_millis()
    );

    quill::tui::run(resolved)
}
