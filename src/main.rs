use clap::Parser;
use pitchside::core::config::{self, CliOverrides, PitchsideConfig};
use pitchside::core::selection::DisplayMode;
use pitchside::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "pitchside", about = "Browse football clubs and squads by country")]
struct Args {
    /// Base URL of the sports data API
    #[arg(long)]
    base_url: Option<String>,

    /// How to lay out the club list
    #[arg(short, long, value_enum)]
    mode: Option<DisplayMode>,

    /// Country to load on startup
    #[arg(short, long)]
    country: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to pitchside.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("pitchside.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: {e}. Using defaults.");
            log::warn!("Config load failed: {}", e);
            PitchsideConfig::default()
        }
    };
    let cli = CliOverrides {
        base_url: args.base_url,
        display_mode: args.mode,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Pitchside starting up: base_url={}, sport={}, mode={}",
        resolved.base_url,
        resolved.sport,
        resolved.display_mode.label()
    );

    tui::run(resolved, args.country)
}
