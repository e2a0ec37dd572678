//! Room Reservations — CLI host
//!
//! Runs a command script against a single in-memory reservation service
//! and prints one JSON result per command. Nothing is persisted.
//!
//! ```sh
//! # Script from a file, rooms seeded from the default config
//! reservations bookings.txt
//!
//! # Script from stdin with a custom config
//! reservations --config ./rooms.toml < bookings.txt
//!
//! # Validate config without running anything
//! reservations --check
//! ```

mod runner;
mod script;
mod settings;

use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, error, info};

use room_reservations::{default_config_path, init_tracing, ReservationService};

use crate::runner::Runner;
use crate::settings::load_or_default;

/// Room reservation engine driven by a line-oriented command script.
#[derive(Parser, Debug)]
#[command(
    name = "reservations",
    version,
    about = "Book rooms from a command script, rejecting overlapping reservations",
    long_about = "Reads commands (room, reserve, cancel, list, history, rooms) one per line \
                  from SCRIPT or stdin and prints one JSON object per command.\n\n\
                  Default config: ~/.config/room-reservations/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "RESERVATIONS_CONFIG")]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit.
    #[arg(long)]
    check: bool,

    /// Command script to run; stdin when omitted.
    script: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let explicit = cli.config.is_some();
    let config_path = cli.config.unwrap_or_else(default_config_path);

    let (mut config, load_error) = load_or_default(&config_path, explicit);

    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    init_tracing(&config.logging);

    match &load_error {
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
        None if config_path.exists() => {
            info!("Configuration loaded from {}", config_path.display());
        }
        None => debug!("No config at {}, using defaults", config_path.display()),
    }

    let service = ReservationService::from_config(&config)?;

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        if let Some(e) = load_error {
            return Err(e.into());
        }
        println!("Configuration is valid");
        println!("   Config file       : {}", config_path.display());
        println!("   Log level         : {}", config.logging.level);
        println!("   Reject past dates : {}", config.booking.reject_past_dates);
        println!("   Rooms             : {}", service.rooms().count());
        return Ok(());
    }

    // ── Run script ─────────────────────────────────────────────
    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => Box::new(BufReader::new(std::fs::File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut runner = Runner::new(service);
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if let Some(result) = runner.run_line(index + 1, &line) {
            println!("{result}");
        }
    }

    Ok(())
}
