use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;

use rust_passgen::cli::{self, Args};
use rust_passgen::core::config::Config;
use rust_passgen::logging;

fn main() -> anyhow::Result<()> {
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(cipher) = args.cipher {
        config.cipher = cipher;
    }
    if let Some(log_file) = &args.log_file {
        config.log_file = log_file.clone();
    }

    if let Err(e) = logging::init(&config) {
        eprintln!("⚠️  Logging disabled: {}", e);
    }
    log::info!("Starting rust_passgen {}", env!("CARGO_PKG_VERSION"));
    log::debug!("Loaded config: {:?}", config);

    let result = match args.command {
        Some(command) => cli::handlers::run_command(command, &config, args.json),
        None => {
            let should_exit = Arc::new(AtomicBool::new(false));
            {
                let should_exit = Arc::clone(&should_exit);
                ctrlc::set_handler(move || {
                    log::info!("Ctrl+C received, leaving menu");
                    should_exit.store(true, Ordering::SeqCst);
                })?;
            }
            cli::menu::run_cli_menu(&config, should_exit)
        }
    };

    if let Err(e) = &result {
        log::error!("{:#}", e);
    }
    result
}
