//! Main application entry point for radix-edit
//!
//! Loads the configuration, applies command line overrides and opens the
//! demo window hosting a single numeric field.

use anyhow::Context;
use eframe::egui;
use log::info;

use radix_edit::app::RadixEditApp;
use radix_edit::codec::parse_in_mode;
use radix_edit::config;
use radix_edit::{DisplayMode, NumericField};

fn print_help() {
    println!("radix-edit - numeric entry field demo");
    println!();
    println!("Usage: radix-edit [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --mode <mode> or -m <mode>      Start in decimal, hex, octal or binary mode");
    println!("  --value <n> or -v <n>           Initial value, written in the start mode");
    println!("  --help or -h                    Show this help message");
    println!();
    println!("Configuration is read from ${} or the platform config directory.", config::CONFIG_ENV_VAR);
    println!();
    println!("Example:");
    println!("  radix-edit --mode hex --value 0xff");
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let shared_config = config::load_shared_config();
    let (mut mode, mut initial_value, window_size) = {
        let cfg = shared_config
            .lock()
            .map_err(|_| anyhow::anyhow!("configuration lock poisoned"))?;
        (
            cfg.display_mode().context("Invalid display mode in configuration")?,
            cfg.initial_value().context("Invalid initial value in configuration")?,
            cfg.window_size().context("Invalid window size in configuration")?,
        )
    };

    let args: Vec<String> = std::env::args().collect();
    let mut cli_value: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--mode" | "-m" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<DisplayMode>() {
                        Ok(m) => mode = m,
                        Err(e) => {
                            eprintln!("Error: {e}");
                            std::process::exit(1);
                        }
                    }
                    i += 1; // consume value
                } else {
                    eprintln!("Error: --mode requires a value");
                    std::process::exit(1);
                }
            }
            "--value" | "-v" => {
                if i + 1 < args.len() {
                    cli_value = Some(args[i + 1].clone());
                    i += 1; // consume value
                } else {
                    eprintln!("Error: --value requires a value");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => eprintln!("Warning: ignoring unknown argument '{other}'"),
        }
        i += 1;
    }

    // The value is read in whichever mode the field will start in
    if let Some(text) = cli_value {
        match parse_in_mode(&text, mode) {
            Ok(v) => initial_value = Some(v),
            Err(e) => {
                eprintln!("Error: --value '{text}' is not a valid {mode} number: {e}");
                std::process::exit(1);
            }
        }
    }

    info!("Starting in {mode} mode with initial value {initial_value:?}");
    let field = NumericField::new(initial_value, mode);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(window_size),
        ..Default::default()
    };

    eframe::run_native(
        "radix-edit",
        options,
        Box::new(move |_cc| Ok(Box::new(RadixEditApp::new(field, shared_config)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run radix-edit: {e}"))
}
