//! smokescreen: run the backdrop headlessly and report what it drew.
//!
//! Usage:
//!   smokescreen [--config backdrop.json] [--frames 600] [--dump]

#[cfg(not(target_arch = "wasm32"))]
use std::process;

#[cfg(not(target_arch = "wasm32"))]
use smokescreen_app::headless;
#[cfg(not(target_arch = "wasm32"))]
use smokescreen_core::config::BackdropConfig;

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_FRAMES: u64 = 600;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let config = match parse_flag(&args, "--config") {
        Some(path) => match BackdropConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config {path}: {e}");
                process::exit(1);
            }
        },
        None => BackdropConfig::default(),
    };

    let frames = match parse_flag(&args, "--frames") {
        Some(raw) => match raw.parse::<u64>() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Error: --frames expects a whole number, got {raw:?}");
                process::exit(1);
            }
        },
        None => DEFAULT_FRAMES,
    };

    let summary = match headless::run(&config, frames) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    println!(
        "{} frames, {} recycles, {} fills, {} strokes, viewport {}x{}",
        summary.frames,
        summary.recycles,
        summary.fills,
        summary.strokes,
        summary.snapshot.viewport.width,
        summary.snapshot.viewport.height
    );

    if args.iter().any(|a| a == "--dump") {
        match serde_json::to_string_pretty(&summary.snapshot) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing snapshot: {e}");
                process::exit(1);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn print_usage() {
    eprintln!(
        "smokescreen: headless backdrop runner\n\
         \n\
           --config <path>  JSON backdrop config (seed, particle_count, shape_count, viewport)\n\
           --frames <N>     Frames to simulate (default: {DEFAULT_FRAMES})\n\
           --dump           Print the final frame snapshot as JSON\n"
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_flag<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}
