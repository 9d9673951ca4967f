// Screen Emulator - Main Entry Point
//
// Opens the screen window and drives it with the bundled demo engine.
// An optional first argument names the configuration file.

use log::info;
use screen_emulator::config::{ScreenConfig, CONFIG_FILE};
use screen_emulator::display::run_screen;
use screen_emulator::engine::{DemoEngine, SharedEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default filter is "info" if RUST_LOG is not set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Screen Emulator v{}", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args().nth(1).unwrap_or_else(|| CONFIG_FILE.to_string());
    let config = ScreenConfig::load_or_default(&config_path);
    info!("Configuration loaded from '{}'", config_path);

    let engine = SharedEngine::new(DemoEngine::new(config.engine.boot_frames));

    info!("Arrow keys / ESDF / HJKL move, Z paints, X wipes, C and V change ink.");
    run_screen(&config, engine)?;

    info!("Screen window closed.");
    Ok(())
}
