//! `cryochat onboard` — First-time setup.

use cryochat_config::AppConfig;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = AppConfig::config_path();

    println!("🧊 cryochat — First-Time Setup");
    println!("==============================\n");

    if AppConfig::write_default(&config_path)? {
        println!("✅ Created config file: {}", config_path.display());
    } else {
        println!("  Config file exists: {}", config_path.display());
    }

    println!("\nTry it out:");
    println!("  cryochat ask \"Why does Maxwell-Boltzmann statistics break down at 4K?\"");
    println!("  cryochat chat --complexity rigorous");

    Ok(())
}
