//! `cryochat status` — Show configuration and thesis details.

use cryochat_config::AppConfig;
use cryochat_knowledge::{ContentStore, THESIS};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config()?;

    println!("🧊 cryochat Status");
    println!("==================");
    println!("  Config file:  {}", AppConfig::config_path().display());
    println!("  Complexity:   {} ({})", config.complexity.label(), config.complexity);
    println!("                {}", config.complexity.guidance());
    println!("  Reply delay:  {}ms", config.response_delay_ms);
    println!(
        "  Retries:      {} (backoff {}ms, timeout {}ms)",
        config.retry.max_retries, config.retry.initial_backoff_ms, config.retry.attempt_timeout_ms
    );
    println!("  Sections:     {}", ContentStore::thesis().len());

    println!();
    println!("  Thesis:       {} / {}", THESIS.author, THESIS.affiliation);
    println!("  Scope:        {}", THESIS.scope);
    for (name, value) in THESIS.key_parameters {
        println!("    {name:<12} {value}");
    }
    println!("  Core topics:  {}", THESIS.core_topics.join(", "));

    if AppConfig::config_path().exists() {
        println!("\n  ✅ Config file found");
    } else {
        println!("\n  ⚠️  No config file — run `cryochat onboard` to create one");
    }

    Ok(())
}
