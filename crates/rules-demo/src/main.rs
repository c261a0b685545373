//! Rules demo binary.
//!
//! Prints the operator showcase, then runs the door scenario.
//!
//! ```bash
//! # Watch every rule enter and leave
//! RUST_LOG=behavior_rules::trace=trace cargo run -p rules-demo
//!
//! # A dude without a key
//! DUDE_HAS_KEY=false cargo run -p rules-demo
//! ```

use anyhow::Result;
use rules_demo::{DemoConfig, logging, scenario, showcase};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = DemoConfig::from_env()?;
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!("Starting rules demo");
    tracing::info!("Door position: {}", config.door.door_position);
    tracing::info!("Dude has key: {}", config.door.dude_has_key);

    for (label, status) in showcase::rows() {
        println!("{:<18}{status}", format!("{label}:"));
    }

    let outcome = scenario::run(&config.door);
    println!();
    println!("door open:         {}", outcome.door_open);
    println!("failed:            {}", outcome.failed);
    println!("dude position:     {}", outcome.dude_position);
    println!("ticks:             {}", outcome.ticks);
    if outcome.exhausted {
        println!("stopped at MAX_TICKS={}", config.door.max_ticks);
    }

    tracing::info!("Rules demo complete");
    Ok(())
}
