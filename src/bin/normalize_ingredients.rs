//! Utility to normalize ingredient lines read from stdin
//!
//! Usage: normalize_ingredients [preset] [servings] [us|metric] < lines.txt
//!
//! Prints one JSON object per line with the measurement and its display.

use std::io::{self, BufRead};

use drinkdex::config::Config;
use drinkdex::measure::{display_quantity, parse_ingredient, UnitSystem};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env()?;
    let mut args = std::env::args().skip(1);

    let preset = args.next();
    let servings = match args.next() {
        Some(raw) => config.serving_bounds.clamp(raw.parse()?),
        None => config.serving_bounds.min(),
    };
    let system = match args.next() {
        Some(raw) => UnitSystem::from_str(&raw)
            .ok_or_else(|| format!("Invalid unit system '{}': expected us or metric", raw))?,
        None => UnitSystem::Us,
    };

    let descriptors = config.descriptors(preset.as_deref(), &[]);

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let measurement = parse_ingredient(&line, &descriptors);
        let display = display_quantity(&measurement, servings, system);
        println!(
            "{}",
            json!({
                "source": line,
                "measurement": measurement,
                "display": display,
            })
        );
    }

    Ok(())
}
