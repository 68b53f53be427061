//! Drinkdex Status Tool
//!
//! Provides runtime status information about the Drinkdex service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::config::Config;

/// Ingredient tool instructions for AI assistants
pub const INGREDIENT_INSTRUCTIONS: &str = r#"
# Drinkdex Ingredient Instructions

Drinkdex normalizes drink recipe ingredient lines (cocktails, smoothies, protein
shakes, mocktails, coffee and matcha drinks) and shows them scaled to a serving
count in US or metric units.

## Line Format

Each line is read as `<amount> <unit> <item>`:

| Line | amount | unit | item |
|------|--------|------|------|
| `8 oz cold brew concentrate` | 8 | oz | cold brew concentrate |
| `½ tsp honey` | 0.5 | tsp | honey |
| `1 cup of sugar` | 1 | cup | sugar |
| `2 tbsp chocolate syrup (optional)` | 2 | tbsp | chocolate syrup (note: optional) |
| `Ice` | "1" | item | Ice |

- Leading fraction glyphs (½ ⅓ ⅔ ¼ ¾ ⅛) are read as numbers.
- A leading word that is not a number ("a", "few") is kept as text and never scaled.
- `item` as the unit means no real unit was found; it is never converted.

## Descriptor Presets

Some words sit where the unit would be but describe the ingredient
("2 fresh mint leaves", "1 ceremonial matcha"). Pick the preset matching the
drink category so these are folded back into the item:

- `coffee`, `matcha`, `smoothie`, `cocktail`, `empty`
- Add one-off words with `extra_descriptors`.
- Call `list_descriptor_presets` to see every word.

## Servings and Units

1. `render_recipe` with a `recipe_id` and the raw lines shows the list at the
   recipe's current servings and unit system.
2. `adjust_servings` (increment, decrement, set, reset) changes servings; the
   count always stays within the configured bounds (default 1-6).
3. `toggle_unit_system` flips a recipe between US and metric.

US display rounds to the nearest quarter and uses ¼ ½ ¾. Metric display converts
cup (240 ml), oz (30 ml), tbsp (15 ml) and tsp (5 ml) after scaling and shows
whole milliliters. Dash and every other unit are left as they are.

## Single Operations

- `parse_ingredients` returns the structured measurements only.
- `scale_amount` scales one amount (number or text) by a serving count.
- `convert_to_metric` converts one absolute amount.
"#;

/// Runtime status of the Drinkdex service
#[derive(Debug, Clone, Serialize)]
pub struct DrinkdexStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    pub config: Config,
    pub tracked_recipes: usize,

    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: String,
    config: Config,
}

impl StatusTracker {
    pub fn new(config: Config) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            config,
        }
    }

    /// Get the current status
    pub fn get_status(&self, tracked_recipes: usize) -> DrinkdexStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        DrinkdexStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            config: self.config.clone(),
            tracked_recipes,
            started_at: self.started_at.clone(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
