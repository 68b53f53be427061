//! Serving and unit-system MCP Tools
//!
//! Adjust the per-recipe view state behind the servings stepper and the
//! US/Metric toggle.

use serde::Serialize;

use crate::measure::UnitSystem;
use crate::view::RecipeViewState;

/// Servings adjustment requested by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServingsAction {
    Increment,
    Decrement,
    Set,
    Reset,
}

impl ServingsAction {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "increment" | "inc" | "+" => Some(ServingsAction::Increment),
            "decrement" | "dec" | "-" => Some(ServingsAction::Decrement),
            "set" => Some(ServingsAction::Set),
            "reset" => Some(ServingsAction::Reset),
            _ => None,
        }
    }
}

/// Response for adjust_servings
#[derive(Debug, Serialize)]
pub struct ServingsResponse {
    pub recipe_id: String,
    pub servings: u32,
    pub min: u32,
    pub max: u32,
}

/// Response for toggle_unit_system
#[derive(Debug, Serialize)]
pub struct UnitSystemResponse {
    pub recipe_id: String,
    pub unit_system: UnitSystem,
}

/// Apply a servings adjustment to one recipe
pub fn adjust_servings(
    view: &mut RecipeViewState,
    recipe_id: &str,
    action: &str,
    value: Option<u32>,
) -> Result<ServingsResponse, String> {
    let recipe_id = recipe_id.trim();
    if recipe_id.is_empty() {
        return Err("recipe_id cannot be empty".to_string());
    }

    let action = ServingsAction::from_str(action).ok_or_else(|| {
        format!(
            "Invalid action '{}': expected increment, decrement, set or reset",
            action
        )
    })?;

    let servings = match action {
        ServingsAction::Increment => view.increment_servings(recipe_id),
        ServingsAction::Decrement => view.decrement_servings(recipe_id),
        ServingsAction::Set => {
            let value = value.ok_or("value is required for action 'set'")?;
            view.set_servings(recipe_id, value)
        }
        ServingsAction::Reset => {
            view.reset(recipe_id);
            view.servings(recipe_id)
        }
    };

    let bounds = view.bounds();
    Ok(ServingsResponse {
        recipe_id: recipe_id.to_string(),
        servings,
        min: bounds.min(),
        max: bounds.max(),
    })
}

/// Flip one recipe between US and metric display
pub fn toggle_unit_system(
    view: &mut RecipeViewState,
    recipe_id: &str,
) -> Result<UnitSystemResponse, String> {
    let recipe_id = recipe_id.trim();
    if recipe_id.is_empty() {
        return Err("recipe_id cannot be empty".to_string());
    }

    Ok(UnitSystemResponse {
        recipe_id: recipe_id.to_string(),
        unit_system: view.toggle_unit_system(recipe_id),
    })
}
