//! Per-recipe view state
//!
//! Serving count and unit system chosen for each recipe card, keyed by recipe
//! id. Lives in the service layer and is never persisted.

use std::collections::HashMap;

use crate::measure::{ServingBounds, UnitSystem};

/// Servings and unit system per recipe id
#[derive(Debug, Clone, Default)]
pub struct RecipeViewState {
    bounds: ServingBounds,
    servings: HashMap<String, u32>,
    unit_systems: HashMap<String, UnitSystem>,
}

impl RecipeViewState {
    pub fn new(bounds: ServingBounds) -> Self {
        Self {
            bounds,
            servings: HashMap::new(),
            unit_systems: HashMap::new(),
        }
    }

    pub fn bounds(&self) -> ServingBounds {
        self.bounds
    }

    /// Current servings for a recipe, the lower bound if never adjusted
    pub fn servings(&self, recipe_id: &str) -> u32 {
        self.servings
            .get(recipe_id)
            .copied()
            .unwrap_or(self.bounds.min())
    }

    pub fn set_servings(&mut self, recipe_id: &str, servings: u32) -> u32 {
        let clamped = self.bounds.clamp(servings);
        self.servings.insert(recipe_id.to_string(), clamped);
        clamped
    }

    pub fn increment_servings(&mut self, recipe_id: &str) -> u32 {
        let next = self.bounds.increment(self.servings(recipe_id));
        self.servings.insert(recipe_id.to_string(), next);
        next
    }

    pub fn decrement_servings(&mut self, recipe_id: &str) -> u32 {
        let next = self.bounds.decrement(self.servings(recipe_id));
        self.servings.insert(recipe_id.to_string(), next);
        next
    }

    pub fn unit_system(&self, recipe_id: &str) -> UnitSystem {
        self.unit_systems
            .get(recipe_id)
            .copied()
            .unwrap_or_default()
    }

    pub fn set_unit_system(&mut self, recipe_id: &str, system: UnitSystem) {
        self.unit_systems.insert(recipe_id.to_string(), system);
    }

    pub fn toggle_unit_system(&mut self, recipe_id: &str) -> UnitSystem {
        let next = self.unit_system(recipe_id).toggle();
        self.unit_systems.insert(recipe_id.to_string(), next);
        next
    }

    /// Forget everything chosen for a recipe
    pub fn reset(&mut self, recipe_id: &str) {
        self.servings.remove(recipe_id);
        self.unit_systems.remove(recipe_id);
    }

    /// Number of recipes with any recorded choice
    pub fn tracked_recipes(&self) -> usize {
        let mut ids: Vec<&String> = self.servings.keys().chain(self.unit_systems.keys()).collect();
        ids.sort();
        ids.dedup();
        ids.len()
    }
}
