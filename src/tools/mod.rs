//! Drinkdex Tools module
//!
//! MCP tool implementations for Drinkdex.

pub mod ingredients;
pub mod servings;
pub mod status;
