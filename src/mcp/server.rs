//! Drinkdex MCP Server Implementation
//!
//! Implements the MCP server with all Drinkdex tools.

use std::sync::{Arc, MutexGuard};

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::measure::Amount;
use crate::tools::ingredients;
use crate::tools::servings;
use crate::tools::status::StatusTracker;
use crate::view::RecipeViewState;

/// Drinkdex MCP Service
#[derive(Clone)]
pub struct DrinkdexService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    config: Arc<Config>,
    /// Servings and unit system per recipe id
    view_state: Arc<std::sync::Mutex<RecipeViewState>>,
    tool_router: ToolRouter<DrinkdexService>,
}

impl DrinkdexService {
    pub fn new(config: Config) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(config.clone()))),
            view_state: Arc::new(std::sync::Mutex::new(RecipeViewState::new(
                config.serving_bounds,
            ))),
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        }
    }

    fn view(&self) -> Result<MutexGuard<'_, RecipeViewState>, McpError> {
        self.view_state
            .lock()
            .map_err(|_| McpError::internal_error("View state lock poisoned", None))
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

/// Amount as sent by the client: a number or free text
#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(untagged)]
pub enum AmountParam {
    Number(f64),
    Text(String),
}

impl From<AmountParam> for Amount {
    fn from(p: AmountParam) -> Self {
        match p {
            AmountParam::Number(n) => Amount::Numeric(n),
            AmountParam::Text(s) => Amount::Qualitative(s),
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ParseIngredientsParams {
    /// Raw ingredient lines, e.g. "½ tsp honey"
    pub lines: Vec<String>,
    /// Descriptor preset: coffee, matcha, smoothie, cocktail or empty (optional)
    pub preset: Option<String>,
    /// Extra descriptor words for this call (optional)
    #[serde(default)]
    pub extra_descriptors: Vec<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScaleAmountParams {
    /// Base amount: a number or text such as "a pinch"
    pub amount: AmountParam,
    /// Serving count to scale by
    pub servings: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertToMetricParams {
    /// US unit: cup, oz, tbsp, tsp or dash (others pass through)
    pub unit: String,
    /// Absolute amount, already scaled by servings
    pub amount: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RenderRecipeParams {
    /// Recipe ID the view state is keyed by
    pub recipe_id: String,
    /// Raw ingredient lines
    pub lines: Vec<String>,
    /// Descriptor preset (optional)
    pub preset: Option<String>,
    /// Extra descriptor words (optional)
    #[serde(default)]
    pub extra_descriptors: Vec<String>,
    /// Override servings for this call (optional, clamped)
    pub servings: Option<u32>,
    /// Override unit system for this call: us or metric (optional)
    pub unit_system: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AdjustServingsParams {
    /// Recipe ID
    pub recipe_id: String,
    /// increment, decrement, set or reset
    pub action: String,
    /// New servings, required for "set"
    pub value: Option<u32>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ToggleUnitSystemParams {
    /// Recipe ID
    pub recipe_id: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl DrinkdexService {
    // --- Status ---

    #[tool(description = "Get the current status of the Drinkdex service including build info, configuration, and process information")]
    async fn drinkdex_status(&self) -> Result<CallToolResult, McpError> {
        let tracked = self.view()?.tracked_recipes();
        let tracker = self.status_tracker.lock().await;
        to_json(&tracker.get_status(tracked))
    }

    #[tool(description = "Get instructions for normalizing, scaling and converting drink recipe ingredients. Call this before using the ingredient tools.")]
    fn ingredient_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::INGREDIENT_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(INGREDIENT_INSTRUCTIONS)]))
    }

    // --- Ingredients ---

    #[tool(description = "List the built-in descriptor presets and their words")]
    fn list_descriptor_presets(&self) -> Result<CallToolResult, McpError> {
        to_json(&ingredients::list_descriptor_presets(&self.config))
    }

    #[tool(description = "Parse ingredient lines into amount, unit, item and optional note")]
    fn parse_ingredients(&self, Parameters(p): Parameters<ParseIngredientsParams>) -> Result<CallToolResult, McpError> {
        let result = ingredients::parse_ingredients(&self.config, &p.lines, p.preset.as_deref(), &p.extra_descriptors)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Scale an amount by a serving count, rounded to the nearest quarter with fraction glyphs. Text amounts pass through unchanged.")]
    fn scale_amount(&self, Parameters(p): Parameters<ScaleAmountParams>) -> Result<CallToolResult, McpError> {
        let result = ingredients::scale_amount(p.amount.into(), p.servings)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Convert an absolute US volume amount (cup, oz, tbsp, tsp) to whole milliliters")]
    fn convert_to_metric(&self, Parameters(p): Parameters<ConvertToMetricParams>) -> Result<CallToolResult, McpError> {
        let result = ingredients::convert_to_metric(&p.unit, p.amount)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Render a recipe's ingredient list at its current servings and unit system (or the given overrides)")]
    fn render_recipe(&self, Parameters(p): Parameters<RenderRecipeParams>) -> Result<CallToolResult, McpError> {
        tracing::debug!("render_recipe '{}' ({} lines)", p.recipe_id, p.lines.len());
        let view = self.view()?;
        let result = ingredients::render_recipe(
            &self.config, &view, &p.recipe_id, &p.lines, p.preset.as_deref(),
            &p.extra_descriptors, p.servings, p.unit_system.as_deref(),
        )
        .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    // --- View State ---

    #[tool(description = "Adjust a recipe's serving count: increment, decrement, set (with value) or reset. Always stays within the configured bounds.")]
    fn adjust_servings(&self, Parameters(p): Parameters<AdjustServingsParams>) -> Result<CallToolResult, McpError> {
        let mut view = self.view()?;
        let result = servings::adjust_servings(&mut view, &p.recipe_id, &p.action, p.value)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Toggle a recipe's ingredient display between US and metric units")]
    fn toggle_unit_system(&self, Parameters(p): Parameters<ToggleUnitSystemParams>) -> Result<CallToolResult, McpError> {
        let mut view = self.view()?;
        let result = servings::toggle_unit_system(&mut view, &p.recipe_id)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for DrinkdexService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "drinkdex".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Drinkdex".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Drinkdex - Drink recipe ingredient normalization. \
                 IMPORTANT: Call ingredient_instructions first. \
                 Ingredients: parse_ingredients, scale_amount, convert_to_metric, render_recipe, list_descriptor_presets. \
                 View state: adjust_servings, toggle_unit_system. \
                 Status: drinkdex_status."
                    .into(),
            ),
        }
    }
}
