//! Ingredient MCP Tools
//!
//! Parsing, scaling, metric conversion and full ingredient-list rendering.

use serde::Serialize;

use crate::config::Config;
use crate::measure::{
    display_quantity, parse_ingredients as parse_lines, scale_amount as scale, to_metric, Amount,
    DescriptorSet, DisplayQuantity, Measurement, MetricAmount, UnitSystem, PRESET_NAMES,
};
use crate::view::RecipeViewState;

/// Response for parse_ingredients
#[derive(Debug, Serialize)]
pub struct ParseIngredientsResponse {
    pub descriptors: Vec<String>,
    pub measurements: Vec<Measurement>,
    pub count: usize,
}

/// Response for scale_amount
#[derive(Debug, Serialize)]
pub struct ScaleAmountResponse {
    pub amount: Amount,
    pub servings: f64,
    pub display: String,
}

/// One preset and its words
#[derive(Debug, Serialize)]
pub struct PresetInfo {
    pub name: String,
    pub words: Vec<String>,
}

/// Response for list_descriptor_presets
#[derive(Debug, Serialize)]
pub struct ListPresetsResponse {
    pub default_preset: String,
    pub extra_descriptors: Vec<String>,
    pub presets: Vec<PresetInfo>,
}

/// A rendered ingredient line
#[derive(Debug, Serialize)]
pub struct RenderedIngredient {
    pub source: String,
    pub measurement: Measurement,
    pub display: DisplayQuantity,
    pub text: String,
}

/// Response for render_recipe
#[derive(Debug, Serialize)]
pub struct RenderRecipeResponse {
    pub recipe_id: String,
    pub servings: u32,
    pub unit_system: UnitSystem,
    pub ingredients: Vec<RenderedIngredient>,
}

fn descriptor_words(descriptors: &DescriptorSet) -> Vec<String> {
    descriptors.words().map(str::to_string).collect()
}

/// Parse ingredient lines with the requested vocabulary
pub fn parse_ingredients(
    config: &Config,
    lines: &[String],
    preset: Option<&str>,
    extra_descriptors: &[String],
) -> Result<ParseIngredientsResponse, String> {
    if lines.is_empty() {
        return Err("lines cannot be empty".to_string());
    }

    let descriptors = config.descriptors(preset, extra_descriptors);
    let measurements = parse_lines(lines, &descriptors);
    tracing::debug!("Parsed {} ingredient lines", measurements.len());

    Ok(ParseIngredientsResponse {
        descriptors: descriptor_words(&descriptors),
        count: measurements.len(),
        measurements,
    })
}

/// Scale one amount for display
pub fn scale_amount(amount: Amount, servings: f64) -> Result<ScaleAmountResponse, String> {
    if !servings.is_finite() || servings < 0.0 {
        return Err("servings must be a non-negative number".to_string());
    }

    let display = scale(&amount, servings);
    Ok(ScaleAmountResponse {
        amount,
        servings,
        display,
    })
}

/// Convert an absolute amount to metric
pub fn convert_to_metric(unit: &str, amount: f64) -> Result<MetricAmount, String> {
    if !amount.is_finite() {
        return Err("amount must be a finite number".to_string());
    }
    Ok(to_metric(unit.trim(), amount))
}

/// List the built-in descriptor presets
pub fn list_descriptor_presets(config: &Config) -> ListPresetsResponse {
    let presets = PRESET_NAMES
        .iter()
        .filter_map(|name| {
            DescriptorSet::preset(name).map(|set| PresetInfo {
                name: name.to_string(),
                words: descriptor_words(&set),
            })
        })
        .collect();

    ListPresetsResponse {
        default_preset: config.default_preset.clone(),
        extra_descriptors: config.extra_descriptors.clone(),
        presets,
    }
}

/// Compose the display line for one ingredient
fn compose_text(measurement: &Measurement, display: &DisplayQuantity) -> String {
    let mut text = format!("{} {} {}", display.amount, display.unit, measurement.item)
        .trim_end()
        .to_string();
    if let Some(note) = &measurement.note {
        text.push_str(&format!(" ({})", note));
    }
    text
}

/// Render a recipe's ingredient list for its servings and unit system
///
/// `servings` and `unit_system` override the recipe's view state for this call
/// only; servings are clamped into the configured bounds.
pub fn render_recipe(
    config: &Config,
    view: &RecipeViewState,
    recipe_id: &str,
    lines: &[String],
    preset: Option<&str>,
    extra_descriptors: &[String],
    servings: Option<u32>,
    unit_system: Option<&str>,
) -> Result<RenderRecipeResponse, String> {
    let recipe_id = recipe_id.trim();
    if recipe_id.is_empty() {
        return Err("recipe_id cannot be empty".to_string());
    }

    let unit_system = match unit_system {
        Some(raw) => UnitSystem::from_str(raw)
            .ok_or_else(|| format!("Invalid unit_system '{}': expected us or metric", raw))?,
        None => view.unit_system(recipe_id),
    };
    let servings = servings
        .map(|s| view.bounds().clamp(s))
        .unwrap_or_else(|| view.servings(recipe_id));

    let descriptors = config.descriptors(preset, extra_descriptors);
    let ingredients = lines
        .iter()
        .zip(parse_lines(lines, &descriptors))
        .map(|(source, measurement)| {
            let display = display_quantity(&measurement, servings, unit_system);
            let text = compose_text(&measurement, &display);
            RenderedIngredient {
                source: source.clone(),
                measurement,
                display,
                text,
            }
        })
        .collect();

    tracing::debug!(
        "Rendered recipe '{}' at {} servings ({})",
        recipe_id,
        servings,
        unit_system.as_str()
    );

    Ok(RenderRecipeResponse {
        recipe_id: recipe_id.to_string(),
        servings,
        unit_system,
        ingredients,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_ingredients_with_preset() {
        let config = Config::default();
        let result = parse_ingredients(
            &config,
            &lines(&["1 ceremonial matcha", "8 oz oat milk"]),
            Some("matcha"),
            &[],
        )
        .unwrap();
        assert_eq!(result.count, 2);
        assert_eq!(result.measurements[0].unit, "item");
        assert_eq!(result.measurements[1].unit, "oz");
        assert!(result.descriptors.contains(&"ceremonial".to_string()));
    }

    #[test]
    fn test_parse_ingredients_rejects_empty() {
        assert!(parse_ingredients(&Config::default(), &[], None, &[]).is_err());
    }

    #[test]
    fn test_scale_amount_tool() {
        let result = scale_amount(Amount::Numeric(0.5), 3.0).unwrap();
        assert_eq!(result.display, "1 ½");

        let result = scale_amount(Amount::Qualitative("a pinch".to_string()), 4.0).unwrap();
        assert_eq!(result.display, "a pinch");

        assert!(scale_amount(Amount::Numeric(1.0), -1.0).is_err());
        assert!(scale_amount(Amount::Numeric(1.0), f64::NAN).is_err());
    }

    #[test]
    fn test_convert_to_metric_tool() {
        let result = convert_to_metric(" cup ", 2.0).unwrap();
        assert_eq!(result.amount, 480.0);
        assert_eq!(result.unit, "ml");
        assert!(convert_to_metric("cup", f64::INFINITY).is_err());
    }

    #[test]
    fn test_list_presets() {
        let result = list_descriptor_presets(&Config::default());
        assert_eq!(result.default_preset, "empty");
        assert_eq!(result.presets.len(), PRESET_NAMES.len());
        let coffee = result.presets.iter().find(|p| p.name == "coffee").unwrap();
        assert!(coffee.words.contains(&"iced".to_string()));
    }

    #[test]
    fn test_render_recipe_us() {
        let config = Config::default();
        let view = RecipeViewState::default();
        let result = render_recipe(
            &config,
            &view,
            "mocha",
            &lines(&["½ cup milk", "2 tbsp chocolate syrup (optional)", "Ice"]),
            None,
            &[],
            Some(3),
            None,
        )
        .unwrap();
        assert_eq!(result.servings, 3);
        assert_eq!(result.unit_system, UnitSystem::Us);
        assert_eq!(result.ingredients[0].text, "1 ½ cup milk");
        assert_eq!(result.ingredients[1].text, "6 tbsp chocolate syrup (optional)");
        assert_eq!(result.ingredients[2].text, "3 item Ice");
    }

    #[test]
    fn test_render_recipe_metric_uses_view_state() {
        let config = Config::default();
        let mut view = RecipeViewState::default();
        view.set_servings("mocha", 3);
        view.toggle_unit_system("mocha");

        let result = render_recipe(
            &config,
            &view,
            "mocha",
            &lines(&["½ cup milk", "a splash vanilla"]),
            None,
            &[],
            None,
            None,
        )
        .unwrap();
        assert_eq!(result.servings, 3);
        assert_eq!(result.unit_system, UnitSystem::Metric);
        assert_eq!(result.ingredients[0].text, "360 ml milk");
        assert_eq!(result.ingredients[1].text, "a splash vanilla");
    }

    #[test]
    fn test_render_recipe_clamps_servings() {
        let result = render_recipe(
            &Config::default(),
            &RecipeViewState::default(),
            "mojito",
            &lines(&["1 oz lime juice"]),
            None,
            &[],
            Some(40),
            Some("metric"),
        )
        .unwrap();
        assert_eq!(result.servings, 6);
        assert_eq!(result.ingredients[0].display.amount, "180");
    }

    #[test]
    fn test_render_recipe_rejects_bad_input() {
        let config = Config::default();
        let view = RecipeViewState::default();
        assert!(render_recipe(&config, &view, " ", &[], None, &[], None, None).is_err());
        assert!(render_recipe(&config, &view, "x", &[], None, &[], None, Some("kelvin")).is_err());
    }
}
