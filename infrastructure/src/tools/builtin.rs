//! Built-in demo tools
//!
//! A small catalog available out of the box so the CLI is useful without
//! any configuration. Disabled with `detection.builtin_tools = false`.

use intentai_domain::tool::entities::{ParameterType, ToolDefinition, ToolParameter, ToolSpec};

pub const CALCULATOR: &str = "calculator";
pub const GET_WEATHER: &str = "get_weather";
pub const LOOKUP_STOCK: &str = "lookup_stock";
pub const SEARCH_WEB: &str = "search_web";

/// Get the tool definition for calculator
pub fn calculator_definition() -> ToolDefinition {
    ToolDefinition::new(CALCULATOR, "Calculate the result of a mathematical expression")
        .with_parameter(ToolParameter::new(
            "expression",
            "The mathematical expression to evaluate",
            true,
        ))
        .with_triggers(["calculate", "what is", "compute", "solve"])
        .with_examples(["Calculate 5 * 13", "What is 20 + 7?"])
}

/// Get the tool definition for get_weather
pub fn get_weather_definition() -> ToolDefinition {
    ToolDefinition::new(GET_WEATHER, "Get weather information for a city")
        .with_parameter(ToolParameter::new("city", "City to report on", true))
        .with_parameter(
            ToolParameter::new("units", "celsius, fahrenheit or kelvin", false)
                .with_default("celsius"),
        )
        .with_triggers([
            "weather in",
            "temperature in",
            "forecast for",
            "weather forecast",
        ])
        .with_examples(["Weather in London", "Temperature in New York in fahrenheit"])
}

/// Get the tool definition for lookup_stock
pub fn lookup_stock_definition() -> ToolDefinition {
    ToolDefinition::new(LOOKUP_STOCK, "Look up stock information")
        .with_parameter(ToolParameter::required("symbol").with_description("Ticker symbol"))
        .with_parameter(
            ToolParameter::optional("include_history")
                .with_type(ParameterType::Boolean)
                .with_description("Include price history")
                .with_default(false),
        )
        .with_triggers(["stock price of", "get quote for", "price of", "stock quote"])
        .with_examples(["Stock price of MSFT", "Get quote for AAPL with history"])
}

/// Get the tool definition for search_web
pub fn search_web_definition() -> ToolDefinition {
    ToolDefinition::new(SEARCH_WEB, "Search the web for information")
        .with_parameter(ToolParameter::new("query", "What to search for", true))
        .with_parameter(
            ToolParameter::new("max_results", "Maximum number of results", false)
                .with_type(ParameterType::Number)
                .with_default(5),
        )
        .with_triggers([
            "search for",
            "find",
            "look up",
            "search web",
            "google",
            "find information about",
            "search about",
            "look for",
        ])
        .with_examples([
            "search for Python tutorials",
            "find information about machine learning",
            "look up current events",
            "search web for best practices",
            "google latest technology news",
        ])
}

/// Create the default tool specification with all built-in tools
pub fn default_tool_spec() -> ToolSpec {
    ToolSpec::new()
        .register(calculator_definition())
        .register(get_weather_definition())
        .register(lookup_stock_definition())
        .register(search_web_definition())
}
