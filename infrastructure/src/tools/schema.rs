//! JSON Schema tool converter.
//!
//! Default implementation of [`ToolSchemaPort`] that produces provider-neutral
//! JSON Schema a host can forward to its tool-use API.

use webscraper_application::ports::tool_schema::ToolSchemaPort;
use webscraper_domain::tool::entities::{ToolDefinition, ToolParameter, ToolSpec};

/// Default implementation producing provider-neutral JSON Schema.
///
/// Handles param_type → JSON Schema type mapping:
/// - `"string"`, `"url"`, `"html"` → `"string"`
/// - `"number"` → `"number"`
/// - `"integer"` → `"integer"`
/// - `"boolean"` → `"boolean"`
/// - anything else → `"string"`
///
/// Required string parameters get `"minLength": 1`.
pub struct JsonSchemaToolConverter;

impl JsonSchemaToolConverter {
    fn parameter_schema(param: &ToolParameter) -> serde_json::Value {
        let schema_type = match param.param_type.as_str() {
            "number" => "number",
            "integer" => "integer",
            "boolean" => "boolean",
            _ => "string",
        };

        let mut prop = serde_json::Map::new();
        prop.insert("type".to_string(), serde_json::json!(schema_type));
        prop.insert(
            "description".to_string(),
            serde_json::json!(param.description),
        );
        if param.required && schema_type == "string" {
            prop.insert("minLength".to_string(), serde_json::json!(1));
        }
        if param.param_type == "url" {
            prop.insert("format".to_string(), serde_json::json!("uri"));
        }

        serde_json::Value::Object(prop)
    }
}

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        for param in &tool.parameters {
            properties.insert(param.name.clone(), Self::parameter_schema(param));
        }
        let required: Vec<&str> = tool.required_parameters().collect();

        serde_json::json!({
            "name": tool.name,
            "description": tool.description,
            "input_schema": {
                "type": "object",
                "properties": properties,
                "required": required,
            }
        })
    }

    fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value> {
        let mut tools: Vec<&ToolDefinition> = spec.all().collect();
        tools.sort_by_key(|t| &t.name);
        tools.into_iter().map(|t| self.tool_to_schema(t)).collect()
    }
}
