//! Tool domain entities

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Definition of a tool that a host can invoke
///
/// Definitions are declared statically by each handler; there is no
/// reflection-based schema compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "fetch_webpage")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Parameter specifications
    pub parameters: Vec<ToolParameter>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
    /// Parameter type hint (e.g., "string", "url", "number")
    pub param_type: String,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    /// Look up a parameter by name
    pub fn parameter(&self, name: &str) -> Option<&ToolParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Names of all required parameters, in declaration order
    pub fn required_parameters(&self) -> impl Iterator<Item = &str> {
        self.parameters
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.as_str())
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: "string".to_string(),
        }
    }

    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = param_type.into();
        self
    }

    /// Whether the value of this parameter must be a JSON string
    pub fn is_string_like(&self) -> bool {
        matches!(self.param_type.as_str(), "string" | "url" | "html")
    }
}

/// Specification of the tools available to a host
#[derive(Debug, Clone, Default)]
pub struct ToolSpec {
    tools: HashMap<String, ToolDefinition>,
}

impl ToolSpec {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    pub fn register(mut self, tool: ToolDefinition) -> Self {
        self.tools.insert(tool.name.clone(), tool);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    pub fn all(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// A call to a tool with arguments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to call
    pub tool_name: String,
    /// Arguments passed to the tool
    #[serde(default)]
    pub arguments: HashMap<String, serde_json::Value>,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: HashMap::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Build a call from a JSON object of arguments.
    ///
    /// Returns an error message when `arguments` is not an object.
    pub fn from_json(
        tool_name: impl Into<String>,
        arguments: serde_json::Value,
    ) -> Result<Self, String> {
        match arguments {
            serde_json::Value::Object(map) => Ok(Self {
                tool_name: tool_name.into(),
                arguments: map.into_iter().collect(),
            }),
            other => Err(format!("Tool arguments must be a JSON object, got: {}", other)),
        }
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }

    /// Get a required string argument or return an error message
    pub fn require_string(&self, key: &str) -> Result<&str, String> {
        self.get_string(key)
            .ok_or_else(|| format!("Missing required argument: {}", key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_definition() {
        let tool = ToolDefinition::new("fetch_webpage", "Fetches the content of a webpage.")
            .with_parameter(ToolParameter::new("url", "The URL to fetch", true).with_type("url"));

        assert_eq!(tool.name, "fetch_webpage");
        assert_eq!(tool.parameters.len(), 1);
        assert_eq!(tool.parameters[0].name, "url");
        assert!(tool.parameter("url").unwrap().is_string_like());
        assert!(tool.parameter("missing").is_none());
    }

    #[test]
    fn test_required_parameters() {
        let tool = ToolDefinition::new("t", "test")
            .with_parameter(ToolParameter::new("a", "A", true))
            .with_parameter(ToolParameter::new("b", "B", false).with_type("number"))
            .with_parameter(ToolParameter::new("c", "C", true));

        let required: Vec<_> = tool.required_parameters().collect();
        assert_eq!(required, vec!["a", "c"]);
        assert!(!tool.parameter("b").unwrap().is_string_like());
    }

    #[test]
    fn test_tool_spec() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("fetch_webpage", "Fetch"))
            .register(ToolDefinition::new("extract_content", "Extract"));

        assert!(spec.get("fetch_webpage").is_some());
        assert!(spec.get("extract_content").is_some());
        assert!(spec.get("unknown").is_none());
        assert_eq!(spec.len(), 2);
        assert!(!spec.is_empty());
    }

    #[test]
    fn test_tool_spec_register_replaces_same_name() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("fetch_webpage", "old"))
            .register(ToolDefinition::new("fetch_webpage", "new"));

        assert_eq!(spec.len(), 1);
        assert_eq!(spec.get("fetch_webpage").unwrap().description, "new");
    }

    #[test]
    fn test_tool_call() {
        let call = ToolCall::new("fetch_webpage").with_arg("url", "https://example.com");

        assert_eq!(call.tool_name, "fetch_webpage");
        assert_eq!(call.get_string("url"), Some("https://example.com"));
        assert_eq!(call.require_string("url").unwrap(), "https://example.com");
        assert!(call.require_string("missing").is_err());
    }

    #[test]
    fn test_tool_call_from_json() {
        let call =
            ToolCall::from_json("extract_content", serde_json::json!({"html": "<p>x</p>"})).unwrap();
        assert_eq!(call.get_string("html"), Some("<p>x</p>"));

        let err = ToolCall::from_json("extract_content", serde_json::json!(["html"])).unwrap_err();
        assert!(err.contains("JSON object"));
    }
}
