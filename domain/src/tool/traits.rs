//! Tool domain traits
//!
//! Contains pure domain logic traits for tool validation.
//! The async ToolExecutorPort is defined in the application layer (ports).

use super::entities::{ToolCall, ToolDefinition};

/// Validator for tool calls
///
/// This is a pure domain trait that validates tool calls
/// against their definitions without any I/O operations.
pub trait ToolValidator {
    /// Validate a tool call against its definition
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String>;
}

/// Default implementation of ToolValidator
///
/// Required parameters must be present, string-typed parameters must hold
/// JSON strings, and required strings must not be empty.
#[derive(Debug, Clone, Default)]
pub struct DefaultToolValidator;

impl ToolValidator for DefaultToolValidator {
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String> {
        for param in &definition.parameters {
            let value = match call.arguments.get(&param.name) {
                Some(v) => v,
                None if param.required => {
                    return Err(format!(
                        "Missing required parameter '{}' for tool '{}'",
                        param.name, definition.name
                    ));
                }
                None => continue,
            };

            if param.is_string_like() {
                let Some(s) = value.as_str() else {
                    return Err(format!(
                        "Parameter '{}' for tool '{}' must be a string",
                        param.name, definition.name
                    ));
                };
                if param.required && s.is_empty() {
                    return Err(format!(
                        "Parameter '{}' for tool '{}' must not be empty",
                        param.name, definition.name
                    ));
                }
            }
        }

        for arg_name in call.arguments.keys() {
            if definition.parameter(arg_name).is_none() {
                return Err(format!(
                    "Unknown parameter '{}' for tool '{}'",
                    arg_name, definition.name
                ));
            }
        }

        Ok(())
    }
}
