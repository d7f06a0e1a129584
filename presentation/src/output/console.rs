//! Console output formatter

use crate::cli::commands::OutputFormat;
use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use serde::Serialize;
use webscraper_application::ScrapePageOutput;
use webscraper_domain::tool::ToolResult;

/// Formats command results for console display
///
/// Page bodies and extracted text are printed verbatim in text mode so the
/// output can be piped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleFormatter {
    format: OutputFormat,
}

impl ConsoleFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Pretty JSON
    fn json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn section_header(title: &str) -> String {
        format!("{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn format_tool(schema: &serde_json::Value) -> String {
        let name = schema["name"].as_str().unwrap_or_default();
        let description = schema["description"].as_str().unwrap_or_default();
        let mut output = format!("{}  {}\n", name.yellow().bold(), description);

        let required: Vec<&str> = schema["input_schema"]["required"]
            .as_array()
            .map(|r| r.iter().filter_map(|v| v.as_str()).collect())
            .unwrap_or_default();

        if let Some(properties) = schema["input_schema"]["properties"].as_object() {
            for (param, prop) in properties {
                let kind = prop["type"].as_str().unwrap_or("string");
                let flag = if required.contains(&param.as_str()) {
                    "required"
                } else {
                    "optional"
                };
                output.push_str(&format!(
                    "    {} ({}, {})  {}\n",
                    param.bold(),
                    kind,
                    flag,
                    prop["description"].as_str().unwrap_or_default()
                ));
            }
        }

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_page(&self, url: &str, body: &str) -> String {
        if self.is_json() {
            return Self::json(&serde_json::json!({
                "url": url,
                "bytes": body.len(),
                "body": body,
            }));
        }
        body.to_string()
    }

    fn format_text(&self, text: &str) -> String {
        if self.is_json() {
            return Self::json(&serde_json::json!({ "text": text }));
        }
        text.to_string()
    }

    fn format_scrape(&self, output: &ScrapePageOutput) -> String {
        if self.is_json() {
            return Self::json(output);
        }

        let mut text = String::new();
        text.push_str(&format!(
            "{} {} {}\n\n",
            "Scraped:".cyan().bold(),
            output.url,
            format!("({} bytes of HTML)", output.html_bytes).dimmed()
        ));
        text.push_str(&output.text);
        text
    }

    fn format_tools(&self, schemas: &[serde_json::Value]) -> String {
        if self.is_json() {
            return Self::json(schemas);
        }

        let mut output = Self::section_header("Available tools");
        for schema in schemas {
            output.push('\n');
            output.push_str(&Self::format_tool(schema));
        }
        output
    }

    fn format_tool_result(&self, result: &ToolResult) -> String {
        if self.is_json() {
            return Self::json(result);
        }

        match (result.output(), result.error()) {
            (Some(output), _) => output.to_string(),
            (None, Some(error)) => format!("{} {}", "Error:".red().bold(), error),
            (None, None) => format!("{} {} produced no output", "Error:".red().bold(), result.tool_name),
        }
    }
}
