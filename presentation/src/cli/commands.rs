//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text: page bodies and extracted text as-is
    #[default]
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for webscraper
#[derive(Parser, Debug)]
#[command(name = "webscraper")]
#[command(author, version, about = "Fetch web pages and extract their visible text")]
#[command(long_about = r#"
webscraper fetches web pages and extracts their visible text. The same two
operations are exposed as the `fetch_webpage` and `extract_content` tools
for agent hosts.

Configuration files are loaded from (in priority order):
1. WEBSCRAPER_* environment variables (e.g. WEBSCRAPER_FETCH__USER_AGENT)
2. --config <path>         Explicit config file
3. ./webscraper.toml       Project-level config
4. <platform config directory>/webscraper/config.toml   Global config

Example:
  webscraper fetch https://example.com
  webscraper scrape https://example.com --timeout 10
  curl -s https://example.com | webscraper extract
  webscraper call extract_content '{"html": "<p>Hello</p>"}'
"#)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Omitted only together with --show-config
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long, global = true)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch a URL and print the response body
    Fetch {
        /// URL to fetch (http or https)
        url: String,

        /// User-Agent header to send
        #[arg(long, value_name = "UA")]
        user_agent: Option<String>,

        /// Deadline for the whole request
        #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,
    },

    /// Print the visible text of an HTML document
    Extract {
        /// HTML file to read (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Fetch a URL and print its visible text
    Scrape {
        /// URL to fetch (http or https)
        url: String,

        /// User-Agent header to send
        #[arg(long, value_name = "UA")]
        user_agent: Option<String>,

        /// Deadline for the whole request
        #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,
    },

    /// List the tools offered to agent hosts
    Tools,

    /// Invoke a tool by name with JSON arguments
    Call {
        /// Tool name (e.g. fetch_webpage)
        tool: String,

        /// Arguments as a JSON object
        #[arg(value_name = "JSON_ARGS", default_value = "{}")]
        args: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_fetch() {
        let cli = Cli::try_parse_from([
            "webscraper",
            "fetch",
            "https://example.com",
            "--user-agent",
            "Bot/1.0",
            "--timeout",
            "5",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Some(Command::Fetch {
                url: "https://example.com".to_string(),
                user_agent: Some("Bot/1.0".to_string()),
                timeout: Some(5),
            })
        );
        assert_eq!(cli.output, OutputFormat::Text);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result =
            Cli::try_parse_from(["webscraper", "scrape", "https://example.com", "--timeout", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["webscraper", "tools", "--output", "json", "-vv", "--no-config"])
                .unwrap();

        assert_eq!(cli.command, Some(Command::Tools));
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_config);
    }

    #[test]
    fn test_parse_extract_stdin() {
        let cli = Cli::try_parse_from(["webscraper", "extract"]).unwrap();
        assert_eq!(cli.command, Some(Command::Extract { file: None }));
    }

    #[test]
    fn test_parse_call_defaults_to_empty_args() {
        let cli = Cli::try_parse_from(["webscraper", "call", "fetch_webpage"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Call {
                tool: "fetch_webpage".to_string(),
                args: "{}".to_string(),
            })
        );
    }

    #[test]
    fn test_show_config_without_subcommand() {
        let cli = Cli::try_parse_from(["webscraper", "--show-config"]).unwrap();
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }
}
