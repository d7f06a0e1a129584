//! CLI entrypoint for webscraper
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use webscraper_application::{
    ContentExtractorPort, PageFetcherPort, ScrapePageInput, ScrapePageUseCase, ToolExecutorPort,
    ToolSchemaPort,
};
use webscraper_domain::tool::ToolCall;
use webscraper_domain::web::{ExtractRequest, FetchRequest};
use webscraper_infrastructure::{
    ConfigLoader, FileConfig, HtmlContentExtractor, JsonSchemaToolConverter, ReqwestPageFetcher,
    ToolRegistry, WebScraperProvider,
};
use webscraper_presentation::{Cli, Command, ConsoleFormatter, OutputFormatter};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; stdout is reserved for results
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;
    let formatter = ConsoleFormatter::new(cli.output);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(ExitCode::FAILURE);
    };

    // Ctrl-C cancels whatever is in flight
    let cancellation = CancellationToken::new();
    let signal_token = cancellation.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupted, cancelling");
            signal_token.cancel();
        }
    });

    // === Dependency Injection ===
    let fetcher: Arc<dyn PageFetcherPort> =
        Arc::new(ReqwestPageFetcher::from_config(&config.fetch)?);
    let extractor: Arc<dyn ContentExtractorPort> = Arc::new(HtmlContentExtractor::new());

    match command {
        Command::Fetch {
            url,
            user_agent,
            timeout,
        } => {
            let mut request = FetchRequest::parse(&url)?
                .with_user_agent(config.fetch.resolve_user_agent(user_agent.as_deref()));
            if let Some(secs) = timeout {
                request = request.with_timeout(Duration::from_secs(secs));
            }

            let result = fetcher.fetch(&request, &cancellation).await?;
            println!("{}", formatter.format_page(request.url().as_str(), &result.into_body()));
        }

        Command::Extract { file } => {
            let html = read_html(file.as_deref()).await?;
            let result = extractor.extract(&ExtractRequest::new(html))?;
            println!("{}", formatter.format_text(&result.into_text()));
        }

        Command::Scrape {
            url,
            user_agent,
            timeout,
        } => {
            let mut input = ScrapePageInput::new(url)
                .with_user_agent(config.fetch.resolve_user_agent(user_agent.as_deref()));
            if let Some(secs) = timeout {
                input = input.with_timeout(Duration::from_secs(secs));
            }

            let use_case = ScrapePageUseCase::new(fetcher, extractor);
            let output = use_case.execute(input, &cancellation).await?;
            println!("{}", formatter.format_scrape(&output));
        }

        Command::Tools => {
            let registry = build_registry(fetcher, extractor, &config, &cancellation).await?;
            debug!(tools = ?registry.available_tools(), "Listing tools");
            let schemas = JsonSchemaToolConverter.all_tools_schema(registry.tool_spec());
            println!("{}", formatter.format_tools(&schemas));
        }

        Command::Call { tool, args } => {
            let arguments: serde_json::Value =
                serde_json::from_str(&args).context("JSON_ARGS is not valid JSON")?;
            let call = ToolCall::from_json(tool, arguments).map_err(|e| anyhow!(e))?;

            let registry = build_registry(fetcher, extractor, &config, &cancellation).await?;
            let result = registry
                .execute_with_cancellation(&call, &cancellation)
                .await;
            println!("{}", formatter.format_tool_result(&result));
            if !result.is_success() {
                if !registry.has_tool(&call.tool_name) {
                    eprintln!("Available tools: {}", registry.available_tools().join(", "));
                }
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Register the web scraper tools with a reference host and discover them
async fn build_registry(
    fetcher: Arc<dyn PageFetcherPort>,
    extractor: Arc<dyn ContentExtractorPort>,
    config: &FileConfig,
    cancellation: &CancellationToken,
) -> Result<ToolRegistry> {
    let provider = WebScraperProvider::new(fetcher, extractor)
        .with_user_agent(config.fetch.user_agent.as_str())
        .with_cancellation(cancellation.clone());
    let mut registry = ToolRegistry::new().register(provider);
    registry.discover().await.map_err(|e| anyhow!(e))?;
    debug!(stats = ?registry.stats(), "Tool registry ready");
    Ok(registry)
}

/// Load and validate configuration according to the global flags
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            warn!(%issue, "Invalid configuration");
        }
        bail!(
            "Invalid configuration: {}",
            issues
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join("; ")
        );
    }

    debug!(?config, "Configuration loaded");
    Ok(config)
}

/// Read an HTML document from a file, or from stdin when no file is given
async fn read_html(file: Option<&Path>) -> Result<String> {
    let bytes = match file {
        Some(path) => tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buf)
                .await
                .context("Failed to read HTML from stdin")?;
            buf
        }
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
