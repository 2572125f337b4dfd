// ABOUTME: Main entry point for the imgsearch CLI application
// ABOUTME: Wires config, flags, and the SDK client together and dispatches subcommands

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use imgsearch_cli::cli::{Cli, Commands};
use imgsearch_cli::cli_output::CliOutput;
use imgsearch_cli::commands::{self, BrowserOpener, SearchOptions};
use imgsearch_cli::completions::generate_completions;
use imgsearch_cli::config::Config;
use imgsearch_cli::constants::env_vars;
use imgsearch_cli::output::{JsonFormatter, OutputFormat, TableFormatter};
use imgsearch_sdk::constants::{http, timeouts, urls};
use imgsearch_sdk::SearchClient;
use std::env;
use std::time::Duration;

fn formatter(json: bool, pretty: bool, use_color: bool) -> Box<dyn OutputFormat> {
    if json {
        Box::new(JsonFormatter::new(pretty))
    } else {
        Box::new(TableFormatter::new(use_color))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    // Determine if color should be used
    let use_color = !cli.no_color
        && env::var(env_vars::NO_COLOR).is_err()
        && env::var("TERM").unwrap_or_default() != "dumb";
    let output = CliOutput::with_color(use_color && CliOutput::new().use_color());

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = Cli::command();
        generate_completions(shell, &mut cmd, &mut std::io::stdout());
        return Ok(());
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            output.error(&format!("{:#}", e));
            output.hint("Fix or remove the offending config file");
            std::process::exit(1);
        }
    };
    let table = config.signature_table()?;

    match cli.command {
        Commands::Classify {
            files,
            json,
            pretty,
        } => {
            let reports = commands::classify_files(&table, &files);
            println!("{}", formatter(json, pretty, use_color).format_classified(&reports)?);

            if reports.iter().any(|report| report.error.is_some()) {
                std::process::exit(1);
            }
        }
        Commands::Search {
            files,
            no_open,
            force,
            timeout,
            upload_url,
            json,
            pretty,
        } => {
            let upload_url = upload_url
                .or_else(|| config.resolved_upload_url())
                .unwrap_or_else(|| urls::UPLOAD_URL.to_string());
            let timeout = timeout
                .map(Duration::from_secs)
                .or_else(|| config.timeout_duration())
                .unwrap_or(timeouts::HTTP_REQUEST_TIMEOUT);
            let user_agent = config
                .user_agent
                .clone()
                .unwrap_or_else(|| http::USER_AGENT.to_string());

            let client = SearchClient::builder()
                .upload_url(upload_url)
                .timeout(timeout)
                .user_agent(user_agent)
                .build()
                .context("Failed to create search client")?;

            let options = SearchOptions {
                force,
                open: !no_open && config.open_browser(),
            };
            let reports = commands::search_files(
                &client,
                &table,
                &files,
                options,
                &BrowserOpener,
                &output,
            )
            .await;

            println!("{}", formatter(json, pretty, use_color).format_searches(&reports)?);

            if reports.iter().any(|report| report.is_failure()) {
                std::process::exit(1);
            }
        }
        Commands::Signatures { json, pretty } => {
            println!("{}", formatter(json, pretty, use_color).format_signatures(&table)?);
        }
        Commands::Completions { .. } => unreachable!("handled before loading config"),
    }

    Ok(())
}
