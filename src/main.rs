use std::io::{self, BufRead};
use std::path::PathBuf;

use eyre::{Result, bail};
use log::{error, info};

mod cli;

use cli::{Cli, OutputFormat};
use urlsum::config::{self, Config};
use urlsum::pipeline::Pipeline;
use urlsum::summarize::GroqClient;
use urlsum::transcript::CaptionClient;
use urlsum::webpage::{FetchPolicy, PageClient};

const DEFAULT_MODEL: &str = "mistral-saba-24b";
const DEFAULT_LANG: &str = "en";

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("urlsum.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("urlsum")
        .join("logs")
}

fn build_after_help() -> String {
    let key_line = if std::env::var(config::API_KEY_VAR).is_ok() {
        format!("  \x1b[32m✅\x1b[0m {}     (set)", config::API_KEY_VAR)
    } else {
        format!(
            "  \x1b[31m❌\x1b[0m {}     (not set — required for summarization)",
            config::API_KEY_VAR
        )
    };

    let log_path = log_dir().join("urlsum.log");

    format!(
        "\nREQUIRED ENVIRONMENT:\n{key_line}\n\nLogs are written to: {}",
        log_path.display()
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let after_help = build_after_help();
    let cmd = <Cli as clap::CommandFactory>::command().after_help(after_help);
    let matches = cmd.get_matches();
    let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches)?;

    // Load config file (non-fatal if missing/invalid)
    let config = Config::load().unwrap_or_default();

    if cli.verbose {
        let config_path = config::config_path();
        if config_path.exists() {
            eprintln!("Config: {}", config_path.display());
        }
    }

    // CLI flags take priority over config file defaults
    let model = cli
        .model
        .clone()
        .or_else(|| config.default_model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());
    let lang = cli
        .lang
        .clone()
        .or_else(|| config.default_lang.clone())
        .unwrap_or_else(|| DEFAULT_LANG.to_string());

    let api_key = config::groq_api_key()?;

    let client = reqwest::Client::new();

    let mut policy = FetchPolicy::default();
    if let Some(ref user_agent) = config.user_agent {
        policy.user_agent = user_agent.clone();
    }

    let pipeline = Pipeline::new(
        CaptionClient::new(client.clone(), lang),
        PageClient::new(&policy)?,
        GroqClient::new(client, api_key, model.clone()),
    );

    // Collect URLs: from arg or stdin
    let urls = if let Some(ref url) = cli.url {
        vec![url.clone()]
    } else {
        let stdin = io::stdin();
        stdin.lock().lines().collect::<Result<Vec<_>, _>>()?
    };

    if urls.iter().all(|u| u.trim().is_empty()) {
        bail!("no URL provided\n\nUsage: urlsum <URL>\n       echo <URL> | urlsum");
    }

    let mut failures = 0usize;

    for url in &urls {
        let url = url.trim();
        if url.is_empty() {
            continue;
        }

        match pipeline.run(url).await {
            Ok(report) => {
                if cli.verbose {
                    eprintln!("URL: {}\nKind: {}\nModel: {model}", report.url, report.kind);
                }

                let rendered = match cli.format {
                    OutputFormat::Text => urlsum::output::render_text(&report),
                    OutputFormat::Json => urlsum::output::render_json(&report),
                };

                if let Some(ref path) = cli.output {
                    std::fs::write(path, &rendered)?;
                    if cli.verbose {
                        eprintln!("Output written to: {}", path.display());
                    }
                } else {
                    println!("{rendered}");
                }
            }
            Err(e) => {
                error!("Run failed for {url}: {e}");
                eprintln!("error: {e}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }

    Ok(())
}
