use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use formprobe_core::config::Overrides;
use formprobe_core::{contract, fetch, Scenario, SuiteConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "formprobe", about = "End-to-end checks for the registration form page")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run scenarios in fresh browser sessions (all of them by default)
    Run {
        /// Scenario names to run, see `formprobe list`
        scenarios: Vec<Scenario>,

        /// TOML configuration file
        #[arg(short, long, env = "FORMPROBE_CONFIG")]
        config: Option<PathBuf>,

        /// Page under test
        #[arg(long)]
        url: Option<String>,

        /// WebDriver endpoint (chromedriver)
        #[arg(long)]
        webdriver: Option<String>,

        /// Directory for failure screenshots
        #[arg(long)]
        screenshots: Option<PathBuf>,

        /// Explicit-wait timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Show the browser window instead of running headless
        #[arg(long)]
        headed: bool,

        /// Output the suite report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the available scenarios
    List,
    /// Check that the page carries every element id the scenarios use
    Check {
        /// Page URL (defaults to the configured target)
        #[arg(long, conflicts_with = "file")]
        url: Option<String>,

        /// Check a local HTML file instead of fetching (use - for stdin)
        #[arg(long)]
        file: Option<String>,

        /// TOML configuration file
        #[arg(short, long, env = "FORMPROBE_CONFIG")]
        config: Option<PathBuf>,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            scenarios,
            config,
            url,
            webdriver,
            screenshots,
            timeout,
            headed,
            json,
        } => {
            let mut suite = SuiteConfig::load(config.as_deref())?;
            suite.apply_overrides(&Overrides {
                target_url: url,
                webdriver_url: webdriver,
                screenshot_dir: screenshots,
                timeout_secs: timeout,
                headed,
            });
            suite.validate()?;
            tracing::debug!(?suite, "resolved configuration");

            let selected = if scenarios.is_empty() {
                Scenario::ALL.to_vec()
            } else {
                scenarios
            };

            let report = formprobe_core::run_suite(suite, &selected).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.to_compact_string());
            }
            if !report.all_passed() {
                std::process::exit(1);
            }
        }
        Commands::List => {
            for scenario in Scenario::ALL {
                println!("{:<24} {}", scenario.name(), scenario.description());
            }
        }
        Commands::Check {
            url,
            file,
            config,
            json,
        } => {
            let report = match file {
                Some(file) => {
                    let html = if file == "-" {
                        use std::io::Read;
                        let mut buf = String::new();
                        std::io::stdin()
                            .read_to_string(&mut buf)
                            .context("failed to read stdin")?;
                        buf
                    } else {
                        std::fs::read_to_string(&file)
                            .with_context(|| format!("failed to read {}", file))?
                    };
                    contract::check_html(&html, &file)
                }
                None => {
                    let target = match url {
                        Some(url) => url,
                        None => SuiteConfig::load(config.as_deref())?.target_url,
                    };
                    contract::check_url(&target, &fetch::FetchConfig::default()).await?
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.to_compact_string());
            }
            if !report.is_satisfied() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
