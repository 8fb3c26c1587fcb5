use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use basket_check::api::ApiClient;
use basket_check::checks::{self, CheckGroup};
use basket_check::model::CheckerConfig;

#[derive(Parser)]
#[command(name = "basket-check")]
#[command(about = "Contract checks for the basket-item REST API", long_about = None)]
struct Cli {
    /// Log every HTTP exchange (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the contract checks against a server
    Run(RunArgs),

    /// List the scenarios without running them
    List {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Base URL of the server under test
    #[arg(long, env = "BASKET_CHECK_URL")]
    url: Option<String>,

    /// Domain of the login email (`<user>@<domain>`)
    #[arg(long, env = "BASKET_CHECK_DOMAIN")]
    domain: Option<String>,

    /// Login user (local part of the email)
    #[arg(long)]
    user: Option<String>,

    #[arg(long)]
    password: Option<String>,

    /// JSON config file; flags and env vars override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only run these groups (repeatable)
    #[arg(long = "group", value_enum)]
    groups: Vec<CheckGroup>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Emit the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run(args) => {
            let config = resolve_config(&args)?;
            tracing::info!(base_url = %config.base_url, email = %config.email(), "running checks");
            let api = ApiClient::new(&config)?;
            let report = checks::run_checks(&api, &config, &args.groups);
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).context("serialize report")?
                );
            } else {
                println!("{}", report.render_text());
            }
            Ok(report.success())
        }
        Commands::List { json } => {
            let scenarios = checks::catalogue();
            if json {
                let rows: Vec<serde_json::Value> = scenarios
                    .iter()
                    .map(|s| {
                        serde_json::json!({
                            "name": s.name,
                            "group": s.group,
                            "authenticated": s.is_authenticated(),
                        })
                    })
                    .collect();
                println!(
                    "{}",
                    serde_json::to_string_pretty(&rows).context("serialize scenarios")?
                );
            } else {
                for s in &scenarios {
                    println!("{:<11} {}", s.group, s.name);
                }
            }
            Ok(true)
        }
    }
}

fn resolve_config(args: &RunArgs) -> Result<CheckerConfig> {
    let mut config = match &args.config {
        Some(path) => CheckerConfig::load(path)?,
        None => CheckerConfig::default(),
    };
    if let Some(url) = &args.url {
        config.base_url = url.clone();
    }
    if let Some(domain) = &args.domain {
        config.domain = domain.clone();
    }
    if let Some(user) = &args.user {
        config.user = user.clone();
    }
    if let Some(password) = &args.password {
        config.password = password.clone();
    }
    if let Some(secs) = args.timeout_secs {
        config.timeout_secs = secs;
    }
    let config = config.normalized();
    config.validate()?;
    Ok(config)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "basket_check=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
