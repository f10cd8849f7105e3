use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;

use ghprofile::config::Config;
use ghprofile::engine::{FetchState, ProfileEngine, ProfileState, SortOption};
use ghprofile::gateway::GitHubGateway;
use ghprofile::logging::{init_tracing, LogTarget};
use ghprofile::report::render_plain;
use ghprofile::repository::NetworkRepository;

/// Look up a GitHub account and its public repositories.
#[derive(Debug, Parser)]
#[command(name = "ghprofile", version)]
struct Cli {
    /// Account to look up on start
    user: Option<String>,

    /// Config file (default: ~/.config/ghprofile/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Repository ordering
    #[arg(long, value_enum)]
    sort: Option<SortOption>,

    /// Start with the dark theme
    #[arg(long)]
    dark: bool,

    /// API base URL, overriding the config file
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Print the result as text and exit instead of opening the terminal UI
    #[arg(long)]
    plain: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    init_tracing(if cli.plain {
        LogTarget::Stderr
    } else {
        LogTarget::File
    });

    let config = load_config(&cli)?;
    tracing::debug!(base_url = %config.api.base_url, "Configuration loaded");

    let gateway = GitHubGateway::new(&config.api)?;
    let repository = Arc::new(NetworkRepository::new(gateway));
    let initial = ProfileState::with_preferences(config.display.dark_theme, config.display.sort);
    let engine = ProfileEngine::with_state(repository, initial);

    let user = cli.user.clone().or_else(|| config.defaults.initial_user.clone());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    if cli.plain {
        let Some(user) = user.filter(|u| !u.trim().is_empty()) else {
            bail!("--plain needs a USER argument or defaults.initial_user in the config");
        };
        engine.update_query(user.as_str());
        runtime.block_on(engine.search());
        let state = engine.snapshot();
        print!("{}", render_plain(&state));
        return Ok(match state.fetch {
            FetchState::Error(_) => ExitCode::FAILURE,
            _ => ExitCode::SUCCESS,
        });
    }

    ghprofile::ui::runtime::run(engine, runtime.handle(), user)
        .context("Terminal UI failed")?;
    Ok(ExitCode::SUCCESS)
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }
    if let Some(sort) = cli.sort {
        config.display.sort = sort;
    }
    if cli.dark {
        config.display.dark_theme = true;
    }

    // Only the merged result has to be valid.
    config.validate()?;
    Ok(config)
}
