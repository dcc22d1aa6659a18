mod cli;

use std::collections::BTreeSet;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use compass::advisor::handlers;
use compass::config::Config;
use compass::roadmap::resources::resource_link;
use compass::{AppError, AppState, UserProfile};

use crate::cli::{Cli, Command};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(path) = &cli.catalog {
        config.catalog_path = Some(path.clone());
    }

    // Logs go to stderr; stdout carries JSON output only.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Career Compass v{}", env!("CARGO_PKG_VERSION"));

    match run(cli.command, config) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            print_json(&err.to_json())?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run(command: Command, config: Config) -> Result<(), AppError> {
    let load_state = move || AppState::from_config(config);

    match command {
        Command::Recommend { profile, top } => {
            let mut state = load_state()?;
            if let Some(top) = top.filter(|n| *n > 0) {
                state.config.top_roles = top;
            }
            let profile: UserProfile = read_json(&profile)?;
            emit(&handlers::recommend(&state, &profile))
        }
        Command::Score { profile, role } => {
            let state = load_state()?;
            let profile: UserProfile = read_json(&profile)?;
            emit(&handlers::score_role(&state, &profile, &role)?)
        }
        Command::Roadmap { role } => emit(&handlers::roadmap(&load_state()?, &role)?),
        Command::Dashboard { profiles } => {
            let state = load_state()?;
            let students: Vec<UserProfile> = read_json(&profiles)?;
            emit(&handlers::dashboard(&state, &students))
        }
        Command::Progress { role, completed } => {
            let state = load_state()?;
            let completed: BTreeSet<u32> = completed.into_iter().collect();
            emit(&handlers::progress(&state, &role, &completed)?)
        }
        // No catalog needed below
        Command::Resource { topic } => {
            emit(&json!({ "topic": topic, "url": resource_link(&topic) }))
        }
        Command::Specializations => {
            emit(&json!({ "specializations": handlers::specializations() }))
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn emit<T: Serialize>(value: &T) -> Result<(), AppError> {
    print_json(value).map_err(AppError::Internal)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    std::io::Write::write_all(&mut out, b"\n")?;
    Ok(())
}
