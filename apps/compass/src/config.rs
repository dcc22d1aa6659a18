use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_TOP_ROLES: usize = 5;
const DEFAULT_DASHBOARD_TOP_ROLES: usize = 3;

/// Application configuration loaded from environment variables.
/// Every variable is optional; invalid numbers are reported at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON catalog replacing the built-in roles.
    pub catalog_path: Option<PathBuf>,
    /// Length of a student's recommendation list.
    pub top_roles: usize,
    /// Roles listed per student on a dashboard.
    pub dashboard_top_roles: usize,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            catalog_path: None,
            top_roles: DEFAULT_TOP_ROLES,
            dashboard_top_roles: DEFAULT_DASHBOARD_TOP_ROLES,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            catalog_path: lookup("CATALOG_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            top_roles: parse_count(&lookup, "TOP_ROLES", DEFAULT_TOP_ROLES)?,
            dashboard_top_roles: parse_count(
                &lookup,
                "DASHBOARD_TOP_ROLES",
                DEFAULT_DASHBOARD_TOP_ROLES,
            )?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_count<F>(lookup: &F, key: &str, default: usize) -> Result<usize>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => {
            let value = raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("{key} must be a positive integer, got '{raw}'"))?;
            anyhow::ensure!(value > 0, "{key} must be greater than zero");
            Ok(value)
        }
        None => Ok(default),
    }
}
