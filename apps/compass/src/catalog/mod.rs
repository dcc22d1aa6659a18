//! Role catalog — the immutable set of career roles and their roadmaps.
//!
//! Loaded once at startup (built-in seed or a JSON file) and shared read-only.

mod seed;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::role::RoleDefinition;
use crate::roadmap::Roadmap;

/// One role plus its learning roadmap.
///
/// In JSON the role fields sit at the top level next to an optional `roadmap`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub role: RoleDefinition,
    #[serde(default)]
    pub roadmap: Roadmap,
}

#[derive(Debug, Clone)]
pub struct RoleCatalog {
    entries: Vec<CatalogEntry>,
}

impl RoleCatalog {
    /// The built-in five-role catalog.
    pub fn seed() -> Self {
        Self::assemble(seed::seed_entries())
    }

    /// Builds a catalog from caller-supplied entries.
    ///
    /// Rejects empty or duplicate role names. Phase numbers, topic orders and
    /// topic ids are reassigned from position.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self, AppError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            let name = entry.role.role_name.trim();
            if name.is_empty() {
                return Err(AppError::Validation(
                    "Role name must not be empty".to_string(),
                ));
            }
            if !seen.insert(entry.role.role_name.as_str()) {
                return Err(AppError::Validation(format!(
                    "Duplicate role name '{}'",
                    entry.role.role_name
                )));
            }
        }
        Ok(Self::assemble(entries))
    }

    /// Reads a JSON array of catalog entries.
    pub fn from_json_file(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let entries: Vec<CatalogEntry> =
            serde_json::from_str(&raw).map_err(|source| AppError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_entries(entries)
    }

    /// Loads from `path` when given, otherwise falls back to the built-in seed.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let catalog = match path {
            Some(path) => {
                info!("Loading role catalog from {}", path.display());
                Self::from_json_file(path)?
            }
            None => {
                info!("Using built-in role catalog");
                Self::seed()
            }
        };
        info!(
            "Role catalog ready: {} roles, {} roadmap topics",
            catalog.len(),
            catalog.entries.iter().map(|e| e.roadmap.topic_count()).sum::<usize>()
        );
        Ok(catalog)
    }

    fn assemble(mut entries: Vec<CatalogEntry>) -> Self {
        let mut next_id = 1;
        for entry in &mut entries {
            next_id = entry.roadmap.assign_ids(next_id);
            debug!(
                role = %entry.role.role_name,
                phases = entry.roadmap.phases.len(),
                "catalog entry assembled"
            );
        }
        Self { entries }
    }

    /// Roles in catalog order.
    pub fn roles(&self) -> impl Iterator<Item = &RoleDefinition> {
        self.entries.iter().map(|e| &e.role)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Exact, case-sensitive lookup by role name.
    pub fn find(&self, role_name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.role.role_name == role_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
