//! Project persistence: named page documents in a single JSON file.
//!
//! The store is deliberately simple: every operation reads the whole file,
//! mutates the list in memory, and writes it back. Saving upserts by project
//! name, so "Save" in an editor never silently forks a project.

use chrono::{DateTime, Utc};
use pagecraft_model::PageDocument;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed project file: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("no project with id {0}")]
    NotFound(String),

    #[error("project name must not be empty")]
    EmptyName,
}

/// One stored project: a named document plus bookkeeping timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedProject {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub config: PageDocument,
}

/// Handle on a project file. Creating the handle does not touch the disk;
/// a missing file reads as an empty store.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    path: PathBuf,
}

impl ProjectStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All projects in storage order (oldest first).
    pub fn list(&self) -> Result<Vec<SavedProject>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save `config` under `name`. An existing project with the same name is
    /// updated in place; otherwise a new entry is appended. Returns the
    /// stored record.
    pub fn save(&self, name: &str, config: &PageDocument) -> Result<SavedProject, StorageError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StorageError::EmptyName);
        }

        let mut projects = self.list()?;
        let now = Utc::now();

        let saved = match projects.iter_mut().find(|p| p.name == name) {
            Some(existing) => {
                existing.config = config.clone();
                existing.updated_at = now;
                tracing::debug!(id = %existing.id, name, "project updated");
                existing.clone()
            }
            None => {
                let project = SavedProject {
                    id: format!("project-{}", now.timestamp_millis()),
                    name: name.to_string(),
                    created_at: now,
                    updated_at: now,
                    config: config.clone(),
                };
                tracing::debug!(id = %project.id, name, "project created");
                projects.push(project.clone());
                project
            }
        };

        self.write(&projects)?;
        Ok(saved)
    }

    pub fn load(&self, id: &str) -> Result<SavedProject, StorageError> {
        self.list()?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }

    pub fn delete(&self, id: &str) -> Result<(), StorageError> {
        let mut projects = self.list()?;
        let before = projects.len();
        projects.retain(|p| p.id != id);
        if projects.len() == before {
            return Err(StorageError::NotFound(id.to_string()));
        }
        self.write(&projects)?;
        tracing::debug!(id, "project deleted");
        Ok(())
    }

    fn write(&self, projects: &[SavedProject]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(projects)?)?;
        Ok(())
    }
}
