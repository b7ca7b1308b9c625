//! Persistence
//!
//! All tracked data lives in a single JSON document on disk: entries,
//! exercises, biometrics, goals, and profile, plus a `lastUpdated` stamp.
//! The whole document is read on startup and rewritten on save.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Biometrics, ExerciseEntry, FoodEntry, Goals, UserProfile};

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

// ============================================================================
// State document
// ============================================================================

/// The persisted application state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppState {
    pub entries: Vec<FoodEntry>,
    pub exercises: Vec<ExerciseEntry>,
    pub biometrics: Biometrics,
    pub goals: Goals,
    pub profile: UserProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl AppState {
    /// Next entry id, derived from the clock
    pub fn next_id(&self, now: DateTime<Utc>) -> i64 {
        let stamp = now.timestamp_millis();
        let max_seen = self
            .entries
            .iter()
            .map(|e| e.id)
            .chain(self.exercises.iter().map(|e| e.id))
            .max()
            .unwrap_or(0);
        stamp.max(max_seen + 1)
    }
}

// ============================================================================
// Store
// ============================================================================

/// JSON-file backed store
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load state from disk; a missing file yields the default state
    pub fn load(&self) -> StoreResult<AppState> {
        if !self.path.exists() {
            debug!("No data file at {}, starting fresh", self.path.display());
            return Ok(AppState::default());
        }
        let raw = fs::read_to_string(&self.path)?;
        let state = serde_json::from_str(&raw)?;
        debug!("Loaded state from {}", self.path.display());
        Ok(state)
    }

    /// Persist state, stamping `lastUpdated` from the injected clock
    pub fn save(&self, state: &mut AppState, now: DateTime<Utc>) -> StoreResult<()> {
        state.last_updated = Some(now.to_rfc3339_opts(SecondsFormat::Millis, true));
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, json)?;
        info!("Saved state to {}", self.path.display());
        Ok(())
    }
}
