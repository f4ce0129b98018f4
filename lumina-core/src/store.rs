//! Plan Store: the durable mirror of application state
//!
//! State lives in two independent JSON files under the store's data
//! directory: `plans.json` (the full plan collection) and `settings.json`
//! (the settings record). There is no versioning or migration scheme, and
//! no partial-update API: callers always submit the full next-state value,
//! which is written synchronously before the call returns.
//!
//! A missing or unparseable file reads as empty/default state. Parse
//! failures are logged but never surfaced to the caller.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::plan::StudyPlan;
use crate::settings::UserSettings;
use crate::{Error, Result};

const PLANS_FILE: &str = "plans.json";
const SETTINGS_FILE: &str = "settings.json";

/// Owns the durable mirror of the plan collection and user settings
#[derive(Debug, Clone)]
pub struct PlanStore {
    data_dir: PathBuf,
}

impl PlanStore {
    /// Create a store rooted at the given data directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Create a store at the platform default location
    ///
    /// Returns `<data_dir>/lumina` (e.g. `~/.local/share/lumina` on Linux)
    pub fn open_default() -> Result<Self> {
        let base = dirs::data_dir()
            .ok_or_else(|| Error::Config("Could not determine data directory".to_string()))?;
        Ok(Self::new(base.join("lumina")))
    }

    /// The directory this store reads and writes
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the plan collection file
    pub fn plans_path(&self) -> PathBuf {
        self.data_dir.join(PLANS_FILE)
    }

    /// Path of the settings file
    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE)
    }

    /// Load the persisted plan collection
    ///
    /// Returns an empty collection when no state exists or the stored
    /// value fails to parse.
    pub fn load_plans(&self) -> Vec<StudyPlan> {
        self.read_or_default(&self.plans_path())
    }

    /// Overwrite the entire plan collection and its durable mirror
    ///
    /// Used both for inserting a new plan (callers prepend and resubmit)
    /// and for bulk clearing (empty slice).
    pub fn replace_all(&self, plans: &[StudyPlan]) -> Result<()> {
        self.write(&self.plans_path(), &plans)?;
        debug!(count = plans.len(), "Saved plan collection");
        Ok(())
    }

    /// Load persisted settings, or defaults when absent or unparseable
    pub fn load_settings(&self) -> UserSettings {
        self.read_or_default(&self.settings_path())
    }

    /// Overwrite the settings record and its durable mirror
    pub fn save_settings(&self, settings: &UserSettings) -> Result<()> {
        self.write(&self.settings_path(), settings)?;
        debug!("Saved settings");
        Ok(())
    }

    fn read_or_default<T: DeserializeOwned + Default>(&self, path: &Path) -> T {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!(path = %path.display(), error = %err, "Failed to read stored state");
                }
                return T::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(value) => value,
            Err(err) => {
                // Malformed state degrades to empty rather than erroring.
                warn!(path = %path.display(), error = %err, "Stored state is malformed, starting empty");
                T::default()
            }
        }
    }

    fn write<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir).map_err(Error::Io)?;
        let json = serde_json::to_string_pretty(value)?;
        std::fs::write(path, json).map_err(Error::Io)?;
        Ok(())
    }
}
