use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use tracing::debug;

use crate::models::preferences::UserPreferences;

/// Per-user preference blobs in a simple local key-value store.
///
/// Backed by one JSON file under the data directory, read at session start and
/// written through on every change.
pub struct PreferenceStore {
    path: PathBuf,
    prefs: Mutex<HashMap<String, UserPreferences>>,
}

impl PreferenceStore {
    /// Open the store under a data directory, loading any existing file
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        fs::create_dir_all(&data_dir)?;
        let path = data_dir.as_ref().join("preferences.json");

        let prefs = if path.exists() {
            let data = fs::read_to_string(&path)?;
            serde_json::from_str(&data)?
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            prefs: Mutex::new(prefs),
        })
    }

    /// Read preferences for a user
    pub fn get(&self, user_id: &str) -> Option<UserPreferences> {
        let prefs = self.prefs.lock().expect("preference store lock poisoned");
        prefs.get(user_id).cloned()
    }

    /// Write preferences for a user and persist to disk
    pub fn set(&self, user_id: &str, preferences: UserPreferences) -> Result<()> {
        let mut prefs = self.prefs.lock().expect("preference store lock poisoned");
        prefs.insert(user_id.to_string(), preferences);

        let data = serde_json::to_string_pretty(&*prefs)?;
        fs::write(&self.path, data)?;
        debug!("Persisted preferences for {}", user_id);
        Ok(())
    }

    /// Remove preferences for a user and persist to disk
    pub fn remove(&self, user_id: &str) -> Result<()> {
        let mut prefs = self.prefs.lock().expect("preference store lock poisoned");
        prefs.remove(user_id);

        let data = serde_json::to_string_pretty(&*prefs)?;
        fs::write(&self.path, data)?;
        Ok(())
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.prefs.lock().expect("preference store lock poisoned").len()
    }

    /// Whether the store holds any preferences
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::preferences::{ExpertiseLevel, Region, Token};

    #[test]
    fn round_trip_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = UserPreferences::derive(ExpertiseLevel::Easy, Region::Eu, "0xabc");

        {
            let store = PreferenceStore::open(dir.path()).unwrap();
            store.set("user-1", prefs.clone()).unwrap();
        }

        let store = PreferenceStore::open(dir.path()).unwrap();
        let loaded = store.get("user-1").unwrap();
        assert_eq!(loaded, prefs);
        assert_eq!(loaded.default_token, Token::Eurc);
    }

    #[test]
    fn missing_user_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::open(dir.path()).unwrap();
        assert!(store.get("nobody").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn set_overwrites_and_remove_deletes() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::open(dir.path()).unwrap();

        let first = UserPreferences::derive(ExpertiseLevel::Easy, Region::Us, "0xabc");
        let second = UserPreferences::derive(ExpertiseLevel::Expert, Region::Eu, "0xabc");
        store.set("user-1", first).unwrap();
        store.set("user-1", second.clone()).unwrap();

        assert_eq!(store.get("user-1"), Some(second));
        assert_eq!(store.len(), 1);

        store.remove("user-1").unwrap();
        assert!(store.is_empty());
    }
}
