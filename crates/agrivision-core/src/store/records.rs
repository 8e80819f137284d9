/// Typed load/save of the history and profile records.
///
/// Loading never fails: an absent key, a backend read error, or a value that
/// does not parse all produce the empty record. Failures are logged at `warn`
/// and otherwise swallowed, since a damaged store must not block startup.
use super::{KeyValueStore, Result, HISTORY_KEY, PROFILE_KEY};
use crate::model::{AnalysisResult, History, Profile};
use tracing::warn;

/// Load the history ledger, or an empty one.
pub fn load_history(store: &dyn KeyValueStore) -> History {
    let raw = match store.get(HISTORY_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return History::new(),
        Err(e) => {
            warn!("Could not read stored history: {e}");
            return History::new();
        }
    };
    match serde_json::from_str::<Option<Vec<AnalysisResult>>>(&raw) {
        Ok(entries) => History::from_entries(entries.unwrap_or_default()),
        Err(e) => {
            warn!("Stored history is not valid JSON ({e}); starting empty");
            History::new()
        }
    }
}

/// Persist the whole ledger as a JSON array.
pub fn save_history(store: &dyn KeyValueStore, history: &History) -> Result<()> {
    let json = serde_json::to_string(history.entries())?;
    store.set(HISTORY_KEY, &json)
}

/// Remove the persisted ledger entirely.
pub fn delete_history(store: &dyn KeyValueStore) -> Result<()> {
    store.delete(HISTORY_KEY)
}

/// Load the profile with per-field fallback to `""`.
pub fn load_profile(store: &dyn KeyValueStore) -> Profile {
    match store.get(PROFILE_KEY) {
        Ok(Some(raw)) => Profile::from_json_lenient(&raw),
        Ok(None) => Profile::default(),
        Err(e) => {
            warn!("Could not read stored profile: {e}");
            Profile::default()
        }
    }
}

pub fn save_profile(store: &dyn KeyValueStore, profile: &Profile) -> Result<()> {
    let json = serde_json::to_string(profile)?;
    store.set(PROFILE_KEY, &json)
}
