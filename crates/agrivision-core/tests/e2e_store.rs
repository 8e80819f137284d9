/// End-to-end persistence tests against a real on-disk `FileStore`.
///
/// Each test opens a store in a temporary directory, writes through the
/// typed record helpers, then opens a *second* store on the same directory
/// to simulate the next application session.
use agrivision_core::analysis::{run_analysis, AnalysisEnv, SequencePicker};
use agrivision_core::model::{History, Profile, MAX_HISTORY_ENTRIES};
use agrivision_core::store::records::{
    delete_history, load_history, load_profile, save_history, save_profile,
};
use agrivision_core::store::{FileStore, KeyValueStore, HISTORY_KEY, PROFILE_KEY};
use std::fs;
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn reopen(tmp: &TempDir) -> FileStore {
    FileStore::open(tmp.path()).unwrap()
}

fn history_of(n: usize) -> History {
    let env = AnalysisEnv::instant(0).with_picker(SequencePicker::new(vec![0, 1, 2, 3]));
    let mut h = History::new();
    for i in 0..n {
        h.prepend(run_analysis(&format!("data:image/png;base64,{i}"), &env));
    }
    h
}

// ── History ───────────────────────────────────────────────────────────────────

/// A saved history is read back identically by the next session.
#[test]
fn history_survives_reopen() {
    let tmp = TempDir::new().unwrap();
    let h = history_of(3);
    save_history(&reopen(&tmp), &h).unwrap();

    let loaded = load_history(&reopen(&tmp));
    assert_eq!(loaded, h);
    assert_eq!(loaded.entries()[0].image, "data:image/png;base64,2");
}

/// Clearing removes the file; the next session starts empty.
#[test]
fn cleared_history_loads_empty() {
    let tmp = TempDir::new().unwrap();
    let store = reopen(&tmp);
    save_history(&store, &history_of(2)).unwrap();
    delete_history(&store).unwrap();

    assert!(!tmp.path().join(format!("{HISTORY_KEY}.json")).exists());
    assert!(load_history(&reopen(&tmp)).is_empty());
}

/// A file edited into garbage by hand yields an empty history, not an error.
#[test]
fn corrupted_history_file_loads_empty() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(format!("{HISTORY_KEY}.json")), "]]] not json").unwrap();
    assert!(load_history(&reopen(&tmp)).is_empty());
}

/// A hand-edited file holding more than the cap is trimmed on load.
#[test]
fn oversized_history_file_is_trimmed() {
    let tmp = TempDir::new().unwrap();
    let full = history_of(MAX_HISTORY_ENTRIES);
    let extra = history_of(5);
    let entries: Vec<_> = full
        .entries()
        .iter()
        .chain(extra.entries())
        .cloned()
        .collect();
    reopen(&tmp)
        .set(HISTORY_KEY, &serde_json::to_string(&entries).unwrap())
        .unwrap();
    assert_eq!(load_history(&reopen(&tmp)).len(), MAX_HISTORY_ENTRIES);
}

// ── Profile ───────────────────────────────────────────────────────────────────

/// Saving a profile then reloading yields the identical record.
#[test]
fn profile_survives_reopen() {
    let tmp = TempDir::new().unwrap();
    let p = Profile::new("Maria", "Lima", "Corn");
    save_profile(&reopen(&tmp), &p).unwrap();
    assert_eq!(load_profile(&reopen(&tmp)), p);
}

/// Saving identical content twice leaves identical bytes on disk.
#[test]
fn profile_save_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let store = reopen(&tmp);
    let p = Profile::new("Ana", "", "Wheat");
    let file = tmp.path().join(format!("{PROFILE_KEY}.json"));

    save_profile(&store, &p).unwrap();
    let first = fs::read(&file).unwrap();
    save_profile(&store, &p).unwrap();
    assert_eq!(fs::read(&file).unwrap(), first);
}

/// Partially valid profile JSON keeps the good fields.
#[test]
fn partial_profile_file_keeps_string_fields() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(format!("{PROFILE_KEY}.json")),
        r#"{"name":"Maria","location":null}"#,
    )
    .unwrap();
    assert_eq!(load_profile(&reopen(&tmp)), Profile::new("Maria", "", ""));
}
