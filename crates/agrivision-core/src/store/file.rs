/// On-disk store: one `<key>.json` file per key inside a data directory.
use super::{KeyValueStore, Result, StoreError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            key: dir.display().to_string(),
            source,
        })?;
        debug!("File store opened at {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve the file backing `key`, rejecting anything that could escape `dir`.
    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let bad = key.is_empty()
            || key.contains(['/', '\\'])
            || key.contains("..")
            || key.chars().any(char::is_control);
        if bad {
            return Err(StoreError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        // Temp file + rename: readers never observe a partial value.
        let tmp = path.with_extension("json.tmp");
        let io_err = |source: std::io::Error| StoreError::Io {
            key: key.to_owned(),
            source,
        };
        fs::write(&tmp, value).map_err(io_err)?;
        fs::rename(&tmp, &path).map_err(io_err)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_key_validation() {
        let tmp = TempDir::new().unwrap();
        let s = FileStore::open(tmp.path()).unwrap();
        for key in ["", "../x", "a/b", "a\\b", "..", "a\nb"] {
            assert!(
                matches!(s.set(key, "v"), Err(StoreError::InvalidKey(_))),
                "key {key:?} must be rejected"
            );
        }
        assert!(s.set("agrivision_history", "[]").is_ok());
    }

    #[test]
    fn test_values_land_in_named_files() {
        let tmp = TempDir::new().unwrap();
        let s = FileStore::open(tmp.path()).unwrap();
        s.set("agrivision_profile", "{}").unwrap();
        assert!(tmp.path().join("agrivision_profile.json").exists());
        assert!(!tmp.path().join("agrivision_profile.json.tmp").exists());
    }

    #[test]
    fn test_open_creates_nested_dir() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a").join("b");
        let s = FileStore::open(&nested).unwrap();
        assert_eq!(s.dir(), nested.as_path());
        assert!(nested.is_dir());
    }
}
