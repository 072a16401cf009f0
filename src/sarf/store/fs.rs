use super::SnapshotStore;
use crate::error::{Result, SarfError};
use crate::lexicon::Lexicon;
use crate::snapshot;
use std::fs;
use std::path::{Path, PathBuf};

const LEXICON_FILENAME: &str = "lexicon.json";

/// File-backed store: the whole lexicon lives in a single snapshot blob
/// under the data directory.
pub struct FileStore {
    root: PathBuf,
    seed_defaults: bool,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            seed_defaults: true,
        }
    }

    /// Whether a first load (no stored blob yet) starts from the classical
    /// scheme set instead of an empty lexicon.
    pub fn with_seed_defaults(mut self, seed: bool) -> Self {
        self.seed_defaults = seed;
        self
    }

    pub fn lexicon_path(&self) -> PathBuf {
        self.root.join(LEXICON_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(SarfError::Io)?;
        }
        Ok(())
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<Lexicon> {
        let path = self.lexicon_path();
        if !path.exists() {
            return Ok(if self.seed_defaults {
                Lexicon::with_default_schemes()
            } else {
                Lexicon::new()
            });
        }
        let blob = fs::read_to_string(&path).map_err(SarfError::Io)?;
        let mut lexicon = Lexicon::new();
        snapshot::import(&mut lexicon, &blob)?;
        Ok(lexicon)
    }

    fn save(&mut self, lexicon: &Lexicon) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let blob = snapshot::export(lexicon)?;
        fs::write(self.lexicon_path(), blob).map_err(SarfError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_store_seeds_default_schemes() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        let lexicon = store.load().unwrap();
        assert!(!lexicon.schemes.is_empty());
        assert!(lexicon.roots.is_empty());
    }

    #[test]
    fn fresh_store_without_seeding_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).with_seed_defaults(false);
        assert!(store.load().unwrap().schemes.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        let mut lexicon = store.load().unwrap();
        lexicon.roots.add("كتب".parse().unwrap());
        lexicon
            .roots
            .attach("كتب".parse().unwrap(), "كاتب", "فاعل")
            .unwrap();
        store.save(&lexicon).unwrap();

        assert_eq!(store.load().unwrap(), lexicon);
    }

    #[test]
    fn corrupt_blob_surfaces_snapshot_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.save(&Lexicon::new()).unwrap();
        fs::write(store.lexicon_path(), "garbage").unwrap();

        assert!(matches!(
            store.load().unwrap_err(),
            SarfError::SnapshotFormat(_)
        ));
    }
}
