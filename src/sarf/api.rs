//! # API Facade
//!
//! The single entry point for every engine operation, regardless of the UI
//! driving it. The facade dispatches to the command layer and normalizes
//! inputs — notably parsing root strings into [`RootKey`]s, so malformed
//! triples surface as `InvalidRoot` here, before any command runs.
//!
//! It performs no I/O of its own beyond what the [`SnapshotStore`] does,
//! never prints, and returns structured `CmdResult`s for the caller to
//! render.

use crate::commands;
use crate::error::Result;
use crate::model::RootKey;
use crate::store::SnapshotStore;
use std::path::PathBuf;
use std::str::FromStr;

/// The main API facade for sarf operations.
///
/// Generic over `SnapshotStore` to allow different storage backends:
/// `FileStore` in production, `MemoryStore` in tests.
pub struct SarfApi<S: SnapshotStore> {
    store: S,
    data_dir: PathBuf,
}

impl<S: SnapshotStore> SarfApi<S> {
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        Self { store, data_dir }
    }

    pub fn add_root(&mut self, root: &str) -> Result<commands::CmdResult> {
        commands::roots::add(&mut self.store, parse_root(root)?)
    }

    pub fn root_exists(&self, root: &str) -> Result<commands::CmdResult> {
        commands::roots::exists(&self.store, parse_root(root)?)
    }

    pub fn remove_root(&mut self, root: &str) -> Result<commands::CmdResult> {
        commands::roots::remove(&mut self.store, parse_root(root)?)
    }

    pub fn list_roots(&self) -> Result<commands::CmdResult> {
        commands::roots::list(&self.store)
    }

    pub fn load_roots_from_text(&mut self, content: &str) -> Result<commands::CmdResult> {
        commands::ingest::run(&mut self.store, content)
    }

    pub fn generate(&self, root: &str, scheme: &str) -> Result<commands::CmdResult> {
        commands::derive::generate(&self.store, parse_root(root)?, scheme)
    }

    pub fn generate_all(&self, root: &str) -> Result<commands::CmdResult> {
        commands::derive::generate_all(&self.store, parse_root(root)?)
    }

    pub fn generate_and_store(&mut self, root: &str, scheme: &str) -> Result<commands::CmdResult> {
        commands::derive::generate_and_store(&mut self.store, parse_root(root)?, scheme)
    }

    pub fn generate_and_store_all(&mut self, root: &str) -> Result<commands::CmdResult> {
        commands::derive::generate_and_store_all(&mut self.store, parse_root(root)?)
    }

    pub fn attach_derived(
        &mut self,
        root: &str,
        word: &str,
        scheme: &str,
    ) -> Result<commands::CmdResult> {
        commands::words::attach(&mut self.store, parse_root(root)?, word, scheme)
    }

    pub fn derived_words(&self, root: &str) -> Result<commands::CmdResult> {
        commands::words::list(&self.store, parse_root(root)?)
    }

    pub fn remove_derived(&mut self, root: &str, word: &str) -> Result<commands::CmdResult> {
        commands::words::remove(&mut self.store, parse_root(root)?, word)
    }

    pub fn validate(&self, word: &str, root: &str) -> Result<commands::CmdResult> {
        commands::validate::run(&self.store, word, parse_root(root)?)
    }

    pub fn add_scheme(
        &mut self,
        name: &str,
        template: &str,
        description: &str,
    ) -> Result<commands::CmdResult> {
        commands::schemes::add(&mut self.store, name, template, description)
    }

    pub fn remove_scheme(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::schemes::remove(&mut self.store, name)
    }

    pub fn list_schemes(&self) -> Result<commands::CmdResult> {
        commands::schemes::list(&self.store)
    }

    pub fn export_snapshot(&self) -> Result<commands::CmdResult> {
        commands::snapshot::export(&self.store)
    }

    pub fn import_snapshot(&mut self, blob: &str) -> Result<commands::CmdResult> {
        commands::snapshot::import(&mut self.store, blob)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }
}

fn parse_root(root: &str) -> Result<RootKey> {
    RootKey::from_str(root)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, RootListing};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SarfError;
    use crate::store::memory::MemoryStore;

    fn api() -> SarfApi<MemoryStore> {
        SarfApi::new(MemoryStore::with_default_schemes(), PathBuf::new())
    }

    #[test]
    fn normalizes_root_input_before_dispatch() {
        let mut api = api();
        assert!(matches!(
            api.add_root("كتبب").unwrap_err(),
            SarfError::InvalidRoot(_)
        ));
        assert!(api.add_root("كتب").is_ok());
    }

    #[test]
    fn dispatches_the_full_scenario() {
        let mut api = api();
        api.add_root("كتب").unwrap();
        assert_eq!(api.root_exists("كتب").unwrap().found, Some(true));

        let generated = api.generate("كتب", "فاعل").unwrap();
        assert_eq!(generated.derived[0].word, "كاتب");

        let checked = api.validate("كاتب", "كتب").unwrap();
        assert_eq!(
            checked.validation.unwrap().scheme.as_deref(),
            Some("فاعل")
        );

        let checked = api.validate("كتبب", "كتب").unwrap();
        assert!(!checked.validation.unwrap().valid);
    }

    #[test]
    fn snapshot_methods_round_trip() {
        let mut api = api();
        api.add_root("درس").unwrap();
        api.generate_and_store_all("درس").unwrap();

        let blob = api.export_snapshot().unwrap().blob.unwrap();
        let mut other = SarfApi::new(MemoryStore::new(), PathBuf::new());
        other.import_snapshot(&blob).unwrap();

        assert_eq!(other.root_exists("درس").unwrap().found, Some(true));
        assert_eq!(
            other.derived_words("درس").unwrap().derived,
            api.derived_words("درس").unwrap().derived
        );
    }
}
