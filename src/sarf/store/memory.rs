use super::SnapshotStore;
use crate::error::Result;
use crate::lexicon::Lexicon;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct MemoryStore {
    lexicon: Lexicon,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the classical scheme set rather than an empty lexicon.
    pub fn with_default_schemes() -> Self {
        Self {
            lexicon: Lexicon::with_default_schemes(),
        }
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Lexicon> {
        Ok(self.lexicon.clone())
    }

    fn save(&mut self, lexicon: &Lexicon) -> Result<()> {
        self.lexicon = lexicon.clone();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::RootKey;

    pub struct StoreFixture {
        pub store: MemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: MemoryStore::with_default_schemes(),
            }
        }

        pub fn empty() -> Self {
            Self {
                store: MemoryStore::new(),
            }
        }

        pub fn with_root(mut self, key: &str) -> Self {
            let key: RootKey = key.parse().unwrap();
            let mut lexicon = self.store.load().unwrap();
            lexicon.roots.add(key);
            self.store.save(&lexicon).unwrap();
            self
        }

        pub fn with_scheme(mut self, name: &str, template: &str) -> Self {
            let mut lexicon = self.store.load().unwrap();
            assert!(lexicon.schemes.add(name, template, ""));
            self.store.save(&lexicon).unwrap();
            self
        }

        pub fn with_derived(mut self, key: &str, word: &str, scheme: &str) -> Self {
            let key: RootKey = key.parse().unwrap();
            let mut lexicon = self.store.load().unwrap();
            lexicon.roots.add(key);
            lexicon.roots.attach(key, word, scheme).unwrap();
            self.store.save(&lexicon).unwrap();
            self
        }
    }
}
