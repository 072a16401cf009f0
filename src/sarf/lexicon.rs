//! The two in-memory stores — roots and schemes — and the [`Lexicon`] that
//! bundles them as the unit of snapshot export/import.
//!
//! Both stores keep insertion order, which is observable: root listings come
//! out in registration order, and validation probes schemes in the order
//! they were added (first match wins).

use crate::error::{Result, SarfError};
use crate::model::{DerivedWord, Root, RootKey, Scheme};

/// Registered roots, each owning its derived-word list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootStore {
    roots: Vec<Root>,
}

impl RootStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a root. Idempotent: returns true only when the key was not
    /// present before, and never disturbs an existing root's derived words.
    pub fn add(&mut self, key: RootKey) -> bool {
        if self.contains(key) {
            return false;
        }
        self.roots.push(Root::new(key));
        true
    }

    pub fn contains(&self, key: RootKey) -> bool {
        self.roots.iter().any(|r| r.key == key)
    }

    /// Delete the root and everything stored under it.
    pub fn remove(&mut self, key: RootKey) -> bool {
        let before = self.roots.len();
        self.roots.retain(|r| r.key != key);
        self.roots.len() != before
    }

    pub fn get(&self, key: RootKey) -> Option<&Root> {
        self.roots.iter().find(|r| r.key == key)
    }

    fn get_mut(&mut self, key: RootKey) -> Result<&mut Root> {
        self.roots
            .iter_mut()
            .find(|r| r.key == key)
            .ok_or_else(|| SarfError::RootNotFound(key.to_string()))
    }

    /// All roots in store (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = &Root> {
        self.roots.iter()
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Append a (word, scheme) pair under the root. Dedupe is by exact pair
    /// equality: re-adding an identical pair is a no-op reported as Ok(false).
    pub fn attach(&mut self, key: RootKey, word: &str, scheme: &str) -> Result<bool> {
        let root = self.get_mut(key)?;
        let entry = DerivedWord::new(word, scheme);
        if root.derived.contains(&entry) {
            return Ok(false);
        }
        root.derived.push(entry);
        Ok(true)
    }

    pub fn derived_words(&self, key: RootKey) -> Result<&[DerivedWord]> {
        self.get(key)
            .map(|r| r.derived.as_slice())
            .ok_or_else(|| SarfError::RootNotFound(key.to_string()))
    }

    /// Remove every stored entry whose word text equals `word`, regardless
    /// of which scheme produced it.
    pub fn remove_derived(&mut self, key: RootKey, word: &str) -> Result<bool> {
        let root = self.get_mut(key)?;
        let before = root.derived.len();
        root.derived.retain(|d| d.word != word);
        Ok(root.derived.len() != before)
    }
}

/// Named morphological templates. Names are unique; ids are assigned at
/// creation and never reused within a session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemeStore {
    schemes: Vec<Scheme>,
}

impl SchemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scheme with a fresh id. Returns false, mutating nothing, if the
    /// name is already taken.
    pub fn add(&mut self, name: &str, template: &str, description: &str) -> bool {
        if self.get(name).is_some() {
            return false;
        }
        self.schemes.push(Scheme::new(name, template, description));
        true
    }

    /// Insert a scheme that already carries its id (snapshot restore).
    pub(crate) fn insert(&mut self, scheme: Scheme) -> bool {
        if self.get(&scheme.name).is_some() {
            return false;
        }
        self.schemes.push(scheme);
        true
    }

    /// Remove by name. Never touches the root store: stored derived words
    /// keep referencing the name as a plain string.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.schemes.len();
        self.schemes.retain(|s| s.name != name);
        self.schemes.len() != before
    }

    pub fn get(&self, name: &str) -> Option<&Scheme> {
        self.schemes.iter().find(|s| s.name == name)
    }

    /// All schemes in store (insertion) order — the validation probe order.
    pub fn iter(&self) -> impl Iterator<Item = &Scheme> {
        self.schemes.iter()
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}

/// The full store: every root and every scheme.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexicon {
    pub roots: RootStore,
    pub schemes: SchemeStore,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// A lexicon pre-seeded with the classical Arabic scheme table.
    pub fn with_default_schemes() -> Self {
        let mut lexicon = Self::new();
        for &(name, template, description) in DEFAULT_SCHEMES {
            lexicon.schemes.add(name, template, description);
        }
        lexicon
    }
}

/// The classical scheme set: (name, template, description). Templates use
/// the slot characters ف/ع/ل for radicals 1/2/3.
const DEFAULT_SCHEMES: &[(&str, &str, &str)] = &[
    ("فعل", "فعل", "form I verb"),
    ("فاعل", "فاعل", "active participle (form I)"),
    ("مفعول", "مفعول", "passive participle (form I)"),
    ("فعّل", "فعّل", "form II verb"),
    ("تفعيل", "تفعيل", "form II verbal noun"),
    ("مفعّل", "مفعّل", "form II participle"),
    ("مفاعلة", "مفاعلة", "form III verbal noun"),
    ("أفعل", "أفعل", "form IV verb"),
    ("إفعال", "إفعال", "form IV verbal noun"),
    ("تفعّل", "تفعّل", "form V verb"),
    ("افتعل", "افتعل", "form VIII verb"),
    ("مفتعل", "مفتعل", "form VIII participle"),
    ("استفعل", "استفعل", "form X verb"),
    ("مستفعل", "مستفعل", "form X participle"),
];
