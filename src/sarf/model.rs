use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::SarfError;

/// An ordered triple of radical consonants identifying a word family.
///
/// The identity key is the concatenation of the three radicals. Counting is
/// per character, not per byte — the domain alphabet is non-Latin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RootKey([char; 3]);

impl RootKey {
    pub fn new(c1: char, c2: char, c3: char) -> Self {
        Self([c1, c2, c3])
    }

    pub fn radicals(&self) -> [char; 3] {
        self.0
    }
}

impl fmt::Display for RootKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0 {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl FromStr for RootKey {
    type Err = SarfError;

    /// Parse a key like "كتب". Anything other than exactly three characters
    /// (after trimming) is an invalid root.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some(c1), Some(c2), Some(c3), None) => Ok(Self([c1, c2, c3])),
            _ => Err(SarfError::InvalidRoot(s.to_string())),
        }
    }
}

/// A concrete word produced by applying a scheme template to a root.
///
/// Plain value held inside its root's collection; no back-reference to the
/// owner. The scheme is referenced by name only, so removing a scheme leaves
/// stored words with an orphaned (but still displayable) name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedWord {
    pub word: String,
    pub scheme: String,
}

impl DerivedWord {
    pub fn new(word: impl Into<String>, scheme: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            scheme: scheme.into(),
        }
    }
}

/// A registered root and the derived words stored under it, in insertion
/// order. Uniqueness is by the exact (word, scheme) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Root {
    pub key: RootKey,
    pub derived: Vec<DerivedWord>,
}

impl Root {
    pub fn new(key: RootKey) -> Self {
        Self {
            key,
            derived: Vec::new(),
        }
    }
}

/// A named morphological template.
///
/// The name is the unique lookup key; the id is stable, independent of the
/// name, and survives snapshot round-trips for external reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheme {
    pub id: Uuid,
    pub name: String,
    pub template: String,
    pub description: String,
}

impl Scheme {
    pub fn new(
        name: impl Into<String>,
        template: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            template: template.into(),
            description: description.into(),
        }
    }
}
