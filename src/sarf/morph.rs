//! The derivation engine: template substitution and its inverse.
//!
//! Generation walks a scheme template and replaces the three slot characters
//! with the root's radicals; validation runs the same substitution for every
//! scheme and compares. Both are pure functions over whatever stores the
//! caller hands in — the engine holds no state of its own.

use crate::error::{Result, SarfError};
use crate::lexicon::{Lexicon, SchemeStore};
use crate::model::{DerivedWord, RootKey};

/// The designated slot characters, in radical order: ف receives the first
/// radical, ع the second, ل the third.
pub const SLOTS: [char; 3] = ['ف', 'ع', 'ل'];

/// Apply a scheme template to a root.
///
/// Slot characters are replaced by the corresponding radical; every other
/// template character is kept verbatim. A template without any slot cannot
/// derive anything and yields the empty string.
pub fn generate(key: RootKey, template: &str) -> String {
    if !template.chars().any(|c| SLOTS.contains(&c)) {
        return String::new();
    }
    let [c1, c2, c3] = key.radicals();
    template
        .chars()
        .map(|c| {
            if c == SLOTS[0] {
                c1
            } else if c == SLOTS[1] {
                c2
            } else if c == SLOTS[2] {
                c3
            } else {
                c
            }
        })
        .collect()
}

/// Derive every scheme's form for a root, in scheme store order, skipping
/// schemes whose template yields nothing.
pub fn generate_all(key: RootKey, schemes: &SchemeStore) -> Vec<DerivedWord> {
    schemes
        .iter()
        .filter_map(|s| {
            let word = generate(key, &s.template);
            if word.is_empty() {
                None
            } else {
                Some(DerivedWord::new(word, s.name.clone()))
            }
        })
        .collect()
}

/// As [`generate_all`], but for a registered root only.
pub fn generate_all_for_root(lexicon: &Lexicon, key: RootKey) -> Result<Vec<DerivedWord>> {
    if !lexicon.roots.contains(key) {
        return Err(SarfError::RootNotFound(key.to_string()));
    }
    Ok(generate_all(key, &lexicon.schemes))
}

/// Generate by scheme name and attach the result under the root.
///
/// Returns whether a word was produced and newly stored: false when the
/// template derived nothing, or when the identical (word, scheme) pair was
/// already attached.
pub fn generate_and_store(lexicon: &mut Lexicon, key: RootKey, scheme_name: &str) -> Result<bool> {
    let template = lexicon
        .schemes
        .get(scheme_name)
        .ok_or_else(|| SarfError::SchemeNotFound(scheme_name.to_string()))?
        .template
        .clone();
    if !lexicon.roots.contains(key) {
        return Err(SarfError::RootNotFound(key.to_string()));
    }
    let word = generate(key, &template);
    if word.is_empty() {
        return Ok(false);
    }
    lexicon.roots.attach(key, &word, scheme_name)
}

/// Generate and attach every scheme's form for the root. The count reflects
/// new attachments only — pre-existing pairs do not recount.
pub fn generate_and_store_all(lexicon: &mut Lexicon, key: RootKey) -> Result<usize> {
    let family = generate_all_for_root(lexicon, key)?;
    let mut attached = 0;
    for entry in family {
        if lexicon.roots.attach(key, &entry.word, &entry.scheme)? {
            attached += 1;
        }
    }
    Ok(attached)
}

/// The outcome of a reverse lookup: whether some scheme derives the word
/// from the root, and which one matched first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    pub scheme: Option<String>,
}

impl Validation {
    fn matched(scheme: String) -> Self {
        Self {
            valid: true,
            scheme: Some(scheme),
        }
    }

    fn no_match() -> Self {
        Self {
            valid: false,
            scheme: None,
        }
    }
}

/// Find the scheme that derives `word` from the root.
///
/// Probes schemes in store order and returns on the first exact match —
/// insertion order is the deliberate tie-break among schemes that would
/// generate the same surface form.
pub fn validate(word: &str, key: RootKey, schemes: &SchemeStore) -> Validation {
    for scheme in schemes.iter() {
        if generate(key, &scheme.template) == word {
            return Validation::matched(scheme.name.clone());
        }
    }
    Validation::no_match()
}

/// As [`validate`], but for a registered root only.
pub fn validate_for_root(lexicon: &Lexicon, word: &str, key: RootKey) -> Result<Validation> {
    if !lexicon.roots.contains(key) {
        return Err(SarfError::RootNotFound(key.to_string()));
    }
    Ok(validate(word, key, &lexicon.schemes))
}
