//! Bulk ingestion of roots from free-form text.

use crate::lexicon::RootStore;
use crate::model::RootKey;
use std::str::FromStr;

/// Extract well-formed roots from `content` and register them.
///
/// Whitespace and line boundaries separate candidate tokens; a token is
/// accepted only if it is exactly three characters. Returns how many roots
/// were newly created — repeats within the text and roots already present
/// collapse through `RootStore::add`'s idempotency. Never fails: anything
/// that is not a well-formed root is silently skipped.
pub fn load_roots_from_text(store: &mut RootStore, content: &str) -> usize {
    let mut created = 0;
    for token in content.split_whitespace() {
        if let Ok(key) = RootKey::from_str(token) {
            if store.add(key) {
                created += 1;
            }
        }
    }
    created
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_distinct_roots_once() {
        let mut store = RootStore::new();
        let created = load_roots_from_text(&mut store, "كتب\nدرس كتب");
        assert_eq!(created, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn skips_malformed_tokens() {
        let mut store = RootStore::new();
        let created = load_roots_from_text(&mut store, "كت كتبب علم abcd -");
        assert_eq!(created, 1);
        assert!(store.contains("علم".parse().unwrap()));
    }

    #[test]
    fn does_not_recount_preexisting_roots() {
        let mut store = RootStore::new();
        store.add("كتب".parse().unwrap());
        let created = load_roots_from_text(&mut store, "كتب درس");
        assert_eq!(created, 1);
    }

    #[test]
    fn empty_text_creates_nothing() {
        let mut store = RootStore::new();
        assert_eq!(load_roots_from_text(&mut store, "  \n \t"), 0);
        assert!(store.is_empty());
    }
}
