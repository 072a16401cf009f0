//! The persistence codec: one self-describing JSON blob holding every scheme
//! and every root with its derived words.
//!
//! The blob is the only file-format artifact in the system. Exporting and
//! re-importing must reconstruct structurally equal stores (same roots, same
//! derived-word order, same schemes including ids), and import is
//! all-or-nothing: a malformed blob never partially mutates the caller's
//! lexicon.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Result, SarfError};
use crate::lexicon::Lexicon;
use crate::model::{DerivedWord, RootKey, Scheme};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootRecord {
    pub key: String,
    pub derived: Vec<DerivedWord>,
}

/// A complete serialized representation of a lexicon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub schemes: Vec<Scheme>,
    pub roots: Vec<RootRecord>,
}

impl Snapshot {
    /// Capture the full state of a lexicon.
    pub fn of(lexicon: &Lexicon) -> Self {
        Self {
            schemes: lexicon.schemes.iter().cloned().collect(),
            roots: lexicon
                .roots
                .iter()
                .map(|r| RootRecord {
                    key: r.key.to_string(),
                    derived: r.derived.clone(),
                })
                .collect(),
        }
    }

    /// Rebuild the stores this snapshot describes.
    ///
    /// A malformed root key, a duplicate root key or a duplicate scheme name
    /// is a `SnapshotFormat` error — a snapshot must not be able to construct
    /// a lexicon that violates the uniqueness invariants.
    pub fn into_lexicon(self) -> Result<Lexicon> {
        let mut lexicon = Lexicon::new();
        for scheme in self.schemes {
            let name = scheme.name.clone();
            if !lexicon.schemes.insert(scheme) {
                return Err(SarfError::SnapshotFormat(format!(
                    "duplicate scheme name: {}",
                    name
                )));
            }
        }
        for record in self.roots {
            let key = RootKey::from_str(&record.key).map_err(|_| {
                SarfError::SnapshotFormat(format!("bad root key: {:?}", record.key))
            })?;
            if !lexicon.roots.add(key) {
                return Err(SarfError::SnapshotFormat(format!(
                    "duplicate root key: {}",
                    record.key
                )));
            }
            for entry in record.derived {
                lexicon.roots.attach(key, &entry.word, &entry.scheme)?;
            }
        }
        Ok(lexicon)
    }

    pub fn to_blob(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(SarfError::Serialization)
    }

    pub fn from_blob(blob: &str) -> Result<Self> {
        serde_json::from_str(blob).map_err(|e| SarfError::SnapshotFormat(e.to_string()))
    }
}

/// Serialize a lexicon straight to a blob.
pub fn export(lexicon: &Lexicon) -> Result<String> {
    Snapshot::of(lexicon).to_blob()
}

/// Parse a blob and replace `lexicon` wholesale (no merge with prior state).
/// On any malformation the current lexicon is left untouched.
pub fn import(lexicon: &mut Lexicon, blob: &str) -> Result<()> {
    let restored = Snapshot::from_blob(blob)?.into_lexicon()?;
    *lexicon = restored;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph;

    fn sample_lexicon() -> Lexicon {
        let mut lexicon = Lexicon::with_default_schemes();
        let kataba: RootKey = "كتب".parse().unwrap();
        let darasa: RootKey = "درس".parse().unwrap();
        lexicon.roots.add(kataba);
        lexicon.roots.add(darasa);
        morph::generate_and_store_all(&mut lexicon, kataba).unwrap();
        morph::generate_and_store(&mut lexicon, darasa, "فاعل").unwrap();
        lexicon
    }

    #[test]
    fn round_trip_is_structurally_equal() {
        let original = sample_lexicon();
        let blob = export(&original).unwrap();

        let mut restored = Lexicon::new();
        import(&mut restored, &blob).unwrap();

        assert_eq!(restored, original);
    }

    #[test]
    fn round_trip_preserves_scheme_ids() {
        let original = sample_lexicon();
        let blob = export(&original).unwrap();
        let restored = Snapshot::from_blob(&blob).unwrap().into_lexicon().unwrap();

        let id = original.schemes.get("فاعل").unwrap().id;
        assert_eq!(restored.schemes.get("فاعل").unwrap().id, id);
    }

    #[test]
    fn import_replaces_rather_than_merges() {
        let blob = export(&sample_lexicon()).unwrap();

        let mut lexicon = Lexicon::new();
        lexicon.roots.add("قرأ".parse().unwrap());
        import(&mut lexicon, &blob).unwrap();

        assert!(!lexicon.roots.contains("قرأ".parse().unwrap()));
        assert!(lexicon.roots.contains("كتب".parse().unwrap()));
    }

    #[test]
    fn malformed_blob_leaves_state_untouched() {
        let mut lexicon = sample_lexicon();
        let before = lexicon.clone();

        for blob in ["not json", "{\"schemes\": 3}", "{}"] {
            let err = import(&mut lexicon, blob).unwrap_err();
            assert!(matches!(err, SarfError::SnapshotFormat(_)));
            assert_eq!(lexicon, before);
        }
    }

    #[test]
    fn bad_root_key_is_rejected() {
        let blob = r#"{"schemes": [], "roots": [{"key": "كتبب", "derived": []}]}"#;
        let mut lexicon = Lexicon::new();
        let err = import(&mut lexicon, blob).unwrap_err();
        assert!(matches!(err, SarfError::SnapshotFormat(_)));
    }

    #[test]
    fn duplicate_entries_are_rejected() {
        let dup_root = r#"{"schemes": [], "roots": [
            {"key": "كتب", "derived": []},
            {"key": "كتب", "derived": []}
        ]}"#;
        let mut lexicon = Lexicon::new();
        assert!(matches!(
            import(&mut lexicon, dup_root).unwrap_err(),
            SarfError::SnapshotFormat(_)
        ));

        let mut with_dup_scheme = Snapshot::of(&Lexicon::with_default_schemes());
        let clone = with_dup_scheme.schemes[0].clone();
        with_dup_scheme.schemes.push(clone);
        assert!(matches!(
            with_dup_scheme.into_lexicon().unwrap_err(),
            SarfError::SnapshotFormat(_)
        ));
    }
}
