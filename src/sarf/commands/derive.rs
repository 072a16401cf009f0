use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SarfError};
use crate::model::{DerivedWord, RootKey};
use crate::morph;
use crate::store::SnapshotStore;

/// Generate one derived word without storing it. The result may be empty
/// when the scheme's template has no slots.
pub fn generate<S: SnapshotStore>(store: &S, key: RootKey, scheme_name: &str) -> Result<CmdResult> {
    let lexicon = store.load()?;
    let scheme = lexicon
        .schemes
        .get(scheme_name)
        .ok_or_else(|| SarfError::SchemeNotFound(scheme_name.to_string()))?;

    let word = morph::generate(key, &scheme.template);
    let mut result = CmdResult::default();
    if word.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Scheme '{}' has no usable template — nothing derived",
            scheme_name
        )));
    } else {
        result.derived.push(DerivedWord::new(word, scheme_name));
    }
    Ok(result)
}

/// Derive the root's full family, one word per scheme, in store order.
pub fn generate_all<S: SnapshotStore>(store: &S, key: RootKey) -> Result<CmdResult> {
    let lexicon = store.load()?;
    let family = morph::generate_all_for_root(&lexicon, key)?;
    Ok(CmdResult::default().with_derived(family))
}

/// Generate by scheme name and store the result under the root.
pub fn generate_and_store<S: SnapshotStore>(
    store: &mut S,
    key: RootKey,
    scheme_name: &str,
) -> Result<CmdResult> {
    let mut lexicon = store.load()?;
    let stored = morph::generate_and_store(&mut lexicon, key, scheme_name)?;
    store.save(&lexicon)?;

    let mut result = CmdResult::default().with_changed(stored);
    if stored {
        result.add_message(CmdMessage::success(format!(
            "Derived and stored a word for root '{}' with scheme {}",
            key, scheme_name
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Nothing new stored for root '{}' with scheme {}",
            key, scheme_name
        )));
    }
    Ok(result)
}

/// Generate and store the whole family; counts new attachments only.
pub fn generate_and_store_all<S: SnapshotStore>(store: &mut S, key: RootKey) -> Result<CmdResult> {
    let mut lexicon = store.load()?;
    let attached = morph::generate_and_store_all(&mut lexicon, key)?;
    store.save(&lexicon)?;

    let mut result = CmdResult::default().with_count(attached);
    result.add_message(CmdMessage::success(format!(
        "{} derived words stored for root '{}'",
        attached, key
    )));
    Ok(result)
}
