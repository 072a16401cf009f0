use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RootKey;
use crate::store::SnapshotStore;

pub fn attach<S: SnapshotStore>(
    store: &mut S,
    key: RootKey,
    word: &str,
    scheme: &str,
) -> Result<CmdResult> {
    let mut lexicon = store.load()?;
    let attached = lexicon.roots.attach(key, word, scheme)?;
    store.save(&lexicon)?;

    let mut result = CmdResult::default().with_changed(attached);
    if attached {
        result.add_message(CmdMessage::success(format!(
            "Stored '{}' under root '{}' (scheme {})",
            word, key, scheme
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "'{}' with scheme {} is already stored under root '{}'",
            word, scheme, key
        )));
    }
    Ok(result)
}

pub fn list<S: SnapshotStore>(store: &S, key: RootKey) -> Result<CmdResult> {
    let lexicon = store.load()?;
    let derived = lexicon.roots.derived_words(key)?.to_vec();
    Ok(CmdResult::default().with_derived(derived))
}

pub fn remove<S: SnapshotStore>(store: &mut S, key: RootKey, word: &str) -> Result<CmdResult> {
    let mut lexicon = store.load()?;
    let removed = lexicon.roots.remove_derived(key, word)?;
    store.save(&lexicon)?;

    let mut result = CmdResult::default().with_changed(removed);
    if removed {
        result.add_message(CmdMessage::success(format!(
            "Removed '{}' from root '{}'",
            word, key
        )));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "'{}' was not stored under root '{}'",
            word, key
        )));
    }
    Ok(result)
}
