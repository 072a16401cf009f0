use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RootKey;
use crate::morph;
use crate::store::SnapshotStore;

pub fn run<S: SnapshotStore>(store: &S, word: &str, key: RootKey) -> Result<CmdResult> {
    let lexicon = store.load()?;
    let outcome = morph::validate_for_root(&lexicon, word, key)?;

    let mut result = CmdResult::default();
    if outcome.valid {
        result.add_message(CmdMessage::success(format!(
            "'{}' belongs to root '{}' (scheme {})",
            word,
            key,
            outcome.scheme.as_deref().unwrap_or_default()
        )));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "'{}' does not belong to root '{}'",
            word, key
        )));
    }
    Ok(result.with_validation(outcome))
}
