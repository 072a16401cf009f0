use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::snapshot;
use crate::store::SnapshotStore;

/// Serialize the full lexicon to its snapshot blob.
pub fn export<S: SnapshotStore>(store: &S) -> Result<CmdResult> {
    let lexicon = store.load()?;
    let blob = snapshot::export(&lexicon)?;
    Ok(CmdResult::default().with_blob(blob))
}

/// Replace the whole lexicon with the snapshot in `blob`. All-or-nothing:
/// a malformed blob changes nothing.
pub fn import<S: SnapshotStore>(store: &mut S, blob: &str) -> Result<CmdResult> {
    let mut lexicon = store.load()?;
    snapshot::import(&mut lexicon, blob)?;
    store.save(&lexicon)?;

    let mut result = CmdResult::default().with_changed(true);
    result.add_message(CmdMessage::success(format!(
        "Snapshot imported: {} roots, {} schemes",
        lexicon.roots.len(),
        lexicon.schemes.len()
    )));
    Ok(result)
}
