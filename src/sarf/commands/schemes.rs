use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SnapshotStore;

pub fn add<S: SnapshotStore>(
    store: &mut S,
    name: &str,
    template: &str,
    description: &str,
) -> Result<CmdResult> {
    let mut lexicon = store.load()?;
    let added = lexicon.schemes.add(name, template, description);
    if added {
        store.save(&lexicon)?;
    }

    let mut result = CmdResult::default().with_changed(added);
    if added {
        result.add_message(CmdMessage::success(format!("Scheme '{}' added", name)));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "Scheme name '{}' is already taken",
            name
        )));
    }
    Ok(result)
}

pub fn remove<S: SnapshotStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let mut lexicon = store.load()?;
    let removed = lexicon.schemes.remove(name);
    store.save(&lexicon)?;

    let mut result = CmdResult::default().with_changed(removed);
    if removed {
        // Stored derived words that reference this name stay as they are
        result.add_message(CmdMessage::success(format!("Scheme '{}' removed", name)));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "Scheme '{}' was not present",
            name
        )));
    }
    Ok(result)
}

pub fn list<S: SnapshotStore>(store: &S) -> Result<CmdResult> {
    let lexicon = store.load()?;
    let schemes = lexicon.schemes.iter().cloned().collect();
    Ok(CmdResult::default().with_schemes(schemes))
}
