use crate::commands::{CmdMessage, CmdResult, RootListing};
use crate::error::Result;
use crate::model::RootKey;
use crate::store::SnapshotStore;

pub fn add<S: SnapshotStore>(store: &mut S, key: RootKey) -> Result<CmdResult> {
    let mut lexicon = store.load()?;
    let created = lexicon.roots.add(key);
    store.save(&lexicon)?;

    let mut result = CmdResult::default().with_changed(created);
    if created {
        result.add_message(CmdMessage::success(format!("Root '{}' registered", key)));
    } else {
        result.add_message(CmdMessage::info(format!("Root '{}' already present", key)));
    }
    Ok(result)
}

pub fn exists<S: SnapshotStore>(store: &S, key: RootKey) -> Result<CmdResult> {
    let lexicon = store.load()?;
    let found = lexicon.roots.contains(key);

    let mut result = CmdResult::default().with_found(found);
    if found {
        result.add_message(CmdMessage::info(format!("Root '{}' is registered", key)));
    } else {
        result.add_message(CmdMessage::info(format!("Root '{}' is not registered", key)));
    }
    Ok(result)
}

pub fn remove<S: SnapshotStore>(store: &mut S, key: RootKey) -> Result<CmdResult> {
    let mut lexicon = store.load()?;
    let removed = lexicon.roots.remove(key);
    store.save(&lexicon)?;

    let mut result = CmdResult::default().with_changed(removed);
    if removed {
        result.add_message(CmdMessage::success(format!(
            "Root '{}' removed along with its derived words",
            key
        )));
    } else {
        result.add_message(CmdMessage::warning(format!("Root '{}' was not present", key)));
    }
    Ok(result)
}

pub fn list<S: SnapshotStore>(store: &S) -> Result<CmdResult> {
    let lexicon = store.load()?;
    let listings: Vec<RootListing> = lexicon
        .roots
        .iter()
        .map(|r| RootListing {
            key: r.key.to_string(),
            derived: r.derived.clone(),
        })
        .collect();
    Ok(CmdResult::default().with_roots(listings))
}
