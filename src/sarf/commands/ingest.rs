use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::ingest;
use crate::store::SnapshotStore;

/// Register every well-formed root found in `content`.
pub fn run<S: SnapshotStore>(store: &mut S, content: &str) -> Result<CmdResult> {
    let mut lexicon = store.load()?;
    let created = ingest::load_roots_from_text(&mut lexicon.roots, content);
    store.save(&lexicon)?;

    let mut result = CmdResult::default().with_count(created);
    result.add_message(CmdMessage::success(format!("{} new roots loaded", created)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use crate::store::SnapshotStore;

    #[test]
    fn loads_and_counts_new_roots_only() {
        let mut store = MemoryStore::new();
        let result = run(&mut store, "كتب\nدرس كتب").unwrap();
        assert_eq!(result.count, Some(2));

        // Re-ingesting the same text creates nothing new
        let result = run(&mut store, "كتب درس").unwrap();
        assert_eq!(result.count, Some(0));
        assert_eq!(store.load().unwrap().roots.len(), 2);
    }
}
