//! # Storage layer
//!
//! The engine only produces and consumes a serialized snapshot blob; where
//! that blob lives between invocations is the store's concern. The
//! [`SnapshotStore`] trait keeps that decision out of the command layer.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage — the whole lexicon in a single
//!   `lexicon.json` under the data directory.
//! - [`memory::MemoryStore`]: in-memory storage for testing — no
//!   persistence, fast isolated test execution.

use crate::error::Result;
use crate::lexicon::Lexicon;

pub mod fs;
pub mod memory;

/// Abstract home for the lexicon between invocations.
pub trait SnapshotStore {
    /// Load the current lexicon, or a fresh one if nothing is stored yet.
    fn load(&self) -> Result<Lexicon>;

    /// Persist the lexicon, replacing whatever was stored.
    fn save(&mut self, lexicon: &Lexicon) -> Result<()>;
}
