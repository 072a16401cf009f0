use crate::config::SarfConfig;
use crate::model::{DerivedWord, Scheme};
use crate::morph::Validation;

pub mod config;
pub mod derive;
pub mod ingest;
pub mod roots;
pub mod schemes;
pub mod snapshot;
pub mod validate;
pub mod words;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One root as listings expose it: its canonical key plus the stored
/// derived words in insertion order.
#[derive(Debug, Clone)]
pub struct RootListing {
    pub key: String,
    pub derived: Vec<DerivedWord>,
}

/// Structured result of a command. Typed payloads for the UI to render;
/// messages carry the human-readable outcome.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub roots: Vec<RootListing>,
    pub derived: Vec<DerivedWord>,
    pub schemes: Vec<Scheme>,
    pub validation: Option<Validation>,
    /// Presence checks (root-exists)
    pub found: Option<bool>,
    /// Whether a mutation created new state (remove, attach, store, import)
    pub changed: Option<bool>,
    /// Counting operations (ingestion, store-all)
    pub count: Option<usize>,
    /// Snapshot export payload
    pub blob: Option<String>,
    pub config: Option<SarfConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_roots(mut self, roots: Vec<RootListing>) -> Self {
        self.roots = roots;
        self
    }

    pub fn with_derived(mut self, derived: Vec<DerivedWord>) -> Self {
        self.derived = derived;
        self
    }

    pub fn with_schemes(mut self, schemes: Vec<Scheme>) -> Self {
        self.schemes = schemes;
        self
    }

    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = Some(validation);
        self
    }

    pub fn with_found(mut self, found: bool) -> Self {
        self.found = Some(found);
        self
    }

    pub fn with_changed(mut self, changed: bool) -> Self {
        self.changed = Some(changed);
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_blob(mut self, blob: String) -> Self {
        self.blob = Some(blob);
        self
    }

    pub fn with_config(mut self, config: SarfConfig) -> Self {
        self.config = Some(config);
        self
    }
}
