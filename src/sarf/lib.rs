//! # Sarf Architecture
//!
//! Sarf is a **UI-agnostic morphological derivation library**. This is not a
//! CLI application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! The domain is root-and-pattern morphology: a word family is identified by
//! a three-consonant root (e.g. كتب "writing"), and concrete words are
//! derived by substituting the root's radicals into named templates called
//! schemes (e.g. فاعل yields كاتب, "writer").
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (root strings → RootKeys)              │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Loads the lexicon, applies the engine, saves it back     │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine core (model, lexicon, morph, ingest, snapshot)      │
//! │  - Pure data structures and algorithms, no I/O at all       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract SnapshotStore trait                             │
//! │  - FileStore (production), MemoryStore (testing)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types, **never** writes to stdout/stderr, **never** calls
//! `std::process::exit`, and **never** assumes a terminal. The same core
//! could serve a web UI or any other client; the engine only produces and
//! consumes the snapshot blob, and where that blob lives is the caller's
//! concern.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`model`]: Core data types (`RootKey`, `DerivedWord`, `Scheme`)
//! - [`lexicon`]: The in-memory root and scheme stores
//! - [`morph`]: The derivation engine—template substitution and validation
//! - [`ingest`]: Bulk root extraction from free-form text
//! - [`snapshot`]: The serialize/restore persistence codec
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod ingest;
pub mod lexicon;
pub mod model;
pub mod morph;
pub mod snapshot;
pub mod store;
