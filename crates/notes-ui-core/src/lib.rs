#![forbid(unsafe_code)]

//! `notes-ui-core` holds the page-level UI state behind the meeting-notes
//! autocomplete.
//!
//! Design goals:
//! - **Host-driven DOM**: every tree mutation goes through [`DocumentHost`], so
//!   the same manager drives a real browser document (`notes-ui-web`) or the
//!   deterministic [`MemoryDocument`] used in tests.
//! - **Single overlay**: [`SuggestionsBox`] owns the only handle to the
//!   suggestions overlay and guarantees at most one such node is attached.
//! - **No blocking / no threads**: suitable for `wasm32-unknown-unknown`.
//!
//! This crate intentionally does not bind to `wasm-bindgen`; the JS surface
//! lives in `notes-ui-web`.

pub mod events;
pub mod host;
pub mod memory;
pub mod suggestions;

pub use events::{EventRecord, EventStore, EventStoreError};
pub use host::{DocumentHost, HostError};
pub use memory::{MemoryDocument, MemoryNode, NodeId};
pub use suggestions::{
    HIDDEN_DISPLAY, SUGGESTIONS_BOX_CLASS, SUGGESTIONS_BOX_ID, SUGGESTIONS_BOX_TAG, SuggestionsBox,
};
