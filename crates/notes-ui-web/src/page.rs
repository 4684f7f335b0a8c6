#![forbid(unsafe_code)]

//! Host-generic page state behind the JS exports.
//!
//! The document is connected lazily on the first create so the module can be
//! loaded before `<body>` exists.

use notes_ui_core::{DocumentHost, EventStore, HostError, SuggestionsBox};
use tracing::debug;

pub struct NotesPage<H: DocumentHost> {
    suggestions: Option<SuggestionsBox<H>>,
    events: EventStore,
}

impl<H: DocumentHost> Default for NotesPage<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: DocumentHost> NotesPage<H> {
    pub fn new() -> Self {
        Self {
            suggestions: None,
            events: EventStore::new(),
        }
    }

    pub fn events(&self) -> &EventStore {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut EventStore {
        &mut self.events
    }

    #[cfg(test)]
    pub fn suggestions(&self) -> Option<&SuggestionsBox<H>> {
        self.suggestions.as_ref()
    }

    pub fn create_suggestions_box(
        &mut self,
        connect: impl FnOnce() -> Result<H, HostError>,
    ) -> Result<H::Node, HostError> {
        let sb = match self.suggestions.as_mut() {
            Some(sb) => sb,
            None => {
                let host = connect()?;
                debug!("document host connected");
                self.suggestions.insert(SuggestionsBox::new(host))
            }
        };
        sb.create()
    }

    pub fn hide_suggestions_box(&mut self) {
        if let Some(sb) = self.suggestions.as_mut() {
            sb.hide();
        }
    }
}
