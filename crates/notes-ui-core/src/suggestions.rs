#![forbid(unsafe_code)]

//! Global suggestions overlay for the notes autocomplete.
//!
//! Lifecycle: absent → created → hidden → created → …; every create tears
//! down the previous overlay first, so at most one node carrying the box id
//! is ever attached.

use tracing::{debug, trace, warn};

use crate::host::{DocumentHost, HostError};

pub const SUGGESTIONS_BOX_TAG: &str = "div";
pub const SUGGESTIONS_BOX_CLASS: &str = "suggestions-box";
pub const SUGGESTIONS_BOX_ID: &str = "global-suggestions-box";
/// Inline `display` value applied by [`SuggestionsBox::hide`].
pub const HIDDEN_DISPLAY: &str = "none";

/// Owner of the one live overlay node.
#[derive(Debug)]
pub struct SuggestionsBox<H: DocumentHost> {
    host: H,
    current: Option<H::Node>,
    hidden: bool,
}

impl<H: DocumentHost> SuggestionsBox<H> {
    #[must_use]
    pub fn new(host: H) -> Self {
        Self {
            host,
            current: None,
            hidden: false,
        }
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Handle of the current overlay, if one was created.
    #[must_use]
    pub fn handle(&self) -> Option<&H::Node> {
        self.current.as_ref()
    }

    /// Whether the current overlay was hidden since it was created.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.current.is_some() && self.hidden
    }

    /// Remove any previous overlay, then build, tag and attach a fresh one.
    ///
    /// The previous node is detached before the new one is built, so a host
    /// failure part-way leaves no overlay rather than two.
    pub fn create(&mut self) -> Result<H::Node, HostError> {
        if let Some(previous) = self.current.take() {
            debug!(node = ?previous, "removing previous suggestions box");
            self.host.remove(&previous);
        }
        self.hidden = false;

        let node = self.host.create_element(SUGGESTIONS_BOX_TAG)?;
        self.host.set_class_name(&node, SUGGESTIONS_BOX_CLASS)?;
        self.host.set_id(&node, SUGGESTIONS_BOX_ID)?;
        self.host.append_to_body(&node)?;

        debug!(node = ?node, "suggestions box created");
        self.current = Some(node.clone());
        Ok(node)
    }

    /// Hide the current overlay without detaching it. No-op when absent.
    pub fn hide(&mut self) {
        let Some(node) = self.current.as_ref() else {
            trace!("hide requested with no suggestions box");
            return;
        };
        match self.host.set_display(node, HIDDEN_DISPLAY) {
            Ok(()) => self.hidden = true,
            Err(err) => warn!(%err, "failed to hide suggestions box"),
        }
    }
}
