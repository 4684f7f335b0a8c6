#![forbid(unsafe_code)]

//! WASM front end for the meeting-notes UI helpers.
//!
//! Exposes the process-wide suggestions box and event collection to the page
//! script:
//!
//! | JS export | behavior |
//! |-----------|----------|
//! | `createSuggestionsBox()` | replace any existing overlay with a fresh one, return it |
//! | `hideSuggestionsBox()` | hide the overlay if one exists |
//! | `loadEvents(json)` | replace the events with a JSON array of objects |
//! | `eventCount()` / `eventsJson()` / `clearEvents()` | event collection accessors |

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use dom::WebDocument;
#[cfg(target_arch = "wasm32")]
pub use wasm::{
    clear_events, create_suggestions_box, event_count, events_json, hide_suggestions_box,
    load_events,
};

// Page state is used by the wasm module and by native tests.
#[cfg(any(target_arch = "wasm32", test))]
mod page;
