#![forbid(unsafe_code)]

//! End-to-end lifecycle of the global suggestions box on a fresh page.

use notes_ui_core::{
    EventStore, HIDDEN_DISPLAY, MemoryDocument, SUGGESTIONS_BOX_CLASS, SUGGESTIONS_BOX_ID,
    SuggestionsBox,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn fresh_page_has_no_events_and_no_box() {
    init_logging();
    let events = EventStore::new();
    let sb = SuggestionsBox::new(MemoryDocument::new());

    assert!(events.is_empty());
    assert_eq!(sb.handle(), None);
    assert_eq!(sb.host().element_by_id(SUGGESTIONS_BOX_ID), None);
}

#[test]
fn create_hide_recreate() {
    init_logging();
    let mut sb = SuggestionsBox::new(MemoryDocument::new());

    let first = sb.create().expect("create on a page with a body");
    let doc = sb.host();
    assert_eq!(doc.elements_with_id(SUGGESTIONS_BOX_ID), vec![first]);
    assert_eq!(doc.elements_with_class(SUGGESTIONS_BOX_CLASS), vec![first]);
    assert_eq!(doc.display(first), None);

    sb.hide();
    let doc = sb.host();
    assert_eq!(doc.element_by_id(SUGGESTIONS_BOX_ID), Some(first));
    assert_eq!(doc.display(first), Some(HIDDEN_DISPLAY));

    let second = sb.create().expect("recreate");
    let doc = sb.host();
    assert_ne!(first, second);
    assert!(!doc.is_attached(first));
    assert_eq!(doc.elements_with_id(SUGGESTIONS_BOX_ID), vec![second]);
    assert_eq!(doc.display(second), None);
}

#[test]
fn hide_before_any_create_then_create() {
    init_logging();
    let mut sb = SuggestionsBox::new(MemoryDocument::new());
    sb.hide();
    sb.hide();
    assert!(sb.host().body_children().is_empty());

    let node = sb.create().expect("create");
    assert_eq!(sb.host().display(node), None);
}
