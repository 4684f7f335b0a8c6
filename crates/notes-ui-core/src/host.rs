#![forbid(unsafe_code)]

//! The document primitives the UI helpers consume.

use thiserror::Error;

/// Failure of a host document primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// No document is reachable from the current global scope.
    #[error("no document available")]
    NoDocument,
    /// The document has no root (`<body>`) to attach nodes to.
    #[error("document has no body")]
    NoBody,
    /// A host call was rejected.
    #[error("host call failed: {0}")]
    Js(String),
}

/// Minimal element API of the host document.
///
/// Nodes are opaque handles. Creating an element never attaches it; the
/// caller decides where it lands.
pub trait DocumentHost {
    /// Handle to one element of this host.
    type Node: Clone + PartialEq + core::fmt::Debug;

    fn create_element(&mut self, tag: &str) -> Result<Self::Node, HostError>;

    fn set_class_name(&mut self, node: &Self::Node, class_name: &str) -> Result<(), HostError>;

    fn set_id(&mut self, node: &Self::Node, id: &str) -> Result<(), HostError>;

    /// Attach `node` as the last child of the document root.
    fn append_to_body(&mut self, node: &Self::Node) -> Result<(), HostError>;

    /// Detach `node` from its parent. Detaching a node that has no parent is
    /// a no-op, matching `ChildNode.remove()`.
    fn remove(&mut self, node: &Self::Node);

    /// Set the inline `display` style of `node`.
    fn set_display(&mut self, node: &Self::Node, value: &str) -> Result<(), HostError>;
}
