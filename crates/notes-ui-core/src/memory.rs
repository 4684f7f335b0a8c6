#![forbid(unsafe_code)]

//! Deterministic in-memory document.
//!
//! Nodes live in an arena indexed by [`NodeId`]; removed nodes stay in the
//! arena (detached) so callers can still inspect stale handles, the same way
//! a detached DOM element keeps its attributes.

use crate::host::{DocumentHost, HostError};

/// Arena index of a [`MemoryNode`]. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryNode {
    pub tag: String,
    pub class_name: String,
    pub id: String,
    /// Inline `display` style; `None` until something sets it.
    pub display: Option<String>,
}

/// Host-owned document with a single root child list (`<body>`).
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<MemoryNode>,
    body: Option<Vec<NodeId>>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Create an empty document with a body.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            body: Some(Vec::new()),
        }
    }

    /// Create a document whose body has not been parsed yet.
    #[must_use]
    pub fn without_body() -> Self {
        Self {
            nodes: Vec::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&MemoryNode> {
        self.nodes.get(id.0 as usize)
    }

    /// Children of the body in document order.
    #[must_use]
    pub fn body_children(&self) -> &[NodeId] {
        self.body.as_deref().unwrap_or(&[])
    }

    #[must_use]
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.body_children().contains(&id)
    }

    /// Inline `display` value of `id`, if set.
    #[must_use]
    pub fn display(&self, id: NodeId) -> Option<&str> {
        self.node(id)?.display.as_deref()
    }

    /// Attached nodes carrying `element_id`, in document order.
    #[must_use]
    pub fn elements_with_id(&self, element_id: &str) -> Vec<NodeId> {
        self.body_children()
            .iter()
            .copied()
            .filter(|&id| self.node(id).is_some_and(|node| node.id == element_id))
            .collect()
    }

    /// Attached nodes carrying `class_name`, in document order.
    #[must_use]
    pub fn elements_with_class(&self, class_name: &str) -> Vec<NodeId> {
        self.body_children()
            .iter()
            .copied()
            .filter(|&id| {
                self.node(id)
                    .is_some_and(|node| node.class_name.split_whitespace().any(|c| c == class_name))
            })
            .collect()
    }

    /// `document.getElementById` equivalent.
    #[must_use]
    pub fn element_by_id(&self, element_id: &str) -> Option<NodeId> {
        self.elements_with_id(element_id).into_iter().next()
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut MemoryNode, HostError> {
        self.nodes
            .get_mut(id.0 as usize)
            .ok_or_else(|| HostError::Js(format!("unknown node {}", id.0)))
    }
}

impl DocumentHost for MemoryDocument {
    type Node = NodeId;

    fn create_element(&mut self, tag: &str) -> Result<NodeId, HostError> {
        let raw = u32::try_from(self.nodes.len())
            .map_err(|_| HostError::Js("node arena exhausted".to_string()))?;
        self.nodes.push(MemoryNode {
            tag: tag.to_string(),
            ..MemoryNode::default()
        });
        Ok(NodeId(raw))
    }

    fn set_class_name(&mut self, node: &NodeId, class_name: &str) -> Result<(), HostError> {
        self.node_mut(*node)?.class_name = class_name.to_string();
        Ok(())
    }

    fn set_id(&mut self, node: &NodeId, id: &str) -> Result<(), HostError> {
        self.node_mut(*node)?.id = id.to_string();
        Ok(())
    }

    fn append_to_body(&mut self, node: &NodeId) -> Result<(), HostError> {
        if self.node(*node).is_none() {
            return Err(HostError::Js(format!("unknown node {}", node.0)));
        }
        let body = self.body.as_mut().ok_or(HostError::NoBody)?;
        // appendChild moves an already-attached node to the end.
        body.retain(|&child| child != *node);
        body.push(*node);
        Ok(())
    }

    fn remove(&mut self, node: &NodeId) {
        if let Some(body) = self.body.as_mut() {
            body.retain(|&child| child != *node);
        }
    }

    fn set_display(&mut self, node: &NodeId, value: &str) -> Result<(), HostError> {
        self.node_mut(*node)?.display = Some(value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn created_elements_start_detached_with_fresh_ids() {
        let mut doc = MemoryDocument::new();
        let a = doc.create_element("div").unwrap();
        let b = doc.create_element("span").unwrap();
        assert_ne!(a, b);
        assert!(!doc.is_attached(a));
        assert_eq!(doc.node(b).map(|n| n.tag.as_str()), Some("span"));
        assert!(doc.body_children().is_empty());
    }

    #[test]
    fn append_moves_existing_child_to_end() {
        let mut doc = MemoryDocument::new();
        let a = doc.create_element("div").unwrap();
        let b = doc.create_element("div").unwrap();
        doc.append_to_body(&a).unwrap();
        doc.append_to_body(&b).unwrap();
        doc.append_to_body(&a).unwrap();
        assert_eq!(doc.body_children(), &[b, a]);
    }

    #[test]
    fn remove_detached_node_is_noop() {
        let mut doc = MemoryDocument::new();
        let a = doc.create_element("div").unwrap();
        doc.remove(&a);
        doc.remove(&a);
        assert!(doc.body_children().is_empty());
        // Detached nodes keep their attributes.
        doc.set_id(&a, "x").unwrap();
        assert_eq!(doc.node(a).map(|n| n.id.as_str()), Some("x"));
    }

    #[test]
    fn append_without_body_fails() {
        let mut doc = MemoryDocument::without_body();
        let a = doc.create_element("div").unwrap();
        assert_eq!(doc.append_to_body(&a), Err(HostError::NoBody));
        doc.remove(&a);
    }

    #[test]
    fn queries_only_see_attached_nodes() {
        let mut doc = MemoryDocument::new();
        let a = doc.create_element("div").unwrap();
        doc.set_id(&a, "box").unwrap();
        doc.set_class_name(&a, "panel suggestions").unwrap();
        assert_eq!(doc.element_by_id("box"), None);

        doc.append_to_body(&a).unwrap();
        assert_eq!(doc.element_by_id("box"), Some(a));
        assert_eq!(doc.elements_with_class("suggestions"), vec![a]);
        assert!(doc.elements_with_class("sugg").is_empty());
    }
}
