//! Document tree operations.
//!
//! The [`Dom`] owns an `Arena<Node>` and provides tree construction,
//! traversal, and the query surface the enhancement behaviors use
//! (lookup by id, tag, and class).

use arena::Arena;

use crate::node::{Attr, ElementData, Node, NodeData, NodeId};

/// The host document tree.
pub struct Dom {
    pub nodes: Arena<Node>,
    root: Option<NodeId>,
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom {
    /// Create an empty document (no root yet).
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    // =======================================================================
    // Node creation
    // =======================================================================

    /// Create an element node.
    ///
    /// The `id` and `classes` caches are extracted from `attrs` automatically.
    pub fn create_element(&mut self, tag_name: &str, attrs: Vec<Attr>) -> NodeId {
        let id = attrs
            .iter()
            .find(|a| a.name == "id")
            .map(|a| a.value.clone());

        let classes = attrs
            .iter()
            .find(|a| a.name == "class")
            .map(|a| {
                a.value
                    .split_whitespace()
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        self.nodes.insert(Node::new(NodeData::Element(ElementData {
            tag_name: tag_name.to_string(),
            attrs,
            id,
            classes,
        })))
    }

    /// Convenience: create an element with no attributes.
    pub fn create_plain_element(&mut self, tag_name: &str) -> NodeId {
        self.create_element(tag_name, Vec::new())
    }

    /// Create a text node.
    pub fn create_text(&mut self, data: &str) -> NodeId {
        self.nodes.insert(Node::new(NodeData::Text {
            data: data.to_string(),
        }))
    }

    // =======================================================================
    // Root
    // =======================================================================

    /// Declare `node` as the document root.
    pub fn set_root(&mut self, node: NodeId) {
        self.root = Some(node);
    }

    /// The document root, if one has been declared.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    // =======================================================================
    // Tree mutation
    // =======================================================================

    /// Append `child` as the last child of `parent`.
    /// `child` must be detached (newly created); documents are built
    /// append-only.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        let old_last = self.nodes.get(parent).and_then(|n| n.last_child);

        if let Some(old_last_id) = old_last {
            if let Some(old_last_node) = self.nodes.get_mut(old_last_id) {
                old_last_node.next_sibling = Some(child);
            }
        }

        if let Some(child_node) = self.nodes.get_mut(child) {
            child_node.parent = Some(parent);
            child_node.prev_sibling = old_last;
            child_node.next_sibling = None;
        }

        if let Some(parent_node) = self.nodes.get_mut(parent) {
            if parent_node.first_child.is_none() {
                parent_node.first_child = Some(child);
            }
            parent_node.last_child = Some(child);
        }
    }

    // =======================================================================
    // Traversal
    // =======================================================================

    /// Return the immediate children of `parent` in document order.
    pub fn children(&self, parent: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut cursor = self.nodes.get(parent).and_then(|n| n.first_child);
        while let Some(id) = cursor {
            out.push(id);
            cursor = self.nodes.get(id).and_then(|n| n.next_sibling);
        }
        out
    }

    /// Return the chain of ancestors from `node` up to the root.
    /// The first element is the direct parent, the last is the root.
    pub fn ancestors(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut cursor = self.nodes.get(node).and_then(|n| n.parent);
        while let Some(id) = cursor {
            out.push(id);
            cursor = self.nodes.get(id).and_then(|n| n.parent);
        }
        out
    }

    /// Return all descendants of `node` in pre-order, not including `node`.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_descendants(node, &mut out);
        out
    }

    fn collect_descendants(&self, node: NodeId, out: &mut Vec<NodeId>) {
        for child in self.children(node) {
            out.push(child);
            self.collect_descendants(child, out);
        }
    }

    // =======================================================================
    // Queries
    // =======================================================================

    /// Find the first element with the given `id` attribute in the subtree
    /// rooted at `root` (pre-order, `root` included).
    pub fn element_by_id(&self, root: NodeId, id: &str) -> Option<NodeId> {
        self.subtree_find(root, |elem| elem.id.as_deref() == Some(id))
    }

    /// All elements with the given tag name in the subtree rooted at `root`
    /// (pre-order, `root` included).
    pub fn elements_by_tag(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        self.subtree_filter(root, |elem| elem.tag_name == tag)
    }

    /// All elements carrying the given class in the subtree rooted at `root`
    /// (pre-order, `root` included).
    pub fn elements_by_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.subtree_filter(root, |elem| elem.has_class(class))
    }

    /// Return the value of the named attribute on `node`, if it is an
    /// element and carries the attribute.
    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes.get(node)?.as_element()?.attr(name)
    }

    fn subtree_find<F>(&self, root: NodeId, pred: F) -> Option<NodeId>
    where
        F: Fn(&ElementData) -> bool,
    {
        let matches = |id: NodeId| {
            self.nodes
                .get(id)
                .and_then(|n| n.as_element())
                .is_some_and(&pred)
        };
        if matches(root) {
            return Some(root);
        }
        self.descendants(root).into_iter().find(|&id| matches(id))
    }

    fn subtree_filter<F>(&self, root: NodeId, pred: F) -> Vec<NodeId>
    where
        F: Fn(&ElementData) -> bool,
    {
        let matches = |id: NodeId| {
            self.nodes
                .get(id)
                .and_then(|n| n.as_element())
                .is_some_and(&pred)
        };
        let mut out = Vec::new();
        if matches(root) {
            out.push(root);
        }
        out.extend(self.descendants(root).into_iter().filter(|&id| matches(id)));
        out
    }
}

// ===========================================================================
// Tests
// ===========================================================================
