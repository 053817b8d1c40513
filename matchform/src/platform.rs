use std::fmt;

use crate::core::Element;

/// Trait for the rendering target that owns an editable tree.
/// Builder, extractor and affordances only talk to this, so they stay
/// independent of any UI toolkit.
pub trait Surface {
    type Handle: Copy + Eq + fmt::Debug;

    /// Render an element as a new detached node.
    fn create(&mut self, element: Element) -> Self::Handle;
    /// Append `child` as the last child of `parent`, detaching it first.
    fn append_child(&mut self, parent: Self::Handle, child: Self::Handle);
    /// Insert `child` before `reference`, or append when `reference` is not a child of `parent`.
    fn insert_before(&mut self, parent: Self::Handle, child: Self::Handle, reference: Self::Handle);
    /// Detach `node` and discard its subtree.
    fn remove(&mut self, node: Self::Handle);

    fn element(&self, node: Self::Handle) -> Option<&Element>;
    fn element_mut(&mut self, node: Self::Handle) -> Option<&mut Element>;
    fn parent(&self, node: Self::Handle) -> Option<Self::Handle>;
    fn children(&self, node: Self::Handle) -> Vec<Self::Handle>;

    fn is_hidden(&self, node: Self::Handle) -> bool;
    fn set_hidden(&mut self, node: Self::Handle, hidden: bool);

    /// Stable numeric id used by the editing protocol.
    fn raw_id(&self, node: Self::Handle) -> u32;
    /// Look up a live node by its raw id.
    fn resolve(&self, raw: u32) -> Option<Self::Handle>;

    /// Release storage held by removed nodes once nothing is live.
    fn reclaim(&mut self) {}

    fn previous_sibling(&self, node: Self::Handle) -> Option<Self::Handle> {
        let siblings = self.children(self.parent(node)?);
        let index = siblings.iter().position(|&s| s == node)?;
        index.checked_sub(1).map(|i| siblings[i])
    }

    fn following_siblings(&self, node: Self::Handle) -> Vec<Self::Handle> {
        let Some(parent) = self.parent(node) else {
            return Vec::new();
        };
        let siblings = self.children(parent);
        match siblings.iter().position(|&s| s == node) {
            Some(index) => siblings[index + 1..].to_vec(),
            None => Vec::new(),
        }
    }

    fn find_child(
        &self,
        node: Self::Handle,
        predicate: impl Fn(&Element) -> bool,
    ) -> Option<Self::Handle> {
        self.children(node)
            .into_iter()
            .find(|&c| self.element(c).is_some_and(&predicate))
    }

    /// Current value of an input node.
    fn value(&self, node: Self::Handle) -> Option<&str> {
        match self.element(node)? {
            Element::Input { value } => Some(value.as_str()),
            _ => None,
        }
    }

    /// Returns false when `node` is not an input.
    fn set_value(&mut self, node: Self::Handle, value: String) -> bool {
        match self.element_mut(node) {
            Some(Element::Input { value: current }) => {
                *current = value;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
struct Node {
    element: Element,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    hidden: bool,
}

/// In-memory surface. Removed nodes leave tombstones, so ids are never reused.
/// `base` is the id of `nodes[0]`; reclaiming moves it past every id handed out.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    base: u32,
    nodes: Vec<Option<Node>>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, id: NodeId) -> Option<usize> {
        id.0.checked_sub(self.base).map(|i| i as usize)
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(self.slot(id)?)?.as_ref()
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let slot = self.slot(id)?;
        self.nodes.get_mut(slot)?.as_mut()
    }

    fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.node_mut(id).and_then(|n| n.parent.take()) else {
            return;
        };
        if let Some(parent) = self.node_mut(parent) {
            parent.children.retain(|&c| c != id);
        }
    }

    fn discard(&mut self, id: NodeId) {
        let Some(node) = self
            .slot(id)
            .and_then(|slot| self.nodes.get_mut(slot))
            .and_then(Option::take)
        else {
            return;
        };
        for child in node.children {
            self.discard(child);
        }
    }
}

impl Surface for HeadlessSurface {
    type Handle = NodeId;

    fn create(&mut self, element: Element) -> NodeId {
        let id = NodeId(self.base + self.nodes.len() as u32);
        self.nodes.push(Some(Node {
            element,
            parent: None,
            children: Vec::new(),
            hidden: false,
        }));
        id
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.node(parent).is_none() || self.node(child).is_none() {
            tracing::warn!("append_child on missing node: {} <- {}", parent, child);
            return;
        }
        self.detach(child);
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
    }

    fn insert_before(&mut self, parent: NodeId, child: NodeId, reference: NodeId) {
        if self.node(parent).is_none() || self.node(child).is_none() {
            tracing::warn!("insert_before on missing node: {} <- {}", parent, child);
            return;
        }
        self.detach(child);
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            match node.children.iter().position(|&c| c == reference) {
                Some(index) => node.children.insert(index, child),
                None => node.children.push(child),
            }
        }
    }

    fn remove(&mut self, node: NodeId) {
        self.detach(node);
        self.discard(node);
    }

    fn element(&self, node: NodeId) -> Option<&Element> {
        self.node(node).map(|n| &n.element)
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.node_mut(node).map(|n| &mut n.element)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node)?.parent
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.node(node)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    fn is_hidden(&self, node: NodeId) -> bool {
        self.node(node).is_some_and(|n| n.hidden)
    }

    fn set_hidden(&mut self, node: NodeId, hidden: bool) {
        if let Some(node) = self.node_mut(node) {
            node.hidden = hidden;
        }
    }

    fn raw_id(&self, node: NodeId) -> u32 {
        node.raw()
    }

    fn resolve(&self, raw: u32) -> Option<NodeId> {
        let id = NodeId(raw);
        self.node(id).map(|_| id)
    }

    fn reclaim(&mut self) {
        if !self.is_empty() {
            return;
        }
        tracing::debug!("Reclaiming {} removed node(s)", self.nodes.len());
        self.base += self.nodes.len() as u32;
        self.nodes.clear();
    }
}
