// src/graph.rs

use crate::node::{Node, NodeId};
use crate::value::Value;
use log::trace;
use std::cell::{Ref, RefCell, RefMut};

/// Arena owning every node of a computation graph.
///
/// `Graph` uses `RefCell<Vec<Node>>` internally so that:
/// 1.  **Shared Ownership:** any number of [`Value`] handles (and any number of
///     child nodes) can refer to the same node by its [`NodeId`] without owning it.
/// 2.  **Interior Mutability:** new nodes can be appended and gradients accumulated
///     through a shared `&Graph`, which is what every handle carries.
///
/// Nodes are never removed, so ids stay valid for the lifetime of the arena and
/// the parent relation cannot form a cycle: a node can only name parents that
/// already exist. `RefCell` makes the arena `!Sync`; one graph is built and
/// differentiated on one thread.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: RefCell<Vec<Node>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: RefCell::new(Vec::with_capacity(capacity)),
        }
    }

    /// Creates a leaf (input) node holding `data`.
    pub fn leaf(&self, data: f64) -> Value<'_> {
        self.push(Node::leaf(data))
    }

    /// Creates a leaf node with a diagnostic label.
    pub fn leaf_with_label(&self, data: f64, label: impl Into<String>) -> Value<'_> {
        let mut node = Node::leaf(data);
        node.label = Some(label.into());
        self.push(node)
    }

    /// Number of nodes allocated so far, promoted scalar leaves included.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    /// Resets the gradient of every node to 0.0.
    ///
    /// Call this between independent backward passes over the same graph,
    /// otherwise gradients from earlier passes keep accumulating.
    pub fn zero_grad(&self) {
        for node in self.nodes.borrow_mut().iter_mut() {
            node.grad = 0.0;
        }
    }

    /// Handles to every node, in creation order.
    pub fn values(&self) -> impl Iterator<Item = Value<'_>> + '_ {
        (0..self.len()).map(move |index| Value::from_parts(self, NodeId(index)))
    }

    pub(crate) fn push(&self, node: Node) -> Value<'_> {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        debug_assert!(
            node.op.parents().iter().all(|parent| *parent < id),
            "parents must exist before their child"
        );
        trace!("Graph: push node {} op={} data={}", id, node.op, node.data);
        nodes.push(node);
        drop(nodes);
        Value::from_parts(self, id)
    }

    pub(crate) fn node(&self, id: NodeId) -> Ref<'_, Node> {
        Ref::map(self.nodes.borrow(), |nodes| &nodes[id.0])
    }

    pub(crate) fn node_mut(&self, id: NodeId) -> RefMut<'_, Node> {
        RefMut::map(self.nodes.borrow_mut(), |nodes| &mut nodes[id.0])
    }

    pub(crate) fn nodes(&self) -> Ref<'_, Vec<Node>> {
        self.nodes.borrow()
    }

    pub(crate) fn nodes_mut(&self) -> RefMut<'_, Vec<Node>> {
        self.nodes.borrow_mut()
    }
}
