// src/value/mod.rs

use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::{NodeId, Op};
use crate::ops::{arithmetic::pow::powf, exp_op, pow_op, relu_op, tanh_op};

mod autograd_methods;
mod operand;
mod traits;

pub use operand::Operand;

/// Handle to one scalar node of a [`Graph`].
///
/// A `Value` is a cheap `Copy` pair of the arena reference and the node's id,
/// so the same node can be used as an operand any number of times (fan-in)
/// without cloning anything. The `'g` lifetime ties every handle to its arena;
/// a handle can never outlive the node it points at.
///
/// Equality and hashing are by identity (same arena, same id), never by value.
#[derive(Clone, Copy)]
pub struct Value<'g> {
    graph: &'g Graph,
    id: NodeId,
}

impl<'g> Value<'g> {
    pub(crate) fn from_parts(graph: &'g Graph, id: NodeId) -> Self {
        Value { graph, id }
    }

    /// The arena this node lives in.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Forward value.
    pub fn data(&self) -> f64 {
        self.graph.node(self.id).data
    }

    /// Gradient accumulated by the backward passes run so far.
    pub fn grad(&self) -> f64 {
        self.graph.node(self.id).grad
    }

    /// The operation that produced this node.
    pub fn op(&self) -> Op {
        self.graph.node(self.id).op
    }

    pub fn is_leaf(&self) -> bool {
        self.op().is_leaf()
    }

    /// Handles to the operand nodes, in operand order. Empty for leaves.
    pub fn parents(&self) -> Vec<Value<'g>> {
        self.op()
            .parents()
            .iter()
            .map(|&id| Value::from_parts(self.graph, id))
            .collect()
    }

    pub fn label(&self) -> Option<String> {
        self.graph.node(self.id).label.clone()
    }

    /// Attaches a diagnostic label. The engine never reads it.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.graph.node_mut(self.id).label = Some(label.into());
        self
    }

    /// Whether both handles point into the same arena.
    pub(crate) fn same_graph(&self, other: &Value<'_>) -> bool {
        std::ptr::eq(self.graph, other.graph)
    }

    /// `self ** exponent`. The exponent must be a number; see [`pow_op`].
    ///
    /// # Errors
    /// Returns `AutogradError::UnsupportedOperand` if `exponent` is a `Value`.
    pub fn pow(self, exponent: impl Into<Operand<'g>>) -> Result<Value<'g>, AutogradError> {
        pow_op(self, exponent)
    }

    /// `self ** exponent` for a constant exponent.
    pub fn powf(self, exponent: f64) -> Value<'g> {
        powf(self, exponent)
    }

    pub fn exp(self) -> Value<'g> {
        exp_op(self)
    }

    pub fn tanh(self) -> Value<'g> {
        tanh_op(self)
    }

    pub fn relu(self) -> Value<'g> {
        relu_op(self)
    }
}
