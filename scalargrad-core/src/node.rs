// src/node.rs
use std::fmt;

/// Stable identity of a node inside its [`Graph`](crate::graph::Graph) arena.
///
/// Ids are handed out in creation order, so a node's parents always carry
/// strictly smaller ids than the node itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The operation that produced a node, together with everything its backward
/// rule needs: the parent ids and any constant operand.
///
/// Derived operations (negation, subtraction, division) never appear here;
/// they are built out of these primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Input value, no parents.
    Leaf,
    Add([NodeId; 2]),
    Mul([NodeId; 2]),
    /// `base ** exponent` with a constant exponent.
    Pow { base: [NodeId; 1], exponent: f64 },
    Exp([NodeId; 1]),
    Tanh([NodeId; 1]),
    Relu([NodeId; 1]),
}

impl Op {
    /// Ids of the operand nodes, in operand order.
    pub fn parents(&self) -> &[NodeId] {
        match self {
            Op::Leaf => &[],
            Op::Add(ids) | Op::Mul(ids) => ids,
            Op::Pow { base, .. } => base,
            Op::Exp(ids) | Op::Tanh(ids) | Op::Relu(ids) => ids,
        }
    }

    /// Short tag naming the operation (`none` for leaves).
    pub fn name(&self) -> &'static str {
        match self {
            Op::Leaf => "none",
            Op::Add(_) => "add",
            Op::Mul(_) => "mul",
            Op::Pow { .. } => "pow",
            Op::Exp(_) => "exp",
            Op::Tanh(_) => "tanh",
            Op::Relu(_) => "relu",
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Op::Leaf)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Pow { exponent, .. } => write!(f, "pow({})", exponent),
            other => f.write_str(other.name()),
        }
    }
}

/// Internal storage for one scalar in the computation graph.
///
/// Only `grad` (and the diagnostic `label`) changes after construction.
/// Nodes are owned by the `Graph` arena and reached through `Value` handles.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    /// Forward value.
    pub(crate) data: f64,
    /// Accumulated d(terminal)/d(this node). Starts at 0.0.
    pub(crate) grad: f64,
    /// Producing operation and its parents.
    pub(crate) op: Op,
    pub(crate) label: Option<String>,
}

impl Node {
    pub(crate) fn new(data: f64, op: Op) -> Self {
        Node {
            data,
            grad: 0.0,
            op,
            label: None,
        }
    }

    pub(crate) fn leaf(data: f64) -> Self {
        Node::new(data, Op::Leaf)
    }
}
