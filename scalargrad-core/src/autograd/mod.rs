//! Reverse-mode differentiation over the node arena.
//!
//! - [`graph`]: topological ordering of the nodes reachable from a terminal node.
//! - [`backward_op`]: the per-operation local gradient rules.
//! - [`grad_check`]: finite-difference verification of those rules.
//!
//! The backward driver itself is [`Value::backward`](crate::value::Value::backward).

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use grad_check::{check_grad, GradCheckConfig, GradCheckError};
pub use graph::topological_sort;
