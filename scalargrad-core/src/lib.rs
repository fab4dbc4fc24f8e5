//! Reverse-mode automatic differentiation over scalar values.
//!
//! Arithmetic on [`Value`] handles evaluates eagerly and records a computation
//! graph in a [`Graph`] arena; [`Value::backward`] then fills in the gradient of
//! that value with respect to every node it depends on.
//!
//! ```
//! use scalargrad_core::Graph;
//!
//! let graph = Graph::new();
//! let a = graph.leaf_with_label(2.0, "a");
//! let b = graph.leaf_with_label(-3.0, "b");
//! let f = (a * b + 10.0).tanh();
//! f.backward();
//! assert!(a.grad() < 0.0);
//! ```

pub mod autograd;
pub mod graph;
pub mod node;
pub mod ops;
pub mod value;

pub mod error;

pub use error::AutogradError;
pub use graph::Graph;
pub use node::{NodeId, Op};
pub use value::{Operand, Value};
