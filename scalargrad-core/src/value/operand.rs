use crate::error::AutogradError;
use crate::graph::Graph;
use crate::value::Value;

/// Right-hand operand of a graph operation: an existing node, or a bare number
/// that gets promoted into a fresh leaf when the operation runs.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'g> {
    Node(Value<'g>),
    Scalar(f64),
}

impl<'g> Operand<'g> {
    /// Turns the operand into a node of `graph`, allocating a leaf for scalars.
    ///
    /// Fails with `GraphMismatch` when a node operand belongs to another arena.
    pub(crate) fn into_value(
        self,
        graph: &'g Graph,
        operation: &str,
    ) -> Result<Value<'g>, AutogradError> {
        match self {
            Operand::Node(value) => {
                if std::ptr::eq(value.graph(), graph) {
                    Ok(value)
                } else {
                    Err(AutogradError::graph_mismatch(operation))
                }
            }
            Operand::Scalar(data) => Ok(graph.leaf(data)),
        }
    }
}

impl<'g> From<Value<'g>> for Operand<'g> {
    fn from(value: Value<'g>) -> Self {
        Operand::Node(value)
    }
}

impl<'g> From<&Value<'g>> for Operand<'g> {
    fn from(value: &Value<'g>) -> Self {
        Operand::Node(*value)
    }
}

impl From<f64> for Operand<'_> {
    fn from(data: f64) -> Self {
        Operand::Scalar(data)
    }
}

impl From<f32> for Operand<'_> {
    fn from(data: f32) -> Self {
        Operand::Scalar(f64::from(data))
    }
}

impl From<i32> for Operand<'_> {
    fn from(data: i32) -> Self {
        Operand::Scalar(f64::from(data))
    }
}
