use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum AutogradError {
    /// An operand has a form the operation cannot differentiate through,
    /// e.g. a graph node passed as the exponent of `pow`.
    #[error("Unsupported operand for operation {operation}: {reason}")]
    UnsupportedOperand { operation: String, reason: String },

    /// The two operand handles live in different `Graph` arenas.
    #[error("Operands belong to different graphs during operation {operation}")]
    GraphMismatch { operation: String },
}

impl AutogradError {
    pub(crate) fn unsupported_operand(operation: &str, reason: impl Into<String>) -> Self {
        AutogradError::UnsupportedOperand {
            operation: operation.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn graph_mismatch(operation: &str) -> Self {
        AutogradError::GraphMismatch {
            operation: operation.to_string(),
        }
    }
}
