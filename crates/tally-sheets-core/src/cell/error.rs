//! Cell error vocabulary

use std::fmt;

/// Errors a cell can carry and an evaluation can produce
///
/// Identity is the variant, shared process-wide between the evaluator and
/// sheet storage. The display badge is a separate mapping so UI text can
/// change without touching stored error state; several variants deliberately
/// share the `#ERR` badge, which is why there is no badge-to-variant parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellError {
    /// Formula contains no evaluable tokens
    EmptyFormula,
    /// Reference to a cell with no stored formula
    InvalidCellReference,
    /// Operator ran out of operands during evaluation
    InvalidFormula,
    /// Division by zero
    DivideByZero,
    /// Operator outside the supported set reached the stack machine
    InvalidOperator,
    /// A bare "()" token pair
    MissingParentheses,
}

impl CellError {
    /// Get the display badge for this error
    pub fn as_str(&self) -> &'static str {
        match self {
            CellError::EmptyFormula => "#EMPTY!",
            CellError::InvalidCellReference => "#REF!",
            CellError::DivideByZero => "#DIV/0!",
            CellError::InvalidFormula
            | CellError::InvalidOperator
            | CellError::MissingParentheses => "#ERR",
        }
    }
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
