//! Per-cell record read by the evaluator

use super::CellError;
use crate::token::Token;

/// The `(formula, value, error)` triple stored for one cell label
///
/// The evaluator reads records through
/// [`SheetStore`](crate::sheet::SheetStore) and relies on one invariant: a
/// present error that is not [`CellError::EmptyFormula`] marks the cell
/// unusable, and referencing it propagates that exact error.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRecord {
    /// Stored formula tokens (empty when the cell holds nothing)
    formula: Vec<Token>,
    /// Cached numeric value from the last recalculation
    value: f64,
    /// Cached error from the last recalculation
    error: Option<CellError>,
}

impl CellRecord {
    /// Create a record with a stored formula and cached value
    pub fn new(formula: Vec<Token>, value: f64) -> Self {
        Self {
            formula,
            value,
            error: None,
        }
    }

    /// Create a record whose last recalculation produced an error
    pub fn with_error(formula: Vec<Token>, value: f64, error: CellError) -> Self {
        Self {
            formula,
            value,
            error: Some(error),
        }
    }

    /// Create an empty record (no formula, value 0, no error)
    pub fn empty() -> Self {
        Self::default()
    }

    /// The stored formula tokens
    pub fn formula(&self) -> &[Token] {
        &self.formula
    }

    /// The cached numeric value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The cached error, if any
    pub fn error(&self) -> Option<CellError> {
        self.error
    }

    /// True when no formula is stored
    pub fn is_empty(&self) -> bool {
        self.formula.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokens;

    #[test]
    fn test_record_accessors() {
        let record = CellRecord::new(tokens(["1", "+", "2"]), 3.0);
        assert_eq!(record.formula().len(), 3);
        assert_eq!(record.value(), 3.0);
        assert_eq!(record.error(), None);
        assert!(!record.is_empty());
    }

    #[test]
    fn test_empty_record() {
        let record = CellRecord::empty();
        assert!(record.is_empty());
        assert_eq!(record.value(), 0.0);
        assert_eq!(record.error(), None);
    }

    #[test]
    fn test_record_with_error() {
        let record = CellRecord::with_error(tokens(["1", "/", "0"]), 0.0, CellError::DivideByZero);
        assert_eq!(record.error(), Some(CellError::DivideByZero));
        assert!(!record.is_empty());
    }
}
