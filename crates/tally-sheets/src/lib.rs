//! # tally-sheets
//!
//! A spreadsheet formula evaluation engine.
//!
//! Tally-sheets evaluates tokenized formulas - numbers, `+ - * /`,
//! parentheses, and cell references like `A1` - into numeric results or
//! cell errors, resolving references against pluggable sheet storage.
//!
//! Tokenizing raw formula text, tracking dependencies between cells, and
//! deciding when to recalculate are left to the surrounding application; this
//! crate is the computational core those collaborators call into.
//!
//! ## Example
//!
//! ```rust
//! use tally_sheets::prelude::*;
//!
//! // Populate a sheet
//! let mut sheet = MemorySheet::new();
//! sheet.set_cell("A1", CellRecord::new(tokens(["10"]), 10.0));
//! sheet.set_cell("A2", CellRecord::new(tokens(["4"]), 4.0));
//!
//! // Evaluate a formula referencing it
//! let ctx = EvaluationContext::new(&sheet);
//! let outcome = evaluate(&tokens(["(", "A1", "+", "A2", ")", "/", "2"]), &ctx);
//!
//! assert_eq!(outcome.result(), Some(7.0));
//! assert_eq!(outcome.display(), "7");
//! ```

pub mod prelude;

// Re-export core types
pub use tally_sheets_core::{
    tokens,
    CellAddress,
    // Cell types
    CellError,
    CellRecord,
    // Error types
    Error,
    // Storage types
    MemorySheet,
    Result,
    SheetStore,
    Token,
    MAX_COLS,
    // Constants
    MAX_ROWS,
};

// Re-export evaluator types
pub use tally_sheets_formula::{evaluate, Evaluation, EvaluationContext};
