//! Prelude module - common imports for tally-sheets users
//!
//! ```rust
//! use tally_sheets::prelude::*;
//! ```

pub use crate::{
    // Helpers
    tokens,
    CellAddress,
    // Cell types
    CellError,
    CellRecord,
    // Error types
    Error,
    // Evaluator types
    Evaluation,
    EvaluationContext,
    // Storage types
    MemorySheet,
    Result,
    SheetStore,
    Token,

    // Entry point
    evaluate,
};
