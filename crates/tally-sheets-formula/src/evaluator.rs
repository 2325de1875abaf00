//! Formula evaluator
//!
//! Evaluates a tokenized formula against sheet storage to produce a numeric
//! result or a cell error. The pipeline runs four stages in fixed order:
//! degeneracy check, reference resolution, infix-to-postfix conversion, and
//! postfix evaluation. A stage that produces an error stops the pipeline;
//! nothing from a later stage leaks into the outcome.

use crate::token::{is_number, is_reference, precedence};
use tally_sheets_core::{CellError, SheetStore, Token};

/// Outcome of one evaluation
///
/// Exactly one of result/error is meaningful, with two deliberate exceptions
/// carried by the engine's display semantics:
/// - divide-by-zero pairs its error with a committed result of `+∞`
/// - when the stack machine runs out of operands, no result is committed at
///   all and [`result`](Self::result) returns `None`; callers must treat that
///   as invalid rather than assuming zero
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    result: Option<f64>,
    error: Option<CellError>,
}

impl Evaluation {
    fn ok(result: f64) -> Self {
        Evaluation {
            result: Some(result),
            error: None,
        }
    }

    fn fail(error: CellError) -> Self {
        Evaluation {
            result: Some(0.0),
            error: Some(error),
        }
    }

    fn fail_with(error: CellError, result: Option<f64>) -> Self {
        Evaluation {
            result,
            error: Some(error),
        }
    }

    /// The numeric result, if one was committed
    pub fn result(&self) -> Option<f64> {
        self.result
    }

    /// The error, if any stage produced one
    pub fn error(&self) -> Option<CellError> {
        self.error
    }

    /// True when an error was produced
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Render the outcome the way a cell displays it
    ///
    /// Errors render as their badge. Numbers render without a decimal point
    /// when integral.
    pub fn display(&self) -> String {
        if let Some(error) = self.error {
            return error.as_str().to_string();
        }

        match self.result {
            Some(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", n as i64),
            Some(n) => format!("{}", n),
            None => String::new(),
        }
    }
}

/// Context for formula evaluation
///
/// Wraps the sheet storage that cell references resolve against. The context
/// is read-only; evaluation never writes through it.
pub struct EvaluationContext<'a> {
    sheet: Option<&'a dyn SheetStore>,
}

impl<'a> EvaluationContext<'a> {
    /// Create a context backed by sheet storage
    pub fn new(sheet: &'a dyn SheetStore) -> Self {
        Self { sheet: Some(sheet) }
    }

    /// Create a context with no sheet storage attached
    ///
    /// Every cell reference resolves to invalid-cell-reference in a detached
    /// context; formulas without references evaluate normally.
    pub fn detached() -> Self {
        Self { sheet: None }
    }

    /// Resolve one reference token to `(substituted value, error state)`
    ///
    /// A cell carrying an error other than the empty-formula marker is
    /// unusable and propagates that exact error. A cell with no stored
    /// formula (or no record at all) is an invalid reference. Either way the
    /// substituted value is 0.
    fn resolve(&self, label: &str) -> (f64, Option<CellError>) {
        let record = match self.sheet.and_then(|sheet| sheet.get_cell(label)) {
            Some(record) => record,
            None => return (0.0, Some(CellError::InvalidCellReference)),
        };

        match record.error() {
            Some(error) if error != CellError::EmptyFormula => (0.0, Some(error)),
            _ if record.is_empty() => (0.0, Some(CellError::InvalidCellReference)),
            _ => (record.value(), None),
        }
    }
}

/// Evaluate a tokenized formula
///
/// Runs the full pipeline and returns a fresh [`Evaluation`]; no state
/// persists between calls. Never panics, whatever the token sequence.
pub fn evaluate(formula: &[Token], ctx: &EvaluationContext) -> Evaluation {
    // A bare "()" pair must be reported before the degeneracy check, which
    // would otherwise also match it.
    if formula.len() == 2 && formula[0].as_str() == "(" && formula[1].as_str() == ")" {
        return Evaluation::fail(CellError::MissingParentheses);
    }

    if is_degenerate(formula) {
        return Evaluation::fail(CellError::EmptyFormula);
    }

    let (resolved, error) = resolve_references(formula, ctx);
    if let Some(error) = error {
        return Evaluation::fail(error);
    }

    let postfix = to_postfix(resolved);

    if postfix.len() == 1 && is_number(&postfix[0]) {
        return Evaluation::ok(parse_number(&postfix[0]));
    }

    evaluate_postfix(&postfix)
}

/// True when every token is a parenthesis or a single space
///
/// The empty sequence vacuously qualifies.
fn is_degenerate(formula: &[Token]) -> bool {
    formula
        .iter()
        .all(|token| matches!(token.as_str(), "(" | ")" | " "))
}

/// Replace every reference token with its cached value in decimal form
///
/// The tracked error state is overwritten on every reference token - with
/// that token's error, or with no-error when it resolves cleanly - so the
/// state after the scan belongs to the last reference encountered. Last
/// error wins, not first; callers expecting first-error semantics must be
/// told otherwise.
fn resolve_references(
    formula: &[Token],
    ctx: &EvaluationContext,
) -> (Vec<Token>, Option<CellError>) {
    let mut resolved: Vec<Token> = formula.to_vec();
    let mut error = None;

    for (i, token) in formula.iter().enumerate() {
        if is_reference(token) {
            let (value, state) = ctx.resolve(token.as_str());
            error = state;
            resolved[i] = Token::new(value.to_string());
        }
    }

    (resolved, error)
}

/// Shunting-yard rewrite of an infix token sequence into postfix
///
/// Left-associative: an incoming operator yields to stack operators of equal
/// or higher precedence. A `)` with no matching `(` pops nothing and is
/// dropped; pop-on-empty is a no-op rather than an error.
fn to_postfix(tokens: Vec<Token>) -> Vec<Token> {
    let mut operators: Vec<Token> = Vec::new();
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());

    for token in tokens {
        if is_number(&token) {
            output.push(token);
        } else if token.as_str() == "(" {
            operators.push(token);
        } else if token.as_str() == ")" {
            // Emit until the matching "(", then discard it
            loop {
                match operators.pop() {
                    Some(op) if op.as_str() != "(" => output.push(op),
                    _ => break,
                }
            }
        } else {
            while yields_to_stack(&token, operators.last()) {
                if let Some(op) = operators.pop() {
                    output.push(op);
                }
            }
            operators.push(token);
        }
    }

    while let Some(op) = operators.pop() {
        output.push(op);
    }

    output
}

/// True when the incoming operator must wait for the stack top to emit first
fn yields_to_stack(incoming: &Token, top: Option<&Token>) -> bool {
    match (precedence(incoming), top.and_then(precedence)) {
        (Some(incoming), Some(top)) => incoming <= top,
        _ => false,
    }
}

/// Single-pass stack evaluation of a postfix sequence
fn evaluate_postfix(postfix: &[Token]) -> Evaluation {
    let mut stack: Vec<f64> = Vec::new();

    for token in postfix {
        if is_number(token) {
            stack.push(parse_number(token));
            continue;
        }

        // b is the top of stack (right operand), a the one beneath it
        let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
            return Evaluation::fail_with(CellError::InvalidFormula, None);
        };

        match token.as_str() {
            "+" => stack.push(a + b),
            "-" => stack.push(a - b),
            "*" => stack.push(a * b),
            "/" => {
                if b == 0.0 {
                    return Evaluation::fail_with(CellError::DivideByZero, Some(f64::INFINITY));
                }
                stack.push(a / b);
            }
            _ => return Evaluation::fail(CellError::InvalidOperator),
        }
    }

    match stack.last() {
        Some(result) => Evaluation::ok(*result),
        None => Evaluation::fail_with(CellError::InvalidFormula, None),
    }
}

fn parse_number(token: &Token) -> f64 {
    token.as_str().parse().unwrap_or(0.0)
}
