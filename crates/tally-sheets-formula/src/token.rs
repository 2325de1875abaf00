//! Token classification
//!
//! The evaluator sees tokens as plain text and classifies them structurally:
//! anything that parses as an `f64` is a number, anything matching the cell
//! label syntax is a reference, and the four arithmetic operators carry a
//! precedence. Everything else is left for the stack machine to reject.

use tally_sheets_core::{CellAddress, Token};

/// True if the token parses as a floating-point number
pub fn is_number(token: &Token) -> bool {
    token.as_str().parse::<f64>().is_ok()
}

/// True if the token is a cell label under the storage addressing rule
pub fn is_reference(token: &Token) -> bool {
    CellAddress::is_valid_label(token.as_str())
}

/// Binding strength of an operator token
///
/// `*` and `/` bind tighter than `+` and `-`. Parentheses and anything else
/// carry no precedence, which is what stops the shunting-yard pop loop at an
/// open parenthesis.
pub fn precedence(token: &Token) -> Option<u8> {
    match token.as_str() {
        "+" | "-" => Some(1),
        "*" | "/" => Some(2),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(s: &str) -> Token {
        Token::from(s)
    }

    #[test]
    fn test_is_number() {
        assert!(is_number(&tok("42")));
        assert!(is_number(&tok("3.25")));
        assert!(is_number(&tok("-1")));
        assert!(is_number(&tok("1e3")));

        assert!(!is_number(&tok("A1")));
        assert!(!is_number(&tok("+")));
        assert!(!is_number(&tok("(")));
        assert!(!is_number(&tok(" ")));
        assert!(!is_number(&tok("")));
    }

    #[test]
    fn test_is_reference() {
        assert!(is_reference(&tok("A1")));
        assert!(is_reference(&tok("zz100")));

        assert!(!is_reference(&tok("42")));
        assert!(!is_reference(&tok("A0")));
        assert!(!is_reference(&tok("1A")));
        assert!(!is_reference(&tok("*")));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(precedence(&tok("+")), Some(1));
        assert_eq!(precedence(&tok("-")), Some(1));
        assert_eq!(precedence(&tok("*")), Some(2));
        assert_eq!(precedence(&tok("/")), Some(2));

        assert_eq!(precedence(&tok("(")), None);
        assert_eq!(precedence(&tok(")")), None);
        assert_eq!(precedence(&tok("5")), None);
        assert_eq!(precedence(&tok("%")), None);
    }
}
