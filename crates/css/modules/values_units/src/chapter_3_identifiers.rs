//! CSS Identifiers (used widely across CSS values)
//! Spec: <https://www.w3.org/TR/CSS2/syndata.html#value-def-identifier>

use crate::ParseError;
use core::fmt::{Result as FmtResult, Write};
use cssparser::{Parser, ParserInput, Token, serialize_identifier};

/// A CSS identifier value, case preserved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ident(pub String);

/// Parse a CSS identifier token.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not an identifier.
#[inline]
pub fn parse_ident(input: &mut Parser) -> Result<Ident, ParseError> {
    input.next_including_whitespace_and_comments().map_or(
        Err(ParseError::UnexpectedToken),
        |token| match token.clone() {
            Token::Ident(text) => Ok(Ident(text.as_ref().to_owned())),
            _ => Err(ParseError::UnexpectedToken),
        },
    )
}

/// Whether `text` tokenizes to exactly one identifier with nothing around it.
pub fn is_identifier(text: &str) -> bool {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    parse_ident(&mut parser).is_ok() && parser.next_including_whitespace_and_comments().is_err()
}

/// Write an identifier, escaping characters that would otherwise change its meaning.
///
/// # Errors
/// Propagates errors from the destination writer.
pub fn write_identifier<W: Write>(ident: &str, dest: &mut W) -> FmtResult {
    serialize_identifier(ident, dest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_identifiers_are_accepted() {
        assert!(is_identifier("infinite"));
        assert!(is_identifier("border-box"));
        assert!(is_identifier("-webkit-box"));
    }

    #[test]
    fn non_identifiers_are_rejected() {
        assert!(!is_identifier(""));
        assert!(!is_identifier("12"));
        assert!(!is_identifier("a b"));
        assert!(!is_identifier(" auto"));
        assert!(!is_identifier("auto,"));
    }

    #[test]
    fn parse_preserves_case() {
        let mut input = ParserInput::new("SlideIn");
        let mut parser = Parser::new(&mut input);
        assert_eq!(parse_ident(&mut parser), Ok(Ident("SlideIn".to_owned())));
    }
}
