//! CSS Values & Units Level 3 — §2.2 Component value multipliers (the `#` comma list)
//! Spec: <https://www.w3.org/TR/css-values-3/#mult-comma>

use crate::ParseError;
use crate::chapter_3_identifiers::Ident;
use crate::chapter_6_dimensions::{Length, parse_length};
use cssparser::ParseError as CssParseError;
use cssparser::{ParseErrorKind, Parser, ParserInput, Token};

/// One component of a comma-separated property value.
#[derive(Clone, Debug, PartialEq)]
pub enum Component {
    /// A `<number>`, with the exact source text it was read from.
    Number { value: f64, text: String },
    /// A `<length-percentage>`.
    Length(Length),
    /// An identifier, as written.
    Ident(Ident),
}

/// Parse a single number, length or identifier component.
///
/// # Errors
/// Returns a custom `ParseError` when the next token is none of the supported kinds.
pub fn parse_component<'input>(
    input: &mut Parser<'input, '_>,
) -> Result<Component, CssParseError<'input, ParseError>> {
    let state = input.state();
    input.skip_whitespace();
    let start = input.position();
    let token = input.next()?.clone();
    match token {
        Token::Number { value, .. } => {
            let text = input.slice_from(start).trim_end();
            let precise = text.parse::<f64>().unwrap_or_else(|_| f64::from(value));
            if !precise.is_finite() {
                return Err(input.new_custom_error(ParseError::OutOfRange));
            }
            Ok(Component::Number {
                value: precise,
                text: text.to_owned(),
            })
        }
        Token::Ident(name) => Ok(Component::Ident(Ident(name.as_ref().to_owned()))),
        Token::Dimension { .. } | Token::Percentage { .. } => {
            input.reset(&state);
            parse_length(input)
                .map(Component::Length)
                .map_err(|err| input.new_custom_error(err))
        }
        _ => Err(input.new_custom_error(ParseError::UnexpectedToken)),
    }
}

/// Parse a whole property value as a comma-separated list of components.
///
/// Empty or whitespace-only text yields an empty list.
///
/// # Errors
/// Returns the first component error, or `ParseError::UnexpectedToken` for
/// structural problems such as empty list items or trailing garbage.
pub fn parse_component_list(text: &str) -> Result<Vec<Component>, ParseError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    parser
        .parse_comma_separated(parse_component)
        .map_err(|err| match err.kind {
            ParseErrorKind::Custom(inner) => inner,
            ParseErrorKind::Basic(_) => ParseError::UnexpectedToken,
        })
}
