//! CSS Values and Units Module Level 3 — Numbers, identifiers, lengths and comma lists.
//! Spec: <https://www.w3.org/TR/css-values-3/>

#![forbid(unsafe_code)]

// Per-chapter modules mirroring the spec table of contents.
// Each module documents functions with references to the exact spec section.
pub mod chapter_2_multipliers;
pub mod chapter_3_identifiers;
pub mod chapter_4_numbers;
pub mod chapter_6_dimensions;

// Re-exports for ergonomic access from other crates.
pub use chapter_2_multipliers::{Component, parse_component, parse_component_list};
pub use chapter_3_identifiers::{Ident, is_identifier, parse_ident, write_identifier};
pub use chapter_4_numbers::{format_number, parse_number_prefix, write_number};
pub use chapter_6_dimensions::{Length, LengthUnit, parse_length};

use core::error::Error;
use core::fmt;

/// Parse error for Values & Units parsing utilities in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The next token did not match the expected grammar.
    UnexpectedToken,
    /// A dimension carried a unit that is not a supported `<length>` unit.
    UnknownUnit,
    /// A number is too large to be represented as a finite `f64`.
    OutOfRange,
}

impl fmt::Display for ParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken => formatter.write_str("unexpected token"),
            Self::UnknownUnit => formatter.write_str("unknown length unit"),
            Self::OutOfRange => formatter.write_str("number out of range"),
        }
    }
}

impl Error for ParseError {}
