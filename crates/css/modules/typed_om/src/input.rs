//! The value argument accepted by `set` and `append`.

use crate::style_value::{KeywordValue, NumberValue, SimpleLength, StyleValue, StyleValueKind};
use core::fmt;

/// What a caller hands to [`StylePropertyMap::set`](crate::StylePropertyMap::set) or
/// [`StylePropertyMap::append`](crate::StylePropertyMap::append).
///
/// Besides style values and sequences of them, this can carry the things a
/// dynamically typed caller might pass by mistake (`null`, a bare number or
/// string) so the map can reject them with a proper error.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleInput {
    /// No value at all.
    Null,
    /// A single style value.
    Value(StyleValue),
    /// An ordered sequence of inputs.
    Sequence(Vec<StyleInput>),
    /// A bare number that is not a style value.
    Number(f64),
    /// A bare string that is not a style value.
    Text(String),
}

/// What was found where a style value was expected, for error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputType {
    Null,
    Number,
    Text,
    Sequence,
    Style(StyleValueKind),
}

impl StyleInput {
    /// The type of this input.
    pub const fn input_type(&self) -> InputType {
        match self {
            Self::Null => InputType::Null,
            Self::Value(value) => InputType::Style(value.kind()),
            Self::Sequence(_) => InputType::Sequence,
            Self::Number(_) => InputType::Number,
            Self::Text(_) => InputType::Text,
        }
    }

    /// Whether this input is a sequence.
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => formatter.write_str("null"),
            Self::Number => formatter.write_str("number"),
            Self::Text => formatter.write_str("string"),
            Self::Sequence => formatter.write_str("sequence"),
            Self::Style(kind) => fmt::Display::fmt(kind, formatter),
        }
    }
}

impl From<StyleValue> for StyleInput {
    fn from(value: StyleValue) -> Self {
        Self::Value(value)
    }
}

impl From<NumberValue> for StyleInput {
    fn from(value: NumberValue) -> Self {
        Self::Value(value.into())
    }
}

impl From<KeywordValue> for StyleInput {
    fn from(value: KeywordValue) -> Self {
        Self::Value(value.into())
    }
}

impl From<SimpleLength> for StyleInput {
    fn from(value: SimpleLength) -> Self {
        Self::Value(value.into())
    }
}

impl<T: Into<Self>> From<Vec<T>> for StyleInput {
    fn from(values: Vec<T>) -> Self {
        Self::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for StyleInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<f64> for StyleInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for StyleInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for StyleInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
