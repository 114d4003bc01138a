//! Typed style values: numbers, keywords and simple lengths.
//! Spec: <https://drafts.css-houdini.org/css-typed-om-1/#stylevalue-objects>

use core::error::Error;
use core::fmt::{self, Result as FmtResult, Write};
use core::str::FromStr;
use css_values_units::{
    Component, Length, LengthUnit, format_number, is_identifier, parse_number_prefix,
    write_identifier,
};
use cssparser::ToCss;

/// Failure to construct a style value from its raw input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StyleValueError {
    /// The text does not start with a number.
    NotANumber(String),
    /// The number is NaN or infinite.
    NonFiniteNumber,
    /// The text is not a single CSS identifier.
    InvalidKeyword(String),
    /// The unit name is not a supported length unit.
    UnknownUnit(String),
}

impl fmt::Display for StyleValueError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber(text) => write!(
                formatter,
                "Value of NumberValue must be a number or a numeric string, got {text:?}"
            ),
            Self::NonFiniteNumber => formatter.write_str("numeric style values must be finite"),
            Self::InvalidKeyword(text) => {
                write!(formatter, "{text:?} is not a valid CSS keyword")
            }
            Self::UnknownUnit(unit) => write!(formatter, "{unit:?} is not a supported length unit"),
        }
    }
}

impl Error for StyleValueError {}

/// The concrete kind of a [`StyleValue`], used by property rules and error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleValueKind {
    Number,
    Keyword,
    SimpleLength,
}

impl StyleValueKind {
    /// The class-style name of the kind, e.g. `SimpleLength`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Number => "NumberValue",
            Self::Keyword => "KeywordValue",
            Self::SimpleLength => "SimpleLength",
        }
    }
}

impl fmt::Display for StyleValueKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// A plain `<number>`.
///
/// The CSS text is whatever the value was built from: a number is written in
/// shortest decimal form, a string is kept exactly as given.
#[derive(Clone, Debug, PartialEq)]
pub struct NumberValue {
    value: f64,
    css_text: String,
}

impl NumberValue {
    /// Build from a number.
    ///
    /// # Errors
    /// Returns [`StyleValueError::NonFiniteNumber`] for NaN or infinities.
    pub fn new(value: f64) -> Result<Self, StyleValueError> {
        if !value.is_finite() {
            return Err(StyleValueError::NonFiniteNumber);
        }
        Ok(Self {
            value,
            css_text: format_number(value),
        })
    }

    /// The numeric value.
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The CSS text written for this value.
    pub fn css_text(&self) -> &str {
        &self.css_text
    }
}

impl FromStr for NumberValue {
    type Err = StyleValueError;

    /// Build from numeric text. The value is the leading number (`"12px"` is 12);
    /// the CSS text is the input verbatim.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let value =
            parse_number_prefix(text).ok_or_else(|| StyleValueError::NotANumber(text.to_owned()))?;
        if !value.is_finite() {
            return Err(StyleValueError::NonFiniteNumber);
        }
        Ok(Self {
            value,
            css_text: text.to_owned(),
        })
    }
}

impl ToCss for NumberValue {
    fn to_css<W: Write>(&self, dest: &mut W) -> FmtResult {
        dest.write_str(&self.css_text)
    }
}

/// A CSS keyword such as `auto` or `infinite`.
///
/// Whether a keyword is valid for a property is decided by the property registry,
/// not here.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeywordValue {
    keyword: String,
}

impl KeywordValue {
    /// Build from identifier text, kept exactly as given.
    ///
    /// Custom names such as animation names are case-sensitive; property rules
    /// match predefined keywords ASCII case-insensitively.
    ///
    /// # Errors
    /// Returns [`StyleValueError::InvalidKeyword`] unless `keyword` is exactly one identifier.
    pub fn new(keyword: &str) -> Result<Self, StyleValueError> {
        if !is_identifier(keyword) {
            return Err(StyleValueError::InvalidKeyword(keyword.to_owned()));
        }
        Ok(Self {
            keyword: keyword.to_owned(),
        })
    }

    /// The keyword text.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The same keyword in ASCII lowercase.
    #[must_use]
    pub fn to_ascii_lowercase(&self) -> Self {
        Self {
            keyword: self.keyword.to_ascii_lowercase(),
        }
    }
}

impl FromStr for KeywordValue {
    type Err = StyleValueError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::new(text)
    }
}

impl ToCss for KeywordValue {
    fn to_css<W: Write>(&self, dest: &mut W) -> FmtResult {
        write_identifier(&self.keyword, dest)
    }
}

/// A length with a single unit, e.g. `10px` or `9.2%`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimpleLength {
    length: Length,
}

impl SimpleLength {
    /// Build from a magnitude and unit.
    ///
    /// # Errors
    /// Returns [`StyleValueError::NonFiniteNumber`] for NaN or infinities.
    pub fn new(value: f64, unit: LengthUnit) -> Result<Self, StyleValueError> {
        if !value.is_finite() {
            return Err(StyleValueError::NonFiniteNumber);
        }
        Ok(Self {
            length: Length { value, unit },
        })
    }

    /// Build from a magnitude and a Typed OM unit name such as `"percent"` or `"px"`.
    ///
    /// # Errors
    /// Returns [`StyleValueError::UnknownUnit`] for an unsupported unit name, or
    /// [`StyleValueError::NonFiniteNumber`] for NaN or infinities.
    pub fn with_unit_name(value: f64, unit: &str) -> Result<Self, StyleValueError> {
        let unit_kind =
            LengthUnit::from_name(unit).ok_or_else(|| StyleValueError::UnknownUnit(unit.to_owned()))?;
        Self::new(value, unit_kind)
    }

    /// The magnitude.
    pub const fn value(&self) -> f64 {
        self.length.value
    }

    /// The unit.
    pub const fn unit(&self) -> LengthUnit {
        self.length.unit
    }
}

impl ToCss for SimpleLength {
    fn to_css<W: Write>(&self, dest: &mut W) -> FmtResult {
        self.length.write_css(dest)
    }
}

/// Any typed style value.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    Number(NumberValue),
    Keyword(KeywordValue),
    Length(SimpleLength),
}

impl StyleValue {
    /// The concrete kind of this value.
    pub const fn kind(&self) -> StyleValueKind {
        match self {
            Self::Number(_) => StyleValueKind::Number,
            Self::Keyword(_) => StyleValueKind::Keyword,
            Self::Length(_) => StyleValueKind::SimpleLength,
        }
    }

    /// Build the value a parsed property component stands for.
    pub(crate) fn from_component(component: Component) -> Self {
        match component {
            Component::Number { value, text } => Self::Number(NumberValue {
                value,
                css_text: text,
            }),
            Component::Length(length) => Self::Length(SimpleLength { length }),
            Component::Ident(ident) => Self::Keyword(KeywordValue { keyword: ident.0 }),
        }
    }
}

impl ToCss for StyleValue {
    fn to_css<W: Write>(&self, dest: &mut W) -> FmtResult {
        match self {
            Self::Number(number) => number.to_css(dest),
            Self::Keyword(keyword) => keyword.to_css(dest),
            Self::Length(length) => length.to_css(dest),
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_css(formatter)
    }
}

impl From<NumberValue> for StyleValue {
    fn from(value: NumberValue) -> Self {
        Self::Number(value)
    }
}

impl From<KeywordValue> for StyleValue {
    fn from(value: KeywordValue) -> Self {
        Self::Keyword(value)
    }
}

impl From<SimpleLength> for StyleValue {
    fn from(value: SimpleLength) -> Self {
        Self::Length(value)
    }
}
