//! CSS Values & Units Level 3 — §6 Dimensions (Lengths) and §5 Percentages
//! Spec: <https://www.w3.org/TR/css-values-3/#lengths>

use crate::ParseError;
use crate::chapter_4_numbers::write_number;
use core::fmt::{Result as FmtResult, Write};
use cssparser::{Parser, Token};

/// Units accepted for a CSS <length-percentage>.
///
/// Each unit has a Typed OM name (`"percent"`, `"px"`) and a CSS suffix (`%`, `px`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Pixels,
    Percent,
    Ems,
    Exs,
    Chs,
    RootEms,
    ViewportWidth,
    ViewportHeight,
    ViewportMin,
    ViewportMax,
    Centimeters,
    Millimeters,
    QuarterMillimeters,
    Inches,
    Picas,
    Points,
}

impl LengthUnit {
    /// Every supported unit, in declaration order.
    pub const ALL: [Self; 16] = [
        Self::Pixels,
        Self::Percent,
        Self::Ems,
        Self::Exs,
        Self::Chs,
        Self::RootEms,
        Self::ViewportWidth,
        Self::ViewportHeight,
        Self::ViewportMin,
        Self::ViewportMax,
        Self::Centimeters,
        Self::Millimeters,
        Self::QuarterMillimeters,
        Self::Inches,
        Self::Picas,
        Self::Points,
    ];

    /// The Typed OM unit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Percent => "percent",
            other => other.css_suffix(),
        }
    }

    /// The suffix written after the number in CSS text.
    pub const fn css_suffix(self) -> &'static str {
        match self {
            Self::Pixels => "px",
            Self::Percent => "%",
            Self::Ems => "em",
            Self::Exs => "ex",
            Self::Chs => "ch",
            Self::RootEms => "rem",
            Self::ViewportWidth => "vw",
            Self::ViewportHeight => "vh",
            Self::ViewportMin => "vmin",
            Self::ViewportMax => "vmax",
            Self::Centimeters => "cm",
            Self::Millimeters => "mm",
            Self::QuarterMillimeters => "q",
            Self::Inches => "in",
            Self::Picas => "pc",
            Self::Points => "pt",
        }
    }

    /// Look up a unit by its Typed OM name, ASCII case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.name().eq_ignore_ascii_case(name))
    }

    /// Look up a unit by its CSS suffix, ASCII case-insensitively.
    pub fn from_css_suffix(suffix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.css_suffix().eq_ignore_ascii_case(suffix))
    }
}

/// A CSS <length-percentage> value with unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    /// Write the length as CSS text, e.g. `9.2%` or `10px`.
    ///
    /// # Errors
    /// Propagates errors from the destination writer.
    pub fn write_css<W: Write>(&self, dest: &mut W) -> FmtResult {
        write_number(self.value, dest)?;
        dest.write_str(self.unit.css_suffix())
    }
}

/// Parse a CSS <length-percentage> (§5.1, §6.2), including unitless zero.
///
/// Values keep the precision of the source text rather than the tokenizer's `f32`.
///
/// # Errors
/// Returns `ParseError::UnknownUnit` for a dimension with an unsupported unit,
/// `ParseError::OutOfRange` when the magnitude overflows `f64`, and
/// `ParseError::UnexpectedToken` when the next token is not a length at all.
pub fn parse_length(input: &mut Parser) -> Result<Length, ParseError> {
    input.skip_whitespace();
    let start = input.position();
    let token = input
        .next_including_whitespace_and_comments()
        .map_err(|_| ParseError::UnexpectedToken)?
        .clone();
    let text = input.slice_from(start);
    let length = match token {
        Token::Dimension { value, unit, .. } => Length {
            value: precise_value(text, unit.len(), value),
            unit: LengthUnit::from_css_suffix(unit.as_ref()).ok_or(ParseError::UnknownUnit)?,
        },
        Token::Percentage { unit_value, .. } => Length {
            value: precise_value(text, 1, unit_value * 100.0),
            unit: LengthUnit::Percent,
        },
        Token::Number { value: 0.0, .. } => Length {
            value: 0.0,
            unit: LengthUnit::Pixels,
        },
        _ => return Err(ParseError::UnexpectedToken),
    };
    if !length.value.is_finite() {
        return Err(ParseError::OutOfRange);
    }
    Ok(length)
}

/// Re-read the numeric part of `text` (everything before a `suffix_len`-byte unit) as `f64`.
fn precise_value(text: &str, suffix_len: usize, fallback: f32) -> f64 {
    text.len()
        .checked_sub(suffix_len)
        .and_then(|end| text.get(..end))
        .and_then(|digits| digits.parse::<f64>().ok())
        .unwrap_or_else(|| f64::from(fallback))
}
