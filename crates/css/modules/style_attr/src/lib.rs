//! CSS Style Attributes — style="..." attribute processing.
//! Spec: <https://www.w3.org/TR/css-style-attr/>

#![forbid(unsafe_code)]

use core::fmt;
use log::trace;
use std::collections::HashMap;

/// A single CSS declaration parsed from a style attribute.
///
/// Spec: <https://www.w3.org/TR/css-style-attr/#interpreting>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Property name normalized to ASCII lowercase as per CSS case-insensitivity.
    pub property: String,
    /// Raw value slice trimmed of surrounding ASCII whitespace. May contain spaces.
    pub value: String,
}

/// Parse the value of a `style` attribute into a list of declarations.
///
/// - Splits on semicolons (`;`) into declaration items.
/// - For each item, splits on the first colon (`:`) into property and value.
/// - Trims ASCII whitespace and lowercases the property name.
/// - Skips empty or invalid items (no colon, empty property, or empty value after trimming).
///
/// Values are kept as raw text; `!important` and escapes are not interpreted.
///
/// Spec: <https://www.w3.org/TR/css-style-attr/#interpreting>
pub fn parse_style_attribute(input: &str) -> Vec<Declaration> {
    if input.is_empty() {
        return Vec::new();
    }
    let mut out: Vec<Declaration> = Vec::new();
    for raw_item in input.split(';') {
        let item = raw_item.trim_matches(is_ascii_whitespace);
        if item.is_empty() {
            continue;
        }
        let Some((raw_prop, raw_value)) = item.split_once(':') else {
            continue;
        };
        let property_text = raw_prop.trim_matches(is_ascii_whitespace);
        let value_text = raw_value.trim_matches(is_ascii_whitespace);
        if property_text.is_empty() || value_text.is_empty() {
            continue;
        }
        out.push(Declaration {
            property: to_ascii_lowercase(property_text),
            value: value_text.to_owned(),
        });
    }
    out
}

/// ASCII whitespace per CSS Syntax (TAB, LF, FF, CR, SPACE).
///
/// Spec: <https://www.w3.org/TR/css-syntax-3/#whitespace>
const fn is_ascii_whitespace(character: char) -> bool {
    matches!(
        character,
        '\u{0009}' | '\u{000A}' | '\u{000C}' | '\u{000D}' | '\u{0020}'
    )
}

/// Lowercase a property name; CSS property names are ASCII case-insensitive.
fn to_ascii_lowercase(text: &str) -> String {
    if text.bytes().any(|byte| byte.is_ascii_uppercase()) {
        text.to_ascii_lowercase()
    } else {
        text.to_owned()
    }
}

/// Normalize and filter a raw attribute string, keeping only the last occurrence
/// of each property at the position of that occurrence.
///
/// Spec: <https://www.w3.org/TR/css-style-attr/#interpreting>
pub fn normalize_style_attribute(input: &str) -> Vec<Declaration> {
    let mut last_index_for_property: HashMap<String, usize> = HashMap::new();
    let declarations = parse_style_attribute(input);
    for (index, decl_item) in declarations.iter().enumerate() {
        last_index_for_property.insert(decl_item.property.clone(), index);
    }
    // Retain only the last index for each property
    declarations
        .into_iter()
        .enumerate()
        .filter_map(
            |(index, decl_item)| match last_index_for_property.get(&decl_item.property) {
                Some(&last_index) if last_index == index => Some(decl_item),
                _ => None,
            },
        )
        .collect()
}

/// An element's inline style: an ordered block of declarations keyed by property name.
///
/// Properties keep the position of their first assignment. Updating an existing
/// property rewrites its value in place; removing it and setting it again moves it
/// to the end. Setting an empty value removes the property, as the CSSOM does.
///
/// Spec: <https://drafts.csswg.org/cssom/#css-declaration-blocks>
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<Declaration>,
}

impl InlineStyle {
    /// Create an empty inline style.
    pub const fn new() -> Self {
        Self {
            declarations: Vec::new(),
        }
    }

    /// Build an inline style from `style` attribute text.
    ///
    /// Duplicate properties keep the last value, positioned where that last
    /// declaration appeared.
    pub fn parse(input: &str) -> Self {
        Self {
            declarations: normalize_style_attribute(input),
        }
    }

    /// The value of `property`, if it is set.
    pub fn get(&self, property: &str) -> Option<&str> {
        let name = to_ascii_lowercase(property);
        self.declarations
            .iter()
            .find(|decl| decl.property == name)
            .map(|decl| decl.value.as_str())
    }

    /// Set `property` to `value`; an empty (or all-whitespace) value removes it.
    pub fn set(&mut self, property: &str, value: &str) {
        let name = to_ascii_lowercase(property.trim_matches(is_ascii_whitespace));
        let value_text = value.trim_matches(is_ascii_whitespace);
        if value_text.is_empty() {
            self.remove(&name);
            return;
        }
        trace!(target: "css_style_attr", "set {name}: {value_text}");
        if let Some(existing) = self.declarations.iter_mut().find(|decl| decl.property == name) {
            value_text.clone_into(&mut existing.value);
            return;
        }
        self.declarations.push(Declaration {
            property: name,
            value: value_text.to_owned(),
        });
    }

    /// Remove `property`, returning its previous value.
    pub fn remove(&mut self, property: &str) -> Option<String> {
        let name = to_ascii_lowercase(property);
        let index = self
            .declarations
            .iter()
            .position(|decl| decl.property == name)?;
        trace!(target: "css_style_attr", "remove {name}");
        Some(self.declarations.remove(index).value)
    }

    /// Property names in assignment order.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.declarations.iter().map(|decl| decl.property.as_str())
    }

    /// Declarations in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }

    /// Number of set properties.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether no property is set.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Serialize back to `style` attribute text, e.g. `opacity: 0.5; height: 5px;`.
    pub fn css_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, decl) in self.declarations.iter().enumerate() {
            if index > 0 {
                formatter.write_str(" ")?;
            }
            write!(formatter, "{}: {};", decl.property, decl.value)?;
        }
        Ok(())
    }
}

impl From<&str> for InlineStyle {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}
