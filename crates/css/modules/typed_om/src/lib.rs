//! CSS Typed OM — structured values and the inline `StylePropertyMap`.
//! Spec: <https://drafts.css-houdini.org/css-typed-om-1/>
//!
//! Writes go value → CSS text → [`InlineStyleAccess`]; reads go the other way
//! through the `cssparser` tokenizer. The map validates every write against a
//! [`PropertyRegistry`] before touching the style.

#![forbid(unsafe_code)]

mod accessor;
mod error;
mod input;
mod property_map;
mod registry;
mod style_value;

pub use accessor::{InlineStyleAccess, StyleMapExt};
pub use error::{RejectedValue, TypedOmError};
pub use input::{InputType, StyleInput};
pub use property_map::StylePropertyMap;
pub use registry::{GLOBAL_KEYWORDS, KeywordSet, PropertyRegistry, PropertyRegistryBuilder, PropertyRule};
pub use style_value::{
    KeywordValue, NumberValue, SimpleLength, StyleValue, StyleValueError, StyleValueKind,
};

pub use css_style_attr::InlineStyle;
pub use css_values_units::LengthUnit;
pub use cssparser::ToCss;
