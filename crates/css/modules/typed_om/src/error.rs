//! Errors raised by [`StylePropertyMap`](crate::StylePropertyMap) operations.

use crate::input::InputType;
use crate::style_value::StyleValueKind;
use core::error::Error;
use core::fmt;

/// A value the property's rule does not accept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RejectedValue {
    /// A style value of a kind the property never takes.
    Kind(StyleValueKind),
    /// A keyword outside the property's keyword set.
    Keyword(String),
}

/// Why a property map operation was rejected.
///
/// Every variant names the property involved. Operations that fail leave the
/// underlying inline style untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypedOmError {
    /// The property is not in the registry.
    UnsupportedProperty { property: String },
    /// Something other than a style value was supplied, or `append` got a value
    /// of a kind the property never takes.
    InvalidValueType { property: String, found: InputType },
    /// A sequence was supplied to a property that takes a single value, or
    /// `append` was used on such a property.
    SequenceNotSupported { property: String },
    /// The value's kind or keyword is not accepted by the property.
    ValueNotSupportedByProperty {
        property: String,
        value: RejectedValue,
    },
    /// The stored text could not be read back as style values.
    UnparsableValue { property: String, text: String },
}

impl TypedOmError {
    /// The property the failed operation targeted.
    pub fn property(&self) -> &str {
        match self {
            Self::UnsupportedProperty { property }
            | Self::InvalidValueType { property, .. }
            | Self::SequenceNotSupported { property }
            | Self::ValueNotSupportedByProperty { property, .. }
            | Self::UnparsableValue { property, .. } => property,
        }
    }
}

impl fmt::Display for TypedOmError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedProperty { property } => {
                write!(formatter, "{property} is not a supported CSS property")
            }
            Self::InvalidValueType {
                property,
                found: InputType::Null,
            } => write!(formatter, "null cannot be set or appended to {property}"),
            Self::InvalidValueType {
                property,
                found: InputType::Style(kind),
            } => write!(formatter, "{property} does not take values of type {kind}"),
            Self::InvalidValueType { property, found } => write!(
                formatter,
                "{property} only takes StyleValue objects, got a {found}"
            ),
            Self::SequenceNotSupported { property } => {
                write!(formatter, "{property} does not support sequences of styleValues")
            }
            Self::ValueNotSupportedByProperty {
                property,
                value: RejectedValue::Keyword(keyword),
            } => write!(formatter, "{property} does not take the keyword {keyword}"),
            Self::ValueNotSupportedByProperty {
                property,
                value: RejectedValue::Kind(kind),
            } => write!(formatter, "{property} does not take values of type {kind}"),
            Self::UnparsableValue { property, text } => {
                write!(formatter, "{property} holds {text:?}, which is not a list of style values")
            }
        }
    }
}

impl Error for TypedOmError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_property() {
        let unsupported = TypedOmError::UnsupportedProperty {
            property: "lemon".to_owned(),
        };
        assert_eq!(unsupported.to_string(), "lemon is not a supported CSS property");

        let kind = TypedOmError::InvalidValueType {
            property: "animation-iteration-count".to_owned(),
            found: InputType::Style(StyleValueKind::SimpleLength),
        };
        assert_eq!(
            kind.to_string(),
            "animation-iteration-count does not take values of type SimpleLength"
        );

        let keyword = TypedOmError::ValueNotSupportedByProperty {
            property: "height".to_owned(),
            value: RejectedValue::Keyword("lemon".to_owned()),
        };
        assert_eq!(keyword.to_string(), "height does not take the keyword lemon");
        assert_eq!(keyword.property(), "height");
    }

    #[test]
    fn null_has_its_own_message() {
        let null = TypedOmError::InvalidValueType {
            property: "animation-iteration-count".to_owned(),
            found: InputType::Null,
        };
        assert_eq!(
            null.to_string(),
            "null cannot be set or appended to animation-iteration-count"
        );
    }
}
