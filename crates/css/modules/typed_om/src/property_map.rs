//! The map-like view over an element's inline style.
//! Spec: <https://drafts.css-houdini.org/css-typed-om-1/#the-stylepropertymap>

use crate::accessor::InlineStyleAccess;
use crate::error::{RejectedValue, TypedOmError};
use crate::input::{InputType, StyleInput};
use crate::registry::{PropertyRegistry, PropertyRule};
use crate::style_value::StyleValue;
use css_values_units::parse_component_list;
use cssparser::ToCss;
use log::{debug, trace};

/// Separator between the items of a list-valued property.
const LIST_SEPARATOR: &str = ", ";

/// Which mutation is validating its input; they report kind mismatches differently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mutation {
    Set,
    Append,
}

/// Structured read/write access to one inline style.
///
/// The map borrows the style for as long as it lives and holds no values of its
/// own: every read goes to the style, and every write is validated against the
/// registry in full before anything is written.
pub struct StylePropertyMap<'map, S: InlineStyleAccess + ?Sized> {
    style: &'map mut S,
    registry: &'map PropertyRegistry,
}

impl<'map, S: InlineStyleAccess + ?Sized> StylePropertyMap<'map, S> {
    /// A map over `style` using [`PropertyRegistry::standard`].
    pub fn new(style: &'map mut S) -> Self {
        Self::with_registry(style, PropertyRegistry::standard())
    }

    /// A map over `style` using a custom registry.
    pub fn with_registry(style: &'map mut S, registry: &'map PropertyRegistry) -> Self {
        Self { style, registry }
    }

    /// The registry validating this map.
    pub fn registry(&self) -> &PropertyRegistry {
        self.registry
    }

    /// Replace `property` with `input`, a style value or a sequence of them.
    ///
    /// Setting an empty sequence on a list-valued property clears it.
    ///
    /// # Errors
    /// - [`TypedOmError::UnsupportedProperty`] if the registry does not know `property`.
    /// - [`TypedOmError::InvalidValueType`] for `null`, bare numbers or strings, and nested sequences.
    /// - [`TypedOmError::SequenceNotSupported`] for a sequence on a single-valued property.
    /// - [`TypedOmError::ValueNotSupportedByProperty`] for a value kind or keyword the property rejects.
    pub fn set(&mut self, property: &str, input: impl Into<StyleInput>) -> Result<(), TypedOmError> {
        let input = input.into();
        let (name, rule) = self.rule_for(property)?;
        if input.is_sequence() && !rule.is_list_valued() {
            return Err(rejected(TypedOmError::SequenceNotSupported { property: name }));
        }
        let values = validated_values(&name, rule, input, Mutation::Set).map_err(rejected)?;
        let text = serialize_list(&values);
        debug!(target: "css_typed_om", "set {name}: {text:?}");
        if text.is_empty() {
            self.style.remove_property(&name);
        } else {
            self.style.set_property_value(&name, &text);
        }
        Ok(())
    }

    /// Append `input` to the current items of a list-valued `property`.
    ///
    /// An unset property behaves as an empty list. Appending an empty sequence
    /// changes nothing.
    ///
    /// # Errors
    /// - [`TypedOmError::UnsupportedProperty`] if the registry does not know `property`.
    /// - [`TypedOmError::SequenceNotSupported`] if `property` is not list-valued.
    /// - [`TypedOmError::InvalidValueType`] for `null`, non-style values, and
    ///   values of a kind the property never takes.
    /// - [`TypedOmError::ValueNotSupportedByProperty`] for a keyword the property rejects.
    pub fn append(
        &mut self,
        property: &str,
        input: impl Into<StyleInput>,
    ) -> Result<(), TypedOmError> {
        let input = input.into();
        let (name, rule) = self.rule_for(property)?;
        if !rule.is_list_valued() {
            return Err(rejected(TypedOmError::SequenceNotSupported { property: name }));
        }
        let values = validated_values(&name, rule, input, Mutation::Append).map_err(rejected)?;
        let addition = serialize_list(&values);
        if addition.is_empty() {
            return Ok(());
        }
        let current = self.style.property_value(&name);
        let text = if current.trim().is_empty() {
            addition
        } else {
            format!("{current}{LIST_SEPARATOR}{addition}")
        };
        debug!(target: "css_typed_om", "append {name}: {text:?}");
        self.style.set_property_value(&name, &text);
        Ok(())
    }

    /// Clear `property`. Clearing an unset property is not an error.
    ///
    /// # Errors
    /// [`TypedOmError::UnsupportedProperty`] if the registry does not know `property`.
    pub fn delete(&mut self, property: &str) -> Result<(), TypedOmError> {
        let (name, _) = self.rule_for(property)?;
        debug!(target: "css_typed_om", "delete {name}");
        self.style.remove_property(&name);
        Ok(())
    }

    /// Whether `property` currently has a non-empty value.
    ///
    /// # Errors
    /// [`TypedOmError::UnsupportedProperty`] if the registry does not know `property`.
    pub fn has(&self, property: &str) -> Result<bool, TypedOmError> {
        let (name, _) = self.rule_for(property)?;
        Ok(!self.style.property_value(&name).trim().is_empty())
    }

    /// Names of the properties holding a non-empty value, in assignment order.
    pub fn get_properties(&self) -> Vec<String> {
        self.style
            .assigned_properties()
            .into_iter()
            .filter(|name| !self.style.property_value(name).trim().is_empty())
            .collect()
    }

    /// The first value of `property`, or `None` when it is unset.
    ///
    /// # Errors
    /// - [`TypedOmError::UnsupportedProperty`] if the registry does not know `property`.
    /// - [`TypedOmError::UnparsableValue`] if the stored text is not a list of
    ///   numbers, lengths and keywords.
    pub fn get(&self, property: &str) -> Result<Option<StyleValue>, TypedOmError> {
        Ok(self.get_all(property)?.into_iter().next())
    }

    /// Every comma-separated value of `property`, in order; empty when unset.
    ///
    /// # Errors
    /// - [`TypedOmError::UnsupportedProperty`] if the registry does not know `property`.
    /// - [`TypedOmError::UnparsableValue`] if the stored text is not a list of
    ///   numbers, lengths and keywords.
    pub fn get_all(&self, property: &str) -> Result<Vec<StyleValue>, TypedOmError> {
        let (name, rule) = self.rule_for(property)?;
        let text = self.style.property_value(&name);
        trace!(target: "css_typed_om", "read {name}: {text:?}");
        let components = parse_component_list(&text).map_err(|err| {
            debug!(target: "css_typed_om", "cannot read {name} ({err}): {text:?}");
            TypedOmError::UnparsableValue {
                property: name.clone(),
                text: text.clone(),
            }
        })?;
        Ok(components
            .into_iter()
            .map(|component| rule.canonical(StyleValue::from_component(component)))
            .collect())
    }

    /// Resolve `property` to its lowercase name and rule.
    fn rule_for(&self, property: &str) -> Result<(String, PropertyRule), TypedOmError> {
        let Some(rule) = self.registry.lookup(property).copied() else {
            return Err(rejected(TypedOmError::UnsupportedProperty {
                property: property.to_owned(),
            }));
        };
        Ok((property.to_ascii_lowercase(), rule))
    }
}

/// Log a rejected operation and hand the error back.
fn rejected(err: TypedOmError) -> TypedOmError {
    debug!(target: "css_typed_om", "rejected: {err}");
    err
}

/// Flatten `input` into style values, checking each against `rule`.
fn validated_values(
    property: &str,
    rule: PropertyRule,
    input: StyleInput,
    mutation: Mutation,
) -> Result<Vec<StyleValue>, TypedOmError> {
    let items = match input {
        StyleInput::Sequence(items) => items,
        StyleInput::Value(value) => vec![StyleInput::Value(value)],
        other => return Err(invalid_type(property, other.input_type())),
    };
    items
        .into_iter()
        .map(|item| match item {
            StyleInput::Value(value) => match rule.check(&value) {
                Ok(()) => Ok(rule.canonical(value)),
                Err(RejectedValue::Kind(kind)) if mutation == Mutation::Append => {
                    Err(invalid_type(property, InputType::Style(kind)))
                }
                Err(rejected_value) => Err(TypedOmError::ValueNotSupportedByProperty {
                    property: property.to_owned(),
                    value: rejected_value,
                }),
            },
            other => Err(invalid_type(property, other.input_type())),
        })
        .collect()
}

fn invalid_type(property: &str, found: InputType) -> TypedOmError {
    TypedOmError::InvalidValueType {
        property: property.to_owned(),
        found,
    }
}

/// Serialize values joined by the list separator.
fn serialize_list(values: &[StyleValue]) -> String {
    values
        .iter()
        .map(ToCss::to_css_string)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}
