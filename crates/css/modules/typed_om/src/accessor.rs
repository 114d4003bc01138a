//! The seam between the property map and whatever owns the inline style.

use crate::property_map::StylePropertyMap;
use crate::registry::PropertyRegistry;
use css_style_attr::InlineStyle;

/// Read/write access to an element's inline style, keyed by lowercase property name.
///
/// The property map treats the implementor as the only source of truth and
/// never caches what it reads.
pub trait InlineStyleAccess {
    /// Current text of `property`; empty when unset.
    fn property_value(&self, property: &str) -> String;

    /// Replace the text of `property`. An empty `value` unsets it.
    fn set_property_value(&mut self, property: &str, value: &str);

    /// Unset `property`. Unsetting an unset property does nothing.
    fn remove_property(&mut self, property: &str);

    /// Names of the set properties, in the order they were assigned.
    fn assigned_properties(&self) -> Vec<String>;
}

impl InlineStyleAccess for InlineStyle {
    fn property_value(&self, property: &str) -> String {
        self.get(property).map(str::to_owned).unwrap_or_default()
    }

    fn set_property_value(&mut self, property: &str, value: &str) {
        self.set(property, value);
    }

    fn remove_property(&mut self, property: &str) {
        self.remove(property);
    }

    fn assigned_properties(&self) -> Vec<String> {
        self.property_names().map(str::to_owned).collect()
    }
}

/// Create a [`StylePropertyMap`] over any inline style on demand, the way
/// `element.styleMap()` does.
pub trait StyleMapExt: InlineStyleAccess {
    /// A map over this style using the built-in registry.
    fn style_map(&mut self) -> StylePropertyMap<'_, Self> {
        StylePropertyMap::new(self)
    }

    /// A map over this style using `registry`.
    fn style_map_with<'map>(
        &'map mut self,
        registry: &'map PropertyRegistry,
    ) -> StylePropertyMap<'map, Self> {
        StylePropertyMap::with_registry(self, registry)
    }
}

impl<S: InlineStyleAccess + ?Sized> StyleMapExt for S {}
