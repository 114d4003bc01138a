//! Which properties exist and what values each accepts.
//! Spec: <https://drafts.css-houdini.org/css-typed-om-1/#reify-stylevalue>

use crate::error::RejectedValue;
use crate::style_value::{StyleValue, StyleValueKind};
use log::{debug, trace};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// CSS-wide keywords, valid for every property.
///
/// Spec: <https://www.w3.org/TR/css-values-3/#common-keywords>
pub const GLOBAL_KEYWORDS: [&str; 3] = ["initial", "inherit", "unset"];

/// The keywords a property accepts on top of [`GLOBAL_KEYWORDS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeywordSet {
    /// Only the listed keywords (lowercase), matched ASCII case-insensitively.
    Only(&'static [&'static str]),
    /// Any identifier, e.g. an animation name.
    Any,
}

impl KeywordSet {
    /// No keywords beyond the global ones.
    pub const NONE: Self = Self::Only(&[]);

    fn contains(self, keyword: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Only(keywords) => is_listed(keywords, keyword),
        }
    }
}

fn is_listed(keywords: &[&str], keyword: &str) -> bool {
    keywords
        .iter()
        .any(|listed| listed.eq_ignore_ascii_case(keyword))
}

/// The rule for one property: list support and accepted value kinds and keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyRule {
    list_valued: bool,
    kinds: &'static [StyleValueKind],
    keywords: KeywordSet,
}

impl PropertyRule {
    /// A property holding exactly one value.
    pub const fn single(kinds: &'static [StyleValueKind], keywords: KeywordSet) -> Self {
        Self {
            list_valued: false,
            kinds,
            keywords,
        }
    }

    /// A property holding a comma-separated list of values.
    pub const fn list(kinds: &'static [StyleValueKind], keywords: KeywordSet) -> Self {
        Self {
            list_valued: true,
            kinds,
            keywords,
        }
    }

    /// Whether the property accepts a sequence of values.
    pub const fn is_list_valued(&self) -> bool {
        self.list_valued
    }

    /// Whether values of `kind` can ever be valid. Keywords always can, since
    /// every property takes the global keywords.
    pub fn accepts_kind(&self, kind: StyleValueKind) -> bool {
        kind == StyleValueKind::Keyword || self.kinds.contains(&kind)
    }

    /// Whether `keyword` is valid for the property, ignoring ASCII case.
    pub fn accepts_keyword(&self, keyword: &str) -> bool {
        is_listed(&GLOBAL_KEYWORDS, keyword) || self.keywords.contains(keyword)
    }

    /// The form the property stores `value` in.
    ///
    /// Predefined keywords are lowercased; custom identifiers and other values
    /// are left as they are.
    pub fn canonical(&self, value: StyleValue) -> StyleValue {
        match value {
            StyleValue::Keyword(keyword) if self.is_predefined(keyword.keyword()) => {
                StyleValue::Keyword(keyword.to_ascii_lowercase())
            }
            other => other,
        }
    }

    fn is_predefined(&self, keyword: &str) -> bool {
        is_listed(&GLOBAL_KEYWORDS, keyword)
            || matches!(self.keywords, KeywordSet::Only(keywords) if is_listed(keywords, keyword))
    }

    /// Check a single value against the rule.
    ///
    /// # Errors
    /// Returns the offending kind or keyword when the value is not accepted.
    pub fn check(&self, value: &StyleValue) -> Result<(), RejectedValue> {
        match value {
            StyleValue::Keyword(keyword) if !self.accepts_keyword(keyword.keyword()) => {
                Err(RejectedValue::Keyword(keyword.keyword().to_owned()))
            }
            other if !self.accepts_kind(other.kind()) => Err(RejectedValue::Kind(other.kind())),
            _ => Ok(()),
        }
    }
}

/// An immutable table from property name to [`PropertyRule`].
#[derive(Clone, Debug, Default)]
pub struct PropertyRegistry {
    rules: HashMap<String, PropertyRule>,
}

/// Builds a custom [`PropertyRegistry`].
#[derive(Clone, Debug, Default)]
pub struct PropertyRegistryBuilder {
    rules: HashMap<String, PropertyRule>,
}

impl PropertyRegistryBuilder {
    /// Add or replace the rule for `name`.
    #[must_use]
    pub fn property(mut self, name: &str, rule: PropertyRule) -> Self {
        self.rules.insert(name.to_ascii_lowercase(), rule);
        self
    }

    /// Drop `name` from the registry being built.
    #[must_use]
    pub fn without(mut self, name: &str) -> Self {
        self.rules.remove(&name.to_ascii_lowercase());
        self
    }

    /// Finish building.
    pub fn build(self) -> PropertyRegistry {
        let registry = PropertyRegistry { rules: self.rules };
        debug!(target: "css_typed_om", "property registry built with {} properties", registry.len());
        trace!(target: "css_typed_om", "registered properties: {:?}", registry.names());
        registry
    }
}

static STANDARD: Lazy<PropertyRegistry> = Lazy::new(|| {
    STANDARD_PROPERTIES
        .iter()
        .fold(PropertyRegistry::builder(), |builder, &(name, rule)| {
            builder.property(name, rule)
        })
        .build()
});

impl PropertyRegistry {
    /// The built-in registry of supported CSS properties.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Start an empty registry.
    pub fn builder() -> PropertyRegistryBuilder {
        PropertyRegistryBuilder::default()
    }

    /// Start a registry pre-filled with this one's rules.
    pub fn to_builder(&self) -> PropertyRegistryBuilder {
        PropertyRegistryBuilder {
            rules: self.rules.clone(),
        }
    }

    /// The rule for `property`, matched ASCII case-insensitively.
    pub fn lookup(&self, property: &str) -> Option<&PropertyRule> {
        if property.bytes().any(|byte| byte.is_ascii_uppercase()) {
            return self.rules.get(&property.to_ascii_lowercase());
        }
        self.rules.get(property)
    }

    /// Whether `property` is recognized.
    pub fn contains(&self, property: &str) -> bool {
        self.lookup(property).is_some()
    }

    /// Number of recognized properties.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no property is recognized.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Recognized property names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

const NUMBER: &[StyleValueKind] = &[StyleValueKind::Number];
const LENGTH: &[StyleValueKind] = &[StyleValueKind::SimpleLength];
const NUMBER_OR_LENGTH: &[StyleValueKind] = &[StyleValueKind::Number, StyleValueKind::SimpleLength];
const KEYWORDS: &[StyleValueKind] = &[];

const AUTO: KeywordSet = KeywordSet::Only(&["auto"]);
const BORDER_WIDTH: KeywordSet = KeywordSet::Only(&["thin", "medium", "thick"]);
const BORDER_STYLE: KeywordSet = KeywordSet::Only(&[
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
]);
const COLOR: KeywordSet = KeywordSet::Only(&[
    "currentcolor",
    "transparent",
    "black",
    "silver",
    "gray",
    "white",
    "maroon",
    "red",
    "purple",
    "fuchsia",
    "green",
    "lime",
    "olive",
    "yellow",
    "navy",
    "blue",
    "teal",
    "aqua",
    "orange",
]);
const OVERFLOW: KeywordSet = KeywordSet::Only(&["visible", "hidden", "clip", "scroll", "auto"]);

/// Rules for the built-in registry.
const STANDARD_PROPERTIES: &[(&str, PropertyRule)] = &[
    // Sizing
    ("width", PropertyRule::single(LENGTH, AUTO)),
    ("height", PropertyRule::single(LENGTH, AUTO)),
    ("min-width", PropertyRule::single(LENGTH, AUTO)),
    ("min-height", PropertyRule::single(LENGTH, AUTO)),
    ("max-width", PropertyRule::single(LENGTH, KeywordSet::Only(&["none"]))),
    ("max-height", PropertyRule::single(LENGTH, KeywordSet::Only(&["none"]))),
    // Box model
    ("margin-top", PropertyRule::single(LENGTH, AUTO)),
    ("margin-right", PropertyRule::single(LENGTH, AUTO)),
    ("margin-bottom", PropertyRule::single(LENGTH, AUTO)),
    ("margin-left", PropertyRule::single(LENGTH, AUTO)),
    ("padding-top", PropertyRule::single(LENGTH, KeywordSet::NONE)),
    ("padding-right", PropertyRule::single(LENGTH, KeywordSet::NONE)),
    ("padding-bottom", PropertyRule::single(LENGTH, KeywordSet::NONE)),
    ("padding-left", PropertyRule::single(LENGTH, KeywordSet::NONE)),
    (
        "box-sizing",
        PropertyRule::single(KEYWORDS, KeywordSet::Only(&["content-box", "border-box"])),
    ),
    // Borders
    ("border-top-width", PropertyRule::single(LENGTH, BORDER_WIDTH)),
    ("border-right-width", PropertyRule::single(LENGTH, BORDER_WIDTH)),
    ("border-bottom-width", PropertyRule::single(LENGTH, BORDER_WIDTH)),
    ("border-left-width", PropertyRule::single(LENGTH, BORDER_WIDTH)),
    ("border-top-style", PropertyRule::single(KEYWORDS, BORDER_STYLE)),
    ("border-right-style", PropertyRule::single(KEYWORDS, BORDER_STYLE)),
    ("border-bottom-style", PropertyRule::single(KEYWORDS, BORDER_STYLE)),
    ("border-left-style", PropertyRule::single(KEYWORDS, BORDER_STYLE)),
    ("border-top-color", PropertyRule::single(KEYWORDS, COLOR)),
    ("border-right-color", PropertyRule::single(KEYWORDS, COLOR)),
    ("border-bottom-color", PropertyRule::single(KEYWORDS, COLOR)),
    ("border-left-color", PropertyRule::single(KEYWORDS, COLOR)),
    ("color", PropertyRule::single(KEYWORDS, COLOR)),
    ("background-color", PropertyRule::single(KEYWORDS, COLOR)),
    // Positioning
    ("top", PropertyRule::single(LENGTH, AUTO)),
    ("right", PropertyRule::single(LENGTH, AUTO)),
    ("bottom", PropertyRule::single(LENGTH, AUTO)),
    ("left", PropertyRule::single(LENGTH, AUTO)),
    ("z-index", PropertyRule::single(NUMBER, AUTO)),
    (
        "position",
        PropertyRule::single(
            KEYWORDS,
            KeywordSet::Only(&["static", "relative", "absolute", "fixed", "sticky"]),
        ),
    ),
    (
        "float",
        PropertyRule::single(KEYWORDS, KeywordSet::Only(&["left", "right", "none"])),
    ),
    (
        "clear",
        PropertyRule::single(KEYWORDS, KeywordSet::Only(&["left", "right", "both", "none"])),
    ),
    // Display & visibility
    (
        "display",
        PropertyRule::single(
            KEYWORDS,
            KeywordSet::Only(&[
                "none",
                "block",
                "inline",
                "inline-block",
                "flex",
                "inline-flex",
                "grid",
                "inline-grid",
                "table",
                "list-item",
                "contents",
                "flow-root",
            ]),
        ),
    ),
    (
        "visibility",
        PropertyRule::single(KEYWORDS, KeywordSet::Only(&["visible", "hidden", "collapse"])),
    ),
    ("opacity", PropertyRule::single(NUMBER, KeywordSet::NONE)),
    ("overflow-x", PropertyRule::single(KEYWORDS, OVERFLOW)),
    ("overflow-y", PropertyRule::single(KEYWORDS, OVERFLOW)),
    // Flexbox
    ("flex-grow", PropertyRule::single(NUMBER, KeywordSet::NONE)),
    ("flex-shrink", PropertyRule::single(NUMBER, KeywordSet::NONE)),
    (
        "flex-basis",
        PropertyRule::single(LENGTH, KeywordSet::Only(&["auto", "content"])),
    ),
    ("order", PropertyRule::single(NUMBER, KeywordSet::NONE)),
    // Fonts & text
    (
        "font-size",
        PropertyRule::single(
            LENGTH,
            KeywordSet::Only(&[
                "xx-small", "x-small", "small", "medium", "large", "x-large", "xx-large", "larger",
                "smaller",
            ]),
        ),
    ),
    (
        "font-weight",
        PropertyRule::single(
            NUMBER,
            KeywordSet::Only(&["normal", "bold", "bolder", "lighter"]),
        ),
    ),
    (
        "font-style",
        PropertyRule::single(KEYWORDS, KeywordSet::Only(&["normal", "italic", "oblique"])),
    ),
    (
        "line-height",
        PropertyRule::single(NUMBER_OR_LENGTH, KeywordSet::Only(&["normal"])),
    ),
    (
        "letter-spacing",
        PropertyRule::single(LENGTH, KeywordSet::Only(&["normal"])),
    ),
    (
        "word-spacing",
        PropertyRule::single(LENGTH, KeywordSet::Only(&["normal"])),
    ),
    ("text-indent", PropertyRule::single(LENGTH, KeywordSet::NONE)),
    (
        "text-align",
        PropertyRule::single(
            KEYWORDS,
            KeywordSet::Only(&["left", "right", "center", "justify", "start", "end"]),
        ),
    ),
    (
        "white-space",
        PropertyRule::single(
            KEYWORDS,
            KeywordSet::Only(&["normal", "pre", "nowrap", "pre-wrap", "pre-line"]),
        ),
    ),
    // Animations & transitions
    (
        "animation-iteration-count",
        PropertyRule::list(NUMBER, KeywordSet::Only(&["infinite"])),
    ),
    ("animation-name", PropertyRule::list(KEYWORDS, KeywordSet::Any)),
    (
        "animation-direction",
        PropertyRule::list(
            KEYWORDS,
            KeywordSet::Only(&["normal", "reverse", "alternate", "alternate-reverse"]),
        ),
    ),
    (
        "animation-fill-mode",
        PropertyRule::list(
            KEYWORDS,
            KeywordSet::Only(&["none", "forwards", "backwards", "both"]),
        ),
    ),
    (
        "animation-play-state",
        PropertyRule::list(KEYWORDS, KeywordSet::Only(&["running", "paused"])),
    ),
    ("transition-property", PropertyRule::list(KEYWORDS, KeywordSet::Any)),
];
