#![cfg(test)]

use anyhow::Result;
use css_typed_om::{
    InlineStyle, InlineStyleAccess, InputType, KeywordValue, LengthUnit, NumberValue,
    RejectedValue, SimpleLength, StyleInput, StyleMapExt, StyleValue, StyleValueKind,
    TypedOmError,
};

/// An element whose inline style already carries `opacity: 0.5`.
fn element_style() -> InlineStyle {
    let _ = env_logger::builder().is_test(true).try_init();
    InlineStyle::parse("opacity: 0.5")
}

fn iteration_counts() -> Result<Vec<StyleValue>> {
    Ok(vec![
        NumberValue::new(4.0)?.into(),
        NumberValue::new(5.0)?.into(),
        KeywordValue::new("infinite")?.into(),
    ])
}

#[test]
fn set_writes_the_css_text_of_a_length() -> Result<()> {
    let mut style = element_style();
    let length = SimpleLength::with_unit_name(9.2, "percent")?;
    style.style_map().set("height", length)?;
    assert_eq!(style.property_value("height"), "9.2%");
    Ok(())
}

#[test]
fn set_replaces_a_list_valued_property_wholesale() -> Result<()> {
    let mut style = element_style();
    style.set("animation-iteration-count", "infinite, 2, 5");
    style
        .style_map()
        .set("animation-iteration-count", iteration_counts()?)?;
    assert_eq!(
        style.property_value("animation-iteration-count"),
        "4, 5, infinite"
    );
    Ok(())
}

#[test]
fn set_rejects_sequences_on_single_valued_properties() -> Result<()> {
    let mut style = element_style();
    let sequence = vec![
        SimpleLength::new(3.0, LengthUnit::Pixels)?,
        SimpleLength::new(6.0, LengthUnit::Pixels)?,
    ];
    let err = style.style_map().set("height", sequence).unwrap_err();
    assert_eq!(
        err,
        TypedOmError::SequenceNotSupported {
            property: "height".to_owned()
        }
    );
    assert_eq!(err.to_string(), "height does not support sequences of styleValues");
    assert_eq!(style.property_value("height"), "");
    Ok(())
}

#[test]
fn set_rejects_value_kinds_the_property_does_not_take() -> Result<()> {
    let mut style = element_style();
    let err = style
        .style_map()
        .set("height", NumberValue::new(42.0)?)
        .unwrap_err();
    assert_eq!(
        err,
        TypedOmError::ValueNotSupportedByProperty {
            property: "height".to_owned(),
            value: RejectedValue::Kind(StyleValueKind::Number),
        }
    );
    Ok(())
}

#[test]
fn set_rejects_keywords_the_property_does_not_take() -> Result<()> {
    let mut style = element_style();
    let err = style
        .style_map()
        .set("height", KeywordValue::new("lemon")?)
        .unwrap_err();
    assert_eq!(err.to_string(), "height does not take the keyword lemon");
    style.style_map().set("height", KeywordValue::new("auto")?)?;
    assert_eq!(style.property_value("height"), "auto");
    Ok(())
}

#[test]
fn set_rejects_values_that_are_not_style_values() {
    let mut style = element_style();
    let mut map = style.style_map();
    assert_eq!(
        map.set("height", 4.0),
        Err(TypedOmError::InvalidValueType {
            property: "height".to_owned(),
            found: InputType::Number,
        })
    );
    assert!(matches!(
        map.set("height", StyleInput::Null),
        Err(TypedOmError::InvalidValueType {
            found: InputType::Null,
            ..
        })
    ));
    assert!(matches!(
        map.set("height", "10px"),
        Err(TypedOmError::InvalidValueType {
            found: InputType::Text,
            ..
        })
    ));
}

#[test]
fn set_rejects_unsupported_properties() -> Result<()> {
    let mut style = element_style();
    let err = style
        .style_map()
        .set("lemons", SimpleLength::new(3.0, LengthUnit::Pixels)?)
        .unwrap_err();
    assert_eq!(
        err,
        TypedOmError::UnsupportedProperty {
            property: "lemons".to_owned()
        }
    );
    assert_eq!(style.assigned_properties(), vec!["opacity".to_owned()]);
    Ok(())
}

#[test]
fn failed_set_leaves_the_previous_value() -> Result<()> {
    let mut style = element_style();
    style.set("animation-iteration-count", "infinite, 2, 5");
    let mut values = iteration_counts()?;
    values.push(SimpleLength::new(3.0, LengthUnit::Pixels)?.into());
    assert!(
        style
            .style_map()
            .set("animation-iteration-count", values)
            .is_err()
    );
    assert_eq!(
        style.property_value("animation-iteration-count"),
        "infinite, 2, 5"
    );
    Ok(())
}

#[test]
fn delete_clears_a_property_and_is_idempotent() -> Result<()> {
    let mut style = element_style();
    style.set("height", "10px");
    let mut map = style.style_map();
    map.delete("height")?;
    assert!(!map.has("height")?);
    map.delete("height")?;
    assert_eq!(style.property_value("height"), "");
    Ok(())
}

#[test]
fn delete_and_has_reject_unsupported_properties() {
    let mut style = element_style();
    let mut map = style.style_map();
    assert!(matches!(
        map.delete("lemons"),
        Err(TypedOmError::UnsupportedProperty { .. })
    ));
    assert!(matches!(
        map.has("lemons"),
        Err(TypedOmError::UnsupportedProperty { .. })
    ));
}

#[test]
fn has_reports_whether_a_property_is_set() -> Result<()> {
    let mut style = element_style();
    let map = style.style_map();
    assert!(map.has("opacity")?);
    assert!(!map.has("height")?);
    assert!(map.has("OPACITY")?);
    Ok(())
}

#[test]
fn append_adds_a_single_value_after_existing_items() -> Result<()> {
    let mut style = element_style();
    style.set("animation-iteration-count", "infinite, 2, 5");
    style
        .style_map()
        .append("animation-iteration-count", NumberValue::new(4.0)?)?;
    assert_eq!(
        style.property_value("animation-iteration-count"),
        "infinite, 2, 5, 4"
    );
    Ok(())
}

#[test]
fn append_adds_a_sequence_after_existing_items() -> Result<()> {
    let mut style = element_style();
    style.set("animation-iteration-count", "infinite, 2, 5");
    style
        .style_map()
        .append("animation-iteration-count", iteration_counts()?)?;
    assert_eq!(
        style.property_value("animation-iteration-count"),
        "infinite, 2, 5, 4, 5, infinite"
    );
    Ok(())
}

#[test]
fn append_to_an_unset_property_matches_set() -> Result<()> {
    let mut appended = element_style();
    appended
        .style_map()
        .append("animation-iteration-count", iteration_counts()?)?;

    let mut assigned = element_style();
    assigned
        .style_map()
        .set("animation-iteration-count", iteration_counts()?)?;

    assert_eq!(
        appended.property_value("animation-iteration-count"),
        "4, 5, infinite"
    );
    assert_eq!(appended, assigned);
    Ok(())
}

#[test]
fn append_names_the_value_type_the_property_rejects() -> Result<()> {
    let mut style = element_style();
    style.set("animation-iteration-count", "infinite, 2, 5");
    let sequence: Vec<StyleValue> = vec![
        NumberValue::new(4.0)?.into(),
        NumberValue::new(5.0)?.into(),
        SimpleLength::new(3.0, LengthUnit::Pixels)?.into(),
        KeywordValue::new("infinite")?.into(),
    ];
    let err = style
        .style_map()
        .append("animation-iteration-count", sequence)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "animation-iteration-count does not take values of type SimpleLength"
    );
    assert_eq!(
        style.property_value("animation-iteration-count"),
        "infinite, 2, 5"
    );
    Ok(())
}

#[test]
fn append_rejects_unsupported_and_single_valued_properties() -> Result<()> {
    let mut style = element_style();
    let mut map = style.style_map();
    let err = map.append("lemon", NumberValue::new(4.0)?).unwrap_err();
    assert_eq!(err.to_string(), "lemon is not a supported CSS property");
    let err = map.append("height", NumberValue::new(4.0)?).unwrap_err();
    assert_eq!(
        err,
        TypedOmError::SequenceNotSupported {
            property: "height".to_owned()
        }
    );
    Ok(())
}

#[test]
fn append_rejects_null() {
    let mut style = element_style();
    let err = style
        .style_map()
        .append("animation-iteration-count", StyleInput::Null)
        .unwrap_err();
    assert_eq!(
        err,
        TypedOmError::InvalidValueType {
            property: "animation-iteration-count".to_owned(),
            found: InputType::Null,
        }
    );
    let none: Option<NumberValue> = None;
    assert!(
        style
            .style_map()
            .append("animation-iteration-count", none)
            .is_err()
    );
}

#[test]
fn get_properties_follows_assignment_order() {
    let mut style = element_style();
    style.set("opacity", "0.5");
    style.set("height", "5px");
    style.set("border-top-color", "initial");
    style.set("border-top-width", "initial");
    assert_eq!(
        style.style_map().get_properties(),
        vec!["opacity", "height", "border-top-color", "border-top-width"]
    );
}

#[test]
fn get_properties_skips_cleared_properties() -> Result<()> {
    let mut style = element_style();
    let mut map = style.style_map();
    map.set("height", SimpleLength::new(5.0, LengthUnit::Pixels)?)?;
    map.set("border-top-color", KeywordValue::new("initial")?)?;
    map.delete("height")?;
    map.set("height", SimpleLength::new(6.0, LengthUnit::Pixels)?)?;
    map.set("animation-iteration-count", Vec::<StyleValue>::new())?;
    assert_eq!(
        map.get_properties(),
        vec!["opacity", "border-top-color", "height"]
    );
    Ok(())
}

#[test]
fn get_all_reads_back_typed_values() -> Result<()> {
    let mut style = element_style();
    let mut map = style.style_map();
    map.set("animation-iteration-count", iteration_counts()?)?;
    assert_eq!(map.get_all("animation-iteration-count")?, iteration_counts()?);

    map.set("height", SimpleLength::with_unit_name(9.2, "percent")?)?;
    assert_eq!(
        map.get("height")?,
        Some(SimpleLength::new(9.2, LengthUnit::Percent)?.into())
    );
    assert_eq!(map.get("width")?, None);
    Ok(())
}

#[test]
fn get_reports_text_it_cannot_read() {
    let mut style = element_style();
    style.set("border-top-color", "rgb(1, 2, 3)");
    let map = style.style_map();
    assert_eq!(
        map.get("border-top-color"),
        Err(TypedOmError::UnparsableValue {
            property: "border-top-color".to_owned(),
            text: "rgb(1, 2, 3)".to_owned(),
        })
    );
}

#[test]
fn custom_animation_names_keep_their_case() -> Result<()> {
    let mut style = element_style();
    let mut map = style.style_map();
    map.set("animation-name", KeywordValue::new("SlideIn")?)?;
    map.append("animation-name", KeywordValue::new("fadeOut")?)?;
    assert_eq!(
        map.get_all("animation-name")?,
        vec![
            StyleValue::from(KeywordValue::new("SlideIn")?),
            StyleValue::from(KeywordValue::new("fadeOut")?),
        ]
    );
    assert_eq!(style.property_value("animation-name"), "SlideIn, fadeOut");
    Ok(())
}

#[test]
fn non_ascii_custom_names_are_kept() -> Result<()> {
    let mut style = element_style();
    style
        .style_map()
        .set("animation-name", KeywordValue::new("Glissé")?)?;
    assert_eq!(style.property_value("animation-name"), "Glissé");
    assert_eq!(
        style.style_map().get("animation-name")?,
        Some(KeywordValue::new("Glissé")?.into())
    );
    Ok(())
}

#[test]
fn predefined_keywords_are_stored_lowercase() -> Result<()> {
    let mut style = element_style();
    style.style_map().set("height", KeywordValue::new("AUTO")?)?;
    assert_eq!(style.property_value("height"), "auto");
    style.set("display", "Block");
    assert_eq!(
        style.style_map().get("display")?,
        Some(KeywordValue::new("block")?.into())
    );
    Ok(())
}

#[test]
fn get_rejects_numbers_beyond_f64() {
    let mut style = element_style();
    style.set("opacity", "1e999");
    style.set("height", "1e999px");
    let map = style.style_map();
    assert_eq!(
        map.get("opacity"),
        Err(TypedOmError::UnparsableValue {
            property: "opacity".to_owned(),
            text: "1e999".to_owned(),
        })
    );
    assert_eq!(
        map.get_all("height"),
        Err(TypedOmError::UnparsableValue {
            property: "height".to_owned(),
            text: "1e999px".to_owned(),
        })
    );
}

#[test]
fn typed_values_never_hold_non_finite_numbers() {
    assert!(NumberValue::new(f64::NAN).is_err());
    assert!(SimpleLength::new(f64::NAN, LengthUnit::Pixels).is_err());
    assert!(SimpleLength::new(f64::INFINITY, LengthUnit::Percent).is_err());
    assert!("1e999".parse::<NumberValue>().is_err());
}
