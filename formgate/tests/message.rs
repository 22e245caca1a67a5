//! Tests for message rendering.

use formgate::message::render;
use formgate::MessageData;

#[test]
fn test_render_substitutes_label_and_parameters() {
    let data = MessageData::new().with("label", "Name").with("min", 2);
    assert_eq!(
        render("{label} must be at least {min} characters", &data),
        "Name must be at least 2 characters"
    );
}

#[test]
fn test_render_replaces_first_occurrence_only() {
    let data = MessageData::new().with("min", 3);
    assert_eq!(
        render("at least {min}, really {min}", &data),
        "at least 3, really {min}"
    );
}

#[test]
fn test_render_ignores_unused_keys() {
    let data = MessageData::new().with("label", "Tags").with("max", 9);
    assert_eq!(render("{label} is wrong", &data), "Tags is wrong");
}

#[test]
fn test_message_data_stringifies_values() {
    let data = MessageData::new().with("min", 2).with("ratio", 0.5);
    assert_eq!(data.get("min"), Some("2"));
    assert_eq!(data.get("ratio"), Some("0.5"));
    assert_eq!(data.len(), 2);
}

#[test]
fn test_render_does_not_rescan_substituted_values() {
    let data = MessageData::new().with("label", "Size {min}").with("min", 2);
    assert_eq!(
        render("{label} must be at least {min} characters", &data),
        "Size {min} must be at least 2 characters"
    );
}

#[test]
fn test_render_fills_placeholders_in_template_order() {
    let data = MessageData::new().with("a", "{b}").with("b", "B");
    assert_eq!(render("{b} then {a}", &data), "B then {b}");
}
