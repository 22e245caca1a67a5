//! Tests for the evaluation algorithm.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use formgate::{
    EvaluateError, FieldSpec, FieldValue, FormValues, Locale, MessageCatalog, Settings,
    ValidationConfig, Validator, ValidatorRegistry, evaluate,
};

fn signup_config() -> ValidationConfig {
    let r = ValidatorRegistry::new().snapshot();
    ValidationConfig::new()
        .field(
            "name",
            FieldSpec::new("Name")
                .validator(r.required().unwrap())
                .validator(r.min_length(2).unwrap()),
        )
        .field(
            "email",
            FieldSpec::new("Email")
                .validator(r.required().unwrap())
                .validator(r.email().unwrap()),
        )
        .field(
            "tags",
            FieldSpec::new("Tags").validator(r.min_selections(2).unwrap()),
        )
}

/// A validator that counts how often its predicate runs.
fn spy(name: &str, passes: bool, calls: &Arc<AtomicUsize>) -> Validator {
    let calls = Arc::clone(calls);
    Validator::from_fn(name, move |_, _| {
        calls.fetch_add(1, Ordering::SeqCst);
        passes
    })
    .message(Locale::En, format!("{name} failed"))
}

#[test]
fn test_valid_form_has_no_errors() {
    let values = FormValues::new()
        .with("name", "Ada")
        .with("email", "ada@example.com")
        .with("tags", vec!["a", "b"]);

    let result = evaluate(&signup_config(), &values, &Settings::default()).unwrap();
    assert!(result.is_valid());
    assert!(result.errors().is_empty());
}

#[test]
fn test_invalid_fields_only() {
    let values = FormValues::new()
        .with("name", "A")
        .with("email", "ada@example.com")
        .with("tags", vec!["a"]);

    let result = evaluate(&signup_config(), &values, &Settings::default()).unwrap();
    assert!(result.is_invalid());
    assert_eq!(
        result.error("name"),
        Some("Name must be at least 2 characters")
    );
    assert_eq!(result.error("email"), None);
    assert_eq!(
        result.error("tags"),
        Some("You must choose at least 2 items")
    );
    assert_eq!(result.invalid_fields().collect::<Vec<_>>(), vec!["name", "tags"]);
}

#[test]
fn test_first_failure_wins() {
    let result = evaluate(&signup_config(), &FormValues::new(), &Settings::default()).unwrap();
    assert_eq!(result.error("name"), Some("Name is required"));
    assert_eq!(result.error("email"), Some("Email is required"));
}

#[test]
fn test_evaluation_is_idempotent() {
    let config = signup_config();
    let values = FormValues::new().with("name", "A").with("email", "nope");
    let settings = Settings::default();

    let first = evaluate(&config, &values, &settings).unwrap();
    let second = evaluate(&config, &values, &settings).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_short_circuit_skips_later_validators() {
    let a_calls = Arc::new(AtomicUsize::new(0));
    let b_calls = Arc::new(AtomicUsize::new(0));
    let config = ValidationConfig::new().field(
        "field",
        FieldSpec::new("Field")
            .validator(spy("a", false, &a_calls))
            .validator(spy("b", false, &b_calls)),
    );

    let result = evaluate(&config, &FormValues::new(), &Settings::default()).unwrap();
    assert_eq!(result.error("field"), Some("a failed"));
    assert_eq!(a_calls.load(Ordering::SeqCst), 1);
    assert_eq!(b_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_passing_chain_runs_every_validator() {
    let a_calls = Arc::new(AtomicUsize::new(0));
    let b_calls = Arc::new(AtomicUsize::new(0));
    let config = ValidationConfig::new().field(
        "field",
        FieldSpec::new("Field")
            .validator(spy("a", true, &a_calls))
            .validator(spy("b", true, &b_calls)),
    );

    let result = evaluate(&config, &FormValues::new(), &Settings::default()).unwrap();
    assert!(result.is_valid());
    assert_eq!(a_calls.load(Ordering::SeqCst), 1);
    assert_eq!(b_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_validators_see_all_values() {
    let confirm = Validator::from_fn("matches", |value, values| value == values.get("password"))
        .message(Locale::En, "{label} does not match");
    let config = ValidationConfig::new()
        .field("confirm", FieldSpec::new("Confirmation").validator(confirm));

    let mismatch = FormValues::new()
        .with("password", "hunter2")
        .with("confirm", "hunter3");
    let result = evaluate(&config, &mismatch, &Settings::default()).unwrap();
    assert_eq!(result.error("confirm"), Some("Confirmation does not match"));

    let matching = FormValues::new()
        .with("password", "hunter2")
        .with("confirm", "hunter2");
    assert!(evaluate(&config, &matching, &Settings::default())
        .unwrap()
        .is_valid());
}

#[test]
fn test_missing_template_is_fatal() {
    let config = signup_config();
    let settings = Settings::new().locale(Locale::De);

    let err = evaluate(&config, &FormValues::new(), &settings).unwrap_err();
    assert_eq!(
        err,
        EvaluateError::MissingTemplate {
            field: "name".to_string(),
            validator: "required".to_string(),
            locale: Locale::De,
        }
    );
}

#[test]
fn test_missing_template_irrelevant_when_valid() {
    let values = FormValues::new()
        .with("name", "Ada")
        .with("email", "ada@example.com")
        .with("tags", vec!["a", "b"]);
    let settings = Settings::new().locale(Locale::De);

    assert!(evaluate(&signup_config(), &values, &settings)
        .unwrap()
        .is_valid());
}

#[test]
fn test_fallback_locale() {
    let settings = Settings::new().locale(Locale::De).fallback(Locale::En);
    let result = evaluate(&signup_config(), &FormValues::new(), &settings).unwrap();
    assert_eq!(result.error("name"), Some("Name is required"));
}

#[test]
fn test_validator_templates_per_locale() {
    let required = ValidatorRegistry::new()
        .snapshot()
        .required()
        .unwrap()
        .message(Locale::Nl, "{label} is verplicht");
    let config = ValidationConfig::new().field("naam", FieldSpec::new("Naam").validator(required));
    let settings = Settings::new().locale(Locale::Nl);

    let result = evaluate(&config, &FormValues::new(), &settings).unwrap();
    assert_eq!(result.error("naam"), Some("Naam is verplicht"));
}

#[test]
fn test_catalog_overrides_builtin_template() {
    let catalog = MessageCatalog::new().with("required", Locale::En, "Please fill in {label}");
    let settings = Settings::new().catalog(catalog);

    let result = evaluate(&signup_config(), &FormValues::new(), &settings).unwrap();
    assert_eq!(result.error("name"), Some("Please fill in Name"));
}

#[test]
fn test_label_is_merged_into_message_data() {
    let config = ValidationConfig::new().field(
        "bio",
        FieldSpec::new("Biography").validator(
            ValidatorRegistry::new()
                .snapshot()
                .max_length(5)
                .unwrap(),
        ),
    );
    let values = FormValues::new().with("bio", FieldValue::from("too long"));

    let result = evaluate(&config, &values, &Settings::default()).unwrap();
    assert_eq!(
        result.error("bio"),
        Some("Biography must be at most 5 characters")
    );
}

#[test]
fn test_label_with_braces_is_rendered_verbatim() {
    let config = ValidationConfig::new().field(
        "size",
        FieldSpec::new("Size {min}").validator(
            ValidatorRegistry::new()
                .snapshot()
                .min_length(2)
                .unwrap(),
        ),
    );
    let values = FormValues::new().with("size", "a");

    let result = evaluate(&config, &values, &Settings::default()).unwrap();
    assert_eq!(
        result.error("size"),
        Some("Size {min} must be at least 2 characters")
    );
}
