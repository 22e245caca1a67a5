//! Tests for the validator registry.

use formgate::builtin::{self, Required};
use formgate::{
    Arg, FieldSpec, FormValues, Locale, RegistryError, Settings, ValidationConfig, Validator,
    ValidatorRegistry, evaluate,
};

fn always_fails() -> Validator {
    Validator::from_fn("required", |_, _| false).message(Locale::En, "{label} is always wrong")
}

fn name_config(spec: FieldSpec) -> ValidationConfig {
    ValidationConfig::new().field("name", spec)
}

#[test]
fn test_builtins_are_registered() {
    let registry = ValidatorRegistry::new();
    assert_eq!(
        registry.names(),
        vec![
            "email",
            "maxLength",
            "maxSelections",
            "minLength",
            "minSelections",
            "pattern",
            "required",
        ]
    );
    assert!(ValidatorRegistry::empty().names().is_empty());
}

#[test]
fn test_overwrite_affects_later_configs_only() {
    let mut registry = ValidatorRegistry::new();
    let before = name_config(FieldSpec::new("Name").validator(registry.snapshot().required().unwrap()));

    registry.register("required", |_: &[Arg]| Ok(always_fails()));
    let after = name_config(FieldSpec::new("Name").validator(registry.snapshot().required().unwrap()));

    let values = FormValues::new().with("name", "Ada");
    let settings = Settings::default();
    assert!(evaluate(&before, &values, &settings).unwrap().is_valid());
    assert_eq!(
        evaluate(&after, &values, &settings).unwrap().error("name"),
        Some("Name is always wrong")
    );
}

#[test]
fn test_snapshot_is_frozen() {
    let mut registry = ValidatorRegistry::new();
    let snapshot = registry.snapshot();

    registry.register("required", |_: &[Arg]| Ok(always_fails()));
    registry.register("nonEmpty", |_: &[Arg]| {
        Ok(Validator::new("nonEmpty", Required).message(Locale::En, "{label} is empty"))
    });

    assert!(!snapshot.contains("nonEmpty"));
    assert!(registry.snapshot().contains("nonEmpty"));

    let old = snapshot.required().unwrap();
    assert!(old.check(&"x".into(), &FormValues::new()));
}

#[test]
fn test_unknown_validator() {
    let snapshot = ValidatorRegistry::empty().snapshot();
    let err = snapshot.required().unwrap_err();
    assert!(matches!(err, RegistryError::UnknownValidator(name) if name == "required"));
}

#[test]
fn test_factory_arguments_are_checked() {
    let snapshot = ValidatorRegistry::new().snapshot();

    let err = snapshot.build(builtin::MIN_LENGTH, &[]).unwrap_err();
    assert!(matches!(err, RegistryError::InvalidArguments { .. }));

    let err = snapshot
        .build(builtin::MIN_SELECTIONS, &[Arg::from("two")])
        .unwrap_err();
    assert!(err.to_string().contains("minSelections"));

    let err = snapshot
        .build(builtin::REQUIRED, &[Arg::from(true)])
        .unwrap_err();
    assert!(matches!(err, RegistryError::InvalidArguments { .. }));
}

#[test]
fn test_invalid_pattern() {
    let err = ValidatorRegistry::new()
        .snapshot()
        .pattern("(unclosed")
        .unwrap_err();
    assert!(matches!(err, RegistryError::InvalidPattern { .. }));
}

#[test]
fn test_custom_factory_with_arguments() {
    let mut registry = ValidatorRegistry::new();
    registry.register("oneOf", |args: &[Arg]| {
        let allowed: Vec<String> = args
            .iter()
            .filter_map(|a| a.as_str().map(str::to_string))
            .collect();
        Ok(Validator::from_fn("oneOf", move |value, _| {
            value
                .as_text()
                .is_some_and(|text| allowed.iter().any(|a| a == text))
        })
        .message(Locale::En, "{label} is not an allowed value"))
    });

    let snapshot = registry.snapshot();
    let plan = snapshot
        .build("oneOf", &[Arg::from("free"), Arg::from("pro")])
        .unwrap();
    let config = ValidationConfig::new().field("plan", FieldSpec::new("Plan").validator(plan));

    let ok = FormValues::new().with("plan", "pro");
    let bad = FormValues::new().with("plan", "gold");
    assert!(evaluate(&config, &ok, &Settings::default()).unwrap().is_valid());
    assert_eq!(
        evaluate(&config, &bad, &Settings::default())
            .unwrap()
            .error("plan"),
        Some("Plan is not an allowed value")
    );
}

#[test]
fn test_resolve_returns_overwriting_factory() {
    let mut registry = ValidatorRegistry::new();
    let original = registry.resolve("required").unwrap();
    let snapshot = registry.snapshot();

    registry.register("required", |_: &[Arg]| Ok(always_fails()));

    let values = FormValues::new();
    let filled = "Ada".into();
    let replaced = registry.resolve("required").unwrap()(&[]).unwrap();
    assert!(!replaced.check(&filled, &values));
    assert_eq!(replaced.template(Locale::En), Some("{label} is always wrong"));

    let kept = snapshot.resolve("required").unwrap()(&[]).unwrap();
    assert!(kept.check(&filled, &values));
    assert!(original(&[]).unwrap().check(&filled, &values));
}

#[test]
fn test_resolve_unknown_name() {
    let registry = ValidatorRegistry::new();
    assert!(registry.resolve("isbn").is_none());
    assert!(registry.snapshot().resolve("isbn").is_none());
    assert!(ValidatorRegistry::empty().resolve("required").is_none());
}
