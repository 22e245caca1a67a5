//! Signup Example
//!
//! Drives a headless signup form through a scripted session:
//! - edits before the first submit are validated silently
//! - the first submit reveals errors and withholds submission
//! - later edits update the errors live
//! - a valid submit goes through
//!
//! Run with `cargo run --example signup` and watch stderr for engine logs.

use formgate::prelude::*;
use formgate::{MessageCatalog, Outcome};
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

fn fields(r: &RegistrySnapshot) -> Result<ValidationConfig, RegistryError> {
    let confirm = Validator::from_fn("matchesPassword", |value, values| {
        value == values.get("password")
    })
    .message(Locale::En, "{label} does not match the password");

    Ok(ValidationConfig::new()
        .field(
            "name",
            FieldSpec::new("Name")
                .validator(r.required()?)
                .validator(r.min_length(2)?),
        )
        .field(
            "email",
            FieldSpec::new("Email")
                .validator(r.required()?)
                .validator(r.email()?),
        )
        .field(
            "password",
            FieldSpec::new("Password").validator(r.min_length(8)?),
        )
        .field(
            "confirm",
            FieldSpec::new("Password confirmation").validator(confirm),
        )
        .field(
            "topics",
            FieldSpec::new("Topics").validator(r.min_selections(2)?),
        )
        .field("terms", FieldSpec::new("Terms").validator(r.required()?)))
}

fn report(step: &str, outcome: Outcome, form: &MemoryForm) {
    println!("{step}: {outcome:?}");
    for (field, message) in form.errors() {
        println!("  {field}: {message}");
    }
}

fn main() -> Result<(), FormError> {
    let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), std::io::stderr());

    let form = MemoryForm::new()
        .text("name", "")
        .text("email", "")
        .text("password", "")
        .text("confirm", "")
        .checkbox_group("topics", ["rust", "web", "embedded"])
        .checkbox("terms", "accepted");

    let catalog = MessageCatalog::new().with("required", Locale::En, "Please fill in {label}");
    let options = AttachOptions::new().settings(Settings::new().catalog(catalog));

    let registry = ValidatorRegistry::new();
    let mut signup = Attachment::attach(form, &registry.snapshot(), fields, options)?;

    signup.adapter_mut().set_text("name", "A");
    let outcome = signup.edit()?;
    report("edit before submit", outcome, signup.adapter());

    let outcome = signup.submit()?;
    report("first submit", outcome, signup.adapter());

    let form = signup.adapter_mut();
    form.set_text("name", "Ada");
    form.set_text("email", "ada@example.com");
    form.set_text("password", "correct horse");
    form.set_text("confirm", "correct horse");
    let outcome = signup.edit()?;
    report("after fixing text fields", outcome, signup.adapter());

    let form = signup.adapter_mut();
    form.set_checked("topics", "rust", true);
    form.set_checked("topics", "embedded", true);
    form.set_checked("terms", "accepted", true);
    let outcome = signup.submit()?;
    report("second submit", outcome, signup.adapter());

    println!("submissions: {}", signup.adapter().submissions());
    Ok(())
}
