//! Declarative form validation.
//!
//! A form is described as a [`ValidationConfig`]: an ordered set of fields,
//! each with a label and a chain of [`Validator`]s. The [`engine`] turns the
//! current [`FormValues`] into a [`ValidationResult`], stopping each chain at
//! its first failure. An [`Attachment`] binds a configuration to a concrete
//! form through the [`FormAdapter`] trait and only shows errors once the
//! user has tried to submit.
//!
//! # Example
//!
//! ```ignore
//! use formgate::prelude::*;
//!
//! let registry = ValidatorRegistry::new();
//! let form = MemoryForm::new().text("name", "").checkbox_group("tags", ["a", "b", "c"]);
//!
//! let mut attachment = Attachment::attach(form, &registry.snapshot(), |r| {
//!     Ok(ValidationConfig::new()
//!         .field("name", FieldSpec::new("Name").validator(r.required()?).validator(r.min_length(2)?))
//!         .field("tags", FieldSpec::new("Tags").validator(r.min_selections(2)?)))
//! }, AttachOptions::new())?;
//!
//! attachment.edit()?;   // evaluated, nothing shown
//! attachment.submit()?; // errors shown, submission withheld
//! ```

pub mod adapter;
pub mod attachment;
pub mod builtin;
pub mod definition;
pub mod engine;
pub mod error;
pub mod field;
pub mod locale;
pub mod memory;
pub mod message;
pub mod prelude;
pub mod registry;
pub mod settings;
pub mod validator;
pub mod value;
pub mod visibility;

mod result;

pub use adapter::FormAdapter;
pub use attachment::{AttachOptions, Attachment, AttachmentId, Outcome};
pub use definition::FormDefinition;
pub use engine::evaluate;
pub use error::{AdapterError, DefinitionError, EvaluateError, FormError, RegistryError};
pub use field::{FieldSpec, ValidationConfig};
pub use locale::{Locale, LocalePolicy};
pub use memory::MemoryForm;
pub use message::{MessageCatalog, MessageData};
pub use registry::{Arg, RegistrySnapshot, ValidatorFactory, ValidatorRegistry};
pub use result::{FieldError, ValidationResult};
pub use settings::Settings;
pub use validator::{Rule, Validator};
pub use value::{FieldValue, FormValues};
pub use visibility::{FormEvent, Visibility};
