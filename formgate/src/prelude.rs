//! Prelude module for convenient imports.
//!
//! ```ignore
//! use formgate::prelude::*;
//! ```

// Attachment and adapter boundary
pub use crate::adapter::FormAdapter;
pub use crate::attachment::{AttachOptions, Attachment, Outcome};
pub use crate::memory::MemoryForm;

// Configuration
pub use crate::field::{FieldSpec, ValidationConfig};
pub use crate::locale::Locale;
pub use crate::registry::{RegistrySnapshot, ValidatorRegistry};
pub use crate::settings::Settings;
pub use crate::validator::{Rule, Validator};

// Values, results and errors
pub use crate::error::{FormError, RegistryError};
pub use crate::result::ValidationResult;
pub use crate::value::{FieldValue, FormValues};
pub use crate::visibility::FormEvent;
