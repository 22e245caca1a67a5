//! Declarative form definitions.
//!
//! A definition names each field's rules instead of constructing
//! validators in code:
//!
//! ```json
//! {
//!   "fields": [
//!     { "name": "name",  "label": "Name",  "rules": [{ "rule": "required" }, { "rule": "minLength", "args": [2] }] },
//!     { "name": "email", "label": "Email", "rules": [{ "rule": "email" }] }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{DefinitionError, RegistryError};
use crate::field::{FieldSpec, ValidationConfig};
use crate::registry::{Arg, RegistrySnapshot};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    /// Registered validator name.
    pub rule: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Arg>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
}

/// A whole form, fields in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDefinition {
    pub fields: Vec<FieldDefinition>,
}

impl FormDefinition {
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the configuration against `snapshot`.
    ///
    /// Fails on the first rule that names an unknown validator or whose
    /// arguments the factory rejects.
    pub fn build(&self, snapshot: &RegistrySnapshot) -> Result<ValidationConfig, RegistryError> {
        let mut config = ValidationConfig::new();
        for field in &self.fields {
            let validators = field
                .rules
                .iter()
                .map(|rule| snapshot.build(&rule.rule, &rule.args))
                .collect::<Result<Vec<_>, _>>()?;
            config = config.field(
                field.name.clone(),
                FieldSpec::new(field.label.clone()).validators(validators),
            );
        }
        Ok(config)
    }
}
