//! Validator registry and snapshots.
//!
//! A [`ValidatorRegistry`] maps names to factories. Registering under an
//! existing name replaces the previous factory. Form configurations are
//! built from a [`RegistrySnapshot`], which is frozen at the moment it is
//! taken: later registrations do not affect it.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::builtin;
use crate::error::RegistryError;
use crate::validator::Validator;

/// An argument passed to a validator factory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Arg {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl Arg {
    /// The argument as a non-negative count.
    pub fn as_count(&self) -> Option<usize> {
        match self {
            Self::Int(n) => usize::try_from(*n).ok(),
            _ => None,
        }
    }

    /// The argument as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<usize> for Arg {
    fn from(value: usize) -> Self {
        Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Builds a fresh [`Validator`] from arguments.
pub type ValidatorFactory =
    Arc<dyn Fn(&[Arg]) -> Result<Validator, RegistryError> + Send + Sync>;

type FactoryMap = HashMap<String, ValidatorFactory>;

/// Named validator factories, pre-populated with the built-ins.
#[derive(Clone)]
pub struct ValidatorRegistry {
    factories: Arc<FactoryMap>,
}

impl ValidatorRegistry {
    /// Create a registry holding the built-in validators.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        builtin::install(&mut registry);
        debug!("Registered {} built-in validators", registry.factories.len());
        registry
    }

    /// Create a registry with no validators at all.
    pub fn empty() -> Self {
        Self {
            factories: Arc::new(HashMap::new()),
        }
    }

    /// Register `factory` under `name`, replacing any existing entry.
    ///
    /// Snapshots taken before this call keep the factory they saw.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(&[Arg]) -> Result<Validator, RegistryError> + Send + Sync + 'static,
    {
        let name = name.into();
        let factories = Arc::make_mut(&mut self.factories);
        if factories.insert(name.clone(), Arc::new(factory)).is_some() {
            debug!("Validator '{}' overwritten", name);
        } else {
            debug!("Validator '{}' registered", name);
        }
    }

    /// Look up the factory registered under `name`.
    pub fn resolve(&self, name: &str) -> Option<ValidatorFactory> {
        self.factories.get(name).cloned()
    }

    /// Check if a factory is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Freeze the current set of factories.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            factories: Arc::clone(&self.factories),
        }
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("names", &self.names())
            .finish()
    }
}

/// An immutable view of a registry, handed to form configuration builders.
///
/// The typed helpers go through the registered factories, so a name that
/// has been overwritten resolves to the replacement.
#[derive(Clone)]
pub struct RegistrySnapshot {
    factories: Arc<FactoryMap>,
}

impl RegistrySnapshot {
    /// Look up the factory registered under `name`.
    pub fn resolve(&self, name: &str) -> Option<ValidatorFactory> {
        self.factories.get(name).cloned()
    }

    /// Check if a factory is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Build a validator by name.
    pub fn build(&self, name: &str, args: &[Arg]) -> Result<Validator, RegistryError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| RegistryError::UnknownValidator(name.to_string()))?;
        factory(args)
    }

    pub fn required(&self) -> Result<Validator, RegistryError> {
        self.build(builtin::REQUIRED, &[])
    }

    pub fn email(&self) -> Result<Validator, RegistryError> {
        self.build(builtin::EMAIL, &[])
    }

    pub fn min_length(&self, min: usize) -> Result<Validator, RegistryError> {
        self.build(builtin::MIN_LENGTH, &[Arg::from(min)])
    }

    pub fn max_length(&self, max: usize) -> Result<Validator, RegistryError> {
        self.build(builtin::MAX_LENGTH, &[Arg::from(max)])
    }

    pub fn min_selections(&self, min: usize) -> Result<Validator, RegistryError> {
        self.build(builtin::MIN_SELECTIONS, &[Arg::from(min)])
    }

    pub fn max_selections(&self, max: usize) -> Result<Validator, RegistryError> {
        self.build(builtin::MAX_SELECTIONS, &[Arg::from(max)])
    }

    pub fn pattern(&self, pattern: &str) -> Result<Validator, RegistryError> {
        self.build(builtin::PATTERN, &[Arg::from(pattern)])
    }
}

impl fmt::Debug for RegistrySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("RegistrySnapshot")
            .field("names", &names)
            .finish()
    }
}
