//! Locale identifiers and the template fallback policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LocaleParseError;

/// Identifier selecting which message template variant is rendered.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    De,
    Es,
    Fr,
    Nl,
}

impl Locale {
    /// Every supported locale.
    pub const ALL: [Locale; 5] = [Self::En, Self::De, Self::Es, Self::Fr, Self::Nl];

    /// Two-letter language code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::Nl => "nl",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = LocaleParseError;

    /// Accepts a bare language code or a tag with a region (`en-GB`, `nl_BE`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s.split(['-', '_']).next().unwrap_or_default();
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(language))
            .ok_or_else(|| LocaleParseError(s.to_string()))
    }
}

/// What to do when a validator has no template for the active locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocalePolicy {
    /// Fail the evaluation with a missing-template error.
    #[default]
    Strict,
    /// Retry with the given locale before failing.
    Fallback(Locale),
}

impl LocalePolicy {
    /// Locales to try, in order, when rendering for `requested`.
    pub fn candidates(self, requested: Locale) -> impl Iterator<Item = Locale> {
        let fallback = match self {
            Self::Fallback(locale) if locale != requested => Some(locale),
            _ => None,
        };
        std::iter::once(requested).chain(fallback)
    }
}
