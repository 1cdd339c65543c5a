//! Locale catalog
//!
//! Every user-facing string the service emits is resolved through [`text`],
//! a pure lookup from `(MessageKey, Locale)` to a static string. The active
//! locale is a single configuration value; nothing here is mutable.

mod catalog;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use catalog::{text, MessageKey};

/// Supported presentation languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Polish (the site's pinned language)
    #[default]
    Pl,
    /// English
    En,
    /// Russian
    Ru,
}

impl Locale {
    /// All supported locales
    pub const ALL: [Locale; 3] = [Locale::Pl, Locale::En, Locale::Ru];

    /// BCP 47 language tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Pl => "pl",
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a locale tag is not one of the supported languages
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale '{0}' (expected one of: pl, en, ru)")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pl" | "pl-pl" | "pl_pl" => Ok(Locale::Pl),
            "en" | "en-us" | "en-gb" | "en_us" | "en_gb" => Ok(Locale::En),
            "ru" | "ru-ru" | "ru_ru" => Ok(Locale::Ru),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}
