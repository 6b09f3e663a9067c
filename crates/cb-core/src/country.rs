use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Field names a view can be grouped by, in the order the query requests them.
pub const GROUPABLE_FIELDS: &[&str] = &[
    "name",
    "native",
    "capital",
    "emoji",
    "currency",
    "languages",
];

/// Treat a JSON `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A spoken language as reported by the countries endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// ISO 639 language code (e.g. "fr").
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    /// English name of the language.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

impl Language {
    /// Create a language from its code and name.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// One country as returned by the countries query.
///
/// Records are never mutated after they are fetched; the name is the unique key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    /// English country name.
    pub name: String,
    /// Name of the country in its own language.
    #[serde(default, deserialize_with = "null_as_default")]
    pub native: String,
    /// Capital city, absent for some territories.
    #[serde(default)]
    pub capital: Option<String>,
    /// Flag emoji.
    #[serde(default, deserialize_with = "null_as_default")]
    pub emoji: String,
    /// Currency code(s), comma separated upstream when there are several.
    #[serde(default)]
    pub currency: Option<String>,
    /// Official languages in upstream order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<Language>,
}

impl CountryRecord {
    /// Create a record with only a name; other fields start empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            native: String::new(),
            capital: None,
            emoji: String::new(),
            currency: None,
            languages: Vec::new(),
        }
    }

    /// Set the native name.
    pub fn with_native(mut self, native: impl Into<String>) -> Self {
        self.native = native.into();
        self
    }

    /// Set the capital.
    pub fn with_capital(mut self, capital: impl Into<String>) -> Self {
        self.capital = Some(capital.into());
        self
    }

    /// Set the flag emoji.
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }

    /// Set the currency code.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Append a language.
    pub fn with_language(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.languages.push(Language::new(code, name));
        self
    }

    /// Name of the first listed language, if any.
    pub fn first_language(&self) -> Option<&str> {
        self.languages.first().map(|l| l.name.as_str())
    }

    /// Look up a field by its query name.
    ///
    /// Returns `None` for unknown fields and for fields that are null or empty,
    /// so callers can treat both the same way. Field names are case-sensitive.
    pub fn field(&self, name: &str) -> Option<String> {
        let value = match name {
            "name" => Some(self.name.clone()),
            "native" => Some(self.native.clone()),
            "capital" => self.capital.clone(),
            "emoji" => Some(self.emoji.clone()),
            "currency" => self.currency.clone(),
            "languages" => Some(
                self.languages
                    .iter()
                    .map(|l| l.name.as_str())
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            _ => None,
        };
        value.filter(|v| !v.is_empty())
    }
}

impl fmt::Display for CountryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.emoji.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {}", self.emoji, self.name)
        }
    }
}
