//! Ordering policies and their rank functions.

use super::orders;
use sass_lint_core::utils::{property_search, strip_prefix, Record};
use sass_lint_core::{ConfigError, RuleSetting};
use std::borrow::Cow;
use std::fmt;

/// One entry of an ordering list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderEntry {
    name: Cow<'static, str>,
}

impl OrderEntry {
    /// Creates an entry for a configured property name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
        }
    }

    pub(crate) const fn from_static(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
        }
    }

    /// Property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Record for OrderEntry {
    fn field(&self, name: &str) -> Option<&str> {
        (name == "name").then_some(self.name())
    }
}

/// Built-in orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderPreset {
    /// `recess`
    Recess,
    /// `smacss`
    Smacss,
    /// `concentric`
    Concentric,
}

impl OrderPreset {
    /// Looks a preset up by its configuration name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "recess" => Some(Self::Recess),
            "smacss" => Some(Self::Smacss),
            "concentric" => Some(Self::Concentric),
            _ => None,
        }
    }

    /// Configuration name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Recess => "recess",
            Self::Smacss => "smacss",
            Self::Concentric => "concentric",
        }
    }

    /// The ordered property list.
    #[must_use]
    pub fn entries(self) -> &'static [OrderEntry] {
        match self {
            Self::Recess => orders::RECESS,
            Self::Smacss => orders::SMACSS,
            Self::Concentric => orders::CONCENTRIC,
        }
    }
}

/// Where a property sits under a policy. Only keys from the same policy are
/// compared with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RankKey<'a> {
    /// Position in an ordering list.
    Index(usize),
    /// The name itself, for lexicographic ordering.
    Name(&'a str),
}

/// How declarations inside a block must be ordered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Policy {
    /// Lexicographic by the written property name.
    #[default]
    Alphabetical,
    /// One of the built-in lists.
    Preset(OrderPreset),
    /// A list taken from configuration.
    Custom(Vec<OrderEntry>),
}

impl Policy {
    /// Builds a custom policy from property names.
    #[must_use]
    pub fn custom<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Custom(names.into_iter().map(OrderEntry::new).collect())
    }

    /// Resolves the `order` option of `rule`'s setting.
    ///
    /// Absent means alphabetical. A string names a built-in ordering and an
    /// array of strings is a custom list.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOption`] for an unknown preset name, a
    /// non-string list element, or any other value type.
    pub fn from_setting(rule: &str, setting: &RuleSetting) -> Result<Self, ConfigError> {
        let invalid = |message: String| ConfigError::InvalidOption {
            rule: rule.to_string(),
            option: "order".to_string(),
            message,
        };

        match setting.option("order") {
            None => Ok(Self::Alphabetical),
            Some(toml::Value::String(name)) if name == "alphabetical" => Ok(Self::Alphabetical),
            Some(toml::Value::String(name)) => OrderPreset::from_name(name)
                .map(Self::Preset)
                .ok_or_else(|| {
                    invalid(format!(
                        "unknown order `{name}`, expected alphabetical, recess, smacss, \
                         concentric or a list of properties"
                    ))
                }),
            Some(toml::Value::Array(names)) => names
                .iter()
                .map(|value| {
                    value.as_str().map(OrderEntry::new).ok_or_else(|| {
                        invalid(format!(
                            "custom order entries must be property names, found {}",
                            value.type_str()
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Custom),
            Some(other) => Err(invalid(format!(
                "expected a preset name or an array of property names, found {}",
                other.type_str()
            ))),
        }
    }

    /// Rank of `property`, or `None` if the policy does not order it.
    ///
    /// List policies look up the name without its vendor prefix.
    #[must_use]
    pub fn rank<'a>(&self, property: &'a str) -> Option<RankKey<'a>> {
        match self {
            Self::Alphabetical => Some(RankKey::Name(property)),
            Self::Preset(preset) => {
                property_search(preset.entries(), strip_prefix(property), "name")
                    .map(RankKey::Index)
            }
            Self::Custom(entries) => {
                property_search(entries, strip_prefix(property), "name").map(RankKey::Index)
            }
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alphabetical => f.write_str("alphabetical"),
            Self::Preset(preset) => f.write_str(preset.name()),
            Self::Custom(entries) => write!(f, "custom ({} properties)", entries.len()),
        }
    }
}
