//! Match mode selector
//!
//! The mode picks which predicate the matcher applies. Not every mode makes
//! sense for every type; the matcher falls back to the type's equality
//! instead of rejecting the combination.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Predicate selector for [`matches`](crate::matches)
///
/// Serialized by its wire name (`""`, `"substring"`, `"re"`, `"less_than"`,
/// ...). Parsing never fails: an unknown name selects [`MatchMode::Equals`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MatchMode {
    /// Type-specific equality (case-insensitive for strings, tolerant for floats)
    #[default]
    Equals,
    /// String contains the filter text
    Substring,
    /// String matches a precompiled regular expression
    Regex,
    /// value < filter
    LessThan,
    /// value <= filter
    LessThanOrEqual,
    /// value > filter
    GreaterThan,
    /// value >= filter
    GreaterThanOrEqual,
}

impl MatchMode {
    /// All modes (for iteration)
    pub const ALL: [MatchMode; 7] = [
        MatchMode::Equals,
        MatchMode::Substring,
        MatchMode::Regex,
        MatchMode::LessThan,
        MatchMode::LessThanOrEqual,
        MatchMode::GreaterThan,
        MatchMode::GreaterThanOrEqual,
    ];

    /// Wire name; the default mode is the empty string
    pub const fn id(&self) -> &'static str {
        match self {
            MatchMode::Equals => "",
            MatchMode::Substring => "substring",
            MatchMode::Regex => "re",
            MatchMode::LessThan => "less_than",
            MatchMode::LessThanOrEqual => "less_than_or_equal",
            MatchMode::GreaterThan => "greater_than",
            MatchMode::GreaterThanOrEqual => "greater_than_or_equal",
        }
    }

    /// Strict lookup by wire name
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "" | "equals" => Some(MatchMode::Equals),
            "substring" => Some(MatchMode::Substring),
            "re" | "regex" => Some(MatchMode::Regex),
            "less_than" => Some(MatchMode::LessThan),
            "less_than_or_equal" => Some(MatchMode::LessThanOrEqual),
            "greater_than" => Some(MatchMode::GreaterThan),
            "greater_than_or_equal" => Some(MatchMode::GreaterThanOrEqual),
            _ => None,
        }
    }

    /// Lenient lookup: unknown names select the default mode
    pub fn parse(id: &str) -> Self {
        Self::from_id(id).unwrap_or_else(|| {
            warn!(mode = id, "unknown match mode, falling back to equality");
            MatchMode::Equals
        })
    }

    /// One of the four magnitude comparisons
    pub const fn is_relational(&self) -> bool {
        matches!(
            self,
            MatchMode::LessThan
                | MatchMode::LessThanOrEqual
                | MatchMode::GreaterThan
                | MatchMode::GreaterThanOrEqual
        )
    }

    /// Only meaningful for strings
    pub const fn is_textual(&self) -> bool {
        matches!(self, MatchMode::Substring | MatchMode::Regex)
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Equals => f.write_str("equals"),
            other => f.write_str(other.id()),
        }
    }
}

impl From<&str> for MatchMode {
    fn from(id: &str) -> Self {
        MatchMode::parse(id)
    }
}

impl From<String> for MatchMode {
    fn from(id: String) -> Self {
        MatchMode::parse(&id)
    }
}

impl From<MatchMode> for String {
    fn from(mode: MatchMode) -> Self {
        mode.id().to_string()
    }
}
