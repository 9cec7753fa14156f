//! Callout variants.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownVariant;

/// Callout severity.
///
/// A closed set: classification always resolves to one of these, falling back
/// to the configured default instead of failing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    /// Neutral callout.
    #[default]
    Default,
    /// Informational note.
    Info,
    /// Warning.
    Warning,
    /// Positive outcome.
    Success,
    /// Destructive or dangerous action.
    Danger,
}

impl Variant {
    /// All variants in declaration order.
    pub const ALL: [Variant; 5] = [
        Self::Default,
        Self::Info,
        Self::Warning,
        Self::Success,
        Self::Danger,
    ];

    /// Lower-case variant name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = UnknownVariant;

    /// Parse an exact lower-case variant name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_owned()))
    }
}
