//! Class string composition.
//!
//! Transforms never decide final visual styling; they compose class strings
//! from a base, a provider or variant class, and author-supplied extras.

use crate::Variant;

/// Join class lists into a single class string.
///
/// Splits every part on whitespace, drops empty entries and repeated classes
/// (the first occurrence wins), and joins with single spaces.
///
/// # Example
///
/// ```
/// use rw_transforms::classes::join;
///
/// assert_eq!(join(&["card  my-2", "", "card link"]), "card my-2 link");
/// ```
#[must_use]
pub fn join(parts: &[&str]) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for class in parts.iter().flat_map(|part| part.split_whitespace()) {
        if !seen.contains(&class) {
            seen.push(class);
        }
    }
    seen.join(" ")
}

/// Resolves a callout variant plus extra classes into a class string.
pub trait StyleResolver: Send + Sync {
    /// Compose the class string for `variant`, appending `extra`.
    fn resolve(&self, variant: Variant, extra: &[&str]) -> String;
}

/// Base classes shared by every callout.
const CALLOUT_BASE: &str = "relative w-full rounded-lg border p-4 my-2 [&>svg~*]:pl-7 \
    [&>svg+div]:translate-y-[-3px] [&>svg]:absolute [&>svg]:left-4 [&>svg]:top-4 \
    [&>svg]:text-foreground";

/// Utility-class styling for callouts.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultStyles;

impl DefaultStyles {
    fn variant_classes(variant: Variant) -> &'static str {
        match variant {
            Variant::Default => "bg-background text-foreground",
            Variant::Info => "border-cyan/50 text-cyan dark:border-cyan [&>svg]:text-cyan",
            Variant::Warning => {
                "border-yellow/50 text-yellow dark:border-yellow [&>svg]:text-yellow"
            }
            Variant::Success => "border-green/50 text-green dark:border-green [&>svg]:text-green",
            Variant::Danger => "border-red/50 text-red dark:border-red [&>svg]:text-red",
        }
    }
}

impl StyleResolver for DefaultStyles {
    fn resolve(&self, variant: Variant, extra: &[&str]) -> String {
        let mut parts = vec![CALLOUT_BASE, Self::variant_classes(variant)];
        parts.extend_from_slice(extra);
        join(&parts)
    }
}
