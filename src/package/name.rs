//! Package name normalization.
//!
//! Python package names compare case-insensitively, and `-`, `_` and `.`
//! are interchangeable separators (`Typing_Extensions` and
//! `typing-extensions` name the same distribution). [`PackageName`] stores
//! the original spelling for display next to a normalized key used for
//! equality and hashing.

use regex::Regex;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

/// Runs of separator characters that normalize to a single `-`.
static SEPARATOR_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_.]+").expect("SEPARATOR_RUNS must compile"));

/// Normalize a package name into its comparison key.
pub fn normalize(name: &str) -> String {
    SEPARATOR_RUNS
        .replace_all(name.trim(), "-")
        .to_lowercase()
}

/// A package name with case- and separator-insensitive identity.
#[derive(Debug, Clone)]
pub struct PackageName {
    display: String,
    key: String,
}

impl PackageName {
    /// Create a package name from its written form.
    pub fn new(name: &str) -> Self {
        let display = name.trim().to_string();
        let key = normalize(&display);
        Self { display, key }
    }

    /// The name as it was written.
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// The normalized comparison key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl PartialEq for PackageName {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for PackageName {}

impl Hash for PackageName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl From<&str> for PackageName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn normalize_lowercases() {
        assert_eq!(normalize("Flask"), "flask");
    }

    #[test]
    fn normalize_folds_separator_runs() {
        assert_eq!(normalize("typing_extensions"), "typing-extensions");
        assert_eq!(normalize("zope.interface"), "zope-interface");
        assert_eq!(normalize("a-_.b"), "a-b");
    }

    #[test]
    fn names_compare_case_insensitively() {
        assert_eq!(PackageName::new("Flask"), PackageName::new("flask"));
        assert_ne!(PackageName::new("flask"), PackageName::new("click"));
    }

    #[test]
    fn display_keeps_original_spelling() {
        let name = PackageName::new("  PyYAML ");
        assert_eq!(name.to_string(), "PyYAML");
        assert_eq!(name.key(), "pyyaml");
    }

    #[test]
    fn set_semantics_collapse_equivalent_names() {
        let set: HashSet<PackageName> = ["Requests", "requests", "REQUESTS"]
            .into_iter()
            .map(PackageName::from)
            .collect();
        assert_eq!(set.len(), 1);
    }
}
