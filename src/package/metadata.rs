//! Parsing of the package manager's reports.
//!
//! Two reports are understood:
//!
//! - the installed-package listing, either as JSON (`pip list --format=json`)
//!   or in freeze format (`name==version`, one per line)
//! - per-package metadata (`pip show`), a sequence of `Key: value` header
//!   blocks separated by `---` lines

use serde::Deserialize;

use super::name::PackageName;

/// A package reported as installed in the environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InstalledPackage {
    /// Distribution name as reported.
    pub name: String,
    /// Installed version.
    pub version: String,
}

impl InstalledPackage {
    /// Create an installed package record.
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
        }
    }

    /// Parse one freeze-format line.
    ///
    /// The name is everything before the first `=`, so both `name=version`
    /// and `name==version` are accepted. Blank lines, comments and option
    /// lines yield `None`.
    pub fn from_freeze_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            return None;
        }

        let (name, version) = match line.split_once('=') {
            Some((name, rest)) => (name.trim(), rest.trim_start_matches('=').trim()),
            None => (line, ""),
        };

        if name.is_empty() {
            return None;
        }
        Some(Self::new(name, version))
    }

    /// The package's comparison name.
    pub fn package_name(&self) -> PackageName {
        PackageName::new(&self.name)
    }
}

/// Parse `pip list --format=json` output.
pub fn parse_installed_json(output: &str) -> serde_json::Result<Vec<InstalledPackage>> {
    serde_json::from_str(output.trim())
}

/// Parse freeze-format output, skipping lines that are not package entries.
pub fn parse_freeze(output: &str) -> Vec<InstalledPackage> {
    output
        .lines()
        .filter_map(InstalledPackage::from_freeze_line)
        .collect()
}

/// Metadata for one installed package.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackageMetadata {
    /// Distribution name.
    pub name: String,
    /// Installed version, if reported.
    pub version: Option<String>,
    /// Direct dependencies from the `Requires` field.
    pub requires: Vec<String>,
}

/// Parse `pip show` output into one record per package block.
///
/// Blocks without a `Name` header are dropped. A missing or empty
/// `Requires` header produces an empty dependency list.
pub fn parse_show_output(output: &str) -> Vec<PackageMetadata> {
    let mut records = Vec::new();
    let mut current = PackageMetadata::default();

    for line in output.lines() {
        if line.trim() == "---" {
            push_record(&mut records, std::mem::take(&mut current));
            continue;
        }

        // Continuation lines of multi-line headers start with whitespace
        if line.starts_with(char::is_whitespace) {
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        match key.trim() {
            "Name" => current.name = value.trim().to_string(),
            "Version" => current.version = Some(value.trim().to_string()),
            "Requires" => current.requires = parse_requires(value),
            _ => {}
        }
    }
    push_record(&mut records, current);

    records
}

fn push_record(records: &mut Vec<PackageMetadata>, record: PackageMetadata) {
    if !record.name.is_empty() {
        records.push(record);
    }
}

/// Split a comma-separated `Requires` value, removing all whitespace.
pub fn parse_requires(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|dep| dep.chars().filter(|c| !c.is_whitespace()).collect::<String>())
        .filter(|dep| !dep.is_empty())
        .collect()
}
