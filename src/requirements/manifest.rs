//! Requirements manifest parsing.
//!
//! Reduces each line of a `requirements.txt` to a bare package name. The
//! parse is best-effort: anything that does not reduce to a name is skipped
//! without an error.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::Lines;

use crate::error::{Result, VenvbootError};
use crate::package::PackageName;

/// Characters that end the name part of a requirement line.
///
/// Version operators (`=`, `>`, `<`, `!`, `~`), environment markers (`;`),
/// extras (`[`) and direct references (`@`).
const NAME_TERMINATORS: &[char] = &['=', '>', '<', '!', '~', ';', '[', '@'];

/// Reduce one manifest line to a package name.
///
/// The line is cut at the first `#`, then at the first terminator, then at
/// interior whitespace. Lines that are empty afterwards, and pip option
/// lines such as `-r other.txt`, yield `None`.
pub fn parse_line(line: &str) -> Option<PackageName> {
    let without_comment = line.split('#').next().unwrap_or_default();
    let specifier = without_comment.trim();
    if specifier.is_empty() || specifier.starts_with('-') {
        return None;
    }

    let name = specifier
        .split(NAME_TERMINATORS)
        .next()
        .unwrap_or_default()
        .split_whitespace()
        .next()?;

    Some(PackageName::new(name))
}

/// A requirements manifest loaded into memory.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    contents: String,
}

impl Manifest {
    /// Read a manifest from disk.
    pub fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| VenvbootError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_contents(path, contents))
    }

    /// Build a manifest from already-loaded text.
    pub fn from_contents(path: &Path, contents: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            contents: contents.into(),
        }
    }

    /// Path the manifest was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Package names in manifest order, duplicates included.
    pub fn names(&self) -> ManifestNames<'_> {
        ManifestNames {
            lines: self.contents.lines(),
        }
    }
}

/// Lazy iterator over the package names of a [`Manifest`].
#[derive(Debug, Clone)]
pub struct ManifestNames<'a> {
    lines: Lines<'a>,
}

impl Iterator for ManifestNames<'_> {
    type Item = PackageName;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.by_ref().find_map(parse_line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(contents: &str) -> Vec<String> {
        Manifest::from_contents(Path::new("requirements.txt"), contents)
            .names()
            .map(|n| n.to_string())
            .collect()
    }

    #[test]
    fn comment_is_cut_off() {
        assert_eq!(parse_line("requests==2.31.0 # http").unwrap().as_str(), "requests");
        assert_eq!(parse_line("flask # web").unwrap().as_str(), "flask");
    }

    #[test]
    fn version_constraint_is_cut_off() {
        assert_eq!(parse_line("numpy>=1.20").unwrap().as_str(), "numpy");
        assert_eq!(parse_line("click<9").unwrap().as_str(), "click");
        assert_eq!(parse_line("django!=4.0").unwrap().as_str(), "django");
        assert_eq!(parse_line("attrs~=23.1").unwrap().as_str(), "attrs");
        assert_eq!(parse_line("six=1.16").unwrap().as_str(), "six");
    }

    #[test]
    fn whitespace_around_operator_is_stripped() {
        assert_eq!(parse_line("  requests >= 2.0  ").unwrap().as_str(), "requests");
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   \t").is_none());
        assert!(parse_line("# just a comment").is_none());
        assert!(parse_line("   # indented comment").is_none());
    }

    #[test]
    fn malformed_lines_degrade_to_skip() {
        assert!(parse_line("==1.0").is_none());
        assert!(parse_line(">=").is_none());
    }

    #[test]
    fn markers_extras_and_urls_are_cut_off() {
        assert_eq!(
            parse_line("pywin32; sys_platform == 'win32'").unwrap().as_str(),
            "pywin32"
        );
        assert_eq!(parse_line("requests[socks]>=2").unwrap().as_str(), "requests");
        assert_eq!(
            parse_line("mypkg @ https://example.com/mypkg.whl").unwrap().as_str(),
            "mypkg"
        );
    }

    #[test]
    fn option_lines_are_skipped() {
        assert!(parse_line("-r base.txt").is_none());
        assert!(parse_line("--index-url https://pypi.org/simple").is_none());
        assert!(parse_line("-e .").is_none());
    }

    #[test]
    fn names_keep_order_and_duplicates() {
        let contents = "requests==2.31.0\n# comment\n\nclick>=8.0\nrequests\n";
        assert_eq!(names(contents), vec!["requests", "click", "requests"]);
    }

    #[test]
    fn names_handle_crlf_line_endings() {
        assert_eq!(names("flask==2.0\r\nclick\r\n"), vec!["flask", "click"]);
    }

    #[test]
    fn names_are_lazy() {
        let manifest = Manifest::from_contents(Path::new("r.txt"), "a\nb\nc\n");
        let mut iter = manifest.names();
        assert_eq!(iter.next().unwrap().as_str(), "a");
        assert_eq!(iter.next().unwrap().as_str(), "b");
    }

    #[test]
    fn read_missing_file_is_manifest_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("requirements.txt");
        let err = Manifest::read(&path).unwrap_err();
        assert!(matches!(err, VenvbootError::ManifestRead { .. }));
    }

    #[test]
    fn read_existing_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("requirements.txt");
        fs::write(&path, "numpy>=1.20\n").unwrap();

        let manifest = Manifest::read(&path).unwrap();
        assert_eq!(manifest.path(), path.as_path());
        assert_eq!(manifest.names().count(), 1);
    }
}
