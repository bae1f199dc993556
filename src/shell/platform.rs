//! Platform detection helpers.

/// Check if running in a CI environment.
///
/// Used to force the non-interactive UI in `main()`. Checks common CI
/// environment variables: `CI`, `GITHUB_ACTIONS`, `GITLAB_CI`, `CIRCLECI`,
/// `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

/// Executable extensions to try when resolving a bare command name.
///
/// On Windows this is `PATHEXT` (falling back to `.EXE;.BAT;.CMD`); other
/// platforms have no extensions and return an empty list.
pub fn executable_extensions() -> Vec<String> {
    if cfg!(windows) {
        parse_pathext(std::env::var("PATHEXT").ok().as_deref())
    } else {
        Vec::new()
    }
}

fn parse_pathext(value: Option<&str>) -> Vec<String> {
    let raw = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => ".EXE;.BAT;.CMD",
    };
    raw.split(';')
        .map(str::trim)
        .filter(|ext| !ext.is_empty())
        .map(|ext| ext.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_ci_detects_environment() {
        // Just ensure function doesn't panic
        let _ = is_ci();
    }

    #[test]
    fn pathext_defaults_when_unset() {
        assert_eq!(parse_pathext(None), vec![".EXE", ".BAT", ".CMD"]);
        assert_eq!(parse_pathext(Some("  ")), vec![".EXE", ".BAT", ".CMD"]);
    }

    #[test]
    fn pathext_splits_and_drops_empty_entries() {
        assert_eq!(parse_pathext(Some(".COM;.EXE;;")), vec![".COM", ".EXE"]);
    }

    #[cfg(unix)]
    #[test]
    fn no_extensions_on_unix() {
        assert!(executable_extensions().is_empty());
    }
}
