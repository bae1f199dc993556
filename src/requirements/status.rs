//! Synchronization status types.
//!
//! The differ produces a [`GapReport`]; the sync step turns it into a
//! [`SyncOutcome`] describing what, if anything, was done about it.

use crate::package::PackageName;

/// The result of comparing required names against the installed set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GapReport {
    /// Distinct names that were checked.
    pub checked: usize,
    /// Names absent from the installed set, in first-seen order, each once.
    pub missing: Vec<PackageName>,
}

impl GapReport {
    /// Whether any required name is missing.
    ///
    /// This is the flag that decides whether a reinstall runs.
    pub fn any_missing(&self) -> bool {
        !self.missing.is_empty()
    }

    /// Missing names joined for display.
    pub fn missing_list(&self) -> String {
        self.missing
            .iter()
            .map(|n| n.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// What the synchronization step ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Every required package is installed; nothing was run.
    Satisfied { checked: usize },

    /// Packages were missing and the manifest was reinstalled.
    Reinstalled { missing: Vec<PackageName> },

    /// Packages were missing and the reinstall failed. Not fatal.
    ReinstallFailed {
        missing: Vec<PackageName>,
        message: String,
    },

    /// The check could not run (no manifest, listing failed). Not fatal.
    Skipped { reason: String },
}

impl SyncOutcome {
    /// Whether a reinstall was attempted.
    pub fn attempted_install(&self) -> bool {
        matches!(
            self,
            SyncOutcome::Reinstalled { .. } | SyncOutcome::ReinstallFailed { .. }
        )
    }
}
