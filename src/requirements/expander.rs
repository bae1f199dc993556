//! One-level dependency expansion.
//!
//! Each top-level requirement contributes the names in its `Requires`
//! metadata. Expansion is deliberately shallow: dependencies of
//! dependencies are never looked up.

use std::collections::HashMap;

use crate::package::{PackageManager, PackageName};

/// Expand requirements with their direct dependencies.
///
/// Returns the requirements in their original order followed by each
/// requirement's direct dependencies. Requirements the package manager has
/// no metadata for (typically: not installed yet) contribute nothing.
/// Duplicates are kept; the caller applies set semantics.
pub fn expand(requirements: &[PackageName], packages: &dyn PackageManager) -> Vec<PackageName> {
    let mut sequence = requirements.to_vec();
    if requirements.is_empty() {
        return sequence;
    }

    let metadata: HashMap<PackageName, Vec<String>> = packages
        .package_metadata(requirements)
        .into_iter()
        .map(|record| (PackageName::new(&record.name), record.requires))
        .collect();

    for requirement in requirements {
        let Some(requires) = metadata.get(requirement) else {
            tracing::debug!("No metadata for {}, no dependencies added", requirement);
            continue;
        };
        tracing::debug!("{} requires: {:?}", requirement, requires);
        sequence.extend(requires.iter().map(|dep| PackageName::new(dep)));
    }

    sequence
}
