// SPDX-License-Identifier: Apache-2.0

//! Project identifiers and the directory names derived from them.

use crate::error::PruneError;
use std::{
    fmt,
    path::{Component, Path},
};

/// Strip the trailing `.suffix` from an identifier.
///
/// Only the last `.` counts, so `foo.1.2.3` gives `foo.1.2`. An identifier
/// without a `.` is returned unchanged.
pub fn base_name(identifier: &str) -> &str {
    match identifier.rfind('.') {
        Some(dot) => &identifier[..dot],
        None => identifier,
    }
}

/// A validated project identifier, as passed on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectId {
    identifier: String,
}

impl ProjectId {
    /// Validate an identifier. It must be non-empty and its base name must be
    /// usable as a single directory name below the packages root.
    pub fn new(identifier: impl Into<String>) -> Result<Self, PruneError> {
        let identifier = identifier.into();

        if identifier.is_empty() {
            return Err(PruneError::Usage(
                "project identifier must not be empty".to_owned(),
            ));
        }

        let base = base_name(&identifier);
        let mut components = Path::new(base).components();

        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) if !base.contains(&['/', '\\'][..]) => {}
            _ => {
                return Err(PruneError::Usage(format!(
                    "project identifier '{identifier}' does not name a package directory"
                )));
            }
        }

        Ok(ProjectId { identifier })
    }

    pub fn as_str(&self) -> &str {
        &self.identifier
    }

    /// The directory name of the project, see [`base_name`].
    pub fn base_name(&self) -> &str {
        base_name(&self.identifier)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.identifier)
    }
}
