// SPDX-License-Identifier: Apache-2.0
#![deny(clippy::all)]
#![deny(unsafe_code)]

//! Remove the `stableVersion` field from a package manifest.
//!
//! A project identifier such as `mylib.1.0.0` names the package directory
//! `packages/mylib.1.0`. Its manifest is `contracts/package.json` inside
//! that directory when present, otherwise `package.json`. The manifest is
//! read, stripped of the field and written back with four space
//! indentation.

pub mod error;
pub mod layout;
pub mod manifest;
pub mod manifest_resolver;
pub mod project;

pub use error::PruneError;
pub use layout::Layout;
pub use manifest::Manifest;
pub use project::ProjectId;

use std::path::PathBuf;
use tracing::{debug, info};

/// What a prune run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneOutcome {
    /// The manifest that was rewritten.
    pub path: PathBuf,
    /// Whether the field was present and has been removed.
    pub removed: bool,
}

/// Locate the manifest of `project`, drop `layout.field` from it and rewrite
/// the file.
///
/// The file is rewritten even when the field was absent, which normalizes
/// its formatting. Running this twice leaves the same content as running it
/// once.
pub fn prune(project: &ProjectId, layout: &Layout) -> Result<PruneOutcome, PruneError> {
    let path = manifest_resolver::resolve_manifest(layout, project.base_name());

    debug!(project = %project, path = %path.display(), "pruning manifest");

    let mut manifest = Manifest::load(&path)?;

    let removed = manifest.remove_field(&layout.field).is_some();

    manifest.save()?;

    if removed {
        info!(path = %path.display(), field = %layout.field, "removed field");
    } else {
        info!(path = %path.display(), field = %layout.field, "field not present");
    }

    Ok(PruneOutcome { path, removed })
}
