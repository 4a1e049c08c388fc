// SPDX-License-Identifier: Apache-2.0

use crate::layout::Layout;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Builds one possible manifest location for a package directory name.
pub type Candidate = fn(&Layout, &str) -> PathBuf;

/// Candidates in priority order. The first one that exists on disk wins.
pub const CANDIDATES: [Candidate; 2] = [nested_manifest, default_manifest];

/// `<root>/<base>/<manifest>`
pub fn default_manifest(layout: &Layout, base: &str) -> PathBuf {
    layout.root.join(base).join(&layout.manifest_file)
}

/// `<root>/<base>/<nested>/<manifest>`
pub fn nested_manifest(layout: &Layout, base: &str) -> PathBuf {
    layout
        .root
        .join(base)
        .join(&layout.nested_dir)
        .join(&layout.manifest_file)
}

/// Pick the manifest for a package. When no candidate exists the default
/// location is returned, and reading it reports the missing file.
pub fn resolve_manifest(layout: &Layout, base: &str) -> PathBuf {
    resolve_with(layout, base, &CANDIDATES, Path::exists)
}

fn resolve_with(
    layout: &Layout,
    base: &str,
    candidates: &[Candidate],
    exists: impl Fn(&Path) -> bool,
) -> PathBuf {
    for candidate in candidates {
        let path = candidate(layout, base);

        if exists(&path) {
            debug!(path = %path.display(), "found manifest");
            return path;
        }

        debug!(path = %path.display(), "no manifest");
    }

    default_manifest(layout, base)
}
