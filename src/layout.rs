// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

/// Directory holding one sub-directory per package.
pub const DEFAULT_ROOT: &str = "packages";
/// Sub-directory used by packages that keep their contracts manifest apart.
pub const DEFAULT_NESTED_DIR: &str = "contracts";
pub const DEFAULT_MANIFEST_FILE: &str = "package.json";
/// The manifest key removed by the pruner.
pub const DEFAULT_FIELD: &str = "stableVersion";

/// Where manifests live and which field gets removed from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub root: PathBuf,
    pub nested_dir: String,
    pub manifest_file: String,
    pub field: String,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            root: PathBuf::from(DEFAULT_ROOT),
            nested_dir: DEFAULT_NESTED_DIR.to_owned(),
            manifest_file: DEFAULT_MANIFEST_FILE.to_owned(),
            field: DEFAULT_FIELD.to_owned(),
        }
    }
}

impl Layout {
    /// Default layout below another packages root.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Layout {
            root: root.into(),
            ..Layout::default()
        }
    }
}
