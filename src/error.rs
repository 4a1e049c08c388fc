// SPDX-License-Identifier: Apache-2.0

use std::{io, path::PathBuf};
use thiserror::Error;

/// Everything that can stop a prune run. None of these are recovered from;
/// the binary reports them and exits with status 1.
#[derive(Debug, Error)]
pub enum PruneError {
    #[error("{0}")]
    Usage(String),

    #[error("manifest '{}' not found", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read manifest '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("manifest '{}' is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot serialize manifest: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot write manifest '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PruneError {
    /// Map a failed read to `NotFound` when the file is simply missing.
    pub(crate) fn from_read(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            PruneError::NotFound { path }
        } else {
            PruneError::Read { path, source }
        }
    }
}
