// SPDX-License-Identifier: Apache-2.0

//! Reading, editing and rewriting a package manifest.
//!
//! The document is kept as a [`serde_json::Value`] with the `preserve_order`
//! feature enabled, so keys come back out in the order they were read, and
//! with `arbitrary_precision`, so numbers are written back as they were
//! spelled.

use crate::error::PruneError;
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer, Value};
use std::{
    fs,
    path::{Path, PathBuf},
};

const INDENT: &[u8] = b"    ";

#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    path: PathBuf,
    document: Value,
}

impl Manifest {
    /// Parse manifest bytes. `path` is only used for error messages and for
    /// [`Manifest::save`]. Invalid UTF-8 is a parse error like any other.
    pub fn parse(path: impl Into<PathBuf>, contents: &[u8]) -> Result<Self, PruneError> {
        let path = path.into();

        match serde_json::from_slice(contents) {
            Ok(document) => Ok(Manifest { path, document }),
            Err(source) => Err(PruneError::Parse { path, source }),
        }
    }

    pub fn load(path: &Path) -> Result<Self, PruneError> {
        let contents = fs::read(path).map_err(|e| PruneError::from_read(path.to_path_buf(), e))?;

        Manifest::parse(path, &contents)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Does the top-level object carry `field`?
    pub fn contains(&self, field: &str) -> bool {
        self.document
            .as_object()
            .is_some_and(|object| object.contains_key(field))
    }

    /// Remove a top-level field, returning its value. The remaining keys keep
    /// their order. Missing fields, and documents that are not objects, are
    /// left alone.
    pub fn remove_field(&mut self, field: &str) -> Option<Value> {
        self.document
            .as_object_mut()
            .and_then(|object| object.shift_remove(field))
    }

    /// Serialize with four space indentation and no trailing newline.
    pub fn to_pretty_string(&self) -> Result<String, PruneError> {
        let mut out = Vec::new();
        let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));

        self.document
            .serialize(&mut ser)
            .map_err(|source| PruneError::Serialize { source })?;

        // serde_json only ever emits valid UTF-8
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    /// Overwrite the file the manifest was read from.
    pub fn save(&self) -> Result<(), PruneError> {
        let text = self.to_pretty_string()?;

        fs::write(&self.path, text).map_err(|source| PruneError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
