// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Node2json-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of node2json and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use tracing::info;

use crate::convert::absolute_parent;
use crate::model::Manifest;

#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Atomic rename without forcing data to disk.
    #[default]
    BestEffort,
    /// Atomic rename with `fsync` of the file and its directory.
    Durable,
}

pub fn read_text(path: &Path) -> Result<String, StoreError> {
    fs::read_to_string(path).map_err(|source| StoreError::Io { path: path.to_path_buf(), source })
}

/// Loads a manifest; relative `module_path`s are taken relative to the manifest's directory.
pub fn load_manifest(path: impl AsRef<Path>) -> Result<Manifest, StoreError> {
    let path = path.as_ref();
    let text = read_text(path)?;
    let mut manifest: Manifest = serde_json::from_str(&text)
        .map_err(|source| StoreError::Json { path: path.to_path_buf(), source })?;

    let base = absolute_parent(path)
        .map_err(|source| StoreError::Io { path: path.to_path_buf(), source })?;
    for entry in &mut manifest.nodes {
        if let Some(module_path) = entry.request.module_path.as_mut() {
            if module_path.is_relative() {
                *module_path = base.join(&*module_path);
            }
        }
    }

    info!(path = %path.display(), nodes = manifest.nodes.len(), "loaded manifest");
    Ok(manifest)
}

pub fn to_pretty_json(path: &Path, value: &impl Serialize) -> Result<String, StoreError> {
    let mut text = serde_json::to_string_pretty(value)
        .map_err(|source| StoreError::Json { path: path.to_path_buf(), source })?;
    text.push('\n');
    Ok(text)
}

/// Writes `value` as pretty JSON through a temp file in the target directory and a rename.
pub fn write_json_atomic(
    path: &Path,
    value: &impl Serialize,
    durability: WriteDurability,
) -> Result<(), StoreError> {
    let text = to_pretty_json(path, value)?;
    write_atomic(path, text.as_bytes(), durability)?;
    info!(path = %path.display(), bytes = text.len(), "wrote json");
    Ok(())
}

fn write_atomic(
    path: &Path,
    contents: &[u8],
    durability: WriteDurability,
) -> Result<(), StoreError> {
    let Some(file_name) = path.file_name() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("path has no file name"),
        });
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
    let tmp_path =
        parent.join(format!(".node2json.tmp.{}.{}", file_name.to_string_lossy(), nanos));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|source| StoreError::Io { path: tmp_path.clone(), source })?;

    file.write_all(contents)
        .map_err(|source| StoreError::Io { path: tmp_path.clone(), source })?;

    if durability == WriteDurability::Durable {
        file.sync_all().map_err(|source| StoreError::Io { path: tmp_path.clone(), source })?;
    }
    drop(file);

    if let Err(source) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io { path: path.to_path_buf(), source });
    }

    if durability == WriteDurability::Durable {
        #[cfg(unix)]
        {
            let dir = fs::File::open(parent)
                .map_err(|source| StoreError::Io { path: parent.to_path_buf(), source })?;
            dir.sync_all()
                .map_err(|source| StoreError::Io { path: parent.to_path_buf(), source })?;
        }
    }

    Ok(())
}
