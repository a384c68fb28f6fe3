// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Node2json-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of node2json and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Converter configuration.
//!
//! Every field has a default, so an absent or partial config file is fine. A configured
//! `docker_hints` table replaces the built-in one as a whole.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::convert::{
    Converter, ConverterSettings, DockerHints, KnownModules, PackageDirResolver, CUSTOM_CATEGORY,
    DEFAULT_DOCS_ROOT, DEFAULT_PACKAGE,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub docs_root: String,
    pub package: String,
    pub default_category: String,
    pub docker_hints: DockerHints,
    /// Directory containing the library package; enables on-disk module probing.
    pub package_root: Option<PathBuf>,
    /// Dotted modules treated as importable when no `package_root` is set.
    pub importable_modules: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            docs_root: DEFAULT_DOCS_ROOT.to_owned(),
            package: DEFAULT_PACKAGE.to_owned(),
            default_category: CUSTOM_CATEGORY.to_owned(),
            docker_hints: DockerHints::default(),
            package_root: None,
            importable_modules: Vec::new(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read config {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "invalid config {path:?}: {source}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let config = Self::from_json(&text)
            .map_err(|source| ConfigError::Json { path: path.to_path_buf(), source })?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn settings(&self) -> ConverterSettings {
        ConverterSettings {
            docs_root: self.docs_root.clone(),
            package: self.package.clone(),
            default_category: self.default_category.clone(),
            docker_hints: self.docker_hints.clone(),
        }
    }

    pub fn converter(&self) -> Converter {
        match &self.package_root {
            Some(root) => Converter::new(self.settings(), PackageDirResolver::new(root)),
            None => Converter::new(
                self.settings(),
                KnownModules::new(self.importable_modules.iter().cloned()),
            ),
        }
    }
}
