// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Node2json-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of node2json and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::node::NodeDescriptor;

/// Module name used when a request does not name one.
pub const DEFAULT_MODULE: &str = "custom";

/// Where a node lives and how it should be filed, independent of the node itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRequest {
    /// Dotted module name relative to the library package, e.g. `interfaces.fsl`.
    #[serde(default)]
    pub module: Option<String>,
    /// Base category label; the converter default applies when absent.
    #[serde(default)]
    pub category: Option<String>,
    /// Path of the file defining the node; needed when the module is not importable.
    #[serde(default)]
    pub module_path: Option<PathBuf>,
}

impl NodeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_module_path(mut self, module_path: impl Into<PathBuf>) -> Self {
        self.module_path = Some(module_path.into());
        self
    }

    pub fn module(&self) -> &str {
        self.module.as_deref().unwrap_or(DEFAULT_MODULE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub node: NodeDescriptor,
    #[serde(flatten)]
    pub request: NodeRequest,
}

/// A batch of nodes to describe, usually loaded from a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Title of the produced dictionary.
    #[serde(default)]
    pub dictionary: Option<String>,
    #[serde(default)]
    pub nodes: Vec<ManifestEntry>,
}
