// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Node2json-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of node2json and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use crate::convert::function_name::{parse_function_params, FunctionNameError};

/// Input names the function wrapper adds for its own bookkeeping.
const FUNCTION_INPUTS_SKIPPED: [&str; 4] =
    ["function_str", "trait_added", "trait_modified", "ignore_exception"];

/// Output names the aggregated outputs always carry.
const FUNCTION_OUTPUTS_SKIPPED: [&str; 2] = ["trait_added", "trait_modified"];

/// Library fields starting with this prefix are trait machinery, never ports.
const TRAIT_PREFIX: &str = "trait";

/// Output name used when a wrapped function declares none.
pub const DEFAULT_FUNCTION_OUTPUT: &str = "out";

/// One declared input field of a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputField {
    pub name: String,
    #[serde(default)]
    pub mandatory: bool,
}

impl InputField {
    pub fn new(name: impl Into<String>, mandatory: bool) -> Self {
        Self { name: name.into(), mandatory }
    }

    pub fn mandatory(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    pub fn optional(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }
}

/// Field enumeration shared by every node shape.
///
/// The converter only ever asks a node for its ports through this trait, so both node kinds
/// (and test doubles) plug in the same way.
pub trait PortSource {
    /// Input ports in declaration order, with their mandatory flag.
    fn list_inputs(&self) -> Vec<InputField>;

    /// Output port names in declaration order.
    fn list_outputs(&self) -> Vec<String>;
}

/// An interface shipped by the workflow library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryInterface {
    /// Type name of the interface, e.g. `Threshold`.
    pub name: String,
    /// Dotted path of the module that defines the interface, e.g. `nipype.interfaces.fsl.maths`.
    pub module_tree: String,
    /// Full help text; only its first line is used.
    #[serde(default)]
    pub help: Option<String>,
    /// Input specification fields, in declaration order.
    pub inputs: Vec<InputField>,
    /// Output specification fields. `None` when the interface has no output spec at all.
    #[serde(default)]
    pub outputs: Option<Vec<String>>,
}

impl PortSource for LibraryInterface {
    fn list_inputs(&self) -> Vec<InputField> {
        self.inputs.iter().filter(|field| !field.name.starts_with(TRAIT_PREFIX)).cloned().collect()
    }

    fn list_outputs(&self) -> Vec<String> {
        self.outputs
            .iter()
            .flatten()
            .filter(|name| !name.starts_with(TRAIT_PREFIX))
            .cloned()
            .collect()
    }
}

/// A user-authored node wrapping a single function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionInterface {
    /// Source text of the wrapped function.
    pub function_str: String,
    #[serde(default)]
    pub inputs: Vec<String>,
    #[serde(default)]
    pub outputs: Vec<String>,
}

impl FunctionInterface {
    pub fn new(function_str: impl Into<String>, inputs: Vec<String>, outputs: Vec<String>) -> Self {
        Self { function_str: function_str.into(), inputs, outputs }
    }

    /// Wraps function source text the way the library's function node does: the parameters
    /// become inputs and `output_names` (or a single `out`) become outputs.
    pub fn wrap(
        function_str: impl Into<String>,
        output_names: &[String],
    ) -> Result<Self, FunctionNameError> {
        let function_str = function_str.into();
        let inputs = parse_function_params(&function_str)?;
        let outputs = if output_names.is_empty() {
            vec![DEFAULT_FUNCTION_OUTPUT.to_owned()]
        } else {
            output_names.to_vec()
        };
        Ok(Self { function_str, inputs, outputs })
    }
}

impl PortSource for FunctionInterface {
    fn list_inputs(&self) -> Vec<InputField> {
        self.inputs
            .iter()
            .filter(|name| !FUNCTION_INPUTS_SKIPPED.contains(&name.as_str()))
            .map(InputField::mandatory)
            .collect()
    }

    fn list_outputs(&self) -> Vec<String> {
        self.outputs
            .iter()
            .filter(|name| !FUNCTION_OUTPUTS_SKIPPED.contains(&name.as_str()))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Library,
    Custom,
}

/// Either node shape, tagged by `kind` in JSON manifests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NodeDescriptor {
    Library(LibraryInterface),
    Custom(FunctionInterface),
}

impl NodeDescriptor {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Library(_) => NodeKind::Library,
            Self::Custom(_) => NodeKind::Custom,
        }
    }

    pub fn is_custom(&self) -> bool {
        self.kind() == NodeKind::Custom
    }
}

impl PortSource for NodeDescriptor {
    fn list_inputs(&self) -> Vec<InputField> {
        match self {
            Self::Library(node) => node.list_inputs(),
            Self::Custom(node) => node.list_inputs(),
        }
    }

    fn list_outputs(&self) -> Vec<String> {
        match self {
            Self::Library(node) => node.list_outputs(),
            Self::Custom(node) => node.list_outputs(),
        }
    }
}

impl From<LibraryInterface> for NodeDescriptor {
    fn from(value: LibraryInterface) -> Self {
        Self::Library(value)
    }
}

impl From<FunctionInterface> for NodeDescriptor {
    fn from(value: FunctionInterface) -> Self {
        Self::Custom(value)
    }
}
