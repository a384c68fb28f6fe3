// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Node2json-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of node2json and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Node descriptor to Porcupine document conversion.
//!
//! [`Converter::node_to_document`] is a single pass over one node: gather metadata, build the
//! category path and title block, then the ordered port list. Collaborators that would otherwise
//! be global (the Docker hint table, the import resolver) are injected at construction.

pub mod docker;
pub mod function_name;
pub mod import;
pub mod web_url;


use std::fmt;
use std::io;

use tracing::{debug, warn};

use crate::model::{
    CategoryPath, CodeArgument, CodeBlock, Dictionary, FunctionInterface, Manifest,
    NodeDescriptor, NodeDocument, NodeRequest, Port, PortSource, TitleBlock,
};

pub use docker::DockerHints;
pub use function_name::{parse_function_name, parse_function_params, FunctionNameError};
pub use import::{absolute_parent, KnownModules, ModuleResolver, PackageDirResolver};
pub use web_url::{submodules, web_url, DEFAULT_DOCS_ROOT};

use import::{import_statement, ImportStatement};
use web_url::{is_algorithms_module, ALGORITHMS_SEGMENT};

/// Category every custom node is filed under.
pub const CUSTOM_CATEGORY: &str = "Custom";

/// Package name of the workflow library.
pub const DEFAULT_PACKAGE: &str = "nipype";

#[derive(Debug)]
pub enum ConvertError {
    ModuleTooShallow { module: String },
    InvalidFunction { source: FunctionNameError },
    EmptyHelp { node: String },
    MissingModulePath { module: String },
    Io { source: io::Error },
    Entry { index: usize, source: Box<ConvertError> },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModuleTooShallow { module } => {
                write!(f, "library module {module:?} has no submodule segment")
            }
            Self::InvalidFunction { source } => write!(f, "cannot read wrapped function: {source}"),
            Self::EmptyHelp { node } => write!(f, "help text of {node} is empty"),
            Self::MissingModulePath { module } => write!(
                f,
                "module {module:?} is not importable from the package and no module path was given"
            ),
            Self::Io { source } => write!(f, "cannot resolve module directory: {source}"),
            Self::Entry { index, source } => write!(f, "node #{index}: {source}"),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidFunction { source } => Some(source),
            Self::Io { source } => Some(source),
            Self::Entry { source, .. } => Some(source),
            Self::ModuleTooShallow { .. }
            | Self::EmptyHelp { .. }
            | Self::MissingModulePath { .. } => None,
        }
    }
}

impl From<FunctionNameError> for ConvertError {
    fn from(source: FunctionNameError) -> Self {
        Self::InvalidFunction { source }
    }
}

/// Fixed inputs of every conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterSettings {
    pub docs_root: String,
    pub package: String,
    pub default_category: String,
    pub docker_hints: DockerHints,
}

impl Default for ConverterSettings {
    fn default() -> Self {
        Self {
            docs_root: DEFAULT_DOCS_ROOT.to_owned(),
            package: DEFAULT_PACKAGE.to_owned(),
            default_category: CUSTOM_CATEGORY.to_owned(),
            docker_hints: DockerHints::default(),
        }
    }
}

pub struct Converter {
    settings: ConverterSettings,
    resolver: Box<dyn ModuleResolver>,
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter").field("settings", &self.settings).finish_non_exhaustive()
    }
}

impl Converter {
    pub fn new(settings: ConverterSettings, resolver: impl ModuleResolver + 'static) -> Self {
        Self { settings, resolver: Box::new(resolver) }
    }

    pub fn settings(&self) -> &ConverterSettings {
        &self.settings
    }

    /// Builds the Porcupine document of one node.
    ///
    /// The node variant decides between the library and custom code paths; custom nodes are
    /// always filed under [`CUSTOM_CATEGORY`].
    pub fn node_to_document(
        &self,
        node: &NodeDescriptor,
        request: &NodeRequest,
    ) -> Result<NodeDocument, ConvertError> {
        let module = request.module();
        let category = self.category(node, request);

        let inputs = node.list_inputs();
        let outputs = node.list_outputs();
        let node_name = node_name(node)?;
        let description = description(node, &node_name)?;

        debug!(node = %node_name, kind = ?node.kind(), module = %module, "converting node");

        let mut category_path = CategoryPath::root(category);
        if is_algorithms_module(module) {
            category_path.push(ALGORITHMS_SEGMENT);
        }

        let web_url = match node {
            NodeDescriptor::Custom(_) => {
                category_path.push(module);
                String::new()
            }
            NodeDescriptor::Library(library) => {
                let segment = module
                    .split('.')
                    .nth(1)
                    .ok_or_else(|| ConvertError::ModuleTooShallow { module: module.to_owned() })?;
                category_path.push(segment);

                let subs = submodules(&library.module_tree, &self.settings.package);
                category_path.extend_distinct(subs.get(1..).unwrap_or_default());

                web_url(&self.settings.docs_root, &self.settings.package, module, &node_name, &subs)
            }
        };

        let import = self.import_statement(module, request)?;
        let last = category_path.last().unwrap_or(category).to_owned();

        let mut code = vec![CodeBlock {
            language: category.to_owned(),
            comment: Some(description),
            argument: CodeArgument { name: format!("{last}.{node_name}()"), import: Some(import) },
        }];
        if let Some(hint) = self.settings.docker_hints.get(&last) {
            code.push(CodeBlock::docker(hint));
        }

        let title = TitleBlock { name: format!("{last}.{node_name}"), web_url, code };

        let (mandatory, optional): (Vec<_>, Vec<_>) =
            inputs.into_iter().partition(|field| field.mandatory);
        let ports = mandatory
            .into_iter()
            .chain(optional)
            .map(|field| Port::input(field.name, field.mandatory, category))
            .chain(outputs.into_iter().map(|name| Port::output(name, category)))
            .collect();

        Ok(NodeDocument { category: category_path, title, ports })
    }

    /// Wraps function source text as a custom node, then converts it.
    pub fn function_to_document(
        &self,
        function_str: &str,
        output_names: &[String],
        request: &NodeRequest,
    ) -> Result<NodeDocument, ConvertError> {
        let node = FunctionInterface::wrap(function_str, output_names)?;
        self.node_to_document(&NodeDescriptor::Custom(node), request)
    }

    /// Converts every manifest entry in order into one dictionary.
    pub fn manifest_to_dictionary(&self, manifest: &Manifest) -> Result<Dictionary, ConvertError> {
        let nodes = manifest
            .nodes
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                self.node_to_document(&entry.node, &entry.request)
                    .map_err(|source| ConvertError::Entry { index, source: Box::new(source) })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let name = manifest.dictionary.clone().unwrap_or_else(|| self.settings.package.clone());
        Ok(Dictionary::new(name, nodes))
    }

    fn category<'a>(&'a self, node: &NodeDescriptor, request: &'a NodeRequest) -> &'a str {
        match node {
            NodeDescriptor::Custom(_) => {
                if let Some(category) =
                    request.category.as_deref().filter(|category| *category != CUSTOM_CATEGORY)
                {
                    warn!(
                        category = %category,
                        "custom nodes are always filed under {CUSTOM_CATEGORY}"
                    );
                }
                CUSTOM_CATEGORY
            }
            NodeDescriptor::Library(_) => {
                request.category.as_deref().unwrap_or(&self.settings.default_category)
            }
        }
    }

    fn import_statement(
        &self,
        module: &str,
        request: &NodeRequest,
    ) -> Result<String, ConvertError> {
        let statement = import_statement(
            self.resolver.as_ref(),
            &self.settings.package,
            module,
            request.module_path.as_deref(),
        )
        .map_err(|source| ConvertError::Io { source })?;

        match statement {
            Some(ImportStatement::PathAppend(statement)) => {
                debug!(
                    module = %module,
                    "module not importable from package, appending search path"
                );
                Ok(statement)
            }
            Some(statement) => Ok(statement.into_string()),
            None => Err(ConvertError::MissingModulePath { module: module.to_owned() }),
        }
    }
}

fn node_name(node: &NodeDescriptor) -> Result<String, ConvertError> {
    match node {
        NodeDescriptor::Library(library) => Ok(library.name.clone()),
        NodeDescriptor::Custom(custom) => Ok(parse_function_name(&custom.function_str)?),
    }
}

fn description(node: &NodeDescriptor, node_name: &str) -> Result<String, ConvertError> {
    match node {
        NodeDescriptor::Custom(_) => Ok(format!("Custom interface wrapping function {node_name}")),
        NodeDescriptor::Library(library) => match library.help.as_deref() {
            Some(help) => help
                .lines()
                .next()
                .map(str::to_owned)
                .ok_or_else(|| ConvertError::EmptyHelp { node: library.name.clone() }),
            None => Ok(library.name.clone()),
        },
    }
}
