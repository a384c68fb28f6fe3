// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Node2json-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of node2json and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Language label of the container hint code block.
pub const DOCKER_LANGUAGE: &str = "Docker";

/// Ordered segments locating a node in the editor's browsing tree.
///
/// Examples:
/// - `FSL/maths`
/// - `Nipype/algorithms/misc`
/// - `Custom/my_module`
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct CategoryPath {
    segments: Vec<String>,
}

impl CategoryPath {
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    pub fn root(category: impl Into<String>) -> Self {
        Self { segments: vec![category.into()] }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// Appends `segments` unless they would start by repeating the current last segment.
    pub fn extend_distinct(&mut self, segments: &[String]) {
        match segments.first() {
            Some(first) if self.last() != Some(first.as_str()) => {
                self.segments.extend_from_slice(segments);
            }
            _ => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CodeArgument {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<String>,
}

/// One language-specific snippet attached to a title or port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CodeBlock {
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub argument: CodeArgument,
}

impl CodeBlock {
    /// A bare `{language, argument: {name}}` block.
    pub fn named(language: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            comment: None,
            argument: CodeArgument { name: name.into(), import: None },
        }
    }

    pub fn docker(hint: impl Into<String>) -> Self {
        Self::named(DOCKER_LANGUAGE, hint)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TitleBlock {
    pub name: String,
    pub web_url: String,
    pub code: Vec<CodeBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Port {
    pub input: bool,
    pub output: bool,
    pub visible: bool,
    pub editable: bool,
    pub name: String,
    pub code: Vec<CodeBlock>,
}

impl Port {
    /// Inputs are always editable and only shown by default when mandatory.
    pub fn input(name: impl Into<String>, mandatory: bool, language: &str) -> Self {
        let name = name.into();
        Self {
            input: true,
            output: false,
            visible: mandatory,
            editable: true,
            code: vec![CodeBlock::named(language, name.clone())],
            name,
        }
    }

    /// Outputs are always shown and never editable.
    pub fn output(name: impl Into<String>, language: &str) -> Self {
        let name = name.into();
        Self {
            input: false,
            output: true,
            visible: true,
            editable: false,
            code: vec![CodeBlock::named(language, name.clone())],
            name,
        }
    }
}

/// The Porcupine descriptor of a single node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NodeDocument {
    pub category: CategoryPath,
    pub title: TitleBlock,
    pub ports: Vec<Port>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DictionaryTitle {
    pub name: String,
}

/// A node dictionary file: many node documents under one title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Dictionary {
    pub title: DictionaryTitle,
    pub nodes: Vec<NodeDocument>,
}

impl Dictionary {
    pub fn new(name: impl Into<String>, nodes: Vec<NodeDocument>) -> Self {
        Self { title: DictionaryTitle { name: name.into() }, nodes }
    }
}
