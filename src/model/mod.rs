// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Node2json-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of node2json and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Node descriptors going in, Porcupine documents coming out.

pub mod document;
pub mod manifest;
pub mod node;

pub use document::{
    CategoryPath, CodeArgument, CodeBlock, Dictionary, DictionaryTitle, NodeDocument, Port,
    TitleBlock, DOCKER_LANGUAGE,
};
pub use manifest::{Manifest, ManifestEntry, NodeRequest, DEFAULT_MODULE};
pub use node::{
    FunctionInterface, InputField, LibraryInterface, NodeDescriptor, NodeKind, PortSource,
    DEFAULT_FUNCTION_OUTPUT,
};
