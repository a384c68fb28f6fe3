// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Node2json-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of node2json and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! node2json: describe workflow-library node interfaces for the Porcupine editor.
//!
//! Node interfaces come in as data ([`model::NodeDescriptor`]) and leave as Porcupine node
//! documents ([`model::NodeDocument`]) via [`convert::Converter`].

pub mod config;
pub mod convert;
pub mod model;
pub mod store;

pub use config::{Config, ConfigError};
pub use convert::{ConvertError, Converter, ConverterSettings};
