// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Node2json-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of node2json and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Manifest input and JSON output files.

pub mod files;

pub use files::{
    load_manifest, read_text, to_pretty_json, write_json_atomic, StoreError, WriteDurability,
};
