// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Node2json-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of node2json and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Root of the generated interface documentation.
pub const DEFAULT_DOCS_ROOT: &str = "https://nipype.readthedocs.io/en/latest/interfaces/generated/";

/// First module segment of the library's algorithm modules.
pub const ALGORITHMS_SEGMENT: &str = "algorithms";

const INTERFACES_SEGMENT: &str = "interfaces";

pub(crate) fn is_algorithms_module(module: &str) -> bool {
    module.split('.').next() == Some(ALGORITHMS_SEGMENT)
}

/// Segments of a node's owning module with `interfaces` and the package name removed.
///
/// `nipype.interfaces.fsl.maths` yields `["fsl", "maths"]`.
pub fn submodules(module_tree: &str, package: &str) -> Vec<String> {
    module_tree
        .split('.')
        .filter(|segment| *segment != INTERFACES_SEGMENT && *segment != package)
        .map(str::to_owned)
        .collect()
}

/// Documentation URL of a library node, anchored at its lowercased type name.
pub fn web_url(
    docs_root: &str,
    package: &str,
    module: &str,
    node_name: &str,
    submodules: &[String],
) -> String {
    let is_algo = is_algorithms_module(module);
    let mut url = docs_root.to_owned();

    if is_algo || submodules.len() < 2 {
        url.push_str(package);
        url.push('.');
    }
    url.push_str(module);

    match submodules.get(1) {
        Some(page) if !is_algo => {
            url.push('/');
            url.push_str(page);
            url.push_str(".html");
        }
        _ => url.push_str(".html"),
    }

    url.push('#');
    url.push_str(&node_name.to_lowercase());
    url
}
