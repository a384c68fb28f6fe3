// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Node2json-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of node2json and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Deterministic synthetic manifests (no RNG).

use node2json::model::{
    FunctionInterface, InputField, LibraryInterface, Manifest, ManifestEntry, NodeDescriptor,
    NodeRequest,
};

const TOOLKITS: [&str; 5] = ["afni", "ants", "freesurfer", "fsl", "mrtrix"];

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    Medium,
    LargeWide,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::LargeWide => "large_wide",
        }
    }

    fn shape(self) -> (usize, usize) {
        // (nodes, inputs per node)
        match self {
            Self::Small => (10, 6),
            Self::Medium => (200, 20),
            Self::LargeWide => (1_000, 80),
        }
    }
}

fn library_entry(index: usize, inputs: usize) -> ManifestEntry {
    let toolkit = TOOLKITS[index % TOOLKITS.len()];
    let node = LibraryInterface {
        name: format!("Interface{index}"),
        module_tree: format!("nipype.interfaces.{toolkit}.mod{}", index % 7),
        help: Some(format!("Interface number {index}.\n\nLonger help text follows.")),
        inputs: (0..inputs)
            .map(|i| InputField::new(format!("in_{i}"), i % 3 == 0))
            .chain([InputField::optional("trait_added")])
            .collect(),
        outputs: Some((0..inputs / 4 + 1).map(|i| format!("out_{i}")).collect()),
    };
    ManifestEntry {
        node: NodeDescriptor::Library(node),
        request: NodeRequest::new()
            .with_module(format!("interfaces.{toolkit}"))
            .with_category(toolkit.to_uppercase()),
    }
}

fn custom_entry(index: usize, inputs: usize) -> ManifestEntry {
    let params = (0..inputs).map(|i| format!("p{i}")).collect::<Vec<_>>();
    let function_str = format!("def custom_{index}({}):\n    return p0", params.join(", "));
    ManifestEntry {
        node: NodeDescriptor::Custom(FunctionInterface::new(
            function_str,
            params,
            vec!["out".to_owned()],
        )),
        request: NodeRequest::new()
            .with_module(format!("lab_{index}"))
            .with_module_path(format!("/opt/lab/lab_{index}.py")),
    }
}

/// Mostly library nodes with every fifth node a custom one.
pub fn manifest(case: Case) -> Manifest {
    let (nodes, inputs) = case.shape();
    Manifest {
        dictionary: Some(format!("bench-{}", case.id())),
        nodes: (0..nodes)
            .map(|index| {
                if index % 5 == 4 {
                    custom_entry(index, inputs)
                } else {
                    library_entry(index, inputs)
                }
            })
            .collect(),
    }
}
