// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Node2json-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of node2json and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Container-generator flags per toolkit, keyed by the last category segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DockerHints {
    hints: BTreeMap<String, String>,
}

impl DockerHints {
    pub fn new(hints: BTreeMap<String, String>) -> Self {
        Self { hints }
    }

    pub fn empty() -> Self {
        Self { hints: BTreeMap::new() }
    }

    pub fn get(&self, toolkit: &str) -> Option<&str> {
        self.hints.get(toolkit).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.hints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }
}

impl Default for DockerHints {
    fn default() -> Self {
        [
            ("afni", "--afni version=latest"),
            ("ants", "--ants version=2.2.0"),
            ("freesurfer", "--freesurfer version=6.0.0 min=true"),
            ("fsl", "--fsl version=5.0.10"),
            ("mrtrix", "--mrtrix3"),
        ]
        .into_iter()
        .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for DockerHints
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { hints: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::DockerHints;

    #[rstest]
    #[case("afni", Some("--afni version=latest"))]
    #[case("ants", Some("--ants version=2.2.0"))]
    #[case("freesurfer", Some("--freesurfer version=6.0.0 min=true"))]
    #[case("fsl", Some("--fsl version=5.0.10"))]
    #[case("mrtrix", Some("--mrtrix3"))]
    #[case("spm", None)]
    #[case("maths", None)]
    fn default_hints_cover_known_toolkits(#[case] toolkit: &str, #[case] expected: Option<&str>) {
        assert_eq!(DockerHints::default().get(toolkit), expected);
    }

    #[test]
    fn hints_load_from_json_object() {
        let hints: DockerHints =
            serde_json::from_str(r#"{"spm": "--spm12 version=r7219"}"#).expect("parse");
        assert_eq!(hints.len(), 1);
        assert_eq!(hints.get("spm"), Some("--spm12 version=r7219"));
        assert_eq!(hints.get("fsl"), None);
    }
}
