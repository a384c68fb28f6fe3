// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Node2json-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of node2json and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use node2json::convert::{Converter, ConverterSettings, KnownModules};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names: `convert.manifest`, `convert.serialize`
// - Case IDs: `small`, `medium`, `large_wide`
fn benches_convert(c: &mut Criterion) {
    let converter = Converter::new(
        ConverterSettings::default(),
        KnownModules::new(
            ["afni", "ants", "freesurfer", "fsl", "mrtrix"]
                .map(|toolkit| format!("nipype.interfaces.{toolkit}")),
        ),
    );
    let cases = [fixtures::Case::Small, fixtures::Case::Medium, fixtures::Case::LargeWide];

    {
        let mut group = c.benchmark_group("convert.manifest");
        for case in cases {
            let manifest = fixtures::manifest(case);
            group.throughput(Throughput::Elements(manifest.nodes.len() as u64));
            group.bench_function(case.id(), |b| {
                b.iter(|| {
                    let dictionary = converter
                        .manifest_to_dictionary(black_box(&manifest))
                        .expect("manifest_to_dictionary");
                    black_box(dictionary.nodes.len())
                })
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("convert.serialize");
        for case in cases {
            let dictionary = converter
                .manifest_to_dictionary(&fixtures::manifest(case))
                .expect("manifest_to_dictionary");
            group.throughput(Throughput::Elements(dictionary.nodes.len() as u64));
            group.bench_function(case.id(), |b| {
                b.iter(|| {
                    let text = serde_json::to_string(black_box(&dictionary)).expect("to_string");
                    black_box(text.len())
                })
            });
        }
        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_convert
}
criterion_main!(benches);
