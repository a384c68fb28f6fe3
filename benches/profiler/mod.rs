// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Node2json-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of node2json and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse::<T>().ok()).unwrap_or(default)
}

/// Criterion tuned by `NODE2JSON_BENCH_*` variables, sampling a flamegraph per benchmark.
pub fn criterion() -> Criterion {
    let frequency: i32 = env_or("NODE2JSON_PROFILE_FREQ", 100).clamp(1, 1000);
    let sample_size: usize = env_or("NODE2JSON_BENCH_SAMPLE_SIZE", 50).clamp(10, 200);
    let warmup_secs: u64 = env_or("NODE2JSON_BENCH_WARMUP_SECS", 2).clamp(1, 60);
    let measurement_secs: u64 = env_or("NODE2JSON_BENCH_MEASUREMENT_SECS", 4).clamp(1, 120);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(warmup_secs))
        .measurement_time(Duration::from_secs(measurement_secs))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
