// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use memorymix_core::{
    matching::{suggest, suggest_batch},
    util::clock::{MILLIS_PER_MINUTE, UtcDateTimeMs},
};

const T: UtcDateTimeMs = UtcDateTimeMs::from_unix_timestamp_secs(1_717_243_200);

/// One play every 3 minutes during 2 days around T.
fn candidates() -> Vec<(usize, UtcDateTimeMs)> {
    (0..960)
        .map(|i| {
            let offset_minutes = i64::try_from(i).unwrap_or_default() * 3 - 1_440;
            (i, T.saturating_add_millis(offset_minutes * MILLIS_PER_MINUTE))
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let candidates = candidates();
    let photos = (0..100)
        .map(|i| (i, T.saturating_add_millis(i * 7 * MILLIS_PER_MINUTE)))
        .collect::<Vec<_>>();

    let mut group = c.benchmark_group("Matching");

    group.bench_function("suggest", |b| {
        b.iter(|| suggest(black_box(T), 3, candidates.iter(), 5));
    });
    group.bench_function("suggest_batch", |b| {
        b.iter(|| suggest_batch(black_box(photos.iter().copied()), 3, &candidates, 5));
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
