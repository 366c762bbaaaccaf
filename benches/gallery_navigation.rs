// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery operations on large lists.
//!
//! Measures the performance of:
//! - Viewer navigation (next/previous with wrap-around)
//! - Deleting records while the viewer is open
//! - Clearing back to the samples

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_gallery::config::SampleEntry;
use iced_gallery::gallery::GalleryController;
use std::hint::black_box;
use std::path::PathBuf;
use std::time::Instant;

const SIZES: &[usize] = &[100, 1_000, 10_000];

fn gallery(len: usize) -> GalleryController {
    let samples = (0..len)
        .map(|i| SampleEntry {
            source: PathBuf::from(format!("bench/{i}.png")),
            label: None,
        })
        .collect();
    let mut gallery = GalleryController::new(Instant::now());
    gallery.initialize(samples, len / 2);
    gallery
}

/// Benchmark a full lap of the viewer in both directions.
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    for &len in SIZES {
        group.bench_with_input(BenchmarkId::new("next_prev_lap", len), &len, |b, &len| {
            let now = Instant::now();
            let mut gallery = gallery(len);
            gallery.open_modal(0, now);
            b.iter(|| {
                for _ in 0..len {
                    black_box(gallery.next_image(now));
                }
                for _ in 0..len {
                    black_box(gallery.prev_image(now));
                }
            });
        });
    }

    group.finish();
}

/// Benchmark deleting from the front while the last record is viewed.
///
/// Each deletion shifts the list and the viewer cursor.
fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    for &len in SIZES {
        group.bench_with_input(BenchmarkId::new("delete_front", len), &len, |b, &len| {
            let now = Instant::now();
            b.iter_batched(
                || {
                    let mut gallery = gallery(len);
                    gallery.open_modal(len - 1, now);
                    gallery
                },
                |mut gallery| {
                    while gallery.images().len() > 1 {
                        black_box(gallery.delete_at(0, now));
                    }
                    gallery
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

/// Benchmark clearing a gallery whose second half are uploads.
fn bench_clear(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    for &len in SIZES {
        group.bench_with_input(BenchmarkId::new("clear_to_samples", len), &len, |b, &len| {
            let now = Instant::now();
            b.iter_batched(
                || gallery(len),
                |mut gallery| {
                    black_box(gallery.clear_to_samples(now));
                    gallery
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_navigate, bench_delete, bench_clear);
criterion_main!(benches);
