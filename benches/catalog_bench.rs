// ABOUTME: Criterion benchmarks for catalog indexing and category resolution
// ABOUTME: Measures per-sport index queries, resolution with filters, and fixture generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for catalog browsing.
//!
//! Every query recomputes from the workout list, so these numbers bound the
//! cost of a single page view.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

mod common;

use common::fixtures::{generate_catalog, CatalogSize, BENCH_SEED};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use workout_catalog::fixtures::{FixtureConfig, FixtureGenerator};
use workout_catalog::models::{Difficulty, DurationBucket, SportType};
use workout_catalog::resolver::{Category, CategoryResolver, SecondaryCategory, UserFilters};

fn bench_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_index");

    for size in CatalogSize::ALL {
        let catalog = generate_catalog(size);
        group.throughput(Throughput::Elements(catalog.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("workouts_for_sport", size.name()),
            &catalog,
            |b, catalog| {
                b.iter(|| catalog.index().workouts_for_sport(black_box(SportType::Yoga)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("duration_groups", size.name()),
            &catalog,
            |b, catalog| {
                b.iter(|| {
                    catalog
                        .index()
                        .duration_groups_for_sport(black_box(SportType::Running))
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("collection_groups", size.name()),
            &catalog,
            |b, catalog| {
                b.iter(|| {
                    catalog
                        .index()
                        .collection_groups_for_sport(black_box(SportType::Cycling))
                });
            },
        );
    }

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("category_resolve");
    let catalog = generate_catalog(CatalogSize::Default);
    let workouts = catalog.index().workouts_for_sport(SportType::Cycling);

    let cases = [
        ("all", Category::All, UserFilters::default()),
        ("personalized", Category::Personalized, UserFilters::default()),
        ("popular", Category::Popular, UserFilters::default()),
        (
            "duration_long",
            Category::duration(DurationBucket::Long),
            UserFilters::default(),
        ),
        (
            "collection",
            Category::collection("Pro Rides"),
            UserFilters::default(),
        ),
        (
            "all_filtered",
            Category::All,
            UserFilters::default()
                .with_duration(DurationBucket::Medium)
                .with_category(SecondaryCategory::Popular)
                .with_tag("Endurance")
                .with_tag("Sprint")
                .with_difficulty(Difficulty::Intermediate),
        ),
    ];

    for (name, category, filters) in &cases {
        group.bench_function(*name, |b| {
            let mut resolver = CategoryResolver::new(BENCH_SEED);
            b.iter(|| resolver.resolve(black_box(&workouts), category, filters));
        });
    }

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixture_generation");
    group.sample_size(20);

    for size in [CatalogSize::Small, CatalogSize::Default] {
        let config = FixtureConfig {
            workouts_per_sport: size.per_sport(),
            ..FixtureConfig::with_seed(BENCH_SEED)
        };
        group.bench_with_input(
            BenchmarkId::new("generate", size.name()),
            &config,
            |b, config| {
                b.iter(|| FixtureGenerator::new(config.clone()).generate().unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_index, bench_resolve, bench_generate);
criterion_main!(benches);
