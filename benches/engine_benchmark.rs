//! Performance benchmarks for the catalog engines.
//!
//! Run with: cargo bench --bench engine_benchmark

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use haircolor_tools::model::Category;
use haircolor_tools::{
    compatibility_report, find_similar, generate_harmonization, search_colors,
    transformation_cost, Catalog, ColorFilter, HairLength,
};

fn bench_catalog_load(c: &mut Criterion) {
    c.bench_function("catalog_builtin_load", |b| {
        b.iter(|| {
            let catalog = Catalog::builtin().expect("builtin catalog");
            black_box(catalog.len());
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let filter = ColorFilter::new()
        .with_category(Category::Blonde)
        .with_level_range(6, 10)
        .with_availability(true);

    c.bench_function("search_blonde_range", |b| {
        b.iter(|| {
            let result = search_colors(black_box(&catalog), black_box(&filter));
            black_box(result.total);
        })
    });
}

fn bench_harmonization(c: &mut Criterion) {
    let catalog = Catalog::builtin().expect("builtin catalog");

    c.bench_function("harmonization_all_colors", |b| {
        b.iter(|| {
            for code in ["#1", "#6", "#10", "#27", "#613"] {
                black_box(generate_harmonization(&catalog, black_box(code)));
            }
        })
    });
}

fn bench_cost_matrix(c: &mut Criterion) {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let codes: Vec<String> = catalog.colors().map(|c| c.code.to_string()).collect();

    c.bench_function("cost_full_matrix", |b| {
        b.iter(|| {
            let mut total = 0_u64;
            for from in &codes {
                for to in &codes {
                    total += u64::from(transformation_cost(
                        &catalog,
                        black_box(from),
                        black_box(to),
                        HairLength::Long,
                    ));
                }
            }
            black_box(total);
        })
    });
}

fn bench_similarity(c: &mut Criterion) {
    let catalog = Catalog::builtin().expect("builtin catalog");

    c.bench_function("find_similar_top5", |b| {
        b.iter(|| {
            black_box(find_similar(&catalog, black_box("#4"), 5));
        })
    });
}

fn bench_report(c: &mut Criterion) {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let set = ["#1", "#2", "#4", "#6", "#8", "#10"];

    c.bench_function("compatibility_report_6_colors", |b| {
        b.iter(|| {
            black_box(compatibility_report(&catalog, black_box(&set)));
        })
    });
}

criterion_group!(
    benches,
    bench_catalog_load,
    bench_search,
    bench_harmonization,
    bench_cost_matrix,
    bench_similarity,
    bench_report
);
criterion_main!(benches);
