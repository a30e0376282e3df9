use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;
use serde_markdown::{to_string, to_value, value_to_string, MarkdownOptions};
use std::collections::BTreeMap;

#[derive(Serialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Clone)]
struct NestedData {
    id: u32,
    metadata: Metadata,
    tags: Vec<String>,
    attributes: BTreeMap<String, String>,
}

#[derive(Serialize, Clone)]
struct Metadata {
    created: String,
    updated: String,
    version: u32,
}

fn nested_data() -> NestedData {
    let mut attributes = BTreeMap::new();
    attributes.insert("region".to_string(), "eu-west".to_string());
    attributes.insert("tier".to_string(), "gold".to_string());

    NestedData {
        id: 42,
        metadata: Metadata {
            created: "2023-01-01T00:00:00Z".to_string(),
            updated: "2023-12-31T23:59:59Z".to_string(),
            version: 3,
        },
        tags: vec![
            "important".to_string(),
            "verified".to_string(),
            "production".to_string(),
        ],
        attributes,
    }
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    c.bench_function("serialize_simple_struct", |b| {
        b.iter(|| to_string(black_box(&user), "User"))
    });
}

fn benchmark_serialize_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_array");

    for size in [10, 50, 100, 500].iter() {
        let products: Vec<Product> = (0..*size)
            .map(|i| Product {
                sku: format!("SKU{}", i),
                name: format!("Product {}", i),
                price: 9.99 + f64::from(i),
                quantity: i,
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_string(black_box(&products), "Products"))
        });
    }
    group.finish();
}

fn benchmark_serialize_nested(c: &mut Criterion) {
    let data = nested_data();

    c.bench_function("serialize_nested_struct", |b| {
        b.iter(|| to_string(black_box(&data), "Data"))
    });
}

fn benchmark_render_prebuilt_value(c: &mut Criterion) {
    let value = to_value(&nested_data()).unwrap();
    let options = MarkdownOptions::new();

    let mut group = c.benchmark_group("render_phases");

    group.bench_function("to_value", |b| {
        let data = nested_data();
        b.iter(|| to_value(black_box(&data)))
    });

    group.bench_function("render_only", |b| {
        b.iter(|| value_to_string(black_box(&value), "Data", &options))
    });

    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    let mut group = c.benchmark_group("comparison");

    group.bench_function("markdown_serialize", |b| {
        b.iter(|| serde_markdown::to_string(black_box(&user), "User"))
    });

    group.bench_function("json_serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&user)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_serialize_simple,
    benchmark_serialize_array,
    benchmark_serialize_nested,
    benchmark_render_prebuilt_value,
    benchmark_comparison_with_json
);
criterion_main!(benches);
