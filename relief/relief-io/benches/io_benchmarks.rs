//! Benchmarks for relief-io operations.
//!
//! Run with: cargo bench -p relief-io
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p relief-io -- --save-baseline main
//! 2. After changes: cargo bench -p relief-io -- --baseline main

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use relief_io::{load_stl, save_stl};
use relief_types::{Triangle, TriangleMesh};
use tempfile::tempdir;

/// Build a wavy height-field soup of `n` x `n` cells (2*n*n triangles).
fn create_wave_mesh(n: usize) -> TriangleMesh {
    let mut mesh = TriangleMesh::with_capacity(2 * n * n);
    let height = |x: f64, y: f64| (x * 0.3).sin() + (y * 0.2).cos();

    for i in 0..n {
        for j in 0..n {
            let (x0, y0) = (j as f64, i as f64);
            let (x1, y1) = (x0 + 1.0, y0 + 1.0);
            let v1 = [x0, y0, height(x0, y0)];
            let v2 = [x1, y0, height(x1, y0)];
            let v3 = [x0, y1, height(x0, y1)];
            let v4 = [x1, y1, height(x1, y1)];
            mesh.push(Triangle::from_arrays(v1, v2, v3));
            mesh.push(Triangle::from_arrays(v2, v4, v3));
        }
    }

    mesh
}

fn bench_save_stl(c: &mut Criterion) {
    let mut group = c.benchmark_group("save_stl");

    for n in [32, 99] {
        let mesh = create_wave_mesh(n);
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("bench.stl");

        group.throughput(Throughput::Elements(mesh.triangle_count() as u64));
        group.bench_function(format!("{n}x{n}"), |b| {
            b.iter(|| save_stl(black_box(&mesh), &path).expect("save"));
        });
    }

    group.finish();
}

fn bench_load_stl(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_stl");

    let mesh = create_wave_mesh(99);
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("bench.stl");
    save_stl(&mesh, &path).expect("save");

    group.throughput(Throughput::Elements(mesh.triangle_count() as u64));
    group.bench_function("99x99", |b| {
        b.iter(|| load_stl(black_box(&path)).expect("load"));
    });

    group.finish();
}

criterion_group!(benches, bench_save_stl, bench_load_stl);
criterion_main!(benches);
