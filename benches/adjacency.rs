//! Benchmarks for adjacency construction.

use criterion::{criterion_group, criterion_main, Criterion};
use seam::prelude::*;
use nalgebra::Point3;

fn create_grid(n: usize) -> (Vec<Point3<f64>>, Vec<[usize; 3]>) {
    let mut vertices = Vec::with_capacity((n + 1) * (n + 1));
    let mut faces = Vec::with_capacity(n * n * 2);

    // Create grid vertices
    for j in 0..=n {
        for i in 0..=n {
            vertices.push(Point3::new(i as f64, j as f64, 0.0));
        }
    }

    // Create triangles
    for j in 0..n {
        for i in 0..n {
            let v00 = j * (n + 1) + i;
            let v10 = v00 + 1;
            let v01 = v00 + (n + 1);
            let v11 = v01 + 1;

            faces.push([v00, v10, v11]);
            faces.push([v00, v11, v01]);
        }
    }

    (vertices, faces)
}

fn bench_dense(c: &mut Criterion) {
    let (vertices, faces) = create_grid(100);

    c.bench_function("dense_adjacency_grid_100x100", |b| {
        b.iter(|| {
            let adj: DenseAdjacency = dense_adjacency(&vertices, &faces[..]);
            adj
        });
    });

    c.bench_function("dense_adjacency_with_corners_grid_100x100", |b| {
        b.iter(|| {
            let adj: DenseAdjacency = dense_adjacency_with_corners(&vertices, &faces[..]);
            adj
        });
    });
}

fn bench_lists(c: &mut Criterion) {
    let (_, faces) = create_grid(100);

    c.bench_function("adjacency_lists_grid_100x100", |b| {
        b.iter(|| {
            let adj: AdjacencyLists = adjacency_lists(&faces[..]).unwrap();
            adj
        });
    });

    c.bench_function("adjacency_lists_sequential_grid_100x100", |b| {
        let options = AdjacencyListsOptions::default().sequential();
        b.iter(|| {
            let adj: AdjacencyLists = adjacency_lists_with(&faces[..], &options).unwrap();
            adj
        });
    });
}

fn bench_edge_map(c: &mut Criterion) {
    let (_, faces) = create_grid(100);

    c.bench_function("unique_edge_map_grid_100x100", |b| {
        b.iter(|| {
            let map: UniqueEdgeMap = UniqueEdgeMap::from_triangles(&faces[..]).unwrap();
            map
        });
    });
}

criterion_group!(benches, bench_dense, bench_lists, bench_edge_map);
criterion_main!(benches);
