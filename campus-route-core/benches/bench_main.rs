use campus_route_core::prelude::*;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

/// Synthetic complete matrices for the built-in campus, scaled by planar
/// distance so that routes are not all single edges
fn campus_matrices(landmarks: &LandmarkRegistry) -> (TravelMatrix, TravelMatrix) {
    let positions = landmarks.positions();
    let n = positions.len();

    let cells = |meters_per_degree: f64, meters_per_second: f64, detour: f64| {
        let mut distances = vec![vec![None; n]; n];
        let mut durations = vec![vec![None; n]; n];
        for i in 0..n {
            for j in 0..n {
                let delta = positions[i] - positions[j];
                let straight = delta.x().hypot(delta.y()) * meters_per_degree;
                let meters = straight * (1.0 + detour * ((i + j) % 3) as f64);
                distances[i][j] = Some(meters);
                durations[i][j] = Some(meters / meters_per_second + 30.0);
            }
        }
        TravelMatrix {
            distances,
            durations,
        }
    };

    (cells(111_000.0, 8.0, 0.4), cells(111_000.0, 1.3, 0.2))
}

fn bench_routing(c: &mut Criterion) {
    let landmarks = LandmarkRegistry::campus();
    let (driving, walking) = campus_matrices(&landmarks);
    let options = GraphOptions::default();

    c.bench_function("build_route_graph", |b| {
        b.iter(|| build_route_graph(black_box(&landmarks), &driving, &walking, &options))
    });

    let graph = build_route_graph(&landmarks, &driving, &walking, &options)
        .expect("campus matrices are complete");
    let alternative = AlternativeOptions::default();

    c.bench_function("shortest_path", |b| {
        b.iter(|| shortest_path(&graph, black_box(0), black_box(19), WeightKey::DurationCar))
    });
    c.bench_function("find_alternative", |b| {
        b.iter(|| {
            find_alternative(
                &graph,
                black_box(3),
                black_box(11),
                WeightKey::DurationWalk,
                &alternative,
            )
        })
    });
    c.bench_function("route_with_waypoints", |b| {
        b.iter(|| {
            route_with_waypoints(
                &graph,
                black_box(0),
                black_box(23),
                WeightKey::DurationWalk,
                &[4, 9, 17],
            )
        })
    });
    c.bench_function("travel_time_matrix", |b| {
        b.iter(|| travel_time_matrix(&graph, WeightKey::DurationWalk))
    });
}

criterion_group!(benches, bench_routing);
criterion_main!(benches);
