criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        encoding_polyline_path,
        decoding_polyline_path,
        measuring_haversine_length,
        routing_straight_legs,
}

const PATH: usize = 1024;

fn path() -> Vec<Point> {
    (0..PATH).map(|_| Point::random()).collect()
}

fn encoding_polyline_path(c: &mut criterion::Criterion) {
    let path = path();
    c.bench_function("encode a 1024-point Polyline", |b| {
        b.iter(|| Polyline::encode(&path))
    });
}

fn decoding_polyline_path(c: &mut criterion::Criterion) {
    let polyline = Polyline::encode(&path()).expect("valid path");
    c.bench_function("decode a 1024-point Polyline", |b| {
        b.iter(|| polyline.decode())
    });
}

fn measuring_haversine_length(c: &mut criterion::Criterion) {
    let path = path();
    c.bench_function("measure a 1024-point path", |b| {
        b.iter(|| Point::length(&path))
    });
}

fn routing_straight_legs(c: &mut criterion::Criterion) {
    let path = path();
    let request = RouteRequest::new(
        path[0],
        path[PATH - 1],
        &path[1..PATH - 1],
        TravelMode::Walk,
        RoutingPreference::Unspecified,
    );
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");
    c.bench_function("route 1024 waypoints with straight legs", |b| {
        b.iter(|| runtime.block_on(Straight.compute(&request)))
    });
}

use lazygo::Arbitrary;
use lazygo::geo::Point;
use lazygo::geo::Polyline;
use lazygo::preferences::TravelMode;
use lazygo::routing::RouteRequest;
use lazygo::routing::RoutingPreference;
use lazygo::routing::RoutingService;
use lazygo::routing::Straight;
