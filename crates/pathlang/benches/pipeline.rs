use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use pathlang::{EmitOptions, ParseOptions, PathDocument};

fn fixtures() -> Vec<(&'static str, String)> {
    let mut long = String::from("M 0,0");
    for i in 1..=500 {
        long.push_str(&format!(" L {i},{}", i % 7));
    }
    long.push_str(" Z");

    vec![
        ("triangle", "F0 M 0,0 L 10,0 L 5,8 Z".to_string()),
        (
            "curves",
            "M 0,0 Q 10,0 10,10 T 20,20 C 20,30 30,30 30,20 S 40,10 40,20 A 5 5 30 0 1 50,20 Z"
                .to_string(),
        ),
        (
            "figures",
            "O 5 3 10 10 P 6 10 0 0 R 0 0 20 10 U 0 0 20 10 2 2".to_string(),
        ),
        ("compacted_lines", long),
    ]
}

fn bench_parse(c: &mut Criterion) {
    let opts = ParseOptions::default();
    let mut group = c.benchmark_group("parse");
    for (name, input) in fixtures() {
        group.bench_function(name, |b| {
            b.iter(|| {
                let _ = PathDocument::parse_with_options(&input, opts).unwrap();
            });
        });
    }
    group.finish();
}

fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit");
    for (name, input) in fixtures() {
        let doc = PathDocument::parse(&input).unwrap();
        group.bench_function(name, |b| {
            b.iter_batched(
                || &doc,
                |doc| {
                    let _ = doc.emit_with_options(EmitOptions::default());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_svg_path_data(c: &mut Criterion) {
    let mut group = c.benchmark_group("svg_path_data");
    for (name, input) in fixtures() {
        let geometry = pathlang::parse(&input).unwrap();
        group.bench_function(name, |b| {
            b.iter(|| {
                let _ = geometry.to_svg_path_data();
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_emit, bench_svg_path_data);
criterion_main!(benches);
