use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pathdoc::path::join_segments;
use pathdoc::{Classifier, SnapshotBuilder, Suggester};
use tempfile::TempDir;

/// Builds `n` segments under `root`: two thirds exist, every fifth repeats
/// an earlier one, and the rest are missing.
fn fixture(root: &TempDir, n: usize) -> String {
    let mut segments = Vec::with_capacity(n);
    for i in 0..n {
        let segment = if i % 5 == 4 {
            segments[i - 1].clone()
        } else if i % 3 == 2 {
            root.path()
                .join(format!("missing-{i}/bin"))
                .to_string_lossy()
                .into_owned()
        } else {
            let dir = root.path().join(format!("tool-{i}/bin"));
            std::fs::create_dir_all(&dir).expect("failed to create bench dir");
            dir.to_string_lossy().into_owned()
        };
        segments.push(segment);
    }
    join_segments(&segments)
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let classifier = Classifier::with_home(Some(std::path::Path::new("/home/user")));

    let samples = [
        ("system", "/usr/bin"),
        ("homebrew", "/opt/homebrew/bin"),
        ("keyword", "/home/user/.cargo/bin"),
        ("regex", "/home/user/.nvm/versions/node/v20.1.0/bin"),
        ("unknown", "/srv/custom/tools"),
    ];
    for (name, path) in samples {
        group.bench_function(name, |b| b.iter(|| classifier.classify(black_box(path))));
    }

    group.finish();
}

fn bench_snapshot_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot_build");
    let builder = SnapshotBuilder::new();

    for size in [10, 50, 200] {
        let root = TempDir::new().expect("failed to create temp dir");
        let raw = fixture(&root, size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &raw, |b, raw| {
            b.iter(|| builder.build(black_box(raw)));
        });
    }

    group.finish();
}

fn bench_suggest(c: &mut Criterion) {
    let root = TempDir::new().expect("failed to create temp dir");
    for i in 0..20 {
        std::fs::create_dir_all(root.path().join(format!("opt/tool/1.{i}/bin")))
            .expect("failed to create bench dir");
    }
    let broken = root.path().join("opt/tool/0.9/bin");
    let broken = broken.to_string_lossy();
    let suggester = Suggester::new();

    c.bench_function("suggest_version_bump", |b| {
        b.iter(|| suggester.suggest(black_box(&broken), 8));
    });
}

criterion_group!(benches, bench_classify, bench_snapshot_build, bench_suggest);
criterion_main!(benches);
