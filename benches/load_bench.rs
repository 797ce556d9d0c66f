use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use percolate_sql::{infer_columns, Record, SqlContext, Value};

fn batch(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            let record = Record::new()
                .with("id", i as i64)
                .with("name", format!("row-{i}"))
                .with("score", i as f64 * 0.5);
            if i % 3 == 0 {
                record.with("note", Value::Null)
            } else {
                record.with("flag", i % 2 == 0)
            }
        })
        .collect()
}

fn bench_infer(c: &mut Criterion) {
    let mut group = c.benchmark_group("infer_columns");
    for n in [100, 10_000] {
        let rows = batch(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &rows, |b, rows| {
            b.iter(|| infer_columns(black_box(rows)).unwrap())
        });
    }
    group.finish();
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_from_dicts");
    for n in [100, 10_000] {
        let rows = batch(n);
        let mut ctx = SqlContext::new().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &rows, |b, rows| {
            b.iter(|| ctx.table_from_dicts("bench", black_box(rows)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_infer, bench_load);
criterion_main!(benches);
