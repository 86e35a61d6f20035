use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trends_series::{build_series, BuildOptions, EpochMonths, RawRow, ScaleUnit, Schema};

fn gen_rows(months: i64) -> Vec<RawRow> {
    let mut v = Vec::with_capacity(months as usize * 2);
    for m in 0..months {
        for seasonal in ["Seasonally Adjusted", "Unadjusted"] {
            let volume = 40_000_000_000.0 + (m as f64 * 0.1).sin() * 5_000_000_000.0;
            v.push(RawRow::from_pairs([
                ("month", m.to_string()),
                ("volume", format!("{volume:.0}")),
                ("seasonal", seasonal.to_string()),
            ]));
        }
    }
    v
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_series");
    let opts = BuildOptions::new(Schema::Standard, ScaleUnit::Billions);
    let fmt = EpochMonths::default();
    for &months in &[200i64, 2_000] {
        let rows = gen_rows(months);
        group.bench_with_input(BenchmarkId::from_parameter(months), &rows, |b, rows| {
            b.iter(|| black_box(build_series(rows, &opts, &fmt).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
