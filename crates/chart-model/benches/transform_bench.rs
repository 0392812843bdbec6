use chart_model::{device_to_value, value_to_device, Rect, RectEdge, ScaleKind, ValueAxis};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_values(n: usize) -> Vec<f64> {
    (0..n).map(|i| 1.0 + (i as f64 * 0.37) % 999.0).collect()
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_to_device");
    let area = Rect::from_ltwh(72.0, 24.0, 928.0, 560.0);
    let values = gen_values(100_000);
    for scale in [ScaleKind::Linear, ScaleKind::Log10] {
        let axis = ValueAxis::with_range("v", 1.0, 1000.0).expect("valid range");
        axis.set_scale(scale).expect("positive range");
        group.bench_with_input(BenchmarkId::from_parameter(format!("{scale:?}")), &values, |b, vals| {
            b.iter(|| {
                let mut acc = 0.0;
                for &v in vals {
                    let d = value_to_device(&axis, v, &area, RectEdge::Left);
                    acc += device_to_value(d, &area, RectEdge::Left, &axis);
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_transform);
criterion_main!(benches);
