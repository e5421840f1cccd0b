use category_encoders::datasets::{load_postcodes, TargetType};
use category_encoders::frame::{Column, Frame, Value};
use category_encoders::preprocessing::{
    FittedTransformer, HandleUnknown, OneHotEncoder, Transformer,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn synthetic(n_rows: usize, cardinality: usize) -> Frame {
    let values: Vec<Value> = (0..n_rows)
        .map(|i| Value::from(format!("cat_{}", (i * 7919) % cardinality)))
        .collect();
    Frame::from_columns(vec![Column::new("x", values)]).unwrap()
}

fn bench_postcodes(c: &mut Criterion) {
    let (x, _) = load_postcodes(TargetType::Binary).unwrap();
    let encoder = OneHotEncoder::new().with_use_cat_names(true);

    c.bench_function("one_hot_fit_postcodes", |b| {
        b.iter(|| black_box(encoder.fit(black_box(&x)).unwrap()));
    });

    let fitted = encoder.fit(&x).unwrap();
    c.bench_function("one_hot_transform_postcodes", |b| {
        b.iter(|| black_box(fitted.transform(black_box(&x)).unwrap()));
    });
}

fn bench_transform(c: &mut Criterion) {
    // Rows x categories
    for &(rows, card) in [(1000, 10), (10000, 10), (10000, 100)].iter() {
        let data = synthetic(rows, card);
        let fitted = OneHotEncoder::new()
            .with_handle_unknown(HandleUnknown::Indicator)
            .fit(&data)
            .unwrap();
        let id = format!("{}x{}", rows, card);
        c.bench_with_input(BenchmarkId::new("one_hot_transform", id), &data, |b, d| {
            b.iter(|| black_box(fitted.transform(black_box(d)).unwrap()));
        });
    }
}

fn bench_inverse(c: &mut Criterion) {
    for &rows in [1000, 10000].iter() {
        let data = synthetic(rows, 20);
        let fitted = OneHotEncoder::new().fit(&data).unwrap();
        let encoded = fitted.transform(&data).unwrap();
        c.bench_with_input(
            BenchmarkId::new("one_hot_inverse", rows),
            &encoded,
            |b, e| {
                b.iter(|| black_box(fitted.inverse_transform(black_box(e)).unwrap()));
            },
        );
    }
}

criterion_group!(benches, bench_postcodes, bench_transform, bench_inverse);
criterion_main!(benches);
