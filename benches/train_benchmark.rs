use criterion::{black_box, criterion_group, criterion_main, Criterion};
use simple_nn::{
    matrix::{ops::Dot, Matrix},
    neural::Perceptron,
};

fn training_set() -> (Matrix, Matrix) {
    (
        Matrix::from_array([[0, 0, 1], [1, 1, 1], [1, 0, 1], [0, 0, 1]]),
        Matrix::from_array([[0], [1], [1], [0]]),
    )
}

fn train(iterations: usize) {
    let (inputs, targets) = training_set();
    let weights = Matrix::from_array([[0.5], [-0.5], [0.25]]);

    let mut model = Perceptron::with_weights(iterations, weights);
    assert_eq!(Ok(()), model.train(&inputs, &targets));
}

fn bench_train(c: &mut Criterion) {
    c.bench_function("train 10 iterations", |b| b.iter(|| train(black_box(10))));
    c.bench_function("train 10,000 iterations", |b| {
        b.iter(|| train(black_box(10_000)))
    });
}

fn bench_predict(c: &mut Criterion) {
    let (inputs, _) = training_set();
    let model = Perceptron::with_weights(0, Matrix::from_array([[0.5], [-0.5], [0.25]]));

    c.bench_function("predict 4 rows", |b| {
        b.iter(|| model.predict(black_box(&inputs)).unwrap())
    });
}

fn bench_dot(c: &mut Criterion) {
    let m1 = Matrix::filled(100, 100, 1.5).unwrap();
    let m2 = Matrix::filled(100, 100, -0.5).unwrap();

    c.bench_function("dot 100x100", |b| {
        b.iter(|| black_box(&m1).dot(black_box(&m2)).unwrap())
    });
}

criterion_group!(benches, bench_train, bench_predict, bench_dot);
criterion_main!(benches);
