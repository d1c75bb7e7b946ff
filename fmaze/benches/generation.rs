use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fmaze::{Generator, MazeSpec};

const WIDTH: i32 = 100;

pub fn generate(c: &mut Criterion) {
    c.bench_function("generate", |b| {
        b.iter(|| {
            let spec = MazeSpec::new(black_box(WIDTH)).with_seed(Some(42));
            Generator::new(spec).generate(|_| {}).unwrap()
        })
    });
}

pub fn generate_and_solve(c: &mut Criterion) {
    c.bench_function("generate_and_solve", |b| {
        b.iter(|| {
            let spec = MazeSpec::new(black_box(WIDTH)).with_seed(Some(42));
            let maze = Generator::new(spec).generate(|_| {}).unwrap();
            maze.solve().unwrap()
        })
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = generate, generate_and_solve}
criterion_main!(benches);
