use criterion::{criterion_group, criterion_main, Criterion};
use gp_means::Mean;
use ndarray::{Array, Axis};
use ndarray_rand::rand::SeedableRng;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand_xoshiro::Xoshiro256Plus;

fn criterion_means(c: &mut Criterion) {
    let dims = [5, 20];
    let nts = [1000, 4000];

    let mut group = c.benchmark_group("means");
    for i in 0..2 {
        let dim = dims[i];
        let nt = nts[i];
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let xt = Array::random_using((nt, dim), Uniform::new(-1., 1.), &mut rng);
        let yt = xt.sum_axis(Axis(1));

        let mut mean: Mean<f64> = Mean::bias() + Mean::linear() * 2.0;
        mean.check_hypers("bench_");
        let values = mean.default_hypers(&xt, &yt).expect("defaults");

        group.bench_function(format!("means {dim}"), |b| {
            b.iter(|| std::hint::black_box(mean.value(&xt, &values).expect("mean evaluation")));
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_means);
criterion_main!(benches);
