use criterion::{black_box, criterion_group, criterion_main, Criterion};

use benchgen::{
    line::{generate_double_line, generate_integer_line, generate_string_line},
    random::{Alphabet, ZeroDenominator},
};

fn integers(c: &mut Criterion) {
    let rng = &mut rand::thread_rng();

    for n in [1, 20, 100] {
        c.bench_function(&format!("integer line of {}", n), |b| {
            b.iter(|| generate_integer_line(rng, black_box(n), -2_000_000, 2_000_000))
        });
    }
}

fn doubles(c: &mut Criterion) {
    let rng = &mut rand::thread_rng();

    for n in [1, 20, 100] {
        c.bench_function(&format!("double line of {}", n), |b| {
            b.iter(|| {
                generate_double_line(
                    rng,
                    black_box(n),
                    -20_000_000..=20_000_000,
                    -20_000_000..=20_000_000,
                    4,
                    ZeroDenominator::Resample,
                )
            })
        });
    }
}

fn strings(c: &mut Criterion) {
    let rng = &mut rand::thread_rng();

    let legals = Alphabet::legals();
    c.bench_function("10 short strings", |b| {
        b.iter(|| generate_string_line(rng, black_box(10), &legals, 1, 50))
    });

    let symbols = Alphabet::symbols();
    c.bench_function("one string of 1000 symbols", |b| {
        b.iter(|| generate_string_line(rng, black_box(1), &symbols, 1000, 1000))
    });
}

criterion_group!(benches, integers, doubles, strings);
criterion_main!(benches);
