//! Resolution throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rps::{resolve, Choice, RoundResolver};

fn bench_resolve(c: &mut Criterion) {
    c.bench_function("resolve_all_pairs", |b| {
        b.iter(|| {
            for user in Choice::ALL {
                for computer in Choice::ALL {
                    black_box(resolve(black_box(user), black_box(computer)));
                }
            }
        })
    });
}

fn bench_play(c: &mut Criterion) {
    let mut resolver = RoundResolver::from_seed(42);
    c.bench_function("play", |b| b.iter(|| black_box(resolver.play(black_box(Choice::Rock)))));
}

fn bench_commit(c: &mut Criterion) {
    let mut resolver = RoundResolver::from_seed(42);
    c.bench_function("commit_and_reveal", |b| {
        b.iter(|| {
            let sealed = resolver.commit_computer_choice();
            black_box(sealed.reveal(Choice::Paper))
        })
    });
}

criterion_group!(benches, bench_resolve, bench_play, bench_commit);
criterion_main!(benches);
