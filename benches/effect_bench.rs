//! Benchmark for effect composition depth: map and chain on `IO`,
//! `IOEither`, `ReaderIOEither` and `StateReaderIOEither`, plus traversal.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fpcomb::control::Either;
use fpcomb::effect::{IO, IOEither, ReaderIOEither, StateReaderIOEither, io_either, reader_io_either};
use std::hint::black_box;

const DEPTHS: [usize; 3] = [1, 10, 100];

// =============================================================================
// IO
// =============================================================================

fn benchmark_io(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("io");

    for depth in DEPTHS {
        group.bench_with_input(BenchmarkId::new("map", depth), &depth, |bencher, &depth| {
            let io = (0..depth).fold(IO::of(0_u64), |io, _| io.map(|n| n + 1));
            bencher.iter(|| black_box(io.run_unsafe()));
        });

        group.bench_with_input(BenchmarkId::new("chain", depth), &depth, |bencher, &depth| {
            let io = (0..depth).fold(IO::of(0_u64), |io, _| io.chain(|n| IO::of(n + 1)));
            bencher.iter(|| black_box(io.run_unsafe()));
        });
    }

    group.finish();
}

// =============================================================================
// IOEither
// =============================================================================

fn benchmark_io_either(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("io_either");

    for depth in DEPTHS {
        group.bench_with_input(BenchmarkId::new("chain", depth), &depth, |bencher, &depth| {
            let io = (0..depth).fold(IOEither::<String, u64>::of(0), |io, _| io.chain(|n| IOEither::of(n + 1)));
            bencher.iter(|| black_box(io.run_unsafe()));
        });

        group.bench_with_input(BenchmarkId::new("short_circuit", depth), &depth, |bencher, &depth| {
            let io = (0..depth).fold(IOEither::<String, u64>::left("stop".to_string()), |io, _| {
                io.chain(|n| IOEither::of(n + 1))
            });
            bencher.iter(|| black_box(io.run_unsafe()));
        });

        group.bench_with_input(BenchmarkId::new("traverse_seq", depth), &depth, |bencher, &depth| {
            let all = io_either::traverse_array_seq(0..depth as u64, |n| IOEither::<String, u64>::of(n * 2));
            bencher.iter(|| black_box(all.run_unsafe()));
        });
    }

    group.finish();
}

// =============================================================================
// ReaderIOEither / StateReaderIOEither
// =============================================================================

fn benchmark_reader_io_either(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("reader_io_either");

    for depth in DEPTHS {
        group.bench_with_input(BenchmarkId::new("chain_asks", depth), &depth, |bencher, &depth| {
            let computation = (0..depth).fold(ReaderIOEither::<u64, String, u64>::of(0), |computation, _| {
                computation.chain(|n| ReaderIOEither::asks(move |step: u64| n + step))
            });
            bencher.iter(|| black_box(computation.run(black_box(1)).run_unsafe()));
        });

        group.bench_with_input(BenchmarkId::new("sequence_par", depth), &depth, |bencher, &depth| {
            let all = reader_io_either::sequence_array_par(
                (0..depth).map(|n| ReaderIOEither::<u64, String, u64>::asks(move |step| step * n as u64)),
            );
            bencher.iter(|| black_box(all.run(black_box(3)).run_unsafe()));
        });
    }

    group.finish();
}

fn benchmark_state_reader_io_either(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("state_reader_io_either");

    for depth in DEPTHS {
        group.bench_with_input(BenchmarkId::new("modify", depth), &depth, |bencher, &depth| {
            type Counter<A> = StateReaderIOEither<u64, u64, String, A>;
            let program = (0..depth).fold(Counter::of(()), |program, _| {
                program.chain(|()| Counter::asks(|step: u64| step).chain(|step| Counter::modify(move |n| n + step)))
            });
            bencher.iter(|| {
                let outcome = program.clone().provide(black_box(0), black_box(2)).run_unsafe();
                black_box(matches!(outcome, Either::Right(_)))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_io,
    benchmark_io_either,
    benchmark_reader_io_either,
    benchmark_state_reader_io_either
);

criterion_main!(benches);
