//! # SB-02 Spin Mutex Brutal Benchmarks
//!
//! Claims to validate:
//! - Uncontended acquire/release is one CAS, one store and two moves
//! - Under contention the wait strategy changes throughput, never correctness
//!
//! Brutal conditions:
//! - 2, 4 and 8 threads hammering a single mutex

use std::thread;
use std::time::{Duration, Instant};

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use sb_02_spin_mutex::{Blocking, Exponential, Mutex, SpinLoop, WaitStrategy};

const OPS_PER_THREAD: u64 = 10_000;

fn uncontended<W: WaitStrategy>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group("sb-02/brutal/uncontended");
    let mutex: Mutex<u64, W> = Mutex::new(0);
    group.bench_function(name, |b| {
        b.iter(|| {
            let (v, handle) = mutex.acquire();
            mutex.release(handle, black_box(v + 1));
        })
    });
    group.finish();
}

fn contended<W: WaitStrategy>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(format!("sb-02/brutal/contended/{name}"));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(20);

    for threads in [2u64, 4, 8] {
        group.throughput(Throughput::Elements(threads * OPS_PER_THREAD));
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            b.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                for _ in 0..iters {
                    let mutex: Mutex<u64, W> = Mutex::new(0);
                    let start = Instant::now();
                    thread::scope(|s| {
                        for _ in 0..threads {
                            s.spawn(|| {
                                for _ in 0..OPS_PER_THREAD {
                                    mutex.with(|v| *v += 1);
                                }
                            });
                        }
                    });
                    total += start.elapsed();
                    black_box(mutex.into_inner());
                }
                total
            })
        });
    }
    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    uncontended::<SpinLoop>(c, "spin");
    uncontended::<Exponential>(c, "exponential");
    uncontended::<Blocking>(c, "blocking");
    contended::<SpinLoop>(c, "spin");
    contended::<Exponential>(c, "exponential");
    contended::<Blocking>(c, "blocking");
}
