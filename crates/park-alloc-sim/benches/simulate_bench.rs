// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use park_alloc_model::input::{IntervalList, NaplesReach, PreferenceList, UnitIntervalList};
use park_alloc_sim::{
    engine::ParkingEngine,
    rule::ClassicalRule,
    simulate::{simulate_classical, simulate_interval, simulate_k_naples, simulate_unit_interval},
    street::{BTreeSetStreet, BooleanVecStreet},
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

fn gen_prefs(n: usize, rng: &mut impl Rng) -> Option<PreferenceList> {
    let values: Vec<usize> = (0..n).map(|_| rng.random_range(1..=n)).collect();
    PreferenceList::new(&values).ok()
}

fn gen_intervals(n: usize, rng: &mut impl Rng) -> Option<IntervalList> {
    let (alpha, beta): (Vec<usize>, Vec<usize>) = (0..n)
        .map(|_| {
            let a = rng.random_range(1..=n);
            (a, rng.random_range(a..=n))
        })
        .unzip();
    IntervalList::new(&alpha, &beta).ok()
}

fn bench_rules(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(0xBADC_0FFE);
    let mut group = c.benchmark_group("simulate");

    for &n in &[10usize, 100, 1000] {
        let (Some(prefs), Some(intervals)) = (gen_prefs(n, &mut rng), gen_intervals(n, &mut rng))
        else {
            continue;
        };
        let unit = UnitIntervalList::from_preferences(&prefs);
        let Ok(k) = NaplesReach::new((n / 4).max(1), prefs.street()) else {
            continue;
        };

        group.bench_with_input(BenchmarkId::new("classical", n), &prefs, |b, p| {
            b.iter(|| black_box(simulate_classical(p)))
        });
        group.bench_with_input(BenchmarkId::new("k_naples", n), &prefs, |b, p| {
            b.iter(|| black_box(simulate_k_naples(p, k)))
        });
        group.bench_with_input(BenchmarkId::new("interval", n), &intervals, |b, l| {
            b.iter(|| black_box(simulate_interval(l)))
        });
        group.bench_with_input(BenchmarkId::new("unit_interval", n), &unit, |b, l| {
            b.iter(|| black_box(simulate_unit_interval(l)))
        });
    }
    group.finish();
}

fn bench_street_backends(c: &mut Criterion) {
    let n = 512usize;
    let Ok(prefs) = PreferenceList::new(&vec![1; n]) else {
        return;
    };
    let rule = ClassicalRule::new(&prefs);

    let mut group = c.benchmark_group("engine_street");
    group.bench_function("boolvec_all_ones", |b| {
        b.iter(|| black_box(ParkingEngine::<BooleanVecStreet>::new().run(&rule)))
    });
    group.bench_function("btreeset_all_ones", |b| {
        b.iter(|| black_box(ParkingEngine::<BTreeSetStreet>::new().run(&rule)))
    });
    group.finish();
}

criterion_group!(benches, bench_rules, bench_street_backends);
criterion_main!(benches);
