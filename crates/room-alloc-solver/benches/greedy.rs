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

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use room_alloc_core::prelude::Timestamp;
use room_alloc_model::prelude::{BookingQuery, Problem, RoomIdentifier, RoomRoster};
use room_alloc_solver::prelude::GreedyAllocator;

fn synthetic_problem(queries: usize, rooms: usize) -> Problem {
    let roster: RoomRoster = (0..rooms)
        .map(|i| RoomIdentifier::new(format!("room-{i:03}")))
        .collect();
    let queries = (0..queries)
        .map(|i| {
            let month = (i % 12) + 1;
            let day = (i % 27) + 1;
            let check_in = Timestamp::new(format!("2024-{month:02}-{day:02}"));
            let check_out = Timestamp::new(format!("2024-{month:02}-{day:02}T23"));
            BookingQuery::new(check_in, check_out)
        })
        .collect();
    Problem::new(queries, roster, None)
}

fn bench_allocate(c: &mut Criterion) {
    let allocator = GreedyAllocator::new();
    let mut group = c.benchmark_group("greedy");

    for (queries, rooms) in [(100, 5), (1_000, 10), (5_000, 25)] {
        group.bench_function(format!("allocate_{queries}q_{rooms}r"), |b| {
            b.iter_batched(
                || synthetic_problem(queries, rooms),
                |problem| allocator.allocate(problem),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_allocate);
criterion_main!(benches);
