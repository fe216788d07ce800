//! Table rendering benchmarks

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use event_logger::*;

fn benchmark_render(c: &mut Criterion) {
    let clock = ManualClock::new();
    let events: Vec<Event> = (0..100)
        .map(|i| {
            clock.advance(Duration::from_micros(137));
            Event::new(format!("step {}", i), clock.now())
        })
        .collect();
    let config = TableConfig::default();

    c.bench_function("render_100_events", |b| {
        b.iter(|| {
            let table = EventTable::build(black_box(&events), Resolution::Microseconds, &config)
                .expect("table renders");
            black_box(table.lines());
        });
    });

    c.bench_function("record_and_finish_10_events", |b| {
        b.iter(|| {
            let mut sink = CollectingSink::new();
            let mut recorder = EventRecorder::<Nanoseconds, _, _>::with_parts(
                "start",
                SystemClock,
                &mut sink,
                TableConfig::default(),
            );
            for i in 0..10 {
                recorder.add_event(format!("step {}", i));
            }
            recorder.finish();
            black_box(sink.take_lines());
        });
    });
}

criterion_group!(benches, benchmark_render);
criterion_main!(benches);
