//! Benchmarks for stroke classification, composition and full key holds.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gesture_keys::{
    Controller, DirectionalSymbol, EditorAction, Point, TextSink, classify_delta, compose,
};
use ropey::Rope;
use std::time::{Duration, Instant};

/// Rope-backed text field for benchmarking
struct BenchSink {
    rope: Rope,
}

impl TextSink for BenchSink {
    fn set_preview(&mut self, _text: &str) {}

    fn commit(&mut self, text: &str) {
        let end = self.rope.len_chars();
        self.rope.insert(end, text);
    }

    fn delete_backward(&mut self, count: usize) {
        let end = self.rope.len_chars();
        self.rope.remove(end.saturating_sub(count)..end);
    }

    fn send_editor_action(&mut self, action: EditorAction) {
        match action {
            EditorAction::Newline => self.commit("\n"),
        }
    }
}

fn benchmark_classification(c: &mut Criterion) {
    let strokes: Vec<(f32, f32)> = (0..360)
        .step_by(5)
        .map(|deg| {
            let rad = (deg as f32).to_radians();
            (80.0 * rad.cos(), -80.0 * rad.sin())
        })
        .collect();

    c.bench_function("classify 72 strokes", |b| {
        b.iter(|| {
            for (dx, dy) in &strokes {
                black_box(classify_delta(black_box(*dx), black_box(*dy), 30.0));
            }
        });
    });
}

fn benchmark_composition(c: &mut Criterion) {
    use DirectionalSymbol::*;
    let sessions: Vec<(char, Vec<DirectionalSymbol>)> = vec![
        ('a', vec![Tap]),
        ('a', vec![Left, UpRight]),
        ('o', vec![Right, Tap]),
        ('o', vec![Tap, Tap]),
        ('u', vec![Right, Down, Up]),
        ('s', vec![Up]),
    ];

    c.bench_function("compose mixed sessions", |b| {
        b.iter(|| {
            for (base, symbols) in &sessions {
                black_box(compose(*base, black_box(symbols), false));
            }
        });
    });
}

fn benchmark_key_hold(c: &mut Criterion) {
    let mut controller = Controller::new();
    let mut sink = BenchSink { rope: Rope::new() };
    let start = Instant::now();
    let center = Point::new(100.0, 100.0);

    c.bench_function("gesture key hold", |b| {
        let mut t = 0u64;
        b.iter(|| {
            let at = |ms: u64| start + Duration::from_millis(ms);
            controller.key_down("a", at(t), &mut sink);
            controller.poll(at(t + 100), &mut sink);
            controller.surface_stroke(center, Point::new(160.0, 100.0), &mut sink);
            controller.surface_stroke(center, Point::new(100.0, 40.0), &mut sink);
            controller.key_up("a", at(t + 200), &mut sink);
            t += 300;
        });
    });
}

fn benchmark_delete_repeat(c: &mut Criterion) {
    let mut controller = Controller::new();
    let mut sink = BenchSink {
        rope: Rope::from_str(&"x".repeat(10_000)),
    };
    let start = Instant::now();

    c.bench_function("held delete for one second", |b| {
        let mut t = 0u64;
        b.iter(|| {
            let at = |ms: u64| start + Duration::from_millis(ms);
            controller.key_down("⌫", at(t), &mut sink);
            controller.key_up("⌫", at(t + 1000), &mut sink);
            t += 1100;
            if sink.rope.len_chars() < 100 {
                sink.commit(&"x".repeat(10_000));
            }
        });
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(100);
    targets = benchmark_classification,
              benchmark_composition,
              benchmark_key_hold,
              benchmark_delete_repeat
}
criterion_main!(benches);
