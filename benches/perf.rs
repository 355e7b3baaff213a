use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use optikgoal_terminal::bulletin::BulletinState;
use optikgoal_terminal::i18n::{translate, Language};
use optikgoal_terminal::predictions::PredictionsState;
use optikgoal_terminal::state::{apply_delta, AppState, Delta};

fn bench_coupon_total(c: &mut Criterion) {
    let mut bulletin = BulletinState::default();
    for id in [1u32, 2, 3, 4, 5, 7, 8] {
        bulletin.toggle_selected(id);
    }

    c.bench_function("coupon_total", |b| {
        b.iter(|| {
            let total = black_box(&bulletin).total_odds();
            black_box(total);
        })
    });
}

fn bench_bulletin_filter(c: &mut Criterion) {
    let mut bulletin = BulletinState::default();
    bulletin.cycle_sport();

    c.bench_function("bulletin_filter", |b| {
        b.iter(|| {
            let rows = black_box(&bulletin).filtered();
            black_box(rows.len());
        })
    });
}

fn bench_predictions_filter(c: &mut Criterion) {
    let mut preds = PredictionsState::default();
    preds.cycle_filter();

    c.bench_function("predictions_filter", |b| {
        b.iter(|| {
            let rows = black_box(&preds).filtered();
            black_box(rows.len());
        })
    });
}

fn bench_minute_tick(c: &mut Criterion) {
    let mut state = AppState::new();

    c.bench_function("minute_tick", |b| {
        b.iter(|| {
            apply_delta(black_box(&mut state), Delta::MinuteTick);
            black_box(state.live_matches.len());
        })
    });
}

fn bench_translate_lookup(c: &mut Criterion) {
    c.bench_function("translate_lookup", |b| {
        b.iter(|| {
            let text = translate(black_box("community"), Language::Tr);
            black_box(text);
        })
    });
}

criterion_group!(
    perf,
    bench_coupon_total,
    bench_bulletin_filter,
    bench_predictions_filter,
    bench_minute_tick,
    bench_translate_lookup
);
criterion_main!(perf);
