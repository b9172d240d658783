use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use poker_rank::cards::Card;
use poker_rank::deck::Deck;
use poker_rank::evaluator::{evaluate5, evaluate7, warm_up};
use poker_rank::variants::omaha::evaluate_omaha;

fn random_hands<const N: usize>(count: usize, seed: u64) -> Vec<[Card; N]> {
    let mut hands = Vec::with_capacity(count);
    let mut seed = seed;
    while hands.len() < count {
        let mut deck = Deck::standard();
        deck.shuffle_seeded(seed);
        seed += 1;
        while let Some(hand) = deck.deal::<N>() {
            hands.push(hand);
        }
    }
    hands.truncate(count);
    hands
}

fn bench_evaluate_five(c: &mut Criterion) {
    warm_up();
    let hi = ["Ah", "Kd", "7s", "5c", "2d"].map(Card::parse);
    let sf = ["As", "Ks", "Qs", "Js", "Ts"].map(Card::parse);

    let mut g = c.benchmark_group("evaluate5");
    g.bench_with_input(BenchmarkId::new("high_card", "A,K,7,5,2"), &hi, |b, input| {
        b.iter(|| evaluate5(black_box(*input)))
    });
    g.bench_with_input(BenchmarkId::new("straight_flush", "royal"), &sf, |b, input| {
        b.iter(|| evaluate5(black_box(*input)))
    });
    g.bench_function("strings", |b| b.iter(|| evaluate5(black_box(["Ah", "Kd", "7s", "5c", "2d"]))));
    g.finish();
}

fn bench_evaluate_seven(c: &mut Criterion) {
    warm_up();
    let hands = random_hands::<7>(1_000, 11);
    c.bench_function("evaluate7/1000_random", |b| {
        b.iter(|| hands.iter().map(|h| evaluate7(black_box(*h))).max())
    });
}

fn bench_evaluate_omaha(c: &mut Criterion) {
    warm_up();
    let hands = random_hands::<9>(1_000, 23);
    c.bench_function("omaha/1000_random", |b| {
        b.iter(|| {
            hands
                .iter()
                .map(|h| {
                    let [c0, c1, c2, c3, c4, h0, h1, h2, h3] = *h;
                    evaluate_omaha(black_box([c0, c1, c2, c3, c4]), black_box([h0, h1, h2, h3]))
                })
                .max()
        })
    });
}

criterion_group!(benches, bench_evaluate_five, bench_evaluate_seven, bench_evaluate_omaha);
criterion_main!(benches);
