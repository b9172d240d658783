mod common;

use common::reference_category;
use poker_rank::cards::{Card, DECK_SIZE};
use poker_rank::evaluator::{
    evaluate5, evaluate7, rank_tables, warm_up, HandCategory, RankTables, MAX_SCORE,
};
use poker_rank::deck::Deck;
use std::collections::HashSet;
use std::thread;

/// Number of 5-card hands per category out of C(52, 5).
const FREQUENCIES: [(HandCategory, usize); 9] = [
    (HandCategory::StraightFlush, 40),
    (HandCategory::FourOfAKind, 624),
    (HandCategory::FullHouse, 3_744),
    (HandCategory::Flush, 5_108),
    (HandCategory::Straight, 10_200),
    (HandCategory::ThreeOfAKind, 54_912),
    (HandCategory::TwoPair, 123_552),
    (HandCategory::OnePair, 1_098_240),
    (HandCategory::HighCard, 1_302_540),
];

#[test]
fn every_five_card_hand_lands_in_its_band() {
    let deck: Vec<Card> = Deck::standard().as_slice().to_vec();
    let mut counts = [0usize; 10];
    let mut scores = HashSet::new();
    let mut total = 0usize;

    for a in 0..DECK_SIZE {
        for b in (a + 1)..DECK_SIZE {
            for c in (b + 1)..DECK_SIZE {
                for d in (c + 1)..DECK_SIZE {
                    for e in (d + 1)..DECK_SIZE {
                        let hand = [deck[a], deck[b], deck[c], deck[d], deck[e]];
                        let rank = evaluate5(hand);
                        let category = rank.category().expect("valid hand");
                        assert_eq!(category, reference_category(&hand), "{hand:?}");
                        let score = rank.score() as u16;
                        assert!(category.score_range().contains(&score));
                        counts[category.number() as usize] += 1;
                        scores.insert(score);
                        total += 1;
                    }
                }
            }
        }
    }

    assert_eq!(total, 2_598_960);
    for (category, expected) in FREQUENCIES {
        assert_eq!(counts[category.number() as usize], expected, "{category}");
    }
    // Every score in 1..=MAX_SCORE is reachable.
    assert_eq!(scores.len(), MAX_SCORE as usize);
}

#[test]
fn bands_are_contiguous_and_ordered() {
    let mut next = 1u16;
    for category in HandCategory::ALL.iter().rev() {
        let range = category.score_range();
        assert_eq!(*range.start(), next, "{category}");
        next = range.end() + 1;
    }
    assert_eq!(next, MAX_SCORE + 1);
}

#[test]
fn explicit_build_matches_shared_tables() {
    warm_up();
    let built = RankTables::build().expect("tables build");
    assert_eq!(built.flush_entries(), rank_tables().flush_entries());
    assert_eq!(built.unsuited_entries(), rank_tables().unsuited_entries());
    for mask in 0..(1u16 << 13) {
        assert_eq!(built.flush_score(mask), rank_tables().flush_score(mask));
    }
}

#[test]
fn concurrent_evaluation_is_deterministic() {
    let mut deck = Deck::standard();
    deck.shuffle_seeded(2024);
    let hands: Vec<[Card; 7]> = (0..7).filter_map(|_| deck.deal::<7>()).collect();
    let expected: Vec<_> = hands.iter().map(|h| evaluate7(*h)).collect();

    thread::scope(|s| {
        let workers: Vec<_> = (0..8)
            .map(|_| s.spawn(|| hands.iter().map(|h| evaluate7(*h)).collect::<Vec<_>>()))
            .collect();
        for worker in workers {
            assert_eq!(worker.join().expect("worker finished"), expected);
        }
    });
}
