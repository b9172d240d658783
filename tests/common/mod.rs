#![allow(dead_code)]

use poker_rank::cards::{Card, DECK_SIZE};
use poker_rank::evaluator::HandCategory;
use proptest::prelude::*;

/// Straightforward category detection from rank counts, used to cross-check the tables.
pub fn reference_category(cards: &[Card; 5]) -> HandCategory {
    let mut counts = [0u8; 13];
    let mut rank_mask = 0u16;
    for card in cards {
        let r = card.rank().index();
        counts[r as usize] += 1;
        rank_mask |= 1 << r;
    }
    let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let is_straight = rank_mask.count_ones() == 5
        && (rank_mask == 0x100F || rank_mask >> rank_mask.trailing_zeros() == 0x1F);

    let mut groups: Vec<u8> = counts.iter().copied().filter(|&c| c > 0).collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));

    match (is_flush, is_straight, groups.as_slice()) {
        (true, true, _) => HandCategory::StraightFlush,
        (_, _, [4, ..]) => HandCategory::FourOfAKind,
        (_, _, [3, 2]) => HandCategory::FullHouse,
        (true, false, _) => HandCategory::Flush,
        (false, true, _) => HandCategory::Straight,
        (_, _, [3, ..]) => HandCategory::ThreeOfAKind,
        (_, _, [2, 2, ..]) => HandCategory::TwoPair,
        (_, _, [2, ..]) => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    }
}

pub fn deck_ids() -> Vec<i32> {
    (0..DECK_SIZE as i32).collect()
}

/// `n` distinct card ids in random order.
pub fn distinct_ids(n: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::sample::subsequence(deck_ids(), n).prop_shuffle()
}

pub fn card(id: i32) -> Card {
    Card::from_id(id).expect("id in deck")
}

pub fn cards<const N: usize>(ids: &[i32]) -> [Card; N] {
    let v: Vec<Card> = ids.iter().map(|&id| card(id)).collect();
    v.try_into().expect("exact length")
}
