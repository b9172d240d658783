//! Precomputed rank tables.
//!
//! Two tables cover every 5-card hand:
//! - the flush table, indexed by the 13-bit rank mask of a single-suited hand;
//! - the unsuited table, indexed by a perfect hash of the sorted rank multiset
//!   (combinatorial number system, `sum C(r_i + i, i + 1)`).
//!
//! Scores are dense and assigned best-first, so the straight flushes take 1..=10 and
//! the worst high card takes [`MAX_SCORE`]. Each category fills exactly the band
//! reported by [`HandCategory::score_range`].

use crate::cards::Card;
use crate::evaluator::HandCategory;
use std::sync::OnceLock;
use std::time::Instant;

/// Score of the weakest hand, 7-5-4-3-2 offsuit.
pub const MAX_SCORE: u16 = 7462;

pub(crate) const FLUSH_TABLE_SIZE: usize = 1 << 13;
/// C(13 + 5 - 1, 5): number of 5-element rank multisets.
pub(crate) const UNSUITED_TABLE_SIZE: usize = 6188;

/// Rank masks of the ten straights, best first. The wheel (5-4-3-2-A) comes last.
const STRAIGHT_MASKS: [u16; 10] =
    [0x1F00, 0x0F80, 0x07C0, 0x03E0, 0x01F0, 0x00F8, 0x007C, 0x003E, 0x001F, 0x100F];

const BINOMIAL: [[u16; 6]; 17] = binomial_table();

const fn binomial_table() -> [[u16; 6]; 17] {
    let mut table = [[0u16; 6]; 17];
    let mut n = 0;
    while n < 17 {
        table[n][0] = 1;
        let mut k = 1;
        while k < 6 && k <= n {
            table[n][k] = table[n - 1][k - 1] + table[n - 1][k];
            k += 1;
        }
        n += 1;
    }
    table
}

/// Perfect hash of an ascending 5-rank multiset (rank indices 0..13).
#[inline]
pub(crate) fn multiset_key(sorted: &[u8; 5]) -> usize {
    let mut key = 0usize;
    for (i, &r) in sorted.iter().enumerate() {
        key += BINOMIAL[r as usize + i][i + 1] as usize;
    }
    key
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableError {
    #[error("{table} table slot {slot} assigned twice")]
    Collision { table: &'static str, slot: usize },
    #[error("{category:?} ends at score {actual}, expected {expected}")]
    BandMismatch { category: HandCategory, expected: u16, actual: u16 },
    #[error("{missing} unsuited rank patterns have no score")]
    Incomplete { missing: usize },
}

/// Read-only lookup tables mapping any 5-card hand to its score.
#[derive(Debug, Clone)]
pub struct RankTables {
    flush: Box<[u16]>,
    unsuited: Box<[u16]>,
}

static TABLES: OnceLock<RankTables> = OnceLock::new();

/// Process-wide tables, built on first use.
///
/// Construction failure is fatal: no score could be trusted afterwards.
pub fn rank_tables() -> &'static RankTables {
    TABLES.get_or_init(|| {
        let started = Instant::now();
        match RankTables::build() {
            Ok(tables) => {
                log::debug!(
                    "built rank tables: {} flush and {} unsuited entries in {:?}",
                    tables.flush_entries(),
                    tables.unsuited_entries(),
                    started.elapsed()
                );
                tables
            }
            Err(err) => {
                log::error!("rank table construction failed: {err}");
                panic!("rank table construction failed: {err}");
            }
        }
    })
}

/// Force table construction now instead of on the first evaluation.
pub fn warm_up() {
    rank_tables();
}

impl RankTables {
    /// Generate both tables from scratch and validate the score bands.
    pub fn build() -> Result<Self, TableError> {
        let mut b = Builder::new();

        for mask in STRAIGHT_MASKS {
            b.flush(mask)?;
        }
        b.close(HandCategory::StraightFlush)?;

        for quad in ranks_desc() {
            for kicker in ranks_desc().filter(|&k| k != quad) {
                b.unsuited([quad, quad, quad, quad, kicker])?;
            }
        }
        b.close(HandCategory::FourOfAKind)?;

        for trips in ranks_desc() {
            for pair in ranks_desc().filter(|&p| p != trips) {
                b.unsuited([trips, trips, trips, pair, pair])?;
            }
        }
        b.close(HandCategory::FullHouse)?;

        for mask in distinct_non_straights() {
            b.flush(mask)?;
        }
        b.close(HandCategory::Flush)?;

        for mask in STRAIGHT_MASKS {
            b.unsuited(ranks_of(mask))?;
        }
        b.close(HandCategory::Straight)?;

        for trips in ranks_desc() {
            for kickers in masks_desc(2, bit(trips)) {
                let [k1, k2] = ranks_of(kickers);
                b.unsuited([trips, trips, trips, k1, k2])?;
            }
        }
        b.close(HandCategory::ThreeOfAKind)?;

        for pairs in masks_desc(2, 0) {
            let [hi, lo] = ranks_of(pairs);
            for kicker in ranks_desc().filter(|&k| pairs & bit(k) == 0) {
                b.unsuited([hi, hi, lo, lo, kicker])?;
            }
        }
        b.close(HandCategory::TwoPair)?;

        for pair in ranks_desc() {
            for kickers in masks_desc(3, bit(pair)) {
                let [k1, k2, k3] = ranks_of(kickers);
                b.unsuited([pair, pair, k1, k2, k3])?;
            }
        }
        b.close(HandCategory::OnePair)?;

        for mask in distinct_non_straights() {
            b.unsuited(ranks_of(mask))?;
        }
        b.close(HandCategory::HighCard)?;

        b.finish()
    }

    /// Score of five distinct cards. Lower is stronger.
    #[inline]
    pub fn score(&self, cards: &[Card; 5]) -> u16 {
        let suit = cards[0].suit();
        if cards.iter().all(|c| c.suit() == suit) {
            let mask = cards.iter().fold(0u16, |m, c| m | bit(c.rank().index()));
            self.flush[mask as usize]
        } else {
            let mut ranks = cards.map(|c| c.rank().index());
            ranks.sort_unstable();
            self.unsuited[multiset_key(&ranks)]
        }
    }

    /// Score stored for a single-suited rank mask, if the mask names a 5-card hand.
    pub fn flush_score(&self, rank_mask: u16) -> Option<u16> {
        self.flush.get(rank_mask as usize).copied().filter(|&s| s != 0)
    }

    /// Score stored for five rank indices (0 = Two, 12 = Ace) in any order, if they form a hand.
    pub fn unsuited_score(&self, rank_indices: [u8; 5]) -> Option<u16> {
        if rank_indices.iter().any(|&r| r > 12) {
            return None;
        }
        let mut sorted = rank_indices;
        sorted.sort_unstable();
        self.unsuited.get(multiset_key(&sorted)).copied().filter(|&s| s != 0)
    }

    pub fn flush_entries(&self) -> usize {
        self.flush.iter().filter(|&&s| s != 0).count()
    }

    pub fn unsuited_entries(&self) -> usize {
        self.unsuited.iter().filter(|&&s| s != 0).count()
    }
}

struct Builder {
    flush: Vec<u16>,
    unsuited: Vec<u16>,
    next: u16,
}

impl Builder {
    fn new() -> Self {
        Self { flush: vec![0; FLUSH_TABLE_SIZE], unsuited: vec![0; UNSUITED_TABLE_SIZE], next: 1 }
    }

    fn flush(&mut self, mask: u16) -> Result<(), TableError> {
        let slot = mask as usize;
        Self::assign(&mut self.flush, "flush", slot, &mut self.next)
    }

    fn unsuited(&mut self, mut ranks: [u8; 5]) -> Result<(), TableError> {
        ranks.sort_unstable();
        let slot = multiset_key(&ranks);
        Self::assign(&mut self.unsuited, "unsuited", slot, &mut self.next)
    }

    fn assign(
        table: &mut [u16],
        name: &'static str,
        slot: usize,
        next: &mut u16,
    ) -> Result<(), TableError> {
        if table[slot] != 0 {
            return Err(TableError::Collision { table: name, slot });
        }
        table[slot] = *next;
        *next += 1;
        Ok(())
    }

    /// Check the category just generated ends exactly on its band.
    fn close(&self, category: HandCategory) -> Result<(), TableError> {
        let expected = *category.score_range().end();
        let actual = self.next - 1;
        if actual != expected {
            return Err(TableError::BandMismatch { category, expected, actual });
        }
        Ok(())
    }

    fn finish(self) -> Result<RankTables, TableError> {
        // Every multiset except the 13 five-of-a-kinds is a hand.
        let filled = self.unsuited.iter().filter(|&&s| s != 0).count();
        let missing = UNSUITED_TABLE_SIZE - 13 - filled;
        if missing != 0 {
            return Err(TableError::Incomplete { missing });
        }
        Ok(RankTables { flush: self.flush.into_boxed_slice(), unsuited: self.unsuited.into_boxed_slice() })
    }
}

#[inline]
const fn bit(rank_index: u8) -> u16 {
    1 << rank_index
}

fn ranks_desc() -> impl Iterator<Item = u8> + Clone {
    (0..13u8).rev()
}

/// Rank masks with `count` bits set and none of `exclude`, from strongest to weakest.
fn masks_desc(count: u32, exclude: u16) -> impl Iterator<Item = u16> {
    (0..FLUSH_TABLE_SIZE as u16).rev().filter(move |m| m.count_ones() == count && m & exclude == 0)
}

fn distinct_non_straights() -> impl Iterator<Item = u16> {
    masks_desc(5, 0).filter(|m| !STRAIGHT_MASKS.contains(m))
}

/// Rank indices of the set bits of `mask`, highest first.
fn ranks_of<const K: usize>(mask: u16) -> [u8; K] {
    let mut out = [0u8; K];
    let mut slots = out.iter_mut();
    for r in ranks_desc().filter(|&r| mask & bit(r) != 0) {
        if let Some(slot) = slots.next() {
            *slot = r;
        }
    }
    out
}
