use crate::evaluator::combinations::{select, Combinations};
use crate::evaluator::{rank_tables, resolve, HandRank, IntoCard};

/// Evaluate an Omaha hand with the rule "use exactly 2 hole + 3 community cards".
///
/// All nine cards must be valid and distinct, otherwise the result is
/// [`HandRank::Invalid`].
///
/// ```
/// use poker_rank::evaluator::HandCategory;
/// use poker_rank::variants::omaha::evaluate_omaha;
///
/// let rank = evaluate_omaha(["Ah", "Kh", "Qh", "Jh", "2c"], ["Th", "9h", "3d", "4s"]);
/// assert_eq!(rank.category(), Some(HandCategory::StraightFlush));
///
/// // Four hearts in the hole are not a flush: only two of them play.
/// let rank = evaluate_omaha(["Ac", "Kd", "7h", "3s", "2c"], ["Qh", "Jh", "9h", "8h"]);
/// assert_eq!(rank.category(), Some(HandCategory::HighCard));
/// ```
pub fn evaluate_omaha<C: IntoCard, H: IntoCard>(community: [C; 5], hole: [H; 4]) -> HandRank {
    let [c0, c1, c2, c3, c4] = community;
    let [h0, h1, h2, h3] = hole;
    let all = [
        c0.into_card(),
        c1.into_card(),
        c2.into_card(),
        c3.into_card(),
        c4.into_card(),
        h0.into_card(),
        h1.into_card(),
        h2.into_card(),
        h3.into_card(),
    ];
    let Some([c0, c1, c2, c3, c4, h0, h1, h2, h3]) = resolve(all) else {
        return HandRank::Invalid;
    };
    let community = [c0, c1, c2, c3, c4];
    let hole = [h0, h1, h2, h3];

    let tables = rank_tables();
    let mut best: Option<u16> = None;
    for pair in Combinations::<4, 2>::new() {
        let [a, b] = select(&hole, pair);
        for triple in Combinations::<5, 3>::new() {
            let [x, y, z] = select(&community, triple);
            let score = tables.score(&[a, b, x, y, z]);
            if best.map_or(true, |s| score < s) {
                best = Some(score);
            }
        }
    }
    best.map_or(HandRank::Invalid, HandRank::from_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::{evaluate5, HandCategory};

    #[test]
    fn board_quads_need_hole_pair() {
        // Board trips plus a hole pair of the board's pair rank make quads.
        let community = ["Kc", "Kd", "Kh", "2c", "2d"];
        let a = evaluate_omaha(community, ["As", "Qs", "3c", "4d"]);
        let b = evaluate_omaha(community, ["2h", "2s", "Ac", "9d"]);
        assert_eq!(a.category(), Some(HandCategory::ThreeOfAKind));
        assert_eq!(b.category(), Some(HandCategory::FourOfAKind));
        assert!(b > a);
    }

    #[test]
    fn board_straight_does_not_play_alone() {
        let rank = evaluate_omaha(["9c", "Td", "Jh", "Qs", "Kc"], ["2c", "2d", "3h", "4s"]);
        assert_eq!(rank.category(), Some(HandCategory::OnePair));
    }

    #[test]
    fn matches_exhaustive_split() {
        let community = ["Ah", "Kh", "Qh", "Jh", "2c"];
        let hole = ["Th", "9h", "3d", "4s"];
        let mut best = HandRank::Invalid;
        for i in 0..4 {
            for j in (i + 1)..4 {
                for a in 0..5 {
                    for b in (a + 1)..5 {
                        for c in (b + 1)..5 {
                            let r = evaluate5([
                                hole[i],
                                hole[j],
                                community[a],
                                community[b],
                                community[c],
                            ]);
                            best = best.max(r);
                        }
                    }
                }
            }
        }
        assert_eq!(evaluate_omaha(community, hole), best);
        assert_eq!(best.score(), 1);
    }

    #[test]
    fn invalid_or_shared_cards_are_rejected() {
        let community = ["Ac", "Kd", "Qh", "Js", "2c"];
        assert_eq!(evaluate_omaha(community, ["Ac", "3c", "4c", "5c"]), HandRank::Invalid);
        assert_eq!(evaluate_omaha(community, ["3c", "3c", "4c", "5c"]), HandRank::Invalid);
        assert_eq!(evaluate_omaha(community, ["3c", "Zc", "4c", "5c"]), HandRank::Invalid);
        assert_eq!(evaluate_omaha([0, 1, 2, 3, 4], [5, 6, 7, 99]), HandRank::Invalid);
    }
}
