//! poker-rank: lookup-table poker hand evaluator
//!
//! Goals:
//! - Score any 5, 6 or 7 card hand, and 4 + 5 card Omaha hands, in constant time
//! - Scores compatible with the classic 1..=7462 scale (1 is a royal flush)
//! - No panics for bad input; malformed or repeated cards give [`HandRank::Invalid`]
//!
//! The rank tables are generated once per process on first use (see
//! [`evaluator::warm_up`]) and shared read-only between threads afterwards.
//!
//! ## Quick start
//! ```
//! use poker_rank::evaluator::{evaluate5, evaluate7, HandCategory, HandRank};
//!
//! let royal = evaluate5(["Ah", "Kh", "Qh", "Jh", "Th"]);
//! assert_eq!(royal.category(), Some(HandCategory::StraightFlush));
//!
//! let holdem = evaluate7(["Ah", "Kh", "Qh", "Jh", "Th", "9h", "2c"]);
//! assert_eq!(holdem, royal);
//!
//! assert_eq!(evaluate5(["Ah", "Ah", "Qh", "Jh", "Th"]), HandRank::Invalid);
//! ```
//!
//! ## Features
//! - `omaha` (default): [`variants::omaha::evaluate_omaha`]
//! - `bench`: criterion benchmarks (`cargo bench --features bench`)

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod variants;

pub use cards::{card_string_to_id, card_to_id, Card, Rank, Suit, INVALID_CARD_ID};
pub use evaluator::{evaluate5, evaluate6, evaluate7, evaluate_hand, HandCategory, HandRank};
#[cfg(feature = "omaha")]
pub use variants::omaha::evaluate_omaha;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
