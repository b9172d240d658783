//! Poker variants with their own card-usage rules.

#[cfg(feature = "omaha")]
pub mod omaha;
