//! Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::{Card, Rank, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(vec![Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades])
}

pub fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(vec![
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ])
}

pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

/// Four distinct cards, as dealt into one trick.
pub fn four_distinct_cards() -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(crate::domain::dealing::full_deck(), 4)
        .prop_shuffle()
        .prop_filter("exactly four cards", |v| v.len() == 4)
}
