//! Deck construction and dealing.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::rules::{HAND_SIZE, PLAYERS};
use crate::domain::{Card, Rank, Suit};

/// Generate the full 52-card deck in canonical order.
pub fn full_deck() -> Vec<Card> {
    let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
    let ranks = [
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
    ];

    let mut deck = Vec::with_capacity(52);
    for suit in suits {
        for rank in ranks {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Shuffle and deal four 13-card hands.
///
/// The deck is shuffled with an unbiased Fisher-Yates permutation and split
/// into contiguous 13-card slices, seat `i` receiving slice `i`. Hands are
/// sorted for display. `seed` pins the permutation for deterministic tests;
/// `None` draws from OS entropy.
pub fn deal_hands(seed: Option<u64>) -> [Vec<Card>; PLAYERS] {
    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_os_rng(),
    };

    let mut deck = full_deck();
    deck.shuffle(&mut rng);

    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for (seat, hand_slot) in hands.iter_mut().enumerate() {
        let start = seat * HAND_SIZE;
        let mut hand = deck[start..start + HAND_SIZE].to_vec();
        hand.sort();
        *hand_slot = hand;
    }
    hands
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn full_deck_has_52_unique_cards() {
        let deck = full_deck();
        assert_eq!(deck.len(), 52);
        let unique: HashSet<Card> = deck.into_iter().collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn deal_partitions_the_deck() {
        let hands = deal_hands(Some(42));
        let mut all: Vec<Card> = Vec::new();
        for hand in &hands {
            assert_eq!(hand.len(), 13);
            all.extend(hand.iter().copied());
        }
        let unique: HashSet<Card> = all.iter().copied().collect();
        assert_eq!(unique.len(), 52, "hands must not overlap");
        let full: HashSet<Card> = full_deck().into_iter().collect();
        assert_eq!(unique, full, "union of hands must be the full deck");
    }

    #[test]
    fn deal_is_deterministic_given_seed() {
        assert_eq!(deal_hands(Some(12345)), deal_hands(Some(12345)));
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(deal_hands(Some(12345)), deal_hands(Some(54321)));
    }

    #[test]
    fn hands_are_sorted() {
        let hands = deal_hands(Some(99999));
        for hand in &hands {
            let mut sorted = hand.clone();
            sorted.sort();
            assert_eq!(hand, &sorted);
        }
    }
}
