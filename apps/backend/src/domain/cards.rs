use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

/// Numeric rank value: 2..=10 face value, J=11, Q=12, K=13, A=14.
pub fn rank_value(rank: Rank) -> u8 {
    match rank {
        Rank::Two => 2,
        Rank::Three => 3,
        Rank::Four => 4,
        Rank::Five => 5,
        Rank::Six => 6,
        Rank::Seven => 7,
        Rank::Eight => 8,
        Rank::Nine => 9,
        Rank::Ten => 10,
        Rank::Jack => 11,
        Rank::Queen => 12,
        Rank::King => 13,
        Rank::Ace => 14,
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

// Note: Ord/Eq on Card is only for stable sorting: suit order C<D<H<S then rank order.
// Do not use for trick resolution; that goes through card_beats.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rank_char = match self.rank {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };
        let suit_char = match self.suit {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };
        let s = format!("{rank_char}{suit_char}");
        serializer.serialize_str(&s)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_card_str(&s).map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}

pub fn parse_card_str(s: &str) -> Result<Card, DomainError> {
    let mut chars = s.chars();
    let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(DomainError::validation(
            ValidationKind::ParseCard,
            format!("Invalid card token: {s:?}"),
        ));
    };
    let rank = match rank_ch {
        '2' => Rank::Two,
        '3' => Rank::Three,
        '4' => Rank::Four,
        '5' => Rank::Five,
        '6' => Rank::Six,
        '7' => Rank::Seven,
        '8' => Rank::Eight,
        '9' => Rank::Nine,
        'T' => Rank::Ten,
        'J' => Rank::Jack,
        'Q' => Rank::Queen,
        'K' => Rank::King,
        'A' => Rank::Ace,
        _ => {
            return Err(DomainError::validation(
                ValidationKind::ParseCard,
                format!("Invalid card token: {s:?}"),
            ))
        }
    };
    let suit = match suit_ch {
        'C' => Suit::Clubs,
        'D' => Suit::Diamonds,
        'H' => Suit::Hearts,
        'S' => Suit::Spades,
        _ => {
            return Err(DomainError::validation(
                ValidationKind::ParseCard,
                format!("Invalid card token: {s:?}"),
            ))
        }
    };
    Ok(Card { suit, rank })
}

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Whether `a` beats `b` in a trick with the given lead suit.
///
/// Spades are permanent trump: any spade beats any non-spade, spades compare
/// by rank among themselves, otherwise only lead-suit cards can win.
pub fn card_beats(a: Card, b: Card, lead: Suit) -> bool {
    let a_trump = a.suit == Suit::Spades;
    let b_trump = b.suit == Suit::Spades;
    if a_trump && !b_trump {
        return true;
    }
    if b_trump && !a_trump {
        return false;
    }
    if a_trump && b_trump {
        return a.rank > b.rank;
    }
    let a_follows = a.suit == lead;
    let b_follows = b.suit == lead;
    if a_follows && !b_follows {
        return true;
    }
    if b_follows && !a_follows {
        return false;
    }
    if a_follows && b_follows {
        return a.rank > b.rank;
    }
    false
}

#[cfg(test)]
pub fn parse_cards(tokens: &[&str]) -> Vec<Card> {
    tokens
        .iter()
        .map(|s| parse_card_str(s).expect("valid card token"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip() {
        let cases = [
            (Rank::Ace, Suit::Spades, "AS"),
            (Rank::Ten, Suit::Diamonds, "TD"),
            (Rank::Three, Suit::Hearts, "3H"),
            (Rank::Nine, Suit::Clubs, "9C"),
        ];
        for (rank, suit, token) in cases {
            let c = Card { suit, rank };
            let s = serde_json::to_string(&c).unwrap();
            assert_eq!(s, format!("\"{token}\""));
            let decoded: Card = serde_json::from_str(&s).unwrap();
            assert_eq!(decoded, c);
        }
    }

    #[test]
    fn rejects_invalid_tokens() {
        for tok in ["1H", "11S", "Ah", "ZZ", "", "10H"] {
            let res: Result<Card, _> = serde_json::from_str(&format!("\"{tok}\""));
            assert!(res.is_err(), "token {tok:?} should be rejected");
        }
    }

    #[test]
    fn rank_values_are_total_order() {
        assert_eq!(rank_value(Rank::Two), 2);
        assert_eq!(rank_value(Rank::Ten), 10);
        assert_eq!(rank_value(Rank::Jack), 11);
        assert_eq!(rank_value(Rank::Queen), 12);
        assert_eq!(rank_value(Rank::King), 13);
        assert_eq!(rank_value(Rank::Ace), 14);
    }

    #[test]
    fn spade_beats_any_non_spade() {
        let two_spades = Card {
            suit: Suit::Spades,
            rank: Rank::Two,
        };
        let ace_hearts = Card {
            suit: Suit::Hearts,
            rank: Rank::Ace,
        };
        assert!(card_beats(two_spades, ace_hearts, Suit::Hearts));
        assert!(!card_beats(ace_hearts, two_spades, Suit::Hearts));
    }

    #[test]
    fn within_spades_rank_decides() {
        let ace = Card {
            suit: Suit::Spades,
            rank: Rank::Ace,
        };
        let queen = Card {
            suit: Suit::Spades,
            rank: Rank::Queen,
        };
        assert!(card_beats(ace, queen, Suit::Clubs));
        assert!(!card_beats(queen, ace, Suit::Clubs));
    }

    #[test]
    fn off_suit_non_spade_never_wins() {
        let ace_diamonds = Card {
            suit: Suit::Diamonds,
            rank: Rank::Ace,
        };
        let two_hearts = Card {
            suit: Suit::Hearts,
            rank: Rank::Two,
        };
        assert!(!card_beats(ace_diamonds, two_hearts, Suit::Hearts));
        assert!(card_beats(two_hearts, ace_diamonds, Suit::Hearts));
    }

    #[test]
    fn test_hand_has_suit() {
        let hand = parse_cards(&["2C", "AD"]);
        assert!(hand_has_suit(&hand, Suit::Clubs));
        assert!(!hand_has_suit(&hand, Suit::Hearts));
    }
}
