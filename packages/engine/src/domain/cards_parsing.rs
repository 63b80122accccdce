//! Card parsing and formatting for the short code format (e.g. "3C", "10H",
//! "Joker"). Codes are the only wire and display representation.

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use super::errors::DomainError;

fn rank_token(rank: Rank) -> &'static str {
    match rank {
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
        Rank::Two => "2",
    }
}

fn rank_from_token(token: &str) -> Option<Rank> {
    let rank = match token {
        "3" => Rank::Three,
        "4" => Rank::Four,
        "5" => Rank::Five,
        "6" => Rank::Six,
        "7" => Rank::Seven,
        "8" => Rank::Eight,
        "9" => Rank::Nine,
        "10" => Rank::Ten,
        "J" => Rank::Jack,
        "Q" => Rank::Queen,
        "K" => Rank::King,
        "A" => Rank::Ace,
        "2" => Rank::Two,
        _ => return None,
    };
    Some(rank)
}

fn suit_from_letter(letter: &str) -> Option<Suit> {
    let suit = match letter {
        "C" => Suit::Clubs,
        "D" => Suit::Diamonds,
        "H" => Suit::Hearts,
        "S" => Suit::Spades,
        _ => return None,
    };
    Some(suit)
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Joker => f.write_str("Joker"),
            Card::Suited { rank, suit } => {
                let letter = match suit {
                    Suit::Clubs => "C",
                    Suit::Diamonds => "D",
                    Suit::Hearts => "H",
                    Suit::Spades => "S",
                };
                write!(f, "{}{letter}", rank_token(*rank))
            }
        }
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "Joker" {
            return Ok(Card::Joker);
        }
        if !s.is_ascii() || s.len() < 2 {
            return Err(DomainError::ParseCard(s.to_string()));
        }
        let (rank_str, suit_str) = s.split_at(s.len() - 1);
        let rank =
            rank_from_token(rank_str).ok_or_else(|| DomainError::ParseCard(s.to_string()))?;
        let suit =
            suit_from_letter(suit_str).ok_or_else(|| DomainError::ParseCard(s.to_string()))?;
        Ok(Card::Suited { rank, suit })
    }
}

/// Non-panicking helper to parse card code tokens into Card instances.
/// Fails on the first invalid token.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
