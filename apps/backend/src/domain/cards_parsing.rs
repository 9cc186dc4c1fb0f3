//! Card parsing from single-letter codes (e.g. "S", "C") and compact hands ("CSRRR")

use std::str::FromStr;

use super::cards_types::Card;
use crate::errors::domain::{DomainError, ValidationKind};

impl TryFrom<char> for Card {
    type Error = DomainError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        match letter.to_ascii_uppercase() {
            'R' => Ok(Card::FutileInvestigation),
            'S' => Ok(Card::ElderSign),
            'C' => Ok(Card::Cthulhu),
            'G' => Ok(Card::InsanitysGrasp),
            'E' => Ok(Card::EvilPresence),
            'M' => Ok(Card::Mirage),
            'P' => Ok(Card::Paranoia),
            'I' => Ok(Card::PrivateEye),
            _ => Err(DomainError::validation(
                ValidationKind::ParseCard,
                format!("Parse card: {letter}"),
            )),
        }
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Card::try_from(letter),
            _ => Err(DomainError::validation(
                ValidationKind::ParseCard,
                format!("Parse card: {s}"),
            )),
        }
    }
}

/// Parse a compact hand such as `"CSRRR"`. Whitespace is ignored.
pub fn parse_cards(letters: &str) -> Result<Vec<Card>, DomainError> {
    letters
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(Card::try_from)
        .collect()
}

/// Render cards back into their compact letter form.
pub fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(|c| c.letter()).collect()
}
