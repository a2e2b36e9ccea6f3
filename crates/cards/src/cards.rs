// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card and hand definitions.
use std::fmt;
use thiserror::Error;

use crate::Dealer;

/// Errors reported by card and hand operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardsError {
    /// A card value outside the `Card::MIN..=Card::MAX` range.
    #[error("invalid card value {0}, expected {min}..={max}", min = Card::MIN, max = Card::MAX)]
    InvalidValue(u8),
    /// A swap targeted a slot that is not in the hand.
    #[error("invalid card index {0} to swap")]
    InvalidIndex(usize),
    /// A stacked dealer was created without cards.
    #[error("stacked dealer needs at least one card")]
    EmptyStack,
}

/// A numbered card.
///
/// Cards hold a value between [Card::MIN] and [Card::MAX] inclusive and never
/// change once drawn.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card(pub(crate) u8);

impl Card {
    /// The lowest card value.
    pub const MIN: u8 = 1;
    /// The highest card value.
    pub const MAX: u8 = 8;

    /// Creates a card with the given value.
    pub fn new(value: u8) -> Result<Card, CardsError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CardsError::InvalidValue(value))
        }
    }

    /// The card value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A competitor hand, an ordered pair of cards.
///
/// Hands are values: dealing and swapping return a new hand, and the score and
/// total are always derived from the cards so they cannot go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; 2]);

impl Hand {
    /// Number of cards in a hand.
    pub const SIZE: usize = 2;

    /// Creates a hand from two cards.
    pub fn new(first: Card, second: Card) -> Self {
        Self([first, second])
    }

    /// Deals a fresh hand drawing two cards from the dealer.
    pub fn deal<D: Dealer + ?Sized>(dealer: &mut D) -> Self {
        let first = dealer.draw();
        let second = dealer.draw();
        Self([first, second])
    }

    /// Returns a new hand with the card at `index` replaced by a new draw.
    ///
    /// An index outside the hand returns [CardsError::InvalidIndex] without
    /// drawing from the dealer.
    pub fn swap<D>(&self, index: usize, dealer: &mut D) -> Result<Hand, CardsError>
    where
        D: Dealer + ?Sized,
    {
        if index >= Self::SIZE {
            return Err(CardsError::InvalidIndex(index));
        }

        let mut cards = self.0;
        cards[index] = dealer.draw();
        Ok(Self(cards))
    }

    /// The first card.
    pub fn first(&self) -> Card {
        self.0[0]
    }

    /// The second card.
    pub fn second(&self) -> Card {
        self.0[1]
    }

    /// The hand cards in slot order.
    pub fn cards(&self) -> [Card; 2] {
        self.0
    }

    /// The hand score, the absolute difference between the two cards.
    ///
    /// Lower is better, the result is always in `0..=7`.
    pub fn score(&self) -> u8 {
        self.0[0].value().abs_diff(self.0[1].value())
    }

    /// The sum of the two cards, used to break score ties.
    pub fn total(&self) -> u8 {
        self.0[0].value() + self.0[1].value()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] and [{}]", self.0[0], self.0[1])
    }
}
