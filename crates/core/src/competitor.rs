// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game competitors.
use numbergame_cards::{CardsError, Dealer, Hand};

/// The name used when the human does not enter one.
pub const DEFAULT_NAME: &str = "Player";

/// The computer competitor name.
pub const COMPUTER_NAME: &str = "Computer";

/// Returns the trimmed name or [DEFAULT_NAME] if the input is blank.
pub fn player_name(input: &str) -> String {
    let name = input.trim();
    if name.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// A named competitor holding one hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Competitor {
    name: String,
    hand: Hand,
}

impl Competitor {
    /// Creates a competitor with the given hand.
    pub fn new(name: impl Into<String>, hand: Hand) -> Self {
        Self {
            name: name.into(),
            hand,
        }
    }

    /// This competitor name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// This competitor hand.
    pub fn hand(&self) -> Hand {
        self.hand
    }

    /// The current hand score.
    pub fn score(&self) -> u8 {
        self.hand.score()
    }

    /// The current hand total.
    pub fn total(&self) -> u8 {
        self.hand.total()
    }

    /// Replaces the hand with a freshly dealt one.
    pub fn deal<D: Dealer + ?Sized>(&mut self, dealer: &mut D) -> Hand {
        self.hand = Hand::deal(dealer);
        self.hand
    }

    /// Swaps the card at `index`, on error the hand is left as it was.
    pub fn swap<D>(&mut self, index: usize, dealer: &mut D) -> Result<Hand, CardsError>
    where
        D: Dealer + ?Sized,
    {
        self.hand = self.hand.swap(index, dealer)?;
        Ok(self.hand)
    }
}
