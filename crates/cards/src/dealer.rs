// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Sources of cards.
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{Card, CardsError, Hand};

/// A source of random cards and hand slots.
pub trait Dealer {
    /// Draws a card.
    fn draw(&mut self) -> Card;

    /// Picks a hand slot to swap.
    fn pick_slot(&mut self) -> usize;
}

impl<T: Dealer + ?Sized> Dealer for &mut T {
    fn draw(&mut self) -> Card {
        (**self).draw()
    }

    fn pick_slot(&mut self) -> usize {
        (**self).pick_slot()
    }
}

/// A dealer that draws uniformly distributed cards from a random generator.
#[derive(Debug)]
pub struct RandomDealer<R = StdRng> {
    rng: R,
}

impl RandomDealer<StdRng> {
    /// Creates a dealer seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a dealer with a seeded generator.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomDealer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomDealer<R> {
    /// Creates a dealer with user initialized randomness.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Dealer for RandomDealer<R> {
    fn draw(&mut self) -> Card {
        Card(self.rng.random_range(Card::MIN..=Card::MAX))
    }

    fn pick_slot(&mut self) -> usize {
        self.rng.random_range(0..Hand::SIZE)
    }
}

/// A stacked dealer that cycles through fixed cards and slots.
///
/// Cards are drawn in order and wrap around when the stack runs out, same for
/// slots. With no slots every pick returns the first slot.
#[derive(Debug, Clone)]
pub struct Stacked {
    cards: Vec<Card>,
    slots: Vec<usize>,
    next_card: usize,
    next_slot: usize,
}

impl Stacked {
    /// Creates a stacked dealer from card values and slot picks.
    ///
    /// Slots are returned as given, so a stack can hand out slots that are
    /// not in a hand.
    pub fn new(values: &[u8], slots: &[usize]) -> Result<Self, CardsError> {
        let cards = values
            .iter()
            .map(|v| Card::new(*v))
            .collect::<Result<Vec<_>, _>>()?;

        if cards.is_empty() {
            return Err(CardsError::EmptyStack);
        }

        Ok(Self {
            cards,
            slots: slots.to_vec(),
            next_card: 0,
            next_slot: 0,
        })
    }
}

impl Dealer for Stacked {
    fn draw(&mut self) -> Card {
        let card = self.cards[self.next_card];
        self.next_card = (self.next_card + 1) % self.cards.len();
        card
    }

    fn pick_slot(&mut self) -> usize {
        if self.slots.is_empty() {
            return 0;
        }

        let slot = self.slots[self.next_slot];
        self.next_slot = (self.next_slot + 1) % self.slots.len();
        slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_dealer_ranges() {
        let mut dealer = RandomDealer::seeded(13);
        let mut seen = [false; Card::MAX as usize + 1];

        for _ in 0..1_000 {
            let card = dealer.draw();
            assert!((Card::MIN..=Card::MAX).contains(&card.value()));
            seen[card.value() as usize] = true;

            assert!(dealer.pick_slot() < Hand::SIZE);
        }

        // Every value shows up with a thousand draws.
        assert!(seen[Card::MIN as usize..].iter().all(|s| *s));
    }

    #[test]
    fn random_dealer_both_slots() {
        let mut dealer = RandomDealer::seeded(7);
        let mut counts = [0; Hand::SIZE];
        for _ in 0..200 {
            counts[dealer.pick_slot()] += 1;
        }

        assert!(counts.iter().all(|c| *c > 0));
    }

    #[test]
    fn stacked_cycles() {
        let mut dealer = Stacked::new(&[1, 2, 3], &[1, 0]).unwrap();
        let drawn = (0..5).map(|_| dealer.draw().value()).collect::<Vec<_>>();
        assert_eq!(drawn, vec![1, 2, 3, 1, 2]);

        let slots = (0..3).map(|_| dealer.pick_slot()).collect::<Vec<_>>();
        assert_eq!(slots, vec![1, 0, 1]);
    }

    #[test]
    fn stacked_validation() {
        assert_eq!(Stacked::new(&[], &[]).unwrap_err(), CardsError::EmptyStack);
        assert_eq!(
            Stacked::new(&[3, 9], &[]).unwrap_err(),
            CardsError::InvalidValue(9)
        );

        let mut dealer = Stacked::new(&[5], &[]).unwrap();
        assert_eq!(dealer.pick_slot(), 0);
    }
}
