// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Number Game cards types.
//!
//! This crate defines numbered cards and two cards hands:
//!
//! ```
//! # use numbergame_cards::{Card, Hand};
//! let hand = Hand::new(Card::new(3).unwrap(), Card::new(7).unwrap());
//! assert_eq!(hand.score(), 4);
//! assert_eq!(hand.total(), 10);
//! ```
//!
//! and a [Dealer] trait for drawing cards. A [RandomDealer] draws uniformly
//! distributed cards, a [Stacked] dealer replays a fixed sequence:
//!
//! ```
//! # use numbergame_cards::{Hand, Stacked};
//! let mut dealer = Stacked::new(&[2, 2, 8], &[]).unwrap();
//! let hand = Hand::deal(&mut dealer);
//! assert_eq!(hand.score(), 0);
//!
//! // Swapping returns a new hand with the card replaced.
//! let hand = hand.swap(1, &mut dealer).unwrap();
//! assert_eq!(hand.to_string(), "[2] and [8]");
//! assert_eq!(hand.score(), 6);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, CardsError, Hand};

mod dealer;
pub use dealer::{Dealer, RandomDealer, Stacked};
