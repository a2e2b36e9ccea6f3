// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Number Game core types.
//!
//! A [Game] plays three rounds between a human and the computer: each round
//! deals two cards to both competitors, applies the human [SwapChoice] and the
//! computer swap policy. The lowest score (difference between the two cards)
//! wins, with the lowest total breaking ties.
//!
//! ```
//! # use numbergame_cards::Stacked;
//! # use numbergame_core::{Game, MemorySink, Phase, SwapChoice};
//! let dealer = Stacked::new(&[3, 7, 2, 2], &[]).unwrap();
//! let mut game = Game::new("Alice", dealer, MemorySink::default(), MemorySink::default());
//!
//! while game.phase() != Phase::GameOver {
//!     if game.phase() == Phase::AwaitingDeal {
//!         game.deal().unwrap();
//!     }
//!
//!     game.human_choice(SwapChoice::Keep).unwrap();
//!     game.computer_turn().unwrap();
//!     game.end_round().unwrap();
//! }
//!
//! let result = game.finish().unwrap();
//! assert_eq!(result.to_string(), "Computer wins!");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod competitor;
pub use competitor::{COMPUTER_NAME, Competitor, DEFAULT_NAME};

pub mod game;
pub use game::{Game, Phase, SwapChoice};

pub mod outcome;
pub use outcome::{GameResult, Outcome};

pub mod sink;
pub use sink::{FileSink, MemorySink, Sink};
