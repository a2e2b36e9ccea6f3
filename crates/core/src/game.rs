// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The round engine.
use anyhow::{Result, bail};
use log::{debug, warn};

use numbergame_cards::{CardsError, Dealer, Hand};

use crate::{COMPUTER_NAME, Competitor, GameResult, Sink, competitor::player_name};

/// Number of rounds in a game.
pub const ROUNDS: u8 = 3;

/// The computer keeps swapping while its score is at least this value.
pub const SWAP_THRESHOLD: u8 = 3;

/// The maximum number of computer swaps in a round.
pub const MAX_COMPUTER_SWAPS: usize = 2;

/// The first line of the game log.
pub const LOG_HEADER: &str = "--- Number Game Log ---";

/// The engine phase within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting to deal new hands.
    AwaitingDeal,
    /// Waiting for the human swap choice.
    AwaitingHumanChoice,
    /// Waiting for the computer to play.
    AwaitingComputerPolicy,
    /// Both competitors played this round.
    RoundComplete,
    /// All rounds have been played.
    GameOver,
}

/// The human choice for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapChoice {
    /// Keep both cards.
    Keep,
    /// Swap the first card.
    First,
    /// Swap the second card.
    Second,
}

impl SwapChoice {
    /// Parses a console answer, `0` keeps, `1` and `2` swap a card.
    ///
    /// Any integer spelling is accepted (`01`, `+1`), blank input keeps and
    /// anything else is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Some(Self::Keep);
        }

        match input.parse::<i32>() {
            Ok(0) => Some(Self::Keep),
            Ok(1) => Some(Self::First),
            Ok(2) => Some(Self::Second),
            _ => None,
        }
    }

    /// The hand slot to swap.
    pub fn slot(&self) -> Option<usize> {
        match self {
            Self::Keep => None,
            Self::First => Some(0),
            Self::Second => Some(1),
        }
    }
}

/// A game between a human and the computer.
///
/// The engine owns the dealer and the sinks, every event is written to the
/// game log and the final scores are appended when the game finishes. Sink
/// write errors are reported with a warning and never stop the game.
#[derive(Debug)]
pub struct Game<D, L, S> {
    round: u8,
    phase: Phase,
    finished: bool,
    human: Competitor,
    computer: Competitor,
    dealer: D,
    events: L,
    scores: S,
}

impl<D, L, S> Game<D, L, S>
where
    D: Dealer,
    L: Sink,
    S: Sink,
{
    /// Starts a game and deals the first round.
    pub fn new(name: &str, mut dealer: D, events: L, scores: S) -> Self {
        let human = Competitor::new(player_name(name), Hand::deal(&mut dealer));
        let computer = Competitor::new(COMPUTER_NAME, Hand::deal(&mut dealer));

        let mut game = Self {
            round: 1,
            phase: Phase::AwaitingDeal,
            finished: false,
            human,
            computer,
            dealer,
            events,
            scores,
        };

        game.record(LOG_HEADER);
        game.enter_human_choice();
        game
    }

    /// The current round, starting from 1.
    pub fn round(&self) -> u8 {
        self.round
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The human competitor.
    pub fn human(&self) -> &Competitor {
        &self.human
    }

    /// The computer competitor.
    pub fn computer(&self) -> &Competitor {
        &self.computer
    }

    /// Deals new hands for the next round.
    pub fn deal(&mut self) -> Result<()> {
        self.check_phase(Phase::AwaitingDeal, "deal")?;

        self.human.deal(&mut self.dealer);
        self.computer.deal(&mut self.dealer);
        self.enter_human_choice();

        Ok(())
    }

    /// Applies the human swap choice.
    pub fn human_choice(&mut self, choice: SwapChoice) -> Result<()> {
        if let Some(slot) = choice.slot() {
            return self.human_swap(slot);
        }

        self.check_phase(Phase::AwaitingHumanChoice, "apply the human choice")?;

        let msg = format!("{} kept original cards.", self.human.name());
        self.record(&msg);

        self.phase = Phase::AwaitingComputerPolicy;
        Ok(())
    }

    /// The human swaps the card at `index`.
    ///
    /// An index outside the hand is reported and skipped, the round goes on
    /// to the computer turn as if the human kept the cards.
    pub fn human_swap(&mut self, index: usize) -> Result<()> {
        self.check_phase(Phase::AwaitingHumanChoice, "apply the human choice")?;

        match self.human.swap(index, &mut self.dealer) {
            Ok(hand) => {
                let msg = format!(
                    "{} swapped card {} and got {hand} (Score: {}).",
                    self.human.name(),
                    index + 1,
                    hand.score()
                );
                self.record(&msg);
            }
            Err(e) => {
                let name = self.human.name().to_string();
                self.report_swap_error(&name, e);
            }
        }

        self.phase = Phase::AwaitingComputerPolicy;
        Ok(())
    }

    /// Plays the computer turn and returns the number of swap attempts.
    ///
    /// The computer swaps a random card while its score is at least
    /// [SWAP_THRESHOLD], up to [MAX_COMPUTER_SWAPS] times.
    pub fn computer_turn(&mut self) -> Result<usize> {
        self.check_phase(Phase::AwaitingComputerPolicy, "play the computer turn")?;

        let mut attempts = 0;
        while self.computer.score() >= SWAP_THRESHOLD && attempts < MAX_COMPUTER_SWAPS {
            let slot = self.dealer.pick_slot();
            attempts += 1;

            match self.computer.swap(slot, &mut self.dealer) {
                Ok(hand) => {
                    let msg = format!(
                        "{} swapped card {}. Now has {hand} (Score: {})",
                        self.computer.name(),
                        slot + 1,
                        hand.score()
                    );
                    self.record(&msg);
                }
                Err(e) => {
                    let name = self.computer.name().to_string();
                    self.report_swap_error(&name, e);
                }
            }
        }

        if attempts == 0 {
            let msg = format!("{} kept original cards.", self.computer.name());
            self.record(&msg);
        }

        self.phase = Phase::RoundComplete;
        Ok(attempts)
    }

    /// Ends the round, after the last round the game is over.
    pub fn end_round(&mut self) -> Result<()> {
        self.check_phase(Phase::RoundComplete, "end the round")?;

        if self.round >= ROUNDS {
            self.phase = Phase::GameOver;
        } else {
            self.round += 1;
            self.phase = Phase::AwaitingDeal;
        }

        Ok(())
    }

    /// Evaluates the winner, logs the result and saves the final scores.
    ///
    /// Only valid once, after the last round.
    pub fn finish(&mut self) -> Result<GameResult> {
        self.check_phase(Phase::GameOver, "finish")?;
        if self.finished {
            bail!("Game already finished");
        }

        self.finished = true;

        let msg = format!(
            "Final hands -> {}: {} ({}), {}: {} ({})",
            self.human.name(),
            self.human.hand(),
            self.human.score(),
            self.computer.name(),
            self.computer.hand(),
            self.computer.score(),
        );
        self.record(&msg);

        let result = GameResult::new(self.human.clone(), self.computer.clone());
        self.record(&result.to_string());

        // The trailing newline leaves a blank line between sessions.
        let block = format!(
            "--- Final Score ---\n{}: {}\n{}: {}\n",
            self.human.name(),
            self.human.score(),
            self.computer.name(),
            self.computer.score(),
        );
        if let Err(e) = self.scores.append(&block) {
            warn!("Error saving final scores: {e}");
        }

        Ok(result)
    }

    fn enter_human_choice(&mut self) {
        let lines = [&self.human, &self.computer].map(|c| {
            format!("Round {}: {} was dealt {}.", self.round, c.name(), c.hand())
        });
        for line in lines {
            self.record(&line);
        }

        self.phase = Phase::AwaitingHumanChoice;
    }

    fn report_swap_error(&mut self, name: &str, err: CardsError) {
        let msg = format!("{name} could not swap: {err}");
        warn!("{msg}");
        self.record(&msg);
    }

    fn check_phase(&self, expected: Phase, action: &str) -> Result<()> {
        if self.phase != expected {
            bail!("Cannot {action} in round {} while {:?}", self.round, self.phase);
        }

        Ok(())
    }

    /// Writes a line to the game log.
    fn record(&mut self, line: &str) {
        debug!("{line}");
        if let Err(e) = self.events.append(line) {
            warn!("Error writing to game log: {e}");
        }
    }
}
