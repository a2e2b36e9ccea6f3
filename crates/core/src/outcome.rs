// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Winner evaluation.
use std::{cmp::Ordering, fmt};

use numbergame_cards::Hand;

use crate::Competitor;

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The human has the lower score.
    HumanWins,
    /// The computer has the lower score.
    ComputerWins,
    /// Same score, the human has the lower total.
    HumanWinsOnTotal,
    /// Same score, the computer has the lower total.
    ComputerWinsOnTotal,
    /// Same score and same total.
    Tie,
}

impl Outcome {
    /// Evaluates the final hands, lower score wins and lower total breaks ties.
    pub fn evaluate(human: Hand, computer: Hand) -> Outcome {
        match human.score().cmp(&computer.score()) {
            Ordering::Less => Outcome::HumanWins,
            Ordering::Greater => Outcome::ComputerWins,
            Ordering::Equal => match human.total().cmp(&computer.total()) {
                Ordering::Less => Outcome::HumanWinsOnTotal,
                Ordering::Greater => Outcome::ComputerWinsOnTotal,
                Ordering::Equal => Outcome::Tie,
            },
        }
    }
}

/// The final result of a game.
#[derive(Debug, Clone)]
pub struct GameResult {
    /// How the game ended.
    pub outcome: Outcome,
    /// The human final state.
    pub human: Competitor,
    /// The computer final state.
    pub computer: Competitor,
}

impl GameResult {
    /// Evaluates the result for the final competitors.
    pub fn new(human: Competitor, computer: Competitor) -> Self {
        Self {
            outcome: Outcome::evaluate(human.hand(), computer.hand()),
            human,
            computer,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (human, computer) = (self.human.name(), self.computer.name());
        match self.outcome {
            Outcome::HumanWins => write!(f, "{human} wins!"),
            Outcome::ComputerWins => write!(f, "{computer} wins!"),
            Outcome::HumanWinsOnTotal => {
                write!(f, "Draw on score, but {human} wins by lower total value!")
            }
            Outcome::ComputerWinsOnTotal => {
                write!(f, "Draw on score, but {computer} wins by lower total value!")
            }
            Outcome::Tie => write!(f, "It's a perfect tie!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::COMPUTER_NAME;
    use numbergame_cards::Card;

    fn hand(a: u8, b: u8) -> Hand {
        Hand::new(Card::new(a).unwrap(), Card::new(b).unwrap())
    }

    // The same outcome seen with the competitors swapped.
    fn reversed(outcome: Outcome) -> Outcome {
        match outcome {
            Outcome::HumanWins => Outcome::ComputerWins,
            Outcome::ComputerWins => Outcome::HumanWins,
            Outcome::HumanWinsOnTotal => Outcome::ComputerWinsOnTotal,
            Outcome::ComputerWinsOnTotal => Outcome::HumanWinsOnTotal,
            Outcome::Tie => Outcome::Tie,
        }
    }

    fn result(human: Hand, computer: Hand) -> GameResult {
        GameResult::new(
            Competitor::new("Alice", human),
            Competitor::new(COMPUTER_NAME, computer),
        )
    }

    #[test]
    fn lower_score_wins() {
        let r = result(hand(3, 4), hand(3, 7));
        assert_eq!(r.outcome, Outcome::HumanWins);
        assert_eq!(r.to_string(), "Alice wins!");

        let r = result(hand(3, 7), hand(2, 2));
        assert_eq!(r.outcome, Outcome::ComputerWins);
        assert_eq!(r.to_string(), "Computer wins!");
    }

    #[test]
    fn lower_total_breaks_ties() {
        // Score wins over total.
        let r = result(hand(8, 8), hand(1, 2));
        assert_eq!(r.outcome, Outcome::HumanWins);

        let r = result(hand(2, 4), hand(5, 7));
        assert_eq!(r.outcome, Outcome::HumanWinsOnTotal);
        assert_eq!(
            r.to_string(),
            "Draw on score, but Alice wins by lower total value!"
        );

        let r = result(hand(6, 8), hand(1, 3));
        assert_eq!(r.outcome, Outcome::ComputerWinsOnTotal);
        assert_eq!(
            r.to_string(),
            "Draw on score, but Computer wins by lower total value!"
        );
    }

    #[test]
    fn perfect_tie() {
        let r = result(hand(4, 5), hand(5, 4));
        assert_eq!(r.outcome, Outcome::Tie);
        assert_eq!(r.to_string(), "It's a perfect tie!");
    }

    #[test]
    fn evaluation_is_symmetric() {
        let values = Card::MIN..=Card::MAX;
        let hands = values
            .clone()
            .flat_map(|a| values.clone().map(move |b| hand(a, b)))
            .collect::<Vec<_>>();

        for h in &hands {
            for c in &hands {
                let outcome = Outcome::evaluate(*h, *c);
                assert_eq!(Outcome::evaluate(*c, *h), reversed(outcome), "{h} vs {c}");
            }
        }
    }
}
