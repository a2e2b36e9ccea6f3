// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use std::io::{BufRead, Write};

use numbergame_cards::Dealer;
use numbergame_core::{
    Competitor, Game, GameResult, Phase, Sink, SwapChoice, competitor::player_name,
};

const CHOICE_PROMPT: &str = "Do you want to swap a card? (1 = First, 2 = Second, 0 = No): ";

/// A line based terminal.
#[derive(Debug)]
pub struct Terminal<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a terminal reading lines from `reader`.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Asks the player name, blank input uses the default name.
    pub fn read_name(&mut self) -> Result<String> {
        let line = self.prompt("Enter your name: ")?;
        Ok(player_name(line.as_deref().unwrap_or_default()))
    }

    /// Asks for a swap choice until the answer is valid.
    ///
    /// A blank line, or the end of input, keeps the cards.
    pub fn read_choice(&mut self) -> Result<SwapChoice> {
        loop {
            let Some(line) = self.prompt(CHOICE_PROMPT)? else {
                return Ok(SwapChoice::Keep);
            };

            if let Some(choice) = SwapChoice::parse(&line) {
                return Ok(choice);
            }

            writeln!(
                self.writer,
                "Invalid input. Please enter 0 (No), 1 (First), or 2 (Second)."
            )?;
        }
    }

    /// Waits for the player to press Enter.
    pub fn pause(&mut self) -> Result<()> {
        writeln!(self.writer, "Press Enter to continue...")?;
        self.writer.flush()?;
        self.read_line()?;
        Ok(())
    }

    /// Clears the screen.
    pub fn clear(&mut self) -> Result<()> {
        execute!(self.writer, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        Ok(())
    }

    fn print_final_hand(&mut self, c: &Competitor) -> Result<()> {
        writeln!(
            self.writer,
            "{}'s hand: {} - Score: {}",
            c.name(),
            c.hand(),
            c.score()
        )?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.writer, "{text}")?;
        self.writer.flush()?;
        self.read_line()
    }

    /// Reads a line without the line terminator, `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(Some(line))
    }
}

/// Plays a game on the terminal and returns the result.
pub fn run<R, W, D, L, S>(
    term: &mut Terminal<R, W>,
    dealer: D,
    events: L,
    scores: S,
) -> Result<GameResult>
where
    R: BufRead,
    W: Write,
    D: Dealer,
    L: Sink,
    S: Sink,
{
    let name = term.read_name()?;
    let mut game = Game::new(&name, dealer, events, scores);

    while game.phase() != Phase::GameOver {
        if game.phase() == Phase::AwaitingDeal {
            game.deal()?;
        }

        term.clear()?;
        writeln!(term.writer, "--- Round {} ---", game.round())?;

        let human = game.human();
        writeln!(
            term.writer,
            "Your cards: {} (Score: {})",
            human.hand(),
            human.score()
        )?;

        let choice = term.read_choice()?;
        game.human_choice(choice)?;

        if choice != SwapChoice::Keep {
            let human = game.human();
            writeln!(
                term.writer,
                "After swap: {} (Score: {})",
                human.hand(),
                human.score()
            )?;
        }

        game.computer_turn()?;
        game.end_round()?;

        term.pause()?;
    }

    term.clear()?;
    writeln!(term.writer, "--- Game Over ---")?;
    term.print_final_hand(game.human())?;
    term.print_final_hand(game.computer())?;

    let result = game.finish()?;
    writeln!(term.writer, "{result}")?;
    term.writer.flush()?;

    Ok(result)
}
