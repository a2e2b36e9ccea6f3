// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Number Game console client.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use std::io;

use numbergame_cards::RandomDealer;
use numbergame_core::FileSink;

pub mod terminal;

/// The game log, rewritten for every game.
const LOG_FILE: &str = "GameLog.txt";
/// The final scores of all games.
const SCORES_FILE: &str = "FinalScores.txt";

/// Play the Number Game against the computer.
///
/// Each player gets two cards from 1 to 8, the lowest difference between the
/// cards after three rounds wins.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let _cli = Cli::parse();

    let mut term = terminal::Terminal::new(io::stdin().lock(), io::stdout());
    terminal::run(
        &mut term,
        RandomDealer::default(),
        FileSink::overwrite(LOG_FILE),
        FileSink::appending(SCORES_FILE),
    )?;

    Ok(())
}
