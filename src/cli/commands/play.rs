//! Play command - Interactive game against the trained agent
//!
//! The agent plays X, the human plays O. When no value table exists yet,
//! one is trained with default hyperparameters and saved before the game.

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::output,
    q_learning::{DEFAULT_TABLE_FILE, QTable, TableStore, Trainer, TrainingConfig},
    session::GameSession,
    tictactoe::GameOutcome,
};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game against the agent")]
pub struct PlayArgs {
    /// Value table to play from
    #[arg(long, short = 't', default_value = DEFAULT_TABLE_FILE)]
    pub table: PathBuf,

    /// Let the agent make the opening move
    #[arg(long, default_value_t = false)]
    pub agent_first: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let store = TableStore::new(&args.table);
    let table = match store.try_load()? {
        Some(table) => table,
        None => {
            println!(
                "No value table at {}; training with defaults first.",
                store.path().display()
            );
            let mut table = QTable::new();
            Trainer::new(TrainingConfig::default()).run(&mut table)?;
            store.save(&table)?;
            table
        }
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut session = GameSession::new();

    if args.agent_first {
        session.agent_opening(&table)?;
    }

    println!("You are O. Enter a cell index (0-8) or 'q' to quit.\n");
    print!("{}", output::render_board(session.board()));

    while !session.done() {
        let Some(pos) = prompt_move(&mut lines)? else {
            println!("Game abandoned.");
            return Ok(());
        };

        let before = *session.board();
        let response = session.play_round(pos, &table)?;
        if response.board == before && !response.done {
            println!("Cell {pos} is taken; pick another.");
            continue;
        }

        println!();
        print!("{}", output::render_board(&response.board));
    }

    match session.winner() {
        Some(GameOutcome::Win(player)) => println!("\n{player} wins!"),
        Some(GameOutcome::Draw) => println!("\nDraw."),
        None => unreachable!("finished game has an outcome"),
    }

    Ok(())
}

fn prompt_move(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<Option<usize>> {
    loop {
        print!("\nYour move: ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line.context("Failed to read input")?;
        let input = line.trim();

        if input.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        match input.parse::<usize>() {
            Ok(pos) if pos < 9 => return Ok(Some(pos)),
            _ => println!("Enter a number between 0 and 8."),
        }
    }
}
