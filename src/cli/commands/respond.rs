//! Respond command - Apply one human move and print the agent's reply
//!
//! One-shot counterpart of a web move endpoint: takes the current board and
//! the human's cell index, answers with the resulting position as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    q_learning::{DEFAULT_TABLE_FILE, TableStore},
    session::GameSession,
    tictactoe::Board,
};

#[derive(Parser, Debug)]
#[command(about = "Apply a human move and print the resulting position as JSON")]
pub struct RespondArgs {
    /// Current board as 9 cell characters (e.g. "X...O....", '.' = empty)
    #[arg(long, short = 'b')]
    pub board: String,

    /// Cell index of the human move (0-8)
    #[arg(long, short = 'p')]
    pub pos: usize,

    /// Value table to play from
    #[arg(long, short = 't', default_value = DEFAULT_TABLE_FILE)]
    pub table: PathBuf,
}

pub fn execute(args: RespondArgs) -> Result<()> {
    if args.pos > 8 {
        return Err(crate::Error::InvalidPosition { position: args.pos }.into());
    }

    let board = Board::from_string(&args.board).context("Invalid board string")?;
    let table = TableStore::new(&args.table)
        .load()
        .context("No value table found; run `tictacq train` first")?;

    let mut session = GameSession::from_board(board);
    let response = session.play_round(args.pos, &table)?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
