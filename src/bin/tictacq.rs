//! tictacq - Tabular Q-learning Tic-Tac-Toe agent

use anyhow::Result;
use clap::{Parser, Subcommand};

use tictacq::cli::commands::{play, respond, train};

#[derive(Parser)]
#[command(name = "tictacq")]
#[command(about = "Tabular Q-learning agent for Tic-Tac-Toe", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Train the agent against a random opponent
    Train(train::TrainArgs),

    /// Play an interactive game against the agent
    Play(play::PlayArgs),

    /// Apply a human move and print the resulting position as JSON
    Respond(respond::RespondArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Train(args) => train::execute(args),
        Command::Play(args) => play::execute(args),
        Command::Respond(args) => respond::execute(args),
    }
}
