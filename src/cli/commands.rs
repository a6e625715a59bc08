//! CLI subcommands

pub mod play;
pub mod respond;
pub mod train;
