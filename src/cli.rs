//! CLI infrastructure
//!
//! Command-line interface for training the agent and playing against it.

pub mod commands;
pub mod output;
