//! CLI module for the Language Content API
//!
//! Provides subcommands for running the service:
//! - `serve`: run the HTTP API server (default)
//! - `migrate`: apply database schema migrations and exit

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

/// Language Content API - content backend for language-learning apps
#[derive(Parser)]
#[command(name = "language-content-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Apply database schema migrations and exit
    Migrate,
}
