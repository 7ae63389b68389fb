use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dispatch",
    about = "Dispatch — compose, hash, and store short messages",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compose a message and append it to the store
    Send(SendArgs),
    /// Show messages previously appended to the store
    Log(LogArgs),
    /// Check registration credentials
    Register(RegisterArgs),
}

#[derive(Args)]
pub struct SendArgs {
    /// Recipient cell number, e.g. +27718693002
    pub recipient: String,
    /// Message body, at most 250 characters (omit for an empty message)
    pub message: Option<String>,
    /// Path to the JSON-lines store
    #[arg(long, default_value = "messages.json")]
    pub store: PathBuf,
    /// What to do with the composed message
    #[arg(long, value_enum, default_value = "send")]
    pub action: Action,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Action {
    Send,
    Store,
    Disregard,
}

#[derive(Args)]
pub struct LogArgs {
    /// Path to the JSON-lines store
    #[arg(long, default_value = "messages.json")]
    pub store: PathBuf,
}

#[derive(Args)]
pub struct RegisterArgs {
    /// Username (must contain an underscore, at most five characters)
    pub username: String,
    /// Password (at least eight characters with a capital letter, a number,
    /// and a special character)
    pub password: String,
    /// Cell phone number in the format +27XXXXXXXXX
    pub cell: String,
}
