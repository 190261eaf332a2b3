use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Keep a small employee roster in a JSON file"
)]
pub struct Cli {
    /// Path of the record store file (overrides roster.json config)
    #[arg(long, short = 'f', global = true)]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add an employee; the store assigns the id
    Add {
        name: String,
        position: String,
        /// Force a specific id instead of the next free one
        #[arg(long)]
        id: Option<u64>,
    },
    /// Remove an employee by id
    Remove { id: u64 },
    /// List all employees, newest first
    List,
    /// Export the roster as multi-document YAML next to the store file
    Export,
}
