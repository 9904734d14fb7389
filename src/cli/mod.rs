pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "todo", version, about = "Trivial todo tracker: add, list, and mark todos as done")]
pub struct Cli {
    /// Path to the todos file
    #[arg(
        long,
        value_name = "FILE",
        env = "TODO_FILE",
        default_value = "todos.json",
        global = true
    )]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add a new todo item
    Add {
        /// Title of the new todo
        title: String,
    },
    /// List all todo items
    List,
    /// Mark a todo item as done
    Done {
        /// ID of the todo to mark as done
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
}
