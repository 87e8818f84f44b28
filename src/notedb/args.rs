use clap::{Parser, Subcommand};
use notedb::model::NoteId;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notedb")]
#[command(version, about = "A tiny note and to-do list kept in a JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this note file instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new note
    #[command(alias = "n")]
    Add {
        /// Note text (multiple words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Priority, e.g. high, medium, low
        #[arg(short, long)]
        priority: Option<String>,

        /// Time, free-form (e.g. 10:00)
        #[arg(short, long, default_value = "")]
        time: String,

        /// Date, free-form; YYYY-MM-DD sorts chronologically
        #[arg(short, long, default_value = "")]
        date: String,
    },

    /// List notes: open ones by priority and date, then completed ones
    #[command(alias = "ls")]
    List {
        /// Only open notes
        #[arg(long, conflicts_with = "done")]
        active: bool,

        /// Only completed notes
        #[arg(long)]
        done: bool,
    },

    /// Show one or more notes
    #[command(alias = "v")]
    View {
        /// Note ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<NoteId>,
    },

    /// Change fields of a note
    #[command(alias = "e")]
    Edit {
        /// Note id
        id: NoteId,

        /// New text
        #[arg(long)]
        text: Option<String>,

        /// New priority
        #[arg(short, long)]
        priority: Option<String>,

        /// New time
        #[arg(short, long)]
        time: Option<String>,

        /// New date
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Mark notes as done
    Done {
        /// Note ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<NoteId>,
    },

    /// Mark notes as not done
    Undone {
        /// Note ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<NoteId>,
    },

    /// Delete one or more notes
    #[command(alias = "rm")]
    Delete {
        /// Note ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<NoteId>,
    },

    /// Print the path of the note file
    Path,

    /// Show or set configuration (keys: data-file, default-priority)
    Config {
        /// Configuration key
        key: Option<String>,

        /// New value
        value: Option<String>,
    },
}
