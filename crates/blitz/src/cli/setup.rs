use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "blitz",
    bin_name = "blitz",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Quick multi-note scratchpad", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to BLITZ_DATA_DIR, then the OS data directory)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

/// Note positions on the command line are 1-based, as listed by `blitz list`.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List notes (default)
    #[command(alias = "ls", display_order = 1)]
    List,

    /// Add a note with the given name
    #[command(display_order = 2)]
    Add {
        #[arg(required = true, trailing_var_arg = true)]
        name: Vec<String>,

        #[arg(long)]
        icon: Option<String>,
    },

    /// Add a note with the default new-note name and select it
    #[command(alias = "n", display_order = 3)]
    New,

    #[command(alias = "rm", display_order = 4)]
    Remove { note: usize },

    #[command(display_order = 5)]
    Rename {
        note: usize,

        #[arg(required = true, trailing_var_arg = true)]
        name: Vec<String>,
    },

    /// Make a note the selected one
    #[command(display_order = 6)]
    Select { note: usize },

    /// Move the note at FROM so it ends up at TO
    #[command(alias = "mv", display_order = 7)]
    Move { from: usize, to: usize },

    /// Print a note (the selected one by default)
    #[command(alias = "cat", display_order = 8)]
    Show { note: Option<usize> },

    /// Append a paragraph to a note, then autolink it
    #[command(display_order = 9)]
    Write {
        #[arg(short, long)]
        note: Option<usize>,

        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Append a shortcut to a file, folder or URL
    #[command(display_order = 10)]
    Link {
        #[arg(short, long)]
        note: Option<usize>,

        path: String,
    },

    /// Append a dropped file: images are embedded, anything else is linked
    #[command(display_order = 11)]
    Drop {
        #[arg(short, long)]
        note: Option<usize>,

        path: PathBuf,
    },

    /// Turn URLs in a note into hyperlinks
    #[command(display_order = 12)]
    Autolink { note: Option<usize> },

    /// Show or change workspace settings
    #[command(display_order = 13)]
    Settings {
        /// Global hotkey, e.g. "ctrl+alt+n"
        #[arg(long)]
        hotkey: Option<String>,

        #[arg(long)]
        hide_on_open: Option<bool>,

        #[arg(long)]
        check_for_updates: Option<bool>,
    },

    /// Show configuration
    #[command(display_order = 14)]
    Config {
        /// Print a commented blitz.toml instead
        #[arg(long)]
        template: bool,
    },

    /// Print the data directory and workspace file
    #[command(display_order = 15)]
    Path,
}
