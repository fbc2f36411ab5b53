//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "keyspell")]
#[command(about = "Keyboard-aware spelling correction")]
#[command(version)]
pub struct Cli {
    /// Plain-text dictionary file, one word per line
    pub dict: PathBuf,

    /// Correct this word and exit; omit to start the interactive prompt
    pub word: Option<String>,

    /// Run the built-in regression scenarios against the dictionary
    #[arg(long, conflicts_with = "word")]
    pub test: bool,

    /// Base mistake allowance: a path may accumulate up to max(N, letters
    /// processed) penalty before it is pruned
    #[arg(long, default_value_t = 3, value_name = "N")]
    pub mistakes: u32,

    /// Print each suggestion with its penalty
    #[arg(short = 'p', long)]
    pub show_penalties: bool,

    /// Print trie statistics after loading the dictionary
    #[arg(long)]
    pub stats: bool,
}
