//! Interactive correction prompt.
//!
//! Reads lines from stdin, corrects every whitespace-delimited token, and
//! prints each suggestion on its own line. Line editing and history come
//! from rustyline; Ctrl-C and Ctrl-D both leave the loop.

use anyhow::Result;
use colored::Colorize;
use rustyline::config::Config;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::cli::commands::print_suggestions;
use crate::engine::SpellEngine;
use crate::penalty::PenaltyPolicy;

/// Prompt configuration.
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt string.
    pub prompt: String,
    /// History file path.
    pub history_file: Option<std::path::PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "? ".to_string(),
            history_file: Some(
                dirs::home_dir()
                    .unwrap_or_else(|| std::path::PathBuf::from("."))
                    .join(".keyspell_history"),
            ),
        }
    }
}

/// Run the prompt until EOF or interrupt.
pub fn run<P: PenaltyPolicy>(engine: &SpellEngine<P>, show_penalties: bool) -> Result<()> {
    let repl_config = ReplConfig::default();

    let rustyline_config = Config::builder()
        .auto_add_history(true)
        .history_ignore_dups(true)?
        .history_ignore_space(true)
        .build();
    let mut editor = DefaultEditor::with_config(rustyline_config)?;

    if let Some(history_path) = &repl_config.history_file {
        if history_path.exists() {
            let _ = editor.load_history(history_path);
        }
    }

    println!(
        "{} {} words loaded, type a word to correct it, {} to exit",
        "keyspell:".bold(),
        engine.trie().len(),
        "Ctrl+D".yellow()
    );

    loop {
        match editor.readline(&repl_config.prompt) {
            Ok(line) => {
                for token in line.split_whitespace() {
                    print_suggestions(engine, token, show_penalties);
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}: {err}", "Readline error".red().bold());
                break;
            }
        }
    }

    if let Some(history_path) = &repl_config.history_file {
        if let Err(e) = editor.save_history(history_path) {
            eprintln!("{}: failed to save history: {e}", "Warning".yellow());
        }
    }

    Ok(())
}
