//! keyspell - keyboard-aware spelling correction.
//!
//! `keyspell <dictfile>` starts the interactive prompt,
//! `keyspell <dictfile> <word>` corrects one word and exits,
//! `keyspell <dictfile> --test` runs the built-in regression scenarios.

use clap::Parser;
use colored::Colorize;
use std::process;

use keyspell::cli::{commands, Cli};

fn main() {
    // Exit codes: 0 on success, 1 on argument or I/O error. Argument
    // errors must bypass clap's default exit(2).
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            if err.use_stderr() {
                process::exit(1);
            }
            // --help / --version land here.
            return;
        }
    };

    if let Err(e) = commands::execute(cli) {
        eprintln!("{}: {e:#}", "Error".red().bold());
        process::exit(1);
    }
}
