//! CLI command implementations

use anyhow::{Context, Result};
use colored::Colorize;

use crate::dictionary::Trie;
use crate::engine::SpellEngine;
use crate::penalty::{KeyboardPenalty, PenaltyPolicy};

use super::args::Cli;
use super::regression;

/// Execute the parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    let trie = Trie::from_file(&cli.dict)
        .with_context(|| format!("loading dictionary {}", cli.dict.display()))?;

    if cli.stats {
        print_stats(&trie);
    }

    let policy = KeyboardPenalty::qwerty().with_base_mistakes(cli.mistakes);
    let engine = SpellEngine::with_policy(trie, policy);

    if cli.test {
        regression::run(&engine)
    } else if let Some(word) = cli.word {
        print_suggestions(&engine, &word, cli.show_penalties);
        Ok(())
    } else {
        crate::repl::run(&engine, cli.show_penalties)
    }
}

/// Print each suggestion for `word` on its own line.
pub(crate) fn print_suggestions<P: PenaltyPolicy>(
    engine: &SpellEngine<P>,
    word: &str,
    show_penalties: bool,
) {
    for suggestion in engine.suggest_with_penalty(word) {
        if show_penalties {
            println!(
                "{} {}",
                suggestion.term,
                format!("({})", suggestion.penalty).dimmed()
            );
        } else {
            println!("{}", suggestion.term);
        }
    }
}

fn print_stats(trie: &Trie) {
    let stats = trie.stats();
    println!("{}", "Dictionary".bold());
    println!("  words:              {}", stats.words);
    println!("  nodes:              {}", stats.nodes);
    println!("  leaves:             {}", stats.leaves);
    println!("  single-child nodes: {}", stats.single_child_nodes);
    println!("  avg children/node:  {:.3}", stats.branching_factor());
    println!();
}
