//! Built-in regression scenarios.
//!
//! Each scenario pins the exact, ordered suggestion list for one input under
//! the canonical QWERTY policy and the reference English dictionary the
//! project ships with. Run them with `keyspell <dictfile> --test`; a
//! different dictionary will legitimately produce different lists.

use anyhow::{bail, Result};
use colored::Colorize;

use crate::engine::SpellEngine;
use crate::penalty::PenaltyPolicy;

/// One pinned input/output pair.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    /// The typed word.
    pub input: &'static str,
    /// The expected suggestions, in order.
    pub expected: &'static [&'static str],
}

/// The pinned scenarios, covering swaps, replacements, inserts, deletes,
/// degenerate inputs and already-correct words.
pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        input: "english",
        expected: &["English", "neglig", "enlist"],
    },
    Scenario {
        input: "spell",
        expected: &["spell", "swell", "Aspell", "sell", "Ispell", "spool", "spelt"],
    },
    Scenario {
        input: "checker",
        expected: &[
            "checker", "checked", "checks", "chewer", "cheeked", "heckler", "check", "chewed",
        ],
    },
    Scenario {
        input: "a",
        expected: &["a"],
    },
    Scenario {
        input: "by",
        expected: &["by", "b", "y", "Ty", "bay", "boy", "buy", "Yb"],
    },
    Scenario {
        input: "cad",
        expected: &[
            "cad", "car", "dad", "fad", "sad", "wad", "card", "ad", "Ada", "clad", "scad",
        ],
    },
    Scenario {
        input: "boys",
        expected: &[
            "boys", "boss", "buys", "bows", "bogs", "bobs", "boas", "Boas", "boy", "buoys",
            "boy's", "Boyd", "bode",
        ],
    },
    Scenario {
        input: "empty",
        expected: &["empty"],
    },
    Scenario {
        input: "sister",
        expected: &[
            "sister", "Sister", "sitter", "sifter", "mister", "Mister", "sifted", "misted",
            "kisser", "sissier", "sited", "mistier", "dissed", "site", "sassed", "sieved",
            "kissed", "missed",
        ],
    },
    Scenario {
        input: "England",
        expected: &["England"],
    },
    Scenario {
        input: "mitigate",
        expected: &["mitigate", "motivate"],
    },
    Scenario {
        input: "Alexander",
        expected: &["Alexander", "Alexandra"],
    },
    Scenario {
        input: "zoologist",
        expected: &["zoologist", "zoology"],
    },
];

/// Run every scenario against `engine`, reporting one line per scenario.
///
/// Fails (exit code 1 from the binary) if any scenario diverges.
pub fn run<P: PenaltyPolicy>(engine: &SpellEngine<P>) -> Result<()> {
    let mut failures = 0;

    for scenario in SCENARIOS {
        let actual = engine.suggest(scenario.input);
        if actual == scenario.expected {
            println!("{} {}", "ok".green(), scenario.input);
        } else {
            failures += 1;
            println!("{} {}", "FAILED".red().bold(), scenario.input);
            println!("  expected: {:?}", scenario.expected);
            println!("  actual:   {actual:?}");
        }
    }

    if failures > 0 {
        bail!("{failures} of {} regression scenarios failed", SCENARIOS.len());
    }

    println!();
    println!(
        "{} all {} scenarios passed",
        "ok".green().bold(),
        SCENARIOS.len()
    );
    Ok(())
}
