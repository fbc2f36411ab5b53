//! The suggestion service: one correction query end to end.
//!
//! [`SpellEngine`] owns the dictionary trie and a penalty policy, drives the
//! [`Frontier`] across the input one letter at a time (with a one-letter
//! lookahead), then collects, ranks and deduplicates the terminal states.
//!
//! A query performs no I/O and never fails: inputs the dictionary cannot
//! reach simply produce an empty list.

mod frontier;

pub use frontier::{Frontier, SearchState};

use crate::dictionary::{DictionaryError, Trie};
use crate::penalty::{KeyboardPenalty, PenaltyPolicy};
use rustc_hash::FxHashSet;
use std::path::Path;

/// A ranked correction candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// The suggested dictionary word.
    pub term: String,
    /// Accumulated edit penalty; lower is better.
    pub penalty: u32,
}

/// Spelling-correction engine over a dictionary trie.
///
/// The policy is an injected collaborator: any [`PenaltyPolicy`] slots in
/// without touching the search. Results are ordered by ascending penalty;
/// equal-penalty candidates keep the frontier's expansion order, which
/// follows the trie's first-insertion child order (file order for a loaded
/// dictionary).
///
/// # Example
///
/// ```rust,ignore
/// use keyspell::prelude::*;
///
/// let engine = SpellEngine::from_file("words.txt")?;
/// for suggestion in engine.suggest("teh") {
///     println!("{suggestion}");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SpellEngine<P: PenaltyPolicy = KeyboardPenalty> {
    trie: Trie,
    policy: P,
}

impl SpellEngine<KeyboardPenalty> {
    /// Engine over `trie` with the canonical QWERTY keyboard policy.
    pub fn new(trie: Trie) -> Self {
        Self::with_policy(trie, KeyboardPenalty::qwerty())
    }

    /// Load a plain-text dictionary and build the canonical engine.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        Ok(Self::new(Trie::from_file(path)?))
    }
}

impl<P: PenaltyPolicy> SpellEngine<P> {
    /// Engine over `trie` scored by `policy`.
    pub fn with_policy(trie: Trie, policy: P) -> Self {
        Self { trie, policy }
    }

    /// The dictionary trie backing this engine.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// The penalty policy scoring this engine's edits.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Extract the trie, consuming the engine.
    pub fn into_trie(self) -> Trie {
        self.trie
    }

    /// Correct a word, returning ranked suggestions.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        self.suggest_with_penalty(word)
            .into_iter()
            .map(|s| s.term)
            .collect()
    }

    /// Correct a word, returning suggestions with their penalties.
    pub fn suggest_with_penalty(&self, word: &str) -> Vec<Suggestion> {
        self.suggest_bytes(word.as_bytes())
    }

    /// Byte-level correction; the core the string entry points wrap.
    ///
    /// Inputs of length 0 or 1 are returned as-is without consulting the
    /// trie. Dictionary words that are not valid UTF-8 are rendered lossily
    /// into the suggestion term.
    pub fn suggest_bytes(&self, word: &[u8]) -> Vec<Suggestion> {
        if word.len() < 2 {
            return vec![Suggestion {
                term: String::from_utf8_lossy(word).into_owned(),
                penalty: 0,
            }];
        }

        let mut frontier = Frontier::new(self.trie.root());
        for i in 1..word.len() {
            frontier.advance(&self.trie, &self.policy, word[i - 1], Some(word[i]));
        }
        frontier.advance(&self.trie, &self.policy, word[word.len() - 1], None);

        self.collect(&frontier)
    }

    // Rank terminal states by penalty (stable, so equal penalties keep
    // expansion order) and keep the first occurrence of each spelling.
    fn collect(&self, frontier: &Frontier) -> Vec<Suggestion> {
        let mut terminals: Vec<&SearchState> = frontier
            .states()
            .iter()
            .filter(|state| self.trie.is_terminal(state.node()))
            .collect();
        terminals.sort_by_key(|state| state.penalty());

        let mut seen = FxHashSet::default();
        let mut suggestions = Vec::with_capacity(terminals.len());
        for state in terminals {
            if seen.insert(state.word().to_vec()) {
                suggestions.push(Suggestion {
                    term: String::from_utf8_lossy(state.word()).into_owned(),
                    penalty: state.penalty(),
                });
            }
        }
        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::penalty::UniformPenalty;

    fn engine(terms: &[&str]) -> SpellEngine {
        SpellEngine::new(Trie::from_terms(terms))
    }

    #[test]
    fn empty_input_is_returned_verbatim() {
        let engine = engine(&[]);
        assert_eq!(engine.suggest(""), vec![""]);
    }

    #[test]
    fn single_letter_input_skips_the_search() {
        // 'q' is not a dictionary word; degenerate inputs are echoed anyway.
        let engine = engine(&["a", "ab"]);
        assert_eq!(engine.suggest("q"), vec!["q"]);
        assert_eq!(
            engine.suggest_with_penalty("q"),
            vec![Suggestion {
                term: "q".into(),
                penalty: 0
            }]
        );
    }

    #[test]
    fn exact_word_ranks_first_with_zero_penalty() {
        let engine = engine(&["swell", "spell", "spelt"]);
        let suggestions = engine.suggest_with_penalty("spell");
        assert_eq!(suggestions[0].term, "spell");
        assert_eq!(suggestions[0].penalty, 0);
    }

    #[test]
    fn adjacent_swap_is_recovered() {
        let engine = engine(&["the"]);
        assert_eq!(
            engine.suggest_with_penalty("teh"),
            vec![Suggestion {
                term: "the".into(),
                penalty: 2
            }]
        );
    }

    #[test]
    fn missing_letter_is_recovered_by_insert() {
        let engine = engine(&["cat"]);
        assert_eq!(
            engine.suggest_with_penalty("ct"),
            vec![Suggestion {
                term: "cat".into(),
                penalty: 3
            }]
        );
    }

    #[test]
    fn spurious_letter_is_recovered_by_delete() {
        let engine = engine(&["ct"]);
        assert_eq!(
            engine.suggest_with_penalty("cat"),
            vec![Suggestion {
                term: "ct".into(),
                penalty: 3
            }]
        );
    }

    #[test]
    fn replacement_is_charged_by_key_distance() {
        let engine = engine(&["cat"]);
        // 's' sits two keys from 'a'; the lookahead towards 't' cannot beat
        // that.
        assert_eq!(
            engine.suggest_with_penalty("cst"),
            vec![Suggestion {
                term: "cat".into(),
                penalty: 2
            }]
        );
    }

    #[test]
    fn duplicate_paths_collapse_to_one_suggestion() {
        // "aa" is reachable exactly (penalty 0) and through a degenerate
        // swap (penalty 2); only the cheaper survives deduplication.
        let engine = engine(&["aa"]);
        assert_eq!(
            engine.suggest_with_penalty("aa"),
            vec![Suggestion {
                term: "aa".into(),
                penalty: 0
            }]
        );
    }

    #[test]
    fn equal_penalties_follow_dictionary_order() {
        let forwards = engine(&["das", "gas"]);
        assert_eq!(forwards.suggest("fas"), vec!["das", "gas"]);

        let backwards = engine(&["gas", "das"]);
        assert_eq!(backwards.suggest("fas"), vec!["gas", "das"]);
    }

    #[test]
    fn dictionary_order_changes_ranking_not_the_set() {
        let forwards = engine(&["das", "gas"]);
        let backwards = engine(&["gas", "das"]);
        let mut a = forwards.suggest("fas");
        let mut b = backwards.suggest("fas");
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn input_outside_every_plane_still_runs() {
        let engine = engine(&["ab"]);
        assert_eq!(engine.suggest_bytes(&[0x80, b'b']), vec![]);
    }

    #[test]
    fn empty_dictionary_yields_no_suggestions() {
        let engine = engine(&[]);
        assert_eq!(engine.suggest("word"), Vec::<String>::new());
    }

    #[test]
    fn queries_are_deterministic() {
        let engine = engine(&["spell", "swell", "sell", "spelt", "spool"]);
        assert_eq!(engine.suggest("sepll"), engine.suggest("sepll"));
    }

    #[test]
    fn alternative_policy_slots_into_the_same_engine() {
        let trie = Trie::from_terms(["zq"]);
        let engine = SpellEngine::with_policy(trie, UniformPenalty::new(1));
        // Flat replacement cost reaches a word the keyboard policy would
        // price at the cap.
        assert_eq!(
            engine.suggest_with_penalty("pq"),
            vec![Suggestion {
                term: "zq".into(),
                penalty: 1
            }]
        );
    }
}
