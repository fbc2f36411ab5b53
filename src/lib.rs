//! # keyspell
//!
//! Keyboard-aware spelling correction over a dictionary trie.
//!
//! Given a typed word, the engine returns the dictionary words the typist
//! most plausibly meant. It walks a trie of the dictionary in lockstep with
//! the input, keeping a frontier of live search paths that it expands under
//! exact match, substitution, insertion, deletion and adjacent-swap edits.
//! Substitutions are priced by physical key distance on a 3-D keyboard
//! model (plane, row, column), so `cst` suggests `cat` ahead of arbitrary
//! edit-distance neighbours, and a per-step threshold keeps the frontier
//! bounded.
//!
//! ## Example
//!
//! ```rust,ignore
//! use keyspell::prelude::*;
//!
//! let trie = Trie::from_terms(["the", "then", "they"]);
//! let engine = SpellEngine::new(trie);
//!
//! assert_eq!(engine.suggest("teh")[0], "the");
//! ```
//!
//! The scoring model is pluggable: implement [`penalty::PenaltyPolicy`] to
//! replace the keyboard-aware costs with, say, phonetic or flat ones.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dictionary;
pub mod engine;
pub mod keyboard;
pub mod penalty;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod repl;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::dictionary::{DictionaryError, NodeId, Trie, TrieStats};
    pub use crate::engine::{SpellEngine, Suggestion};
    pub use crate::keyboard::{KeyboardLayout, KeyPosition, LayoutError};
    pub use crate::penalty::{KeyboardPenalty, PenaltyPolicy, PhoneticPenalty, UniformPenalty};
}
