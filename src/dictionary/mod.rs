//! Dictionary storage for the correction engine.
//!
//! The engine walks the dictionary letter by letter, so the backing store is
//! a trie kept in an arena: nodes live in one contiguous `Vec` and refer to
//! each other through integer [`NodeId`] handles. The trie is built once at
//! startup and read-only afterwards, which makes it safe to share across
//! concurrent queries.

pub mod trie;

pub use trie::{DictionaryError, NodeId, Trie, TrieStats};
