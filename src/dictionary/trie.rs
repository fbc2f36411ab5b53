//! Arena-backed prefix tree over raw bytes.
//!
//! Words are stored byte-transparently: no Unicode folding, no case
//! normalization. Every node records the letter labelling the edge into it,
//! a terminal flag, and its children as arena handles. Children are kept in
//! **first-insertion order**, which is the deterministic enumeration order
//! the rest of the engine relies on for tie-breaking; for a dictionary
//! loaded from a file that is file order.

use smallvec::SmallVec;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a dictionary.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The dictionary file could not be opened.
    #[error("cannot open dictionary file {path}")]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Reading from the dictionary stream failed mid-way.
    #[error("error reading dictionary")]
    Read {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Handle to a trie node within its arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

/// Most nodes in a word trie branch very little; four inline slots cover
/// the typical fan-out without touching the heap.
type ChildList = SmallVec<[NodeId; 4]>;

#[derive(Debug, Clone)]
struct TrieNode {
    letter: u8,
    terminal: bool,
    children: ChildList,
}

impl TrieNode {
    fn new(letter: u8) -> Self {
        Self {
            letter,
            terminal: false,
            children: ChildList::new(),
        }
    }
}

/// A byte-level trie of dictionary words.
///
/// Built once by repeated [`insert`](Trie::insert) calls (duplicates are
/// idempotent), then queried read-only by the frontier search through
/// [`child`](Trie::child), [`children`](Trie::children),
/// [`letter`](Trie::letter) and [`is_terminal`](Trie::is_terminal).
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl Trie {
    /// Handle of the root node. The root carries no letter.
    pub const ROOT: NodeId = NodeId(0);

    /// Create an empty trie containing only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new(0)],
            words: 0,
        }
    }

    /// Build a trie from an iterator of terms, in iteration order.
    pub fn from_terms<I, T>(terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let mut trie = Self::new();
        for term in terms {
            trie.insert(term.as_ref());
        }
        trie
    }

    /// Load a plain-text dictionary: one word per line, bytes taken as-is.
    ///
    /// Empty lines are skipped; a trailing `\r` before the newline is
    /// stripped so CRLF dictionaries load the same words as LF ones.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, DictionaryError> {
        let mut trie = Self::new();
        let mut line = Vec::new();

        loop {
            line.clear();
            let read = reader
                .read_until(b'\n', &mut line)
                .map_err(|source| DictionaryError::Read { source })?;
            if read == 0 {
                break;
            }

            if line.last() == Some(&b'\n') {
                line.pop();
            }
            if line.last() == Some(&b'\r') {
                line.pop();
            }

            if !line.is_empty() {
                trie.insert(&line);
            }
        }

        Ok(trie)
    }

    /// Load a dictionary file, see [`from_reader`](Trie::from_reader).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DictionaryError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Insert a word, creating missing nodes along its path.
    ///
    /// Returns `true` if the word was new. Empty words are ignored (the
    /// root never becomes terminal).
    pub fn insert(&mut self, word: &[u8]) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut node = Self::ROOT;
        for &letter in word {
            node = match self.child(node, letter) {
                Some(child) => child,
                None => {
                    let child = NodeId(self.nodes.len() as u32);
                    self.nodes.push(TrieNode::new(letter));
                    self.nodes[node.0 as usize].children.push(child);
                    child
                }
            };
        }

        let end = &mut self.nodes[node.0 as usize];
        if end.terminal {
            false
        } else {
            end.terminal = true;
            self.words += 1;
            true
        }
    }

    /// Whether the exact word is stored.
    pub fn contains(&self, word: &[u8]) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut node = Self::ROOT;
        for &letter in word {
            match self.child(node, letter) {
                Some(child) => node = child,
                None => return false,
            }
        }
        self.is_terminal(node)
    }

    /// Root handle, the starting point of every search.
    pub fn root(&self) -> NodeId {
        Self::ROOT
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Whether no words are stored.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Total number of arena nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The letter labelling the edge into `node`. The root yields 0.
    #[inline]
    pub fn letter(&self, node: NodeId) -> u8 {
        self.nodes[node.0 as usize].letter
    }

    /// Whether a dictionary word ends at `node`.
    #[inline]
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node.0 as usize].terminal
    }

    /// Children of `node` in first-insertion order.
    #[inline]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0 as usize].children
    }

    /// Child of `node` labelled `letter`, if any.
    ///
    /// Fan-out per node is small in word tries, so this is a linear scan.
    #[inline]
    pub fn child(&self, node: NodeId, letter: u8) -> Option<NodeId> {
        self.nodes[node.0 as usize]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child.0 as usize].letter == letter)
    }

    /// Structural statistics over the whole trie.
    pub fn stats(&self) -> TrieStats {
        let mut stats = TrieStats::default();
        let mut pending = vec![Self::ROOT];

        while let Some(node) = pending.pop() {
            let node = &self.nodes[node.0 as usize];
            stats.nodes += 1;
            stats.edges += node.children.len();
            if node.terminal {
                stats.words += 1;
            }
            match node.children.len() {
                0 => stats.leaves += 1,
                1 => stats.single_child_nodes += 1,
                _ => {}
            }
            pending.extend(node.children.iter().copied());
        }

        stats
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

/// Shape of a built trie, mostly of interest for dictionary tuning.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TrieStats {
    /// Total nodes, root included.
    pub nodes: usize,
    /// Nodes with no children.
    pub leaves: usize,
    /// Total parent-child edges.
    pub edges: usize,
    /// Terminal nodes, i.e. stored words.
    pub words: usize,
    /// Non-leaf nodes with exactly one child (chain links).
    pub single_child_nodes: usize,
}

impl TrieStats {
    /// Mean number of children per node.
    pub fn branching_factor(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            self.edges as f64 / self.nodes as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let mut trie = Trie::new();
        assert!(trie.insert(b"spell"));
        assert!(trie.insert(b"spelt"));
        assert!(trie.contains(b"spell"));
        assert!(trie.contains(b"spelt"));
        assert!(!trie.contains(b"spel"));
        assert!(!trie.contains(b"spells"));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn prefixes_become_words_when_inserted() {
        let mut trie = Trie::new();
        trie.insert(b"spelling");
        assert!(!trie.contains(b"spell"));
        trie.insert(b"spell");
        assert!(trie.contains(b"spell"));
    }

    #[test]
    fn duplicate_insert_is_idempotent() {
        let mut trie = Trie::new();
        assert!(trie.insert(b"word"));
        assert!(!trie.insert(b"word"));
        assert_eq!(trie.len(), 1);
        let nodes = trie.node_count();
        trie.insert(b"word");
        assert_eq!(trie.node_count(), nodes);
    }

    #[test]
    fn empty_word_is_ignored() {
        let mut trie = Trie::new();
        assert!(!trie.insert(b""));
        assert!(trie.is_empty());
        assert!(!trie.is_terminal(Trie::ROOT));
        assert!(!trie.contains(b""));
    }

    #[test]
    fn children_keep_insertion_order() {
        let trie = Trie::from_terms(["das", "gas", "bas"]);
        let letters: Vec<u8> = trie
            .children(trie.root())
            .iter()
            .map(|&c| trie.letter(c))
            .collect();
        assert_eq!(letters, vec![b'd', b'g', b'b']);
    }

    #[test]
    fn child_lookup_by_letter() {
        let trie = Trie::from_terms(["ab", "ac"]);
        let a = trie.child(trie.root(), b'a').unwrap();
        assert!(trie.child(a, b'b').is_some());
        assert!(trie.child(a, b'c').is_some());
        assert_eq!(trie.child(a, b'd'), None);
        assert_eq!(trie.child(trie.root(), b'z'), None);
    }

    #[test]
    fn words_are_byte_transparent() {
        let mut trie = Trie::new();
        trie.insert(&[0xC5, 0xBC, 0xFF]);
        assert!(trie.contains(&[0xC5, 0xBC, 0xFF]));
        assert!(!trie.contains(&[0xC5, 0xBC]));
    }

    #[test]
    fn reader_skips_empty_lines_and_crlf() {
        let data = b"alpha\r\n\nbeta\n\r\ngamma".as_slice();
        let trie = Trie::from_reader(data).unwrap();
        assert_eq!(trie.len(), 3);
        assert!(trie.contains(b"alpha"));
        assert!(trie.contains(b"beta"));
        assert!(trie.contains(b"gamma"));
        assert!(!trie.is_terminal(Trie::ROOT));
    }

    #[test]
    fn stats_count_structure() {
        // root -> a -> {b, c}; "ab" and "ac" terminal.
        let trie = Trie::from_terms(["ab", "ac"]);
        let stats = trie.stats();
        assert_eq!(stats.nodes, 4);
        assert_eq!(stats.edges, 3);
        assert_eq!(stats.words, 2);
        assert_eq!(stats.leaves, 2);
        assert_eq!(stats.single_child_nodes, 1);
        assert!((stats.branching_factor() - 0.75).abs() < 1e-9);
    }
}
