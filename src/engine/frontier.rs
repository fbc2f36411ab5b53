//! The live frontier of a correction query.
//!
//! A [`Frontier`] holds every search path still worth pursuing: each
//! [`SearchState`] sits on a trie node with the dictionary prefix spelled so
//! far and the penalty paid to get there. [`Frontier::advance`] consumes one
//! input letter, expanding every state across the edit operations and then
//! pruning everything over the policy's per-step threshold.

use crate::dictionary::{NodeId, Trie};
use crate::penalty::PenaltyPolicy;

/// One live search path.
///
/// Invariants: `penalty` never decreases across expansions; `word` always
/// spells the trie path from the root to `node`; `skip_next` is only ever
/// set by a swap and is consumed on the very next expansion.
#[derive(Debug, Clone)]
pub struct SearchState {
    node: NodeId,
    penalty: u32,
    word: Vec<u8>,
    skip_next: bool,
}

impl SearchState {
    /// Trie node this path has matched up to.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Accumulated penalty of this path.
    pub fn penalty(&self) -> u32 {
        self.penalty
    }

    /// Dictionary prefix spelled along the path.
    pub fn word(&self) -> &[u8] {
        &self.word
    }
}

/// Recycles the word buffers of pruned states; expansion allocates one
/// descendant per edit per state, so buffer churn dominates a query's
/// allocation volume.
#[derive(Debug, Default)]
struct WordPool {
    buffers: Vec<Vec<u8>>,
}

impl WordPool {
    const MAX_POOLED: usize = 64;

    fn acquire(&mut self, base: &[u8]) -> Vec<u8> {
        let mut buffer = self.buffers.pop().unwrap_or_default();
        buffer.clear();
        buffer.extend_from_slice(base);
        buffer
    }

    fn release(&mut self, buffer: Vec<u8>) {
        if self.buffers.len() < Self::MAX_POOLED {
            self.buffers.push(buffer);
        }
    }
}

/// The multiset of live search states at one input position.
#[derive(Debug)]
pub struct Frontier {
    states: Vec<SearchState>,
    step: usize,
    pool: WordPool,
}

impl Frontier {
    /// Fresh frontier: a single state at the trie root with penalty 0.
    pub fn new(root: NodeId) -> Self {
        Self {
            states: vec![SearchState {
                node: root,
                penalty: 0,
                word: Vec::new(),
                skip_next: false,
            }],
            step: 0,
            pool: WordPool::default(),
        }
    }

    /// Number of input letters processed so far.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Live states, in expansion order.
    pub fn states(&self) -> &[SearchState] {
        &self.states
    }

    /// Number of live states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether every path has been pruned.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Process one input letter with an optional one-letter lookahead.
    ///
    /// Expansion walks a snapshot of the current states only: descendants
    /// appended during the step are not themselves expanded until the next
    /// letter. Each surviving pre-step state then pays the delete cost in
    /// place (the input letter treated as spurious), and finally everything
    /// with `penalty > max_mistakes(step)` is discarded, preserving order
    /// among the survivors.
    pub fn advance<P: PenaltyPolicy + ?Sized>(
        &mut self,
        trie: &Trie,
        policy: &P,
        input: u8,
        lookahead: Option<u8>,
    ) {
        let snapshot = self.states.len();
        for i in 0..snapshot {
            if self.states[i].skip_next {
                // The swap that produced this state already accounted for
                // this input letter.
                self.states[i].skip_next = false;
                continue;
            }

            let node = self.states[i].node;
            let penalty = self.states[i].penalty;

            // Swap: typed `input · lookahead` where the dictionary spells
            // `lookahead · input`. Only meaningful when a lookahead exists;
            // a trailing letter is never swap-candidate.
            if let Some(next) = lookahead {
                if let Some(swapped) = trie.child(node, next).and_then(|m| trie.child(m, input)) {
                    let mut word = self.pool.acquire(&self.states[i].word);
                    word.push(next);
                    word.push(input);
                    self.states.push(SearchState {
                        node: swapped,
                        penalty: penalty + policy.swap(input, next),
                        word,
                        skip_next: true,
                    });
                }
            }

            // Insert: the dictionary carries an extra letter the typist
            // skipped, so step through a child and land on `input` below it.
            for &skipped in trie.children(node) {
                if let Some(target) = trie.child(skipped, input) {
                    let inserted = trie.letter(skipped);
                    let mut word = self.pool.acquire(&self.states[i].word);
                    word.push(inserted);
                    word.push(input);
                    self.states.push(SearchState {
                        node: target,
                        penalty: penalty + policy.insert(input, inserted, lookahead),
                        word,
                        skip_next: false,
                    });
                }
            }

            // Exact match or replacement, one descendant per child.
            for &child in trie.children(node) {
                let letter = trie.letter(child);
                let cost = if letter == input {
                    policy.exact_match(letter)
                } else {
                    policy.replace(input, letter, lookahead)
                };
                let mut word = self.pool.acquire(&self.states[i].word);
                word.push(letter);
                self.states.push(SearchState {
                    node: child,
                    penalty: penalty + cost,
                    word,
                    skip_next: false,
                });
            }

            // Delete: this path stays put and pays for ignoring `input`.
            let state = &mut self.states[i];
            let previous = if state.word.len() < 2 {
                None
            } else {
                Some(state.word[state.word.len() - 2])
            };
            state.penalty += policy.delete(previous, input, lookahead);
        }

        self.step += 1;
        let threshold = policy.max_mistakes(self.step);

        // Stable compaction: survivors keep their order, pruned states give
        // their buffers back to the pool.
        let mut kept = 0;
        for i in 0..self.states.len() {
            if self.states[i].penalty <= threshold {
                self.states.swap(kept, i);
                kept += 1;
            }
        }
        for state in self.states.drain(kept..) {
            self.pool.release(state.word);
        }
    }
}
