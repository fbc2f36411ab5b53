//! Edit penalties and the per-step pruning threshold.
//!
//! The frontier search is parameterized by a [`PenaltyPolicy`] so that the
//! scoring model can be swapped without touching the search itself. The
//! well-known implementation is [`KeyboardPenalty`], which charges
//! replacements by physical key distance; [`PhoneticPenalty`] and
//! [`UniformPenalty`] are drop-in alternatives.
//!
//! All costs are small non-negative integers. A path is abandoned once its
//! accumulated penalty exceeds [`PenaltyPolicy::max_mistakes`] for the
//! current input position.

use crate::keyboard::KeyboardLayout;

/// Default base allowance for [`PenaltyPolicy::max_mistakes`].
pub const DEFAULT_BASE_MISTAKES: u32 = 3;

const EXACT_COST: u32 = 0;
const SWAP_COST: u32 = 2;
const INSERT_COST: u32 = 3;
const DELETE_COST: u32 = 3;

// Replacement distances are clamped into [1, REPLACE_CAP]; a distance of
// zero only happens via lookahead onto the very next input letter, and
// still costs SAME_KEY_COST so that shift-equivalent substitutions keep a
// floor.
const REPLACE_CAP: u32 = 4;
const SAME_KEY_COST: u32 = 2;

/// Cost model consulted at every edit decision of the frontier search.
///
/// `current` is always the input letter being processed; `next` is the
/// one-letter lookahead, absent at the last input position. Defaults
/// implement the canonical flat costs, leaving only [`replace`] for the
/// implementation to define.
///
/// [`replace`]: PenaltyPolicy::replace
pub trait PenaltyPolicy {
    /// Upper bound on accumulated penalty after `step` input letters
    /// (`step >= 1`). Must be monotonically non-decreasing in `step`.
    fn max_mistakes(&self, step: usize) -> u32 {
        (step as u32).max(DEFAULT_BASE_MISTAKES)
    }

    /// Cost of consuming a letter that matches the dictionary exactly.
    fn exact_match(&self, letter: u8) -> u32 {
        let _ = letter;
        EXACT_COST
    }

    /// Cost of transposing two adjacent input letters.
    fn swap(&self, current: u8, next: u8) -> u32 {
        let _ = (current, next);
        SWAP_COST
    }

    /// Cost of the dictionary word carrying `inserted` where the input
    /// skipped straight to `current`.
    fn insert(&self, current: u8, inserted: u8, next: Option<u8>) -> u32 {
        let _ = (current, inserted, next);
        INSERT_COST
    }

    /// Cost of treating `current` as a spurious input letter.
    fn delete(&self, previous: Option<u8>, current: u8, next: Option<u8>) -> u32 {
        let _ = (previous, current, next);
        DELETE_COST
    }

    /// Cost of the input carrying `current` where the dictionary word
    /// carries `candidate`.
    fn replace(&self, current: u8, candidate: u8, next: Option<u8>) -> u32;
}

/// The canonical keyboard-aware policy.
///
/// Replacement cost is the clamped key distance between the typed and the
/// dictionary letter. With lookahead, the replacement is also credited for
/// approaching the *next* input letter: the charged cost is the minimum of
/// the two clamped distances, which rewards substitutions that keep the
/// finger travelling towards where the input goes next.
#[derive(Debug, Clone)]
pub struct KeyboardPenalty {
    layout: KeyboardLayout,
    base_mistakes: u32,
}

impl KeyboardPenalty {
    /// Bind the policy to a layout, with the canonical base allowance.
    pub fn new(layout: KeyboardLayout) -> Self {
        Self {
            layout,
            base_mistakes: DEFAULT_BASE_MISTAKES,
        }
    }

    /// Canonical policy over the built-in QWERTY planes.
    pub fn qwerty() -> Self {
        Self::new(KeyboardLayout::qwerty())
    }

    /// Override the base mistake allowance (the `3` in `max(3, step)`).
    ///
    /// This is the single quality-versus-cost knob of the engine: raising it
    /// widens the frontier for short words, lowering it prunes harder.
    pub fn with_base_mistakes(mut self, base: u32) -> Self {
        self.base_mistakes = base;
        self
    }

    /// The layout this policy charges distances against.
    pub fn layout(&self) -> &KeyboardLayout {
        &self.layout
    }

    // Unknown characters and far-apart keys both cap at REPLACE_CAP;
    // distance zero keeps the SAME_KEY_COST floor.
    fn clamped_distance(&self, a: u8, b: u8) -> u32 {
        match self.layout.distance(a, b) {
            None => REPLACE_CAP,
            Some(d) if d > REPLACE_CAP => REPLACE_CAP,
            Some(0) => SAME_KEY_COST,
            Some(d) => d,
        }
    }
}

impl PenaltyPolicy for KeyboardPenalty {
    fn max_mistakes(&self, step: usize) -> u32 {
        (step as u32).max(self.base_mistakes)
    }

    fn replace(&self, current: u8, candidate: u8, next: Option<u8>) -> u32 {
        let direct = self.clamped_distance(current, candidate);
        match next {
            None => direct,
            Some(next) => direct.min(self.clamped_distance(candidate, next)),
        }
    }
}

/// Keyboard policy blended with a small pronunciation table.
///
/// Letter pairs that sound alike (`c`/`k`, `v`/`w`, `b`/`p`) replace at a
/// flat phonetic cost when that beats the keyboard distance. Not canonical;
/// provided as the alternative scoring the engine's policy seam exists for.
#[derive(Debug, Clone)]
pub struct PhoneticPenalty {
    keyboard: KeyboardPenalty,
    phonetic_cost: u32,
}

/// Lowercase pairs considered near-homophones.
const PHONETIC_PAIRS: [(u8, u8); 3] = [(b'c', b'k'), (b'v', b'w'), (b'b', b'p')];

impl PhoneticPenalty {
    /// Wrap a keyboard policy with the default phonetic cost of 1.
    pub fn new(keyboard: KeyboardPenalty) -> Self {
        Self {
            keyboard,
            phonetic_cost: 1,
        }
    }

    fn is_phonetic_pair(a: u8, b: u8) -> bool {
        PHONETIC_PAIRS
            .iter()
            .any(|&(x, y)| (a, b) == (x, y) || (a, b) == (y, x))
    }
}

impl PenaltyPolicy for PhoneticPenalty {
    fn max_mistakes(&self, step: usize) -> u32 {
        self.keyboard.max_mistakes(step)
    }

    fn replace(&self, current: u8, candidate: u8, next: Option<u8>) -> u32 {
        let keyboard = self.keyboard.replace(current, candidate, next);
        if Self::is_phonetic_pair(current, candidate) {
            keyboard.min(self.phonetic_cost)
        } else {
            keyboard
        }
    }
}

/// Flat-cost policy: every replacement costs the same.
///
/// Useful as a baseline and for dictionaries whose alphabet has no keyboard
/// rendering at all.
#[derive(Debug, Clone)]
pub struct UniformPenalty {
    replace_cost: u32,
}

impl UniformPenalty {
    /// Policy charging `replace_cost` for every substitution.
    pub fn new(replace_cost: u32) -> Self {
        Self { replace_cost }
    }
}

impl Default for UniformPenalty {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PenaltyPolicy for UniformPenalty {
    fn replace(&self, _current: u8, _candidate: u8, _next: Option<u8>) -> u32 {
        self.replace_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_costs_are_canonical() {
        let policy = KeyboardPenalty::qwerty();
        assert_eq!(policy.exact_match(b'a'), 0);
        assert_eq!(policy.swap(b'a', b'b'), 2);
        assert_eq!(policy.insert(b'a', b'b', Some(b'c')), 3);
        assert_eq!(policy.delete(None, b'a', None), 3);
    }

    #[test]
    fn max_mistakes_has_a_floor_of_three() {
        let policy = KeyboardPenalty::qwerty();
        assert_eq!(policy.max_mistakes(1), 3);
        assert_eq!(policy.max_mistakes(3), 3);
        assert_eq!(policy.max_mistakes(7), 7);
    }

    #[test]
    fn max_mistakes_is_monotone() {
        let policy = KeyboardPenalty::qwerty();
        for step in 1..64 {
            assert!(policy.max_mistakes(step) <= policy.max_mistakes(step + 1));
        }
    }

    #[test]
    fn base_mistakes_is_configurable() {
        let policy = KeyboardPenalty::qwerty().with_base_mistakes(5);
        assert_eq!(policy.max_mistakes(1), 5);
        assert_eq!(policy.max_mistakes(8), 8);
    }

    #[test]
    fn replace_charges_clamped_key_distance() {
        let policy = KeyboardPenalty::qwerty();
        // 'f' and 'd' are row neighbours.
        assert_eq!(policy.replace(b'f', b'd', None), 2);
        // 'e' and 'h' are far apart: capped.
        assert_eq!(policy.replace(b'e', b'h', None), 4);
    }

    #[test]
    fn replace_of_unknown_characters_is_capped() {
        let policy = KeyboardPenalty::qwerty();
        assert_eq!(policy.replace(0x80, b'a', None), 4);
        assert_eq!(policy.replace(b'a', 0x80, None), 4);
    }

    #[test]
    fn lookahead_credits_approach_to_next_letter() {
        let policy = KeyboardPenalty::qwerty();
        // Direct distance e->h is capped at 4, but the candidate 'h' is
        // exactly the next input letter: distance 0, floored to 2.
        assert_eq!(policy.replace(b'e', b'h', Some(b'h')), 2);
        // Lookahead can only lower the cost, never raise it.
        assert!(policy.replace(b'f', b'd', Some(b'q')) <= 2);
    }

    #[test]
    fn same_key_floor_applies_through_lookahead() {
        let policy = KeyboardPenalty::qwerty();
        // d2 == 0 must not make the replacement free.
        assert!(policy.replace(b'q', b'p', Some(b'p')) >= 2);
    }

    #[test]
    fn phonetic_pairs_undercut_keyboard_distance() {
        let policy = PhoneticPenalty::new(KeyboardPenalty::qwerty());
        assert_eq!(policy.replace(b'c', b'k', None), 1);
        assert_eq!(policy.replace(b'k', b'c', None), 1);
        // Non-pair falls back to the keyboard cost.
        assert_eq!(policy.replace(b'e', b'h', None), 4);
    }

    #[test]
    fn uniform_policy_is_flat() {
        let policy = UniformPenalty::default();
        assert_eq!(policy.replace(b'a', b'z', None), 1);
        assert_eq!(policy.replace(b'a', b'z', Some(b'q')), 1);
        assert_eq!(policy.max_mistakes(2), 3);
    }
}
