// Four-candidate match finder.
//
// Rather than walking hash chains, each scan position probes exactly four
// candidates, one per context hash (3, 5, 9 and 13 bytes).  The longest
// candidate that passes the acceptance policy wins; ties keep the earlier
// probe.  All four slots are then pointed at the current position.  The
// update must come after every probe so a position never matches itself.

use std::collections::TryReserveError;

use super::config::{self, LOOKAHEAD, MAX_MATCH, MIN_MATCH};
use super::rolling::{ContextHashes, forward_match};
use super::table::HashTable;

// ---------------------------------------------------------------------------
// Match result
// ---------------------------------------------------------------------------

/// An accepted back-reference from the current scan position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Number of bytes to copy (`MIN_MATCH..=MAX_MATCH`).
    pub length: usize,
    /// How far back the copy starts (`>= 1`).
    pub distance: usize,
}

// ---------------------------------------------------------------------------
// Match finder
// ---------------------------------------------------------------------------

/// Per-call match finder state.
pub struct MatchFinder {
    table: HashTable,
    window: usize,
}

impl MatchFinder {
    /// Create a finder with a fresh table of `hash_size` slots and the given
    /// match window.
    pub fn new(hash_size: usize, window: usize) -> Result<Self, TryReserveError> {
        Ok(Self {
            table: HashTable::try_new(hash_size)?,
            window,
        })
    }

    /// Match window in bytes.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Probe the four candidates for `input[pos..]` and record `pos`.
    ///
    /// Requires `pos + LOOKAHEAD <= input.len()`.  Returns the best accepted
    /// match, or `None` if the position should be emitted as a literal.
    pub fn probe(&mut self, input: &[u8], pos: usize) -> Option<Match> {
        debug_assert!(pos + LOOKAHEAD <= input.len());

        let here = &input[pos..];
        let max_len = here.len().min(MAX_MATCH);
        let slots = ContextHashes::compute(here).slots(self.table.mask());

        let mut best: Option<Match> = None;
        for (i, &slot) in slots.iter().enumerate() {
            let Some(cand) = self.table.get(slot) else {
                continue;
            };
            let distance = pos - cand;
            // Later probes skip a candidate that is the current best.
            if i > 0 && best.is_some_and(|b| b.distance == distance) {
                continue;
            }
            let length = forward_match(&input[cand..], here, max_len);
            let best_len = best.map_or(MIN_MATCH - 1, |b| b.length);
            if length > best_len && config::is_worthwhile(length, distance, self.window) {
                best = Some(Match { length, distance });
            }
        }

        for slot in slots {
            self.table.set(slot, pos);
        }

        best
    }
}
