//! # Pattern predictor
//!
//! The decision agent. It keeps the full history of opponent moves for the
//! current match and a frequency table of which move followed each
//! `PATTERN_LENGTH`-long run of moves. Every round it looks up the most
//! recent run, predicts the opponent's most common follow-up, and plays the
//! counter to that prediction.

use crate::game::Move;
use crate::utils::{Strategy, Window, DEFAULT_MOVE, FALLBACK_PREDICTION, PATTERN_LENGTH};
use log::{debug, trace};
use std::collections::HashMap;

// ---------- MoveCounts ----------
/// How often each move followed one particular window.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct MoveCounts([u32; 3]);

impl MoveCounts {
    /// Record one more occurrence of `next` after the owning window.
    pub fn bump(&mut self, next: Move) {
        self.0[next as usize] += 1;
    }

    /// How many times `next` followed the owning window.
    pub fn count(self, next: Move) -> u32 {
        self.0[next as usize]
    }

    /// The most frequent follow-up. Ties resolve to the first maximal entry
    /// in Rock < Paper < Scissors order.
    pub fn most_common(self) -> Move {
        let mut best = Move::Rock;
        for &m in &[Move::Paper, Move::Scissors] {
            if self.count(m) > self.count(best) { best = m; }
        }
        best
    }
}

// ---------- PatternTable ----------
/// Frequency table: window of recent opponent moves -> follow-up counts.
///
/// Invariant: the counts under each key sum to the number of times that
/// exact window appeared in the history with a move after it.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct PatternTable {
    counts: HashMap<Window, MoveCounts>,
}

impl PatternTable {
    /// Count one observed (window, follow-up) pair.
    pub fn record(&mut self, window: Window, next: Move) {
        self.counts.entry(window).or_default().bump(next);
    }

    /// Follow-up counts for `window`, if that window has ever been observed.
    pub fn lookup(&self, window: &Window) -> Option<&MoveCounts> {
        self.counts.get(window)
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.counts.clear();
    }

    /// Build from a full history in one scan: every `PATTERN_LENGTH`-long
    /// run with a move after it contributes one count.
    pub fn from_history(history: &[Move]) -> PatternTable {
        let mut table = PatternTable::default();
        for i in 0..history.len().saturating_sub(PATTERN_LENGTH) {
            let window: Window = std::array::from_fn(|k| history[i + k]);
            table.record(window, history[i + PATTERN_LENGTH]);
        }
        table
    }
}

// ---------- PatternPredictor ----------
/// Stateful decision agent for one match.
///
/// The driver owns one instance per match (state is match-scoped, so
/// concurrent matches each need their own instance) and runs it through
/// [`Strategy`]: `decide(None)` once at match start, then `decide(Some(m))`
/// every round after.
#[derive(Clone, Default, Debug)]
pub struct PatternPredictor {
    /// Every opponent move seen this match, oldest first.
    history: Vec<Move>,
    /// Kept in sync with `history`; always equal to
    /// `PatternTable::from_history(&self.history)`.
    table: PatternTable,
}

impl PatternPredictor {
    /// Fresh, cold predictor.
    pub fn new() -> PatternPredictor {
        PatternPredictor::default()
    }

    /// Clear all match-scoped state, as if freshly constructed.
    pub fn reset(&mut self) {
        self.history.clear();
        self.table.clear();
    }

    /// Every opponent move seen this match, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Pick the next move. `None` signals the start of a new match and
    /// resets all state before anything else happens; `Some(m)` is the
    /// opponent's play from the previous round. Always returns a move.
    pub fn decide(&mut self, prev_play: Option<Move>) -> Move {
        match prev_play {
            None => self.reset(),
            Some(m) => self.observe(m),
        }
        if self.history.len() < PATTERN_LENGTH {
            return DEFAULT_MOVE;  // cold: nothing to look up yet
        }
        let recent = self.window_ending_at(self.history.len());
        let predicted = match self.table.lookup(&recent) {
            Some(counts) => {
                trace!("follow-ups after {:?}: {:?}", recent, counts);
                counts.most_common()
            }
            None => FALLBACK_PREDICTION,
        };
        debug!("recent {:?} -> predicting {}, playing {}", recent, predicted, predicted.counter());
        predicted.counter()
    }

    /// Append one opponent move and fold it into the table. The new move is
    /// the follow-up to the window that ended just before it.
    fn observe(&mut self, m: Move) {
        self.history.push(m);
        if self.history.len() > PATTERN_LENGTH {
            let window = self.window_ending_at(self.history.len() - 1);
            self.table.record(window, m);
        }
    }

    /// The `PATTERN_LENGTH` moves ending just before index `end`.
    fn window_ending_at(&self, end: usize) -> Window {
        std::array::from_fn(|k| self.history[end - PATTERN_LENGTH + k])
    }
}

impl Strategy for PatternPredictor {
    fn decide(&mut self, prev_play: Option<Move>) -> Move {
        PatternPredictor::decide(self, prev_play)
    }
}
