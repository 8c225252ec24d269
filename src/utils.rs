use crate::game::Move;

// ---------- Tune-ables ---------- //
pub const PATTERN_LENGTH: usize = 3;  // How many recent opponent moves form a table key (2 or 4 also work)
pub const DEFAULT_MOVE: Move = Move::Rock;  // Played while history is too short to consult the table
pub const FALLBACK_PREDICTION: Move = Move::Rock;  // Assumed opponent move for a never-seen window

// ---------- Basic types ---------- //
/// An ordered run of recent opponent moves, the pattern-table lookup key.
pub type Window = [Move; PATTERN_LENGTH];

// ---------- Traits the match driver consumes ----------
/// A strategy maps the opponent's previous play to its own next move.
/// The driver passes `None` exactly once at the start of each match, before
/// any real move has been observed, then `Some(move)` every round after.
pub trait Strategy {
    fn decide(&mut self, prev_play: Option<Move>) -> Move;
}
