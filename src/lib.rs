//! # Pattern Player
//!
//! An adaptive strategy agent for repeated Rock-Paper-Scissors. The agent
//! watches the opponent's moves, learns which move tends to follow each
//! short run of recent moves, and plays the counter to the predicted
//! follow-up.
//!
//! - [`game`]: the three moves and their cyclic dominance relation
//! - [`utils`]: tune-able constants and the driver-facing [`utils::Strategy`] trait
//! - [`predictor`]: the pattern table and the [`predictor::PatternPredictor`] agent
//!
//! The match driver owns one predictor per match: `decide(None)` once at
//! match start, then `decide(Some(opponent_move))` every round after. The
//! driver scores the rounds itself; the agent only picks moves.

pub mod game;
pub mod predictor;
pub mod utils;
