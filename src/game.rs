//! # Rock-Paper-Scissors moves
//!
//! The game vocabulary: three moves in a fixed cyclic dominance relation.
//! Rock beats Scissors, Scissors beats Paper, Paper beats Rock.

use std::fmt;

/// One of the three possible actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move { Rock, Paper, Scissors }

impl Move {
    /// The three moves, in the fixed total order (Rock < Paper < Scissors)
    /// used wherever a deterministic ordering is needed.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The move this move defeats.
    #[inline] pub fn beats(self) -> Move {
        match self { Move::Rock => Move::Scissors, Move::Paper => Move::Rock, Move::Scissors => Move::Paper }
    }

    /// The move that defeats this move.
    #[inline] pub fn counter(self) -> Move {
        match self { Move::Rock => Move::Paper, Move::Paper => Move::Scissors, Move::Scissors => Move::Rock }
    }

    /// Single-letter name, the vocabulary match logs and drivers speak.
    pub fn name(self) -> &'static str {
        match self { Move::Rock => "R", Move::Paper => "P", Move::Scissors => "S" }
    }

    /// Inverse of [`Move::name`]; `None` for anything unrecognized.
    pub fn from_letter(letter: char) -> Option<Move> {
        match letter {
            'R' => Some(Move::Rock),
            'P' => Some(Move::Paper),
            'S' => Some(Move::Scissors),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominance_is_a_three_cycle() {
        for &m in Move::ALL.iter() {
            assert_ne!(m.beats(), m);
            assert_ne!(m.counter(), m);
            assert_eq!(m.counter().beats(), m);
            assert_eq!(m.beats().counter(), m);
        }
        assert_eq!(Move::Rock.beats(), Move::Scissors);
        assert_eq!(Move::Scissors.beats(), Move::Paper);
        assert_eq!(Move::Paper.beats(), Move::Rock);
    }

    #[test]
    fn letters_round_trip() {
        for &m in Move::ALL.iter() {
            let letter = m.name().chars().next().unwrap();
            assert_eq!(Move::from_letter(letter), Some(m));
            assert_eq!(m.to_string(), m.name());
        }
        assert_eq!(Move::from_letter('x'), None);
        assert_eq!(Move::from_letter('r'), None);
    }
}
