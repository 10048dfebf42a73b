//! The six-sided die.
//!
//! One face lets the roller choose to move one, two or three steps; the
//! other five show a fixed step count from two to six.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::core::GameRng;

/// A single face of the die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DieFace {
    /// Free choice between one, two and three steps.
    OneToThree,
    /// A fixed number of steps (2-6).
    Steps(u8),
}

impl DieFace {
    /// Step totals the mover may distribute across agents.
    #[must_use]
    pub fn totals(self) -> RangeInclusive<u8> {
        match self {
            DieFace::OneToThree => 1..=3,
            DieFace::Steps(n) => n..=n,
        }
    }
}

impl std::fmt::Display for DieFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DieFace::OneToThree => f.write_str("1-3"),
            DieFace::Steps(n) => write!(f, "{}", n),
        }
    }
}

const FACES: [DieFace; 6] = [
    DieFace::OneToThree,
    DieFace::Steps(2),
    DieFace::Steps(3),
    DieFace::Steps(4),
    DieFace::Steps(5),
    DieFace::Steps(6),
];

/// The game die. Stateless; randomness comes from the caller's [`GameRng`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Die;

impl Die {
    /// All faces, in a fixed order.
    #[must_use]
    pub fn faces() -> &'static [DieFace] {
        &FACES
    }

    /// Roll the die. Every face is equally likely.
    pub fn roll(rng: &mut GameRng) -> DieFace {
        FACES[rng.gen_range_usize(0..FACES.len())]
    }
}
