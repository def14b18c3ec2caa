use std::fmt;

use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

/// Number of dice in a full pool.
pub const MAX_DICE: usize = 6;

/// The face value shown by a single die.
///
/// Faces are ordered by their pip count, so `Face::Six > Face::One`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Face {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
}

impl Distribution<Face> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Face {
        match rng.random_range(1..=6) {
            1 => Face::One,
            2 => Face::Two,
            3 => Face::Three,
            4 => Face::Four,
            5 => Face::Five,
            _ => Face::Six,
        }
    }
}

impl Face {
    /// Number of distinct faces (6).
    pub const LEN: usize = 6;

    /// All faces in ascending order.
    pub const ALL: [Face; Self::LEN] = [
        Face::One,
        Face::Two,
        Face::Three,
        Face::Four,
        Face::Five,
        Face::Six,
    ];

    /// Returns the face showing `value` pips, or `None` outside `1..=6`.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Face::One),
            2 => Some(Face::Two),
            3 => Some(Face::Three),
            4 => Some(Face::Four),
            5 => Some(Face::Five),
            6 => Some(Face::Six),
            _ => None,
        }
    }

    /// Returns the pip count (1-6).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the zero-based index of this face, for per-face tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// Points for a triple of this face: 300 for ones, `face * 100` otherwise.
    #[expect(clippy::cast_lossless)]
    #[must_use]
    pub const fn triple_points(self) -> u32 {
        match self {
            Face::One => 300,
            _ => self.value() as u32 * 100,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl TryFrom<u8> for Face {
    type Error = crate::InvalidRollError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Face::from_value(value).ok_or(crate::InvalidRollError::InvalidFace { value })
    }
}

impl From<Face> for u8 {
    fn from(face: Face) -> Self {
        face.value()
    }
}
