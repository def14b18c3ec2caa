use std::fmt::Write as _;

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{DicePool, Face, Roll};

/// A source of independent, uniformly distributed die faces.
///
/// The turn engine calls [`Self::next_face`] exactly once per die in the
/// pool, through [`Self::roll`].
pub trait DieSource {
    /// Draws the face of a single die.
    fn next_face(&mut self) -> Face;

    /// Throws `pool` dice.
    ///
    /// # Panics
    ///
    /// Panics if the pool is empty; a turn always refills an empty pool
    /// before rolling.
    fn roll(&mut self, pool: DicePool) -> Roll {
        assert!(!pool.is_empty(), "cannot roll an empty pool");
        Roll::new((0..pool.size()).map(|_| self.next_face()))
            .expect("pool of 1..=6 dice always forms a valid roll")
    }
}

impl<S> DieSource for &mut S
where
    S: DieSource + ?Sized,
{
    fn next_face(&mut self) -> Face {
        (**self).next_face()
    }
}

/// Seed for deterministic dice generation.
///
/// This is a 128-bit (16-byte) seed used to initialize the PCG32 generator
/// behind [`SeededDieSource`]. Using the same seed produces the same sequence
/// of faces, which makes simulations reproducible for regression tests and
/// lets sweep cells share their random numbers.
///
/// Seeds serialize as 32 lowercase hex characters.
///
/// # Example
///
/// ```
/// use farkle_engine::{DiceSeed, DieSource as _, SeededDieSource};
/// use rand::Rng as _;
///
/// let seed: DiceSeed = rand::rng().random();
///
/// let mut a = SeededDieSource::with_seed(seed);
/// let mut b = SeededDieSource::with_seed(seed);
/// assert_eq!(a.next_face(), b.next_face());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiceSeed([u8; 16]);

impl DiceSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Formats the seed as 32 lowercase hex characters.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let num = u128::from_be_bytes(self.0);
        let mut hex_str = String::with_capacity(2 * self.0.len());
        write!(&mut hex_str, "{num:032x}").unwrap();
        hex_str
    }

    /// Parses a seed from exactly 32 hex characters (either case).
    pub fn from_hex(hex_str: &str) -> Result<Self, InvalidSeedError> {
        if hex_str.len() != 32 {
            return Err(InvalidSeedError {
                input: hex_str.to_owned(),
            });
        }
        let num = u128::from_str_radix(hex_str, 16).map_err(|_| InvalidSeedError {
            input: hex_str.to_owned(),
        })?;
        Ok(Self(num.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid hex seed: expected 32 hex characters, got {input:?}")]
pub struct InvalidSeedError {
    pub input: String,
}

impl std::str::FromStr for DiceSeed {
    type Err = InvalidSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl std::fmt::Display for DiceSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for DiceSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for DiceSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        Self::from_hex(&hex_str).map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `DiceSeed` values using the standard random distribution.
///
/// This implementation enables idiomatic seed generation with `rng.random()`.
impl Distribution<DiceSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DiceSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        DiceSeed(seed)
    }
}

/// Die source backed by a seeded PCG32 generator.
#[derive(Debug, Clone)]
pub struct SeededDieSource {
    rng: Pcg32,
}

impl Default for SeededDieSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SeededDieSource {
    /// Creates a die source with a random seed.
    ///
    /// For reproducible rolls, use [`Self::with_seed`] instead.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for deterministic rolls.
    #[must_use]
    pub fn with_seed(seed: DiceSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
        }
    }
}

impl DieSource for SeededDieSource {
    fn next_face(&mut self) -> Face {
        self.rng.random()
    }
}
