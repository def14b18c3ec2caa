//! Classification of a roll into face groups and whole-roll combinations.

use serde::{Deserialize, Serialize};

use super::{
    face_counts::{FaceCounts, FaceGroup, FaceGroups},
    roll::Roll,
};

/// A combination that scores the entire roll at once.
///
/// Each one consumes every die in the pool, so banking it always yields hot
/// dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Combination {
    /// Three distinct faces, two of each.
    ThreePairs,
    /// Four of one face and two of another.
    FourOfAKindAndPair,
    /// All six faces once each.
    Straight,
    /// All six dice on one face.
    SixOfAKind,
    /// Three of one face and three of another.
    TwoTriplets,
}

impl Combination {
    /// Combinations in the order they are tested; the first match wins.
    pub const PRIORITY: [Combination; 5] = [
        Combination::ThreePairs,
        Combination::FourOfAKindAndPair,
        Combination::Straight,
        Combination::SixOfAKind,
        Combination::TwoTriplets,
    ];

    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Combination::ThreePairs | Combination::FourOfAKindAndPair => 1500,
            Combination::Straight | Combination::TwoTriplets => 2500,
            Combination::SixOfAKind => 3000,
        }
    }

    /// Returns `true` if the ordered groups form this combination.
    fn matches(self, groups: &[FaceGroup]) -> bool {
        let all_counts = |count| groups.iter().all(|g| g.count == count);
        match self {
            Combination::ThreePairs => groups.len() == 3 && all_counts(2),
            Combination::FourOfAKindAndPair => {
                groups.len() == 2 && groups[0].count == 4 && groups[1].count == 2
            }
            Combination::Straight => groups.len() == 6 && all_counts(1),
            Combination::SixOfAKind => groups.len() == 1 && groups[0].count == 6,
            Combination::TwoTriplets => groups.len() == 2 && all_counts(3),
        }
    }
}

/// Immutable snapshot of a classified roll.
///
/// Holds the per-face counts, the face groups in inspection order (descending
/// count, then descending face) and the whole-roll combination, if any.
///
/// # Example
///
/// ```
/// use farkle_engine::{Combination, Face, Roll, RollClassification};
///
/// let roll = Roll::from_values(&[4, 2, 4, 6, 2, 6]).unwrap();
/// let classification = RollClassification::new(&roll);
/// assert_eq!(classification.combination(), Some(Combination::ThreePairs));
///
/// let roll = Roll::from_values(&[3, 1, 3, 3]).unwrap();
/// let classification = RollClassification::new(&roll);
/// assert_eq!(classification.combination(), None);
/// assert_eq!(classification.groups()[0].face, Face::Three);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollClassification {
    counts: FaceCounts,
    groups: FaceGroups,
    combination: Option<Combination>,
}

impl RollClassification {
    #[must_use]
    pub fn new(roll: &Roll) -> Self {
        Self::from_counts(roll.counts())
    }

    #[must_use]
    pub fn from_counts(counts: FaceCounts) -> Self {
        let groups = counts.groups();
        let combination = Combination::PRIORITY
            .into_iter()
            .find(|combination| combination.matches(&groups));
        Self {
            counts,
            groups,
            combination,
        }
    }

    #[must_use]
    pub fn counts(&self) -> &FaceCounts {
        &self.counts
    }

    #[must_use]
    pub fn groups(&self) -> &[FaceGroup] {
        &self.groups
    }

    #[must_use]
    pub fn combination(&self) -> Option<Combination> {
        self.combination
    }

    /// Number of dice in the classified roll.
    #[must_use]
    pub fn dice(&self) -> u8 {
        self.counts.total()
    }
}
