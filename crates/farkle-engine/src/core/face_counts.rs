use std::{fmt, iter};

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use super::face::{Face, MAX_DICE};

/// A face value together with how many dice show it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceGroup {
    pub face: Face,
    pub count: u8,
}

/// Ordered face groups of a roll, at most one per face.
pub type FaceGroups = ArrayVec<FaceGroup, { Face::LEN }>;

/// Per-face dice counts, indexed by [`Face::index`].
///
/// This is the working representation the scoring policy mutates while it
/// sets dice aside: removing dice only ever lowers a single face's count, so
/// there is no list to reorder.
///
/// # Example
///
/// ```
/// use farkle_engine::{Face, FaceCounts};
///
/// let counts = FaceCounts::from_faces([Face::Two, Face::Five, Face::Two]);
/// assert_eq!(counts.count(Face::Two), 2);
/// assert_eq!(counts.total(), 3);
///
/// let groups = counts.groups();
/// assert_eq!(groups[0].face, Face::Two);
/// assert_eq!(groups[1].face, Face::Five);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceCounts([u8; Face::LEN]);

impl FaceCounts {
    /// Counts with no dice at all.
    pub const EMPTY: Self = Self([0; Face::LEN]);

    /// Tallies the given faces.
    #[must_use]
    pub fn from_faces<I>(faces: I) -> Self
    where
        I: IntoIterator<Item = Face>,
    {
        let mut counts = Self::EMPTY;
        for face in faces {
            counts.0[face.index()] += 1;
        }
        counts
    }

    /// Returns how many dice show `face`.
    #[must_use]
    pub const fn count(&self, face: Face) -> u8 {
        self.0[face.index()]
    }

    /// Returns the total number of dice counted.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.0.iter().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|c| *c == 0)
    }

    /// Returns the number of faces with a non-zero count.
    #[must_use]
    pub fn distinct_faces(&self) -> usize {
        self.0.iter().filter(|c| **c > 0).count()
    }

    /// Adds `count` dice of `face`.
    pub fn add(&mut self, face: Face, count: u8) {
        self.0[face.index()] += count;
        debug_assert!(usize::from(self.total()) <= MAX_DICE);
    }

    /// Removes `count` dice of `face`.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `count` dice of `face` are present.
    pub fn remove(&mut self, face: Face, count: u8) {
        let slot = &mut self.0[face.index()];
        assert!(*slot >= count, "cannot remove {count} dice of face {face}");
        *slot -= count;
    }

    /// Removes every die of `face`, returning how many there were.
    pub fn take_all(&mut self, face: Face) -> u8 {
        std::mem::take(&mut self.0[face.index()])
    }

    /// Iterates over `(face, count)` for faces with a non-zero count, in
    /// ascending face order.
    pub fn iter(&self) -> impl Iterator<Item = FaceGroup> + '_ {
        iter::zip(Face::ALL, self.0)
            .filter(|(_, count)| *count > 0)
            .map(|(face, count)| FaceGroup { face, count })
    }

    /// Returns the face groups ordered by descending count, ties broken by
    /// descending face value.
    #[must_use]
    pub fn groups(&self) -> FaceGroups {
        let mut groups = self.iter().collect::<FaceGroups>();
        groups.sort_unstable_by(|a, b| b.count.cmp(&a.count).then(b.face.cmp(&a.face)));
        groups
    }

    /// Returns the first group in [`Self::groups`] order, if any die remains.
    #[must_use]
    pub fn leading_group(&self) -> Option<FaceGroup> {
        self.iter()
            .max_by(|a, b| a.count.cmp(&b.count).then(a.face.cmp(&b.face)))
    }

    /// Returns `true` if every count is at most the matching count in `other`.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        iter::zip(self.0, other.0).all(|(a, b)| a <= b)
    }
}

impl fmt::Display for FaceCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, group) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}x{}", group.count, group.face)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(values: &[u8]) -> FaceCounts {
        FaceCounts::from_faces(values.iter().map(|v| Face::from_value(*v).unwrap()))
    }

    #[test]
    fn test_groups_ordered_by_count_then_face() {
        let groups = counts(&[2, 6, 2, 3, 6, 1]).groups();
        let order: Vec<_> = groups.iter().map(|g| (g.face.value(), g.count)).collect();
        assert_eq!(order, vec![(6, 2), (2, 2), (3, 1), (1, 1)]);
    }

    #[test]
    fn test_leading_group_matches_groups_head() {
        for values in [
            &[1, 1, 5, 5, 4, 4][..],
            &[3, 3, 3, 1][..],
            &[2, 4][..],
            &[6, 6, 6, 6, 6][..],
        ] {
            let c = counts(values);
            assert_eq!(c.leading_group(), c.groups().first().copied());
        }
        assert_eq!(FaceCounts::EMPTY.leading_group(), None);
    }

    #[test]
    fn test_remove_and_take_all() {
        let mut c = counts(&[1, 1, 5, 3]);
        c.remove(Face::One, 1);
        assert_eq!(c.count(Face::One), 1);
        assert_eq!(c.take_all(Face::Five), 1);
        assert_eq!(c.count(Face::Five), 0);
        assert_eq!(c.total(), 2);
        assert_eq!(c.distinct_faces(), 2);
    }

    #[test]
    #[should_panic(expected = "cannot remove")]
    fn test_remove_more_than_present_panics() {
        let mut c = counts(&[2]);
        c.remove(Face::Two, 2);
    }

    #[test]
    fn test_subset() {
        let roll = counts(&[1, 1, 2, 5]);
        assert!(counts(&[1, 5]).is_subset_of(&roll));
        assert!(!counts(&[5, 5]).is_subset_of(&roll));
        assert!(FaceCounts::EMPTY.is_subset_of(&roll));
    }

    #[test]
    fn test_display() {
        assert_eq!(counts(&[5, 1, 1]).to_string(), "{2x1, 1x5}");
        assert_eq!(FaceCounts::EMPTY.to_string(), "{}");
    }
}
