use std::fmt;

use arrayvec::ArrayVec;

use crate::InvalidRollError;

use super::{
    face::{Face, MAX_DICE},
    face_counts::FaceCounts,
};

/// The faces shown by one throw of the pool, in the order they were drawn.
///
/// A roll always holds between 1 and 6 dice.
///
/// # Example
///
/// ```
/// use farkle_engine::{Face, Roll};
///
/// let roll = Roll::from_values(&[1, 5, 5]).unwrap();
/// assert_eq!(roll.len(), 3);
/// assert_eq!(roll.counts().count(Face::Five), 2);
/// assert_eq!(roll.to_string(), "[1, 5, 5]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roll {
    faces: ArrayVec<Face, MAX_DICE>,
}

impl Roll {
    /// Builds a roll from faces.
    pub fn new<I>(faces: I) -> Result<Self, InvalidRollError>
    where
        I: IntoIterator<Item = Face>,
    {
        let mut faces = faces.into_iter();
        let collected = faces.by_ref().take(MAX_DICE).collect::<ArrayVec<_, MAX_DICE>>();
        if collected.is_empty() {
            return Err(InvalidRollError::Empty);
        }
        let extra = faces.count();
        if extra > 0 {
            return Err(InvalidRollError::TooManyDice {
                len: MAX_DICE + extra,
            });
        }
        Ok(Self { faces: collected })
    }

    /// Builds a roll from pip values, e.g. `&[1, 5, 5]`.
    pub fn from_values(values: &[u8]) -> Result<Self, InvalidRollError> {
        if values.len() > MAX_DICE {
            return Err(InvalidRollError::TooManyDice { len: values.len() });
        }
        let faces = values
            .iter()
            .map(|v| Face::try_from(*v))
            .collect::<Result<ArrayVec<_, MAX_DICE>, _>>()?;
        Self::new(faces)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Always `false`; kept for API symmetry with [`Self::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Tallies the roll by face.
    #[must_use]
    pub fn counts(&self) -> FaceCounts {
        FaceCounts::from_faces(self.faces.iter().copied())
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, face) in self.faces.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{face}")?;
        }
        f.write_str("]")
    }
}
