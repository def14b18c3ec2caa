//! Banking thresholds: the tunable knobs of the threshold scoring policy.

use farkle_engine::{Face, MAX_DICE};
use serde::{Deserialize, Serialize};

/// Largest meaningful cutoff; a cutoff of 6 banks the piece at any pool size.
#[expect(clippy::cast_possible_truncation)]
pub const MAX_CUTOFF: u8 = MAX_DICE as u8;

/// Which threshold a [`ThresholdError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ThresholdKind {
    #[display("ones dice cutoff")]
    OnesDice,
    #[display("fives dice cutoff")]
    FivesDice,
    #[display("triple cutoff for face {_0}")]
    Triple(Face),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{kind} must be within 0..=6, got {value}")]
pub struct ThresholdError {
    #[error(not(source))]
    pub kind: ThresholdKind,
    pub value: u8,
}

/// Pool-size cutoffs at or below which scoring pieces are banked right away.
///
/// - `ones_dice_cutoff`: bank every lone 1 when the pool has at most this many dice
/// - `fives_dice_cutoff`: bank every lone 5 when the pool has at most this many dice
/// - `triple_cutoffs[face]`: bank a triple of `face` when the pool has at most this many dice
///
/// All cutoffs are within `0..=6`; a cutoff of 0 never banks the piece
/// voluntarily (it may still be forced when it is the only score available).
///
/// The defaults are the best configuration found by sweeping:
/// ones at 4, fives at 3, and triples of 1/2/3/4/5/6 at 4/1/4/6/6/6.
///
/// # Example
///
/// ```
/// use farkle_engine::Face;
/// use farkle_evaluator::thresholds::ScoringThresholds;
///
/// let thresholds = ScoringThresholds::default()
///     .with_ones_dice_cutoff(5)
///     .unwrap();
/// assert_eq!(thresholds.ones_dice_cutoff(), 5);
/// assert_eq!(thresholds.triple_cutoff(Face::Two), 1);
/// assert!(ScoringThresholds::new(7, 3, [4, 1, 4, 6, 6, 6]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawScoringThresholds")]
pub struct ScoringThresholds {
    ones_dice_cutoff: u8,
    fives_dice_cutoff: u8,
    triple_cutoffs: [u8; Face::LEN],
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            ones_dice_cutoff: 4,
            fives_dice_cutoff: 3,
            triple_cutoffs: [4, 1, 4, 6, 6, 6],
        }
    }
}

fn check(kind: ThresholdKind, value: u8) -> Result<u8, ThresholdError> {
    if value > MAX_CUTOFF {
        return Err(ThresholdError { kind, value });
    }
    Ok(value)
}

impl ScoringThresholds {
    /// Builds validated thresholds; `triple_cutoffs` is indexed by face 1-6.
    pub fn new(
        ones_dice_cutoff: u8,
        fives_dice_cutoff: u8,
        triple_cutoffs: [u8; Face::LEN],
    ) -> Result<Self, ThresholdError> {
        let ones_dice_cutoff = check(ThresholdKind::OnesDice, ones_dice_cutoff)?;
        let fives_dice_cutoff = check(ThresholdKind::FivesDice, fives_dice_cutoff)?;
        for face in Face::ALL {
            check(ThresholdKind::Triple(face), triple_cutoffs[face.index()])?;
        }
        Ok(Self {
            ones_dice_cutoff,
            fives_dice_cutoff,
            triple_cutoffs,
        })
    }

    #[must_use]
    pub const fn ones_dice_cutoff(&self) -> u8 {
        self.ones_dice_cutoff
    }

    #[must_use]
    pub const fn fives_dice_cutoff(&self) -> u8 {
        self.fives_dice_cutoff
    }

    #[must_use]
    pub const fn triple_cutoff(&self, face: Face) -> u8 {
        self.triple_cutoffs[face.index()]
    }

    #[must_use]
    pub const fn triple_cutoffs(&self) -> &[u8; Face::LEN] {
        &self.triple_cutoffs
    }

    pub fn with_ones_dice_cutoff(self, cutoff: u8) -> Result<Self, ThresholdError> {
        Ok(Self {
            ones_dice_cutoff: check(ThresholdKind::OnesDice, cutoff)?,
            ..self
        })
    }

    pub fn with_fives_dice_cutoff(self, cutoff: u8) -> Result<Self, ThresholdError> {
        Ok(Self {
            fives_dice_cutoff: check(ThresholdKind::FivesDice, cutoff)?,
            ..self
        })
    }

    pub fn with_triple_cutoff(mut self, face: Face, cutoff: u8) -> Result<Self, ThresholdError> {
        self.triple_cutoffs[face.index()] = check(ThresholdKind::Triple(face), cutoff)?;
        Ok(self)
    }
}

/// Unvalidated shape of [`ScoringThresholds`] as it appears in config files.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawScoringThresholds {
    ones_dice_cutoff: u8,
    fives_dice_cutoff: u8,
    triple_cutoffs: [u8; Face::LEN],
}

impl TryFrom<RawScoringThresholds> for ScoringThresholds {
    type Error = ThresholdError;

    fn try_from(raw: RawScoringThresholds) -> Result<Self, Self::Error> {
        Self::new(
            raw.ones_dice_cutoff,
            raw.fives_dice_cutoff,
            raw.triple_cutoffs,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let d = ScoringThresholds::default();
        assert_eq!(
            ScoringThresholds::new(d.ones_dice_cutoff, d.fives_dice_cutoff, d.triple_cutoffs),
            Ok(d)
        );
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        assert_eq!(
            ScoringThresholds::new(7, 3, [4; 6]),
            Err(ThresholdError {
                kind: ThresholdKind::OnesDice,
                value: 7
            })
        );
        assert_eq!(
            ScoringThresholds::new(4, 9, [4; 6]).unwrap_err().kind,
            ThresholdKind::FivesDice
        );
        assert_eq!(
            ScoringThresholds::new(4, 3, [4, 1, 4, 6, 60, 6])
                .unwrap_err()
                .kind,
            ThresholdKind::Triple(Face::Five)
        );
    }

    #[test]
    fn test_builders_validate() {
        let t = ScoringThresholds::default();
        assert!(t.with_fives_dice_cutoff(6).is_ok());
        assert!(t.with_fives_dice_cutoff(7).is_err());
        let t = t.with_triple_cutoff(Face::Three, 0).unwrap();
        assert_eq!(t.triple_cutoff(Face::Three), 0);
        assert!(t.with_triple_cutoff(Face::Six, 8).is_err());
    }

    #[test]
    fn test_error_message() {
        let err = ScoringThresholds::default()
            .with_triple_cutoff(Face::Two, 9)
            .unwrap_err();
        assert_eq!(err.to_string(), "triple cutoff for face 2 must be within 0..=6, got 9");
    }

    #[test]
    fn test_json_roundtrip() {
        let t = ScoringThresholds::new(5, 2, [3, 3, 3, 5, 5, 5]).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(
            json,
            r#"{"ones_dice_cutoff":5,"fives_dice_cutoff":2,"triple_cutoffs":[3,3,3,5,5,5]}"#
        );
        assert_eq!(serde_json::from_str::<ScoringThresholds>(&json).unwrap(), t);
    }

    #[test]
    fn test_json_rejects_invalid_config() {
        let json = r#"{"ones_dice_cutoff":5,"fives_dice_cutoff":12,"triple_cutoffs":[3,3,3,5,5,5]}"#;
        let err = serde_json::from_str::<ScoringThresholds>(json).unwrap_err();
        assert!(err.to_string().contains("fives dice cutoff"));

        let json = r#"{"ones_dice_cutoff":5,"fives_dice_cutoff":2,"triple_cutoffs":[3,3,3,5,5,5],"sixes_single":2}"#;
        assert!(serde_json::from_str::<ScoringThresholds>(json).is_err());
    }
}
