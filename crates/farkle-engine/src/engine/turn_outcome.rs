use serde::{Deserialize, Serialize};

/// How a finished turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant)]
pub enum TurnStatus {
    /// The turn ended on a farkle; its round points are forfeited.
    Busted,
    /// The player stopped voluntarily and keeps the round points.
    Ended,
}

/// Final report of a finished turn.
///
/// Tracks the points accumulated during the turn along with how it got there:
///
/// - **Round points**: Sum of everything banked, including points later forfeited
/// - **Status**: [`TurnStatus::Busted`] or [`TurnStatus::Ended`]
/// - **Rolls**: Number of times the pool was thrown, including the final farkle
/// - **Hot dice**: Number of times the pool was emptied and refilled to six
///
/// # Example
///
/// ```
/// use farkle_engine::{TurnOutcome, TurnStatus};
///
/// let outcome = TurnOutcome {
///     round_points: 450,
///     status: TurnStatus::Busted,
///     rolls: 4,
///     hot_dice: 1,
/// };
/// assert_eq!(outcome.scored_points(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub round_points: u32,
    pub status: TurnStatus,
    pub rolls: u32,
    pub hot_dice: u32,
}

impl TurnOutcome {
    /// Points this turn contributes to the player's score: the round points
    /// if the turn ended voluntarily, zero if it busted.
    #[must_use]
    pub const fn scored_points(&self) -> u32 {
        match self.status {
            TurnStatus::Busted => 0,
            TurnStatus::Ended => self.round_points,
        }
    }
}
