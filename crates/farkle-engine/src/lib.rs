pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidRollError {
    #[display("roll must contain at least one die")]
    Empty,
    #[display("roll of {len} dice exceeds the 6-die pool")]
    TooManyDice { len: usize },
    #[display("die value {value} is outside 1..=6")]
    InvalidFace { value: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("starting pool of {size} dice is outside 1..=6")]
pub struct PoolSizeError {
    pub size: u8,
}
