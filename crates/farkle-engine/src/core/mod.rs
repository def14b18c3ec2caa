pub use self::{classification::*, face::*, face_counts::*, pool::*, roll::*};

pub(crate) mod classification;
pub(crate) mod face;
pub(crate) mod face_counts;
pub(crate) mod pool;
pub(crate) mod roll;
