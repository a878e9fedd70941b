use serde::{Deserialize, Serialize};

///
/// Direction
///
/// Canonical traversal direction shared by predicate planning, range
/// resolution, and cursor enumeration.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// True when the walk runs from the upper interval end downward.
    #[must_use]
    pub const fn is_descending(self) -> bool {
        matches!(self, Self::Desc)
    }
}
