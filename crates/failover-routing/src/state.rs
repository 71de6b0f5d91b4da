use std::fmt::{self, Display};

use serde::Serialize;

/// A concrete region that DNS can point at.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Region {
    /// The normally-active serving region.
    Primary,

    /// The standby disaster-recovery region.
    Dr,
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => f.write_str("primary"),
            Self::Dr => f.write_str("DR"),
        }
    }
}

/// Which region is live in DNS, as far as can be determined.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoutingState {
    /// DNS points at the primary region.
    Primary,

    /// DNS points at the DR region.
    Dr,

    /// No record, an unrecognized target, or the lookup failed.
    Unknown,
}

impl RoutingState {
    /// The region currently receiving traffic, if known.
    #[must_use]
    pub const fn active_region(self) -> Option<Region> {
        match self {
            Self::Primary => Some(Region::Primary),
            Self::Dr => Some(Region::Dr),
            Self::Unknown => None,
        }
    }
}

impl Display for RoutingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => f.write_str("PRIMARY"),
            Self::Dr => f.write_str("DR"),
            Self::Unknown => f.write_str("UNKNOWN"),
        }
    }
}
