use std::fmt::{self, Display};

use serde::Serialize;

/// Normalized health of a region.
///
/// Variants are ordered by severity, healthiest first. Anything the provider
/// reports that is not recognized is treated as [`HealthStatus::Error`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum HealthStatus {
    /// The check is passing.
    Success = 0,

    /// The check is passing with warnings.
    Warning = 1,

    /// The provider could not determine the state of the check.
    Unknown = 2,

    /// The check is failing.
    Failure = 3,

    /// The status could not be obtained or was not recognized.
    Error = 4,
}

impl HealthStatus {
    /// Every status, healthiest first.
    pub const ALL: [Self; 5] = [
        Self::Success,
        Self::Warning,
        Self::Unknown,
        Self::Failure,
        Self::Error,
    ];

    /// Map a raw provider status to a `HealthStatus`.
    ///
    /// Only the exact literals `Success`, `Warning`, `Unknown` and `Failure` are
    /// recognized.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "Success" => Self::Success,
            "Warning" => Self::Warning,
            "Unknown" => Self::Unknown,
            "Failure" => Self::Failure,
            _ => Self::Error,
        }
    }

    /// Like [`HealthStatus::from_raw`], with a missing value mapping to `Error`.
    #[must_use]
    pub fn normalize(raw: Option<&str>) -> Self {
        raw.map_or(Self::Error, Self::from_raw)
    }

    /// Whether the region should be considered down (`Failure` or worse).
    #[must_use]
    pub fn is_unhealthy(self) -> bool {
        self >= Self::Failure
    }

    /// Whether the region is healthy enough to receive traffic (`Warning` or
    /// better).
    #[must_use]
    pub fn can_receive_traffic(self) -> bool {
        self <= Self::Warning
    }

    /// The literal name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Unknown => "Unknown",
            Self::Failure => "Failure",
            Self::Error => "Error",
        }
    }
}

impl Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
