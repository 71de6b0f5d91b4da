//! The failover state machine.
//!
//! A region is unhealthy at `Failure` or worse, and healthy enough to receive
//! traffic at `Warning` or better. `Unknown` is neither, so an ambiguous
//! signal can trigger an alert about the active region but never makes the
//! standby region a failover target.

use std::fmt::{self, Display};

use proven_failover_health::HealthStatus;
use proven_failover_routing::{Region, RoutingState};
use serde::Serialize;

/// What should happen to routing.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailoverAction {
    /// Leave routing as it is.
    None,

    /// Notify an operator without changing routing.
    Alert,

    /// Route traffic from the primary region to the DR region.
    FailoverToDr,

    /// Route traffic from the DR region back to the primary region.
    FailoverToPrimary,
}

impl FailoverAction {
    /// The region traffic should be moved to, for routing actions.
    #[must_use]
    pub const fn target_region(self) -> Option<Region> {
        match self {
            Self::FailoverToDr => Some(Region::Dr),
            Self::FailoverToPrimary => Some(Region::Primary),
            Self::None | Self::Alert => None,
        }
    }
}

impl Display for FailoverAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "NONE",
            Self::Alert => "ALERT",
            Self::FailoverToDr => "FAILOVER_TO_DR",
            Self::FailoverToPrimary => "FAILOVER_TO_PRIMARY",
        })
    }
}

/// The outcome of evaluating one set of observations.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FailoverDecision {
    /// The chosen action.
    pub action: FailoverAction,

    /// Human-readable justification, naming both statuses.
    pub reason: String,

    /// Health of the primary region that was evaluated.
    pub primary_status: HealthStatus,

    /// Health of the DR region that was evaluated.
    pub dr_status: HealthStatus,
}

/// Decide what to do given the active routing state and the health of both
/// regions.
///
/// Pure and total: every input yields exactly one decision.
#[must_use]
pub fn decide(state: RoutingState, primary: HealthStatus, dr: HealthStatus) -> FailoverDecision {
    let statuses = format!("primary health check is {primary}, DR health check is {dr}");

    let (action, reason) = match state {
        RoutingState::Primary if primary.is_unhealthy() && dr.can_receive_traffic() => (
            FailoverAction::FailoverToDr,
            format!("Primary is failing and DR is healthy: {statuses}"),
        ),
        RoutingState::Primary if primary.is_unhealthy() => (
            FailoverAction::Alert,
            format!("Primary is failing and DR is not confirmed healthy: {statuses}"),
        ),
        RoutingState::Dr if primary.can_receive_traffic() && dr.is_unhealthy() => (
            FailoverAction::FailoverToPrimary,
            format!("DR is failing and primary has recovered: {statuses}"),
        ),
        RoutingState::Dr if dr.is_unhealthy() => (
            FailoverAction::Alert,
            format!("DR health check is {dr} while in DR state: {statuses}"),
        ),
        RoutingState::Unknown => (
            FailoverAction::None,
            format!("Current routing state is unknown, no failover attempted: {statuses}"),
        ),
        RoutingState::Primary | RoutingState::Dr => (
            FailoverAction::None,
            format!("No failover needed: {statuses}"),
        ),
    };

    FailoverDecision {
        action,
        reason,
        primary_status: primary,
        dr_status: dr,
    }
}
