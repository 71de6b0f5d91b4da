use chrono::{DateTime, Utc};
use proven_failover_health::HealthReading;
use proven_failover_routing::{Region, RoutingObservation};
use serde::Serialize;
use uuid::Uuid;

use crate::FailoverDecision;

/// Whether a routing change went through.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionStatus {
    /// The change was accepted by the DNS provider.
    Success,

    /// The change failed.
    Error,
}

/// Result of executing a routing action.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ExecutionReport {
    /// The region routing was pointed at.
    pub target: Region,

    /// Whether the change went through.
    pub status: ExecutionStatus,

    /// Provider message or error description.
    pub message: String,
}

/// Whether the check itself ran to completion.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckStatus {
    /// Observations were gathered and a decision was made. A failed routing
    /// change still counts as completed.
    Completed,

    /// The check was aborted by an unexpected error.
    Failed,
}

/// Everything observed and decided during a completed check.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CheckSummary {
    /// Health of the primary region.
    pub primary: HealthReading,

    /// Health of the DR region.
    pub dr: HealthReading,

    /// Routing state observed in DNS.
    pub routing: RoutingObservation,

    /// The decision taken.
    pub decision: FailoverDecision,

    /// Outcome of the routing change, when one was executed.
    pub execution: Option<ExecutionReport>,
}

/// Structured result of one failover check.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CheckReport {
    /// Unique ID of this invocation.
    pub invocation_id: Uuid,

    /// When the check started.
    pub checked_at: DateTime<Utc>,

    /// The monitored domain.
    pub domain: String,

    /// Whether routing actions were allowed to execute.
    pub automation_enabled: bool,

    /// Overall outcome of the check.
    pub status: CheckStatus,

    /// Observations and decision, present when the check completed.
    pub summary: Option<CheckSummary>,

    /// Error description, present when the check failed.
    pub error: Option<String>,
}

impl CheckReport {
    /// Whether the check completed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == CheckStatus::Completed
    }
}
