//! Decides whether a domain's traffic should be served from the primary or the
//! disaster-recovery region, and drives the resulting DNS change.
//!
//! Each check reads both regions' health, observes which region DNS currently
//! points at, and feeds both into [`decide`]. Routing changes are only executed
//! when automation is enabled; alerts are always published.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod check;
mod config;
mod decision;
mod error;
mod report;

pub use check::{FailoverCheck, FailoverCheckOptions};
pub use config::FailoverConfig;
pub use decision::{FailoverAction, FailoverDecision, decide};
pub use error::{Error, Result};
pub use report::{CheckReport, CheckStatus, CheckSummary, ExecutionReport, ExecutionStatus};

pub use proven_failover_health::{HealthReading, HealthStatus};
pub use proven_failover_routing::{Region, RoutingObservation, RoutingState};
