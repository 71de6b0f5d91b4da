use crate::decision::{FailoverAction, FailoverDecision, decide};
use crate::error::{Error, Result};
use crate::report::{CheckReport, CheckStatus, CheckSummary, ExecutionReport, ExecutionStatus};
use crate::FailoverConfig;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use proven_failover_health::{HealthReader, HealthReading};
use proven_failover_notify::Notifier;
use proven_failover_routing::{
    Region, RegionClassifier, RoutingApplier, RoutingObservation, RoutingObserver, RoutingState,
};
use serde_json::json;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

/// Options for creating a `FailoverCheck`.
pub struct FailoverCheckOptions<H, R, N>
where
    H: HealthReader,
    R: RoutingObserver + RoutingApplier,
    N: Notifier,
{
    /// Check settings.
    pub config: FailoverConfig,

    /// Source of health-check statuses.
    pub health_reader: H,

    /// DNS provider used to observe and change routing.
    pub routing: R,

    /// Classifies the observed alias target into a routing state.
    pub classifier: Arc<dyn RegionClassifier>,

    /// Channel for alerts and action outcomes.
    pub notifier: N,
}

/// Runs failover checks: observe, decide, and (optionally) act.
///
/// Holds no state between runs; routing is re-read from DNS every time.
#[derive(Clone)]
pub struct FailoverCheck<H, R, N>
where
    H: HealthReader,
    R: RoutingObserver + RoutingApplier,
    N: Notifier,
{
    config: FailoverConfig,
    health_reader: H,
    routing: R,
    classifier: Arc<dyn RegionClassifier>,
    notifier: N,
}

impl<H, R, N> FailoverCheck<H, R, N>
where
    H: HealthReader,
    R: RoutingObserver + RoutingApplier,
    N: Notifier,
{
    /// Creates a new `FailoverCheck`.
    pub fn new(
        FailoverCheckOptions {
            config,
            health_reader,
            routing,
            classifier,
            notifier,
        }: FailoverCheckOptions<H, R, N>,
    ) -> Self {
        Self {
            config,
            health_reader,
            routing,
            classifier,
            notifier,
        }
    }

    /// The settings this check runs with.
    pub const fn config(&self) -> &FailoverConfig {
        &self.config
    }

    /// Run a single check.
    ///
    /// Never fails. Unexpected errors are notified and reflected in the
    /// report's status.
    pub async fn run(&self) -> CheckReport {
        let invocation_id = Uuid::new_v4();
        let span = info_span!(
            "failover_check",
            %invocation_id,
            domain = %self.config.domain_name
        );

        self.run_invocation(invocation_id).instrument(span).await
    }

    async fn run_invocation(&self, invocation_id: Uuid) -> CheckReport {
        let checked_at = Utc::now();

        info!(
            automation_enabled = self.config.automation_enabled,
            "starting failover check"
        );

        let outcome = self.evaluate().await;
        self.report(invocation_id, checked_at, outcome).await
    }

    async fn report(
        &self,
        invocation_id: Uuid,
        checked_at: DateTime<Utc>,
        outcome: Result<CheckSummary>,
    ) -> CheckReport {
        let domain = &self.config.domain_name;

        let (status, summary, error) = match outcome {
            Ok(summary) => {
                info!(action = %summary.decision.action, "failover check completed");
                (CheckStatus::Completed, Some(summary), None)
            }
            Err(e) => {
                let message = format!("Error in failover check: {e}");
                error!("{message}");
                self.notify(
                    &format!("Failover check error for {domain}"),
                    &json!({ "error": message }).to_string(),
                )
                .await;
                (CheckStatus::Failed, None, Some(message))
            }
        };

        CheckReport {
            invocation_id,
            checked_at,
            domain: domain.clone(),
            automation_enabled: self.config.automation_enabled,
            status,
            summary,
            error,
        }
    }

    async fn evaluate(&self) -> Result<CheckSummary> {
        let primary =
            HealthReading::fetch(&self.health_reader, &self.config.primary_health_check_id).await;
        let dr = HealthReading::fetch(&self.health_reader, &self.config.dr_health_check_id).await;
        info!(primary = %primary.status, dr = %dr.status, "health check statuses");

        let routing = RoutingObservation::observe(
            &self.routing,
            self.classifier.as_ref(),
            &self.config.domain_name,
        )
        .await;
        info!(state = %routing.state, "current failover state");

        let decision = decide(routing.state, primary.status, dr.status);
        info!(action = %decision.action, reason = %decision.reason, "failover decision");

        let execution = self.dispatch(routing.state, &decision).await?;

        Ok(CheckSummary {
            primary,
            dr,
            routing,
            decision,
            execution,
        })
    }

    async fn dispatch(
        &self,
        state: RoutingState,
        decision: &FailoverDecision,
    ) -> Result<Option<ExecutionReport>> {
        let domain = &self.config.domain_name;

        match decision.action.target_region() {
            Some(target) if self.config.automation_enabled => {
                if state.active_region().is_none_or(|active| active == target) {
                    return Err(Error::InvariantViolation(target));
                }

                let report = self.execute(target).await;
                let subject = match target {
                    Region::Dr => format!("Auto-failover to DR triggered for {domain}"),
                    Region::Primary => format!("Auto-failback to primary triggered for {domain}"),
                };
                self.notify(&subject, &serde_json::to_string(&report)?).await;

                Ok(Some(report))
            }
            Some(target) => {
                warn!(%target, "automated failover disabled, not executing");
                self.notify(
                    &format!(
                        "Failover to {target} region recommended for {domain} (automation disabled)"
                    ),
                    &serde_json::to_string(decision)?,
                )
                .await;

                Ok(None)
            }
            None if decision.action == FailoverAction::Alert => {
                self.notify(
                    &format!("Health check alert for {domain}"),
                    &serde_json::to_string(decision)?,
                )
                .await;

                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn execute(&self, target: Region) -> ExecutionReport {
        info!(%target, "triggering failover");

        match self
            .routing
            .apply_routing(&self.config.domain_name, target)
            .await
        {
            Ok(message) => {
                info!(%target, "{message}");
                ExecutionReport {
                    target,
                    status: ExecutionStatus::Success,
                    message,
                }
            }
            Err(e) => {
                let message = format!("Error triggering failover to {target} region: {e}");
                error!("{message}");
                ExecutionReport {
                    target,
                    status: ExecutionStatus::Error,
                    message,
                }
            }
        }
    }

    async fn notify(&self, subject: &str, message: &str) {
        match self.notifier.publish(subject, message).await {
            Ok(()) => info!(subject, "notification published"),
            Err(e) => error!(subject, "error sending notification: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proven_failover_health::HealthStatus::{Failure, Success};
    use proven_failover_health_mock::MockHealthReader;
    use proven_failover_notify_memory::MemoryNotifier;
    use proven_failover_routing::AliasSubstringClassifier;
    use proven_failover_routing_mock::MockRouting;

    fn failover_check(
        routing: MockRouting,
        notifier: MemoryNotifier,
    ) -> FailoverCheck<MockHealthReader, MockRouting, MemoryNotifier> {
        FailoverCheck::new(FailoverCheckOptions {
            config: FailoverConfig {
                primary_health_check_id: "hc-primary".to_string(),
                dr_health_check_id: "hc-dr".to_string(),
                domain_name: "app.example.com".to_string(),
                automation_enabled: true,
            },
            health_reader: MockHealthReader::new(),
            routing,
            classifier: Arc::new(AliasSubstringClassifier::default()),
            notifier,
        })
    }

    #[tokio::test]
    async fn test_refuses_to_route_to_active_region() {
        let routing = MockRouting::new("primary.elb.amazonaws.com", "dr.elb.amazonaws.com");
        let check = failover_check(routing.clone(), MemoryNotifier::new());
        let decision = decide(RoutingState::Primary, Failure, Success);

        for state in [RoutingState::Dr, RoutingState::Unknown] {
            let result = check.dispatch(state, &decision).await;
            assert!(matches!(result, Err(Error::InvariantViolation(Region::Dr))));
        }
        assert!(routing.applied().await.is_empty());
    }

    #[tokio::test]
    async fn test_unexpected_error_fails_report() {
        let notifier = MemoryNotifier::new();
        let check = failover_check(
            MockRouting::new("primary.elb.amazonaws.com", "dr.elb.amazonaws.com"),
            notifier.clone(),
        );

        let decision = decide(RoutingState::Primary, Failure, Success);
        let outcome: Result<CheckSummary> = check
            .dispatch(RoutingState::Dr, &decision)
            .await
            .map(|_| unreachable!("dispatch should refuse the active region"));
        let report = check.report(Uuid::new_v4(), Utc::now(), outcome).await;

        assert_eq!(report.status, CheckStatus::Failed);
        assert!(!report.is_completed());
        assert!(report.summary.is_none());

        let error = report.error.unwrap();
        assert!(error.starts_with("Error in failover check: refusing to route to DR region"));

        let published = notifier.published().await;
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].subject, "Failover check error for app.example.com");

        let payload: serde_json::Value = serde_json::from_str(&published[0].message).unwrap();
        assert_eq!(payload["error"], error);
    }
}
