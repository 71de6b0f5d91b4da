//! Abstract interface for observing and changing which region a domain's DNS
//! record points at.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod classifier;
mod state;

pub use classifier::{
    AliasSubstringClassifier, ExactTargetClassifier, RegionClassifier, dns_names_match,
};
pub use state::{Region, RoutingState};

use std::error::Error;
use std::fmt::Debug;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{error, info};

/// Marker trait for routing provider errors.
pub trait RoutingError: Debug + Error + Send + Sync + 'static {}

/// Read-only access to the live DNS configuration.
#[async_trait]
pub trait RoutingObserver
where
    Self: Clone + Send + Sync + 'static,
{
    /// The error type for the DNS provider.
    type Error: RoutingError;

    /// The alias target currently published for `domain`, or `None` if there
    /// is no matching alias record.
    async fn active_alias_target(&self, domain: &str) -> Result<Option<String>, Self::Error>;
}

/// Mutates DNS so that `domain` points at a region.
#[async_trait]
pub trait RoutingApplier
where
    Self: Clone + Send + Sync + 'static,
{
    /// The error type for the DNS provider.
    type Error: RoutingError;

    /// Point `domain` at `target`. Idempotent. Returns a description of the
    /// change that was submitted.
    async fn apply_routing(&self, domain: &str, target: Region) -> Result<String, Self::Error>;
}

/// What the observer saw and how it was classified.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RoutingObservation {
    /// The published alias target, if one was found.
    pub alias_target: Option<String>,

    /// The classified routing state.
    pub state: RoutingState,
}

impl RoutingObservation {
    /// Observe and classify the routing state of `domain`.
    ///
    /// Never fails: a missing record or a lookup error both yield
    /// [`RoutingState::Unknown`].
    pub async fn observe<O, C>(observer: &O, classifier: &C, domain: &str) -> Self
    where
        O: RoutingObserver,
        C: RegionClassifier + ?Sized,
    {
        match observer.active_alias_target(domain).await {
            Ok(Some(alias_target)) => {
                let state = classifier.classify(&alias_target);
                info!(domain, %alias_target, %state, "classified active alias target");

                Self {
                    alias_target: Some(alias_target),
                    state,
                }
            }
            Ok(None) => {
                info!(domain, "no alias record found");
                Self::unknown()
            }
            Err(e) => {
                error!(domain, "error determining current failover state: {e}");
                Self::unknown()
            }
        }
    }

    const fn unknown() -> Self {
        Self {
            alias_target: None,
            state: RoutingState::Unknown,
        }
    }
}
