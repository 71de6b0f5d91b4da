//! In-memory DNS routing for tests and local dry runs.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;

pub use error::{Error, Result};

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use proven_failover_routing::{Region, RoutingApplier, RoutingObserver};
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct State {
    alias_target: Option<String>,
    endpoints: HashMap<Region, String>,
    fail_lookups: bool,
    fail_changes: bool,
    applied: Vec<Region>,
}

/// Mock DNS zone holding a single alias record.
///
/// Applying a routing change rewrites the alias target to the endpoint
/// registered for the region, so subsequent observations see the change.
#[derive(Clone, Debug, Default)]
pub struct MockRouting {
    state: Arc<Mutex<State>>,
}

impl MockRouting {
    /// Creates a mock with the given regional endpoints and no alias record.
    #[must_use]
    pub fn new(primary_endpoint: impl Into<String>, dr_endpoint: impl Into<String>) -> Self {
        let mut endpoints = HashMap::new();
        endpoints.insert(Region::Primary, primary_endpoint.into());
        endpoints.insert(Region::Dr, dr_endpoint.into());

        Self {
            state: Arc::new(Mutex::new(State {
                endpoints,
                ..State::default()
            })),
        }
    }

    /// Publish `alias_target` as the current alias of the domain.
    pub async fn set_alias_target(&self, alias_target: Option<String>) {
        self.state.lock().await.alias_target = alias_target;
    }

    /// Point the alias at the endpoint of `region` without recording a change.
    pub async fn point_at(&self, region: Region) {
        let mut state = self.state.lock().await;
        state.alias_target = state.endpoints.get(&region).cloned();
    }

    /// Make every lookup fail.
    pub async fn set_fail_lookups(&self, fail: bool) {
        self.state.lock().await.fail_lookups = fail;
    }

    /// Make every change fail.
    pub async fn set_fail_changes(&self, fail: bool) {
        self.state.lock().await.fail_changes = fail;
    }

    /// Forget the endpoint of `region`.
    pub async fn remove_endpoint(&self, region: Region) {
        self.state.lock().await.endpoints.remove(&region);
    }

    /// The regions routing was applied to, in order.
    pub async fn applied(&self) -> Vec<Region> {
        self.state.lock().await.applied.clone()
    }

    /// The currently published alias target.
    pub async fn alias_target(&self) -> Option<String> {
        self.state.lock().await.alias_target.clone()
    }
}

#[async_trait]
impl RoutingObserver for MockRouting {
    type Error = Error;

    async fn active_alias_target(&self, domain: &str) -> Result<Option<String>> {
        let state = self.state.lock().await;

        if state.fail_lookups {
            return Err(Error::LookupFailed(domain.to_string()));
        }

        Ok(state.alias_target.clone())
    }
}

#[async_trait]
impl RoutingApplier for MockRouting {
    type Error = Error;

    async fn apply_routing(&self, domain: &str, target: Region) -> Result<String> {
        let mut state = self.state.lock().await;

        if state.fail_changes {
            return Err(Error::ChangeRejected(domain.to_string()));
        }

        let endpoint = state
            .endpoints
            .get(&target)
            .cloned()
            .ok_or(Error::MissingEndpoint(target))?;

        state.alias_target = Some(endpoint.clone());
        state.applied.push(target);

        Ok(format!("{domain} now routes to {target} region ({endpoint})"))
    }
}
