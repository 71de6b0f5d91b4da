//! Route 53 backed routing: reads and upserts the alias `A` record of a domain.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::result_large_err)]

mod error;

pub use error::{Error, Result};

use async_trait::async_trait;
use aws_config::Region as AwsRegion;
use aws_sdk_route53::Client;
use aws_sdk_route53::types::{
    AliasTarget, Change, ChangeAction, ChangeBatch, ResourceRecordSet, RrType,
};
use proven_failover_routing::{Region, RoutingApplier, RoutingObserver, dns_names_match};
use tracing::info;

/// Alias endpoint (typically a load balancer) serving a region.
#[derive(Clone, Debug)]
pub struct RegionEndpoint {
    /// DNS name of the alias target.
    pub dns_name: String,

    /// Hosted zone ID of the alias target (not of the domain).
    pub hosted_zone_id: String,
}

/// Options for configuring `Route53Routing`.
pub struct Route53RoutingOptions {
    /// Hosted zone containing the domain's record.
    pub hosted_zone_id: String,

    /// The AWS region used for client configuration.
    pub region: String,

    /// Endpoint to alias when routing to the primary region.
    pub primary_endpoint: Option<RegionEndpoint>,

    /// Endpoint to alias when routing to the DR region.
    pub dr_endpoint: Option<RegionEndpoint>,
}

/// Observes and changes the alias record of a domain in a Route 53 hosted zone.
#[derive(Clone, Debug)]
pub struct Route53Routing {
    client: Client,
    hosted_zone_id: String,
    primary_endpoint: Option<RegionEndpoint>,
    dr_endpoint: Option<RegionEndpoint>,
}

impl Route53Routing {
    /// Creates a new instance of `Route53Routing`.
    pub async fn new(
        Route53RoutingOptions {
            hosted_zone_id,
            region,
            primary_endpoint,
            dr_endpoint,
        }: Route53RoutingOptions,
    ) -> Self {
        let config = aws_config::from_env()
            .region(AwsRegion::new(region))
            .load()
            .await;

        Self {
            client: Client::new(&config),
            hosted_zone_id,
            primary_endpoint,
            dr_endpoint,
        }
    }

    const fn endpoint(&self, region: Region) -> Option<&RegionEndpoint> {
        match region {
            Region::Primary => self.primary_endpoint.as_ref(),
            Region::Dr => self.dr_endpoint.as_ref(),
        }
    }
}

#[async_trait]
impl RoutingObserver for Route53Routing {
    type Error = Error;

    async fn active_alias_target(&self, domain: &str) -> Result<Option<String>> {
        let resp = self
            .client
            .list_resource_record_sets()
            .hosted_zone_id(&self.hosted_zone_id)
            .start_record_name(domain)
            .start_record_type(RrType::A)
            .max_items(1)
            .send()
            .await;

        match resp {
            Ok(resp) => Ok(alias_target_for(resp.resource_record_sets(), domain)),
            Err(e) => Err(Error::Route53(e.into())),
        }
    }
}

#[async_trait]
impl RoutingApplier for Route53Routing {
    type Error = Error;

    async fn apply_routing(&self, domain: &str, target: Region) -> Result<String> {
        let endpoint = self
            .endpoint(target)
            .ok_or(Error::MissingEndpoint(target))?;

        let change_batch = ChangeBatch::builder()
            .comment(format!("Route {domain} to {target} region"))
            .changes(
                Change::builder()
                    .action(ChangeAction::Upsert)
                    .resource_record_set(
                        ResourceRecordSet::builder()
                            .name(domain)
                            .r#type(RrType::A)
                            .alias_target(
                                AliasTarget::builder()
                                    .hosted_zone_id(&endpoint.hosted_zone_id)
                                    .dns_name(&endpoint.dns_name)
                                    .evaluate_target_health(true)
                                    .build()?,
                            )
                            .build()?,
                    )
                    .build()?,
            )
            .build()?;

        info!(domain, %target, dns_name = %endpoint.dns_name, "submitting routing change");

        let resp = self
            .client
            .change_resource_record_sets()
            .hosted_zone_id(&self.hosted_zone_id)
            .change_batch(change_batch)
            .send()
            .await;

        match resp {
            Ok(_) => Ok(format!(
                "Failover of {domain} to {target} region ({}) submitted successfully",
                endpoint.dns_name
            )),
            Err(e) => Err(Error::Route53(e.into())),
        }
    }
}

/// The alias target of the `A` record for exactly `domain`, if any.
///
/// Listing starts at `domain` but returns the next record in the zone when
/// `domain` itself has none, so the name has to be checked.
fn alias_target_for(record_sets: &[ResourceRecordSet], domain: &str) -> Option<String> {
    record_sets
        .iter()
        .find(|r| *r.r#type() == RrType::A && dns_names_match(r.name(), domain))
        .and_then(ResourceRecordSet::alias_target)
        .map(|a| a.dns_name().to_string())
}
