mod check;
mod watch;

pub use check::check;
pub use watch::watch;

use crate::error::{Error, Result};
use crate::{ClassifierKind, FailoverArgs};

use std::sync::Arc;

use proven_failover::{FailoverCheck, FailoverCheckOptions, FailoverConfig};
use proven_failover_health_route53::{Route53HealthReader, Route53HealthReaderOptions};
use proven_failover_notify_sns::{SnsNotifier, SnsNotifierOptions};
use proven_failover_routing::{AliasSubstringClassifier, ExactTargetClassifier, RegionClassifier};
use proven_failover_routing_route53::{RegionEndpoint, Route53Routing, Route53RoutingOptions};

type Route53FailoverCheck = FailoverCheck<Route53HealthReader, Route53Routing, SnsNotifier>;

async fn build_failover_check(args: FailoverArgs) -> Result<Route53FailoverCheck> {
    let classifier = classifier(&args)?;

    let primary_endpoint = endpoint(args.primary_alias_dns_name, args.primary_alias_zone_id);
    let dr_endpoint = endpoint(args.dr_alias_dns_name, args.dr_alias_zone_id);

    let health_reader = Route53HealthReader::new(Route53HealthReaderOptions {
        region: args.aws_region.clone(),
    })
    .await;

    let routing = Route53Routing::new(Route53RoutingOptions {
        hosted_zone_id: args.hosted_zone_id,
        region: args.aws_region.clone(),
        primary_endpoint,
        dr_endpoint,
    })
    .await;

    let notifier = SnsNotifier::new(SnsNotifierOptions {
        region: args.aws_region,
        topic_arn: args.sns_topic_arn,
    })
    .await;

    Ok(FailoverCheck::new(FailoverCheckOptions {
        config: FailoverConfig {
            primary_health_check_id: args.primary_health_check_id,
            dr_health_check_id: args.dr_health_check_id,
            domain_name: args.domain_name,
            automation_enabled: args.enable_auto_failover,
        },
        health_reader,
        routing,
        classifier,
        notifier,
    }))
}

fn classifier(args: &FailoverArgs) -> Result<Arc<dyn RegionClassifier>> {
    match args.classifier {
        ClassifierKind::Substring => Ok(Arc::new(AliasSubstringClassifier::for_regions(
            &args.load_balancer_marker,
            &args.primary_region_marker,
            &args.dr_region_marker,
        ))),
        ClassifierKind::Exact => match (&args.primary_alias_dns_name, &args.dr_alias_dns_name) {
            (Some(primary), Some(dr)) => {
                Ok(Arc::new(ExactTargetClassifier::new(primary.clone(), dr.clone())))
            }
            _ => Err(Error::MissingExactTargets),
        },
    }
}

fn endpoint(dns_name: Option<String>, hosted_zone_id: Option<String>) -> Option<RegionEndpoint> {
    Some(RegionEndpoint {
        dns_name: dns_name?,
        hosted_zone_id: hosted_zone_id?,
    })
}
