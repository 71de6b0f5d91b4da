use super::build_failover_check;
use crate::CheckArgs;
use crate::error::Result;

use std::process::ExitCode;

use tracing::error;

pub async fn check(args: CheckArgs) -> Result<ExitCode> {
    let failover_check = build_failover_check(args.failover).await?;

    let report = failover_check.run().await;
    println!("{}", serde_json::to_string_pretty(&report)?);

    if report.is_completed() {
        Ok(ExitCode::SUCCESS)
    } else {
        error!("failover check failed");
        Ok(ExitCode::FAILURE)
    }
}
