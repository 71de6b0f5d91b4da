/// Settings for a failover check.
#[derive(Clone, Debug)]
pub struct FailoverConfig {
    /// Health check covering the primary region.
    pub primary_health_check_id: String,

    /// Health check covering the DR region.
    pub dr_health_check_id: String,

    /// Domain whose routing is managed.
    pub domain_name: String,

    /// Execute routing actions. When `false`, they are only reported.
    pub automation_enabled: bool,
}
