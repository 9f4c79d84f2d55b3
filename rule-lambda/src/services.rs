use async_trait::async_trait;
use ec2_host_license_rule::{ConfigurationItem, Evaluation, Result};
use time::OffsetDateTime;

/// The AWS Config operations the rule needs.
#[async_trait]
pub trait ConfigService: Send + Sync {
    /// Latest recorded configuration item of a resource captured at or
    /// before `later_time`.
    async fn latest_configuration_item(
        &self,
        resource_type: &str,
        resource_id: &str,
        later_time: OffsetDateTime,
    ) -> Result<ConfigurationItem>;

    async fn put_evaluations(
        &self,
        evaluations: &[Evaluation],
        result_token: &str,
        test_mode: bool,
    ) -> Result<()>;
}

/// Hands out a [`ConfigService`], optionally acting as `execution_role_arn`.
/// A failed role assumption must come back as
/// [`ec2_host_license_rule::Error::AssumeRole`] carrying the service error code.
#[async_trait]
pub trait ServiceProvider: Send + Sync {
    type Config: ConfigService;

    async fn config_service(&self, execution_role_arn: Option<&str>) -> Result<Self::Config>;
}
