use std::time::SystemTime;

use async_trait::async_trait;
use aws_sdk_config::config::Credentials;
use aws_sdk_config::error::DisplayErrorContext;
use aws_sdk_config::primitives::DateTime;
use aws_sdk_config::types::{ComplianceType as SdkComplianceType, ResourceType};
use aws_sdk_sts::error::ProvideErrorMetadata;
use aws_types::SdkConfig;
use ec2_host_license_rule::constants::ASSUME_ROLE_SESSION_NAME;
use ec2_host_license_rule::event::ConfigurationItemStatus;
use ec2_host_license_rule::{ConfigurationItem, Error, Evaluation, Result};
use log::{error, info, warn};
use serde_json::Value;
use time::OffsetDateTime;

use crate::services::{ConfigService, ServiceProvider};

pub struct AwsServiceProvider {
    sdk_config: SdkConfig,
    sts: aws_sdk_sts::Client,
}

impl AwsServiceProvider {
    pub fn new(sdk_config: SdkConfig) -> Self {
        let sts = aws_sdk_sts::Client::new(&sdk_config);
        AwsServiceProvider { sdk_config, sts }
    }

    async fn assume_role(&self, role_arn: &str) -> Result<Credentials> {
        let output = self
            .sts
            .assume_role()
            .role_arn(role_arn)
            .role_session_name(ASSUME_ROLE_SESSION_NAME)
            .send()
            .await
            .map_err(|err| {
                error!(
                    "failed to assume role '{}' with error: {}",
                    role_arn,
                    DisplayErrorContext(&err)
                );
                Error::AssumeRole {
                    code: err.code().map(String::from),
                    message: DisplayErrorContext(&err).to_string(),
                }
            })?;

        let credentials = output
            .credentials()
            .ok_or_else(|| Error::MissingValue(String::from("AssumeRole credentials")))?;
        Ok(Credentials::new(
            credentials.access_key_id(),
            credentials.secret_access_key(),
            Some(credentials.session_token().to_string()),
            SystemTime::try_from(credentials.expiration().clone()).ok(),
            "AssumeRole",
        ))
    }
}

#[async_trait]
impl ServiceProvider for AwsServiceProvider {
    type Config = AwsConfigService;

    async fn config_service(&self, execution_role_arn: Option<&str>) -> Result<AwsConfigService> {
        let client = match execution_role_arn {
            None => aws_sdk_config::Client::new(&self.sdk_config),
            Some(role_arn) => {
                let credentials = self.assume_role(role_arn).await?;
                info!("Assumed execution role '{}'", role_arn);
                let config = aws_sdk_config::config::Builder::from(&self.sdk_config)
                    .credentials_provider(credentials)
                    .build();
                aws_sdk_config::Client::from_conf(config)
            }
        };
        Ok(AwsConfigService { client })
    }
}

pub struct AwsConfigService {
    client: aws_sdk_config::Client,
}

fn service_error<E: std::error::Error>(operation: &str, err: E) -> Error {
    error!("{} failed with error: {}", operation, DisplayErrorContext(&err));
    Error::ServiceError(format!("{}: {}", operation, DisplayErrorContext(&err)))
}

fn to_offset_date_time(value: &DateTime) -> Result<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp(value.secs())
        .and_then(|ts| ts.replace_nanosecond(value.subsec_nanos()))
        .map_err(|err| Error::TimestampError(err.to_string()))
}

fn to_date_time(value: OffsetDateTime) -> DateTime {
    DateTime::from_secs_and_nanos(value.unix_timestamp(), value.nanosecond())
}

fn from_history_item(item: &aws_sdk_config::types::ConfigurationItem) -> Result<ConfigurationItem> {
    let capture_time = item
        .configuration_item_capture_time()
        .ok_or_else(|| Error::MissingValue(String::from("configurationItemCaptureTime")))?;
    // History returns the configuration as a JSON string
    let configuration = match item.configuration() {
        Some(raw) if !raw.is_empty() => serde_json::from_str::<Value>(raw)?,
        _ => Value::Null,
    };

    Ok(ConfigurationItem {
        resource_type: item
            .resource_type()
            .map(|resource_type| resource_type.as_str().to_string())
            .ok_or_else(|| Error::MissingValue(String::from("resourceType")))?,
        resource_id: item
            .resource_id()
            .map(String::from)
            .ok_or_else(|| Error::MissingValue(String::from("resourceId")))?,
        resource_name: item.resource_name().map(String::from),
        arn: item.arn().map(String::from),
        aws_account_id: item.account_id().map(String::from),
        configuration_item_capture_time: to_offset_date_time(capture_time)?,
        configuration_item_status: item
            .configuration_item_status()
            .map(|status| ConfigurationItemStatus::from(status.as_str()))
            .unwrap_or(ConfigurationItemStatus::Unknown),
        configuration,
    })
}

fn to_sdk_evaluation(evaluation: &Evaluation) -> Result<aws_sdk_config::types::Evaluation> {
    aws_sdk_config::types::Evaluation::builder()
        .compliance_resource_type(evaluation.compliance_resource_type.as_str())
        .compliance_resource_id(evaluation.compliance_resource_id.as_str())
        .compliance_type(SdkComplianceType::from(evaluation.compliance_type.as_str()))
        .set_annotation(evaluation.annotation.clone())
        .ordering_timestamp(to_date_time(evaluation.ordering_timestamp))
        .build()
        .map_err(|err| Error::ServiceError(err.to_string()))
}

#[async_trait]
impl ConfigService for AwsConfigService {
    async fn latest_configuration_item(
        &self,
        resource_type: &str,
        resource_id: &str,
        later_time: OffsetDateTime,
    ) -> Result<ConfigurationItem> {
        let output = self
            .client
            .get_resource_config_history()
            .resource_type(ResourceType::from(resource_type))
            .resource_id(resource_id)
            .later_time(to_date_time(later_time))
            .limit(1)
            .send()
            .await
            .map_err(|err| service_error("GetResourceConfigHistory", err))?;

        let item = output.configuration_items().first().ok_or_else(|| {
            Error::MissingValue(format!("configuration history of {resource_type} {resource_id}"))
        })?;
        from_history_item(item)
    }

    async fn put_evaluations(
        &self,
        evaluations: &[Evaluation],
        result_token: &str,
        test_mode: bool,
    ) -> Result<()> {
        let evaluations = evaluations
            .iter()
            .map(to_sdk_evaluation)
            .collect::<Result<Vec<_>>>()?;

        let output = self
            .client
            .put_evaluations()
            .set_evaluations(Some(evaluations))
            .result_token(result_token)
            .test_mode(test_mode)
            .send()
            .await
            .map_err(|err| service_error("PutEvaluations", err))?;

        for failed in output.failed_evaluations() {
            warn!(
                "AWS Config rejected evaluation for {} {}",
                failed.compliance_resource_type(),
                failed.compliance_resource_id()
            );
        }
        Ok(())
    }
}
