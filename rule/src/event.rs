use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

use crate::constants::TEST_MODE_RESULT_TOKEN;
use crate::errors::Error;
use crate::parameters::RuleParameters;

/// Payload AWS Config sends to a custom rule Lambda.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigRuleEvent {
    #[serde(default)]
    pub config_rule_name: String,
    #[serde(default)]
    pub config_rule_arn: String,
    #[serde(default)]
    pub execution_role_arn: Option<String>,
    #[serde(default)]
    pub event_left_scope: bool,
    pub invoking_event: String,
    #[serde(default)]
    pub rule_parameters: Option<String>,
    pub account_id: String,
    pub result_token: String,
}

impl ConfigRuleEvent {
    pub fn invoking_event(&self) -> crate::Result<InvokingEvent> {
        Ok(serde_json::from_str(&self.invoking_event)?)
    }

    pub fn rule_parameters(&self) -> crate::Result<RuleParameters> {
        RuleParameters::parse(self.rule_parameters.as_deref())
    }

    pub fn is_test_mode(&self) -> bool {
        self.result_token == TEST_MODE_RESULT_TOKEN
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum MessageType {
    ConfigurationItemChangeNotification,
    OversizedConfigurationItemChangeNotification,
    ScheduledNotification,
    Other(String),
}

impl From<String> for MessageType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ConfigurationItemChangeNotification" => MessageType::ConfigurationItemChangeNotification,
            "OversizedConfigurationItemChangeNotification" => {
                MessageType::OversizedConfigurationItemChangeNotification
            }
            "ScheduledNotification" => MessageType::ScheduledNotification,
            _ => MessageType::Other(value),
        }
    }
}

impl From<MessageType> for String {
    fn from(value: MessageType) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageType::ConfigurationItemChangeNotification => {
                f.write_str("ConfigurationItemChangeNotification")
            }
            MessageType::OversizedConfigurationItemChangeNotification => {
                f.write_str("OversizedConfigurationItemChangeNotification")
            }
            MessageType::ScheduledNotification => f.write_str("ScheduledNotification"),
            MessageType::Other(other) => f.write_str(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ConfigurationItemStatus {
    OK,
    ResourceDiscovered,
    ResourceNotRecorded,
    ResourceDeleted,
    ResourceDeletedNotRecorded,
    #[serde(other)]
    Unknown,
}

impl From<&str> for ConfigurationItemStatus {
    fn from(value: &str) -> Self {
        match value {
            "OK" => ConfigurationItemStatus::OK,
            "ResourceDiscovered" => ConfigurationItemStatus::ResourceDiscovered,
            "ResourceNotRecorded" => ConfigurationItemStatus::ResourceNotRecorded,
            "ResourceDeleted" => ConfigurationItemStatus::ResourceDeleted,
            "ResourceDeletedNotRecorded" => ConfigurationItemStatus::ResourceDeletedNotRecorded,
            _ => ConfigurationItemStatus::Unknown,
        }
    }
}

/// The invoking event, delivered JSON-encoded inside [`ConfigRuleEvent`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokingEvent {
    pub message_type: MessageType,
    #[serde(default)]
    pub configuration_item: Option<ConfigurationItem>,
    #[serde(default)]
    pub configuration_item_summary: Option<ConfigurationItemSummary>,
    #[serde(with = "time::serde::rfc3339")]
    pub notification_creation_time: OffsetDateTime,
}

impl InvokingEvent {
    pub fn ordering_timestamp(&self) -> OffsetDateTime {
        self.configuration_item
            .as_ref()
            .map(|item| item.configuration_item_capture_time)
            .or_else(|| {
                self.configuration_item_summary
                    .as_ref()
                    .map(|summary| summary.configuration_item_capture_time)
            })
            .unwrap_or(self.notification_creation_time)
    }

    pub fn summary(&self) -> crate::Result<&ConfigurationItemSummary> {
        self.configuration_item_summary
            .as_ref()
            .ok_or_else(|| Error::MissingValue(String::from("configurationItemSummary")))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationItem {
    pub resource_type: String,
    pub resource_id: String,
    #[serde(default)]
    pub resource_name: Option<String>,
    #[serde(rename = "ARN", default)]
    pub arn: Option<String>,
    #[serde(default)]
    pub aws_account_id: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub configuration_item_capture_time: OffsetDateTime,
    pub configuration_item_status: ConfigurationItemStatus,
    #[serde(default)]
    pub configuration: Value,
}

impl ConfigurationItem {
    /// Deleted, unrecorded or out-of-scope resources are reported as not
    /// applicable without looking at their configuration.
    pub fn is_applicable(&self, event_left_scope: bool) -> bool {
        let status = matches!(
            self.configuration_item_status,
            ConfigurationItemStatus::OK | ConfigurationItemStatus::ResourceDiscovered
        );
        status && !event_left_scope
    }
}

/// Sent in place of the configuration item when the item is too large for
/// the invoking event.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationItemSummary {
    pub resource_type: String,
    pub resource_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub configuration_item_capture_time: OffsetDateTime,
    pub configuration_item_status: ConfigurationItemStatus,
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod event_tests;
