use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::constants::{DEFAULT_RESOURCE_TYPE, MAX_ANNOTATION_LENGTH};
use crate::event::ConfigurationItem;
use crate::rules::{ComplianceType, Verdict};

/// One compliance result as reported to AWS Config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Evaluation {
    pub compliance_resource_type: String,
    pub compliance_resource_id: String,
    pub compliance_type: ComplianceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub ordering_timestamp: OffsetDateTime,
}

impl Evaluation {
    pub fn new(
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
        verdict: Verdict,
        ordering_timestamp: OffsetDateTime,
    ) -> Self {
        Evaluation {
            compliance_resource_type: resource_type.into(),
            compliance_resource_id: resource_id.into(),
            compliance_type: verdict.compliance_type,
            annotation: verdict.annotation.map(truncate_annotation),
            ordering_timestamp,
        }
    }

    pub fn for_item(item: &ConfigurationItem, verdict: Verdict) -> Self {
        Evaluation::new(
            item.resource_type.as_str(),
            item.resource_id.as_str(),
            verdict,
            item.configuration_item_capture_time,
        )
    }

    pub fn for_account(
        account_id: impl Into<String>,
        verdict: Verdict,
        ordering_timestamp: OffsetDateTime,
    ) -> Self {
        Evaluation::new(DEFAULT_RESOURCE_TYPE, account_id, verdict, ordering_timestamp)
    }
}

fn truncate_annotation(annotation: String) -> String {
    if annotation.chars().count() <= MAX_ANNOTATION_LENGTH {
        return annotation;
    }
    let mut truncated = annotation
        .chars()
        .take(MAX_ANNOTATION_LENGTH - 3)
        .collect::<String>();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
#[path = "evaluation_tests.rs"]
mod evaluation_tests;
