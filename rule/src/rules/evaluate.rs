use lazy_static::lazy_static;
use serde_json::Value;

use crate::rules::Verdict;

pub const HOST_TENANCY: &str = "host";

/// Usage operations that bill the instance with the license included.
pub const LICENSE_INCLUDED_USAGE_OPERATIONS: [&str; 2] = ["RunInstances:0800", "RunInstances:00g0"];

lazy_static! {
    pub static ref NON_COMPLIANT_ANNOTATION: String = format!(
        "EC2 instance tenancy set to host and usage-operation not set to one of: {}",
        LICENSE_INCLUDED_USAGE_OPERATIONS
            .iter()
            .map(|code| format!("\"{code}\""))
            .collect::<Vec<String>>()
            .join(", ")
    );
}

fn tenancy(configuration: &Value) -> Option<&str> {
    configuration
        .get("placement")
        .and_then(|placement| placement.get("tenancy"))
        .and_then(Value::as_str)
}

fn usage_operation(configuration: &Value) -> Option<&str> {
    configuration.get("usageOperation").and_then(Value::as_str)
}

/// Decides compliance of an EC2 instance configuration.
///
/// Tenancy is checked first: anything not placed on a dedicated host is not
/// applicable, whatever its usage operation. Missing or non-string fields
/// never fail the evaluation, they simply do not match.
pub fn evaluate(configuration: &Value) -> Verdict {
    if tenancy(configuration) != Some(HOST_TENANCY) {
        return Verdict::not_applicable();
    }

    match usage_operation(configuration) {
        Some(operation) if LICENSE_INCLUDED_USAGE_OPERATIONS.contains(&operation) => {
            Verdict::compliant()
        }
        _ => Verdict::non_compliant(NON_COMPLIANT_ANNOTATION.as_str()),
    }
}

#[cfg(test)]
#[path = "evaluate_tests.rs"]
mod evaluate_tests;
