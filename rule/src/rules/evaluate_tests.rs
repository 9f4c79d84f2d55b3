use super::*;
use crate::rules::ComplianceType;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

const EXPECTED_ANNOTATION: &str = r#"EC2 instance tenancy set to host and usage-operation not set to one of: "RunInstances:0800", "RunInstances:00g0""#;

#[test]
fn host_tenancy_with_byol_usage_operation_is_non_compliant() {
    let configuration = json!({
        "placement": {"tenancy": "host"},
        "usageOperation": "RunInstances:0002"
    });

    let verdict = evaluate(&configuration);
    assert_eq!(verdict.compliance_type, ComplianceType::NonCompliant);
    assert_eq!(verdict.annotation.as_deref(), Some(EXPECTED_ANNOTATION));
}

#[test]
fn host_tenancy_with_license_included_usage_operation_is_compliant() {
    let configuration = json!({
        "placement": {"tenancy": "host"},
        "usageOperation": "RunInstances:0800"
    });

    assert_eq!(evaluate(&configuration), Verdict::compliant());
}

#[test]
fn default_tenancy_is_not_applicable() {
    let configuration = json!({
        "placement": {"tenancy": "default"},
        "usageOperation": "RunInstances:0800"
    });

    assert_eq!(evaluate(&configuration), Verdict::not_applicable());
}

#[rstest]
#[case(json!({"placement": {"tenancy": "default"}, "usageOperation": "RunInstances:0002"}))]
#[case(json!({"placement": {"tenancy": "dedicated"}, "usageOperation": "RunInstances:0800"}))]
#[case(json!({"placement": {"tenancy": "Host"}, "usageOperation": "RunInstances:0800"}))]
#[case(json!({"placement": {}, "usageOperation": "RunInstances:0002"}))]
#[case(json!({"placement": {"tenancy": null}}))]
#[case(json!({"placement": {"tenancy": ["host"]}}))]
#[case(json!({"placement": "host"}))]
#[case(json!({"usageOperation": "RunInstances:0002"}))]
#[case(json!({}))]
#[case(json!(null))]
#[case(json!("host"))]
fn anything_off_a_dedicated_host_is_not_applicable(#[case] configuration: Value) {
    let verdict = evaluate(&configuration);
    assert_eq!(verdict.compliance_type, ComplianceType::NotApplicable);
    assert_eq!(verdict.annotation, None);
}

#[rstest]
#[case("RunInstances:0800")]
#[case("RunInstances:00g0")]
fn every_license_included_code_is_compliant(#[case] usage_operation: &str) {
    let configuration = json!({
        "placement": {"tenancy": "host", "hostId": "h-0123456789abcdef0"},
        "usageOperation": usage_operation
    });

    let verdict = evaluate(&configuration);
    assert_eq!(verdict.compliance_type, ComplianceType::Compliant);
    assert_eq!(verdict.annotation, None);
}

#[rstest]
#[case(json!({"placement": {"tenancy": "host"}}))]
#[case(json!({"placement": {"tenancy": "host"}, "usageOperation": null}))]
#[case(json!({"placement": {"tenancy": "host"}, "usageOperation": 800}))]
#[case(json!({"placement": {"tenancy": "host"}, "usageOperation": ""}))]
#[case(json!({"placement": {"tenancy": "host"}, "usageOperation": "RunInstances"}))]
#[case(json!({"placement": {"tenancy": "host"}, "usageOperation": "runinstances:0800"}))]
#[case(json!({"placement": {"tenancy": "host"}, "usageOperation": "RunInstances:0800 "}))]
#[case(json!({"placement": {"tenancy": "host"}, "usageOperation": "RunInstances:0010"}))]
fn host_tenancy_without_license_included_code_is_non_compliant(#[case] configuration: Value) {
    let verdict = evaluate(&configuration);
    assert_eq!(verdict.compliance_type, ComplianceType::NonCompliant);
    assert_eq!(verdict.annotation.as_deref(), Some(EXPECTED_ANNOTATION));
}

#[test]
fn evaluating_twice_gives_the_same_verdict() {
    let configuration = json!({
        "placement": {"tenancy": "host"},
        "usageOperation": "RunInstances:0002"
    });
    let snapshot = configuration.clone();

    let first = evaluate(&configuration);
    let second = evaluate(&configuration);
    assert_eq!(first, second);
    assert_eq!(configuration, snapshot);
}

#[test]
fn annotation_lists_every_license_included_code() {
    for code in LICENSE_INCLUDED_USAGE_OPERATIONS.iter() {
        assert!(NON_COMPLIANT_ANNOTATION.contains(&format!("\"{code}\"")));
    }
    assert_eq!(NON_COMPLIANT_ANNOTATION.as_str(), EXPECTED_ANNOTATION);
}
