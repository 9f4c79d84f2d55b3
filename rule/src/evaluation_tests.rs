use super::*;
use crate::rules::evaluate::NON_COMPLIANT_ANNOTATION;
use pretty_assertions::assert_eq;
use serde_json::json;
use time::macros::datetime;

fn instance(status: &str) -> ConfigurationItem {
    serde_json::from_value(json!({
        "resourceType": "AWS::EC2::Instance",
        "resourceId": "some-resource-id",
        "configurationItemCaptureTime": "2018-07-02T03:37:52.418Z",
        "configurationItemStatus": status,
        "configuration": {"placement": {"tenancy": "host"}}
    }))
    .unwrap()
}

#[test]
fn item_evaluation_takes_resource_and_capture_time() {
    let evaluation = Evaluation::for_item(
        &instance("OK"),
        Verdict::non_compliant(NON_COMPLIANT_ANNOTATION.as_str()),
    );

    assert_eq!(evaluation.compliance_resource_type, "AWS::EC2::Instance");
    assert_eq!(evaluation.compliance_resource_id, "some-resource-id");
    assert_eq!(evaluation.compliance_type, ComplianceType::NonCompliant);
    assert_eq!(
        evaluation.annotation.as_deref(),
        Some(NON_COMPLIANT_ANNOTATION.as_str())
    );
    assert_eq!(
        evaluation.ordering_timestamp,
        datetime!(2018-07-02 03:37:52.418 UTC)
    );
}

#[test]
fn account_evaluation_uses_default_resource_type() {
    let evaluation = Evaluation::for_account(
        "123456789012",
        Verdict::not_applicable(),
        datetime!(2017-12-23 22:11:18.158 UTC),
    );

    assert_eq!(evaluation.compliance_resource_type, "AWS::::Account");
    assert_eq!(evaluation.compliance_resource_id, "123456789012");
    assert_eq!(evaluation.compliance_type, ComplianceType::NotApplicable);
    assert_eq!(evaluation.annotation, None);
}

#[test]
fn serializes_with_config_field_names() -> serde_json::Result<()> {
    let compliant = Evaluation::for_item(&instance("OK"), Verdict::compliant());
    assert_eq!(
        serde_json::to_value(&compliant)?,
        json!({
            "ComplianceResourceType": "AWS::EC2::Instance",
            "ComplianceResourceId": "some-resource-id",
            "ComplianceType": "COMPLIANT",
            "OrderingTimestamp": "2018-07-02T03:37:52.418Z"
        })
    );

    let non_compliant = Evaluation::for_item(&instance("OK"), Verdict::non_compliant("why"));
    let value = serde_json::to_value(&non_compliant)?;
    assert_eq!(value["ComplianceType"], "NON_COMPLIANT");
    assert_eq!(value["Annotation"], "why");
    Ok(())
}

#[test]
fn long_annotations_are_truncated() {
    let long = "x".repeat(300);
    let evaluation = Evaluation::for_item(&instance("OK"), Verdict::non_compliant(long));

    let annotation = evaluation.annotation.unwrap();
    assert_eq!(annotation.chars().count(), 256);
    assert!(annotation.ends_with("..."));
}

#[test]
fn annotation_at_the_limit_is_kept() {
    let exact = "y".repeat(256);
    let evaluation = Evaluation::for_item(&instance("OK"), Verdict::non_compliant(exact.clone()));
    assert_eq!(evaluation.annotation, Some(exact));
}
