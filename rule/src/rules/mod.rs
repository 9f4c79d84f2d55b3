pub mod evaluate;

use serde::{Deserialize, Serialize};
use std::fmt::Formatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplianceType {
    Compliant,
    NonCompliant,
    NotApplicable,
    InsufficientData,
}

impl ComplianceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceType::Compliant => "COMPLIANT",
            ComplianceType::NonCompliant => "NON_COMPLIANT",
            ComplianceType::NotApplicable => "NOT_APPLICABLE",
            ComplianceType::InsufficientData => "INSUFFICIENT_DATA",
        }
    }
}

impl std::fmt::Display for ComplianceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of evaluating one configuration snapshot. The annotation is only
/// ever set for [`ComplianceType::NonCompliant`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub compliance_type: ComplianceType,
    pub annotation: Option<String>,
}

impl Verdict {
    pub fn compliant() -> Self {
        Verdict {
            compliance_type: ComplianceType::Compliant,
            annotation: None,
        }
    }

    pub fn not_applicable() -> Self {
        Verdict {
            compliance_type: ComplianceType::NotApplicable,
            annotation: None,
        }
    }

    pub fn non_compliant(annotation: impl Into<String>) -> Self {
        Verdict {
            compliance_type: ComplianceType::NonCompliant,
            annotation: Some(annotation.into()),
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.annotation {
            Some(annotation) => write!(f, "{} ({})", self.compliance_type, annotation),
            None => write!(f, "{}", self.compliance_type),
        }
    }
}
