use serde_json::{Map, Value};

use crate::errors::Error;

/// Rule parameters as configured on the AWS Config rule.
///
/// The license-included usage operations are fixed, so no key is consumed
/// today; the parameters are still parsed so that a malformed value is
/// reported back to the rule owner instead of being silently ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleParameters {
    values: Map<String, Value>,
}

impl RuleParameters {
    pub fn parse(raw: Option<&str>) -> crate::Result<RuleParameters> {
        let raw = match raw.map(str::trim) {
            None | Some("") => return Ok(RuleParameters::default()),
            Some(raw) => raw,
        };

        let value = serde_json::from_str::<Value>(raw).map_err(|err| {
            Error::InvalidParameterValue(format!("ruleParameters is not valid JSON: {err}"))
        })?;

        match value {
            Value::Object(map) => Ok(RuleParameters {
                values: map
                    .into_iter()
                    .map(|(key, value)| (key.trim().to_string(), value))
                    .collect(),
            }),
            Value::Null => Ok(RuleParameters::default()),
            _ => Err(Error::InvalidParameterValue(String::from(
                "ruleParameters must be a JSON object",
            ))),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod parameters_tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    #[case(Some("{}"))]
    #[case(Some("null"))]
    fn absent_or_empty_parameters(#[case] raw: Option<&str>) -> crate::Result<()> {
        let parameters = RuleParameters::parse(raw)?;
        assert!(parameters.is_empty());
        Ok(())
    }

    #[test]
    fn keys_are_trimmed() -> crate::Result<()> {
        let parameters = RuleParameters::parse(Some(r#"{" ExtraKey ": "value"}"#))?;
        assert_eq!(parameters.len(), 1);
        assert_eq!(parameters.get("ExtraKey"), Some(&json!("value")));
        assert_eq!(parameters.get(" ExtraKey "), None);
        Ok(())
    }

    #[rstest]
    #[case("[1, 2]")]
    #[case("\"RunInstances:0800\"")]
    #[case("42")]
    #[case("{not json")]
    fn non_object_parameters_are_rejected(#[case] raw: &str) {
        let result = RuleParameters::parse(Some(raw));
        assert!(matches!(result, Err(Error::InvalidParameterValue(_))));
    }
}
