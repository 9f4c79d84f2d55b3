use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ACCESS_DENIED_CODE: &str = "AccessDenied";
pub const ACCESS_DENIED_MESSAGE: &str = "AWS Config does not have permission to assume the IAM role.";
pub const INTERNAL_ERROR_CODE: &str = "InternalError";
pub const INTERNAL_ERROR_MESSAGE: &str = "InternalError";
pub const INVALID_PARAMETER_CODE: &str = "InvalidParameterValueException";

#[derive(Debug, Error)]
pub enum Error {
    #[error("Error parsing incoming JSON event {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid rule parameters `{0}`")]
    InvalidParameterValue(String),
    #[error("Unexpected message type `{0}`")]
    UnexpectedMessageType(String),
    #[error("Invoking event is missing `{0}`")]
    MissingValue(String),
    #[error("Unable to assume the execution role: {message}")]
    AssumeRole {
        code: Option<String>,
        message: String,
    },
    #[error("Call to AWS Config failed `{0}`")]
    ServiceError(String),
    #[error("Timestamp out of range `{0}`")]
    TimestampError(String),
}

/// Error payload returned to AWS Config instead of evaluations. The
/// `customer*` fields are shown to the rule owner, the `internal*` fields are
/// only meant for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerErrorResponse {
    pub customer_error_code: String,
    pub customer_error_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_error_details: Option<String>,
}

impl CustomerErrorResponse {
    pub fn internal(message: impl Into<String>, details: impl Into<String>) -> Self {
        CustomerErrorResponse {
            customer_error_code: INTERNAL_ERROR_CODE.to_string(),
            customer_error_message: INTERNAL_ERROR_MESSAGE.to_string(),
            internal_error_message: Some(message.into()),
            internal_error_details: Some(details.into()),
        }
    }

    pub fn access_denied(message: impl Into<String>) -> Self {
        CustomerErrorResponse {
            customer_error_code: ACCESS_DENIED_CODE.to_string(),
            customer_error_message: ACCESS_DENIED_MESSAGE.to_string(),
            internal_error_message: Some(message.into()),
            internal_error_details: Some(ACCESS_DENIED_CODE.to_string()),
        }
    }

    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        CustomerErrorResponse {
            customer_error_code: INVALID_PARAMETER_CODE.to_string(),
            customer_error_message: message.into(),
            internal_error_message: None,
            internal_error_details: None,
        }
    }
}

impl From<&Error> for CustomerErrorResponse {
    fn from(err: &Error) -> Self {
        match err {
            Error::AssumeRole { code, message } if code.as_deref() == Some(ACCESS_DENIED_CODE) => {
                CustomerErrorResponse::access_denied(message.as_str())
            }
            Error::InvalidParameterValue(message) => {
                CustomerErrorResponse::invalid_parameter(message.as_str())
            }
            _ => CustomerErrorResponse::internal(err.to_string(), format!("{err:?}")),
        }
    }
}

impl From<Error> for CustomerErrorResponse {
    fn from(err: Error) -> Self {
        CustomerErrorResponse::from(&err)
    }
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod errors_tests;
