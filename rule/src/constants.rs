/// Resource type reported when an evaluation targets the account itself.
pub const DEFAULT_RESOURCE_TYPE: &str = "AWS::::Account";

/// Result token AWS Config hands out when a rule is run as a dry run.
pub const TEST_MODE_RESULT_TOKEN: &str = "TESTMODE";

pub const ASSUME_ROLE_SESSION_NAME: &str = "configLambdaExecution";

/// PutEvaluations accepts at most this many evaluations per call.
pub const MAX_EVALUATIONS_PER_CALL: usize = 100;

pub const MAX_ANNOTATION_LENGTH: usize = 256;
