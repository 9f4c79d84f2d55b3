// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use aws_config::BehaviorVersion;
use ec2_host_license_rule_lambda::aws::AwsServiceProvider;
use ec2_host_license_rule_lambda::{function_handler, Settings};
use lambda_runtime::{service_fn, Error};
use simple_logger::SimpleLogger;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let settings = Settings::from_env();
    SimpleLogger::new().with_level(settings.log_level).init()?;

    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let provider = AwsServiceProvider::new(sdk_config);

    lambda_runtime::run(service_fn(|event| {
        function_handler(event, &provider, &settings)
    }))
    .await
}
