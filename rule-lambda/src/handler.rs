use ec2_host_license_rule::constants::MAX_EVALUATIONS_PER_CALL;
use ec2_host_license_rule::{
    evaluate, ConfigRuleEvent, ConfigurationItem, CustomerErrorResponse, Error, Evaluation,
    InvokingEvent, MessageType, Result, Verdict,
};
use lambda_runtime::LambdaEvent;
use log::{error, info};
use serde::Serialize;
use serde_json::Value;

use crate::services::{ConfigService, ServiceProvider};
use crate::settings::Settings;

/// What the function returns to AWS Config: the evaluations it submitted, or
/// the error to show to the rule owner.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HandlerResponse {
    Evaluations(Vec<Evaluation>),
    Error(CustomerErrorResponse),
}

pub async fn function_handler<P: ServiceProvider>(
    event: LambdaEvent<ConfigRuleEvent>,
    provider: &P,
    settings: &Settings,
) -> std::result::Result<HandlerResponse, lambda_runtime::Error> {
    Ok(handle(&event.payload, provider, settings).await)
}

pub async fn handle<P: ServiceProvider>(
    event: &ConfigRuleEvent,
    provider: &P,
    settings: &Settings,
) -> HandlerResponse {
    match evaluate_event(event, provider, settings).await {
        Ok(evaluations) => HandlerResponse::Evaluations(evaluations),
        Err(err) => {
            let response = CustomerErrorResponse::from(&err);
            error!(
                "Rule {} failed with {}: {}",
                event.config_rule_name, response.customer_error_code, err
            );
            HandlerResponse::Error(response)
        }
    }
}

async fn evaluate_event<P: ServiceProvider>(
    event: &ConfigRuleEvent,
    provider: &P,
    settings: &Settings,
) -> Result<Vec<Evaluation>> {
    event.rule_parameters()?;

    let execution_role_arn = if settings.assume_role_mode {
        let role_arn = event
            .execution_role_arn
            .as_deref()
            .ok_or_else(|| Error::MissingValue(String::from("executionRoleArn")))?;
        Some(role_arn)
    } else {
        None
    };
    let config = provider.config_service(execution_role_arn).await?;

    let invoking_event = event.invoking_event()?;
    info!(
        "Evaluating {} for rule {}",
        invoking_event.message_type, event.config_rule_name
    );
    let item = configuration_item(&invoking_event, &config).await?;
    let evaluations = evaluations_for(event, &invoking_event, item.as_ref());

    submit_evaluations(
        &config,
        &evaluations,
        &event.result_token,
        event.is_test_mode(),
    )
    .await?;
    Ok(evaluations)
}

/// Resolves the configuration item the event is about. Scheduled runs have
/// none.
pub async fn configuration_item<C: ConfigService>(
    invoking_event: &InvokingEvent,
    config: &C,
) -> Result<Option<ConfigurationItem>> {
    match &invoking_event.message_type {
        MessageType::ConfigurationItemChangeNotification => invoking_event
            .configuration_item
            .clone()
            .map(Some)
            .ok_or_else(|| Error::MissingValue(String::from("configurationItem"))),
        MessageType::OversizedConfigurationItemChangeNotification => {
            let summary = invoking_event.summary()?;
            let item = config
                .latest_configuration_item(
                    &summary.resource_type,
                    &summary.resource_id,
                    summary.configuration_item_capture_time,
                )
                .await?;
            Ok(Some(item))
        }
        MessageType::ScheduledNotification => Ok(None),
        MessageType::Other(message_type) => {
            Err(Error::UnexpectedMessageType(message_type.clone()))
        }
    }
}

pub fn evaluations_for(
    event: &ConfigRuleEvent,
    invoking_event: &InvokingEvent,
    item: Option<&ConfigurationItem>,
) -> Vec<Evaluation> {
    match item {
        Some(item) => {
            let verdict = if item.is_applicable(event.event_left_scope) {
                evaluate(&item.configuration)
            } else {
                Verdict::not_applicable()
            };
            info!(
                "{} {} is {}",
                item.resource_type, item.resource_id, verdict
            );
            vec![Evaluation::for_item(item, verdict)]
        }
        None => {
            let verdict = evaluate(&Value::Null);
            info!("Account {} is {}", event.account_id, verdict);
            vec![Evaluation::for_account(
                event.account_id.as_str(),
                verdict,
                invoking_event.ordering_timestamp(),
            )]
        }
    }
}

pub async fn submit_evaluations<C: ConfigService>(
    config: &C,
    evaluations: &[Evaluation],
    result_token: &str,
    test_mode: bool,
) -> Result<()> {
    for batch in evaluations.chunks(MAX_EVALUATIONS_PER_CALL) {
        config.put_evaluations(batch, result_token, test_mode).await?;
    }
    Ok(())
}
