// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Compliance check for EC2 instances running on dedicated hosts.
//!
//! An instance whose `placement.tenancy` is `host` must be launched with one of
//! the license-included usage operations, everything else is out of scope for
//! the rule. The evaluator in [`rules`] is pure; [`event`], [`evaluation`] and
//! [`parameters`] model the AWS Config custom rule envelope around it.

pub mod constants;
pub mod errors;
pub mod evaluation;
pub mod event;
pub mod parameters;
pub mod rules;

pub use crate::errors::{CustomerErrorResponse, Error};
pub use crate::evaluation::Evaluation;
pub use crate::event::{ConfigRuleEvent, ConfigurationItem, InvokingEvent, MessageType};
pub use crate::rules::evaluate::evaluate;
pub use crate::rules::{ComplianceType, Verdict};

pub type Result<R> = std::result::Result<R, Error>;
