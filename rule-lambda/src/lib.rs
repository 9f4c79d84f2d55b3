// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

pub mod aws;
pub mod handler;
pub mod services;
pub mod settings;

pub use crate::handler::{function_handler, handle, HandlerResponse};
pub use crate::services::{ConfigService, ServiceProvider};
pub use crate::settings::Settings;
