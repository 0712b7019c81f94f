/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

mod error;

pub mod build;
pub mod logger;
pub mod opts;
pub mod output;
pub mod pipeline;
pub mod retriever;

pub use error::RetrieveError;
pub use opts::{ProcArgs, add_args, parse_args};
pub use retriever::{PageRetriever, RetrieveSummary};
