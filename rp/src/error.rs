/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io;

use thiserror::Error;

use rp_http::{HttpRequestError, HttpResponseError};
use rp_socket::{ConnectError, ResolveError};

use crate::output::OutputDest;

#[derive(Debug, Error)]
pub enum RetrieveError {
    #[error("resolve error: {0}")]
    ResolveFailed(#[from] ResolveError),
    #[error("connect error: {0}")]
    ConnectFailed(#[from] ConnectError),
    #[error("transport error: {0}")]
    RequestFailed(#[from] HttpRequestError),
    #[error("response error: {0}")]
    ResponseFailed(#[from] HttpResponseError),
    #[error("failed to open output {0}: {1}")]
    OutputOpenFailed(OutputDest, io::Error),
    #[error("failed to close output {0}: {1}")]
    OutputCloseFailed(OutputDest, io::Error),
}

impl RetrieveError {
    /// The received bytes that caused the error, if kept.
    pub fn raw_bytes(&self) -> Option<&[u8]> {
        match self {
            RetrieveError::ResponseFailed(e) => e.raw_bytes(),
            _ => None,
        }
    }
}
