/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io;

use thiserror::Error;

use crate::parse::{HttpLineParseError, HttpStatusLine};

fn status_line_summary(raw: &[u8]) -> String {
    let line = match memchr::memchr(b'\n', raw) {
        Some(p) => &raw[..p],
        None => raw,
    };
    match HttpStatusLine::parse(line) {
        Ok(s) => format!("HTTP/1.{} {} {}", s.version, s.code, s.reason),
        Err(_) => String::from_utf8_lossy(line).trim_end().to_string(),
    }
}

#[derive(Debug, Error)]
pub enum HttpResponseError {
    #[error("read failed: {0:?}")]
    ReadFailed(io::Error),
    #[error("remote closed")]
    RemoteClosed,
    #[error("unexpected status: {}", status_line_summary(.0))]
    UnexpectedStatus(Vec<u8>),
    #[error("headers too large (> {0})")]
    HeadersTooLarge(usize),
    #[error("invalid header line: {0}")]
    InvalidHeaderLine(HttpLineParseError),
    #[error("both content-length and chunked transfer-encoding found")]
    ConflictingFraming(Vec<u8>),
    #[error("neither content-length nor chunked transfer-encoding found")]
    MissingFraming(Vec<u8>),
    #[error("malformed chunk")]
    MalformedChunk(Vec<u8>),
    #[error("incomplete body, remote closed")]
    IncompleteBody,
    #[error("output write failed: {0:?}")]
    OutputWriteFailed(io::Error),
}

impl HttpResponseError {
    /// The received bytes that caused the error, if kept.
    pub fn raw_bytes(&self) -> Option<&[u8]> {
        match self {
            HttpResponseError::UnexpectedStatus(b)
            | HttpResponseError::ConflictingFraming(b)
            | HttpResponseError::MissingFraming(b)
            | HttpResponseError::MalformedChunk(b) => Some(b),
            _ => None,
        }
    }
}
