/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::str::Utf8Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UrlDecodeError {
    #[error("incomplete escape sequence at offset {0}")]
    IncompleteEscape(usize),
    #[error("invalid escape sequence at offset {0}")]
    InvalidEscape(usize),
    #[error("invalid utf-8 encoding: {0}")]
    InvalidUtf8Encoding(#[from] Utf8Error),
}

#[derive(Debug, Error)]
pub enum UrlParseError {
    #[error("empty scheme")]
    EmptyScheme,
    #[error("empty host")]
    EmptyHost,
    #[error("invalid port '{0}'")]
    InvalidPort(String),
    #[error("unclosed ipv6 literal")]
    UnclosedIpv6Literal,
}
