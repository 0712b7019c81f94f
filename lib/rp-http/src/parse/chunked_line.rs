/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use atoi::FromRadix16Checked;

use super::HttpLineParseError;

pub struct HttpChunkedLine<'a> {
    pub chunk_size: u64,
    /// Everything after the size digits, not validated.
    pub extension: &'a [u8],
}

impl<'a> HttpChunkedLine<'a> {
    /// Parse a chunk size line with the trailing CRLF already stripped.
    pub fn parse(buf: &'a [u8]) -> Result<HttpChunkedLine<'a>, HttpLineParseError> {
        let (chunk_size, offset) = u64::from_radix_16_checked(buf);
        if offset == 0 {
            return Err(HttpLineParseError::InvalidChunkSize);
        }
        let chunk_size = chunk_size.ok_or(HttpLineParseError::InvalidChunkSize)?;

        Ok(HttpChunkedLine {
            chunk_size,
            extension: &buf[offset..],
        })
    }
}
