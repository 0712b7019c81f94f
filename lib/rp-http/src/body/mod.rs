/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::io::{Read, Write};

use crate::HttpResponseError;
use crate::buffer::ReceiveBuffer;

mod content_length;
pub use content_length::ContentLengthDecoder;

mod chunked;
pub use chunked::{ChunkedDecodeState, ChunkedDecoder};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HttpBodyType {
    ContentLength(u64),
    Chunked,
}

impl fmt::Display for HttpBodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpBodyType::ContentLength(size) => write!(f, "content-length {size}"),
            HttpBodyType::Chunked => f.write_str("chunked"),
        }
    }
}

/// Streams one response body from the receive buffer and the connection to
/// a writer.
///
/// Bytes received after the end of the body are left at the front of the
/// receive buffer for the next response.
pub enum HttpBodyDecoder {
    ContentLength(ContentLengthDecoder),
    Chunked(ChunkedDecoder),
}

impl HttpBodyDecoder {
    pub fn new(body_type: HttpBodyType) -> Self {
        match body_type {
            HttpBodyType::ContentLength(size) => {
                HttpBodyDecoder::ContentLength(ContentLengthDecoder::new(size))
            }
            HttpBodyType::Chunked => HttpBodyDecoder::Chunked(ChunkedDecoder::default()),
        }
    }

    /// Returns the number of body bytes written.
    pub fn decode<R, W>(
        &mut self,
        reader: &mut R,
        buf: &mut ReceiveBuffer,
        writer: &mut W,
    ) -> Result<u64, HttpResponseError>
    where
        R: Read,
        W: Write,
    {
        match self {
            HttpBodyDecoder::ContentLength(d) => d.decode(reader, buf, writer),
            HttpBodyDecoder::Chunked(d) => d.decode(reader, buf, writer),
        }
    }
}
