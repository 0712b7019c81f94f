/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io::{Read, Write};

use log::trace;

use crate::HttpResponseError;
use crate::buffer::ReceiveBuffer;

pub struct ContentLengthDecoder {
    remaining: u64,
}

impl ContentLengthDecoder {
    pub fn new(size: u64) -> Self {
        ContentLengthDecoder { remaining: size }
    }

    fn write_buffered<W: Write>(
        &mut self,
        buf: &mut ReceiveBuffer,
        writer: &mut W,
    ) -> Result<u64, HttpResponseError> {
        let n = usize::try_from(self.remaining).map_or(buf.len(), |r| r.min(buf.len()));
        writer
            .write_all(&buf.data()[..n])
            .map_err(HttpResponseError::OutputWriteFailed)?;
        buf.consume(n);
        self.remaining -= n as u64;
        Ok(n as u64)
    }

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
        let mut written = 0u64;
        if !buf.is_empty() {
            written += self.write_buffered(buf, writer)?;
            if !buf.is_empty() {
                // already holds the start of the next response
                buf.compact();
                return Ok(written);
            }
        }

        while self.remaining > 0 {
            let nr = buf
                .fill_full(reader)
                .map_err(HttpResponseError::ReadFailed)?;
            if nr == 0 {
                trace!("remote closed with {} body bytes left", self.remaining);
                return Err(HttpResponseError::IncompleteBody);
            }
            written += self.write_buffered(buf, writer)?;
        }
        buf.compact();
        Ok(written)
    }
}
