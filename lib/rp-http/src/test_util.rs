/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::collections::VecDeque;
use std::io::{self, Read, Write};

/// Returns one predefined chunk, or the part of it that fits, per read.
pub(crate) struct ScriptedReader {
    chunks: VecDeque<Vec<u8>>,
    fail_at_end: bool,
}

impl ScriptedReader {
    pub(crate) fn new(chunks: &[&[u8]]) -> Self {
        ScriptedReader {
            chunks: chunks.iter().map(|c| c.to_vec()).collect(),
            fail_at_end: false,
        }
    }

    /// Like `new`, but a connection reset is reported after the last chunk.
    pub(crate) fn failing(chunks: &[&[u8]]) -> Self {
        let mut r = ScriptedReader::new(chunks);
        r.fail_at_end = true;
        r
    }

    /// Split `data` into chunks of `step` bytes.
    pub(crate) fn fragmented(data: &[u8], step: usize) -> Self {
        ScriptedReader {
            chunks: data.chunks(step).map(|c| c.to_vec()).collect(),
            fail_at_end: false,
        }
    }

    pub(crate) fn is_drained(&self) -> bool {
        self.chunks.is_empty()
    }
}

impl Read for ScriptedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let Some(chunk) = self.chunks.front_mut() else {
            return if self.fail_at_end {
                Err(io::Error::from(io::ErrorKind::ConnectionReset))
            } else {
                Ok(0)
            };
        };
        let n = buf.len().min(chunk.len());
        buf[..n].copy_from_slice(&chunk[..n]);
        if n == chunk.len() {
            self.chunks.pop_front();
        } else {
            chunk.drain(..n);
        }
        Ok(n)
    }
}

/// A sink that refuses all writes.
pub(crate) struct BrokenWriter;

impl Write for BrokenWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
