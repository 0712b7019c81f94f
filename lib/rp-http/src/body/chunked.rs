/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io::{Read, Write};

use log::trace;

use crate::HttpResponseError;
use crate::buffer::ReceiveBuffer;
use crate::parse::HttpChunkedLine;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ChunkedDecodeState {
    #[default]
    AwaitingChunkSize,
    ChunkData {
        remaining: u64,
    },
    AwaitingChunkTerminator,
    /// The optional CRLF after the last chunk. Other bytes are left to the
    /// next response.
    AwaitingTrailerEnd,
    Done,
}

#[derive(Default)]
pub struct ChunkedDecoder {
    state: ChunkedDecodeState,
}

impl ChunkedDecoder {
    #[inline]
    pub fn state(&self) -> ChunkedDecodeState {
        self.state
    }

    /// Get the length of the next line, not including the CRLF.
    fn recv_line<R: Read>(
        reader: &mut R,
        buf: &mut ReceiveBuffer,
    ) -> Result<usize, HttpResponseError> {
        let mut searched = 0;
        loop {
            let data = buf.data();
            if let Some(p) = memchr::memmem::find(&data[searched..], b"\r\n") {
                return Ok(searched + p);
            }
            searched = data.len().saturating_sub(1);

            match buf.fill_more(reader).map_err(HttpResponseError::ReadFailed)? {
                None => return Err(HttpResponseError::MalformedChunk(buf.data().to_vec())),
                Some(0) if buf.is_empty() => return Err(HttpResponseError::IncompleteBody),
                Some(0) => return Err(HttpResponseError::MalformedChunk(buf.data().to_vec())),
                Some(_) => {}
            }
        }
    }

    fn recv_crlf<R: Read>(
        reader: &mut R,
        buf: &mut ReceiveBuffer,
    ) -> Result<(), HttpResponseError> {
        while buf.len() < 2 {
            match buf.fill_more(reader).map_err(HttpResponseError::ReadFailed)? {
                None => return Err(HttpResponseError::MalformedChunk(buf.data().to_vec())),
                Some(0) if buf.is_empty() => return Err(HttpResponseError::IncompleteBody),
                Some(0) => return Err(HttpResponseError::MalformedChunk(buf.data().to_vec())),
                Some(_) => {}
            }
        }
        if !buf.data().starts_with(b"\r\n") {
            return Err(HttpResponseError::MalformedChunk(buf.data().to_vec()));
        }
        buf.consume(2);
        Ok(())
    }

    /// Consume the CRLF after the last chunk if it is there.
    ///
    /// The body is complete at this point, so peer close is fine, and any
    /// other bytes are kept for the next response.
    fn recv_last_crlf<R: Read>(
        reader: &mut R,
        buf: &mut ReceiveBuffer,
    ) -> Result<(), HttpResponseError> {
        loop {
            let data = buf.data();
            if data.starts_with(b"\r\n") {
                buf.consume(2);
                return Ok(());
            }
            if !b"\r\n".starts_with(data) {
                return Ok(());
            }

            match buf.fill_more(reader).map_err(HttpResponseError::ReadFailed)? {
                None | Some(0) => return Ok(()),
                Some(_) => {}
            }
        }
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
        loop {
            match self.state {
                ChunkedDecodeState::AwaitingChunkSize => {
                    let line_len = Self::recv_line(reader, buf)?;
                    let data = buf.data();
                    let chunk_size = HttpChunkedLine::parse(&data[..line_len])
                        .map_err(|_| HttpResponseError::MalformedChunk(data.to_vec()))?
                        .chunk_size;
                    buf.consume(line_len + 2);
                    trace!("chunk size {chunk_size}");

                    self.state = if chunk_size == 0 {
                        ChunkedDecodeState::AwaitingTrailerEnd
                    } else {
                        ChunkedDecodeState::ChunkData {
                            remaining: chunk_size,
                        }
                    };
                }
                ChunkedDecodeState::ChunkData { remaining } => {
                    if buf.is_empty()
                        && buf
                            .fill_full(reader)
                            .map_err(HttpResponseError::ReadFailed)?
                            == 0
                    {
                        trace!("remote closed with {remaining} chunk bytes left");
                        return Err(HttpResponseError::IncompleteBody);
                    }

                    let n = usize::try_from(remaining).map_or(buf.len(), |r| r.min(buf.len()));
                    writer
                        .write_all(&buf.data()[..n])
                        .map_err(HttpResponseError::OutputWriteFailed)?;
                    buf.consume(n);
                    written += n as u64;

                    let remaining = remaining - n as u64;
                    self.state = if remaining == 0 {
                        ChunkedDecodeState::AwaitingChunkTerminator
                    } else {
                        ChunkedDecodeState::ChunkData { remaining }
                    };
                }
                ChunkedDecodeState::AwaitingChunkTerminator => {
                    Self::recv_crlf(reader, buf)?;
                    self.state = ChunkedDecodeState::AwaitingChunkSize;
                }
                ChunkedDecodeState::AwaitingTrailerEnd => {
                    Self::recv_last_crlf(reader, buf)?;
                    self.state = ChunkedDecodeState::Done;
                }
                ChunkedDecodeState::Done => {
                    buf.compact();
                    return Ok(written);
                }
            }
        }
    }
}
