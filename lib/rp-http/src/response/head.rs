/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io::Read;

use log::debug;

use super::HttpResponseError;
use crate::HttpBodyType;
use crate::buffer::ReceiveBuffer;
use crate::parse::{HttpFramingHeader, HttpStatusLine};

/// What is needed from a response head to read its body.
#[derive(Debug)]
pub struct HttpResponseHead {
    pub body_type: HttpBodyType,
    /// Bytes of the status line and all header lines, blank line included.
    pub head_size: usize,
}

#[derive(Default)]
struct HeadParser {
    line_start: usize,
    content_length: Option<u64>,
    chunked: bool,
}

impl HeadParser {
    fn parse_header_line(&mut self, line: &[u8]) -> Result<(), HttpResponseError> {
        match HttpFramingHeader::parse(line).map_err(HttpResponseError::InvalidHeaderLine)? {
            HttpFramingHeader::ContentLength(size) => self.content_length = Some(size),
            HttpFramingHeader::Chunked => self.chunked = true,
            HttpFramingHeader::Other => {}
        }
        Ok(())
    }

    fn finish(self, head: &[u8]) -> Result<HttpBodyType, HttpResponseError> {
        match (self.content_length, self.chunked) {
            (Some(_), true) => Err(HttpResponseError::ConflictingFraming(head.to_vec())),
            (Some(size), false) => Ok(HttpBodyType::ContentLength(size)),
            (None, true) => Ok(HttpBodyType::Chunked),
            (None, false) => Err(HttpResponseError::MissingFraming(head.to_vec())),
        }
    }
}

impl HttpResponseHead {
    /// Receive and check a response head.
    ///
    /// Bytes already in `buf` are taken as the start of the response. On
    /// success `buf` holds only the bytes received after the head.
    pub fn recv<R: Read>(
        reader: &mut R,
        buf: &mut ReceiveBuffer,
    ) -> Result<Self, HttpResponseError> {
        buf.compact();
        if buf.is_empty() && buf.fill_full(reader).map_err(HttpResponseError::ReadFailed)? == 0 {
            return Err(HttpResponseError::RemoteClosed);
        }

        let mut parser = HeadParser::default();
        loop {
            let data = buf.data();
            if parser.line_start == 0 && !HttpStatusLine::is_expected_prefix(data) {
                return Err(HttpResponseError::UnexpectedStatus(data.to_vec()));
            }

            let Some(p) = memchr::memmem::find(&data[parser.line_start..], b"\r\n") else {
                match buf.fill_more(reader).map_err(HttpResponseError::ReadFailed)? {
                    None => return Err(HttpResponseError::HeadersTooLarge(buf.capacity())),
                    Some(0) => return Err(HttpResponseError::RemoteClosed),
                    Some(_) => continue,
                }
            };

            let line = &data[parser.line_start..parser.line_start + p];
            let next_start = parser.line_start + p + 2;
            if parser.line_start > 0 {
                if line.is_empty() {
                    let head = &data[..next_start];
                    #[cfg(feature = "log-raw-io")]
                    crate::debug::log_rsp(head);
                    let body_type = parser.finish(head)?;
                    buf.consume(next_start);
                    debug!("received response head of {next_start} bytes, body {body_type}");
                    return Ok(HttpResponseHead {
                        body_type,
                        head_size: next_start,
                    });
                }
                parser.parse_header_line(line)?;
            }
            parser.line_start = next_start;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::ScriptedReader;

    #[test]
    fn content_length() {
        let mut reader = ScriptedReader::new(&[
            b"HTTP/1.1 200 OK\r\nServer: test\r\nContent-Length: 5\r\n\r\nhello",
        ]);
        let mut buf = ReceiveBuffer::with_capacity(1024);

        let head = HttpResponseHead::recv(&mut reader, &mut buf).unwrap();
        assert!(matches!(head.body_type, HttpBodyType::ContentLength(5)));
        assert_eq!(head.head_size, 52);
        assert_eq!(buf.data(), b"hello");
    }

    #[test]
    fn chunked_fragmented() {
        let data = b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\nX-Test: 1\r\n\r\n4\r\nWiki";
        for step in 1..data.len() {
            let mut reader = ScriptedReader::fragmented(data, step);
            let mut buf = ReceiveBuffer::with_capacity(128);

            let head = HttpResponseHead::recv(&mut reader, &mut buf).unwrap();
            assert!(matches!(head.body_type, HttpBodyType::Chunked));
            let mut left = buf.data().to_vec();
            std::io::copy(&mut reader, &mut left).unwrap();
            assert_eq!(left, b"4\r\nWiki");
        }
    }

    #[test]
    fn buffered_head() {
        let mut reader = ScriptedReader::new(&[]);
        let mut buf = ReceiveBuffer::with_capacity(128);
        let mut preload =
            ScriptedReader::new(&[b"xxHTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n"]);
        buf.fill_full(&mut preload).unwrap();
        buf.consume(2);

        let head = HttpResponseHead::recv(&mut reader, &mut buf).unwrap();
        assert!(matches!(head.body_type, HttpBodyType::ContentLength(0)));
        assert!(buf.is_empty());
    }

    #[test]
    fn last_content_length() {
        let mut reader = ScriptedReader::new(&[
            b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\nContent-Length: 3\r\n\r\n",
        ]);
        let mut buf = ReceiveBuffer::with_capacity(128);
        let head = HttpResponseHead::recv(&mut reader, &mut buf).unwrap();
        assert!(matches!(head.body_type, HttpBodyType::ContentLength(3)));
    }

    #[test]
    fn unexpected_status() {
        let mut reader = ScriptedReader::new(&[
            b"HTTP/1.1 404 Not Found\r\nContent-Length: 9\r\n\r\nnot found",
        ]);
        let mut buf = ReceiveBuffer::with_capacity(128);
        let e = HttpResponseHead::recv(&mut reader, &mut buf).unwrap_err();
        assert!(matches!(e, HttpResponseError::UnexpectedStatus(_)));
        assert!(e.raw_bytes().unwrap().starts_with(b"HTTP/1.1 404"));
    }

    #[test]
    fn unexpected_status_early() {
        // fail before the whole status line is received
        let mut reader = ScriptedReader::new(&[b"HTTP/1.0 ", b"200 OK\r\n"]);
        let mut buf = ReceiveBuffer::with_capacity(128);
        let e = HttpResponseHead::recv(&mut reader, &mut buf).unwrap_err();
        assert!(matches!(e, HttpResponseError::UnexpectedStatus(_)));
        assert!(!reader.is_drained());
    }

    #[test]
    fn status_with_extra() {
        let mut reader = ScriptedReader::new(&[b"HTTP/1.1 200 OKAY\r\n\r\n"]);
        let mut buf = ReceiveBuffer::with_capacity(128);
        let e = HttpResponseHead::recv(&mut reader, &mut buf).unwrap_err();
        assert!(matches!(e, HttpResponseError::UnexpectedStatus(_)));
    }

    #[test]
    fn conflicting_framing() {
        let mut reader = ScriptedReader::new(&[
            b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\nTransfer-Encoding: chunked\r\n\r\n",
        ]);
        let mut buf = ReceiveBuffer::with_capacity(128);
        let e = HttpResponseHead::recv(&mut reader, &mut buf).unwrap_err();
        assert!(matches!(e, HttpResponseError::ConflictingFraming(_)));
    }

    #[test]
    fn missing_framing() {
        let mut reader = ScriptedReader::new(&[b"HTTP/1.1 200 OK\r\nServer: x\r\n\r\nbody"]);
        let mut buf = ReceiveBuffer::with_capacity(128);
        let e = HttpResponseHead::recv(&mut reader, &mut buf).unwrap_err();
        assert!(matches!(e, HttpResponseError::MissingFraming(_)));
    }

    #[test]
    fn too_large() {
        let mut reader = ScriptedReader::new(&[
            b"HTTP/1.1 200 OK\r\nServer: a very long server name\r\n\r\n",
        ]);
        let mut buf = ReceiveBuffer::with_capacity(32);
        let e = HttpResponseHead::recv(&mut reader, &mut buf).unwrap_err();
        assert!(matches!(e, HttpResponseError::HeadersTooLarge(32)));
    }

    #[test]
    fn remote_closed() {
        let mut reader = ScriptedReader::new(&[]);
        let mut buf = ReceiveBuffer::with_capacity(128);
        let e = HttpResponseHead::recv(&mut reader, &mut buf).unwrap_err();
        assert!(matches!(e, HttpResponseError::RemoteClosed));

        let mut reader = ScriptedReader::new(&[b"HTTP/1.1 200 OK\r\nContent-Len"]);
        let e = HttpResponseHead::recv(&mut reader, &mut buf).unwrap_err();
        assert!(matches!(e, HttpResponseError::RemoteClosed));
    }

    #[test]
    fn read_failed() {
        let mut reader = ScriptedReader::failing(&[b"HTTP/1.1 200 OK\r\n"]);
        let mut buf = ReceiveBuffer::with_capacity(128);
        let e = HttpResponseHead::recv(&mut reader, &mut buf).unwrap_err();
        assert!(matches!(e, HttpResponseError::ReadFailed(_)));
    }
}
