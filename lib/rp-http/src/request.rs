/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io::{self, Write};

use log::debug;
use thiserror::Error;

use rp_types::url::Endpoint;

#[derive(Debug, Error)]
pub enum HttpRequestError {
    #[error("write failed: {0:?}")]
    WriteFailed(io::Error),
}

/// A GET request asking the server to keep the connection open.
pub struct HttpGetRequest<'a> {
    host: &'a str,
    path: &'a str,
}

impl<'a> HttpGetRequest<'a> {
    pub fn new(host: &'a str, path: &'a str) -> Self {
        HttpGetRequest { host, path }
    }

    pub fn for_endpoint(endpoint: &'a Endpoint) -> Self {
        HttpGetRequest::new(endpoint.host(), endpoint.path())
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.path.len() + self.host.len() + 80);
        buf.extend_from_slice(b"GET ");
        buf.extend_from_slice(self.path.as_bytes());
        buf.extend_from_slice(b" HTTP/1.1\r\n");
        buf.extend_from_slice(b"Host: ");
        buf.extend_from_slice(self.host.as_bytes());
        buf.extend_from_slice(b"\r\n");
        buf.extend_from_slice(b"Connection: keep-alive\r\n");
        buf.extend_from_slice(b"Cache-Control: no-cache\r\n");
        buf.extend_from_slice(b"\r\n");
        buf
    }

    pub fn send<W: Write>(&self, writer: &mut W) -> Result<(), HttpRequestError> {
        let buf = self.serialize();
        #[cfg(feature = "log-raw-io")]
        crate::debug::log_req(&buf);
        writer.write_all(&buf).map_err(HttpRequestError::WriteFailed)
    }
}

/// Write the requests for all `endpoints` back to back, without reading
/// anything in between.
pub fn send_pipelined_requests<W: Write>(
    writer: &mut W,
    endpoints: &[&Endpoint],
) -> Result<(), HttpRequestError> {
    for endpoint in endpoints {
        HttpGetRequest::for_endpoint(endpoint).send(writer)?;
        debug!("sent request for {}", endpoint.path());
    }
    writer.flush().map_err(HttpRequestError::WriteFailed)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::BrokenWriter;
    use std::str::FromStr;

    #[test]
    fn serialize() {
        let req = HttpGetRequest::new("example.com", "/index.html?a=b");
        assert_eq!(
            req.serialize(),
            b"GET /index.html?a=b HTTP/1.1\r\n\
              Host: example.com\r\n\
              Connection: keep-alive\r\n\
              Cache-Control: no-cache\r\n\r\n"
        );
    }

    #[test]
    fn pipelined() {
        let a = Endpoint::from_str("http://example.com/a").unwrap();
        let b = Endpoint::from_str("http://example.com/b").unwrap();

        let mut out = Vec::new();
        send_pipelined_requests(&mut out, &[&a, &b]).unwrap();

        let mut expected = HttpGetRequest::new("example.com", "/a").serialize();
        expected.extend_from_slice(&HttpGetRequest::new("example.com", "/b").serialize());
        assert_eq!(out, expected);
    }

    #[test]
    fn host_with_port() {
        // the port is not part of the host header
        let e = Endpoint::from_str("[::1]:8080/").unwrap();
        let req = HttpGetRequest::for_endpoint(&e).serialize();
        assert!(req.starts_with(b"GET / HTTP/1.1\r\nHost: [::1]\r\n"));
    }

    #[test]
    fn write_failed() {
        let e = Endpoint::from_str("example.com").unwrap();
        let r = send_pipelined_requests(&mut BrokenWriter, &[&e]);
        assert!(matches!(r, Err(HttpRequestError::WriteFailed(_))));
    }
}
