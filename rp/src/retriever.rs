/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use log::{debug, error, info};

use rp_http::buffer::ReceiveBuffer;
use rp_http::{HttpBodyDecoder, HttpResponseHead, send_pipelined_requests};
use rp_socket::{AddressFamily, AddressResolver, tcp_connect_any};
use rp_types::net::QueryStrategy;
use rp_types::url::Endpoint;

use crate::RetrieveError;
use crate::output::OutputDest;
use crate::pipeline::{PendingBatch, PipelineBatches};

const RAW_ECHO_MAX_SIZE: usize = 1024;

#[derive(Debug, Default)]
pub struct RetrieveSummary {
    pub total_pages: usize,
    pub retrieved_pages: usize,
    pub body_bytes: u64,
    pub connections: usize,
    pub failed_batches: usize,
}

impl RetrieveSummary {
    pub fn is_success(&self) -> bool {
        self.failed_batches == 0 && self.retrieved_pages == self.total_pages
    }
}

/// Fetches pages batch by batch, one connection at a time.
///
/// The receive buffer is kept across connections and grows to the largest
/// receive buffer size reported for any of their sockets.
pub struct PageRetriever<R> {
    resolver: R,
    strategy: QueryStrategy,
    recv_buf: Option<ReceiveBuffer>,
}

impl<R: AddressResolver> PageRetriever<R> {
    pub fn new(resolver: R, strategy: QueryStrategy) -> Self {
        PageRetriever {
            resolver,
            strategy,
            recv_buf: None,
        }
    }

    pub fn recv_buffer_capacity(&self) -> usize {
        self.recv_buf.as_ref().map(|b| b.capacity()).unwrap_or_default()
    }

    /// Retrieve all pages, the i-th body goes to the i-th output, or to
    /// stdout if there are fewer outputs than endpoints.
    pub fn retrieve_all(
        &mut self,
        endpoints: &[Endpoint],
        outputs: &[OutputDest],
    ) -> RetrieveSummary {
        let mut summary = RetrieveSummary {
            total_pages: endpoints.len(),
            ..Default::default()
        };

        for batch in PipelineBatches::new(endpoints) {
            let server = batch.server();
            if let Err(e) = self.retrieve_batch(&batch, outputs, &mut summary) {
                summary.failed_batches += 1;
                error!("{}:{}: {e}", server.host(), server.port());
                if let Some(raw) = e.raw_bytes() {
                    let len = raw.len().min(RAW_ECHO_MAX_SIZE);
                    info!("received: {}", raw[..len].escape_ascii());
                }
            }
        }
        summary
    }

    fn recv_buffer(&mut self, size: usize) -> &mut ReceiveBuffer {
        let buf = self
            .recv_buf
            .get_or_insert_with(|| ReceiveBuffer::with_capacity(size));
        if buf.grow_to(size) {
            debug!("receive buffer grown to {size}");
        }
        buf.clear();
        buf
    }

    fn retrieve_batch(
        &mut self,
        batch: &PendingBatch<'_>,
        outputs: &[OutputDest],
        summary: &mut RetrieveSummary,
    ) -> Result<(), RetrieveError> {
        let server = batch.server();
        info!("Server {}", server.host());
        debug!("{} requests to send on one connection", batch.depth());

        let addrs = self
            .resolver
            .resolve(server.resolve_host(), server.port(), self.strategy)?;
        let conn = tcp_connect_any(&addrs)?;
        summary.connections += 1;
        info!("{} {}", AddressFamily::from(&conn.peer), conn.peer);

        let mut stream = conn.stream;
        let buf = self.recv_buffer(conn.recv_buffer_size);

        for (i, endpoint) in batch.endpoints.iter().enumerate() {
            if i == 0 {
                info!("Path {}", endpoint.path());
            } else {
                info!("Path {} (pipelined)", endpoint.path());
            }
        }
        let requests: Vec<&Endpoint> = batch.endpoints.iter().collect();
        send_pipelined_requests(&mut stream, &requests)?;

        for (i, endpoint) in batch.endpoints.iter().enumerate() {
            let head = HttpResponseHead::recv(&mut stream, buf)?;

            let dest = outputs.get(batch.start + i).cloned().unwrap_or_default();
            if let OutputDest::File(_) = dest {
                info!("Output {dest}");
            }
            let mut sink = dest
                .open()
                .map_err(|e| RetrieveError::OutputOpenFailed(dest.clone(), e))?;

            let mut decoder = HttpBodyDecoder::new(head.body_type);
            let size = decoder.decode(&mut stream, buf, &mut sink)?;
            sink.finish().map_err(|e| RetrieveError::OutputCloseFailed(dest, e))?;

            debug!("retrieved {} with {size} body bytes", endpoint.path());
            summary.retrieved_pages += 1;
            summary.body_bytes += size;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::{SocketAddr, TcpListener};
    use std::str::FromStr;
    use std::thread;

    use rp_socket::SystemResolver;

    fn serve_once(response: &'static [u8]) -> (SocketAddr, thread::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut req = [0u8; 1024];
            let _ = stream.read(&mut req).unwrap();
            stream.write_all(response).unwrap();
        });
        (addr, handle)
    }

    #[test]
    fn retrieve_to_file() {
        let (addr, handle) = serve_once(b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\nok");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out");

        let mut retriever = PageRetriever::new(SystemResolver::default(), QueryStrategy::Any);
        assert_eq!(retriever.recv_buffer_capacity(), 0);

        let endpoints = vec![Endpoint::from_str(&format!("http://{addr}/")).unwrap()];
        let summary = retriever.retrieve_all(&endpoints, &[OutputDest::File(path.clone())]);
        handle.join().unwrap();

        assert!(summary.is_success());
        assert_eq!(summary.connections, 1);
        assert_eq!(summary.body_bytes, 2);
        assert!(retriever.recv_buffer_capacity() > 0);
        assert_eq!(std::fs::read(&path).unwrap(), b"ok");
    }

    #[test]
    fn summary() {
        let mut s = RetrieveSummary {
            total_pages: 2,
            retrieved_pages: 2,
            ..Default::default()
        };
        assert!(s.is_success());
        s.retrieved_pages = 1;
        assert!(!s.is_success());
    }
}
