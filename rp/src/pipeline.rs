/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use rp_types::url::Endpoint;

/// A run of endpoints whose requests share one connection.
pub struct PendingBatch<'a> {
    /// Index of the first endpoint in the whole list.
    pub start: usize,
    pub endpoints: &'a [Endpoint],
}

impl<'a> PendingBatch<'a> {
    /// The endpoint the connection is made to.
    #[inline]
    pub fn server(&self) -> &'a Endpoint {
        &self.endpoints[0]
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.endpoints.len()
    }
}

/// Split the endpoint list into maximal runs of adjacent endpoints with the
/// same host and port.
pub struct PipelineBatches<'a> {
    endpoints: &'a [Endpoint],
    next: usize,
}

impl<'a> PipelineBatches<'a> {
    pub fn new(endpoints: &'a [Endpoint]) -> Self {
        PipelineBatches { endpoints, next: 0 }
    }
}

impl<'a> Iterator for PipelineBatches<'a> {
    type Item = PendingBatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next;
        let first = self.endpoints.get(start)?;
        let len = self.endpoints[start..]
            .iter()
            .take_while(|e| first.is_co_pipelinable(e))
            .count();
        self.next = start + len;
        Some(PendingBatch {
            start,
            endpoints: &self.endpoints[start..self.next],
        })
    }
}
