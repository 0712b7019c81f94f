/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

#[cfg(feature = "log-raw-io")]
mod debug;

pub mod buffer;
pub mod parse;

mod request;
pub use request::{HttpGetRequest, HttpRequestError, send_pipelined_requests};

mod response;
pub use response::{HttpResponseError, HttpResponseHead};

mod body;
pub use body::{
    ChunkedDecodeState, ChunkedDecoder, ContentLengthDecoder, HttpBodyDecoder, HttpBodyType,
};

#[cfg(test)]
mod test_util;
