/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

mod error;
pub use error::{UrlDecodeError, UrlParseError};

mod decode;
pub use decode::decode_url;

mod endpoint;
pub use endpoint::Endpoint;
