/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use log::Level;

const HTTP_DEBUG_LOG_LEVEL: Level = Level::Debug;
const HTTP_DEBUG_LOG_TARGET: &str = "rp_http::raw";

#[inline]
pub(crate) fn log_req(req: &[u8]) {
    log::log!(
        target: HTTP_DEBUG_LOG_TARGET,
        HTTP_DEBUG_LOG_LEVEL,
        "> {}",
        String::from_utf8_lossy(req).trim_end()
    );
}

#[inline]
pub(crate) fn log_rsp(rsp: &[u8]) {
    log::log!(
        target: HTTP_DEBUG_LOG_TARGET,
        HTTP_DEBUG_LOG_LEVEL,
        "< {}",
        String::from_utf8_lossy(rsp)
    );
}
