/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io;

use thiserror::Error;

use rp_types::net::QueryStrategy;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("resolve failed: {0}")]
    ResolveFailed(io::Error),
    #[error("no address found for query strategy {0}")]
    NoAddressMatched(QueryStrategy),
}

#[derive(Error, Debug)]
pub enum ConnectError {
    #[error("no peer address to connect to")]
    NoAddressAvailable,
    #[error("setup socket failed: {0}")]
    SetupSocketFailed(io::Error),
    #[error("connection refused")]
    ConnectionRefused,
    #[error("unreachable: {0}")]
    Unreachable(io::Error),
    #[error("connect failed: {0}")]
    ConnectFailed(io::Error),
}

impl From<io::Error> for ConnectError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::ConnectionRefused => return ConnectError::ConnectionRefused,
            io::ErrorKind::HostUnreachable | io::ErrorKind::NetworkUnreachable => {
                return ConnectError::Unreachable(e);
            }
            _ => {}
        }
        #[cfg(unix)]
        match e.raw_os_error() {
            Some(libc::ECONNREFUSED) => return ConnectError::ConnectionRefused,
            Some(libc::ENETUNREACH | libc::EHOSTUNREACH) => return ConnectError::Unreachable(e),
            _ => {}
        }
        ConnectError::ConnectFailed(e)
    }
}
