/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

mod util;
pub use util::AddressFamily;

mod error;
pub use error::{ConnectError, ResolveError};

mod resolve;
pub use resolve::{AddressResolver, StaticResolver, SystemResolver};

mod connect;
pub use connect::{DEFAULT_RECV_BUFFER_SIZE, TcpConnection, tcp_connect_any};
