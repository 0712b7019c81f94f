/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::net::SocketAddr;

/// Which address families a host name may resolve to.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum QueryStrategy {
    Ipv4Only,
    Ipv6Only,
    #[default]
    Any,
}

impl QueryStrategy {
    pub fn matches(self, addr: &SocketAddr) -> bool {
        match self {
            QueryStrategy::Ipv4Only => addr.is_ipv4(),
            QueryStrategy::Ipv6Only => addr.is_ipv6(),
            QueryStrategy::Any => true,
        }
    }

    pub fn from_flags(ipv4_only: bool, ipv6_only: bool) -> Option<Self> {
        match (ipv4_only, ipv6_only) {
            (true, true) => None,
            (true, false) => Some(QueryStrategy::Ipv4Only),
            (false, true) => Some(QueryStrategy::Ipv6Only),
            (false, false) => Some(QueryStrategy::Any),
        }
    }
}

impl fmt::Display for QueryStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryStrategy::Ipv4Only => f.write_str("ipv4_only"),
            QueryStrategy::Ipv6Only => f.write_str("ipv6_only"),
            QueryStrategy::Any => f.write_str("any"),
        }
    }
}
