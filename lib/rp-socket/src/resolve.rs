/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr, ToSocketAddrs};

use log::debug;

use rp_types::net::QueryStrategy;

use super::ResolveError;

pub trait AddressResolver {
    /// Resolve `host` to peer addresses, kept in the order the resolver
    /// returned them.
    fn resolve(
        &self,
        host: &str,
        port: u16,
        strategy: QueryStrategy,
    ) -> Result<Vec<SocketAddr>, ResolveError>;
}

fn filter_addrs<I>(addrs: I, strategy: QueryStrategy) -> Result<Vec<SocketAddr>, ResolveError>
where
    I: Iterator<Item = SocketAddr>,
{
    let addrs: Vec<SocketAddr> = addrs.filter(|a| strategy.matches(a)).collect();
    if addrs.is_empty() {
        Err(ResolveError::NoAddressMatched(strategy))
    } else {
        Ok(addrs)
    }
}

/// The resolver of the operating system.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemResolver {}

impl AddressResolver for SystemResolver {
    fn resolve(
        &self,
        host: &str,
        port: u16,
        strategy: QueryStrategy,
    ) -> Result<Vec<SocketAddr>, ResolveError> {
        let addrs = (host, port)
            .to_socket_addrs()
            .map_err(ResolveError::ResolveFailed)?;
        let addrs = filter_addrs(addrs, strategy)?;
        debug!("{host}:{port} resolved to {addrs:?}");
        Ok(addrs)
    }
}

/// Fixed addresses for some host and port pairs, all other queries are
/// passed to the fallback resolver.
#[derive(Debug, Default)]
pub struct StaticResolver<R> {
    records: HashMap<(String, u16), IpAddr>,
    fallback: R,
}

impl<R: AddressResolver> StaticResolver<R> {
    pub fn new(fallback: R) -> Self {
        StaticResolver {
            records: HashMap::new(),
            fallback,
        }
    }

    pub fn insert(&mut self, host: &str, port: u16, ip: IpAddr) {
        self.records.insert((host.to_string(), port), ip);
    }
}

impl<R: AddressResolver> AddressResolver for StaticResolver<R> {
    fn resolve(
        &self,
        host: &str,
        port: u16,
        strategy: QueryStrategy,
    ) -> Result<Vec<SocketAddr>, ResolveError> {
        match self.records.get(&(host.to_string(), port)) {
            Some(ip) => {
                debug!("{host}:{port} resolved to static address {ip}");
                filter_addrs(std::iter::once(SocketAddr::new(*ip, port)), strategy)
            }
            None => self.fallback.resolve(host, port, strategy),
        }
    }
}
