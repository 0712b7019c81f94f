/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::net::{SocketAddr, TcpStream};

use log::{debug, warn};
use socket2::{Domain, Protocol, SockAddr, Socket, Type};

use super::{AddressFamily, ConnectError};

/// Used when the system reports no receive buffer size for a socket.
pub const DEFAULT_RECV_BUFFER_SIZE: usize = 64 * 1024;

pub struct TcpConnection {
    pub stream: TcpStream,
    pub peer: SocketAddr,
    /// The receive buffer size reported for this socket only, sizes of
    /// candidates that failed to connect are not taken into account.
    pub recv_buffer_size: usize,
}

fn new_tcp_socket(family: AddressFamily) -> io::Result<Socket> {
    Socket::new(Domain::from(family), Type::STREAM, Some(Protocol::TCP))
}

fn socket_recv_buffer_size(socket: &Socket) -> usize {
    match socket.recv_buffer_size() {
        Ok(0) => {
            warn!("no receive buffer size reported, use {DEFAULT_RECV_BUFFER_SIZE}");
            DEFAULT_RECV_BUFFER_SIZE
        }
        Ok(size) => size,
        Err(e) => {
            warn!("failed to get receive buffer size: {e}, use {DEFAULT_RECV_BUFFER_SIZE}");
            DEFAULT_RECV_BUFFER_SIZE
        }
    }
}

fn tcp_connect(peer: SocketAddr) -> Result<TcpConnection, ConnectError> {
    let socket =
        new_tcp_socket(AddressFamily::from(&peer)).map_err(ConnectError::SetupSocketFailed)?;
    let recv_buffer_size = socket_recv_buffer_size(&socket);
    socket.connect(&SockAddr::from(peer))?;
    Ok(TcpConnection {
        stream: TcpStream::from(socket),
        peer,
        recv_buffer_size,
    })
}

/// Connect to each candidate in order, returning the first connection
/// established. If all of them fail, the error of the last one is returned.
pub fn tcp_connect_any(candidates: &[SocketAddr]) -> Result<TcpConnection, ConnectError> {
    let mut last_err = ConnectError::NoAddressAvailable;
    for peer in candidates {
        match tcp_connect(*peer) {
            Ok(c) => {
                debug!(
                    "connected to {peer}, receive buffer size {}",
                    c.recv_buffer_size
                );
                return Ok(c);
            }
            Err(e) => {
                debug!("connect to {peer} failed: {e}");
                last_err = e;
            }
        }
    }
    Err(last_err)
}
