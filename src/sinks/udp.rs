// Overseer - A fire-and-forget gauge and annotation client for Rust!
//
// Copyright 2026 Overseer Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};

use crate::sinks::core::{Connector, MetricSink};

/// Attempt to convert anything implementing the `ToSocketAddrs` trait
/// into a concrete `SocketAddr` instance, returning an `InvalidInput`
/// error if the address could not be resolved to anything.
fn get_addr<A: ToSocketAddrs>(addr: A) -> io::Result<SocketAddr> {
    match addr.to_socket_addrs()?.next() {
        Some(addr) => Ok(addr),
        None => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "No socket addresses yielded",
        )),
    }
}

/// Local address to bind an ephemeral socket to for sending to `addr`.
fn local_addr_for(addr: &SocketAddr) -> SocketAddr {
    match addr {
        SocketAddr::V4(_) => SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)),
        SocketAddr::V6(_) => SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0)),
    }
}

/// Implementation of a `MetricSink` that emits messages over UDP.
///
/// The sink owns a non-blocking UDP socket connected to the address of the
/// backend. Each call to `.emit()` sends a single datagram in the thread of
/// the caller. The socket is closed when the sink is dropped.
#[derive(Debug)]
pub struct UdpMetricSink {
    addr: SocketAddr,
    socket: UdpSocket,
}

impl UdpMetricSink {
    /// Open a new socket connected to the given address.
    ///
    /// An ephemeral local port of the same address family as the resolved
    /// destination is bound and the socket is put in non-blocking mode, so
    /// that sending never waits on the network.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use overseer::{MetricSink, UdpMetricSink, DEFAULT_PORT};
    ///
    /// let sink = UdpMetricSink::connect(("metrics.example.com", DEFAULT_PORT)).unwrap();
    /// sink.emit(r#"{"gauges":[{"name":"cpu","description":"","value":42}]}"#).unwrap();
    /// ```
    ///
    /// # Failures
    ///
    /// This method may fail if:
    ///
    /// * It is unable to resolve the hostname of the metric server.
    /// * The host address is otherwise unable to be parsed.
    /// * A local socket could not be bound or connected.
    pub fn connect<A>(to_addr: A) -> io::Result<UdpMetricSink>
    where
        A: ToSocketAddrs,
    {
        let addr = get_addr(to_addr)?;
        let socket = UdpSocket::bind(local_addr_for(&addr))?;
        socket.set_nonblocking(true)?;
        socket.connect(addr)?;
        Ok(UdpMetricSink { addr, socket })
    }

    /// Address of the backend this sink sends to.
    pub fn peer_addr(&self) -> SocketAddr {
        self.addr
    }
}

impl MetricSink for UdpMetricSink {
    fn emit(&self, message: &str) -> io::Result<usize> {
        self.socket.send(message.as_bytes())
    }
}

/// Implementation of a `Connector` that opens a `UdpMetricSink` for every
/// message.
///
/// This is the connector used by clients unless another one is given. No
/// socket is ever reused between messages.
#[derive(Debug, Clone, Default)]
pub struct UdpConnector;

impl Connector for UdpConnector {
    fn connect(&self, host: &str, port: u16) -> io::Result<Box<dyn MetricSink>> {
        Ok(Box::new(UdpMetricSink::connect((host, port))?))
    }
}
