// Overseer - A fire-and-forget gauge and annotation client for Rust!
//
// Copyright 2026 Overseer Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::sinks::core::{Connector, MetricSink};
use crossbeam_channel::{bounded, unbounded, Receiver, Sender, TrySendError};
use std::io::{self, ErrorKind};

/// A message captured by a `SpyMetricSink` along with where it was headed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpyMessage {
    pub host: String,
    pub port: u16,
    pub bytes: Vec<u8>,
}

/// `MetricSink` implementation that writes all messages to the `Sender` half
/// of a channel while callers are given ownership of the `Receiver` half.
///
/// This is not a general purpose sink, rather it's a sink meant for verifying
/// messages written during the course of integration tests.
#[derive(Debug)]
pub struct SpyMetricSink {
    host: String,
    port: u16,
    sender: Sender<SpyMessage>,
}

impl MetricSink for SpyMetricSink {
    fn emit(&self, message: &str) -> io::Result<usize> {
        let msg = SpyMessage {
            host: self.host.clone(),
            port: self.port,
            bytes: message.as_bytes().to_vec(),
        };

        match self.sender.try_send(msg) {
            Err(TrySendError::Disconnected(_)) => Err(io::Error::new(ErrorKind::Other, "channel disconnected")),
            Err(TrySendError::Full(_)) => Err(io::Error::new(ErrorKind::Other, "channel full")),
            Ok(_) => Ok(message.len()),
        }
    }
}

/// `Connector` implementation that opens a `SpyMetricSink` for every message.
///
/// Every sink it opens shares the same channel. By default, the channel is
/// unbounded. The channel size can be limited using the `with_capacity` method,
/// in which case messages sent while the channel is full are dropped the same
/// way a failed datagram write is.
///
/// # Example
///
/// ```
/// use overseer::{Client, Gauge, SpyConnector};
///
/// let (rx, connector) = SpyConnector::new();
/// let client = Client::builder().with_connector(connector).build();
///
/// client.gauge(&Gauge::new().with_name("cpu").with_value(42)).unwrap();
///
/// let sent = rx.recv().unwrap();
/// assert_eq!(r#"{"gauges":[{"name":"cpu","description":"","value":42}]}"#.as_bytes(), sent.bytes.as_slice());
/// ```
#[derive(Debug, Clone)]
pub struct SpyConnector {
    sender: Sender<SpyMessage>,
}

impl SpyConnector {
    pub fn new() -> (Receiver<SpyMessage>, Self) {
        Self::with_queue_capacity(None)
    }

    pub fn with_capacity(queue: usize) -> (Receiver<SpyMessage>, Self) {
        Self::with_queue_capacity(Some(queue))
    }

    fn with_queue_capacity(queue: Option<usize>) -> (Receiver<SpyMessage>, Self) {
        let (tx, rx) = match queue {
            Some(sz) => bounded(sz),
            None => unbounded(),
        };
        (rx, SpyConnector { sender: tx })
    }
}

impl Connector for SpyConnector {
    fn connect(&self, host: &str, port: u16) -> io::Result<Box<dyn MetricSink>> {
        Ok(Box::new(SpyMetricSink {
            host: host.to_string(),
            port,
            sender: self.sender.clone(),
        }))
    }
}

#[cfg(test)]
mod test {
    use super::{Connector, SpyConnector};

    #[test]
    fn test_spy_connector_captures_message() {
        let (rx, connector) = SpyConnector::new();
        let sink = connector.connect("10.0.0.1", 9999).unwrap();
        sink.emit("{}").unwrap();

        let sent = rx.recv().unwrap();
        assert_eq!("10.0.0.1", sent.host);
        assert_eq!(9999, sent.port);
        assert_eq!("{}".as_bytes(), sent.bytes.as_slice());
    }

    #[test]
    fn test_spy_connector_full_channel() {
        let (_rx, connector) = SpyConnector::with_capacity(1);
        let sink = connector.connect("127.0.0.1", 8125).unwrap();

        assert!(sink.emit("{}").is_ok());
        assert!(sink.emit("{}").is_err());
    }

    #[test]
    fn test_spy_connector_disconnected() {
        let (rx, connector) = SpyConnector::new();
        drop(rx);
        let sink = connector.connect("127.0.0.1", 8125).unwrap();

        assert!(sink.emit("{}").is_err());
    }
}
