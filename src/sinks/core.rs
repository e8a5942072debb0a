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

/// Trait for destinations that a single formatted message can be written to.
///
/// The message will be the complete JSON document to deliver to the backend,
/// for example:
///
/// ``` text
/// {"gauges":[{"name":"app.cpu","description":"","value":42}]}
/// ```
///
/// Sinks are opened by a `Connector` right before a message is sent and are
/// dropped right after, so implementations don't need to worry about reuse.
pub trait MetricSink {
    /// Send the message using this sink and return the number of bytes
    /// written or an I/O error.
    fn emit(&self, message: &str) -> io::Result<usize>;
}

/// Trait for opening a fresh `MetricSink` to a host and port.
///
/// A `Client` asks its connector for a new sink every time it sends a
/// message. Errors returned from `connect` are reported to the caller as
/// connection errors, while errors from writing to the opened sink are not.
///
/// # Example
///
/// ```
/// use std::io;
/// use overseer::{Client, Connector, MetricSink};
///
/// struct StdoutSink;
///
/// impl MetricSink for StdoutSink {
///     fn emit(&self, message: &str) -> io::Result<usize> {
///         println!("{}", message);
///         Ok(message.len())
///     }
/// }
///
/// struct StdoutConnector;
///
/// impl Connector for StdoutConnector {
///     fn connect(&self, _host: &str, _port: u16) -> io::Result<Box<dyn MetricSink>> {
///         Ok(Box::new(StdoutSink))
///     }
/// }
///
/// let client = Client::builder().with_connector(StdoutConnector).build();
/// ```
pub trait Connector {
    fn connect(&self, host: &str, port: u16) -> io::Result<Box<dyn MetricSink>>;
}

/// Implementation of a `MetricSink` that discards all messages.
///
/// Useful for disabling metric collection or unit tests.
#[derive(Debug, Clone)]
pub struct NopMetricSink;

impl MetricSink for NopMetricSink {
    fn emit(&self, _message: &str) -> io::Result<usize> {
        Ok(0)
    }
}

/// Implementation of a `Connector` that always opens a `NopMetricSink`.
///
/// Clients using this connector never touch the network but still format
/// every message and record it as their last message.
#[derive(Debug, Clone)]
pub struct NopConnector;

impl Connector for NopConnector {
    fn connect(&self, _host: &str, _port: u16) -> io::Result<Box<dyn MetricSink>> {
        Ok(Box::new(NopMetricSink))
    }
}
