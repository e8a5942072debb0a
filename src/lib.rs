// Overseer - A fire-and-forget gauge and annotation client for Rust!
//
// Copyright 2026 Overseer Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A fire-and-forget gauge and annotation client for Rust!
//!
//! Overseer sends gauges and annotations as small JSON documents over UDP to
//! a collector that forwards them to a Librato-style metrics service.
//!
//! ## Features
//!
//! * Gauges and annotations formatted as JSON, one message per datagram.
//! * Named, shared client instances via a `Registry`.
//! * Per-client host, port, and namespace settings that can be changed at
//!   any time.
//! * Support for alternate transports via the `Connector` and `MetricSink`
//!   traits.
//!
//! ## Install
//!
//! To make use of `overseer` in your project, add it as a dependency in your
//! `Cargo.toml` file.
//!
//! ```toml
//! [dependencies]
//! overseer = "x.y.z"
//! ```
//!
//! ## Usage
//!
//! ### Simple Use
//!
//! Create a client, point it at a collector, and send a gauge. Sending is
//! fire-and-forget: an error is only returned if a socket to the collector
//! cannot be opened at all.
//!
//! ```rust,no_run
//! use overseer::{Client, ClientOptions, Gauge};
//!
//! let client = Client::new();
//! client
//!     .configure(&ClientOptions::new().with_host("metrics.example.com").with_namespace("web"))
//!     .unwrap();
//!
//! // Sent as {"gauges":[{"name":"web.requests.active","description":"","value":12}]}
//! client.gauge(&Gauge::new().with_name("requests.active").with_value(12)).unwrap();
//! ```
//!
//! ### Shared Instances
//!
//! Most applications want a single configured client reachable from many
//! places. A `Registry` hands out the same client for the same name, creating
//! it with default settings the first time.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::thread;
//! use overseer::{Annotation, ClientOptions, Registry};
//!
//! let registry = Arc::new(Registry::new());
//! registry
//!     .default_instance()
//!     .configure(&ClientOptions::new().with_port(9125).with_namespace("worker"))
//!     .unwrap();
//!
//! let shared = Arc::clone(&registry);
//! let handle = thread::spawn(move || {
//!     let client = shared.default_instance();
//!     client.annotation(&Annotation::new().with_title("job finished")).unwrap();
//! });
//!
//! handle.join().unwrap();
//! ```
//!
//! ### Custom Connectors
//!
//! Every message is sent through a sink opened by the client's `Connector`.
//! The default `UdpConnector` opens a new UDP socket for each message. Tests
//! can use the `SpyConnector` to capture what would have been sent.
//!
//! ```rust
//! use overseer::{Annotation, Client, SpyConnector};
//!
//! let (rx, connector) = SpyConnector::new();
//! let client = Client::builder().with_connector(connector).build();
//!
//! client.annotation(&Annotation::new().with_title("deploy").with_start_time(1_700_000_000)).unwrap();
//!
//! let sent = rx.recv().unwrap();
//! assert_eq!("127.0.0.1", sent.host);
//! assert_eq!(
//!     r#"{"annotations":[{"description":"","title":"deploy","start_time":1700000000,"end_time":"","source":""}]}"#,
//!     String::from_utf8(sent.bytes).unwrap(),
//! );
//! ```

#![forbid(unsafe_code)]

pub const DEFAULT_PORT: u16 = 8125;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_INSTANCE: &str = "default";

pub use self::client::{Client, ClientBuilder};

pub use self::config::{ClientOptions, PortValue};

pub use self::registry::Registry;

pub use self::sinks::{
    Connector, MetricSink, NopConnector, NopMetricSink, SpyConnector, SpyMessage, SpyMetricSink, UdpConnector,
    UdpMetricSink,
};

pub use self::types::{Annotation, ErrorKind, Gauge, MetricError, MetricResult};

mod client;
mod config;
mod payload;
pub mod prelude;
mod registry;
mod sinks;
mod types;
