// Overseer - A fire-and-forget gauge and annotation client for Rust!
//
// Copyright 2026 Overseer Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::config::{ClientOptions, Settings};
use crate::payload::{AnnotationPayload, GaugePayload};
use crate::sinks::{Connector, UdpConnector};
use crate::types::{Annotation, Gauge, MetricError, MetricResult};
use log::debug;
use rand::Rng;
use serde::Serialize;
use std::fmt;
use std::panic::RefUnwindSafe;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub(crate) type SharedConnector = Arc<dyn Connector + Send + Sync + RefUnwindSafe>;

/// Generate a unique id for a client that wasn't given one.
///
/// Ids are 13 hex digits, 52 random bits.
fn generate_id() -> String {
    format!("{:013x}", rand::thread_rng().gen::<u64>() >> 12)
}

/// Builder for creating and customizing `Client` instances.
///
/// Instances of the builder should be created by calling the `::builder()`
/// method on the `Client` struct.
///
/// # Example
///
/// ```
/// use overseer::{Client, NopConnector};
///
/// let client = Client::builder()
///     .with_id("reporter-1")
///     .with_connector(NopConnector)
///     .build();
///
/// assert_eq!("reporter-1", client.id());
/// ```
#[must_use]
pub struct ClientBuilder {
    id: Option<String>,
    connector: SharedConnector,
}

impl ClientBuilder {
    // Set the defaults for all fields
    fn new() -> Self {
        ClientBuilder {
            id: None,
            connector: Arc::new(UdpConnector),
        }
    }

    /// Set the id of the client instead of generating one.
    pub fn with_id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the connector used to open a sink for every message.
    ///
    /// By default messages are sent over UDP using the `UdpConnector`.
    pub fn with_connector<C>(mut self, connector: C) -> Self
    where
        C: Connector + Send + Sync + RefUnwindSafe + 'static,
    {
        self.connector = Arc::new(connector);
        self
    }

    pub(crate) fn with_shared_connector(mut self, connector: SharedConnector) -> Self {
        self.connector = connector;
        self
    }

    /// Construct a new `Client` instance with default connection settings.
    pub fn build(self) -> Client {
        Client {
            id: self.id.unwrap_or_else(generate_id),
            settings: RwLock::new(Settings::default()),
            last_message: Mutex::new(String::new()),
            connector: self.connector,
        }
    }
}

/// Client for sending gauges and annotations to a backend over UDP.
///
/// A client holds the host, port, and namespace to send to. Every message is
/// formatted as JSON and sent as a single datagram over a socket opened just
/// for it. Delivery is not confirmed: once a socket has been opened, failures
/// to write to it are ignored.
///
/// # Errors
///
/// * `configure` fails with a `Configuration` error when given a bad port.
///   Nothing from that call is applied.
/// * `gauge`, `annotation`, and `send` fail with a `Connection` error when a
///   socket to the backend cannot be opened (an unresolvable host, for
///   example).
///
/// # Threading
///
/// The client can be shared between threads (it is `Send` and `Sync`).
/// Settings are read once at the start of each send, so a concurrent call to
/// `configure` is seen either entirely or not at all by that send.
///
/// # Example
///
/// ```no_run
/// use overseer::{Annotation, Client, ClientOptions, Gauge, MetricResult};
///
/// fn report(client: &Client) -> MetricResult<()> {
///     client
///         .configure(&ClientOptions::new().with_host("metrics.example.com").with_namespace("web"))?
///         .gauge(&Gauge::new().with_name("requests.active").with_value(12))?
///         .annotation(&Annotation::new().with_title("deploy").with_start_time(1_700_000_000))?;
///     Ok(())
/// }
///
/// report(&Client::new()).unwrap();
/// ```
pub struct Client {
    id: String,
    settings: RwLock<Settings>,
    last_message: Mutex<String>,
    connector: SharedConnector,
}

impl Client {
    /// Create a new client with a generated id that sends over UDP to
    /// `127.0.0.1:8125` until configured otherwise.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client with the given id that sends over UDP.
    pub fn with_id<S: Into<String>>(id: S) -> Self {
        Self::builder().with_id(id).build()
    }

    /// Create a new builder to customize the id or connector of a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Apply connection settings to this client.
    ///
    /// Settings that aren't part of `opts` keep their current values.
    ///
    /// # Failures
    ///
    /// Fails with a `Configuration` error if the port is not numeric, zero,
    /// negative, or greater than 65535. In that case none of the settings
    /// in `opts` are applied.
    pub fn configure(&self, opts: &ClientOptions) -> MetricResult<&Self> {
        let mut settings = self.settings_mut();
        let merged = settings.merge(opts).map_err(|e| e.with_instance(&self.id))?;
        *settings = merged;
        Ok(self)
    }

    /// Send a gauge to the backend.
    ///
    /// The name of the gauge is prefixed with the namespace of this client
    /// and a `.` separator, if a namespace is set.
    pub fn gauge(&self, gauge: &Gauge) -> MetricResult<&Self> {
        let settings = self.snapshot();
        let payload = GaugePayload::new(&settings.namespace, gauge);
        self.transmit(&settings, &payload)
    }

    /// Send an annotation to the backend.
    ///
    /// The namespace of this client is used as the source of the annotation.
    pub fn annotation(&self, annotation: &Annotation) -> MetricResult<&Self> {
        let settings = self.snapshot();
        let payload = AnnotationPayload::new(&settings.namespace, annotation);
        self.transmit(&settings, &payload)
    }

    /// Send an arbitrary payload to the backend as a single JSON message.
    ///
    /// Note that if you simply want to emit gauges or annotations, you don't
    /// need to use this method. It is only useful for messages the backend
    /// understands that this library has no type for.
    ///
    /// # Failures
    ///
    /// Fails with a `Connection` error if no socket could be opened to the
    /// backend, or an `InvalidInput` error if the payload can't be serialized
    /// as JSON. Write failures after the socket is opened are not reported.
    pub fn send<P>(&self, payload: &P) -> MetricResult<&Self>
    where
        P: Serialize + ?Sized,
    {
        let settings = self.snapshot();
        self.transmit(&settings, payload)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn host(&self) -> String {
        self.settings().host.clone()
    }

    pub fn port(&self) -> u16 {
        self.settings().port
    }

    pub fn namespace(&self) -> String {
        self.settings().namespace.clone()
    }

    /// The most recent message sent by this client, empty if nothing has
    /// been sent yet.
    pub fn last_message(&self) -> String {
        self.last_message_mut().clone()
    }

    fn transmit<P>(&self, settings: &Settings, payload: &P) -> MetricResult<&Self>
    where
        P: Serialize + ?Sized,
    {
        let sink = self
            .connector
            .connect(&settings.host, settings.port)
            .map_err(|e| MetricError::from(e).with_instance(&self.id))?;

        let message = serde_json::to_string(payload).map_err(|e| MetricError::from(e).with_instance(&self.id))?;
        *self.last_message_mut() = message.clone();

        match sink.emit(&message) {
            Ok(n) if n < message.len() => debug!(
                target: "overseer",
                "short write from {} to {}:{}: {} of {} bytes",
                self, settings.host, settings.port, n, message.len()
            ),
            Ok(n) => debug!(
                target: "overseer",
                "sent {} bytes from {} to {}:{}",
                n, self, settings.host, settings.port
            ),
            Err(e) => debug!(
                target: "overseer",
                "dropped message from {} to {}:{}: {}",
                self, settings.host, settings.port, e
            ),
        }

        Ok(self)
    }

    fn snapshot(&self) -> Settings {
        self.settings().clone()
    }

    // Settings are replaced whole, so a poisoned lock still holds a
    // consistent value.
    fn settings(&self) -> RwLockReadGuard<'_, Settings> {
        self.settings.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn settings_mut(&self) -> RwLockWriteGuard<'_, Settings> {
        self.settings.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn last_message_mut(&self) -> MutexGuard<'_, String> {
        self.last_message.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Client::[{}]", self.id)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let settings = self.settings();
        write!(
            f,
            "Client {{ id: {:?}, host: {:?}, port: {}, namespace: {:?}, connector: ... }}",
            self.id, settings.host, settings.port, settings.namespace,
        )
    }
}
