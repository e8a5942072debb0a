// Overseer - A fire-and-forget gauge and annotation client for Rust!
//
// Copyright 2026 Overseer Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::types::{ErrorKind, MetricError, MetricResult};
use crate::{DEFAULT_HOST, DEFAULT_PORT};

/// Port setting as given by the caller, before validation.
///
/// Ports are accepted loosely and coerced to an integer: floats are
/// truncated toward zero and strings are read up to their first non-digit
/// (`"80.5"` is 80, `"8125abc"` is 8125). The result is checked to be within
/// `1..=65535` when the options are applied to a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortValue {
    Number(i64),
    Text(String),
}

impl PortValue {
    /// Coerce this value to a usable port number.
    ///
    /// # Failures
    ///
    /// Returns a `Configuration` error if the value is not numeric, is zero
    /// or negative, or is greater than 65535.
    pub fn to_port(&self) -> MetricResult<u16> {
        let n = match self {
            PortValue::Number(n) => Some(*n),
            PortValue::Text(s) => leading_int(s),
        };

        n.filter(|n| *n > 0)
            .and_then(|n| u16::try_from(n).ok())
            .ok_or_else(|| MetricError::from((ErrorKind::Configuration, "port out of range")))
    }
}

// Optional sign followed by decimal digits at the start of the trimmed
// string. Saturates instead of overflowing.
fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: Vec<i64> = rest
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'))
        .collect();

    if digits.is_empty() {
        return None;
    }

    let n = digits.iter().fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(*d));
    Some(if negative { -n } else { n })
}

macro_rules! port_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for PortValue {
                fn from(v: $t) -> Self {
                    PortValue::Number(i64::from(v))
                }
            }
        )*
    };
}

port_from_int!(u8, u16, u32, i8, i16, i32, i64);

impl From<u64> for PortValue {
    fn from(v: u64) -> Self {
        PortValue::Number(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<usize> for PortValue {
    fn from(v: usize) -> Self {
        PortValue::Number(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

macro_rules! port_from_float {
    ($($t:ty),*) => {
        $(
            impl From<$t> for PortValue {
                // `as` truncates toward zero and saturates, NaN becomes 0
                fn from(v: $t) -> Self {
                    PortValue::Number(v as i64)
                }
            }
        )*
    };
}

port_from_float!(f32, f64);

impl From<&str> for PortValue {
    fn from(v: &str) -> Self {
        PortValue::Text(v.to_string())
    }
}

impl From<String> for PortValue {
    fn from(v: String) -> Self {
        PortValue::Text(v)
    }
}

/// Connection settings to apply to a `Client`.
///
/// Only the settings that are set are changed when the options are applied,
/// everything else keeps its current value.
///
/// # Example
///
/// ```
/// use overseer::{Client, ClientOptions};
///
/// let client = Client::new();
/// let opts = ClientOptions::new()
///     .with_host("10.0.0.1")
///     .with_port(9999)
///     .with_namespace("app");
///
/// client.configure(&opts).unwrap();
///
/// assert_eq!("10.0.0.1", client.host());
/// assert_eq!(9999, client.port());
/// assert_eq!("app", client.namespace());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct ClientOptions {
    host: Option<String>,
    port: Option<PortValue>,
    namespace: Option<String>,
}

impl ClientOptions {
    pub fn new() -> Self {
        ClientOptions::default()
    }

    pub fn with_host<S: Into<String>>(mut self, host: S) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the port to send to. See `PortValue` for accepted inputs.
    pub fn with_port<P: Into<PortValue>>(mut self, port: P) -> Self {
        self.port = Some(port.into());
        self
    }

    /// Set the namespace used to prefix gauge names and as the source
    /// of annotations.
    pub fn with_namespace<S: Into<String>>(mut self, namespace: S) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn port(&self) -> Option<&PortValue> {
        self.port.as_ref()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }
}

/// Current settings of a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) namespace: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            namespace: String::new(),
        }
    }
}

impl Settings {
    /// Build the settings that result from applying `opts` to these ones.
    ///
    /// Validation happens before anything is copied so a failure leaves
    /// no partially applied state behind.
    pub(crate) fn merge(&self, opts: &ClientOptions) -> MetricResult<Settings> {
        let port = match opts.port() {
            Some(p) => p.to_port()?,
            None => self.port,
        };

        Ok(Settings {
            host: opts.host().unwrap_or(self.host.as_str()).to_string(),
            port,
            namespace: opts.namespace().unwrap_or(self.namespace.as_str()).to_string(),
        })
    }
}
