// Overseer - A fire-and-forget gauge and annotation client for Rust!
//
// Copyright 2026 Overseer Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use serde_json::Value;
use std::error;
use std::fmt;
use std::io;

/// A point-in-time metric value to report to the backend.
///
/// Every field is optional. Fields left unset are sent as empty strings,
/// and the name is prefixed with the namespace of the client sending it.
///
/// # Example
///
/// ```
/// use overseer::Gauge;
///
/// let gauge = Gauge::new()
///     .with_name("cpu")
///     .with_description("CPU usage percentage")
///     .with_value(42);
///
/// assert_eq!(Some("cpu"), gauge.name());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gauge {
    name: Option<String>,
    description: Option<String>,
    value: Option<Value>,
}

impl Gauge {
    pub fn new() -> Gauge {
        Gauge::default()
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the value of the gauge.
    ///
    /// Anything that converts to a JSON value may be used, though numbers
    /// are what the backend expects.
    pub fn with_value<V: Into<Value>>(mut self, value: V) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}

/// An event marker to report to the backend, independent of any gauge.
///
/// Start and end times are passed through as given, typically as Unix
/// timestamps in seconds. The namespace of the client sending the
/// annotation is used as its source.
///
/// # Example
///
/// ```
/// use overseer::Annotation;
///
/// let deploy = Annotation::new()
///     .with_title("deploy")
///     .with_description("v1.2.3 rolled out")
///     .with_start_time(1_700_000_000)
///     .with_end_time(1_700_000_090);
///
/// assert_eq!(Some("deploy"), deploy.title());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Annotation {
    description: Option<String>,
    title: Option<String>,
    start_time: Option<Value>,
    end_time: Option<Value>,
}

impl Annotation {
    pub fn new() -> Annotation {
        Annotation::default()
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_start_time<V: Into<Value>>(mut self, start: V) -> Self {
        self.start_time = Some(start.into());
        self
    }

    pub fn with_end_time<V: Into<Value>>(mut self, end: V) -> Self {
        self.end_time = Some(end.into());
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn start_time(&self) -> Option<&Value> {
        self.start_time.as_ref()
    }

    pub fn end_time(&self) -> Option<&Value> {
        self.end_time.as_ref()
    }
}

/// Potential categories an error from this library falls into.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ErrorKind {
    /// A client was given a setting it cannot use (a bad port).
    Configuration,
    /// A socket to the backend could not be opened.
    Connection,
    /// A payload could not be turned into a message.
    InvalidInput,
}

/// Error generated by this library.
///
/// Errors carry the id of the client that produced them, when known, so
/// that callers juggling several named clients can tell which one failed.
#[derive(Debug)]
pub struct MetricError {
    instance: Option<String>,
    repr: ErrorRepr,
}

#[derive(Debug)]
enum ErrorRepr {
    WithDescription(ErrorKind, &'static str),
    IoError(io::Error),
    JsonError(serde_json::Error),
}

impl MetricError {
    /// Return the kind of the error
    pub fn kind(&self) -> ErrorKind {
        match self.repr {
            ErrorRepr::WithDescription(kind, _) => kind,
            ErrorRepr::IoError(_) => ErrorKind::Connection,
            ErrorRepr::JsonError(_) => ErrorKind::InvalidInput,
        }
    }

    /// Return the id of the client this error came from, if known
    pub fn instance(&self) -> Option<&str> {
        self.instance.as_deref()
    }

    /// Return the OS error number behind a connection failure, if any
    pub fn raw_os_error(&self) -> Option<i32> {
        match self.repr {
            ErrorRepr::IoError(ref err) => err.raw_os_error(),
            _ => None,
        }
    }

    /// Attach the id of the client this error came from.
    pub(crate) fn with_instance<S: Into<String>>(mut self, instance: S) -> Self {
        self.instance = Some(instance.into());
        self
    }
}

impl fmt::Display for MetricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr {
            ErrorRepr::WithDescription(_, desc) => f.write_str(desc),
            ErrorRepr::IoError(ref err) => write!(f, "({}) {}", err.raw_os_error().unwrap_or(0), err),
            ErrorRepr::JsonError(ref err) => write!(f, "{}", err),
        }
    }
}

impl error::Error for MetricError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.repr {
            ErrorRepr::IoError(ref err) => Some(err),
            ErrorRepr::JsonError(ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for MetricError {
    fn from(err: io::Error) -> MetricError {
        MetricError {
            instance: None,
            repr: ErrorRepr::IoError(err),
        }
    }
}

impl From<serde_json::Error> for MetricError {
    fn from(err: serde_json::Error) -> MetricError {
        MetricError {
            instance: None,
            repr: ErrorRepr::JsonError(err),
        }
    }
}

impl From<(ErrorKind, &'static str)> for MetricError {
    fn from((kind, desc): (ErrorKind, &'static str)) -> MetricError {
        MetricError {
            instance: None,
            repr: ErrorRepr::WithDescription(kind, desc),
        }
    }
}

pub type MetricResult<T> = Result<T, MetricError>;

#[cfg(test)]
mod tests {
    use super::{Annotation, ErrorKind, Gauge, MetricError};
    use serde_json::Value;
    use std::error::Error;
    use std::io;

    #[test]
    fn test_gauge_builder_sets_fields() {
        let gauge = Gauge::new().with_name("load").with_description("1m load").with_value(1.5);

        assert_eq!(Some("load"), gauge.name());
        assert_eq!(Some("1m load"), gauge.description());
        assert_eq!(Some(&Value::from(1.5)), gauge.value());
    }

    #[test]
    fn test_gauge_defaults_empty() {
        let gauge = Gauge::new();

        assert_eq!(None, gauge.name());
        assert_eq!(None, gauge.description());
        assert_eq!(None, gauge.value());
    }

    #[test]
    fn test_annotation_builder_sets_fields() {
        let annotation = Annotation::new()
            .with_title("deploy")
            .with_description("api rollout")
            .with_start_time(100)
            .with_end_time("200");

        assert_eq!(Some("deploy"), annotation.title());
        assert_eq!(Some("api rollout"), annotation.description());
        assert_eq!(Some(&Value::from(100)), annotation.start_time());
        assert_eq!(Some(&Value::from("200")), annotation.end_time());
    }

    #[test]
    fn test_metric_error_with_description() {
        let err = MetricError::from((ErrorKind::Configuration, "port out of range")).with_instance("abc");

        assert_eq!(ErrorKind::Configuration, err.kind());
        assert_eq!(Some("abc"), err.instance());
        assert_eq!("port out of range", err.to_string());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_metric_error_from_io_error() {
        let err = MetricError::from(io::Error::from_raw_os_error(111));

        assert_eq!(ErrorKind::Connection, err.kind());
        assert_eq!(None, err.instance());
        assert_eq!(Some(111), err.raw_os_error());
        assert!(err.to_string().starts_with("(111) "));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_metric_error_from_io_error_without_errno() {
        let err = MetricError::from(io::Error::new(io::ErrorKind::InvalidInput, "no addresses"));

        assert_eq!(None, err.raw_os_error());
        assert_eq!("(0) no addresses", err.to_string());
    }
}
