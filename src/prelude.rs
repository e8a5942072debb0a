// Overseer - A fire-and-forget gauge and annotation client for Rust!
//
// Copyright 2026 Overseer Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Export commonly used parts of Overseer for easy glob imports
//!
//! # Example
//!
//! ```
//! use overseer::prelude::*;
//!
//! let (rx, connector) = SpyConnector::new();
//! let registry = Registry::with_connector(connector);
//!
//! registry
//!     .default_instance()
//!     .configure(&ClientOptions::new().with_namespace("app"))
//!     .and_then(|c| c.gauge(&Gauge::new().with_name("queue.depth").with_value(7)))
//!     .unwrap();
//!
//! assert_eq!(1, rx.try_iter().count());
//! ```

pub use crate::client::Client;
pub use crate::config::ClientOptions;
pub use crate::registry::Registry;
pub use crate::sinks::{Connector, MetricSink, SpyConnector};
pub use crate::types::{Annotation, Gauge, MetricResult};
