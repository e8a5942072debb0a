// Overseer - A fire-and-forget gauge and annotation client for Rust!
//
// Copyright 2026 Overseer Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod core;
mod spy;
mod udp;

pub use crate::sinks::core::{Connector, MetricSink, NopConnector, NopMetricSink};
pub use crate::sinks::spy::{SpyConnector, SpyMessage, SpyMetricSink};
pub use crate::sinks::udp::{UdpConnector, UdpMetricSink};
