// Overseer - A fire-and-forget gauge and annotation client for Rust!
//
// Copyright 2026 Overseer Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Wire shapes of the messages sent to the backend.
//!
//! Each message is one JSON object holding an array with a single entry.
//! Field order matters to the backend and follows declaration order here.

use crate::types::{Annotation, Gauge};
use serde::{Serialize, Serializer};

/// Serializes the wrapped value, or an empty string when there is none.
#[derive(Debug)]
struct OrEmpty<'a, T: ?Sized>(Option<&'a T>);

impl<'a, T> Serialize for OrEmpty<'a, T>
where
    T: Serialize + ?Sized,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Some(v) => v.serialize(serializer),
            None => serializer.serialize_str(""),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GaugePayload<'a> {
    gauges: [GaugeEntry<'a>; 1],
}

#[derive(Debug, Serialize)]
struct GaugeEntry<'a> {
    name: String,
    description: OrEmpty<'a, str>,
    value: OrEmpty<'a, serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnnotationPayload<'a> {
    annotations: [AnnotationEntry<'a>; 1],
}

#[derive(Debug, Serialize)]
struct AnnotationEntry<'a> {
    description: OrEmpty<'a, str>,
    title: OrEmpty<'a, str>,
    start_time: OrEmpty<'a, serde_json::Value>,
    end_time: OrEmpty<'a, serde_json::Value>,
    source: &'a str,
}

// Namespaces are joined to names verbatim, an existing trailing dot
// on the namespace is not collapsed.
fn formatted_prefix(namespace: &str) -> String {
    if namespace.is_empty() {
        String::new()
    } else {
        format!("{}.", namespace)
    }
}

impl<'a> GaugePayload<'a> {
    pub(crate) fn new(namespace: &str, gauge: &'a Gauge) -> Self {
        let name = gauge
            .name()
            .map(|n| format!("{}{}", formatted_prefix(namespace), n))
            .unwrap_or_default();

        GaugePayload {
            gauges: [GaugeEntry {
                name,
                description: OrEmpty(gauge.description()),
                value: OrEmpty(gauge.value()),
            }],
        }
    }
}

impl<'a> AnnotationPayload<'a> {
    pub(crate) fn new(namespace: &'a str, annotation: &'a Annotation) -> Self {
        AnnotationPayload {
            annotations: [AnnotationEntry {
                description: OrEmpty(annotation.description()),
                title: OrEmpty(annotation.title()),
                start_time: OrEmpty(annotation.start_time()),
                end_time: OrEmpty(annotation.end_time()),
                source: namespace,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AnnotationPayload, GaugePayload};
    use crate::types::{Annotation, Gauge};

    fn to_json<T: serde::Serialize>(payload: &T) -> String {
        serde_json::to_string(payload).unwrap()
    }

    #[test]
    fn test_gauge_payload_with_namespace() {
        let gauge = Gauge::new().with_name("cpu").with_value(42);
        let payload = GaugePayload::new("app", &gauge);

        assert_eq!(
            r#"{"gauges":[{"name":"app.cpu","description":"","value":42}]}"#,
            to_json(&payload)
        );
    }

    #[test]
    fn test_gauge_payload_without_namespace() {
        let gauge = Gauge::new().with_name("cpu").with_description("usage").with_value(0.75);
        let payload = GaugePayload::new("", &gauge);

        assert_eq!(
            r#"{"gauges":[{"name":"cpu","description":"usage","value":0.75}]}"#,
            to_json(&payload)
        );
    }

    #[test]
    fn test_gauge_payload_all_missing() {
        let gauge = Gauge::new();
        let payload = GaugePayload::new("app", &gauge);

        assert_eq!(
            r#"{"gauges":[{"name":"","description":"","value":""}]}"#,
            to_json(&payload)
        );
    }

    #[test]
    fn test_gauge_payload_string_value_passed_through() {
        let gauge = Gauge::new().with_name("build").with_value("1.2.3");
        let payload = GaugePayload::new("", &gauge);

        assert_eq!(
            r#"{"gauges":[{"name":"build","description":"","value":"1.2.3"}]}"#,
            to_json(&payload)
        );
    }

    #[test]
    fn test_gauge_payload_namespace_with_trailing_dot() {
        let gauge = Gauge::new().with_name("cpu").with_value(1);
        let payload = GaugePayload::new("app.", &gauge);

        assert_eq!(
            r#"{"gauges":[{"name":"app..cpu","description":"","value":1}]}"#,
            to_json(&payload)
        );
    }

    #[test]
    fn test_annotation_payload_title_only() {
        let annotation = Annotation::new().with_title("deploy");
        let payload = AnnotationPayload::new("", &annotation);

        assert_eq!(
            r#"{"annotations":[{"description":"","title":"deploy","start_time":"","end_time":"","source":""}]}"#,
            to_json(&payload)
        );
    }

    #[test]
    fn test_annotation_payload_full() {
        let annotation = Annotation::new()
            .with_description("api rollout")
            .with_title("deploy")
            .with_start_time(1_700_000_000)
            .with_end_time(1_700_000_090);
        let payload = AnnotationPayload::new("app", &annotation);

        assert_eq!(
            concat!(
                r#"{"annotations":[{"description":"api rollout","title":"deploy","#,
                r#""start_time":1700000000,"end_time":1700000090,"source":"app"}]}"#
            ),
            to_json(&payload)
        );
    }

    #[test]
    fn test_annotation_payload_source_is_raw_namespace() {
        let annotation = Annotation::new();
        let payload = AnnotationPayload::new("web.frontend", &annotation);

        assert_eq!(
            r#"{"annotations":[{"description":"","title":"","start_time":"","end_time":"","source":"web.frontend"}]}"#,
            to_json(&payload)
        );
    }
}
