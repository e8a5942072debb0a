use overseer::{ClientOptions, Gauge, NopConnector, Registry, SpyConnector, DEFAULT_INSTANCE};
use std::sync::Arc;
use std::thread;

mod utils;
use utils::{run_shared_threaded_test, NUM_ITERATIONS, NUM_THREADS};

#[test]
fn test_registry_instance_shared_across_threads() {
    let registry = Arc::new(Registry::with_connector(NopConnector));

    let threads: Vec<_> = (0..8)
        .map(|_| {
            let local = Arc::clone(&registry);
            thread::spawn(move || local.instance("shared"))
        })
        .collect();

    let clients: Vec<_> = threads.into_iter().map(|t| t.join().unwrap()).collect();
    for client in &clients[1..] {
        assert!(Arc::ptr_eq(&clients[0], client));
    }
    assert_eq!(1, registry.len());
}

#[test]
fn test_registry_configure_once_use_everywhere() {
    let (rx, connector) = SpyConnector::new();
    let registry = Registry::with_connector(connector);
    registry
        .default_instance()
        .configure(&ClientOptions::new().with_port(9125).with_namespace("svc"))
        .unwrap();

    registry
        .instance(DEFAULT_INSTANCE)
        .gauge(&Gauge::new().with_name("up").with_value(1))
        .unwrap();

    let sent = rx.recv().unwrap();
    assert_eq!(9125, sent.port);
    assert_eq!(
        r#"{"gauges":[{"name":"svc.up","description":"","value":1}]}"#.as_bytes(),
        sent.bytes.as_slice()
    );
}

#[test]
fn test_registry_reset_gives_fresh_defaults() {
    let registry = Registry::with_connector(NopConnector);
    registry
        .instance("x")
        .configure(&ClientOptions::new().with_namespace("old"))
        .unwrap();

    registry.reset("x");

    assert_eq!("", registry.instance("x").namespace());
}

#[test]
fn test_registry_clear_gives_fresh_clients() {
    let registry = Registry::with_connector(NopConnector);
    let before = registry.instance("x");
    registry.clear();
    let after = registry.instance("x");

    assert!(!Arc::ptr_eq(&before, &after));
    assert_ne!(before.id(), after.id());
}

#[test]
fn test_registry_instance_single_threaded() {
    let registry = Registry::with_connector(NopConnector);
    run_shared_threaded_test(registry.instance("threads"), 1, 1);
}

#[ignore]
#[test]
fn test_registry_instance_many_threaded() {
    let registry = Registry::with_connector(NopConnector);
    run_shared_threaded_test(registry.instance("threads"), NUM_THREADS, NUM_ITERATIONS);
}
