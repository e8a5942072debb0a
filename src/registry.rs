// Overseer - A fire-and-forget gauge and annotation client for Rust!
//
// Copyright 2026 Overseer Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::client::{Client, SharedConnector};
use crate::sinks::{Connector, UdpConnector};
use crate::DEFAULT_INSTANCE;
use log::debug;
use std::collections::HashMap;
use std::fmt;
use std::panic::RefUnwindSafe;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Name-keyed cache of `Client` instances.
///
/// Asking a registry for a name returns the same client every time, creating
/// it with default settings the first time the name is seen. Clients live
/// until they are removed with `reset` or `clear`, or the registry is dropped.
///
/// The registry is meant to be created once at startup and handed to the
/// parts of an application that report metrics, typically behind an `Arc`.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use overseer::{ClientOptions, Registry};
///
/// let registry = Registry::new();
///
/// let reporter = registry.instance("web");
/// reporter.configure(&ClientOptions::new().with_namespace("web")).unwrap();
///
/// // Elsewhere in the application
/// let same = registry.instance("web");
/// assert!(Arc::ptr_eq(&reporter, &same));
/// assert_eq!("web", same.namespace());
/// ```
pub struct Registry {
    connector: SharedConnector,
    clients: Mutex<HashMap<String, Arc<Client>>>,
}

impl Registry {
    /// Create a new, empty registry whose clients send over UDP.
    pub fn new() -> Self {
        Self::with_connector(UdpConnector)
    }

    /// Create a new, empty registry whose clients all use `connector`.
    pub fn with_connector<C>(connector: C) -> Self
    where
        C: Connector + Send + Sync + RefUnwindSafe + 'static,
    {
        Registry {
            connector: Arc::new(connector),
            clients: Mutex::new(HashMap::new()),
        }
    }

    /// Get the client for `name`, creating it if it doesn't exist yet.
    ///
    /// A newly created client has default settings and a generated id; its
    /// id is not the name it is registered under.
    pub fn instance(&self, name: &str) -> Arc<Client> {
        let mut clients = self.clients();
        let connector = &self.connector;

        clients
            .entry(name.to_string())
            .or_insert_with(|| {
                let client = Client::builder().with_shared_connector(connector.clone()).build();
                debug!(target: "overseer", "created {} for instance name {:?}", client, name);
                Arc::new(client)
            })
            .clone()
    }

    /// Get the client registered under the name `"default"`.
    pub fn default_instance(&self) -> Arc<Client> {
        self.instance(DEFAULT_INSTANCE)
    }

    /// Remove the client for `name`, returning it if there was one.
    ///
    /// The next call to `instance` with the same name creates a new client.
    /// Anything still holding the removed client can keep using it.
    pub fn reset(&self, name: &str) -> Option<Arc<Client>> {
        self.clients().remove(name)
    }

    /// Remove every client from the registry.
    pub fn clear(&self) {
        self.clients().clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.clients().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.clients().len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients().is_empty()
    }

    // Every operation on the map completes or leaves it untouched, so a
    // poisoned lock still guards a usable map.
    fn clients(&self) -> MutexGuard<'_, HashMap<String, Arc<Client>>> {
        self.clients.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clients = self.clients();
        let mut names: Vec<&String> = clients.keys().collect();
        names.sort();
        write!(f, "Registry {{ connector: ..., clients: {:?} }}", names)
    }
}
