//! # Mock Framework
//!
//! Utilities for testing code that talks to an actor, without running the
//! real service behind it.
//!
//! Create a [`MockClient`], queue replies with [`MockClient::expect_call`],
//! hand [`MockClient::client`] to the code under test, then call
//! [`MockClient::verify`] and inspect [`MockClient::take_requests`].

use crate::framework::{ActorService, Envelope, ServiceClient};
use tokio::sync::mpsc;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

type Replies<S> = Arc<Mutex<VecDeque<Result<<S as ActorService>::Reply, <S as ActorService>::Error>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<DriverRegistry>::new();
/// mock.expect_call().return_err(DriverError::NotFound { location: "Durban".into() });
///
/// let drivers = DriverClient::new(mock.client());
/// // Use drivers in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<S: ActorService> {
    client: ServiceClient<S>,
    expectations: Replies<S>,
    requests: Arc<Mutex<Vec<S::Request>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: ActorService> MockClient<S> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<Envelope<S>>(100);
        let expectations: Replies<S> = Arc::new(Mutex::new(VecDeque::new()));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let requests_clone = requests.clone();

        // Spawn background task to answer requests in FIFO order
        let handle = tokio::spawn(async move {
            while let Some(Envelope { request, respond_to }) = receiver.recv().await {
                let reply = expectations_clone.lock().unwrap().pop_front();
                match reply {
                    Some(reply) => {
                        requests_clone.lock().unwrap().push(request);
                        let _ = respond_to.send(reply);
                    }
                    None => panic!("Unexpected request: {:?}", request),
                }
            }
        });

        Self {
            client: ServiceClient::new(sender),
            expectations,
            requests,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ServiceClient<S> {
        self.client.clone()
    }

    /// Expects one more request, answered in the order expectations were queued.
    pub fn expect_call(&mut self) -> CallExpectationBuilder<S> {
        CallExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Drains the requests received so far.
    pub fn take_requests(&self) -> Vec<S::Request> {
        std::mem::take(&mut *self.requests.lock().unwrap())
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<S: ActorService> Default for MockClient<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a queued reply.
pub struct CallExpectationBuilder<S: ActorService> {
    expectations: Replies<S>,
}

impl<S: ActorService> CallExpectationBuilder<S> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, reply: S::Reply) {
        self.expectations.lock().unwrap().push_back(Ok(reply));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: S::Error) {
        self.expectations.lock().unwrap().push_back(Err(error));
    }
}
