//! # Core Actor Framework
//!
//! This module defines the generic building blocks for the dispatch actors.
//!
//! ## Key Types
//!
//! - [`ActorService`]: The trait that every actor-owned piece of state implements.
//! - [`ServiceActor`]: The generic actor that owns a service and drains its mailbox.
//! - [`ServiceClient`]: The generic client for sending requests to an actor.
//! - [`FrameworkError`]: Transport errors (the actor is gone, the reply was dropped).

use std::fmt::{Debug, Display};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};
use async_trait::async_trait;

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait for state that is owned by exactly one [`ServiceActor`].
///
/// # Architecture Note
/// The driver registry and the invoice log both need the same guarantee:
/// every request observes the effects of the previous one, and no two
/// requests run at the same time. Writing the mailbox loop once against this
/// trait gives both of them that guarantee.
///
/// Associated types keep each actor's protocol closed. A `DriverRequest`
/// cannot be sent to the invoice log; the compiler rejects it.
///
/// # Errors
/// `Error` must absorb [`FrameworkError`] so that clients can return a single
/// error type for both domain failures and transport failures.
#[async_trait]
pub trait ActorService: Send + 'static {
    /// Message accepted by the service.
    type Request: Send + Debug + 'static;

    /// Successful reply to a request.
    type Reply: Send + Debug + 'static;

    /// Domain error returned to the caller.
    type Error: From<FrameworkError> + Display + Send + 'static;

    /// Handles a single request. Called sequentially, never concurrently.
    async fn handle(&mut self, request: Self::Request) -> Result<Self::Reply, Self::Error>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<S> =
    oneshot::Sender<Result<<S as ActorService>::Reply, <S as ActorService>::Error>>;

/// A request paired with the channel its reply goes back on.
pub struct Envelope<S: ActorService> {
    pub request: S::Request,
    pub respond_to: Response<S>,
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns a service.
///
/// **Concurrency Model**:
/// The actor processes its mailbox *sequentially*. The service needs no
/// `Mutex`: the task that runs [`ServiceActor::run`] is its only owner.
pub struct ServiceActor<S: ActorService> {
    receiver: mpsc::Receiver<Envelope<S>>,
    service: S,
}

impl<S: ActorService> ServiceActor<S> {
    pub fn new(buffer_size: usize, service: S) -> (Self, ServiceClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, service };
        let client = ServiceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// Returns the service so that its final state can be inspected after
    /// shutdown.
    pub async fn run(mut self) -> S {
        // Extract just the type name (e.g., "DriverRegistry")
        let service_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(service_type, "Actor started");

        let mut handled: u64 = 0;
        while let Some(Envelope { request, respond_to }) = self.receiver.recv().await {
            debug!(service_type, ?request, "Request");
            let result = self.service.handle(request).await;
            match &result {
                Ok(reply) => debug!(service_type, ?reply, "Request ok"),
                Err(e) => warn!(service_type, error = %e, "Request failed"),
            }
            handled += 1;
            let _ = respond_to.send(result);
        }

        info!(service_type, handled, "Shutdown");
        self.service
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `ServiceActor`.
pub struct ServiceClient<S: ActorService> {
    sender: mpsc::Sender<Envelope<S>>,
}

impl<S: ActorService> Clone for ServiceClient<S> {
    fn clone(&self) -> Self {
        Self { sender: self.sender.clone() }
    }
}

impl<S: ActorService> ServiceClient<S> {
    pub fn new(sender: mpsc::Sender<Envelope<S>>) -> Self {
        Self { sender }
    }

    /// Sends a request and waits for the actor's reply.
    pub async fn call(&self, request: S::Request) -> Result<S::Reply, S::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(Envelope { request, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
