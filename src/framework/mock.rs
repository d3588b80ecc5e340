//! # Mock Framework
//!
//! Utilities for testing clients without spawning a real resource actor.
//!
//! | | [`MockClient`] | Real actor |
//! |---|---|---|
//! | **State** | none, scripted replies | real rows, real versioning |
//! | **Error injection** | `return_err(...)` | needs a specific store state |
//! | **Use case** | client wrappers, error mapping | entity behaviour, concurrency |
//!
//! Two styles are available:
//!
//! - **Scripted**: [`MockClient`] takes an ordered list of expectations and replies to each
//!   request from it. [`MockClient::verify`] fails the test if a request arrived out of
//!   order, carried the wrong id, or an expectation was never consumed.
//! - **Manual**: [`create_mock_client`] hands back the raw receiver so the test can inspect
//!   each request with [`expect_create`], [`expect_get`], [`expect_update`] or
//!   [`expect_action`] and answer it by hand.
//!
//! ```rust
//! use stockroom::framework::mock::MockClient;
//! use stockroom::framework::FrameworkError;
//! use stockroom::model::{Supplier, SupplierId};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Supplier>::new();
//!     mock.expect_get(SupplierId(3)).return_ok(None);
//!     mock.expect_delete(SupplierId(3))
//!         .return_err(FrameworkError::NotFound("supplier_3".into()));
//!
//!     let client = mock.client();
//!     assert!(client.get(SupplierId(3)).await.unwrap().is_none());
//!     assert!(client.delete(SupplierId(3)).await.is_err());
//!     mock.verify();
//! }
//! ```

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// One scripted reply, keyed by request kind.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn lock<X>(m: &Mutex<X>) -> std::sync::MutexGuard<'_, X> {
    // a panicking test thread must not hide the original failure behind a poison error
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A mock resource actor replying from a queue of expectations.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    failures: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let failures = Arc::new(Mutex::new(Vec::new()));
        let queue = expectations.clone();
        let failed = failures.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&queue).pop_front();
                Self::answer(request, expectation, &failed);
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            failures,
            _handle: handle,
        }
    }

    /// Replies to `request`. Mismatches are recorded before the reply is sent, so a test
    /// that calls `verify()` right after its request completes always sees them.
    fn answer(
        request: ResourceRequest<T>,
        expectation: Option<Expectation<T>>,
        failures: &Mutex<Vec<String>>,
    ) {
        let record = |expected: &T::Id, got: &T::Id| {
            if expected != got {
                lock(failures).push(format!("expected id {expected:?}, got {got:?}"));
            }
        };

        match (request, expectation) {
            (
                ResourceRequest::Get { id, respond_to },
                Some(Expectation::Get { id: want, response }),
            ) => {
                record(&want, &id);
                let _ = respond_to.send(response);
            }
            (
                ResourceRequest::Create { respond_to, .. },
                Some(Expectation::Create { response }),
            ) => {
                let _ = respond_to.send(response);
            }
            (
                ResourceRequest::Update { id, respond_to, .. },
                Some(Expectation::Update { id: want, response }),
            ) => {
                record(&want, &id);
                let _ = respond_to.send(response);
            }
            (
                ResourceRequest::Delete { id, respond_to },
                Some(Expectation::Delete { id: want, response }),
            ) => {
                record(&want, &id);
                let _ = respond_to.send(response);
            }
            (
                ResourceRequest::Action { id, respond_to, .. },
                Some(Expectation::Action { id: want, response }),
            ) => {
                record(&want, &id);
                let _ = respond_to.send(response);
            }
            // Dropping the request drops its responder, so the caller sees ActorDropped.
            (request, None) => {
                let kind = Self::kind(&request);
                lock(failures).push(format!("unexpected {kind} request"));
            }
            (request, Some(_)) => {
                let kind = Self::kind(&request);
                lock(failures).push(format!("{kind} request arrived out of order"));
            }
        }
    }

    fn kind(request: &ResourceRequest<T>) -> &'static str {
        match request {
            ResourceRequest::Create { .. } => "create",
            ResourceRequest::Get { .. } => "get",
            ResourceRequest::Update { .. } => "update",
            ResourceRequest::Delete { .. } => "delete",
            ResourceRequest::Action { .. } => "action",
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Get { id, response }
        })
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Create {
            response,
        })
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Update { id, response }
        })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Delete { id, response }
        })
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Action { id, response }
        })
    }

    /// Panics if any request mismatched or any expectation was left unconsumed.
    pub fn verify(&self) {
        let failures = lock(&self.failures);
        if !failures.is_empty() {
            panic!("Mock expectations violated: {}", failures.join("; "));
        }
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Completes an expectation with its scripted reply.
pub struct ExpectationBuilder<T: ActorEntity, R: 'static> {
    expectations: Queue<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R: 'static> ExpectationBuilder<T, R> {
    fn new(
        expectations: Queue<T>,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            build: Box::new(build),
        }
    }

    pub fn return_ok(self, value: R) {
        lock(&self.expectations).push_back((self.build)(Ok(value)));
    }

    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back((self.build)(Err(error)));
    }
}

// =============================================================================
// MANUAL HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver owned by the test.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message, if it is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Get request.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message, if it is an Update request.
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Next message, if it is an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Supplier, SupplierCreate, SupplierId};

    fn acme() -> Supplier {
        Supplier::new(SupplierId(1), "Acme", "sales@acme.test", "555-0100")
    }

    #[tokio::test]
    async fn test_manual_mock_client() {
        let (client, mut receiver) = create_mock_client::<Supplier>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(SupplierCreate {
                    name: "Acme".into(),
                    email: "sales@acme.test".into(),
                    phone: "555-0100".into(),
                    status: None,
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.name, "Acme");
        responder.send(Ok(SupplierId(1))).unwrap();

        assert_eq!(create_task.await.unwrap().unwrap(), SupplierId(1));
    }

    #[tokio::test]
    async fn test_scripted_mock_client() {
        let mut mock = MockClient::<Supplier>::new();
        mock.expect_create().return_ok(SupplierId(1));
        mock.expect_get(SupplierId(1)).return_ok(Some(acme()));

        let client = mock.client();
        let id = client
            .create(SupplierCreate {
                name: "Acme".into(),
                email: "sales@acme.test".into(),
                phone: "555-0100".into(),
                status: None,
            })
            .await
            .unwrap();
        let fetched = client.get(id).await.unwrap().unwrap();
        assert_eq!(fetched.email, "sales@acme.test");

        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "expected id")]
    async fn test_scripted_mock_flags_wrong_id() {
        let mut mock = MockClient::<Supplier>::new();
        mock.expect_get(SupplierId(1)).return_ok(None);

        let _ = mock.client().get(SupplierId(2)).await;
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "1 remaining")]
    async fn test_scripted_mock_flags_unmet_expectation() {
        let mut mock = MockClient::<Supplier>::new();
        mock.expect_delete(SupplierId(1)).return_ok(());
        mock.verify();
    }
}
