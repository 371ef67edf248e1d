//! BoxCompletionClient -- object-safe dynamic dispatch wrapper for CompletionClient.
//!
//! 1. Define an object-safe `CompletionClientDyn` trait with boxed futures
//! 2. Blanket-impl `CompletionClientDyn` for all `T: CompletionClient`
//! 3. `BoxCompletionClient` wraps `Box<dyn CompletionClientDyn>` and
//!    implements `CompletionClient` itself, so it slots into anything
//!    generic over the trait (the chat service, most importantly)

use std::future::Future;
use std::pin::Pin;

use superior_types::completion::{Completion, CompletionError};

use super::client::CompletionClient;

/// Object-safe version of [`CompletionClient`] with boxed futures.
///
/// This trait exists solely to enable dynamic dispatch (`dyn CompletionClientDyn`).
/// A blanket implementation is provided for all types implementing `CompletionClient`.
pub trait CompletionClientDyn: Send + Sync {
    fn name(&self) -> &str;

    fn complete_boxed<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Completion, CompletionError>> + Send + 'a>>;
}

/// Blanket implementation: any `CompletionClient` automatically implements `CompletionClientDyn`.
impl<T: CompletionClient> CompletionClientDyn for T {
    fn name(&self) -> &str {
        CompletionClient::name(self)
    }

    fn complete_boxed<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Completion, CompletionError>> + Send + 'a>> {
        Box::pin(self.complete(prompt))
    }
}

/// Type-erased completion client.
///
/// Since `CompletionClient` uses RPITIT, it cannot be used as a trait
/// object directly. `BoxCompletionClient` wraps any implementation behind
/// dynamic dispatch while still implementing `CompletionClient`, which is
/// what lets the API wire a real HTTP client and the tests substitute a
/// scripted fake without changing the service's type.
pub struct BoxCompletionClient {
    inner: Box<dyn CompletionClientDyn + Send + Sync>,
}

impl BoxCompletionClient {
    /// Wrap a concrete `CompletionClient` in a type-erased box.
    pub fn new<T: CompletionClient + 'static>(client: T) -> Self {
        Self {
            inner: Box::new(client),
        }
    }
}

impl CompletionClient for BoxCompletionClient {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn complete(&self, prompt: &str) -> Result<Completion, CompletionError> {
        self.inner.complete_boxed(prompt).await
    }
}
