//! Completion client abstractions.
//!
//! - `CompletionClient`: RPITIT trait for concrete client implementations
//! - `BoxCompletionClient`: object-safe wrapper for dynamic dispatch

pub mod boxed;
pub mod client;

pub use boxed::BoxCompletionClient;
pub use client::CompletionClient;
