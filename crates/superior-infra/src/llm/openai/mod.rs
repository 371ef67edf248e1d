//! OpenAI chat-completions client implementation.
//!
//! This module provides the [`OpenAiChatClient`] which implements the
//! [`CompletionClient`](superior_core::completion::client::CompletionClient)
//! trait against the Chat Completions API.

pub mod client;
pub mod types;

pub use client::OpenAiChatClient;
