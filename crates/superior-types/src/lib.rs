//! Shared domain types for Superior Chatbot.
//!
//! This crate contains the core domain types used across the Superior
//! Chatbot backend: conversation turns, completion results, and their
//! associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod completion;
pub mod error;
