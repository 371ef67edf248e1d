//! Business logic and trait definitions for Superior Chatbot.
//!
//! This crate defines the "ports" (the history repository and completion
//! client traits) that the infrastructure layer implements, plus the pure
//! pipeline pieces: email validation, persona selection, and prompt
//! building. It depends only on `superior-types` -- never on
//! `superior-infra` or any database/IO crate.

pub mod chat;
pub mod completion;
pub mod persona;
pub mod prompt;
pub mod validate;
