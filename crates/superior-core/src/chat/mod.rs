//! Conversation history persistence abstractions and the chat pipeline.
//!
//! This module defines the `HistoryRepository` trait that the
//! infrastructure layer implements, plus the `ChatService` that runs the
//! full request pipeline over injected ports.

pub mod repository;
pub mod service;
