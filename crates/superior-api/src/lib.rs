//! HTTP/REST API layer for the Superior Chatbot.
//!
//! Exposes the chat endpoint, health checks, and the API root as an Axum
//! application, and wires the core chat service to its SQLite and
//! completion-service implementations.

pub mod config;
pub mod http;
pub mod state;
