//! Request handlers for the REST API.

pub mod chat;
