//! HTTP layer: router, request handlers, and error mapping.

pub mod error;
pub mod handlers;
pub mod router;
