//! Infrastructure implementations for Superior Chatbot.
//!
//! Concrete adapters for the ports defined in `superior-core`: the SQLite
//! history repository and the OpenAI completion client.

pub mod llm;
pub mod sqlite;
