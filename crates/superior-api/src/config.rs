//! API server configuration.

use secrecy::SecretString;

/// Configuration for the API server.
///
/// Assembled in `main` from CLI arguments and environment variables. The
/// completion-service credential is only ever read from the environment,
/// never from the command line.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Host to bind the HTTP listener.
    pub host: String,
    /// Port to bind the HTTP listener.
    pub port: u16,
    /// SQLite database URL, e.g. `sqlite:///home/user/.superior/superior_chatbot.db`.
    pub database_url: String,
    /// Credential for the completion service.
    pub openai_api_key: SecretString,
}
