//! Input validation for incoming chat requests.
//!
//! Validation runs before any storage or completion call, and the messages
//! here are the exact strings returned to the client in 400 responses.

use superior_types::chat::{ChatRequest, DEFAULT_BUSINESS_TYPE};
use superior_types::error::ChatError;

/// 400 body for a missing or malformed email.
pub const INVALID_EMAIL_MESSAGE: &str = "Please provide a valid email address.";

/// 400 body for a missing or whitespace-only message.
pub const INVALID_MESSAGE_MESSAGE: &str = "Please provide a valid message.";

/// A chat request that has passed validation.
///
/// `message` keeps the client's original text (including surrounding
/// whitespace); only the emptiness check trims. `business_type` has been
/// defaulted when the field was absent.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedChat {
    pub user_email: String,
    pub message: String,
    pub business_type: String,
}

/// Structural email check: `local@domain.tld`.
///
/// Exactly one `@`, a non-empty local part, and at least one `.` in the
/// domain with non-empty text on both sides of the first dot. No DNS or
/// deliverability check. Pure and side-effect free.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.split_once('.') {
        Some((host, rest)) => !host.is_empty() && !rest.is_empty(),
        None => false,
    }
}

/// Validate a raw request into a [`ValidatedChat`], email first.
///
/// The first failing check wins: a request with both a bad email and a
/// blank message reports the email problem.
pub fn validate_request(request: ChatRequest) -> Result<ValidatedChat, ChatError> {
    let user_email = match request.user_email {
        Some(email) if is_valid_email(&email) => email,
        _ => return Err(ChatError::InvalidInput(INVALID_EMAIL_MESSAGE.to_string())),
    };

    let message = match request.message {
        Some(message) if !message.trim().is_empty() => message,
        _ => return Err(ChatError::InvalidInput(INVALID_MESSAGE_MESSAGE.to_string())),
    };

    let business_type = request
        .business_type
        .unwrap_or_else(|| DEFAULT_BUSINESS_TYPE.to_string());

    Ok(ValidatedChat {
        user_email,
        message,
        business_type,
    })
}
