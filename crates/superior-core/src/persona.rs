//! Business persona selection.
//!
//! Maps a business-type label to the fixed persona sentence that opens the
//! prompt. The match is exact and case-sensitive; anything unrecognized
//! (including the defaulted "General Business" label and an explicit empty
//! string) falls through to the generic persona.

/// Persona for the "Real Estate" label.
pub const REAL_ESTATE_PERSONA: &str =
    "You are an AI assistant for a real estate agency. You help users find properties.";

/// Persona for the "Law Firm" label.
pub const LAW_FIRM_PERSONA: &str =
    "You are an AI assistant for a law firm. You answer legal service questions.";

/// Persona for the "E-Commerce" label.
pub const E_COMMERCE_PERSONA: &str =
    "You are an AI chatbot for an online store. You help customers with orders and refunds.";

/// Fallback persona for every other label.
pub const DEFAULT_PERSONA: &str = "You are an AI assistant for a business.";

/// Select the persona sentence for a business-type label. Total function.
pub fn persona_for(business_type: &str) -> &'static str {
    match business_type {
        "Real Estate" => REAL_ESTATE_PERSONA,
        "Law Firm" => LAW_FIRM_PERSONA,
        "E-Commerce" => E_COMMERCE_PERSONA,
        _ => DEFAULT_PERSONA,
    }
}
