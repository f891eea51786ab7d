//! Error message sanitization for user-facing display.
//!
//! Provider errors can echo request URLs, headers, or configuration back to
//! the caller. Nothing from a provider failure is shown to an end user
//! before passing through [`sanitize_error_message`], which applies these
//! passes in order:
//!
//! 1. Provider API keys (`sk-...`, `sk-ant-...`, `AIza...`)
//! 2. `Bearer <token>` credentials
//! 3. Environment variable references (`$NAME`, `${NAME}`, `process.env.NAME`, `env:NAME`)
//! 4. Opaque tokens of 40 or more key-like characters
//!
//! The redacted text is then cut to its first line.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ports::AIError;

/// Replacement for every redacted span.
pub const REDACTION_MARKER: &str = "[REDACTED]";

/// Returned when nothing displayable survives sanitization.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Opaque tokens at or above this length are treated as credentials.
const MIN_OPAQUE_TOKEN_LEN: usize = 40;

static API_KEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bsk-ant-[A-Za-z0-9_\-]+|\bsk-[A-Za-z0-9_\-]{8,}|\bAIza[0-9A-Za-z_\-]{10,}")
        .expect("valid API key regex")
});

static BEARER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(bearer)\s+[A-Za-z0-9._~+/=\-]+").expect("valid bearer regex")
});

static ENV_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:process\.env\.|import\.meta\.env\.|env:)[A-Za-z_][A-Za-z0-9_]*|\$\{[A-Za-z_][A-Za-z0-9_]*\}|\$[A-Za-z_][A-Za-z0-9_]*",
    )
    .expect("valid env reference regex")
});

static OPAQUE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"[A-Za-z0-9_\-]{{{},}}", MIN_OPAQUE_TOKEN_LEN))
        .expect("valid opaque token regex")
});

/// Sanitizes a raw error message so it is safe to show to end users.
pub fn sanitize_error_message(raw: &str) -> String {
    let redacted = API_KEY.replace_all(raw, REDACTION_MARKER);
    let redacted = BEARER.replace_all(&redacted, format!("$1 {}", REDACTION_MARKER).as_str());
    let redacted = ENV_REFERENCE.replace_all(&redacted, REDACTION_MARKER);
    let redacted = OPAQUE_TOKEN.replace_all(&redacted, REDACTION_MARKER);

    let first_line = redacted.lines().next().unwrap_or("").trim();
    if first_line.is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        first_line.to_string()
    }
}

/// Display-safe text for a provider failure.
pub fn sanitize_ai_error(err: &AIError) -> String {
    sanitize_error_message(&err.to_string())
}
