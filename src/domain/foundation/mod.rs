//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the creative-assistant domain.

mod errors;
mod ids;
mod module_id;
mod percentage;
mod relevance;
mod sanitizer;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::InsightId;
pub use module_id::ModuleId;
pub use percentage::Percentage;
pub use relevance::Relevance;
pub use sanitizer::{sanitize_ai_error, sanitize_error_message, REDACTION_MARKER, UNKNOWN_ERROR};
pub use timestamp::Timestamp;
