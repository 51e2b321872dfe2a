//! Input validation and sanitization applied before any store call.
//!
//! - [`Validator`]: identifier syntax check and the per-category file-type gate.
//! - [`QuerySanitizer`]: strips query-operator syntax from free text. The
//!   shipped [`DenylistSanitizer`] deletes a fixed list of substrings; callers
//!   hold it as `Arc<dyn QuerySanitizer>` so the strategy can be replaced.
//!
//! Everything here is pure and synchronous.

mod config;
mod sanitizers;
mod validators;


pub use config::SanitizerConfig;
pub use sanitizers::{DenylistSanitizer, QuerySanitizer};
pub use validators::{Validator, AUDIO_EXTENSIONS, DOCUMENT_ID_LEN, IMAGE_EXTENSIONS};
