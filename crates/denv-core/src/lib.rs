//! Core redaction logic for .env files
//!
//! This crate contains:
//! - Inline comment detection (quote and escape aware)
//! - Line classification into pass-through, raw, and key/value lines
//! - The redaction engine and placeholder builder
//! - Reassembly that reproduces unredacted lines byte for byte
//! - A stream driver tying the above together

pub mod comment;
pub mod error;
pub mod line;
pub mod placeholder;
pub mod redact;
pub mod stream;

pub use comment::{find_unquoted_hash, split_inline_comment};
pub use error::{Error, Result};
pub use line::{KeyValue, ParsedLine, classify};
pub use placeholder::build_placeholder;
pub use redact::{
    DEFAULT_PLACEHOLDER, Decision, RedactMode, RedactOptions, Redactor, SECRET_MARKERS,
    looks_like_secret, redact_key_name,
};
pub use stream::{StreamStats, process_stream};
