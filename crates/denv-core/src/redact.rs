//! Redaction decisions for key/value lines.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::Error;
use crate::line::{KeyValue, ParsedLine};
use crate::placeholder::build_placeholder;

/// Substrings that mark a key name as secret (matched case-insensitively).
///
/// `key` also matches names like `MONKEY_PATCH`; that is accepted.
pub const SECRET_MARKERS: &[&str] = &[
    "secret",
    "password",
    "passwd",
    "token",
    "apikey",
    "api_key",
    "key",
    "private",
    "credential",
];

pub const DEFAULT_PLACEHOLDER: &str = "REDACTED";

const KEY_HASH_PREFIX: &str = "VAR_";
const KEY_HASH_LEN: usize = 10;

/// What part of an assignment gets redacted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RedactMode {
    #[default]
    Values,
    Keys,
    Both,
}

impl RedactMode {
    pub fn redacts_keys(self) -> bool {
        matches!(self, RedactMode::Keys | RedactMode::Both)
    }

    pub fn redacts_values(self) -> bool {
        matches!(self, RedactMode::Values | RedactMode::Both)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RedactMode::Values => "values",
            RedactMode::Keys => "keys",
            RedactMode::Both => "both",
        }
    }
}

impl fmt::Display for RedactMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RedactMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "values" => Ok(RedactMode::Values),
            "keys" => Ok(RedactMode::Keys),
            "both" => Ok(RedactMode::Both),
            other => Err(Error::InvalidMode(other.to_string())),
        }
    }
}

/// Redaction settings, fixed for the lifetime of a [`Redactor`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedactOptions {
    pub mode: RedactMode,
    pub placeholder: String,
    pub keep_length: bool,
    pub strip_secrets: bool,
}

impl Default for RedactOptions {
    fn default() -> Self {
        Self {
            mode: RedactMode::default(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            keep_length: false,
            strip_secrets: false,
        }
    }
}

/// Outcome for a single key/value line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision<'a> {
    /// Omit the line entirely, terminator included
    Drop,
    Replace {
        key: Cow<'a, str>,
        value: Cow<'a, str>,
    },
}

/// Whether a key name looks like it holds a secret
pub fn looks_like_secret(key: &str) -> bool {
    let lowered = key.to_lowercase();
    SECRET_MARKERS.iter().any(|marker| lowered.contains(marker))
}

/// Stable anonymised name for a key: `VAR_` plus the first ten uppercase hex
/// digits of its SHA-256.
pub fn redact_key_name(key: &str) -> String {
    let digest = Sha256::digest(key.as_bytes());
    let hex = hex::encode_upper(digest);
    format!("{}{}", KEY_HASH_PREFIX, &hex[..KEY_HASH_LEN])
}

/// Applies [`RedactOptions`] to parsed lines
#[derive(Debug, Clone, Default)]
pub struct Redactor {
    options: RedactOptions,
}

impl Redactor {
    pub fn new(options: RedactOptions) -> Self {
        Self { options }
    }

    /// Decide what happens to a key/value line
    pub fn decide<'a>(&self, kv: &KeyValue<'a>) -> Decision<'a> {
        if self.options.strip_secrets && looks_like_secret(kv.key) {
            return Decision::Drop;
        }

        let key = if self.options.mode.redacts_keys() {
            Cow::Owned(redact_key_name(kv.key))
        } else {
            Cow::Borrowed(kv.key)
        };

        let value = if self.options.mode.redacts_values() {
            Cow::Owned(build_placeholder(
                kv.raw_value,
                &self.options.placeholder,
                self.options.keep_length,
            ))
        } else {
            Cow::Borrowed(kv.raw_value)
        };

        Decision::Replace { key, value }
    }

    /// Render a parsed line; `None` means the line is dropped
    pub fn render(&self, line: &ParsedLine<'_>) -> Option<String> {
        match line {
            ParsedLine::KeyValue(kv) => match self.decide(kv) {
                Decision::Drop => None,
                Decision::Replace { key, value } => Some(kv.render_with(&key, &value)),
            },
            other => Some(other.render()),
        }
    }
}
