//! Line classification and reassembly.
//!
//! Every input line is decomposed into borrowed slices of itself, so that
//! concatenating the parts of an unredacted line gives back the exact input.

use lazy_static::lazy_static;
use regex::Regex;

use crate::comment::split_inline_comment;

lazy_static! {
    static ref KEY_PATTERN: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_.]*").unwrap();
}

const EXPORT_PREFIX: &str = "export ";

/// A single classified line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    /// Blank line or full-line comment
    PassThrough {
        leading_whitespace: &'a str,
        content: &'a str,
        trailing_newline: &'a str,
    },

    /// Anything that is not an assignment, terminator included
    Raw { original: &'a str },

    /// `[export ]KEY=VALUE[ #comment]`
    KeyValue(KeyValue<'a>),
}

/// Structural parts of an assignment line.
///
/// `separator` holds any whitespace between the key and `=` as well as the
/// `=` itself; `comment_gap` holds the whitespace between the value and the
/// `#` of an inline comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue<'a> {
    pub leading_whitespace: &'a str,
    pub export_prefix: &'a str,
    pub key: &'a str,
    pub separator: &'a str,
    pub left_padding: &'a str,
    pub raw_value: &'a str,
    pub comment_gap: &'a str,
    pub inline_comment: &'a str,
    pub trailing_newline: &'a str,
}

impl ParsedLine<'_> {
    /// Reassemble the line without any substitution
    pub fn render(&self) -> String {
        match self {
            ParsedLine::PassThrough {
                leading_whitespace,
                content,
                trailing_newline,
            } => [*leading_whitespace, *content, *trailing_newline].concat(),
            ParsedLine::Raw { original } => (*original).to_string(),
            ParsedLine::KeyValue(kv) => kv.assemble(kv.key, kv.raw_value, kv.comment_gap),
        }
    }
}

impl KeyValue<'_> {
    /// Reassemble a redacted line with `key` and `value` in place of the
    /// originals.
    ///
    /// The recorded gap before an inline comment is kept. If the original had
    /// no gap, a single space is inserted so the output always reads
    /// `value #comment`, whatever the substituted text is.
    pub fn render_with(&self, key: &str, value: &str) -> String {
        let gap = if self.inline_comment.is_empty() {
            ""
        } else if self.comment_gap.is_empty() {
            " "
        } else {
            self.comment_gap
        };

        self.assemble(key, value, gap)
    }

    fn assemble(&self, key: &str, value: &str, gap: &str) -> String {
        [
            self.leading_whitespace,
            self.export_prefix,
            key,
            self.separator,
            self.left_padding,
            value,
            gap,
            self.inline_comment,
            self.trailing_newline,
        ]
        .concat()
    }
}

/// Classify a raw line.
///
/// Never fails: anything that is not blank, a comment, or an assignment
/// comes back as [`ParsedLine::Raw`].
pub fn classify(line: &str) -> ParsedLine<'_> {
    let (body, trailing_newline) = split_newline(line);

    let stripped = body.trim_start();
    let leading_whitespace = &body[..body.len() - stripped.len()];

    if stripped.is_empty() || stripped.starts_with('#') {
        return ParsedLine::PassThrough {
            leading_whitespace,
            content: stripped,
            trailing_newline,
        };
    }

    let (export_prefix, rest) = match stripped.strip_prefix(EXPORT_PREFIX) {
        Some(after) => {
            let after = after.trim_start();
            (&stripped[..stripped.len() - after.len()], after)
        }
        None => ("", stripped),
    };

    let Some(key_match) = KEY_PATTERN.find(rest) else {
        return ParsedLine::Raw { original: line };
    };
    let key = key_match.as_str();
    let after_key = &rest[key_match.end()..];

    let Some(value_part) = after_key.trim_start().strip_prefix('=') else {
        return ParsedLine::Raw { original: line };
    };
    let separator = &after_key[..after_key.len() - value_part.len()];

    let (content, inline_comment) = split_inline_comment(value_part);
    let comment_gap = if inline_comment.is_empty() {
        ""
    } else {
        &value_part[content.len()..value_part.len() - inline_comment.len()]
    };

    let raw_value = content.trim_start();
    let left_padding = &content[..content.len() - raw_value.len()];

    ParsedLine::KeyValue(KeyValue {
        leading_whitespace,
        export_prefix,
        key,
        separator,
        left_padding,
        raw_value,
        comment_gap,
        inline_comment,
        trailing_newline,
    })
}

fn split_newline(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, &line[body.len()..])
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, &line[body.len()..])
    } else {
        (line, "")
    }
}
