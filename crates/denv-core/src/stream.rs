//! Line-by-line redaction of a whole input stream.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::line::{ParsedLine, classify};
use crate::redact::Redactor;

/// Per-stream line counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    pub lines: usize,
    pub passthrough: usize,
    pub raw: usize,
    pub redacted: usize,
    pub dropped: usize,
}

impl StreamStats {
    /// Fold another stream's counts into this one
    pub fn merge(&mut self, other: StreamStats) {
        self.lines += other.lines;
        self.passthrough += other.passthrough;
        self.raw += other.raw;
        self.redacted += other.redacted;
        self.dropped += other.dropped;
    }
}

/// Read `input` to the end, writing every redacted line to `output`.
///
/// Lines keep their own terminators, so a final line without a newline stays
/// that way. Output is flushed before returning.
pub fn process_stream<R, W>(mut input: R, mut output: W, redactor: &Redactor) -> Result<StreamStats>
where
    R: BufRead,
    W: Write,
{
    let mut stats = StreamStats::default();
    let mut buf = String::new();

    loop {
        buf.clear();
        if input.read_line(&mut buf)? == 0 {
            break;
        }
        stats.lines += 1;

        let parsed = classify(&buf);
        let Some(rendered) = redactor.render(&parsed) else {
            stats.dropped += 1;
            tracing::trace!(line = stats.lines, "dropping secret-looking assignment");
            continue;
        };

        match parsed {
            ParsedLine::PassThrough { .. } => stats.passthrough += 1,
            ParsedLine::Raw { .. } => {
                stats.raw += 1;
                tracing::trace!(line = stats.lines, "line is not an assignment, passing through");
            }
            ParsedLine::KeyValue(_) => stats.redacted += 1,
        }
        output.write_all(rendered.as_bytes())?;
    }

    output.flush()?;
    Ok(stats)
}
