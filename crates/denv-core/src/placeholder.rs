//! Replacement text for redacted values.

const MASK_CHAR: char = '*';

/// Build the replacement for `value`.
///
/// A value wrapped in matching `'` or `"` keeps its quotes. With
/// `keep_length` the replacement is one `*` per character of the original;
/// an empty unquoted value falls back to `placeholder` so the redaction stays
/// visible.
pub fn build_placeholder(value: &str, placeholder: &str, keep_length: bool) -> String {
    if let Some((quote, inner_len)) = quoted(value) {
        let inner = if keep_length {
            mask(inner_len)
        } else {
            placeholder.to_string()
        };
        return format!("{quote}{inner}{quote}");
    }

    let len = value.chars().count();
    if keep_length && len > 0 {
        mask(len)
    } else {
        placeholder.to_string()
    }
}

/// Quote character and interior length of a fully quoted value
fn quoted(value: &str) -> Option<(char, usize)> {
    let mut chars = value.chars();
    let first = chars.next()?;
    let last = chars.next_back()?;

    if first == last && (first == '\'' || first == '"') {
        Some((first, chars.count()))
    } else {
        None
    }
}

fn mask(len: usize) -> String {
    std::iter::repeat_n(MASK_CHAR, len).collect()
}
