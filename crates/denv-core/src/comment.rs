//! Inline comment detection for value fragments.
//!
//! A `#` starts a comment only when it sits outside single and double quotes
//! and is not escaped with a backslash. Unbalanced quotes stay open until the
//! end of the fragment, so a stray `"` hides every `#` after it.

/// Byte offset of the first `#` outside quotes, if any.
pub fn find_unquoted_hash(fragment: &str) -> Option<usize> {
    let mut in_single = false;
    let mut in_double = false;
    let mut escape = false;

    for (idx, ch) in fragment.char_indices() {
        if escape {
            escape = false;
            continue;
        }
        match ch {
            '\\' => escape = true,
            '\'' if !in_double => in_single = !in_single,
            '"' if !in_single => in_double = !in_double,
            '#' if !in_single && !in_double => return Some(idx),
            _ => {}
        }
    }

    None
}

/// Split a fragment into `(content, comment)`.
///
/// `content` has its trailing whitespace trimmed when a comment was found and
/// is returned untouched otherwise. `comment` starts with `#` or is empty.
pub fn split_inline_comment(fragment: &str) -> (&str, &str) {
    match find_unquoted_hash(fragment) {
        Some(idx) => (fragment[..idx].trim_end(), &fragment[idx..]),
        None => (fragment, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_hash() {
        assert_eq!(find_unquoted_hash("no hash here"), None);
    }

    #[test]
    fn test_simple_hash() {
        assert_eq!(find_unquoted_hash("value # comment"), Some(6));
    }

    #[test]
    fn test_hash_in_double_quotes() {
        assert_eq!(find_unquoted_hash("\"value # inside\""), None);
    }

    #[test]
    fn test_hash_in_single_quotes() {
        assert_eq!(find_unquoted_hash("'value # inside'"), None);
    }

    #[test]
    fn test_hash_after_quotes() {
        assert_eq!(find_unquoted_hash("\"value\" # comment"), Some(8));
    }

    #[test]
    fn test_escaped_quote() {
        let fragment = r#""value \" # still inside" # outside"#;
        assert_eq!(find_unquoted_hash(fragment), Some(26));
        assert_eq!(&fragment[26..], "# outside");
    }

    #[test]
    fn test_escaped_hash_outside_quotes() {
        assert_eq!(find_unquoted_hash(r"a\#b # c"), Some(5));
    }

    #[test]
    fn test_nested_quote_kinds() {
        // A single quote inside double quotes does not open a new quote.
        assert_eq!(find_unquoted_hash(r#""it's # fine" # c"#), Some(14));
        assert_eq!(find_unquoted_hash(r#"'say "hi # there' # c"#), Some(18));
    }

    #[test]
    fn test_unbalanced_quote_hides_comment() {
        assert_eq!(find_unquoted_hash("\"open # never closed"), None);
    }

    #[test]
    fn test_multibyte_offsets() {
        let fragment = "héllo # c";
        let idx = find_unquoted_hash(fragment).unwrap();
        assert_eq!(&fragment[idx..], "# c");
    }

    #[test]
    fn test_split_no_comment() {
        assert_eq!(split_inline_comment("just value"), ("just value", ""));
        assert_eq!(split_inline_comment("trailing   "), ("trailing   ", ""));
    }

    #[test]
    fn test_split_with_comment() {
        assert_eq!(
            split_inline_comment("value # comment"),
            ("value", "# comment")
        );
    }

    #[test]
    fn test_split_hash_in_quotes() {
        assert_eq!(
            split_inline_comment("\"value#inside\" # outside"),
            ("\"value#inside\"", "# outside")
        );
    }
}
