//! Per-line comment stripping and trimming

/// Two-character comment introducer
const DOUBLE_SLASH: &str = "//";

/// Strip the comment and surrounding whitespace from one line.
///
/// The earliest of `;`, `#` or `//` starts the comment, regardless of which
/// marker it is. There is no quoting, so a marker inside `"..."` still counts.
pub fn normalize(line: &str) -> &str {
    let single = line.find([';', '#']);
    let double = line.find(DOUBLE_SLASH);

    let code = match (single, double) {
        (Some(a), Some(b)) => &line[..a.min(b)],
        (Some(at), None) | (None, Some(at)) => &line[..at],
        (None, None) => line,
    };

    trim(code)
}

/// Trim the C-locale `isspace` set from both ends.
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_space)
}

// Unlike `char::is_ascii_whitespace`, this includes vertical tab.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_each_marker() {
        assert_eq!(normalize("key = value ; trailing comment"), "key = value");
        assert_eq!(normalize("key = value # trailing"), "key = value");
        assert_eq!(normalize("key = value // trailing"), "key = value");
    }

    #[test]
    fn test_normalize_earliest_marker_wins() {
        assert_eq!(normalize("a // b ; c"), "a");
        assert_eq!(normalize("a ; b // c"), "a");
        assert_eq!(normalize("a # b ; c"), "a");
        assert_eq!(normalize("url = http://host"), "url = http:");
    }

    #[test]
    fn test_normalize_no_quoting() {
        assert_eq!(normalize(r#"name = "a;b""#), r#"name = "a"#);
    }

    #[test]
    fn test_normalize_ignorable_lines() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t \r"), "");
        assert_eq!(normalize("; only a comment"), "");
        assert_eq!(normalize("   # indented comment"), "");
        assert_eq!(normalize("//"), "");
    }

    #[test]
    fn test_normalize_single_slash_is_kept() {
        assert_eq!(normalize("path = a/b/c"), "path = a/b/c");
    }

    #[test]
    fn test_trim_whitespace_set() {
        assert_eq!(trim("\x0B\x0C value \r\n"), "value");
        assert_eq!(trim("\u{a0}x"), "\u{a0}x");
    }
}
