//! String utilities for the domain layer.

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

/// Single-line preview of a prompt or reply for log fields.
///
/// Line breaks are collapsed to spaces before truncating so one log record
/// stays on one line.
pub fn preview(s: &str, max_len: usize) -> String {
    let flat = s.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate(&flat, max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // 'é' is two bytes; the cut must not land inside it
        assert_eq!(truncate("café au lait", 7), "caf...");
        assert_eq!(truncate("déjà vu", 20), "déjà vu");
    }

    #[test]
    fn test_preview_collapses_lines() {
        assert_eq!(
            preview("Issue Content by alice:\nB\n\nComments:", 100),
            "Issue Content by alice: B Comments:"
        );
        assert_eq!(preview("line one\nline two", 10), "line on...");
    }
}
