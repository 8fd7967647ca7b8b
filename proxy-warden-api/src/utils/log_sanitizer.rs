//! Log sanitization utilities
//!
//! Keeps response bodies (full rule lists, decision logs with client IPs)
//! from flooding debug/error logs.

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a response body for logging.
///
/// Line breaks are folded into spaces so one response stays on one log line.
/// Bodies longer than `TRUNCATE_LIMIT` bytes are cut at the nearest char
/// boundary below the limit and suffixed with the total length.
pub fn truncate_for_log(s: &str) -> String {
    let cut = s
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|end| *end <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);

    let head: String = s[..cut]
        .chars()
        .map(|c| if c == '\r' || c == '\n' { ' ' } else { c })
        .collect();

    if cut == s.len() {
        head
    } else {
        format!("{head}... [truncated, total {} bytes]", s.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        let s = r#"{"status":"success","data":[]}"#;
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.starts_with(&"a".repeat(TRUNCATE_LIMIT)));
        assert!(result.ends_with(&format!("total {} bytes]", TRUNCATE_LIMIT + 100)));
    }

    #[test]
    fn newlines_folded() {
        assert_eq!(truncate_for_log("line1\nline2\r\n"), "line1 line2  ");
    }

    #[test]
    fn multibyte_chars_safe() {
        // '차' is 3 bytes; 256 is not a multiple of 3
        let s = "차".repeat(200);
        let result = truncate_for_log(&s);
        assert!(result.starts_with(&"차".repeat(85)));
        assert!(result.contains("... [truncated, total 600 bytes]"));
    }
}
