//! Parse raw response header lines.

/// Split collected header lines into (name, value) pairs.
///
/// Status lines and blank separators are skipped. When curl reports more than
/// one header block (interim `100 Continue` responses), only the last block
/// is kept.
pub fn parse_headers(lines: &[String]) -> Vec<(String, String)> {
    let mut headers = Vec::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            headers.clear();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_headers_name_and_value() {
        let h = parse_headers(&lines(&[
            "HTTP/1.1 429 Too Many Requests",
            "Retry-After: 10",
            "Content-Type: application/json",
            "",
        ]));
        assert_eq!(
            h,
            vec![
                ("Retry-After".to_string(), "10".to_string()),
                ("Content-Type".to_string(), "application/json".to_string()),
            ]
        );
    }

    #[test]
    fn parse_headers_keeps_last_block() {
        let h = parse_headers(&lines(&[
            "HTTP/1.1 100 Continue",
            "",
            "HTTP/1.1 200 OK",
            "Content-Length: 2",
        ]));
        assert_eq!(h, vec![("Content-Length".to_string(), "2".to_string())]);
    }

    #[test]
    fn parse_headers_value_with_colon() {
        let h = parse_headers(&lines(&["Location: https://example.com/x"]));
        assert_eq!(h[0].1, "https://example.com/x");
    }
}
