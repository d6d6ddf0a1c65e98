//! Line-oriented pattern extraction from fetched text.
//!
//! Upstream version artifacts are loosely structured text files. Extraction
//! works in two steps: find lines containing a marker substring (a variable,
//! library, or image name), then apply a regular expression with at least one
//! capture group to pull the version token out of the matching line.
//!
//! The first marker-containing line where the expression matches wins. This
//! early-first-match policy is deliberate: the upstream files list a variable
//! next to its most authoritative definition first, so later matches are
//! shadows or build metadata.

use regex::Regex;

/// Return the first capture group of `pattern` from the first
/// marker-containing line where the pattern matches.
///
/// Scans `text` line by line in order. Lines that do not contain `marker`
/// are skipped without applying the expression. Returns `None` when the
/// marker never appears or the pattern never matches a marker line.
pub fn first_capture(text: &str, marker: &str, pattern: &Regex) -> Option<String> {
    for line in text.lines() {
        if !line.contains(marker) {
            continue;
        }
        if let Some(captures) = pattern.captures(line) {
            if let Some(group) = captures.get(1) {
                return Some(group.as_str().to_string());
            }
        }
    }
    None
}

/// Return every line of `text` containing `marker`, verbatim and in order.
///
/// This is the multi-line extraction mode used when a caller wants whole
/// matching lines rather than a captured token.
pub fn marker_lines(text: &str, marker: &str) -> Vec<String> {
    text.lines().filter(|line| line.contains(marker)).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version_pattern() -> Regex {
        Regex::new(r"(?P<version>v[\d\.]+)").unwrap()
    }

    #[test]
    fn missing_marker_returns_none_regardless_of_pattern() {
        let text = "FOO=v1.2.3\nBAR=v4.5.6\n";
        assert_eq!(first_capture(text, "BAZ", &version_pattern()), None);
        assert_eq!(first_capture(text, "BAZ", &Regex::new(".*").unwrap()), None);
    }

    #[test]
    fn first_matching_marker_line_wins() {
        let text = "ETCD_VERSION=v3.5.4\nETCD_VERSION=v3.5.9\n";
        assert_eq!(
            first_capture(text, "ETCD_VERSION", &version_pattern()),
            Some("v3.5.4".to_string())
        );
    }

    #[test]
    fn marker_line_without_match_is_skipped() {
        // The first marker line carries no version token; extraction moves on.
        let text = "RUNC_VERSION=pending\nRUNC_VERSION=v1.1.3\n";
        assert_eq!(
            first_capture(text, "RUNC_VERSION", &version_pattern()),
            Some("v1.1.3".to_string())
        );
    }

    #[test]
    fn no_match_on_any_marker_line_returns_none() {
        let text = "VERSION=unset\nVERSION=tbd\n";
        assert_eq!(first_capture(text, "VERSION", &version_pattern()), None);
    }

    #[test]
    fn marker_lines_returns_all_in_order() {
        let text = "alpha:one\nbeta:two\nalpha:three\n";
        assert_eq!(marker_lines(text, "alpha"), vec!["alpha:one", "alpha:three"]);
        assert!(marker_lines(text, "gamma").is_empty());
    }
}
