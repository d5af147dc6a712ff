//! Unsupported-location line filter.
//!
//! Operates on the raw text of a models dump, one line at a time. A line is
//! reported when it carries a `"repository":` field and none of the
//! supported-host substrings. Matching is literal and case-sensitive: a
//! repository on `Github.com` is reported, one on `github.com` is not.

/// Substring marking a repository field in a pretty-printed dump.
pub const REPOSITORY_MARKER: &str = "\"repository\":";

/// Substrings identifying hosting platforms the adapters already handle.
pub const SUPPORTED_HOSTS: [&str; 5] = ["github", "object.cscs", "modeldb", "data-proxy", "yale"];

/// Whether `line` carries a repository field.
pub fn has_repository_marker(line: &str) -> bool {
    line.contains(REPOSITORY_MARKER)
}

/// Whether `text` mentions any supported host.
pub fn mentions_supported_host(text: &str) -> bool {
    SUPPORTED_HOSTS.iter().any(|host| text.contains(host))
}

/// Whether `line` is a repository field pointing at an unsupported host.
pub fn is_unsupported(line: &str) -> bool {
    has_repository_marker(line) && !mentions_supported_host(line)
}

/// Keep the lines naming an unsupported repository location, in input order.
pub fn filter_lines<'a, I>(lines: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().filter(|line| is_unsupported(line)).collect()
}

/// Split `text` on `\n` and filter the pieces.
///
/// A `\r` before the newline stays part of the line, so CRLF dumps print
/// back byte for byte.
pub fn filter_text(text: &str) -> Vec<&str> {
    let kept = filter_lines(text.split('\n'));
    log::debug!("{} unsupported repository line(s)", kept.len());
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn github_repository_is_excluded() {
        assert!(!is_unsupported(r#""repository": "https://github.com/org/repo""#));
    }

    #[test]
    fn unknown_host_is_reported() {
        assert!(is_unsupported(
            r#""repository": "https://unsupported-host.example/org/repo""#
        ));
    }

    #[test]
    fn line_without_marker_is_excluded() {
        assert!(!is_unsupported(r#""name": "SomeModel""#));
        assert!(!is_unsupported(r#""name": "https://unsupported-host.example""#));
    }

    #[test]
    fn modeldb_repository_is_excluded() {
        assert!(!is_unsupported(r#""repository": "https://modeldb.example/123""#));
    }

    #[test]
    fn every_supported_host_is_excluded() {
        for host in SUPPORTED_HOSTS {
            let line = format!(r#"        "repository": "https://{host}.example/x","#);
            assert!(!is_unsupported(&line), "{host} should be excluded");
        }
    }

    #[test]
    fn several_supported_hosts_still_excluded_once() {
        let line = r#""repository": "https://data-proxy.ebrains.eu/github/yale""#;
        assert!(!is_unsupported(line));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(is_unsupported(r#""repository": "https://Github.com/org/repo""#));
        assert!(is_unsupported(r#""repository": "https://ModelDB.example/1""#));
        // A differently cased key is not the marker.
        assert!(!is_unsupported(r#""Repository": "https://unsupported.example""#));
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(filter_lines(Vec::<&str>::new()).is_empty());
        assert!(filter_text("").is_empty());
    }

    #[test]
    fn output_preserves_input_order() {
        let text = r#"{
    "a1": {
        "name": "First",
        "repository": "https://zenodo.org/record/1",
        "version": "1.0"
    },
    "b2": {
        "name": "Second",
        "repository": "https://github.com/org/second",
    },
    "c3": {
        "repository": "https://object.cscs.ch/v1/AUTH_x/bucket?prefix=c3/",
    },
    "d4": {
        "repository": "https://senselab.med.yale.edu/ModelDB/showmodel?model=1",
    },
    "e5": {
        "repository": "https://doi.org/10.5281/zenodo.2",
    }
}"#;
        let kept = filter_text(text);
        assert_eq!(
            kept,
            vec![
                r#"        "repository": "https://zenodo.org/record/1","#,
                r#"        "repository": "https://doi.org/10.5281/zenodo.2","#,
            ]
        );
    }

    #[test]
    fn crlf_line_keeps_carriage_return() {
        let text = "{\r\n  \"repository\": \"https://zenodo.org/record/1\"\r\n}\r\n";
        assert_eq!(
            filter_text(text),
            vec!["  \"repository\": \"https://zenodo.org/record/1\"\r"]
        );
    }

    #[test]
    fn last_line_without_newline_is_kept() {
        assert_eq!(
            filter_text("\"repository\": \"https://a.example\""),
            vec!["\"repository\": \"https://a.example\""]
        );
    }

    #[test]
    fn output_is_subsequence_of_input() {
        let lines = vec![
            r#""repository": "https://a.example""#,
            r#""name": "x""#,
            r#""repository": "https://github.com/b""#,
            r#""repository": "https://c.example""#,
            r#""repository": "https://a.example""#,
        ];
        let kept = filter_lines(lines.iter().copied());
        let mut cursor = lines.iter();
        for line in &kept {
            assert!(cursor.any(|candidate| candidate == line));
        }
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn filtering_is_idempotent() {
        let lines = [
            r#""repository": "https://a.example""#,
            r#""repository": "https://modeldb.example/2""#,
            r#""keywords": ["x"]"#,
            r#""repository": "https://b.example""#,
        ];
        let once = filter_lines(lines);
        let twice = filter_lines(once.iter().copied());
        assert_eq!(once, twice);
    }
}
