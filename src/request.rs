//! Decoding of `fieldlogic://open?file=<name>&t=<seconds>` URIs.
//!
//! Only the query matters. Scheme, host and path are never parsed or
//! validated, so anything carrying a `file` parameter after `?` is handled the
//! same way.

use url::form_urlencoded;

use crate::error::LauncherError;

/// Query key holding the media file name, relative to the media root
pub const FILE_KEY: &str = "file";
/// Query key holding the start offset in seconds
pub const START_KEY: &str = "t";
/// Start offset used when `t` is absent
pub const DEFAULT_START_OFFSET: &str = "0";

/// What the link asked for: a file and where to start playing it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    filename: String,
    start_offset: String,
}

impl Request {
    /// Build a request directly. Returns `MissingFilename` for an empty name.
    pub fn new(
        filename: impl Into<String>,
        start_offset: impl Into<String>,
    ) -> Result<Self, LauncherError> {
        let filename = filename.into();
        if filename.is_empty() {
            return Err(LauncherError::MissingFilename);
        }
        Ok(Request {
            filename,
            start_offset: start_offset.into(),
        })
    }

    /// Decoded `file` value, never empty
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Decoded `t` value exactly as given, or `"0"`
    pub fn start_offset(&self) -> &str {
        &self.start_offset
    }

    /// The start offset as seconds, if it is a finite non-negative number.
    /// The raw text is what gets passed to the player either way.
    pub fn start_seconds(&self) -> Option<f64> {
        self.start_offset
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|secs| secs.is_finite() && *secs >= 0.0)
    }
}

/// Parse a launcher URI into a `Request`.
///
/// The query is everything after the first `?`, up to any `#` fragment.
/// Values are form-urlencoded (`%XX` escapes, `+` as space) and otherwise kept
/// verbatim, whitespace included. When a key repeats, the first non-empty
/// value wins; blank values count as absent.
pub fn parse_request(uri: &str) -> Result<Request, LauncherError> {
    let without_fragment = uri.trim_start().split('#').next().unwrap_or_default();
    let query = without_fragment
        .split_once('?')
        .map(|(_, query)| query)
        .unwrap_or_default();

    let mut filename: Option<String> = None;
    let mut start_offset: Option<String> = None;

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        let slot = match &*key {
            FILE_KEY => &mut filename,
            START_KEY => &mut start_offset,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.into_owned());
        }
    }

    let filename = filename.ok_or(LauncherError::MissingFilename)?;
    let start_offset = start_offset.unwrap_or_else(|| DEFAULT_START_OFFSET.to_string());

    Request::new(filename, start_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file_and_time() {
        let request = parse_request("fieldlogic://open?file=interview_01.webm&t=15.1").unwrap();
        assert_eq!(request.filename(), "interview_01.webm");
        assert_eq!(request.start_offset(), "15.1");
        assert_eq!(request.start_seconds(), Some(15.1));
    }

    #[test]
    fn test_missing_time_defaults_to_zero() {
        let request = parse_request("fieldlogic://open?file=clip.mp4").unwrap();
        assert_eq!(request.start_offset(), "0");
    }

    #[test]
    fn test_percent_and_plus_decoding() {
        let request = parse_request("fieldlogic://open?file=my%20file.webm").unwrap();
        assert_eq!(request.filename(), "my file.webm");

        let request = parse_request("fieldlogic://open?file=my+file.webm").unwrap();
        assert_eq!(request.filename(), "my file.webm");

        let request = parse_request("fieldlogic://open?file=site%2Fa%2Fclip.webm").unwrap();
        assert_eq!(request.filename(), "site/a/clip.webm");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let request =
            parse_request("fieldlogic://open?file=first.webm&file=second.webm&t=3&t=9").unwrap();
        assert_eq!(request.filename(), "first.webm");
        assert_eq!(request.start_offset(), "3");
    }

    #[test]
    fn test_blank_values_count_as_absent() {
        let request = parse_request("fieldlogic://open?file=&file=a.webm&t=").unwrap();
        assert_eq!(request.filename(), "a.webm");
        assert_eq!(request.start_offset(), "0");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(matches!(
            parse_request("fieldlogic://open?t=12"),
            Err(LauncherError::MissingFilename)
        ));
        assert!(matches!(
            parse_request("fieldlogic://open?file=&t=12"),
            Err(LauncherError::MissingFilename)
        ));
        assert!(matches!(
            parse_request("fieldlogic://open"),
            Err(LauncherError::MissingFilename)
        ));
    }

    #[test]
    fn test_scheme_and_host_are_not_checked() {
        let request = parse_request("other://whatever/path?t=2&file=x.wav").unwrap();
        assert_eq!(request.filename(), "x.wav");
        assert_eq!(request.start_offset(), "2");
    }

    #[test]
    fn test_authority_and_scheme_are_not_validated() {
        let request = parse_request("fieldlogic://bad host?file=a.webm").unwrap();
        assert_eq!(request.filename(), "a.webm");

        let request = parse_request("open?file=a.webm&t=4").unwrap();
        assert_eq!(request.filename(), "a.webm");
        assert_eq!(request.start_offset(), "4");
    }

    #[test]
    fn test_input_without_query_has_no_filename() {
        assert!(matches!(
            parse_request("file=clip.mp4"),
            Err(LauncherError::MissingFilename)
        ));
        assert!(matches!(
            parse_request(""),
            Err(LauncherError::MissingFilename)
        ));
    }

    #[test]
    fn test_offset_whitespace_is_kept() {
        let request = parse_request("fieldlogic://open?file=a.webm&t=1 ").unwrap();
        assert_eq!(request.start_offset(), "1 ");
        assert_eq!(request.start_seconds(), Some(1.0));
    }

    #[test]
    fn test_fragment_is_not_part_of_query() {
        let request = parse_request("fieldlogic://open?file=a.webm#t=9").unwrap();
        assert_eq!(request.filename(), "a.webm");
        assert_eq!(request.start_offset(), "0");

        assert!(matches!(
            parse_request("fieldlogic://open#?file=a.webm"),
            Err(LauncherError::MissingFilename)
        ));
    }

    #[test]
    fn test_non_numeric_offset_passes_through() {
        let request = parse_request("fieldlogic://open?file=a.webm&t=soon").unwrap();
        assert_eq!(request.start_offset(), "soon");
        assert_eq!(request.start_seconds(), None);

        let request = parse_request("fieldlogic://open?file=a.webm&t=-4").unwrap();
        assert_eq!(request.start_offset(), "-4");
        assert_eq!(request.start_seconds(), None);
    }

    #[test]
    fn test_request_new_rejects_empty_filename() {
        assert!(matches!(
            Request::new("", "0"),
            Err(LauncherError::MissingFilename)
        ));
    }
}
