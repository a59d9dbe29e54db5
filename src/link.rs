//! Helper for building fieldlogic:// deep links
//!
//! Transcript views link each segment back to its recording with
//! `fieldlogic://open?file=<name>&t=<seconds>`. These are the links the
//! launcher receives, so building them here keeps both ends agreeing on the
//! encoding.

use crate::request::{FILE_KEY, START_KEY};

/// Scheme and path of every deep link
pub const LINK_PREFIX: &str = "fieldlogic://open";

/// Build a deep link for `file` starting at `start_offset`.
///
/// Both values are percent-encoded, so names with spaces, `&` or `/` survive.
///
/// # Example
/// ```
/// use fieldlogic_launcher::link::deep_link;
/// let url = deep_link("my file.webm", "15.1");
/// assert_eq!(url, "fieldlogic://open?file=my%20file.webm&t=15.1");
/// ```
pub fn deep_link(file: &str, start_offset: &str) -> String {
    format!(
        "{}?{}={}&{}={}",
        LINK_PREFIX,
        FILE_KEY,
        urlencoding::encode(file),
        START_KEY,
        urlencoding::encode(start_offset)
    )
}
