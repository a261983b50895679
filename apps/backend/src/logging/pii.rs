use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// `scheme://user:password@` in connection strings
static URL_CREDENTIALS: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"(?P<scheme>[a-zA-Z][a-zA-Z0-9+.-]*://)[^/@\s:]+:[^/@\s]*@").unwrap()
});

/// `password=...`, `token=...` and similar key/value pairs
static SECRET_PARAMS: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"(?i)\b(?P<key>password|passwd|pwd|secret|token)=(?P<val>[^\s&;']+)").unwrap()
});

/// Masks credentials that database drivers like to echo back in error messages.
///
/// Order: URL userinfo first, then key/value secrets.
pub fn redact(input: &str) -> String {
    let urls = URL_CREDENTIALS.replace_all(input, "${scheme}***@");
    SECRET_PARAMS
        .replace_all(&urls, "${key}=[REDACTED]")
        .into_owned()
}

/// Wrapper that redacts on format, for use in tracing fields.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
