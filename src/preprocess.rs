//! Rewrites SSH shorthand and scheme-less input into absolute URLs.
//!
//! `git@host:owner/repo` is not a URL and `github.com/owner/repo` has no
//! scheme, so neither can go to the URL parser as-is. This module knows
//! nothing about hosts; it only reshapes the string.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// `user@host:path`, with the host restricted to `[A-Za-z0-9-_.]`.
static SSH_SHORTHAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@/:\s]+@([a-zA-Z0-9\-_.]+):(.*)$").expect("SSH shorthand pattern is valid")
});

/// RFC 3986 scheme followed by its colon.
static SCHEME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.\-]*:").expect("scheme pattern is valid")
});

/// Whether `raw` is written as SSH shorthand (`git@host:path`).
pub fn is_ssh_shorthand(raw: &str) -> bool {
    SSH_SHORTHAND.is_match(raw)
}

/// Turn `raw` into a string with a URI scheme.
///
/// SSH shorthand becomes `git://host/path`; anything still lacking a scheme
/// gets `https://` prepended. Already-absolute URLs are borrowed unchanged.
pub fn preprocess(raw: &str) -> Cow<'_, str> {
    let spec = match SSH_SHORTHAND.captures(raw) {
        Some(caps) => {
            let host = &caps[1];
            let path = caps[2].trim_start_matches('/');
            Cow::Owned(format!("git://{host}/{path}"))
        }
        None => Cow::Borrowed(raw),
    };

    if SCHEME.is_match(&spec) {
        spec
    } else {
        Cow::Owned(format!("https://{spec}"))
    }
}
