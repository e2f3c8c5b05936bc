//! Fallback for hosts without a dedicated rule.

use url::Url;

use super::Extracted;
use super::HostRule;
use super::PathSegments;
use super::strip_dot_git;
use crate::descriptor::Kind;
use crate::descriptor::Provider;
use crate::error::RuleError;

/// Uses the whole path as the full name and its last segment as the name.
///
/// The kind is Git whenever the URL text contains `git` anywhere, which also
/// matches hosts like `git.savannah.gnu.org` and paths with a `git` segment.
pub struct Generic;

impl HostRule for Generic {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn provider(&self) -> Option<Provider> {
        None
    }

    fn extract(&self, url: &Url) -> Result<Extracted, RuleError> {
        let path = url.path();
        if path.is_empty() {
            return Err(RuleError::EmptyPath);
        }

        let segments = PathSegments::of(url);
        let mut parts = segments.as_strs();
        if path.starts_with('/') {
            parts.remove(0);
        }
        while parts.last() == Some(&"") {
            parts.pop();
        }
        if let Some(last) = parts.last_mut() {
            *last = strip_dot_git(*last);
        }

        let kind = url.as_str().contains("git").then_some(Kind::Git);

        Ok(Extracted {
            kind,
            name: parts.last().copied().unwrap_or_default().to_string(),
            full_name: parts.join("/"),
            ..Extracted::default()
        })
    }
}
