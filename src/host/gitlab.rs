//! GitLab URLs with nested groups.
//!
//! GitLab repositories can live under any depth of subgroups, so the owner is
//! everything before the repository segment. The repository is the segment
//! right before the first literal `-`, which GitLab uses to separate the
//! project path from project pages (`/-/tree/main`, `/-/tags/v1`). Without a
//! `-`, the last segment is the repository.

use url::Url;

use super::Extracted;
use super::HostRule;
use super::PathSegments;
use super::strip_dot_git;
use crate::descriptor::Provider;
use crate::error::RuleError;

/// `gitlab.com/<group>[/<subgroup>...]/<repo>[/-/tree/<ref>...]`.
pub struct GitLab;

impl HostRule for GitLab {
    fn name(&self) -> &'static str {
        "gitlab"
    }

    fn provider(&self) -> Option<Provider> {
        Some(Provider::GitLab)
    }

    fn extract(&self, url: &Url) -> Result<Extracted, RuleError> {
        let segments = PathSegments::of(url);
        let parts = segments.as_strs();
        if parts.len() < 3 {
            return Err(RuleError::UnknownUrlFormat);
        }

        let separator = parts.iter().position(|p| *p == "-");
        let end = match separator {
            Some(index) => index,
            // A trailing slash leaves an empty last segment.
            None if parts.last() == Some(&"") => parts.len() - 1,
            None => parts.len(),
        };

        // Need at least ["", owner, repo] before the separator.
        if end < 3 {
            return Err(RuleError::UnknownUrlFormat);
        }

        let username = parts[1..end - 1].join("/");
        let mut extracted = Extracted::owned(username, strip_dot_git(parts[end - 1]));

        if let Some(index) = separator
            && let Some(object) = parts.get(index + 1)
            && matches!(*object, "tags" | "commit" | "tree")
        {
            let reference = parts[index + 2..].join("/");
            extracted.committish = Some(reference).filter(|r| !r.is_empty());
        }

        Ok(extracted)
    }
}
