//! Bitbucket Cloud URLs.

use url::Url;

use super::Extracted;
use super::HostRule;
use super::PathSegments;
use super::strip_dot_git;
use crate::descriptor::Provider;
use crate::error::RuleError;

/// `bitbucket.org/<owner>/<repo>[/src/<ref>]`.
pub struct Bitbucket;

impl HostRule for Bitbucket {
    fn name(&self) -> &'static str {
        "bitbucket"
    }

    fn provider(&self) -> Option<Provider> {
        Some(Provider::Bitbucket)
    }

    fn extract(&self, url: &Url) -> Result<Extracted, RuleError> {
        let segments = PathSegments::of(url);
        let parts = segments.as_strs();
        let [_, owner, repo, rest @ ..] = parts.as_slice() else {
            return Err(RuleError::UnknownUrlFormat);
        };

        let mut extracted = Extracted::owned(*owner, strip_dot_git(repo));
        if let [marker, reference, ..] = rest
            && matches!(*marker, "src" | "commits" | "branch")
            && !reference.is_empty()
        {
            extracted.committish = Some((*reference).to_string());
        }

        Ok(extracted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(url: &str) -> Result<Extracted, RuleError> {
        Bitbucket.extract(&Url::parse(url).unwrap())
    }

    #[test]
    fn owner_and_repo() {
        let got = extract("https://bitbucket.org/mcuadros/discovery-rest.git").unwrap();
        assert_eq!(got.username, "mcuadros");
        assert_eq!(got.name, "discovery-rest");
        assert_eq!(got.full_name, "mcuadros/discovery-rest");
    }

    #[test]
    fn src_ref_takes_one_segment() {
        let got = extract("https://bitbucket.org/foo/bar/src/main/docs/README.md").unwrap();
        assert_eq!(got.committish.as_deref(), Some("main"));
    }

    #[test]
    fn commits_and_branch_refs() {
        let got = extract("https://bitbucket.org/foo/bar/commits/abc123").unwrap();
        assert_eq!(got.committish.as_deref(), Some("abc123"));
        let got = extract("https://bitbucket.org/foo/bar/branch/feature").unwrap();
        assert_eq!(got.committish.as_deref(), Some("feature"));
    }

    #[test]
    fn marker_with_trailing_slash_has_no_ref() {
        let got = extract("https://bitbucket.org/foo/bar/src/").unwrap();
        assert_eq!(got.full_name, "foo/bar");
        assert_eq!(got.committish, None);
    }

    #[test]
    fn encoded_segments_are_decoded() {
        let got = extract("https://bitbucket.org/foo/my%20repo/branch/fix%2Flogin").unwrap();
        assert_eq!(got.name, "my repo");
        assert_eq!(got.committish.as_deref(), Some("fix/login"));
    }

    #[test]
    fn unrelated_subpage() {
        let got = extract("https://bitbucket.org/foo/bar/pull-requests/3").unwrap();
        assert_eq!(got.committish, None);
    }

    #[test]
    fn missing_repo() {
        assert_eq!(
            extract("https://bitbucket.org/foo"),
            Err(RuleError::UnknownUrlFormat)
        );
    }
}
