//! GitHub URLs, including `api.github.com/repos/...` resource paths.

use url::Url;

use super::Extracted;
use super::GITHUB_HOST;
use super::HostRule;
use super::PathSegments;
use super::strip_dot_git;
use crate::descriptor::Provider;
use crate::error::RuleError;

/// Path segments after `owner/repo` that are followed by a ref.
const COMMITTISH_MARKERS: [&str; 4] = ["commits", "commit", "tree", "branches"];

/// `github.com/<owner>/<repo>[/tree/<ref>...]`.
pub struct GitHub;

/// `api.github.com/repos/<owner>/<repo>`, reported as github.com.
pub struct GitHubApi;

impl HostRule for GitHub {
    fn name(&self) -> &'static str {
        "github"
    }

    fn provider(&self) -> Option<Provider> {
        Some(Provider::GitHub)
    }

    fn extract(&self, url: &Url) -> Result<Extracted, RuleError> {
        extract_parts(&PathSegments::of(url).as_strs())
    }
}

impl HostRule for GitHubApi {
    fn name(&self) -> &'static str {
        "github-api"
    }

    fn provider(&self) -> Option<Provider> {
        Some(Provider::GitHub)
    }

    fn extract(&self, url: &Url) -> Result<Extracted, RuleError> {
        let segments = PathSegments::of(url);
        let parts = segments.as_strs();
        if parts.get(1) != Some(&"repos") {
            return Err(RuleError::UnknownUrlFormat);
        }

        let mut extracted = extract_parts(&parts[1..])?;
        extracted.host = Some(GITHUB_HOST.to_string());
        Ok(extracted)
    }
}

/// Read owner, repo and committish from path segments laid out as
/// `["", owner, repo, marker, ref...]`.
fn extract_parts(parts: &[&str]) -> Result<Extracted, RuleError> {
    let [_, owner, repo, rest @ ..] = parts else {
        return Err(RuleError::UnknownUrlFormat);
    };

    let mut extracted = Extracted::owned(*owner, strip_dot_git(repo));
    let committish = match rest {
        [marker, reference @ ..]
            if !reference.is_empty() && COMMITTISH_MARKERS.contains(marker) =>
        {
            Some(reference.join("/"))
        }
        ["releases", _, tag, ..] => Some((*tag).to_string()),
        _ => None,
    };
    // `tree/` and `releases/tag/` name no ref.
    extracted.committish = committish.filter(|c| !c.is_empty());

    Ok(extracted)
}
