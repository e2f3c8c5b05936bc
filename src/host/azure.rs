//! Azure DevOps URLs.
//!
//! SSH remotes use `v3/<org>/<project>/<repo>` on `ssh.dev.azure.com` or the
//! legacy `vs-ssh.visualstudio.com`; HTTPS remotes use
//! `<org>/<project>/_git/<repo>` on `dev.azure.com`. Both report the owner as
//! `<org>/<project>`.

use url::Url;

use super::AZURE_HOST;
use super::AZURE_LEGACY_SSH_HOST;
use super::AZURE_SSH_HOST;
use super::Extracted;
use super::HostRule;
use super::PathSegments;
use super::strip_dot_git;
use crate::descriptor::Provider;
use crate::error::RuleError;

pub struct Azure;

impl HostRule for Azure {
    fn name(&self) -> &'static str {
        "azure"
    }

    fn provider(&self) -> Option<Provider> {
        Some(Provider::Azure)
    }

    fn extract(&self, url: &Url) -> Result<Extracted, RuleError> {
        let segments = PathSegments::of(url);
        let parts = segments.as_strs();
        // `_git` first: an organization may itself be called `v3`.
        let (org, project, repo) = match parts.as_slice() {
            [_, org, project, "_git", repo, ..] => (*org, *project, *repo),
            [_, "v3", org, project, repo, ..] => (*org, *project, *repo),
            _ => return Err(RuleError::UnknownUrlFormat),
        };

        let mut extracted = Extracted::owned(format!("{org}/{project}"), strip_dot_git(repo));
        if matches!(url.host_str(), Some(AZURE_SSH_HOST | AZURE_LEGACY_SSH_HOST)) {
            extracted.host = Some(AZURE_HOST.to_string());
        }

        Ok(extracted)
    }
}
