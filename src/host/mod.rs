//! Host dispatch and per-host extraction rules.
//!
//! Each supported host family implements [`HostRule`]. A [`Registry`] maps
//! exact host strings to a rule; hosts it does not know fall through to the
//! generic rule. The dispatcher never inspects rule internals, so adding a
//! host means registering another entry, not editing a match.

pub mod azure;
pub mod bitbucket;
pub mod generic;
pub mod github;
pub mod gitlab;

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use url::Url;

use self::azure::Azure;
use self::bitbucket::Bitbucket;
use self::generic::Generic;
use self::github::GitHub;
use self::github::GitHubApi;
use self::gitlab::GitLab;
use crate::descriptor::Kind;
use crate::descriptor::Provider;
use crate::descriptor::RepositoryDescriptor;
use crate::error::Error;
use crate::error::RuleError;
use crate::preprocess::preprocess;

pub const GITHUB_HOST: &str = "github.com";
pub const GITHUB_API_HOST: &str = "api.github.com";
pub const GITLAB_HOST: &str = "gitlab.com";
pub const BITBUCKET_HOST: &str = "bitbucket.org";
pub const AZURE_HOST: &str = "dev.azure.com";
pub const AZURE_SSH_HOST: &str = "ssh.dev.azure.com";
pub const AZURE_LEGACY_SSH_HOST: &str = "vs-ssh.visualstudio.com";

/// Fields a rule pulls out of a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extracted {
    /// Replacement for the URL's host, for API or SSH-only aliases.
    pub host: Option<String>,
    /// Overrides the kind pre-seeded from the registry.
    pub kind: Option<Kind>,
    pub username: String,
    pub name: String,
    pub full_name: String,
    pub committish: Option<String>,
}

impl Extracted {
    /// Owner and repository name, with `full_name` joined from both.
    pub fn owned(username: impl Into<String>, name: impl Into<String>) -> Self {
        let username = username.into();
        let name = name.into();
        let full_name = format!("{username}/{name}");
        Self {
            username,
            name,
            full_name,
            ..Self::default()
        }
    }
}

/// One host family's way of reading repository fields out of a URL.
pub trait HostRule: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// The family this rule belongs to, `None` for hosts with no known
    /// remote layout.
    fn provider(&self) -> Option<Provider>;

    fn extract(&self, url: &Url) -> Result<Extracted, RuleError>;
}

#[derive(Clone, Copy)]
struct HostEntry {
    rule: &'static dyn HostRule,
    kind: Kind,
}

/// Host-to-rule table used to parse URLs.
///
/// [`Registry::builtin`] covers the public hosting services. Extra hosts,
/// such as a self-managed GitLab, are added with [`Registry::with_alias`];
/// hosts with their own layout get a [`HostRule`] via [`Registry::with_rule`].
#[derive(Clone)]
pub struct Registry {
    hosts: HashMap<String, HostEntry>,
}

static BUILTIN: LazyLock<Registry> = LazyLock::new(|| {
    let entries: [(&str, &'static dyn HostRule); 7] = [
        (GITHUB_HOST, &GitHub),
        (GITHUB_API_HOST, &GitHubApi),
        (GITLAB_HOST, &GitLab),
        (BITBUCKET_HOST, &Bitbucket),
        (AZURE_HOST, &Azure),
        (AZURE_SSH_HOST, &Azure),
        (AZURE_LEGACY_SSH_HOST, &Azure),
    ];
    let hosts = entries
        .into_iter()
        .map(|(host, rule)| {
            (
                host.to_string(),
                HostEntry {
                    rule,
                    kind: Kind::Git,
                },
            )
        })
        .collect();
    Registry { hosts }
});

static GENERIC: HostEntry = HostEntry {
    rule: &Generic,
    kind: Kind::Unknown,
};

impl Registry {
    /// The shared table of public hosts.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// A copy of this registry that parses `host` with `rule`, pre-seeding
    /// descriptors with `kind`. Replaces any rule already registered for the
    /// host.
    #[must_use]
    pub fn with_rule(
        mut self,
        host: impl Into<String>,
        rule: &'static dyn HostRule,
        kind: Kind,
    ) -> Self {
        let host = host.into().to_ascii_lowercase();
        tracing::debug!(%host, rule = rule.name(), "registering host rule");
        self.hosts.insert(host, HostEntry { rule, kind });
        self
    }

    /// A copy of this registry that also parses `host` with `provider`'s
    /// rule. The host is kept as written; no canonical rewrite applies.
    #[must_use]
    pub fn with_alias(self, host: impl Into<String>, provider: Provider) -> Self {
        let rule: &'static dyn HostRule = match provider {
            Provider::GitHub => &GitHub,
            Provider::GitLab => &GitLab,
            Provider::Bitbucket => &Bitbucket,
            Provider::Azure => &Azure,
        };
        self.with_rule(host, rule, Kind::Git)
    }

    /// Whether `host` has a dedicated rule.
    pub fn is_known(&self, host: &str) -> bool {
        self.hosts.contains_key(host)
    }

    fn entry(&self, host: &str) -> HostEntry {
        self.hosts.get(host).copied().unwrap_or(GENERIC)
    }

    /// Parse a string that resembles a VCS repository URL.
    ///
    /// Accepts HTTPS/HTTP/`git://`/`git+ssh://` URLs, SSH shorthand
    /// (`git@host:owner/repo`), and scheme-less `host/owner/repo` strings.
    pub fn parse(&self, raw: &str) -> Result<RepositoryDescriptor, Error> {
        if raw.is_empty() {
            return Err(Error::EmptyInput);
        }

        let spec = preprocess(raw);
        let url = Url::parse(&spec).map_err(|source| Error::InvalidUrl {
            input: raw.to_string(),
            source,
        })?;
        let host = authority(&url);

        let entry = self.entry(&host);
        tracing::trace!(%raw, %host, rule = entry.rule.name(), "dispatching");

        let extracted = entry.rule.extract(&url).map_err(|err| {
            tracing::debug!(%raw, rule = entry.rule.name(), %err, "rule rejected URL");
            err.with_input(raw)
        })?;

        if extracted.name.is_empty() || extracted.full_name.is_empty() {
            return Err(RuleError::UnableToParse.with_input(raw));
        }

        let host = match extracted.host {
            Some(canonical) => {
                tracing::trace!(from = %host, to = %canonical, "rewrote host");
                canonical
            }
            None => host,
        };
        let id = format!("{host}/{}", extracted.full_name);

        Ok(RepositoryDescriptor {
            id,
            kind: extracted.kind.unwrap_or(entry.kind),
            host,
            provider: entry.rule.provider(),
            username: extracted.username,
            name: extracted.name,
            full_name: extracted.full_name,
            committish: extracted.committish,
            raw: raw.to_string(),
        })
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut hosts: Vec<_> = self
            .hosts
            .iter()
            .map(|(host, entry)| (host.as_str(), entry.rule.name()))
            .collect();
        hosts.sort_unstable();
        f.debug_struct("Registry").field("hosts", &hosts).finish()
    }
}

/// Host plus port, the port only when it differs from the scheme default.
fn authority(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}

/// A URL path split on `/`, each segment percent-decoded.
///
/// Splitting happens before decoding, so an encoded `%2F` stays inside its
/// segment.
pub(crate) struct PathSegments<'a> {
    decoded: Vec<Cow<'a, str>>,
}

impl<'a> PathSegments<'a> {
    pub(crate) fn of(url: &'a Url) -> Self {
        let decoded = url
            .path()
            .split('/')
            .map(|segment| percent_decode_str(segment).decode_utf8_lossy())
            .collect();
        Self { decoded }
    }

    /// Borrowed segments. Index 0 is the empty string before the leading
    /// slash.
    pub(crate) fn as_strs(&self) -> Vec<&str> {
        self.decoded.iter().map(AsRef::as_ref).collect()
    }
}

/// Remove one trailing `.git`.
pub(crate) fn strip_dot_git(segment: &str) -> &str {
    segment.strip_suffix(".git").unwrap_or(segment)
}
