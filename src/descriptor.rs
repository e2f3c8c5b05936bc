//! The parsed repository descriptor and its small vocabulary types.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;

/// Kind of version control system.
///
/// Only Git is classified. Everything else stays `Unknown`, which is written
/// as the empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Kind {
    Git,
    #[default]
    Unknown,
}

impl Kind {
    fn from_name(s: &str) -> Self {
        if s.eq_ignore_ascii_case("git") {
            Self::Git
        } else {
            Self::Unknown
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Git => "git",
            Self::Unknown => "",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<String> for Kind {
    fn from(s: String) -> Self {
        Self::from_name(&s)
    }
}

impl From<Kind> for &'static str {
    fn from(kind: Kind) -> Self {
        kind.as_str()
    }
}

/// Transport used when rendering a clone URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    Ssh,
    Https,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ssh => write!(f, "ssh"),
            Self::Https => write!(f, "https"),
        }
    }
}

impl FromStr for Protocol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ssh") {
            Ok(Self::Ssh)
        } else if s.eq_ignore_ascii_case("https") {
            Ok(Self::Https)
        } else {
            Err(Error::UnknownProtocol {
                protocol: s.to_string(),
            })
        }
    }
}

/// Hosting service family a descriptor was parsed as.
///
/// Descriptors from hosts without a dedicated rule have no provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    GitHub,
    GitLab,
    Bitbucket,
    Azure,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GitHub => write!(f, "GitHub"),
            Self::GitLab => write!(f, "GitLab"),
            Self::Bitbucket => write!(f, "Bitbucket"),
            Self::Azure => write!(f, "Azure DevOps"),
        }
    }
}

/// A repository reference normalized from a URL.
///
/// Built in one pass by [`crate::parse`] or [`crate::Registry::parse`] and
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryDescriptor {
    pub(crate) id: String,
    pub(crate) kind: Kind,
    pub(crate) host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) provider: Option<Provider>,
    pub(crate) username: String,
    pub(crate) name: String,
    pub(crate) full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) committish: Option<String>,
    pub(crate) raw: String,
}

impl RepositoryDescriptor {
    /// Unique identifier, `<host>/<full_name>`.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Public host of the repository, including a non-default port.
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn provider(&self) -> Option<Provider> {
        self.provider
    }

    /// Owner of the repository. Contains `/` for nested GitLab groups and
    /// Azure `org/project` pairs; empty on generic hosts.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Base name of the repository without a `.git` suffix.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Branch, tag or commit referenced by the URL, if any.
    pub fn committish(&self) -> Option<&str> {
        self.committish.as_deref()
    }

    /// The input string exactly as given to the parser.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for RepositoryDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
