use miette::Diagnostic;

use crate::descriptor::Protocol;

/// Errors that can occur while parsing a repository URL or rendering a remote.
///
/// Every parse failure carries the original input so callers can report it
/// without keeping their own copy.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum Error {
    /// The input string was empty.
    #[error("empty URL")]
    EmptyInput,

    /// The URL resolved to an empty path on a host without a dedicated rule.
    #[error("parse {input:?}: empty path in URL")]
    EmptyPath { input: String },

    /// A host-specific rule did not find the path segments it requires.
    #[error("parse {input:?}: unknown URL format")]
    #[diagnostic(help("expected at least an owner and a repository name in the path"))]
    UnknownUrlFormat { input: String },

    /// Dispatch finished without a repository name.
    #[error("parse {input:?}: unable to determine name or full name")]
    UnableToParse { input: String },

    /// The preprocessed string was rejected by the URL parser.
    #[error("parse {input:?}: invalid URL")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    /// A transport other than SSH or HTTPS was requested.
    #[error("remote protocol should be SSH or HTTPS, got {protocol:?}")]
    #[diagnostic(help("use `ssh` or `https`"))]
    UnknownProtocol { protocol: String },

    /// The host is unknown and the raw input does not already have the
    /// requested transport's shape.
    #[error("unsupported remote protocol {protocol} for {raw:?}")]
    #[diagnostic(help(
        "remotes for unknown hosts can only echo the original URL in its own protocol"
    ))]
    UnsupportedProtocol { protocol: Protocol, raw: String },
}

/// Failure reported by a single host rule, before the input is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("empty path in URL")]
    EmptyPath,

    #[error("unknown URL format")]
    UnknownUrlFormat,

    #[error("unable to determine name or full name")]
    UnableToParse,
}

impl RuleError {
    /// Attach the original input to produce a public error.
    pub(crate) fn with_input(self, input: &str) -> Error {
        let input = input.to_string();
        match self {
            Self::EmptyPath => Error::EmptyPath { input },
            Self::UnknownUrlFormat => Error::UnknownUrlFormat { input },
            Self::UnableToParse => Error::UnableToParse { input },
        }
    }
}
