//! Parse VCS repository URLs into a canonical descriptor.
//!
//! Accepts the many ways a repository gets written down (HTTPS links, SSH
//! shorthand, `git://` URLs, API resource paths, links into a tree or tag)
//! and reduces them to owner, name, host and an optional committish. The
//! reverse direction renders a clone URL for SSH or HTTPS.
//!
//! ```
//! let repo = vcsurl::parse("git@github.com:go-git/go-git.git").unwrap();
//! assert_eq!(repo.id(), "github.com/go-git/go-git");
//! assert_eq!(
//!     repo.remote(vcsurl::Protocol::Https).unwrap(),
//!     "https://github.com/go-git/go-git.git"
//! );
//! ```

pub mod config;
pub mod descriptor;
pub mod error;
pub mod host;
pub mod preprocess;
mod remote;

pub use crate::descriptor::Kind;
pub use crate::descriptor::Protocol;
pub use crate::descriptor::Provider;
pub use crate::descriptor::RepositoryDescriptor;
pub use crate::error::Error;
pub use crate::host::Registry;

/// Parse `raw` with the built-in host table.
///
/// See [`Registry::parse`] for the accepted formats.
pub fn parse(raw: &str) -> Result<RepositoryDescriptor, Error> {
    Registry::builtin().parse(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert!(matches!(parse(""), Err(Error::EmptyInput)));
    }

    #[test]
    fn bare_token_fails() {
        assert!(matches!(
            parse("foo"),
            Err(Error::UnableToParse { input }) if input == "foo"
        ));
    }

    #[test]
    fn malformed_authority() {
        assert!(matches!(
            parse("http://[::1/foo"),
            Err(Error::InvalidUrl { input, .. }) if input == "http://[::1/foo"
        ));
    }

    #[test]
    fn scheme_less_github() {
        let repo = parse("github.com/alice/libfoo").unwrap();
        assert_eq!(repo.kind(), Kind::Git);
        assert_eq!(repo.id(), "github.com/alice/libfoo");
        assert_eq!(repo.name(), "libfoo");
        assert_eq!(repo.host(), "github.com");
        assert_eq!(repo.provider(), Some(Provider::GitHub));
        assert_eq!(repo.raw(), "github.com/alice/libfoo");
    }

    #[test]
    fn github_variants_converge() {
        for url in [
            "github.com/user/repo",
            "http://github.com/user/repo",
            "http://github.com/user/repo.git",
            "https://github.com/user/repo",
            "https://github.com/user/repo.git",
            "https://github.com/user/repo#asdf",
            "git://github.com/user/repo",
            "git://github.com/user/repo.git",
            "git+ssh://github.com/user/repo",
            "git+ssh://github.com/user/repo.git",
            "git@github.com:user/repo",
            "git@github.com:user/repo.git",
            "ssh://git@github.com/user/repo.git",
            "https://api.github.com/repos/user/repo",
        ] {
            let repo = parse(url).unwrap();
            assert_eq!(repo.id(), "github.com/user/repo", "{url}");
            assert_eq!(repo.username(), "user", "{url}");
            assert_eq!(repo.name(), "repo", "{url}");
            assert_eq!(repo.full_name(), "user/repo", "{url}");
            assert_eq!(repo.kind(), Kind::Git, "{url}");
            assert_eq!(repo.raw(), url);
        }
    }

    #[test]
    fn dot_git_stripped_once() {
        let with = parse("https://github.com/foo/bar.git").unwrap();
        let without = parse("https://github.com/foo/bar").unwrap();
        assert_eq!(with.name(), "bar");
        assert_eq!(with.name(), without.name());
        assert_eq!(with.id(), without.id());
    }

    #[test]
    fn ssh_and_https_converge() {
        let ssh = parse("git@github.com:foo/bar.git").unwrap();
        let https = parse("https://github.com/foo/bar").unwrap();
        assert_eq!(ssh.full_name(), "foo/bar");
        assert_eq!(ssh.full_name(), https.full_name());
    }

    #[test]
    fn github_tree_committish() {
        let repo = parse("https://github.com/foo/bar/tree/qux/baz").unwrap();
        assert_eq!(repo.committish(), Some("qux/baz"));
        assert_eq!(repo.id(), "github.com/foo/bar");
    }

    #[test]
    fn github_release_committish() {
        let repo = parse("https://github.com/go-enry/go-enry/releases/tag/v2.4.1").unwrap();
        assert_eq!(repo.name(), "go-enry");
        assert_eq!(repo.committish(), Some("v2.4.1"));
    }

    #[test]
    fn encoded_path_matches_plain_path() {
        let encoded = parse("https://github.com/foo/b%61r").unwrap();
        let plain = parse("https://github.com/foo/bar").unwrap();
        assert_eq!(encoded.id(), plain.id());

        let repo = parse("https://github.com/foo/bar/tree/feature%2Fx").unwrap();
        assert_eq!(repo.committish(), Some("feature/x"));
    }

    #[test]
    fn empty_ref_is_omitted_from_json() {
        let repo = parse("https://github.com/foo/bar/tree/").unwrap();
        assert_eq!(repo.committish(), None);
        let json: serde_json::Value = serde_json::to_value(&repo).unwrap();
        assert!(json.get("committish").is_none());
    }

    #[test]
    fn gitlab_subgroups() {
        let repo = parse("https://gitlab.com/foo/bar/qux").unwrap();
        assert_eq!(repo.username(), "foo/bar");
        assert_eq!(repo.name(), "qux");
        assert_eq!(repo.id(), "gitlab.com/foo/bar/qux");

        let repo = parse("https://gitlab.com/foo/qux/bar/-/tags/baz").unwrap();
        assert_eq!(repo.name(), "bar");
        assert_eq!(repo.full_name(), "foo/qux/bar");
        assert_eq!(repo.committish(), Some("baz"));
    }

    #[test]
    fn azure_hosts_report_public_host() {
        let repo = parse("git@vs-ssh.visualstudio.com:v3/contoso/Fabrikam/Website").unwrap();
        assert_eq!(repo.host(), "dev.azure.com");
        assert_eq!(repo.id(), "dev.azure.com/contoso/Fabrikam/Website");
        assert_eq!(repo.provider(), Some(Provider::Azure));
    }

    #[test]
    fn unknown_host_fallback() {
        let repo = parse("git://git.savannah.gnu.org/bash.git").unwrap();
        assert_eq!(repo.host(), "git.savannah.gnu.org");
        assert_eq!(repo.name(), "bash");
        assert_eq!(repo.full_name(), "bash");
        assert_eq!(repo.username(), "");
        assert_eq!(repo.kind(), Kind::Git);
        assert_eq!(repo.provider(), None);
        assert_eq!(repo.id(), "git.savannah.gnu.org/bash");
        assert!(matches!(
            repo.remote(Protocol::Ssh),
            Err(Error::UnsupportedProtocol { .. })
        ));
    }

    #[test]
    fn unknown_host_https_remote_echoes_raw() {
        let repo = parse("https://hg.example.org/projects/thing").unwrap();
        assert_eq!(repo.kind(), Kind::Unknown);
        assert_eq!(repo.full_name(), "projects/thing");
        assert_eq!(
            repo.remote(Protocol::Https).unwrap(),
            "https://hg.example.org/projects/thing"
        );
    }

    #[test]
    fn scheme_less_unknown_host() {
        let repo = parse("code.google.com/p/go").unwrap();
        assert_eq!(repo.id(), "code.google.com/p/go");
        assert_eq!(repo.name(), "go");
        assert_eq!(repo.kind(), Kind::Unknown);
    }

    #[test]
    fn empty_path_on_unknown_host() {
        assert!(matches!(
            parse("git://example.com"),
            Err(Error::EmptyPath { input }) if input == "git://example.com"
        ));
    }

    #[test]
    fn known_host_without_repo() {
        assert!(matches!(
            parse("https://gitlab.com/foo"),
            Err(Error::UnknownUrlFormat { .. })
        ));
        assert!(matches!(
            parse("https://api.github.com/users/foo"),
            Err(Error::UnknownUrlFormat { .. })
        ));
    }

    #[test]
    fn known_host_with_empty_name() {
        assert!(matches!(
            parse("https://github.com/foo/"),
            Err(Error::UnableToParse { .. })
        ));
    }

    #[test]
    fn full_name_ends_with_name() {
        for url in [
            "https://github.com/foo/bar.git",
            "https://gitlab.com/a/b/c/d/-/tree/main",
            "https://bitbucket.org/foo/bar/src/main",
            "https://dev.azure.com/org/proj/_git/repo",
            "https://example.com/a/b/c.git/",
        ] {
            let repo = parse(url).unwrap();
            assert!(
                repo.full_name().ends_with(&format!("/{}", repo.name()))
                    || repo.full_name() == repo.name(),
                "{url}"
            );
        }
    }

    #[test]
    fn https_remote_round_trips() {
        for url in [
            "git@github.com:foo/bar.git",
            "https://github.com/foo/bar/tree/main",
            "https://api.github.com/repos/foo/bar",
            "https://gitlab.com/foo/bar/qux/-/tags/v1",
            "git@gitlab.com:foo/bar.git",
            "https://bitbucket.org/foo/bar/src/main",
            "git@ssh.dev.azure.com:v3/org/proj/repo",
            "https://dev.azure.com/org/proj/_git/repo",
        ] {
            let first = parse(url).unwrap();
            for protocol in [Protocol::Https, Protocol::Ssh] {
                let remote = first.remote(protocol).unwrap();
                let second = parse(&remote).unwrap();
                assert_eq!(second.username(), first.username(), "{url} via {remote}");
                assert_eq!(second.name(), first.name(), "{url} via {remote}");
                assert_eq!(second.full_name(), first.full_name(), "{url} via {remote}");
                assert_eq!(second.id(), first.id(), "{url} via {remote}");
            }
        }
    }

    #[test]
    fn descriptor_serializes_to_json() {
        let repo = parse("https://github.com/foo/bar/commit/abc").unwrap();
        let json: serde_json::Value = serde_json::to_value(&repo).unwrap();
        assert_eq!(json["id"], "github.com/foo/bar");
        assert_eq!(json["kind"], "git");
        assert_eq!(json["provider"], "github");
        assert_eq!(json["committish"], "abc");

        let repo = parse("https://example.com/foo/bar").unwrap();
        let json: serde_json::Value = serde_json::to_value(&repo).unwrap();
        assert_eq!(json["kind"], "");
        assert!(json.get("provider").is_none());
        assert!(json.get("committish").is_none());
    }

    #[test]
    fn registry_is_shared_across_threads() {
        let handles: Vec<_> = ["github.com/a/b", "gitlab.com/c/d/e", "bitbucket.org/f/g"]
            .into_iter()
            .map(|url| std::thread::spawn(move || parse(url).map(|r| r.id().to_string())))
            .collect();
        let ids: Vec<String> = handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect();
        assert_eq!(
            ids,
            ["github.com/a/b", "gitlab.com/c/d/e", "bitbucket.org/f/g"]
        );
    }
}
