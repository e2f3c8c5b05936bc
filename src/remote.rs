//! Clone URL rendering for parsed descriptors.

use url::Url;

use crate::descriptor::Protocol;
use crate::descriptor::Provider;
use crate::descriptor::RepositoryDescriptor;
use crate::error::Error;
use crate::host::AZURE_HOST;
use crate::host::AZURE_SSH_HOST;
use crate::preprocess::is_ssh_shorthand;

impl RepositoryDescriptor {
    /// Returns a clone URL for this repository in the given protocol.
    ///
    /// Known hosts always render a canonical URL. For other hosts the raw
    /// input is returned when it already uses the requested protocol, and
    /// [`Error::UnsupportedProtocol`] otherwise.
    pub fn remote(&self, protocol: Protocol) -> Result<String, Error> {
        let Some(provider) = self.provider else {
            return self.remote_unknown_host(protocol);
        };

        let remote = match (provider, protocol) {
            (Provider::Azure, Protocol::Ssh) => self.azure_ssh_remote(),
            (Provider::Azure, Protocol::Https) => self.azure_https_remote(),
            (_, Protocol::Ssh) => self.ssh_remote(),
            (_, Protocol::Https) => self.https_remote(),
        };
        Ok(remote)
    }

    fn remote_unknown_host(&self, protocol: Protocol) -> Result<String, Error> {
        let matches = match protocol {
            Protocol::Ssh => is_ssh_shorthand(&self.raw),
            Protocol::Https => Url::parse(&self.raw).is_ok_and(|url| url.scheme() == "https"),
        };

        if matches {
            Ok(self.raw.clone())
        } else {
            Err(Error::UnsupportedProtocol {
                protocol,
                raw: self.raw.clone(),
            })
        }
    }

    // git@github.com:go-git/go-git.git
    fn ssh_remote(&self) -> String {
        format!("git@{}:{}/{}.git", self.host, self.username, self.name)
    }

    // https://gitlab.com/commento/docs.git
    fn https_remote(&self) -> String {
        format!("https://{}/{}/{}.git", self.host, self.username, self.name)
    }

    // git@ssh.dev.azure.com:v3/contoso/Fabrikam/Website
    fn azure_ssh_remote(&self) -> String {
        let host = if self.host == AZURE_HOST {
            AZURE_SSH_HOST
        } else {
            self.host.as_str()
        };
        format!("git@{host}:v3/{}/{}", self.username, self.name)
    }

    // https://dev.azure.com/contoso/Fabrikam/_git/Website
    fn azure_https_remote(&self) -> String {
        format!("https://{}/{}/_git/{}", self.host, self.username, self.name)
    }
}
