//! Search API location.

use std::fmt;
use std::path::{Path, PathBuf};

use url::{Host, Url};

use crate::error::{Error, InvalidInputError};

/// Which kind of search backend an [`ApiUrl`] points at.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Backend {
    /// A GitHub-compatible REST API.
    Rest,
    /// A directory holding a `repos.json` dump.
    Dump(PathBuf),
}

/// A validated location of a repository search backend.
///
/// `https://` locations, and `http://` on a loopback host, select the REST
/// backend. `file://` locations select a local dump directory.
///
/// # Example
///
/// ```
/// use reposearch_core::ApiUrl;
///
/// let api = ApiUrl::new("https://api.github.com").unwrap();
/// assert_eq!(api.endpoint("search/repositories"),
///            "https://api.github.com/search/repositories");
///
/// let local = ApiUrl::new("file:///tmp/repos").unwrap();
/// assert!(local.is_local());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl {
    url: Url,
    backend: Backend,
}

impl ApiUrl {
    /// The public GitHub REST API.
    pub const GITHUB: &'static str = "https://api.github.com";

    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let invalid = |reason: String| -> Error {
            InvalidInputError::ApiUrl {
                value: s.to_string(),
                reason,
            }
            .into()
        };

        let url = Url::parse(s).map_err(|e| invalid(e.to_string()))?;
        let backend = match url.scheme() {
            "https" => Backend::Rest,
            "http" if is_loopback(&url) => Backend::Rest,
            "http" => return Err(invalid("plain http is only allowed for localhost".into())),
            "file" => {
                let dir = url
                    .to_file_path()
                    .map_err(|()| invalid("not a local directory".into()))?;
                Backend::Dump(dir)
            }
            other => return Err(invalid(format!("unsupported scheme `{other}`"))),
        };

        Ok(Self { url, backend })
    }

    /// The public GitHub API location.
    pub fn github() -> Self {
        Self {
            url: Url::parse(Self::GITHUB).expect("static URL is valid"),
            backend: Backend::Rest,
        }
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    /// Returns true for a local dump backend.
    pub fn is_local(&self) -> bool {
        matches!(self.backend, Backend::Dump(_))
    }

    /// Dump directory of a `file://` location.
    pub fn dump_dir(&self) -> Option<&Path> {
        match &self.backend {
            Backend::Dump(dir) => Some(dir),
            Backend::Rest => None,
        }
    }

    pub fn host(&self) -> Option<&str> {
        self.url.host_str()
    }

    /// Full URL of `path` below this location's path.
    pub fn endpoint(&self, path: &str) -> String {
        let mut url = self.url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(path.split('/').filter(|segment| !segment.is_empty()));
        }
        url.into()
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(domain)) => domain == "localhost",
        Some(Host::Ipv4(ip)) => ip.is_loopback(),
        Some(Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}
