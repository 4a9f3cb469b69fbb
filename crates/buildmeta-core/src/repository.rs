//! Repository entry classification.
//!
//! The configuration carries repositories as plain strings. Adapters turn
//! each one into a [`RepositorySpec`] before registering it with the host.

use serde::Serialize;
use url::Url;

use crate::{Error, Result};

/// URL schemes accepted for custom repositories.
pub const URL_SCHEMES: [&str; 6] = ["http://", "https://", "file://", "s3://", "gcs://", "sftp://"];

/// A repository the host knows how to register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "url")]
pub enum RepositorySpec {
    MavenCentral,
    Google,
    GradlePluginPortal,
    MavenLocal,
    /// A custom Maven repository.
    Url(Url),
}

impl RepositorySpec {
    /// Classify an entry. Aliases match case-insensitively; anything else
    /// must be a URL with one of [`URL_SCHEMES`].
    pub fn parse(entry: &str) -> Result<Self> {
        match entry.to_lowercase().as_str() {
            "mavencentral" => return Ok(RepositorySpec::MavenCentral),
            "google" => return Ok(RepositorySpec::Google),
            "gradlepluginportal" | "gradle-plugin-portal" => {
                return Ok(RepositorySpec::GradlePluginPortal);
            }
            "local" | "mavenlocal" | "maven-local" => return Ok(RepositorySpec::MavenLocal),
            _ => {}
        }

        if !URL_SCHEMES.iter().any(|scheme| entry.starts_with(scheme)) {
            return Err(Error::InvalidRepository(format!(
                "'{}' is neither a known repository alias nor a supported URL",
                entry
            )));
        }

        Url::parse(entry)
            .map(RepositorySpec::Url)
            .map_err(|e| Error::InvalidRepository(format!("'{}': {}", entry, e)))
    }

    pub fn is_alias(&self) -> bool {
        !matches!(self, RepositorySpec::Url(_))
    }
}

impl std::fmt::Display for RepositorySpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepositorySpec::MavenCentral => write!(f, "mavenCentral"),
            RepositorySpec::Google => write!(f, "google"),
            RepositorySpec::GradlePluginPortal => write!(f, "gradlePluginPortal"),
            RepositorySpec::MavenLocal => write!(f, "mavenLocal"),
            RepositorySpec::Url(url) => write!(f, "{}", url),
        }
    }
}

impl std::str::FromStr for RepositorySpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        RepositorySpec::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_are_case_insensitive() {
        assert_eq!(
            RepositorySpec::parse("mavenCentral").unwrap(),
            RepositorySpec::MavenCentral
        );
        assert_eq!(
            RepositorySpec::parse("MAVENCENTRAL").unwrap(),
            RepositorySpec::MavenCentral
        );
        assert_eq!(RepositorySpec::parse("Google").unwrap(), RepositorySpec::Google);
        assert_eq!(
            RepositorySpec::parse("gradle-plugin-portal").unwrap(),
            RepositorySpec::GradlePluginPortal
        );
        assert_eq!(RepositorySpec::parse("local").unwrap(), RepositorySpec::MavenLocal);
        assert_eq!(
            RepositorySpec::parse("mavenLocal").unwrap(),
            RepositorySpec::MavenLocal
        );
    }

    #[test]
    fn test_supported_url_schemes() {
        for entry in [
            "https://repo.example.com/maven",
            "http://localhost:8081/repository",
            "file:///opt/m2",
            "s3://bucket/maven",
            "sftp://host/repo",
        ] {
            let spec = RepositorySpec::parse(entry).unwrap();
            assert!(!spec.is_alias(), "{} should be a URL", entry);
        }
    }

    #[test]
    fn test_unknown_entries_are_rejected() {
        for entry in ["jcenter", "ftp://host/repo", "repo.example.com", ""] {
            assert!(
                matches!(RepositorySpec::parse(entry), Err(Error::InvalidRepository(_))),
                "{} should be rejected",
                entry
            );
        }
    }
}
