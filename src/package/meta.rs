use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::QueryError;

/// Install state of a package as recorded by the package database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstallState {
    #[default]
    NotInstalled,
    Installed,
    Unpacked,
    HalfUnpacked,
    ConfigFiles,
}

impl InstallState {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstallState::NotInstalled => "not-installed",
            InstallState::Installed => "installed",
            InstallState::Unpacked => "unpacked",
            InstallState::HalfUnpacked => "half-unpacked",
            InstallState::ConfigFiles => "config-files",
        }
    }
}

impl fmt::Display for InstallState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstallState {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not-installed" => Ok(InstallState::NotInstalled),
            "installed" => Ok(InstallState::Installed),
            "unpacked" => Ok(InstallState::Unpacked),
            "half-unpacked" => Ok(InstallState::HalfUnpacked),
            "config-files" => Ok(InstallState::ConfigFiles),
            other => Err(QueryError::MalformedRecord(format!(
                "unknown install state `{}'",
                other
            ))),
        }
    }
}

/// A package record exactly as stored on disk.
///
/// Every field is optional so that a single bad record does not make the
/// whole registry or index unreadable; validation happens when converting
/// into [`PackageMetadata`].
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pkgver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default)]
    pub automatic_install: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provides: Vec<String>,
}

/// Read-only view of one package's attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMetadata {
    /// Package identity, shaped like `name-version_revision`.
    pub identity: String,
    pub description: String,
    pub state: InstallState,
    pub automatic_install: bool,
    /// Virtual packages this package declares it provides.
    pub provides: Vec<String>,
}

impl PackageMetadata {
    pub fn new(identity: &str, description: &str, state: InstallState) -> Self {
        Self {
            identity: identity.to_string(),
            description: description.to_string(),
            state,
            automatic_install: false,
            provides: vec![],
        }
    }
}

impl TryFrom<&RawRecord> for PackageMetadata {
    type Error = QueryError;

    fn try_from(raw: &RawRecord) -> Result<Self, Self::Error> {
        let identity = match raw.pkgver.as_deref() {
            Some(pkgver) if !pkgver.is_empty() => pkgver,
            _ => {
                return Err(QueryError::MalformedRecord(
                    "record has no pkgver".to_string(),
                ));
            }
        };
        let Some(description) = raw.short_desc.as_deref() else {
            return Err(QueryError::MalformedRecord(format!(
                "{} has no short_desc",
                identity
            )));
        };
        // Unknown states read as not installed; the record stays usable.
        let state = match raw.state.as_deref() {
            Some(token) => token.parse().unwrap_or_else(|e| {
                debug!("{}: {}, treating as not installed", identity, e);
                InstallState::NotInstalled
            }),
            None => InstallState::NotInstalled,
        };

        Ok(PackageMetadata {
            identity: identity.to_string(),
            description: description.to_string(),
            state,
            automatic_install: raw.automatic_install,
            provides: raw.provides.clone(),
        })
    }
}
