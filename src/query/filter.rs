use std::str::FromStr;

use crate::error::QueryError;
use crate::package::{InstallState, PackageMetadata};

/// Install state selected for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateFilter {
    /// Only fully installed packages.
    #[default]
    Default,
    Only(InstallState),
}

impl StateFilter {
    /// Parse an optional state argument; `None` selects the default filter.
    pub fn parse(token: Option<&str>) -> Result<Self, QueryError> {
        match token {
            Some(token) => token.parse(),
            None => Ok(StateFilter::Default),
        }
    }

    pub fn includes(&self, record: &PackageMetadata) -> bool {
        match self {
            StateFilter::Default => record.state == InstallState::Installed,
            StateFilter::Only(state) => record.state == *state,
        }
    }
}

impl FromStr for StateFilter {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let state = match s {
            "installed" => InstallState::Installed,
            "unpacked" => InstallState::Unpacked,
            "half-unpacked" => InstallState::HalfUnpacked,
            "config-files" => InstallState::ConfigFiles,
            other => return Err(QueryError::InvalidStateToken(other.to_string())),
        };
        Ok(StateFilter::Only(state))
    }
}
