//! API profiles.
//!
//! The statistics API has two deployments with overlapping but different
//! tool sets: the population API v1 (year ranges) and the statistics portal
//! API v2 (single years, time series, asylum decisions). A profile selects
//! the base URL, the default timeout and the catalog the server exposes.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::catalog::Operation;
use super::definitions::{
    ASYLUM_DECISIONS_V2, COUNTRIES_V1, DEMOGRAPHICS_V1, DEMOGRAPHICS_V2, IDPS_V1, POPULATION_V1,
    POPULATION_V2, SEARCH_COUNTRIES_V2, SOLUTIONS_V1, TIME_SERIES_V2,
};

const POPULATION_V1_TOOLS: &[Operation] = &[
    POPULATION_V1,
    DEMOGRAPHICS_V1,
    COUNTRIES_V1,
    SOLUTIONS_V1,
    IDPS_V1,
];

const PORTAL_V2_TOOLS: &[Operation] = &[
    POPULATION_V2,
    DEMOGRAPHICS_V2,
    SEARCH_COUNTRIES_V2,
    TIME_SERIES_V2,
    ASYLUM_DECISIONS_V2,
];

/// Which API deployment, and therefore which tool catalog, to serve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApiProfile {
    #[default]
    PopulationV1,
    PortalV2,
}

impl ApiProfile {
    pub const ALL: [ApiProfile; 2] = [Self::PopulationV1, Self::PortalV2];

    /// Name used in configuration (`MCP_API_PROFILE`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PopulationV1 => "population-v1",
            Self::PortalV2 => "portal-v2",
        }
    }

    pub fn base_url(self) -> &'static str {
        match self {
            Self::PopulationV1 => "https://api.unhcr.org/population/v1",
            Self::PortalV2 => "https://api.unhcr.org/statistics/v2",
        }
    }

    /// Request timeout used when none is configured.
    pub fn default_timeout(self) -> Option<Duration> {
        match self {
            Self::PopulationV1 => Some(Duration::from_secs(30)),
            Self::PortalV2 => None,
        }
    }

    /// The full tool catalog of this profile, in advertised order.
    pub fn operations(self) -> &'static [Operation] {
        match self {
            Self::PopulationV1 => POPULATION_V1_TOOLS,
            Self::PortalV2 => PORTAL_V2_TOOLS,
        }
    }

    pub fn find(self, name: &str) -> Option<&'static Operation> {
        self.operations().iter().find(|op| op.name == name)
    }
}

impl fmt::Display for ApiProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "population-v1" | "population" | "v1" => Ok(Self::PopulationV1),
            "portal-v2" | "portal" | "v2" => Ok(Self::PortalV2),
            other => Err(format!(
                "unknown API profile '{other}' (expected population-v1 or portal-v2)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_population_v1_tools() {
        let names: Vec<_> = ApiProfile::PopulationV1
            .operations()
            .iter()
            .map(|op| op.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "get_population_statistics",
                "get_demographics",
                "get_countries",
                "get_solutions",
                "get_idps",
            ]
        );
    }

    #[test]
    fn test_portal_v2_tools() {
        let names: Vec<_> = ApiProfile::PortalV2
            .operations()
            .iter()
            .map(|op| op.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "get_population_statistics",
                "get_demographics",
                "search_countries",
                "get_time_series",
                "get_asylum_decisions",
            ]
        );
    }

    #[test]
    fn test_tool_names_unique_per_profile() {
        for profile in ApiProfile::ALL {
            let names: HashSet<_> = profile.operations().iter().map(|op| op.name).collect();
            assert_eq!(names.len(), profile.operations().len(), "{profile}");
        }
    }

    #[test]
    fn test_find() {
        assert!(ApiProfile::PortalV2.find("get_time_series").is_some());
        assert!(ApiProfile::PopulationV1.find("get_time_series").is_none());
        assert!(ApiProfile::PopulationV1.find("get_idps").is_some());
    }

    #[test]
    fn test_parse_round_trip() {
        for profile in ApiProfile::ALL {
            assert_eq!(profile.as_str().parse::<ApiProfile>(), Ok(profile));
        }
        assert_eq!("V2".parse::<ApiProfile>(), Ok(ApiProfile::PortalV2));
        assert!("v3".parse::<ApiProfile>().is_err());
    }

    #[test]
    fn test_timeouts() {
        assert_eq!(
            ApiProfile::PopulationV1.default_timeout(),
            Some(Duration::from_secs(30))
        );
        assert_eq!(ApiProfile::PortalV2.default_timeout(), None);
    }
}
