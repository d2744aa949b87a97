//! Population statistics tool.
//!
//! Refugees, asylum seekers and other persons of concern, filterable by
//! country of origin and asylum. The v1 API takes a year range; the portal
//! v2 API takes a single year.

use crate::domains::tools::catalog::{ExecutionMode, FieldSpec, Operation, POPULATION_TYPES};

pub const NAME: &str = "get_population_statistics";

const DESCRIPTION: &str =
    "Get population statistics for refugees, asylum seekers, and persons of concern";

/// Population statistics against the population API v1.
pub const POPULATION_V1: Operation = Operation {
    name: NAME,
    description: DESCRIPTION,
    label: "population statistics",
    path: "/population",
    fields: &[
        FieldSpec::integer("year_from", "Start year for the statistics (e.g., 2022)")
            .param("yearFrom")
            .default_int(2022),
        FieldSpec::integer("year_to", "End year for the statistics (e.g., 2023)")
            .param("yearTo")
            .default_int(2023),
        FieldSpec::string(
            "coo_iso",
            "Country of origin ISO3 code (e.g., \"SYR\" for Syria)",
        )
        .param("coo"),
        FieldSpec::string(
            "coa_iso",
            "Country of asylum ISO3 code (e.g., \"TUR\" for Turkey)",
        )
        .param("coa"),
        FieldSpec::string("population_type", "Type of population")
            .param("populationType")
            .one_of(POPULATION_TYPES),
        FieldSpec::integer(
            "limit",
            "Number of results to return (default: 100, max: 10000)",
        )
        .param("limit")
        .default_int(100),
    ],
    fixed_params: &[("aggregate", "year")],
    mode: ExecutionMode::Single,
    diagnostics: true,
};

/// Population statistics against the statistics portal API v2.
pub const POPULATION_V2: Operation = Operation {
    name: NAME,
    description: DESCRIPTION,
    label: "population statistics",
    path: "/population",
    fields: &[
        FieldSpec::integer("year", "Year of the statistics (e.g., 2023)")
            .param("year")
            .default_int(2023),
        FieldSpec::string(
            "coo_iso",
            "Country of origin ISO3 code (e.g., \"SYR\" for Syria)",
        )
        .param("coo"),
        FieldSpec::string(
            "coa_iso",
            "Country of asylum ISO3 code (e.g., \"TUR\" for Turkey)",
        )
        .param("coa"),
        FieldSpec::string("population_type", "Type of population")
            .param("populationType")
            .one_of(POPULATION_TYPES),
        FieldSpec::integer(
            "limit",
            "Number of results to return (default: 100, max: 10000)",
        )
        .param("limit")
        .default_int(100),
    ],
    fixed_params: &[],
    mode: ExecutionMode::Single,
    diagnostics: true,
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_v1_maps_range_and_aggregates_by_year() {
        let args = json!({ "year_from": 2022, "year_to": 2023, "coo_iso": "SYR" });
        let request = POPULATION_V1.build_request(args.as_object().unwrap());

        assert_eq!(request.path, "/population");
        assert_eq!(request.param("yearFrom"), Some("2022"));
        assert_eq!(request.param("yearTo"), Some("2023"));
        assert_eq!(request.param("coo"), Some("SYR"));
        assert_eq!(request.param("aggregate"), Some("year"));
        assert!(request.param("coa").is_none());
    }

    #[test]
    fn test_v1_limit_defaults_to_100() {
        let request = POPULATION_V1.build_request(&Default::default());
        assert_eq!(request.param("limit"), Some("100"));

        let args = json!({ "limit": 25 });
        let request = POPULATION_V1.build_request(args.as_object().unwrap());
        assert_eq!(request.param("limit"), Some("25"));
    }

    #[test]
    fn test_v2_uses_single_year() {
        let args = json!({ "year": 2021, "coa_iso": "TUR", "population_type": "REF" });
        let request = POPULATION_V2.build_request(args.as_object().unwrap());

        assert_eq!(request.param("year"), Some("2021"));
        assert_eq!(request.param("coa"), Some("TUR"));
        assert_eq!(request.param("populationType"), Some("REF"));
        assert!(request.param("yearFrom").is_none());
        assert!(request.param("aggregate").is_none());
    }

    #[test]
    fn test_no_required_fields() {
        assert!(POPULATION_V1.fields.iter().all(|f| !f.required));
        assert!(POPULATION_V2.fields.iter().all(|f| !f.required));
    }
}
