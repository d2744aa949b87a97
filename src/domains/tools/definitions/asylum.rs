//! Asylum decisions tool.

use crate::domains::tools::catalog::{ExecutionMode, FieldSpec, Operation};

pub const ASYLUM_DECISIONS_V2: Operation = Operation {
    name: "get_asylum_decisions",
    description: "Get asylum decisions (recognized, rejected, closed) for a year",
    label: "asylum decisions",
    path: "/asylum-decisions",
    fields: &[
        FieldSpec::integer("year", "Year of the decisions (e.g., 2023)")
            .param("year")
            .required(),
        FieldSpec::string("coa_iso", "Country of asylum ISO3 code").param("coa"),
        FieldSpec::string("coo_iso", "Country of origin ISO3 code").param("coo"),
    ],
    fixed_params: &[],
    mode: ExecutionMode::Single,
    diagnostics: false,
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_asylum_decisions_mapping() {
        let args = json!({ "year": 2022, "coa_iso": "DEU", "coo_iso": "SYR" });
        let request = ASYLUM_DECISIONS_V2.build_request(args.as_object().unwrap());

        assert_eq!(request.path, "/asylum-decisions");
        assert_eq!(
            request.query,
            vec![
                ("year".to_string(), "2022".to_string()),
                ("coa".to_string(), "DEU".to_string()),
                ("coo".to_string(), "SYR".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_year_is_left_to_the_api() {
        let request = ASYLUM_DECISIONS_V2.build_request(&Default::default());
        assert!(request.query.is_empty());
    }
}
