//! Country lookup tools.

use crate::domains::tools::catalog::{ExecutionMode, FieldSpec, Operation};

/// Country list, optionally filtered by region (population API v1).
pub const COUNTRIES_V1: Operation = Operation {
    name: "get_countries",
    description: "Get list of countries with their ISO codes",
    label: "countries",
    path: "/countries",
    fields: &[FieldSpec::string(
        "region",
        "Filter by region (e.g., \"Africa\", \"Asia\", \"Europe\")",
    )
    .param("region")],
    fixed_params: &[],
    mode: ExecutionMode::Single,
    diagnostics: false,
};

/// Country search by name (statistics portal API v2).
pub const SEARCH_COUNTRIES_V2: Operation = Operation {
    name: "search_countries",
    description: "Search countries by name and get their ISO codes",
    label: "countries",
    path: "/countries",
    fields: &[FieldSpec::string("query", "Country name or part of it (e.g., \"Sudan\")").param("name")],
    fixed_params: &[],
    mode: ExecutionMode::Single,
    diagnostics: false,
};
