//! Internally displaced persons tool.
//!
//! Queries the population endpoint with the population type pinned to IDP.

use crate::domains::tools::catalog::{ExecutionMode, FieldSpec, Operation};

pub const IDPS_V1: Operation = Operation {
    name: "get_idps",
    description: "Get internally displaced persons (IDP) statistics",
    label: "IDP statistics",
    path: "/population",
    fields: &[
        FieldSpec::integer("year_from", "Start year")
            .param("yearFrom")
            .default_int(2022),
        FieldSpec::integer("year_to", "End year")
            .param("yearTo")
            .default_int(2023),
        FieldSpec::string("coa_iso", "Country ISO3 code").param("coa"),
    ],
    fixed_params: &[("populationType", "IDP")],
    mode: ExecutionMode::Single,
    diagnostics: false,
};
