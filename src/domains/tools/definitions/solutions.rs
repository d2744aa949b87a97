//! Durable solutions tool: returns, resettlement and naturalisation.

use crate::domains::tools::catalog::{ExecutionMode, FieldSpec, Operation};

/// Solution type codes: returns, resettlement, naturalisation.
pub const SOLUTION_TYPES: &[&str] = &["RET", "RST", "NAT"];

pub const SOLUTIONS_V1: Operation = Operation {
    name: "get_solutions",
    description: "Get data on durable solutions (resettlement, returns, etc.)",
    label: "solutions data",
    path: "/solutions",
    fields: &[
        FieldSpec::integer("year_from", "Start year")
            .param("yearFrom")
            .default_int(2022),
        FieldSpec::integer("year_to", "End year")
            .param("yearTo")
            .default_int(2023),
        FieldSpec::string("coo_iso", "Country of origin ISO3 code").param("coo"),
        FieldSpec::string("solution_type", "Type of solution")
            .param("solutionType")
            .one_of(SOLUTION_TYPES),
    ],
    fixed_params: &[],
    mode: ExecutionMode::Single,
    diagnostics: false,
};
