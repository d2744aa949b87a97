//! Demographics tool: age and sex breakdown of displaced populations.

use crate::domains::tools::catalog::{ExecutionMode, FieldSpec, Operation, POPULATION_TYPES};

pub const NAME: &str = "get_demographics";

pub const DEMOGRAPHICS_V1: Operation = Operation {
    name: NAME,
    description: "Get demographic breakdown by age and gender",
    label: "demographics",
    path: "/demographics",
    fields: &[
        FieldSpec::integer("year_from", "Start year for demographics")
            .param("yearFrom")
            .default_int(2022),
        FieldSpec::integer("year_to", "End year for demographics")
            .param("yearTo")
            .default_int(2023),
        FieldSpec::string("coo_iso", "Country of origin ISO3 code").param("coo"),
        FieldSpec::string("coa_iso", "Country of asylum ISO3 code").param("coa"),
    ],
    fixed_params: &[("aggregate", "age,sex")],
    mode: ExecutionMode::Single,
    diagnostics: false,
};

pub const DEMOGRAPHICS_V2: Operation = Operation {
    name: NAME,
    description: "Get demographic breakdown by year and gender",
    label: "demographics",
    path: "/demographics",
    fields: &[
        FieldSpec::integer("year", "Year of the demographics (e.g., 2023)")
            .param("year")
            .default_int(2023),
        FieldSpec::string("coo_iso", "Country of origin ISO3 code").param("coo"),
        FieldSpec::string("coa_iso", "Country of asylum ISO3 code").param("coa"),
        FieldSpec::string("population_type", "Type of population")
            .param("populationType")
            .one_of(POPULATION_TYPES),
    ],
    fixed_params: &[("aggregate", "year,sex")],
    mode: ExecutionMode::Single,
    diagnostics: false,
};
