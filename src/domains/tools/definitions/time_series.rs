//! Time series tool: one population request per year.
//!
//! The only operation that issues more than one request. Years are fetched
//! sequentially and returned in ascending order as `{ year, data }` pairs.

use crate::domains::tools::catalog::{ExecutionMode, FieldSpec, Operation, POPULATION_TYPES};

pub const TIME_SERIES_V2: Operation = Operation {
    name: "get_time_series",
    description: "Get population statistics for each year in a range, as a time series",
    label: "time series",
    path: "/population",
    fields: &[
        FieldSpec::integer("start_year", "First year of the series (inclusive)").required(),
        FieldSpec::integer("end_year", "Last year of the series (inclusive)").required(),
        FieldSpec::string("coo_iso", "Country of origin ISO3 code").param("coo"),
        FieldSpec::string("population_type", "Type of population")
            .param("populationType")
            .one_of(POPULATION_TYPES),
    ],
    fixed_params: &[],
    mode: ExecutionMode::PerYear {
        start: "start_year",
        end: "end_year",
        param: "year",
    },
    diagnostics: false,
};
