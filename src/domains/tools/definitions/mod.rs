//! Tool definitions module.
//!
//! One file per tool family. Each exports the [`Operation`] constants for
//! the API profiles that offer it.
//!
//! [`Operation`]: super::catalog::Operation

pub mod asylum;
pub mod countries;
pub mod demographics;
pub mod idps;
pub mod population;
pub mod solutions;
pub mod time_series;

pub use asylum::ASYLUM_DECISIONS_V2;
pub use countries::{COUNTRIES_V1, SEARCH_COUNTRIES_V2};
pub use demographics::{DEMOGRAPHICS_V1, DEMOGRAPHICS_V2};
pub use idps::IDPS_V1;
pub use population::{POPULATION_V1, POPULATION_V2};
pub use solutions::SOLUTIONS_V1;
pub use time_series::TIME_SERIES_V2;
