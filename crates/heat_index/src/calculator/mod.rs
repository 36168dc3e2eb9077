//! Heat index calculator.
//!
//! Evaluates the National Weather Service (Rothfusz) multiple regression of
//! Steadman's apparent temperature tables:
//!
//! - **Regression**: [`heat_index_fahrenheit`] takes temperature in Fahrenheit and
//!   relative humidity in percent and returns the heat index in Fahrenheit.
//!   It performs no range checking; outside the fitted region the polynomial
//!   still returns a number, it just stops meaning anything.
//! - **Validity domain**: [`is_within_valid_domain`] flags inputs where the fit
//!   is published as accurate (T >= 26.7C and RH >= 40%). It never blocks the
//!   computation; callers decide how to present an out-of-domain value.
//!
//! Every function here is pure and deterministic.

mod calculations;
mod constants;


pub use calculations::*;
pub use constants::{MIN_VALID_HUMIDITY_PCT, MIN_VALID_TEMPERATURE_C};
