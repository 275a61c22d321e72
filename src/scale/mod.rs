//! Age scaling module
//!
//! This module holds the piecewise-linear curve between server age and
//! display age, and the mapper that walks it in both directions.

mod mapper;
mod table;

#[cfg(test)]
mod property_tests;

pub use mapper::*;
pub use table::*;
pub(crate) use table::take_number;
