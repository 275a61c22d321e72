//! Configuration module for age control settings
//!
//! This module reads the scalar factors, lifespan multiplier and age scale
//! text from a settings store and turns them into typed values.

mod factors;
mod settings;
mod source;
mod thresholds;

pub use factors::*;
pub use settings::*;
pub use source::*;
pub use thresholds::*;
