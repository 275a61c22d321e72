//! Age-driven sprite offsets
//!
//! Babies draw with their head and body pulled down; the old stoop and lean
//! forward. Offsets are in sprite pixels and rounded to whole pixels.

mod calculator;
mod point;


pub use calculator::*;
pub use point::*;
