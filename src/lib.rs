//! Age Control Core - server/display age mapping and age-driven sprite offsets
//!
//! Characters age on a server clock but are drawn by a display age taken
//! from a piecewise-linear curve. The display age then drives head and body
//! offsets so one set of sprites can read as baby, adult or elder.
//!
//! With the `python` feature the shared instance is also exposed to Python
//! via PyO3.

pub mod config;
pub mod control;
pub mod error;
pub mod offset;
pub mod scale;

#[cfg(feature = "python")]
mod bindings;

pub use control::{
    compute_display_age, compute_server_age, get_age_body_offset, get_age_head_offset,
    init_age_control, AgeControl,
};
pub use error::{AgeControlError, Result};
