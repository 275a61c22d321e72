//! Visual offset factors

use serde::{Deserialize, Serialize};

pub const DEFAULT_BABY_HEAD_DOWN_FACTOR: f64 = 0.6;
pub const DEFAULT_BABY_BODY_DOWN_FACTOR: f64 = 0.75;
pub const DEFAULT_OLD_HEAD_DOWN_FACTOR: f64 = 0.35;
pub const DEFAULT_OLD_HEAD_FORWARD_FACTOR: f64 = 2.0;

/// Unitless multipliers on the size of age offsets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualFactors {
    pub baby_head_down: f64,
    pub baby_body_down: f64,
    pub old_head_down: f64,
    pub old_head_forward: f64,
}

impl Default for VisualFactors {
    fn default() -> Self {
        Self {
            baby_head_down: DEFAULT_BABY_HEAD_DOWN_FACTOR,
            baby_body_down: DEFAULT_BABY_BODY_DOWN_FACTOR,
            old_head_down: DEFAULT_OLD_HEAD_DOWN_FACTOR,
            old_head_forward: DEFAULT_OLD_HEAD_FORWARD_FACTOR,
        }
    }
}
