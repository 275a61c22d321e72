//! Typed bundle of every age control setting

use crate::config::factors::*;
use crate::config::source::SettingsSource;
use crate::config::thresholds::AgeThresholds;
use crate::error::Result;
use crate::scale::AgeScaleTable;
use serde::{Deserialize, Serialize};

pub const KEY_BABY_HEAD_DOWN_FACTOR: &str = "babyHeadDownFactor";
pub const KEY_BABY_BODY_DOWN_FACTOR: &str = "babyBodyDownFactor";
pub const KEY_OLD_HEAD_DOWN_FACTOR: &str = "oldHeadDownFactor";
pub const KEY_OLD_HEAD_FORWARD_FACTOR: &str = "oldHeadForwardFactor";
pub const KEY_LIFESPAN_MULTIPLIER: &str = "lifespanMultiplier";
pub const KEY_AGE_SCALING: &str = "ageScaling";

pub const DEFAULT_LIFESPAN_MULTIPLIER: f32 = 1.0;

/// Raw age control settings, before tables and thresholds are derived
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgeControlSettings {
    pub baby_head_down_factor: f64,
    pub baby_body_down_factor: f64,
    pub old_head_down_factor: f64,
    pub old_head_forward_factor: f64,
    pub lifespan_multiplier: f32,
    /// One `"<server> <display>"` pair per line; empty selects the default curve
    pub age_scaling: String,
}

impl Default for AgeControlSettings {
    fn default() -> Self {
        Self {
            baby_head_down_factor: DEFAULT_BABY_HEAD_DOWN_FACTOR,
            baby_body_down_factor: DEFAULT_BABY_BODY_DOWN_FACTOR,
            old_head_down_factor: DEFAULT_OLD_HEAD_DOWN_FACTOR,
            old_head_forward_factor: DEFAULT_OLD_HEAD_FORWARD_FACTOR,
            lifespan_multiplier: DEFAULT_LIFESPAN_MULTIPLIER,
            age_scaling: String::new(),
        }
    }
}

impl AgeControlSettings {
    /// Read every key from `source`, defaulting whatever is missing
    pub fn load(source: &dyn SettingsSource) -> Self {
        Self {
            baby_head_down_factor: source
                .float_setting(KEY_BABY_HEAD_DOWN_FACTOR, DEFAULT_BABY_HEAD_DOWN_FACTOR),
            baby_body_down_factor: source
                .float_setting(KEY_BABY_BODY_DOWN_FACTOR, DEFAULT_BABY_BODY_DOWN_FACTOR),
            old_head_down_factor: source
                .float_setting(KEY_OLD_HEAD_DOWN_FACTOR, DEFAULT_OLD_HEAD_DOWN_FACTOR),
            old_head_forward_factor: source
                .float_setting(KEY_OLD_HEAD_FORWARD_FACTOR, DEFAULT_OLD_HEAD_FORWARD_FACTOR),
            lifespan_multiplier: source.float_setting(
                KEY_LIFESPAN_MULTIPLIER,
                f64::from(DEFAULT_LIFESPAN_MULTIPLIER),
            ) as f32,
            age_scaling: source.contents(KEY_AGE_SCALING).unwrap_or_default(),
        }
    }

    /// Parse a JSON object with the same camelCase keys as the settings store
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn factors(&self) -> VisualFactors {
        VisualFactors {
            baby_head_down: self.baby_head_down_factor,
            baby_body_down: self.baby_body_down_factor,
            old_head_down: self.old_head_down_factor,
            old_head_forward: self.old_head_forward_factor,
        }
    }

    pub fn thresholds(&self) -> AgeThresholds {
        AgeThresholds::with_lifespan_multiplier(self.lifespan_multiplier)
    }

    /// Lenient table: bad lines dropped, order kept
    pub fn table(&self) -> AgeScaleTable {
        AgeScaleTable::parse(&self.age_scaling)
    }

    pub fn table_strict(&self) -> Result<AgeScaleTable> {
        AgeScaleTable::parse_strict(&self.age_scaling)
    }
}

/// Persist a `lifespanMultiplier` of 1.0 if the key was never set.
///
/// Returns whether anything was written.
pub fn sanity_check_settings(source: &mut dyn SettingsSource) -> Result<bool> {
    if source.has_setting(KEY_LIFESPAN_MULTIPLIER) {
        return Ok(false);
    }
    source.set_float(
        KEY_LIFESPAN_MULTIPLIER,
        f64::from(DEFAULT_LIFESPAN_MULTIPLIER),
    )?;
    Ok(true)
}
