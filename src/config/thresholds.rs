//! Life stage thresholds

use serde::{Deserialize, Serialize};

pub const AGE_BABY: i32 = 5;
pub const AGE_FERTILE: i32 = 14;
pub const AGE_MATURE: i32 = 20;
/// Base `age_old` before the lifespan multiplier
pub const BASE_AGE_OLD: i32 = 40;
/// Base `age_death` before the lifespan multiplier
pub const BASE_AGE_DEATH: i32 = 60;

/// Semantic stage of a character's (display) age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifeStage {
    Baby,
    Child,
    Fertile,
    Mature,
    Old,
    Dead,
}

impl LifeStage {
    /// Still growing toward full adult size
    #[inline]
    pub fn is_growing(self) -> bool {
        matches!(self, LifeStage::Baby | LifeStage::Child | LifeStage::Fertile)
    }

    /// Past `age_old`, stooping applies
    #[inline]
    pub fn is_aged(self) -> bool {
        matches!(self, LifeStage::Old | LifeStage::Dead)
    }
}

/// Whole-year ages that partition the age axis into [`LifeStage`]s
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeThresholds {
    pub baby: i32,
    pub fertile: i32,
    pub mature: i32,
    pub old: i32,
    pub death: i32,
}

impl Default for AgeThresholds {
    fn default() -> Self {
        Self::with_lifespan_multiplier(1.0)
    }
}

impl AgeThresholds {
    /// Scale `old` and `death` by `multiplier`, truncating to whole years.
    ///
    /// The product is taken in single precision, matching how the setting
    /// is stored.
    pub fn with_lifespan_multiplier(multiplier: f32) -> Self {
        Self {
            baby: AGE_BABY,
            fertile: AGE_FERTILE,
            mature: AGE_MATURE,
            old: (BASE_AGE_OLD as f32 * multiplier) as i32,
            death: (BASE_AGE_DEATH as f32 * multiplier) as i32,
        }
    }

    /// Classify an age.
    ///
    /// Growing stages win over aged ones when `old < mature`; NaN lands in
    /// `Mature`.
    pub fn stage(&self, age: f64) -> LifeStage {
        if age < f64::from(self.mature) {
            if age < f64::from(self.baby) {
                LifeStage::Baby
            } else if age < f64::from(self.fertile) {
                LifeStage::Child
            } else {
                LifeStage::Fertile
            }
        } else if age >= f64::from(self.old) {
            if age > f64::from(self.death) {
                LifeStage::Dead
            } else {
                LifeStage::Old
            }
        } else {
            LifeStage::Mature
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let t = AgeThresholds::default();
        assert_eq!((t.baby, t.fertile, t.mature, t.old, t.death), (5, 14, 20, 40, 60));
    }

    #[test]
    fn test_lifespan_multiplier_scales_old_and_death() {
        let t = AgeThresholds::with_lifespan_multiplier(1.5);
        assert_eq!((t.old, t.death), (60, 90));
        assert_eq!(t.mature, AGE_MATURE);
    }

    #[test]
    fn test_lifespan_multiplier_truncates() {
        let t = AgeThresholds::with_lifespan_multiplier(1.33);
        // 53.2 and 79.8
        assert_eq!((t.old, t.death), (53, 79));
    }

    #[test]
    fn test_stage_boundaries() {
        let t = AgeThresholds::default();
        assert_eq!(t.stage(0.0), LifeStage::Baby);
        assert_eq!(t.stage(4.99), LifeStage::Baby);
        assert_eq!(t.stage(5.0), LifeStage::Child);
        assert_eq!(t.stage(14.0), LifeStage::Fertile);
        assert_eq!(t.stage(19.99), LifeStage::Fertile);
        assert_eq!(t.stage(20.0), LifeStage::Mature);
        assert_eq!(t.stage(39.99), LifeStage::Mature);
        assert_eq!(t.stage(40.0), LifeStage::Old);
        assert_eq!(t.stage(60.0), LifeStage::Old);
        assert_eq!(t.stage(60.5), LifeStage::Dead);
        assert_eq!(t.stage(-3.0), LifeStage::Baby);
        assert_eq!(t.stage(f64::NAN), LifeStage::Mature);
    }

    #[test]
    fn test_short_lifespan_prefers_growing() {
        let t = AgeThresholds::with_lifespan_multiplier(0.25);
        assert_eq!(t.old, 10);
        assert_eq!(t.stage(15.0), LifeStage::Fertile);
        assert_eq!(t.stage(21.0), LifeStage::Dead);
    }
}
