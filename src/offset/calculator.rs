//! Head and body offset calculation

use crate::config::{AgeThresholds, VisualFactors};
use crate::offset::point::Point;

/// Age value meaning "no age scaling applies"
pub const NO_AGE: f64 = -1.0;

/// Computes sprite offsets from an age, using fixed thresholds and factors
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OffsetCalculator {
    thresholds: AgeThresholds,
    factors: VisualFactors,
}

impl OffsetCalculator {
    pub fn new(thresholds: AgeThresholds, factors: VisualFactors) -> Self {
        Self {
            thresholds,
            factors,
        }
    }

    #[inline]
    pub fn thresholds(&self) -> &AgeThresholds {
        &self.thresholds
    }

    #[inline]
    pub fn factors(&self) -> &VisualFactors {
        &self.factors
    }

    /// Share of the way from `age` back to zero, relative to `age_mature`
    #[inline]
    fn youth_fraction(&self, age: f64) -> f64 {
        let mature = f64::from(self.thresholds.mature);
        (mature - age) / mature
    }

    /// Years past `age_old` (capped at `age_death`) relative to `age_mature`
    #[inline]
    fn senescence_fraction(&self, age: f64) -> f64 {
        let age = age.min(f64::from(self.thresholds.death));
        (age - f64::from(self.thresholds.old)) / f64::from(self.thresholds.mature)
    }

    /// Head displacement for `age`.
    ///
    /// Growing characters get their head pulled down toward the body.
    /// Aged characters get it lowered and pushed toward the front foot.
    pub fn head_offset(&self, age: f64, head: Point, body: Point, front_foot: Point) -> Point {
        if age == NO_AGE {
            return Point::ZERO;
        }

        let max_head = head.y - body.y;

        match self.thresholds.stage(age) {
            stage if stage.is_growing() => {
                let down = self.youth_fraction(age) * self.factors.baby_head_down * max_head;
                Point::new(0.0, (-down).round())
            }
            stage if stage.is_aged() => {
                let t = self.senescence_fraction(age);
                let down = t * self.factors.old_head_down * max_head;
                let foot_offset = front_foot.x - head.x;
                let forward = t * self.factors.old_head_forward * foot_offset;
                Point::new(forward.round(), (-down).round())
            }
            _ => Point::ZERO,
        }
    }

    /// Body displacement for `age`. Only growing characters move.
    pub fn body_offset(&self, age: f64, body: Point) -> Point {
        if age == NO_AGE {
            return Point::ZERO;
        }

        if !self.thresholds.stage(age).is_growing() {
            return Point::ZERO;
        }

        let down = self.youth_fraction(age) * self.factors.baby_body_down * body.y;
        Point::new(0.0, (-down).round())
    }
}
