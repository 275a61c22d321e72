//! Bidirectional server/display age mapping

use crate::scale::table::{AgeScaleTable, Breakpoint};

/// Which coordinate of a breakpoint a lookup walks along
#[derive(Debug, Clone, Copy)]
enum Axis {
    Server,
    Display,
}

impl Axis {
    /// `(input, output)` coordinates of a point for this direction
    #[inline]
    fn project(self, point: Breakpoint) -> (f64, f64) {
        match self {
            Axis::Server => (point.server, point.display),
            Axis::Display => (point.display, point.server),
        }
    }
}

impl From<AgeScaleTable> for AgeMapper {
    fn from(table: AgeScaleTable) -> Self {
        Self::new(table)
    }
}

/// Converts between server age and display age over an [`AgeScaleTable`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgeMapper {
    table: AgeScaleTable,
}

impl AgeMapper {
    pub fn new(table: AgeScaleTable) -> Self {
        Self { table }
    }

    #[inline]
    pub fn table(&self) -> &AgeScaleTable {
        &self.table
    }

    /// Map a server age onto the display curve
    #[inline]
    pub fn compute_display_age(&self, server_age: f64) -> f64 {
        self.map(Axis::Server, server_age)
    }

    /// Map a display age back onto the server clock
    #[inline]
    pub fn compute_server_age(&self, display_age: f64) -> f64 {
        self.map(Axis::Display, display_age)
    }

    /// Interpolate inside the first segment that contains `value`, otherwise
    /// extrapolate from the last point with slope one.
    fn map(&self, axis: Axis, value: f64) -> f64 {
        for (start, end) in self.table.segments() {
            let (start_in, start_out) = axis.project(start);
            let (end_in, end_out) = axis.project(end);

            if start_in <= value && value < end_in {
                let range = end_in - start_in;
                let fraction = if range == 0.0 {
                    0.0
                } else {
                    (value - start_in) / range
                };
                return start_out + (end_out - start_out) * fraction;
            }
        }

        let (last_in, last_out) = axis.project(self.table.last());
        value - last_in + last_out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_display_age_at_breakpoints() {
        let mapper = AgeMapper::default();
        assert_eq!(mapper.compute_display_age(104.0), 40.0);
        assert_eq!(mapper.compute_display_age(117.0), 57.0);
        assert_eq!(mapper.compute_display_age(20.0), 20.0);
        assert_eq!(mapper.compute_display_age(0.0), 0.0);
    }

    #[test]
    fn test_display_age_interpolates() {
        let mapper = AgeMapper::default();
        let age = mapper.compute_display_age(115.0);
        assert!(age > 40.0 && age < 57.0, "got {age}");
        // 11/13 of the way from 40 to 57
        assert_close(age, 40.0 + 17.0 * 11.0 / 13.0);
        assert_close(mapper.compute_display_age(10.0), 10.0);
    }

    #[test]
    fn test_display_age_extrapolates_with_unit_slope() {
        let mapper = AgeMapper::default();
        assert_close(mapper.compute_display_age(121.1), 61.1);
        assert_close(mapper.compute_display_age(120.0), 60.0);
        assert_close(mapper.compute_display_age(200.0), 140.0);
    }

    #[test]
    fn test_server_age_at_breakpoints() {
        let mapper = AgeMapper::default();
        assert_eq!(mapper.compute_server_age(40.0), 104.0);
        assert_eq!(mapper.compute_server_age(57.0), 117.0);
    }

    #[test]
    fn test_server_age_interpolates() {
        let mapper = AgeMapper::default();
        let age = mapper.compute_server_age(55.0);
        assert!(age > 104.0 && age < 117.0, "got {age}");
        assert_close(mapper.compute_server_age(50.0), 104.0 + 13.0 * 10.0 / 17.0);
    }

    #[test]
    fn test_server_age_extrapolates_with_unit_slope() {
        let mapper = AgeMapper::default();
        assert_close(mapper.compute_server_age(60.1), 120.1);
    }

    #[test]
    fn test_empty_table_is_identity() {
        let mapper = AgeMapper::new(AgeScaleTable::from_points([]));
        assert_eq!(mapper.compute_display_age(33.5), 33.5);
        assert_eq!(mapper.compute_server_age(33.5), 33.5);
    }

    #[test]
    fn test_zero_width_segment_uses_start() {
        // Vertical step at server age 10: display jumps from 10 to 30
        let table = AgeScaleTable::from_points([
            Breakpoint::new(10.0, 10.0),
            Breakpoint::new(10.0, 30.0),
            Breakpoint::new(20.0, 40.0),
        ]);
        let mapper = AgeMapper::new(table);

        assert_eq!(mapper.compute_display_age(10.0), 30.0);
        // Inverse direction walks the step with a non-zero display range
        assert_eq!(mapper.compute_server_age(20.0), 10.0);

        // Horizontal step: display flat at 10 across server 10..20
        let flat = AgeMapper::new(AgeScaleTable::from_points([
            Breakpoint::new(10.0, 10.0),
            Breakpoint::new(20.0, 10.0),
        ]));
        assert_eq!(flat.compute_display_age(15.0), 10.0);
        assert_eq!(flat.compute_server_age(10.0), 20.0);
    }

    #[test]
    fn test_negative_age_extrapolates() {
        let mapper = AgeMapper::default();
        // Below the origin no segment matches; falls through to the last point
        assert_close(mapper.compute_display_age(-1.0), -61.0);
    }

    #[test]
    fn test_from_table_leaves_other_mappers() {
        let mapper = AgeMapper::default();
        let replaced = AgeMapper::from(AgeScaleTable::from_points([Breakpoint::new(10.0, 5.0)]));
        assert_eq!(mapper.table(), &AgeScaleTable::default());
        assert_eq!(replaced.compute_display_age(10.0), 5.0);
        assert_eq!(replaced.compute_display_age(4.0), 2.0);
    }
}
