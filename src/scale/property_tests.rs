//! Property tests for the age scale module
//!
//! Covers the mapping curve for arbitrary monotone tables: exact hits at
//! breakpoints, monotone output, and unit-slope tails.

use proptest::prelude::*;

use crate::scale::{AgeMapper, AgeScaleTable, Breakpoint};

const EPSILON: f64 = 1e-6;

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

/// Strictly increasing table built from positive steps in both coordinates
fn monotone_table_strategy() -> impl Strategy<Value = AgeScaleTable> {
    prop::collection::vec((0.5..30.0f64, 0.5..30.0f64), 1..=8).prop_map(|steps| {
        let mut server = 0.0;
        let mut display = 0.0;
        AgeScaleTable::from_points(steps.into_iter().map(|(ds, dd)| {
            server += ds;
            display += dd;
            Breakpoint::new(server, display)
        }))
    })
}

/// Settings text for a table, optionally with junk lines mixed in
fn table_text_strategy() -> impl Strategy<Value = (Vec<(u16, u16)>, Vec<bool>)> {
    prop::collection::vec((0u16..500, 0u16..500), 1..=10).prop_flat_map(|points| {
        let len = points.len();
        (Just(points), prop::collection::vec(any::<bool>(), len))
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Both directions hit breakpoints exactly
    #[test]
    fn prop_breakpoints_round_trip(table in monotone_table_strategy()) {
        let mapper = AgeMapper::new(table.clone());

        for point in table.points() {
            let display = mapper.compute_display_age(point.server);
            let server = mapper.compute_server_age(point.display);
            prop_assert!((display - point.display).abs() < EPSILON,
                "display({}) = {}, expected {}", point.server, display, point.display);
            prop_assert!((server - point.server).abs() < EPSILON,
                "server({}) = {}, expected {}", point.display, server, point.server);
        }
    }

    /// Display -> server -> display is stable for strictly monotone tables
    #[test]
    fn prop_inverse_between_breakpoints(
        table in monotone_table_strategy(),
        age in 0.0..300.0f64
    ) {
        let mapper = AgeMapper::new(table);
        let display = mapper.compute_display_age(age);
        let back = mapper.compute_server_age(display);
        prop_assert!((back - age).abs() < EPSILON, "{} -> {} -> {}", age, display, back);
    }

    /// Display age never decreases as server age grows
    #[test]
    fn prop_display_age_monotone(
        table in monotone_table_strategy(),
        a in 0.0..300.0f64,
        b in 0.0..300.0f64
    ) {
        let mapper = AgeMapper::new(table);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(mapper.compute_display_age(lo) <= mapper.compute_display_age(hi) + EPSILON);
    }

    /// Past the last breakpoint the curve has slope one
    #[test]
    fn prop_tail_has_unit_slope(
        table in monotone_table_strategy(),
        past in 0.0..100.0f64
    ) {
        let last = table.last();
        let mapper = AgeMapper::new(table);

        let display = mapper.compute_display_age(last.server + past);
        prop_assert!((display - (last.display + past)).abs() < EPSILON);

        let server = mapper.compute_server_age(last.display + past);
        prop_assert!((server - (last.server + past)).abs() < EPSILON);
    }

    /// Junk lines are dropped without disturbing the valid ones
    #[test]
    fn prop_junk_lines_skipped((points, junk) in table_text_strategy()) {
        let mut text = String::new();
        for (&(server, display), &add_junk) in points.iter().zip(&junk) {
            if add_junk {
                text.push_str("not a number\n");
            }
            text.push_str(&format!("{} {}\n", server, display));
        }

        let table = AgeScaleTable::parse(&text);
        let expected: Vec<Breakpoint> = points
            .iter()
            .map(|&(s, d)| Breakpoint::new(f64::from(s), f64::from(d)))
            .collect();
        prop_assert_eq!(table.points(), expected.as_slice());
    }
}
