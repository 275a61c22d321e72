//! Age scale table: breakpoints of the server/display age curve

use crate::error::{AgeControlError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

/// One vertex of the age curve
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Breakpoint {
    pub server: f64,
    pub display: f64,
}

impl Breakpoint {
    /// Implicit first vertex of every table
    pub const ORIGIN: Breakpoint = Breakpoint::new(0.0, 0.0);

    #[inline]
    pub const fn new(server: f64, display: f64) -> Self {
        Self { server, display }
    }
}

/// Built-in curve used when no `ageScaling` setting is present
pub const DEFAULT_AGE_SCALING: [Breakpoint; 4] = [
    Breakpoint::new(20.0, 20.0),
    Breakpoint::new(104.0, 40.0),
    Breakpoint::new(117.0, 57.0),
    Breakpoint::new(120.0, 60.0),
];

/// One leading decimal number, scanf `%f` style (leading whitespace skipped)
static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)")
        .expect("age scale number pattern is valid")
});

/// Read one number off the front of `input`, returning it and the remainder.
pub(crate) fn take_number(input: &str) -> Option<(f64, &str)> {
    let caps = NUMBER_PATTERN.captures(input)?;
    let value = caps.get(1)?.as_str().parse().ok()?;
    Some((value, &input[caps.get(0)?.end()..]))
}

/// Parse the first two numbers of a line, like `sscanf(line, "%f %f")`.
///
/// Returns the point and the unread remainder of the line.
fn parse_line(line: &str) -> Option<(Breakpoint, &str)> {
    let (server, rest) = take_number(line)?;
    let (display, rest) = take_number(rest)?;
    Some((Breakpoint::new(server, display), rest))
}

/// Ordered breakpoint list, implicitly preceded by [`Breakpoint::ORIGIN`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeScaleTable {
    points: SmallVec<[Breakpoint; 8]>,
}

impl Default for AgeScaleTable {
    fn default() -> Self {
        Self::from_points(DEFAULT_AGE_SCALING)
    }
}

impl AgeScaleTable {
    /// Build a table from points in caller order
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Breakpoint>,
    {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// Parse settings text, one `"<server> <display>"` pair per line.
    ///
    /// Empty text selects the built-in table. Lines without two leading
    /// numbers are dropped. Order is kept as written and nothing is
    /// validated.
    pub fn parse(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }

        let mut points = SmallVec::new();
        for line in text.split('\n').filter(|l| !l.is_empty()) {
            match parse_line(line) {
                Some((point, _)) => {
                    debug!(server = point.server, display = point.display, "age scale");
                    points.push(point);
                }
                None => debug!(line, "skipping unparsable age scale line"),
            }
        }

        Self { points }
    }

    /// Parse settings text, rejecting malformed lines and non-monotone curves.
    pub fn parse_strict(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Ok(Self::default());
        }

        let mut points = SmallVec::new();
        for (i, line) in text.split('\n').enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(line) {
                Some((point, rest)) if rest.trim().is_empty() => points.push(point),
                _ => {
                    return Err(AgeControlError::InvalidBreakpoint {
                        line: i + 1,
                        content: line.to_string(),
                    })
                }
            }
        }

        let table = Self { points };
        table.validate()?;
        Ok(table)
    }

    /// Check that both coordinates are non-decreasing from the origin on
    pub fn validate(&self) -> Result<()> {
        let mut prev = Breakpoint::ORIGIN;
        for (index, point) in self.points.iter().enumerate() {
            if point.server < prev.server || point.display < prev.display {
                return Err(AgeControlError::NonMonotonic { index });
            }
            prev = *point;
        }
        Ok(())
    }

    #[inline]
    pub fn is_monotone(&self) -> bool {
        self.validate().is_ok()
    }

    #[inline]
    pub fn points(&self) -> &[Breakpoint] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Last configured vertex, or the origin for an empty table
    #[inline]
    pub fn last(&self) -> Breakpoint {
        self.points.last().copied().unwrap_or(Breakpoint::ORIGIN)
    }

    /// Consecutive `(start, end)` pairs, starting at the origin
    pub fn segments(&self) -> impl Iterator<Item = (Breakpoint, Breakpoint)> + '_ {
        std::iter::once(Breakpoint::ORIGIN)
            .chain(self.points.iter().copied())
            .zip(self.points.iter().copied())
    }
}
