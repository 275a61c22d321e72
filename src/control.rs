//! Age control: the mapper and offset calculator behind one handle
//!
//! An [`AgeControl`] is immutable once built. Reloading settings builds a new
//! one and swaps the shared `Arc`, so readers always see a whole table.

use crate::config::{
    sanity_check_settings, AgeControlSettings, AgeThresholds, SettingsSource, VisualFactors,
};
use crate::error::Result;
use crate::offset::{OffsetCalculator, Point};
use crate::scale::{AgeMapper, AgeScaleTable};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

/// Age mapping curve plus offset parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgeControl {
    mapper: AgeMapper,
    offsets: OffsetCalculator,
}

impl AgeControl {
    pub fn new(table: AgeScaleTable, thresholds: AgeThresholds, factors: VisualFactors) -> Self {
        Self {
            mapper: AgeMapper::new(table),
            offsets: OffsetCalculator::new(thresholds, factors),
        }
    }

    /// Build from settings, dropping malformed age scale lines
    pub fn from_settings(settings: &AgeControlSettings) -> Self {
        Self::new(settings.table(), settings.thresholds(), settings.factors())
    }

    /// Build from settings, failing on malformed or non-monotone age scale
    pub fn from_settings_strict(settings: &AgeControlSettings) -> Result<Self> {
        Ok(Self::new(
            settings.table_strict()?,
            settings.thresholds(),
            settings.factors(),
        ))
    }

    #[inline]
    pub fn mapper(&self) -> &AgeMapper {
        &self.mapper
    }

    #[inline]
    pub fn thresholds(&self) -> &AgeThresholds {
        self.offsets.thresholds()
    }

    #[inline]
    pub fn factors(&self) -> &VisualFactors {
        self.offsets.factors()
    }

    #[inline]
    pub fn compute_display_age(&self, server_age: f64) -> f64 {
        self.mapper.compute_display_age(server_age)
    }

    #[inline]
    pub fn compute_server_age(&self, display_age: f64) -> f64 {
        self.mapper.compute_server_age(display_age)
    }

    #[inline]
    pub fn head_offset(&self, age: f64, head: Point, body: Point, front_foot: Point) -> Point {
        self.offsets.head_offset(age, head, body, front_foot)
    }

    #[inline]
    pub fn body_offset(&self, age: f64, body: Point) -> Point {
        self.offsets.body_offset(age, body)
    }
}

// ============================================================================
// Shared instance
// ============================================================================

/// Process-wide age control, all defaults until first init
static AGE_CONTROL: Lazy<RwLock<Arc<AgeControl>>> =
    Lazy::new(|| RwLock::new(Arc::new(AgeControl::default())));

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Snapshot of the shared age control
#[inline]
pub fn current() -> Arc<AgeControl> {
    AGE_CONTROL.read().clone()
}

/// Replace the shared age control wholesale
pub fn install(control: AgeControl) -> Arc<AgeControl> {
    let control = Arc::new(control);
    *AGE_CONTROL.write() = control.clone();
    INITIALIZED.store(true, Ordering::Release);
    control
}

/// Whether settings have been loaded since startup
pub fn is_initialized() -> bool {
    INITIALIZED.load(Ordering::Acquire)
}

fn load_settings(source: &mut dyn SettingsSource) -> Result<AgeControlSettings> {
    if sanity_check_settings(source)? {
        info!("lifespanMultiplier was unset, stored default");
    }
    Ok(AgeControlSettings::load(source))
}

fn log_installed(control: &AgeControl) {
    let t = control.thresholds();
    info!(
        breakpoints = control.mapper().table().len(),
        age_old = t.old,
        age_death = t.death,
        "age control loaded"
    );
}

/// Load settings from `source` and install the result. Calling it again
/// reloads.
pub fn init_age_control(source: &mut dyn SettingsSource) -> Result<Arc<AgeControl>> {
    let settings = load_settings(source)?;
    let control = AgeControl::from_settings(&settings);
    log_installed(&control);
    Ok(install(control))
}

/// Like [`init_age_control`], but rejects a malformed age scale. On error
/// the installed control is left as it was.
pub fn init_age_control_strict(source: &mut dyn SettingsSource) -> Result<Arc<AgeControl>> {
    let settings = load_settings(source)?;
    let control = AgeControl::from_settings_strict(&settings)?;
    log_installed(&control);
    Ok(install(control))
}

pub fn compute_display_age(server_age: f64) -> f64 {
    current().compute_display_age(server_age)
}

pub fn compute_server_age(display_age: f64) -> f64 {
    current().compute_server_age(display_age)
}

pub fn get_age_head_offset(age: f64, head: Point, body: Point, front_foot: Point) -> Point {
    current().head_offset(age, head, body, front_foot)
}

pub fn get_age_body_offset(age: f64, body: Point) -> Point {
    current().body_offset(age, body)
}
