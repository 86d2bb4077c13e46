//! Secondary progressions: one day after birth stands for one year of life.

use crate::bodies::{CelestialBody, TRACKED};
use crate::chart::engine::resolve_bodies;
use crate::chart::error::ChartError;
use crate::chart::natal::NatalChart;
use crate::chart::types::{ResolvedBodies, UnavailableBody};
use crate::ephemeris::provider::PositionProvider;
use crate::ephemeris::time::JulianDay;
use crate::util::round_to;
use chrono::NaiveDateTime;
use log::debug;
use serde::{Deserialize, Serialize};

pub const DAYS_PER_YEAR: f64 = 365.25;
const SECONDS_PER_DAY: i64 = 86_400;

/// Sign placements at the progressed instant. Houses and aspects are not
/// recomputed for progressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressedChart {
    pub target_date: NaiveDateTime,
    /// Elapsed real years, 2 dp
    pub years_elapsed: f64,
    pub progressed_julian_day: JulianDay,
    /// Progressed instant in the birth place's local time
    pub progressed_datetime: Option<NaiveDateTime>,
    pub bodies: Vec<CelestialBody>,
    pub unavailable_bodies: Vec<UnavailableBody>,
}

/// Whole days from `birth` to `target`, floored (negative before birth).
pub fn elapsed_days(birth: NaiveDateTime, target: NaiveDateTime) -> i64 {
    (target - birth).num_seconds().div_euclid(SECONDS_PER_DAY)
}

pub fn elapsed_progressed_years(birth: NaiveDateTime, target: NaiveDateTime) -> f64 {
    elapsed_days(birth, target) as f64 / DAYS_PER_YEAR
}

pub struct ProgressionEngine<'a> {
    natal: &'a NatalChart,
    positions: &'a dyn PositionProvider,
}

impl<'a> ProgressionEngine<'a> {
    pub fn new(natal: &'a NatalChart, positions: &'a dyn PositionProvider) -> Self {
        Self { natal, positions }
    }

    /// Birth instant plus one day per elapsed year.
    pub fn progressed_instant(&self, target: NaiveDateTime) -> JulianDay {
        let years = elapsed_progressed_years(self.natal.subject.datetime, target);
        self.natal.julian_day.plus_days(years)
    }

    pub fn calculate(&self, target: NaiveDateTime) -> Result<ProgressedChart, ChartError> {
        let years = elapsed_progressed_years(self.natal.subject.datetime, target);
        let jd = self.natal.julian_day.plus_days(years);
        debug!(
            "Progressing {:?} to {} ({:.2} years, JD {})",
            self.natal.subject.name,
            target,
            years,
            jd.value()
        );

        let ResolvedBodies {
            bodies,
            unavailable,
        } = resolve_bodies(self.positions, &TRACKED, jd);
        if bodies.is_empty() {
            return Err(ChartError::NoBodiesResolved {
                failures: unavailable,
            });
        }

        Ok(ProgressedChart {
            target_date: target,
            years_elapsed: round_to(years, 2),
            progressed_julian_day: jd,
            progressed_datetime: jd.to_local(self.natal.subject.place.utc_offset_hours),
            bodies,
            unavailable_bodies: unavailable,
        })
    }
}
