//! Transits against a natal chart and monthly forecast sampling.

use crate::aspects::calculator::AspectCalculator;
use crate::aspects::types::TransitAspect;
use crate::bodies::{CelestialBody, TRACKED};
use crate::chart::engine::resolve_bodies;
use crate::chart::error::ChartError;
use crate::chart::natal::NatalChart;
use crate::chart::types::{
    local_julian_day, ResolvedBodies, UnavailableBody, DEFAULT_REFERENCE_HOUR,
};
use crate::ephemeris::provider::PositionProvider;
use crate::ephemeris::time::JulianDay;
use chrono::{NaiveDate, NaiveDateTime};
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitSnapshot {
    /// Local civil time at the natal place's offset
    pub date: NaiveDateTime,
    pub julian_day: JulianDay,
    pub bodies: Vec<CelestialBody>,
    pub unavailable_bodies: Vec<UnavailableBody>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitReport {
    pub transit: TransitSnapshot,
    pub aspects_to_natal: Vec<TransitAspect>,
}

/// Slow-body transits on the first day of one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastMonth {
    pub month: u32,
    pub date: NaiveDateTime,
    pub aspects: Vec<TransitAspect>,
}

/// Months without a slow-body transit are omitted from `events`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastYear {
    pub year: i32,
    pub events: Vec<ForecastMonth>,
}

pub struct TransitEngine<'a> {
    natal: &'a NatalChart,
    positions: &'a dyn PositionProvider,
    reference_hour: u32,
    aspects: AspectCalculator,
}

impl<'a> TransitEngine<'a> {
    pub fn new(natal: &'a NatalChart, positions: &'a dyn PositionProvider) -> Self {
        Self {
            natal,
            positions,
            reference_hour: DEFAULT_REFERENCE_HOUR,
            aspects: AspectCalculator::new(),
        }
    }

    /// Local hour at which forecast months are sampled
    pub fn with_reference_hour(mut self, hour: u32) -> Self {
        self.reference_hour = hour;
        self
    }

    fn utc_offset(&self) -> i32 {
        self.natal.subject.place.utc_offset_hours
    }

    pub fn positions_at(&self, date: NaiveDateTime) -> Result<TransitSnapshot, ChartError> {
        let jd = local_julian_day(date, self.utc_offset())?;
        let ResolvedBodies {
            bodies,
            unavailable,
        } = resolve_bodies(self.positions, &TRACKED, jd);
        Ok(TransitSnapshot {
            date,
            julian_day: jd,
            bodies,
            unavailable_bodies: unavailable,
        })
    }

    /// Every transiting body against every natal body, own position included.
    pub fn aspects_to_natal(&self, date: NaiveDateTime) -> Result<Vec<TransitAspect>, ChartError> {
        let snapshot = self.positions_at(date)?;
        Ok(self
            .aspects
            .compute_transit_aspects(&snapshot.bodies, &self.natal.bodies))
    }

    pub fn report(&self, date: NaiveDateTime) -> Result<TransitReport, ChartError> {
        let transit = self.positions_at(date)?;
        let aspects_to_natal = self
            .aspects
            .compute_transit_aspects(&transit.bodies, &self.natal.bodies);
        Ok(TransitReport {
            transit,
            aspects_to_natal,
        })
    }

    fn sample_date(&self, year: i32, month: u32) -> Result<NaiveDateTime, ChartError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|d| d.and_hms_opt(self.reference_hour, 0, 0))
            .ok_or_else(|| {
                ChartError::InvalidDate(format!(
                    "{}-{:02}-01 {:02}:00",
                    year, month, self.reference_hour
                ))
            })
    }

    fn forecast_month(&self, year: i32, month: u32) -> Result<Option<ForecastMonth>, ChartError> {
        let date = self.sample_date(year, month)?;
        let aspects: Vec<TransitAspect> = self
            .aspects_to_natal(date)?
            .into_iter()
            .filter(|a| a.transiting.is_slow())
            .collect();

        if aspects.is_empty() {
            return Ok(None);
        }
        Ok(Some(ForecastMonth {
            month,
            date,
            aspects,
        }))
    }

    /// Slow-body transits sampled on the first of each month, month ascending.
    pub fn forecast_year(&self, year: i32) -> Result<ForecastYear, ChartError> {
        let months: Vec<Option<ForecastMonth>> = (1..=12u32)
            .into_par_iter()
            .map(|month| self.forecast_month(year, month))
            .collect::<Result<Vec<_>, ChartError>>()?;

        let mut events: Vec<ForecastMonth> = months.into_iter().flatten().collect();
        events.sort_by_key(|e| e.month);
        debug!("Forecast {}: {} months with events", year, events.len());

        Ok(ForecastYear { year, events })
    }

    /// `years` consecutive yearly forecasts starting at `start_year`.
    pub fn forecast(&self, start_year: i32, years: u32) -> Result<Vec<ForecastYear>, ChartError> {
        (0..years)
            .map(|offset| {
                let year = i32::try_from(offset)
                    .ok()
                    .and_then(|o| start_year.checked_add(o))
                    .ok_or_else(|| {
                        ChartError::InvalidDate(format!("{} + {} years", start_year, offset))
                    })?;
                self.forecast_year(year)
            })
            .collect()
    }
}
