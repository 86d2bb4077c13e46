use crate::bodies::{Body, CelestialBody};
use crate::chart::error::ChartError;
use crate::ephemeris::error::EphemerisError;
use crate::ephemeris::time::JulianDay;
use crate::ephemeris::types::HouseSystem;
use crate::places::Place;
use crate::western::labels::Language;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Forecast samples are taken at noon local time unless configured otherwise.
pub const DEFAULT_REFERENCE_HOUR: u32 = 12;

/// Birth moment in local civil time at a resolved place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthData {
    pub name: String,
    pub datetime: NaiveDateTime,
    pub place: Place,
}

impl BirthData {
    pub fn new(name: impl Into<String>, datetime: NaiveDateTime, place: Place) -> Self {
        Self {
            name: name.into(),
            datetime,
            place,
        }
    }

    pub fn julian_day(&self) -> Result<JulianDay, ChartError> {
        local_julian_day(self.datetime, self.place.utc_offset_hours)
    }
}

/// [`JulianDay::from_local`] with out-of-range instants as [`ChartError::InvalidDate`].
pub(crate) fn local_julian_day(
    datetime: NaiveDateTime,
    utc_offset_hours: i32,
) -> Result<JulianDay, ChartError> {
    JulianDay::from_local(datetime, utc_offset_hours).ok_or_else(|| {
        ChartError::InvalidDate(format!("{} at UTC{:+}", datetime, utc_offset_hours))
    })
}

/// A body the position provider could not resolve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnavailableBody {
    pub body: Body,
    pub reason: String,
}

impl UnavailableBody {
    pub fn new(body: Body, error: &EphemerisError) -> Self {
        Self {
            body,
            reason: error.to_string(),
        }
    }
}

/// Recovered failures observed while building a chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDiagnostics {
    pub unavailable_bodies: Vec<UnavailableBody>,
    pub house_failure: Option<String>,
}

impl ChartDiagnostics {
    pub fn is_complete(&self) -> bool {
        self.unavailable_bodies.is_empty() && self.house_failure.is_none()
    }
}

/// Positions resolved for one instant, plus the bodies that failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBodies {
    pub bodies: Vec<CelestialBody>,
    pub unavailable: Vec<UnavailableBody>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSettings {
    pub house_system: HouseSystem,
    /// Label language for step variables
    pub language: Language,
    /// Local hour (0..=23) at which forecast months are sampled
    pub reference_hour: u32,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            house_system: HouseSystem::Placidus,
            language: Language::Japanese,
            reference_hour: DEFAULT_REFERENCE_HOUR,
        }
    }
}
