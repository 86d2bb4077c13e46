#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;
use urania::bodies::{Body, TRACKED};
use urania::chart::BirthData;
use urania::ephemeris::{
    EphemerisError, GeoLocation, HouseProvider, HousePositions, HouseSystem, JulianDay,
    PlanetPosition, PositionProvider,
};
use urania::places::lookup_place;

pub fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

pub fn sample_birth() -> BirthData {
    BirthData::new("Test Subject", local(1990, 1, 15, 10, 30), lookup_place("東京都"))
}

pub fn position(lon: f64, speed_lon: f64) -> PlanetPosition {
    PlanetPosition {
        lon,
        lat: 0.0,
        speed_lon,
    }
}

pub fn equal_houses(start: f64) -> HousePositions {
    let mut cusps = [0.0; 12];
    for (i, c) in cusps.iter_mut().enumerate() {
        *c = (start + 30.0 * i as f64) % 360.0;
    }
    HousePositions {
        system: HouseSystem::Placidus,
        cusps,
        asc: start,
        mc: (start + 270.0) % 360.0,
    }
}

fn missing(body: Body, jd: JulianDay) -> EphemerisError {
    EphemerisError::CalculationFailed {
        planet_id: body.id().to_string(),
        julian_day: jd.value(),
        message: "stub has no position".to_string(),
    }
}

/// Same positions at every instant; bodies without an entry fail.
pub struct FixedProvider {
    pub positions: HashMap<Body, PlanetPosition>,
    pub houses: Option<HousePositions>,
}

impl FixedProvider {
    /// Every tracked body, 30° apart starting at the Sun's 295°, moving forward.
    pub fn full() -> Self {
        let positions = TRACKED
            .iter()
            .enumerate()
            .map(|(i, &body)| (body, position((295.0 + 30.0 * i as f64) % 360.0, 1.0)))
            .collect();
        Self {
            positions,
            houses: Some(equal_houses(0.0)),
        }
    }

    pub fn with(mut self, body: Body, pos: PlanetPosition) -> Self {
        self.positions.insert(body, pos);
        self
    }

    pub fn without(mut self, body: Body) -> Self {
        self.positions.remove(&body);
        self
    }

    pub fn without_houses(mut self) -> Self {
        self.houses = None;
        self
    }
}

impl PositionProvider for FixedProvider {
    fn body_position(&self, body: Body, jd: JulianDay) -> Result<PlanetPosition, EphemerisError> {
        self.positions
            .get(&body)
            .copied()
            .ok_or_else(|| missing(body, jd))
    }
}

impl HouseProvider for FixedProvider {
    fn house_cusps(
        &self,
        _jd: JulianDay,
        _location: GeoLocation,
        system: HouseSystem,
    ) -> Result<HousePositions, EphemerisError> {
        self.houses
            .clone()
            .map(|h| HousePositions { system, ..h })
            .ok_or_else(|| EphemerisError::HouseCalculationFailed {
                message: "stub house failure".to_string(),
            })
    }
}

/// Each body moves at a constant rate from a base longitude at `epoch`.
pub struct LinearProvider {
    pub epoch: JulianDay,
    pub motion: HashMap<Body, (f64, f64)>,
}

impl LinearProvider {
    pub fn new(epoch: JulianDay) -> Self {
        Self {
            epoch,
            motion: HashMap::new(),
        }
    }

    pub fn body(mut self, body: Body, base: f64, degrees_per_day: f64) -> Self {
        self.motion.insert(body, (base, degrees_per_day));
        self
    }
}

impl PositionProvider for LinearProvider {
    fn body_position(&self, body: Body, jd: JulianDay) -> Result<PlanetPosition, EphemerisError> {
        let (base, rate) = self.motion.get(&body).copied().ok_or_else(|| missing(body, jd))?;
        let lon = (base + rate * (jd.value() - self.epoch.value())).rem_euclid(360.0);
        Ok(position(lon, rate))
    }
}

impl HouseProvider for LinearProvider {
    fn house_cusps(
        &self,
        _jd: JulianDay,
        _location: GeoLocation,
        _system: HouseSystem,
    ) -> Result<HousePositions, EphemerisError> {
        Ok(equal_houses(0.0))
    }
}

type PositionFn = dyn Fn(Body, JulianDay) -> Option<f64> + Send + Sync;

/// Longitudes from a closure; `None` means the body is unavailable.
pub struct FnProvider {
    longitude: Box<PositionFn>,
}

impl FnProvider {
    pub fn new(f: impl Fn(Body, JulianDay) -> Option<f64> + Send + Sync + 'static) -> Self {
        Self {
            longitude: Box::new(f),
        }
    }
}

impl PositionProvider for FnProvider {
    fn body_position(&self, body: Body, jd: JulianDay) -> Result<PlanetPosition, EphemerisError> {
        (self.longitude)(body, jd)
            .map(|lon| position(lon, 0.1))
            .ok_or_else(|| missing(body, jd))
    }
}
