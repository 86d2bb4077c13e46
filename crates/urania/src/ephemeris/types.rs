use crate::ephemeris::error::EphemerisError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// Raw planetary position as returned by a position provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    /// Ecliptic longitude in degrees
    pub lon: f64,
    /// Ecliptic latitude in degrees
    pub lat: f64,
    /// Speed in longitude (degrees per day)
    pub speed_lon: f64,
}

/// Raw house cusps and angles as returned by a house provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousePositions {
    pub system: HouseSystem,
    /// Cusp longitudes for houses 1..12, in order
    pub cusps: [f64; 12],
    pub asc: f64,
    pub mc: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    Placidus,
    WholeSign,
    Koch,
    Equal,
    Regiomontanus,
    Campanus,
    Alcabitius,
    Morinus,
}

/// House system mapping
const HOUSE_SYSTEMS: &[(HouseSystem, &str, u8)] = &[
    (HouseSystem::Placidus, "placidus", b'P'),
    (HouseSystem::WholeSign, "whole_sign", b'W'),
    (HouseSystem::Koch, "koch", b'K'),
    (HouseSystem::Equal, "equal", b'E'),
    (HouseSystem::Regiomontanus, "regiomontanus", b'R'),
    (HouseSystem::Campanus, "campanus", b'C'),
    (HouseSystem::Alcabitius, "alcabitius", b'A'),
    (HouseSystem::Morinus, "morinus", b'M'),
];

impl HouseSystem {
    pub fn name(self) -> &'static str {
        HOUSE_SYSTEMS
            .iter()
            .find(|(system, _, _)| *system == self)
            .map(|(_, name, _)| *name)
            .unwrap_or("placidus")
    }

    /// Single-letter system code understood by the Swiss Ephemeris
    pub fn code(self) -> u8 {
        HOUSE_SYSTEMS
            .iter()
            .find(|(system, _, _)| *system == self)
            .map(|(_, _, code)| *code)
            .unwrap_or(b'P')
    }
}

impl Default for HouseSystem {
    fn default() -> Self {
        HouseSystem::Placidus
    }
}

impl fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HouseSystem {
    type Err = EphemerisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, name, _)| *name == wanted)
            .map(|(system, _, _)| *system)
            .ok_or_else(|| EphemerisError::InvalidHouseSystem {
                system: s.to_string(),
                valid: HOUSE_SYSTEMS
                    .iter()
                    .map(|(_, name, _)| name.to_string())
                    .collect(),
            })
    }
}
