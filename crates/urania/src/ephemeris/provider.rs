//! Boundary traits for the external ephemeris.
//!
//! The engine never computes orbital mechanics itself; it consumes these
//! providers. Implementations must be reentrant, since forecast sampling
//! calls them from several threads at once.

use crate::bodies::Body;
use crate::ephemeris::error::EphemerisError;
use crate::ephemeris::time::JulianDay;
use crate::ephemeris::types::{GeoLocation, HousePositions, HouseSystem, PlanetPosition};

pub trait PositionProvider: Send + Sync {
    /// Ecliptic longitude, latitude and longitudinal speed of `body` at `jd`.
    fn body_position(&self, body: Body, jd: JulianDay) -> Result<PlanetPosition, EphemerisError>;
}

pub trait HouseProvider: Send + Sync {
    /// Twelve cusp longitudes plus the raw Ascendant and Midheaven.
    fn house_cusps(
        &self,
        jd: JulianDay,
        location: GeoLocation,
        system: HouseSystem,
    ) -> Result<HousePositions, EphemerisError>;
}
