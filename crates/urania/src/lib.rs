//! Natal horoscope engine: sign, house and aspect placement, element and
//! modality balance, secondary progressions and transit forecasts.
//!
//! Raw positions come from a [`ephemeris::PositionProvider`] and house cusps
//! from a [`ephemeris::HouseProvider`]; everything else is pure computation.

pub mod aspects;
pub mod balance;
pub mod bodies;
pub mod chart;
pub mod ephemeris;
pub mod houses;
pub mod places;
pub mod western;

mod util;

pub use bodies::{Body, CelestialBody};
pub use chart::{
    AnalysisStep, BirthData, ChartEngine, ChartError, ChartSettings, NatalChart,
    ProgressionEngine, TransitEngine,
};
pub use ephemeris::{GeoLocation, HouseSystem, JulianDay, SwissEphemerisAdapter};
pub use places::{lookup_place, Place};
pub use western::Language;
