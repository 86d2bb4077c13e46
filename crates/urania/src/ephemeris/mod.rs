pub mod adapter;
pub mod error;
pub mod provider;
pub mod time;
pub mod types;

pub use adapter::SwissEphemerisAdapter;
pub use error::EphemerisError;
pub use provider::{HouseProvider, PositionProvider};
pub use time::JulianDay;
pub use types::{GeoLocation, HousePositions, HouseSystem, PlanetPosition};
