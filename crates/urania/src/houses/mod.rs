pub mod calculator;
pub mod types;

pub use calculator::{build_house_frame, compute_house_frame, house_for_longitude, FALLBACK_HOUSE};
pub use types::{Angle, AngleKind, HouseCusp, HouseFrame, ANGLES};
