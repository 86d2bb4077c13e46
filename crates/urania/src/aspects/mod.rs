pub mod calculator;
pub mod types;

pub use calculator::{
    angular_separation, transit_orb_factor, AspectCalculator, ASPECT_TABLE,
    OUTER_TRANSIT_ORB_FACTOR,
};
pub use types::{AspectCore, AspectDefinition, AspectKind, AspectRecord, TransitAspect};
