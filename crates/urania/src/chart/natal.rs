use crate::aspects::types::AspectRecord;
use crate::balance::BalanceTally;
use crate::bodies::{Body, CelestialBody};
use crate::chart::types::{BirthData, ChartDiagnostics};
use crate::ephemeris::time::JulianDay;
use crate::ephemeris::types::HouseSystem;
use crate::houses::types::{Angle, AngleKind, HouseCusp};
use crate::western::signs::{Element, Modality};
use serde::{Deserialize, Serialize};

/// Immutable natal chart snapshot.
///
/// `cusps` and `angles` are empty when the house provider failed; the
/// reason is kept in `diagnostics.house_failure`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalChart {
    pub subject: BirthData,
    pub julian_day: JulianDay,
    pub house_system: HouseSystem,
    pub bodies: Vec<CelestialBody>,
    pub cusps: Vec<HouseCusp>,
    pub angles: Vec<Angle>,
    pub aspects: Vec<AspectRecord>,
    pub elements: BalanceTally<Element>,
    pub modalities: BalanceTally<Modality>,
    pub diagnostics: ChartDiagnostics,
}

impl NatalChart {
    pub fn body(&self, body: Body) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.body == body)
    }

    pub fn bodies_in_house(&self, house: u8) -> Vec<&CelestialBody> {
        self.bodies
            .iter()
            .filter(|b| b.house == Some(house))
            .collect()
    }

    pub fn aspects_for(&self, body: Body) -> Vec<&AspectRecord> {
        self.aspects.iter().filter(|a| a.involves(body)).collect()
    }

    /// First recorded aspect joining `a` and `b`, in either order.
    pub fn aspect_between(&self, a: Body, b: Body) -> Option<&AspectRecord> {
        self.aspects.iter().find(|asp| asp.joins(a, b))
    }

    pub fn angle(&self, kind: AngleKind) -> Option<&Angle> {
        self.angles.iter().find(|a| a.kind == kind)
    }

    pub fn has_houses(&self) -> bool {
        self.cusps.len() == 12
    }
}
