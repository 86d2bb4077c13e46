use crate::ephemeris::types::HouseSystem;
use crate::western::signs::SignPlacement;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    /// House number 1..12
    pub house: u8,
    pub longitude: f64,
    #[serde(flatten)]
    pub placement: SignPlacement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AngleKind {
    #[serde(rename = "asc")]
    Ascendant,
    #[serde(rename = "mc")]
    Midheaven,
    #[serde(rename = "ic")]
    ImumCoeli,
    #[serde(rename = "dc")]
    Descendant,
}

pub const ANGLES: [AngleKind; 4] = [
    AngleKind::Ascendant,
    AngleKind::Midheaven,
    AngleKind::ImumCoeli,
    AngleKind::Descendant,
];

impl AngleKind {
    pub fn id(self) -> &'static str {
        match self {
            AngleKind::Ascendant => "asc",
            AngleKind::Midheaven => "mc",
            AngleKind::ImumCoeli => "ic",
            AngleKind::Descendant => "dc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angle {
    pub kind: AngleKind,
    pub longitude: f64,
    #[serde(flatten)]
    pub placement: SignPlacement,
}

/// Cusps and angles of one chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseFrame {
    pub system: HouseSystem,
    /// Houses 1..12 in order
    pub cusps: Vec<HouseCusp>,
    /// Ascendant, Midheaven, Imum Coeli, Descendant
    pub angles: Vec<Angle>,
}

impl HouseFrame {
    pub fn cusp_longitudes(&self) -> Option<[f64; 12]> {
        if self.cusps.len() != 12 {
            return None;
        }
        let mut out = [0.0; 12];
        for (slot, cusp) in out.iter_mut().zip(&self.cusps) {
            *slot = cusp.longitude;
        }
        Some(out)
    }

    pub fn angle(&self, kind: AngleKind) -> Option<&Angle> {
        self.angles.iter().find(|a| a.kind == kind)
    }
}
