use crate::bodies::Body;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
}

impl AspectKind {
    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Opposition => "opposition",
            AspectKind::Trine => "trine",
            AspectKind::Square => "square",
            AspectKind::Sextile => "sextile",
        }
    }
}

/// One row of the aspect table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectDefinition {
    pub kind: AspectKind,
    /// Exact angle for this aspect (0, 60, 90, 120, 180)
    pub exact_angle: f64,
    /// Allowed deviation from the exact angle, inclusive
    pub orb: f64,
}

/// Core aspect information
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectCore {
    #[serde(rename = "aspect")]
    pub kind: AspectKind,
    pub exact_angle: f64,
    /// Angular separation of the two longitudes, 0..=180 (2 dp)
    pub angle: f64,
    /// Absolute deviation from the exact angle (2 dp)
    pub orb: f64,
}

/// Aspect between two bodies of the same chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectRecord {
    pub from: Body,
    pub to: Body,
    #[serde(flatten)]
    pub aspect: AspectCore,
}

impl AspectRecord {
    pub fn involves(&self, body: Body) -> bool {
        self.from == body || self.to == body
    }

    /// True when the record joins `a` and `b`, in either order.
    pub fn joins(&self, a: Body, b: Body) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// Aspect from a transiting body to a natal body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitAspect {
    pub transiting: Body,
    pub natal: Body,
    #[serde(flatten)]
    pub aspect: AspectCore,
}
