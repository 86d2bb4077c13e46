use crate::aspects::types::{AspectCore, AspectDefinition, AspectKind, AspectRecord, TransitAspect};
use crate::bodies::{Body, CelestialBody};
use crate::util::round_to;
use crate::western::signs::normalize_degree;

/// Aspect table in priority order. When orb windows overlap, the first
/// matching row wins, so this order must not change.
pub const ASPECT_TABLE: [AspectDefinition; 5] = [
    AspectDefinition {
        kind: AspectKind::Conjunction,
        exact_angle: 0.0,
        orb: 8.0,
    },
    AspectDefinition {
        kind: AspectKind::Opposition,
        exact_angle: 180.0,
        orb: 8.0,
    },
    AspectDefinition {
        kind: AspectKind::Trine,
        exact_angle: 120.0,
        orb: 8.0,
    },
    AspectDefinition {
        kind: AspectKind::Square,
        exact_angle: 90.0,
        orb: 8.0,
    },
    AspectDefinition {
        kind: AspectKind::Sextile,
        exact_angle: 60.0,
        orb: 6.0,
    },
];

/// Orb multiplier applied when an outer planet is the transiting body
pub const OUTER_TRANSIT_ORB_FACTOR: f64 = 0.5;

/// Shorter arc between two longitudes, 0..=180
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (normalize_degree(lon1) - normalize_degree(lon2)).abs();
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}

/// Orb multiplier for a transiting body
pub fn transit_orb_factor(transiting: Body) -> f64 {
    if transiting.is_outer() {
        OUTER_TRANSIT_ORB_FACTOR
    } else {
        1.0
    }
}

/// Aspect calculator
#[derive(Debug, Clone)]
pub struct AspectCalculator {
    definitions: Vec<AspectDefinition>,
}

impl AspectCalculator {
    /// Create a calculator over the standard aspect table
    pub fn new() -> Self {
        Self::with_definitions(ASPECT_TABLE.to_vec())
    }

    /// Create a calculator over a custom table, scanned in the given order
    pub fn with_definitions(definitions: Vec<AspectDefinition>) -> Self {
        Self { definitions }
    }

    pub fn definitions(&self) -> &[AspectDefinition] {
        &self.definitions
    }

    /// First aspect in table order whose (scaled) orb admits the separation.
    pub fn calculate_aspect(&self, lon1: f64, lon2: f64, orb_factor: f64) -> Option<AspectCore> {
        let angle = angular_separation(lon1, lon2);

        self.definitions.iter().find_map(|def| {
            let deviation = (angle - def.exact_angle).abs();
            if deviation <= def.orb * orb_factor {
                Some(AspectCore {
                    kind: def.kind,
                    exact_angle: def.exact_angle,
                    angle: round_to(angle, 2),
                    orb: round_to(deviation, 2),
                })
            } else {
                None
            }
        })
    }

    /// Aspects between every unordered pair of bodies in one chart
    pub fn compute_natal_aspects(&self, bodies: &[CelestialBody]) -> Vec<AspectRecord> {
        let mut pairs = Vec::new();
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let (a, b) = (&bodies[i], &bodies[j]);
                if let Some(aspect) = self.calculate_aspect(a.longitude, b.longitude, 1.0) {
                    pairs.push(AspectRecord {
                        from: a.body,
                        to: b.body,
                        aspect,
                    });
                }
            }
        }
        pairs
    }

    /// Aspects from every transiting body to every natal body.
    ///
    /// A body is also compared against its own natal position.
    pub fn compute_transit_aspects(
        &self,
        transiting: &[CelestialBody],
        natal: &[CelestialBody],
    ) -> Vec<TransitAspect> {
        let mut pairs = Vec::new();
        for t in transiting {
            let factor = transit_orb_factor(t.body);
            for n in natal {
                if let Some(aspect) = self.calculate_aspect(t.longitude, n.longitude, factor) {
                    pairs.push(TransitAspect {
                        transiting: t.body,
                        natal: n.body,
                        aspect,
                    });
                }
            }
        }
        pairs
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}
