//! Natal chart assembly.
//!
//! Each stage is a plain function over the previous stage's output; the
//! chart is assembled once, at the end.

use crate::aspects::calculator::AspectCalculator;
use crate::balance;
use crate::bodies::{Body, CelestialBody, TRACKED};
use crate::chart::error::ChartError;
use crate::chart::natal::NatalChart;
use crate::chart::progression::ProgressionEngine;
use crate::chart::transit::TransitEngine;
use crate::chart::types::{
    BirthData, ChartDiagnostics, ChartSettings, ResolvedBodies, UnavailableBody,
};
use crate::ephemeris::error::EphemerisError;
use crate::ephemeris::provider::{HouseProvider, PositionProvider};
use crate::ephemeris::time::JulianDay;
use crate::ephemeris::types::{GeoLocation, HouseSystem};
use crate::houses::calculator::{compute_house_frame, house_for_longitude};
use crate::houses::types::HouseFrame;
use log::{debug, warn};

/// Query every body in `bodies`, keeping failures instead of aborting.
pub fn resolve_bodies(
    provider: &dyn PositionProvider,
    bodies: &[Body],
    jd: JulianDay,
) -> ResolvedBodies {
    let mut resolved = Vec::with_capacity(bodies.len());
    let mut unavailable = Vec::new();

    for &body in bodies {
        let position = provider.body_position(body, jd).and_then(|pos| {
            if pos.lon.is_finite() && pos.lat.is_finite() && pos.speed_lon.is_finite() {
                Ok(pos)
            } else {
                Err(EphemerisError::CalculationFailed {
                    planet_id: body.id().to_string(),
                    julian_day: jd.value(),
                    message: "non-finite position".to_string(),
                })
            }
        });
        match position {
            Ok(pos) => resolved.push(CelestialBody::from_position(body, &pos)),
            Err(e) => {
                warn!("Position unavailable for {} at JD {}: {}", body, jd.value(), e);
                unavailable.push(UnavailableBody::new(body, &e));
            }
        }
    }

    ResolvedBodies {
        bodies: resolved,
        unavailable,
    }
}

/// Append the south node when the north node resolved.
pub fn with_south_node(mut bodies: Vec<CelestialBody>) -> Vec<CelestialBody> {
    let south = bodies
        .iter()
        .find(|b| b.body == Body::NorthNode)
        .map(CelestialBody::south_node_from);
    if let Some(south) = south {
        bodies.push(south);
    }
    bodies
}

/// Place every body in a house; bodies keep `house: None` without a frame.
pub fn assign_houses(bodies: Vec<CelestialBody>, frame: Option<&HouseFrame>) -> Vec<CelestialBody> {
    let cusps = frame.and_then(HouseFrame::cusp_longitudes);
    bodies
        .into_iter()
        .map(|b| {
            let house = cusps.as_ref().map(|c| house_for_longitude(b.longitude, c));
            b.with_house(house)
        })
        .collect()
}

pub struct ChartEngine<'a> {
    positions: &'a dyn PositionProvider,
    houses: &'a dyn HouseProvider,
    settings: ChartSettings,
    aspects: AspectCalculator,
}

impl<'a> ChartEngine<'a> {
    pub fn new(
        positions: &'a dyn PositionProvider,
        houses: &'a dyn HouseProvider,
        settings: ChartSettings,
    ) -> Self {
        Self {
            positions,
            houses,
            settings,
            aspects: AspectCalculator::new(),
        }
    }

    /// Engine over one provider serving both positions and houses
    pub fn with_provider<P>(provider: &'a P, settings: ChartSettings) -> Self
    where
        P: PositionProvider + HouseProvider,
    {
        Self::new(provider, provider, settings)
    }

    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    /// Transit engine over this engine's position provider and reference hour
    pub fn transits<'n>(&self, natal: &'n NatalChart) -> TransitEngine<'n>
    where
        'a: 'n,
    {
        TransitEngine::new(natal, self.positions).with_reference_hour(self.settings.reference_hour)
    }

    pub fn progressions<'n>(&self, natal: &'n NatalChart) -> ProgressionEngine<'n>
    where
        'a: 'n,
    {
        ProgressionEngine::new(natal, self.positions)
    }

    fn house_frame(
        &self,
        jd: JulianDay,
        location: GeoLocation,
        system: HouseSystem,
    ) -> (Option<HouseFrame>, Option<String>) {
        match compute_house_frame(self.houses, jd, location, system) {
            Ok(frame) => (Some(frame), None),
            Err(e) => {
                warn!("House computation failed ({}), chart has no houses: {}", system, e);
                (None, Some(e.to_string()))
            }
        }
    }

    /// Build the natal chart for `birth`.
    ///
    /// Fails only when not a single body could be resolved.
    pub fn build_natal(&self, birth: &BirthData) -> Result<NatalChart, ChartError> {
        let jd = birth.julian_day()?;
        debug!(
            "Building natal chart for {:?} at JD {} ({})",
            birth.name,
            jd.value(),
            birth.place.name
        );

        let ResolvedBodies {
            bodies,
            unavailable,
        } = resolve_bodies(self.positions, &TRACKED, jd);
        if bodies.is_empty() {
            return Err(ChartError::NoBodiesResolved {
                failures: unavailable,
            });
        }
        debug!(
            "Resolved {} bodies, {} unavailable",
            bodies.len(),
            unavailable.len()
        );

        let bodies = with_south_node(bodies);

        let system = self.settings.house_system;
        let (frame, house_failure) = self.house_frame(jd, birth.place.location, system);
        let bodies = assign_houses(bodies, frame.as_ref());
        debug!("Houses {}", if frame.is_some() { "assigned" } else { "skipped" });

        let aspects = self.aspects.compute_natal_aspects(&bodies);
        debug!("Found {} natal aspects", aspects.len());

        let balance = balance::analyze(&bodies);

        let (cusps, angles) = frame
            .map(|f| (f.cusps, f.angles))
            .unwrap_or_default();

        Ok(NatalChart {
            subject: birth.clone(),
            julian_day: jd,
            house_system: system,
            bodies,
            cusps,
            angles,
            aspects,
            elements: balance.elements,
            modalities: balance.modalities,
            diagnostics: ChartDiagnostics {
                unavailable_bodies: unavailable,
                house_failure,
            },
        })
    }
}
