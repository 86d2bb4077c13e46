//! Celestial bodies tracked by a horoscope and the fixed subsets used by the analyses.

use crate::ephemeris::types::PlanetPosition;
use crate::util::round_to;
use crate::western::signs::{normalize_degree, SignPlacement};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Chiron,
    NorthNode,
    SouthNode,
}

/// Bodies queried from the position provider, in chart order.
/// The south node is derived from the north node and never queried.
pub const TRACKED: [Body; 12] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
    Body::Chiron,
    Body::NorthNode,
];

/// The ten bodies counted by the element/modality balance.
pub const MAIN: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

/// Transiting bodies whose aspects make it into a yearly forecast.
pub const SLOW: [Body; 5] = [
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

/// Transiting bodies that get half the usual orb.
pub const OUTER: [Body; 3] = [Body::Uranus, Body::Neptune, Body::Pluto];

// (id, swiss ephemeris code). MEAN_NODE = 10; the south node has no code.
const BODY_IDS: &[(Body, &str, Option<i32>)] = &[
    (Body::Sun, "sun", Some(0)),
    (Body::Moon, "moon", Some(1)),
    (Body::Mercury, "mercury", Some(2)),
    (Body::Venus, "venus", Some(3)),
    (Body::Mars, "mars", Some(4)),
    (Body::Jupiter, "jupiter", Some(5)),
    (Body::Saturn, "saturn", Some(6)),
    (Body::Uranus, "uranus", Some(7)),
    (Body::Neptune, "neptune", Some(8)),
    (Body::Pluto, "pluto", Some(9)),
    (Body::Chiron, "chiron", Some(15)),
    (Body::NorthNode, "north_node", Some(10)),
    (Body::SouthNode, "south_node", None),
];

impl Body {
    pub fn id(self) -> &'static str {
        BODY_IDS
            .iter()
            .find(|(body, _, _)| *body == self)
            .map(|(_, id, _)| *id)
            .unwrap_or("unknown")
    }

    /// Swiss Ephemeris body number, `None` for derived points.
    pub fn swe_code(self) -> Option<i32> {
        BODY_IDS
            .iter()
            .find(|(body, _, _)| *body == self)
            .and_then(|(_, _, code)| *code)
    }

    /// Luminaries and the lunar nodes are never reported retrograde.
    pub fn can_retrograde(self) -> bool {
        !matches!(
            self,
            Body::Sun | Body::Moon | Body::NorthNode | Body::SouthNode
        )
    }

    pub fn is_main(self) -> bool {
        MAIN.contains(&self)
    }

    pub fn is_slow(self) -> bool {
        SLOW.contains(&self)
    }

    pub fn is_outer(self) -> bool {
        OUTER.contains(&self)
    }
}

/// A body placed on the ecliptic for one chart instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    pub body: Body,
    /// Ecliptic longitude, [0, 360), 4 dp
    pub longitude: f64,
    pub latitude: f64,
    /// Degrees per day
    pub speed: f64,
    pub retrograde: bool,
    #[serde(flatten)]
    pub placement: SignPlacement,
    /// Unset when houses could not be computed
    pub house: Option<u8>,
}

impl CelestialBody {
    pub fn from_position(body: Body, position: &PlanetPosition) -> Self {
        let longitude = normalize_degree(round_to(normalize_degree(position.lon), 4));
        Self {
            body,
            longitude,
            latitude: round_to(position.lat, 4),
            speed: round_to(position.speed_lon, 4),
            retrograde: body.can_retrograde() && position.speed_lon < 0.0,
            placement: SignPlacement::from_longitude(longitude),
            house: None,
        }
    }

    /// The south node sits opposite the north node, with no latitude or motion.
    pub fn south_node_from(north_node: &CelestialBody) -> Self {
        let longitude = normalize_degree(north_node.longitude + 180.0);
        Self {
            body: Body::SouthNode,
            longitude,
            latitude: 0.0,
            speed: 0.0,
            retrograde: false,
            placement: SignPlacement::from_longitude(longitude),
            house: None,
        }
    }

    pub fn with_house(self, house: Option<u8>) -> Self {
        Self { house, ..self }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Body {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        BODY_IDS
            .iter()
            .find(|(_, id, _)| *id == wanted)
            .map(|(body, _, _)| *body)
            .ok_or_else(|| format!("Unknown body: {}", s))
    }
}
