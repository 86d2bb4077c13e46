//! House cusps, angles and body-to-house assignment.
//!
//! House `i` is the half-open arc `[cusp[i], cusp[i + 1])`, walking the
//! circle counter-clockwise; the arc that contains 0° is the one whose next
//! cusp is numerically smaller than its own.

use crate::ephemeris::error::EphemerisError;
use crate::ephemeris::provider::HouseProvider;
use crate::ephemeris::time::JulianDay;
use crate::ephemeris::types::{GeoLocation, HousePositions, HouseSystem};
use crate::houses::types::{Angle, AngleKind, HouseCusp, HouseFrame};
use crate::util::round_to;
use crate::western::signs::{normalize_degree, SignPlacement};

/// Returned only if no arc matches, which well-formed cusps never allow.
pub const FALLBACK_HOUSE: u8 = 12;

/// House number (1..12) containing `longitude`.
pub fn house_for_longitude(longitude: f64, cusps: &[f64; 12]) -> u8 {
    for i in 0..12 {
        let current = cusps[i];
        let next = cusps[(i + 1) % 12];

        let inside = if next < current {
            longitude >= current || longitude < next
        } else {
            current <= longitude && longitude < next
        };

        if inside {
            return (i + 1) as u8;
        }
    }
    FALLBACK_HOUSE
}

fn rounded_longitude(raw: f64) -> f64 {
    normalize_degree(round_to(normalize_degree(raw), 4))
}

/// Derive cusp and angle records from raw provider output.
pub fn build_house_frame(raw: &HousePositions) -> HouseFrame {
    let cusps = raw
        .cusps
        .iter()
        .enumerate()
        .map(|(i, &lon)| {
            let longitude = rounded_longitude(lon);
            HouseCusp {
                house: (i + 1) as u8,
                longitude,
                placement: SignPlacement::from_longitude(longitude),
            }
        })
        .collect();

    let angle = |kind: AngleKind, raw_lon: f64| {
        let longitude = rounded_longitude(raw_lon);
        Angle {
            kind,
            longitude,
            placement: SignPlacement::from_longitude(longitude),
        }
    };

    let angles = vec![
        angle(AngleKind::Ascendant, raw.asc),
        angle(AngleKind::Midheaven, raw.mc),
        angle(AngleKind::ImumCoeli, raw.mc + 180.0),
        angle(AngleKind::Descendant, raw.asc + 180.0),
    ];

    HouseFrame {
        system: raw.system,
        cusps,
        angles,
    }
}

pub fn compute_house_frame(
    provider: &dyn HouseProvider,
    jd: JulianDay,
    location: GeoLocation,
    system: HouseSystem,
) -> Result<HouseFrame, EphemerisError> {
    let raw = provider.house_cusps(jd, location, system)?;
    Ok(build_house_frame(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equal_cusps(start: f64) -> [f64; 12] {
        let mut cusps = [0.0; 12];
        for (i, c) in cusps.iter_mut().enumerate() {
            *c = normalize_degree(start + 30.0 * i as f64);
        }
        cusps
    }

    #[test]
    fn test_thirty_degree_houses() {
        let cusps = equal_cusps(0.0);
        assert_eq!(house_for_longitude(45.0, &cusps), 2);
        assert_eq!(house_for_longitude(0.0, &cusps), 1);
        assert_eq!(house_for_longitude(359.99, &cusps), 12);
    }

    #[test]
    fn test_longitude_on_cusp_belongs_to_that_house() {
        let cusps = equal_cusps(0.0);
        for (i, &cusp) in cusps.iter().enumerate() {
            assert_eq!(house_for_longitude(cusp, &cusps), (i + 1) as u8);
        }
    }

    #[test]
    fn test_wraparound_segment() {
        // House 1 runs from 350° across 0° to 15°.
        let cusps = [
            350.0, 15.0, 45.0, 80.0, 110.0, 140.0, 170.0, 195.0, 225.0, 260.0, 290.0, 320.0,
        ];
        assert_eq!(house_for_longitude(355.0, &cusps), 1);
        assert_eq!(house_for_longitude(5.0, &cusps), 1);
        assert_eq!(house_for_longitude(350.0, &cusps), 1);
        assert_eq!(house_for_longitude(15.0, &cusps), 2);
        assert_eq!(house_for_longitude(349.9, &cusps), 12);
    }

    #[test]
    fn test_assignment_is_total_and_single_valued() {
        for start in [0.0, 7.5, 123.4, 345.0] {
            let cusps = equal_cusps(start);
            let mut lon = 0.0;
            while lon < 360.0 {
                let matches = (0..12)
                    .filter(|&i| {
                        let (current, next) = (cusps[i], cusps[(i + 1) % 12]);
                        if next < current {
                            lon >= current || lon < next
                        } else {
                            current <= lon && lon < next
                        }
                    })
                    .count();
                assert_eq!(matches, 1, "lon {} start {}", lon, start);
                let house = house_for_longitude(lon, &cusps);
                assert!((1..=12).contains(&house));
                lon += 0.25;
            }
        }
    }

    #[test]
    fn test_frame_angles_are_opposite() {
        let raw = HousePositions {
            system: HouseSystem::Placidus,
            cusps: equal_cusps(200.0),
            asc: 200.0,
            mc: 290.5,
        };
        let frame = build_house_frame(&raw);
        assert_eq!(frame.cusps.len(), 12);
        assert_eq!(frame.angles.len(), 4);
        let ic = frame.angle(AngleKind::ImumCoeli).unwrap();
        let dc = frame.angle(AngleKind::Descendant).unwrap();
        assert_eq!(ic.longitude, 110.5);
        assert_eq!(dc.longitude, 20.0);
        assert_eq!(frame.cusps[0].house, 1);
        assert_eq!(frame.cusp_longitudes().unwrap()[1], 230.0);
    }
}
