use crate::bodies::Body;
use crate::ephemeris::error::EphemerisError;
use crate::ephemeris::provider::{HouseProvider, PositionProvider};
use crate::ephemeris::time::JulianDay;
use crate::ephemeris::types::{GeoLocation, HousePositions, HouseSystem, PlanetPosition};
use crate::western::signs::normalize_degree;
use std::cell::RefCell;
use std::env;
use std::path::{Path, PathBuf};
use swisseph::swe::{calc_ut, set_ephe_path};

// FLG_SWIEPH = 2 (use Swiss Ephemeris files), FLG_SPEED = 256 (fill in daily motion)
const CALC_FLAGS: i32 = 2 | 256;

const DEFAULT_EPHEMERIS_PATH: &str = "/usr/local/share/swisseph";

thread_local! {
    // libswisseph keeps its search path in thread-local storage.
    static THREAD_EPHE_PATH: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Point the calling thread's Swiss Ephemeris at `path` unless it already is.
fn ensure_thread_ephe_path(path: &str) {
    THREAD_EPHE_PATH.with(|current| {
        let mut current = current.borrow_mut();
        if current.as_deref() != Some(path) {
            log::debug!(
                "Setting Swiss Ephemeris path on {:?}: {}",
                std::thread::current().id(),
                path
            );
            set_ephe_path(path);
            *current = Some(path.to_string());
        }
    });
}

/// Swiss Ephemeris adapter implementing both provider traits
#[derive(Debug, Clone)]
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
    /// `ephemeris_path` as handed to the C library
    search_path: String,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_EPHEMERIS_PATH))
        });

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        // exists() is false for paths with interior NULs, so the C string
        // conversion in set_ephe_path cannot fail past this point.
        let search_path = path.to_string_lossy().into_owned();
        log::debug!("Swiss Ephemeris data directory: {}", search_path);
        ensure_thread_ephe_path(&search_path);
        Ok(Self {
            ephemeris_path: path,
            search_path,
        })
    }

    pub fn ephemeris_path(&self) -> &Path {
        &self.ephemeris_path
    }
}

impl PositionProvider for SwissEphemerisAdapter {
    fn body_position(&self, body: Body, jd: JulianDay) -> Result<PlanetPosition, EphemerisError> {
        let planet_code = body.swe_code().ok_or_else(|| EphemerisError::UnsupportedBody {
            body: body.id().to_string(),
        })?;

        ensure_thread_ephe_path(&self.search_path);
        let result = calc_ut(jd.value(), planet_code as u32, CALC_FLAGS as u32).map_err(|e| {
            EphemerisError::CalculationFailed {
                planet_id: body.id().to_string(),
                julian_day: jd.value(),
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;

        let out = result.out;
        if !(out[0].is_finite() && out[1].is_finite() && out[3].is_finite()) {
            return Err(EphemerisError::CalculationFailed {
                planet_id: body.id().to_string(),
                julian_day: jd.value(),
                message: "non-finite position".to_string(),
            });
        }

        Ok(PlanetPosition {
            lon: normalize_degree(out[0]),
            lat: out[1],
            speed_lon: out[3],
        })
    }
}

impl HouseProvider for SwissEphemerisAdapter {
    fn house_cusps(
        &self,
        jd: JulianDay,
        location: GeoLocation,
        system: HouseSystem,
    ) -> Result<HousePositions, EphemerisError> {
        // houses_ex is the low-level entry point; the typed wrapper keeps its
        // house system kind private.
        use swisseph::swe::houses_ex;
        use swisseph::{AscMc, Cusp};

        ensure_thread_ephe_path(&self.search_path);
        let (c, a) = houses_ex(
            jd.value(),
            CALC_FLAGS,
            location.lat,
            location.lon,
            i32::from(system.code()),
        );
        let cusps = Cusp::from_array(c);
        let ascmc = AscMc::from_array(a);

        let raw = [
            cusps.first,
            cusps.second,
            cusps.third,
            cusps.fourth,
            cusps.fifth,
            cusps.sixth,
            cusps.seventh,
            cusps.eighth,
            cusps.ninth,
            cusps.tenth,
            cusps.eleventh,
            cusps.twelfth,
        ];

        if raw.iter().any(|c| !c.is_finite())
            || !ascmc.ascendant.is_finite()
            || !ascmc.mc.is_finite()
        {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!(
                    "{} cusps undefined at lat {:.4}, lon {:.4}",
                    system, location.lat, location.lon
                ),
            });
        }

        Ok(HousePositions {
            system,
            cusps: raw.map(normalize_degree),
            asc: normalize_degree(ascmc.ascendant),
            mc: normalize_degree(ascmc.mc),
        })
    }
}
