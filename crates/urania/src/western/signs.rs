//! Zodiac signs and the longitude → sign mapping.
//!
//! Table order matters: element and modality declaration order is the
//! tie-break order used by the balance analysis.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const SIGN_SPAN: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

pub const SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

pub const ELEMENTS: &[(Element, [Sign; 3])] = &[
    (Element::Fire, [Sign::Aries, Sign::Leo, Sign::Sagittarius]),
    (Element::Earth, [Sign::Taurus, Sign::Virgo, Sign::Capricorn]),
    (Element::Air, [Sign::Gemini, Sign::Libra, Sign::Aquarius]),
    (Element::Water, [Sign::Cancer, Sign::Scorpio, Sign::Pisces]),
];

pub const MODALITIES: &[(Modality, [Sign; 4])] = &[
    (
        Modality::Cardinal,
        [Sign::Aries, Sign::Cancer, Sign::Libra, Sign::Capricorn],
    ),
    (
        Modality::Fixed,
        [Sign::Taurus, Sign::Leo, Sign::Scorpio, Sign::Aquarius],
    ),
    (
        Modality::Mutable,
        [Sign::Gemini, Sign::Virgo, Sign::Sagittarius, Sign::Pisces],
    ),
];

impl Sign {
    pub fn from_index(index: usize) -> Sign {
        SIGNS[index % 12]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        const NAMES: [&str; 12] = [
            "Aries",
            "Taurus",
            "Gemini",
            "Cancer",
            "Leo",
            "Virgo",
            "Libra",
            "Scorpio",
            "Sagittarius",
            "Capricorn",
            "Aquarius",
            "Pisces",
        ];
        NAMES[self.index()]
    }

    pub fn element(self) -> Element {
        ELEMENTS
            .iter()
            .find(|(_, signs)| signs.contains(&self))
            .map(|(element, _)| *element)
            .unwrap_or(Element::Fire)
    }

    pub fn modality(self) -> Modality {
        MODALITIES
            .iter()
            .find(|(_, signs)| signs.contains(&self))
            .map(|(modality, _)| *modality)
            .unwrap_or(Modality::Cardinal)
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Element {
    pub fn id(self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Air => "air",
            Element::Water => "water",
        }
    }
}

impl Modality {
    pub fn id(self) -> &'static str {
        match self {
            Modality::Cardinal => "cardinal",
            Modality::Fixed => "fixed",
            Modality::Mutable => "mutable",
        }
    }
}

/// Reduce any angle into [0, 360).
pub fn normalize_degree(degree: f64) -> f64 {
    let normalized = degree.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Sign and degree-within-sign for a longitude already in [0, 360).
pub fn longitude_to_sign(longitude: f64) -> (Sign, f64) {
    let degree = longitude % SIGN_SPAN;
    // longitude - degree is an exact multiple of 30, so this never lands
    // one sign off the way floor(longitude / 30) can near a boundary.
    let index = ((longitude - degree) / SIGN_SPAN).round() as usize;
    (Sign::from_index(index), degree)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignPlacement {
    pub sign: Sign,
    /// Degree within the sign, 0 <= x < 30
    pub degree: f64,
}

impl SignPlacement {
    pub fn from_longitude(longitude: f64) -> Self {
        let (sign, degree) = longitude_to_sign(normalize_degree(longitude));
        Self { sign, degree }
    }

    /// Ecliptic longitude reconstructed from sign and degree
    pub fn longitude(&self) -> f64 {
        self.sign.index() as f64 * SIGN_SPAN + self.degree
    }

    /// Degrees and truncated arc-minutes, e.g. `25°07'`
    pub fn formatted(&self) -> String {
        let whole = self.degree.trunc();
        let minutes = ((self.degree - whole) * 60.0).trunc();
        format!("{}°{:02}'", whole as u32, minutes as u32)
    }

    /// Sabian symbols are numbered 1..30, rounding any fraction up.
    pub fn sabian_degree(&self) -> u32 {
        if self.degree > 0.0 {
            self.degree.ceil() as u32
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degree_range() {
        let inputs = [
            0.0, 359.999, 360.0, 720.5, -0.5, -360.0, -725.25, 1.0e9 + 0.25, -1.0e-20,
        ];
        for x in inputs {
            let n = normalize_degree(x);
            assert!((0.0..360.0).contains(&n), "{} -> {}", x, n);
        }
        assert_eq!(normalize_degree(720.5), 0.5);
        assert_eq!(normalize_degree(-0.5), 359.5);
        assert_eq!(normalize_degree(-360.0), 0.0);
    }

    #[test]
    fn test_capricorn_scenario() {
        let (sign, degree) = longitude_to_sign(295.0);
        assert_eq!(sign, Sign::Capricorn);
        assert_eq!(sign.index(), 9);
        assert_eq!(degree, 25.0);
    }

    #[test]
    fn test_reconstruction_invariant() {
        let mut lon = 0.0;
        while lon < 360.0 {
            let placement = SignPlacement::from_longitude(lon);
            assert!(placement.degree >= 0.0 && placement.degree < 30.0);
            let diff = (placement.longitude() - lon).rem_euclid(360.0);
            assert!(diff < 1e-9 || (360.0 - diff) < 1e-9, "lon {}", lon);
            lon += 0.37;
        }
        let edge = SignPlacement::from_longitude(29.999999999999996);
        assert_eq!(edge.sign, Sign::Aries);
    }

    #[test]
    fn test_sign_boundaries() {
        assert_eq!(longitude_to_sign(0.0).0, Sign::Aries);
        assert_eq!(longitude_to_sign(30.0).0, Sign::Taurus);
        assert_eq!(longitude_to_sign(359.9).0, Sign::Pisces);
    }

    #[test]
    fn test_element_and_modality_tables() {
        assert_eq!(Sign::Capricorn.element(), Element::Earth);
        assert_eq!(Sign::Capricorn.modality(), Modality::Cardinal);
        assert_eq!(Sign::Leo.element(), Element::Fire);
        assert_eq!(Sign::Pisces.modality(), Modality::Mutable);
        for sign in SIGNS {
            let elements = ELEMENTS.iter().filter(|(_, s)| s.contains(&sign)).count();
            let modalities = MODALITIES.iter().filter(|(_, s)| s.contains(&sign)).count();
            assert_eq!((elements, modalities), (1, 1));
        }
    }

    #[test]
    fn test_formatting_and_sabian_degree() {
        let placement = SignPlacement::from_longitude(295.125);
        assert_eq!(placement.formatted(), "25°07'");
        assert_eq!(placement.sabian_degree(), 26);
        assert_eq!(SignPlacement::from_longitude(0.0).sabian_degree(), 1);
        assert_eq!(SignPlacement::from_longitude(14.0).sabian_degree(), 14);
    }
}
