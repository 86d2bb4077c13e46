//! Birth-place lookup over a static table of Japanese prefectural capitals.

use crate::ephemeris::types::GeoLocation;
use log::debug;
use serde::{Deserialize, Serialize};

/// Place used when a name is empty or matches nothing
pub const DEFAULT_PLACE: &str = "東京都";

/// (name, latitude, longitude, utc offset hours), scanned in order.
const PREFECTURES: &[(&str, f64, f64, i32)] = &[
    ("北海道札幌市", 43.0642, 141.3469, 9),
    ("青森県青森市", 40.8244, 140.7400, 9),
    ("岩手県盛岡市", 39.7036, 141.1527, 9),
    ("宮城県仙台市", 38.2682, 140.8694, 9),
    ("秋田県秋田市", 39.7186, 140.1024, 9),
    ("山形県山形市", 38.2404, 140.3633, 9),
    ("福島県福島市", 37.7608, 140.4747, 9),
    ("茨城県水戸市", 36.3418, 140.4468, 9),
    ("栃木県宇都宮市", 36.5658, 139.8836, 9),
    ("群馬県前橋市", 36.3911, 139.0608, 9),
    ("埼玉県さいたま市", 35.8617, 139.6455, 9),
    ("千葉県千葉市", 35.6074, 140.1065, 9),
    ("東京都", 35.6762, 139.6503, 9),
    ("東京都新宿区", 35.6938, 139.7036, 9),
    ("神奈川県横浜市", 35.4478, 139.6425, 9),
    ("新潟県新潟市", 37.9161, 139.0364, 9),
    ("富山県富山市", 36.6959, 137.2139, 9),
    ("石川県金沢市", 36.5946, 136.6256, 9),
    ("福井県福井市", 36.0652, 136.2217, 9),
    ("山梨県甲府市", 35.6642, 138.5683, 9),
    ("長野県長野市", 36.6513, 138.1811, 9),
    ("岐阜県岐阜市", 35.3912, 136.7223, 9),
    ("静岡県静岡市", 34.9756, 138.3828, 9),
    ("愛知県名古屋市", 35.1815, 136.9066, 9),
    ("三重県津市", 34.7303, 136.5086, 9),
    ("滋賀県大津市", 35.0045, 135.8686, 9),
    ("京都府京都市", 35.0116, 135.7681, 9),
    ("大阪府大阪市", 34.6937, 135.5023, 9),
    ("兵庫県神戸市", 34.6901, 135.1956, 9),
    ("奈良県奈良市", 34.6851, 135.8048, 9),
    ("和歌山県和歌山市", 34.2261, 135.1675, 9),
    ("鳥取県鳥取市", 35.5014, 134.2378, 9),
    ("島根県松江市", 35.4723, 133.0505, 9),
    ("岡山県岡山市", 34.6617, 133.9341, 9),
    ("広島県広島市", 34.3853, 132.4553, 9),
    ("山口県山口市", 34.1858, 131.4706, 9),
    ("徳島県徳島市", 34.0658, 134.5594, 9),
    ("香川県高松市", 34.3401, 134.0431, 9),
    ("愛媛県松山市", 33.8416, 132.7658, 9),
    ("高知県高知市", 33.5597, 133.5311, 9),
    ("福岡県福岡市", 33.6064, 130.4181, 9),
    ("佐賀県佐賀市", 33.2494, 130.2989, 9),
    ("長崎県長崎市", 32.7503, 129.8779, 9),
    ("熊本県熊本市", 32.7898, 130.7417, 9),
    ("大分県大分市", 33.2382, 131.6126, 9),
    ("宮崎県宮崎市", 31.9077, 131.4202, 9),
    ("鹿児島県鹿児島市", 31.5966, 130.5571, 9),
    ("沖縄県那覇市", 26.2124, 127.6792, 9),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub location: GeoLocation,
    /// Whole-hour offset of local civil time from UTC
    pub utc_offset_hours: i32,
}

impl Place {
    pub fn new(name: impl Into<String>, location: GeoLocation, utc_offset_hours: i32) -> Self {
        Self {
            name: name.into(),
            location,
            utc_offset_hours,
        }
    }
}

fn place_from_row(row: &(&str, f64, f64, i32)) -> Place {
    let (name, lat, lon, offset) = *row;
    Place::new(name, GeoLocation { lat, lon }, offset)
}

/// First table entry containing `name` or contained in it.
pub fn lookup_place_strict(name: &str) -> Option<Place> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    PREFECTURES
        .iter()
        .find(|(key, ..)| key.contains(name) || name.contains(key))
        .map(place_from_row)
}

/// Like [`lookup_place_strict`], falling back to [`DEFAULT_PLACE`].
pub fn lookup_place(name: &str) -> Place {
    lookup_place_or(name, DEFAULT_PLACE)
}

/// Like [`lookup_place`] with a caller-chosen fallback name.
///
/// An unknown fallback resolves to [`DEFAULT_PLACE`].
pub fn lookup_place_or(name: &str, fallback: &str) -> Place {
    if let Some(place) = lookup_place_strict(name) {
        return place;
    }
    debug!("No place matches {:?}, using {}", name, fallback);
    lookup_place_strict(fallback).unwrap_or_else(default_place)
}

fn default_place() -> Place {
    place_from_row(&PREFECTURES[12])
}
