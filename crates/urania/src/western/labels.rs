//! Sign and aspect labels handed to downstream prompt templates.

use crate::aspects::types::AspectKind;
use crate::western::signs::Sign;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "en")]
    English,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ja" | "japanese" => Ok(Language::Japanese),
            "en" | "english" => Ok(Language::English),
            other => Err(format!("Unknown label language: {} (expected ja or en)", other)),
        }
    }
}

const SIGN_LABELS_JA: [&str; 12] = [
    "牡羊座", "牡牛座", "双子座", "蟹座", "獅子座", "乙女座",
    "天秤座", "蠍座", "射手座", "山羊座", "水瓶座", "魚座",
];

impl Language {
    pub fn sign(self, sign: Sign) -> &'static str {
        match self {
            Language::Japanese => SIGN_LABELS_JA[sign.index()],
            Language::English => sign.name(),
        }
    }

    pub fn aspect(self, kind: AspectKind) -> &'static str {
        match self {
            Language::Japanese => match kind {
                AspectKind::Conjunction => "合",
                AspectKind::Opposition => "衝",
                AspectKind::Trine => "三分",
                AspectKind::Square => "矩",
                AspectKind::Sextile => "六分",
            },
            Language::English => kind.name(),
        }
    }

    /// Placeholder used when a looked-up aspect does not exist
    pub fn none(self) -> &'static str {
        match self {
            Language::Japanese => "なし",
            Language::English => "none",
        }
    }
}
