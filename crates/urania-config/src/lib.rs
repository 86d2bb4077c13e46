use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use urania::chart::ChartSettings;
use urania::ephemeris::HouseSystem;
use urania::western::Language;

const CONFIG_PATHS: [&str; 2] = ["configs/urania.toml", "../../configs/urania.toml"];

#[derive(Debug, Clone, PartialEq)]
pub struct UraniaSettings {
    /// Swiss Ephemeris data directory; `None` lets the adapter decide
    pub ephemeris_path: Option<PathBuf>,
    pub house_system: HouseSystem,
    pub language: Language,
    pub reference_hour: u32,
    pub default_place: String,
    pub forecast_years: u32,
}

impl Default for UraniaSettings {
    fn default() -> Self {
        Self {
            ephemeris_path: None,
            house_system: HouseSystem::default(),
            language: Language::default(),
            reference_hour: default_reference_hour(),
            default_place: default_place(),
            forecast_years: default_forecast_years(),
        }
    }
}

impl UraniaSettings {
    pub fn chart_settings(&self) -> ChartSettings {
        ChartSettings {
            house_system: self.house_system,
            language: self.language,
            reference_hour: self.reference_hour,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct EphemerisToml {
    #[serde(default)]
    path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChartToml {
    #[serde(default = "default_house_system")]
    house_system: String,
    #[serde(default = "default_language")]
    language: String,
    #[serde(default = "default_reference_hour")]
    reference_hour: u32,
    #[serde(default = "default_place")]
    default_place: String,
}

impl Default for ChartToml {
    fn default() -> Self {
        Self {
            house_system: default_house_system(),
            language: default_language(),
            reference_hour: default_reference_hour(),
            default_place: default_place(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ForecastToml {
    #[serde(default = "default_forecast_years")]
    years: u32,
}

impl Default for ForecastToml {
    fn default() -> Self {
        Self {
            years: default_forecast_years(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    ephemeris: EphemerisToml,
    #[serde(default)]
    chart: ChartToml,
    #[serde(default)]
    forecast: ForecastToml,
}

fn default_house_system() -> String {
    "placidus".to_string()
}

fn default_language() -> String {
    "ja".to_string()
}

fn default_reference_hour() -> u32 {
    12
}

fn default_place() -> String {
    urania::places::DEFAULT_PLACE.to_string()
}

fn default_forecast_years() -> u32 {
    3
}

/// Try the usual relative locations of `configs/urania.toml`.
/// `None` when no file exists at any of them.
pub fn read_config_text() -> Option<String> {
    CONFIG_PATHS.iter().find_map(|p| fs::read_to_string(p).ok())
}

pub fn parse_settings(text: &str) -> anyhow::Result<UraniaSettings> {
    let root: RootConfigToml = toml::from_str(text).context("Failed to parse urania.toml")?;
    let RootConfigToml {
        ephemeris,
        chart,
        forecast,
    } = root;

    let house_system: HouseSystem = chart
        .house_system
        .parse()
        .context("Invalid [chart] house_system")?;
    let language: Language = chart
        .language
        .parse()
        .map_err(|e: String| anyhow::anyhow!("Invalid [chart] language: {e}"))?;
    if chart.reference_hour > 23 {
        anyhow::bail!(
            "[chart] reference_hour must be 0..=23, got {}",
            chart.reference_hour
        );
    }
    if forecast.years == 0 {
        anyhow::bail!("[forecast] years must be at least 1");
    }

    Ok(UraniaSettings {
        ephemeris_path: ephemeris.path,
        house_system,
        language,
        reference_hour: chart.reference_hour,
        default_place: chart.default_place,
        forecast_years: forecast.years,
    })
}

/// Load settings from `configs/urania.toml`, or defaults when it is absent.
pub fn load_settings() -> anyhow::Result<UraniaSettings> {
    match read_config_text() {
        Some(text) => parse_settings(&text),
        None => Ok(UraniaSettings::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings = parse_settings("").unwrap();
        assert_eq!(settings, UraniaSettings::default());
        assert_eq!(settings.house_system, HouseSystem::Placidus);
        assert_eq!(settings.language, Language::Japanese);
        assert_eq!(settings.reference_hour, 12);
        assert_eq!(settings.default_place, "東京都");
        assert_eq!(settings.forecast_years, 3);
    }

    #[test]
    fn test_full_file() {
        let text = r#"
[ephemeris]
path = "/opt/swisseph"

[chart]
house_system = "whole_sign"
language = "en"
reference_hour = 9
default_place = "大阪府"

[forecast]
years = 5
"#;
        let settings = parse_settings(text).unwrap();
        assert_eq!(settings.ephemeris_path, Some(PathBuf::from("/opt/swisseph")));
        assert_eq!(settings.house_system, HouseSystem::WholeSign);
        assert_eq!(settings.language, Language::English);
        assert_eq!(settings.forecast_years, 5);

        let chart = settings.chart_settings();
        assert_eq!(chart.reference_hour, 9);
        assert_eq!(chart.house_system, HouseSystem::WholeSign);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(parse_settings("[chart]\nhouse_system = \"topocentric\"").is_err());
        assert!(parse_settings("[chart]\nlanguage = \"fr\"").is_err());
        assert!(parse_settings("[chart]\nreference_hour = 24").is_err());
        assert!(parse_settings("[forecast]\nyears = 0").is_err());
        assert!(parse_settings("[chart\n").is_err());
    }
}
