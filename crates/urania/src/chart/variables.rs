//! Flat per-step projections of a natal chart, handed to prompt templates.
//!
//! Projection only selects chart fields; nothing is recomputed here.

use crate::bodies::Body;
use crate::chart::error::ChartError;
use crate::chart::natal::NatalChart;
use crate::houses::types::{AngleKind, ANGLES};
use crate::western::labels::Language;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt;
use std::str::FromStr;

pub type StepVariables = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisStep {
    #[serde(rename = "1-A")]
    ElementBalance,
    #[serde(rename = "1-B")]
    ModalityAngles,
    #[serde(rename = "2-A")]
    SunMoon,
    #[serde(rename = "2-B")]
    PersonalPlanets,
}

pub const ANALYSIS_STEPS: [AnalysisStep; 4] = [
    AnalysisStep::ElementBalance,
    AnalysisStep::ModalityAngles,
    AnalysisStep::SunMoon,
    AnalysisStep::PersonalPlanets,
];

impl AnalysisStep {
    pub fn id(self) -> &'static str {
        match self {
            AnalysisStep::ElementBalance => "1-A",
            AnalysisStep::ModalityAngles => "1-B",
            AnalysisStep::SunMoon => "2-A",
            AnalysisStep::PersonalPlanets => "2-B",
        }
    }
}

impl fmt::Display for AnalysisStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for AnalysisStep {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        ANALYSIS_STEPS
            .iter()
            .copied()
            .find(|step| step.id() == wanted)
            .ok_or_else(|| ChartError::UnknownStep(s.to_string()))
    }
}

impl NatalChart {
    pub fn variables_for_step(&self, step: AnalysisStep, language: Language) -> StepVariables {
        let mut vars = Map::new();
        match step {
            AnalysisStep::ElementBalance => {
                for (element, count) in &self.elements.counts {
                    vars.insert(format!("{}_count", element.id()), json!(count));
                }
                vars.insert("dominant_element".into(), json!(self.elements.dominant.id()));
                vars.insert("lacking_element".into(), json!(self.elements.lacking.id()));
            }
            AnalysisStep::ModalityAngles => {
                for (modality, count) in &self.modalities.counts {
                    vars.insert(format!("{}_count", modality.id()), json!(count));
                }
                for kind in ANGLES {
                    let sign = self
                        .angle(kind)
                        .map(|a| language.sign(a.placement.sign))
                        .unwrap_or("");
                    vars.insert(format!("{}_sign", kind.id()), json!(sign));
                }
                for kind in [AngleKind::Ascendant, AngleKind::Midheaven] {
                    let degree = self
                        .angle(kind)
                        .map(|a| a.placement.formatted())
                        .unwrap_or_default();
                    vars.insert(format!("{}_degree", kind.id()), json!(degree));
                }
            }
            AnalysisStep::SunMoon => {
                for body in [Body::Sun, Body::Moon] {
                    self.insert_luminary(&mut vars, body, language);
                }
                let aspect = self.aspect_between(Body::Sun, Body::Moon);
                vars.insert(
                    "sun_moon_aspect".into(),
                    json!(aspect
                        .map(|a| language.aspect(a.aspect.kind))
                        .unwrap_or_else(|| language.none())),
                );
                vars.insert(
                    "sun_moon_aspect_orb".into(),
                    aspect.map(|a| json!(a.aspect.orb)).unwrap_or_else(|| json!(0)),
                );
            }
            AnalysisStep::PersonalPlanets => {
                for body in [Body::Mercury, Body::Venus, Body::Mars] {
                    let placed = self.body(body);
                    let id = body.id();
                    vars.insert(
                        format!("{}_sign", id),
                        json!(placed.map(|b| language.sign(b.placement.sign)).unwrap_or("")),
                    );
                    vars.insert(
                        format!("{}_house", id),
                        json!(placed.and_then(|b| b.house).unwrap_or(0)),
                    );
                    vars.insert(
                        format!("{}_retrograde", id),
                        json!(placed.map(|b| b.retrograde).unwrap_or(false)),
                    );
                }
            }
        }
        vars
    }

    fn insert_luminary(&self, vars: &mut StepVariables, body: Body, language: Language) {
        let placed = self.body(body);
        let id = body.id();
        vars.insert(
            format!("{}_sign", id),
            json!(placed.map(|b| language.sign(b.placement.sign)).unwrap_or("")),
        );
        vars.insert(
            format!("{}_house", id),
            json!(placed.and_then(|b| b.house).unwrap_or(0)),
        );
        vars.insert(
            format!("{}_degree", id),
            json!(placed.map(|b| b.placement.formatted()).unwrap_or_default()),
        );
        vars.insert(
            format!("{}_sabian_degree", id),
            json!(placed.map(|b| b.placement.sabian_degree()).unwrap_or(1)),
        );
    }

    /// Variables for every step, keyed by step id.
    pub fn variables_for_all_steps(&self, language: Language) -> Map<String, Value> {
        ANALYSIS_STEPS
            .iter()
            .map(|&step| {
                (
                    step.id().to_string(),
                    Value::Object(self.variables_for_step(step, language)),
                )
            })
            .collect()
    }
}
