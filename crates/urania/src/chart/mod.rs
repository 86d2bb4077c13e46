pub mod engine;
pub mod error;
pub mod natal;
pub mod progression;
pub mod transit;
pub mod types;
pub mod variables;

pub use engine::{assign_houses, resolve_bodies, with_south_node, ChartEngine};
pub use error::ChartError;
pub use natal::NatalChart;
pub use progression::{elapsed_days, elapsed_progressed_years, ProgressedChart, ProgressionEngine};
pub use transit::{ForecastMonth, ForecastYear, TransitEngine, TransitReport, TransitSnapshot};
pub use types::{BirthData, ChartDiagnostics, ChartSettings, UnavailableBody};
pub use variables::{AnalysisStep, StepVariables, ANALYSIS_STEPS};
