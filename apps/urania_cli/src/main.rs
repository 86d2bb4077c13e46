use anyhow::Context;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Args, Parser, Subcommand};
use log::info;
use serde::Serialize;
use std::path::PathBuf;
use urania::chart::{AnalysisStep, BirthData, ChartEngine, NatalChart};
use urania::ephemeris::{HouseSystem, SwissEphemerisAdapter};
use urania::places::lookup_place_or;
use urania::western::Language;
use urania_config::UraniaSettings;

#[derive(Parser)]
#[command(name = "urania", about = "Natal chart, progression and transit calculator")]
struct Cli {
    /// Swiss Ephemeris data directory (overrides configs/urania.toml)
    #[arg(long, global = true)]
    ephemeris_path: Option<PathBuf>,
    /// House system, e.g. placidus, whole_sign, koch
    #[arg(long, global = true)]
    house_system: Option<String>,
    /// Label language for step variables: ja or en
    #[arg(long, global = true)]
    language: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BirthArgs {
    #[arg(long, default_value = "")]
    name: String,
    /// Birth date (YYYY-MM-DD), local civil time
    #[arg(long)]
    date: String,
    /// Birth time (HH:MM)
    #[arg(long, default_value = "12:00")]
    time: String,
    /// Birth place; unknown names fall back to the configured default
    #[arg(long)]
    place: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full natal chart
    Natal {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Template variables for one analysis step, or all of them
    Variables {
        #[command(flatten)]
        birth: BirthArgs,
        /// Step id: 1-A, 1-B, 2-A or 2-B
        #[arg(long)]
        step: Option<String>,
    },
    /// Secondary progression to a target date
    Progressed {
        #[command(flatten)]
        birth: BirthArgs,
        /// Target date (YYYY-MM-DD)
        #[arg(long)]
        target: String,
    },
    /// Transiting positions and their aspects to the natal chart
    Transit {
        #[command(flatten)]
        birth: BirthArgs,
        /// Transit date (YYYY-MM-DD)
        #[arg(long)]
        on: String,
        /// Transit time (HH:MM); defaults to the reference hour
        #[arg(long)]
        at: Option<String>,
    },
    /// Slow-planet transits on the first of each month
    Forecast {
        #[command(flatten)]
        birth: BirthArgs,
        /// First forecast year (defaults to the current year)
        #[arg(long)]
        start_year: Option<i32>,
        /// Number of years (defaults to [forecast] years)
        #[arg(long)]
        years: Option<u32>,
    },
}

fn parse_date(text: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .with_context(|| format!("Invalid date {:?}, expected YYYY-MM-DD", text))
}

fn parse_time(text: &str) -> anyhow::Result<NaiveTime> {
    NaiveTime::parse_from_str(text, "%H:%M")
        .with_context(|| format!("Invalid time {:?}, expected HH:MM", text))
}

fn reference_time(settings: &UraniaSettings) -> anyhow::Result<NaiveTime> {
    NaiveTime::from_hms_opt(settings.reference_hour, 0, 0)
        .with_context(|| format!("Invalid reference hour {}", settings.reference_hour))
}

fn birth_data(args: &BirthArgs, settings: &UraniaSettings) -> anyhow::Result<BirthData> {
    let datetime = NaiveDateTime::new(parse_date(&args.date)?, parse_time(&args.time)?);
    let place_name = args.place.as_deref().unwrap_or(&settings.default_place);
    let place = lookup_place_or(place_name, &settings.default_place);
    Ok(BirthData::new(args.name.clone(), datetime, place))
}

fn apply_overrides(cli: &Cli, settings: &mut UraniaSettings) -> anyhow::Result<()> {
    if let Some(path) = &cli.ephemeris_path {
        settings.ephemeris_path = Some(path.clone());
    }
    if let Some(system) = &cli.house_system {
        settings.house_system = system.parse::<HouseSystem>()?;
    }
    if let Some(language) = &cli.language {
        settings.language = language
            .parse::<Language>()
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut settings = urania_config::load_settings()?;
    apply_overrides(&cli, &mut settings)?;

    let adapter = SwissEphemerisAdapter::new(settings.ephemeris_path.clone())
        .context("Swiss Ephemeris is not available")?;
    info!("Using ephemeris data in {}", adapter.ephemeris_path().display());
    let engine = ChartEngine::with_provider(&adapter, settings.chart_settings());

    let natal_for = |birth: &BirthArgs| -> anyhow::Result<NatalChart> {
        let birth = birth_data(birth, &settings)?;
        info!("Natal chart for {:?} at {} ({})", birth.name, birth.datetime, birth.place.name);
        Ok(engine.build_natal(&birth)?)
    };

    match &cli.command {
        Commands::Natal { birth } => print_json(&natal_for(birth)?),
        Commands::Variables { birth, step } => {
            let natal = natal_for(birth)?;
            match step {
                Some(step) => {
                    let step: AnalysisStep = step.parse()?;
                    print_json(&natal.variables_for_step(step, engine.settings().language))
                }
                None => print_json(&natal.variables_for_all_steps(engine.settings().language)),
            }
        }
        Commands::Progressed { birth, target } => {
            let natal = natal_for(birth)?;
            let target = NaiveDateTime::new(parse_date(target)?, natal.subject.datetime.time());
            let progressed = engine.progressions(&natal).calculate(target)?;
            print_json(&progressed)
        }
        Commands::Transit {
            birth,
            on,
            at,
        } => {
            let natal = natal_for(birth)?;
            let time = match at {
                Some(at) => parse_time(at)?,
                None => reference_time(&settings)?,
            };
            let date = NaiveDateTime::new(parse_date(on)?, time);
            let report = engine.transits(&natal).report(date)?;
            print_json(&report)
        }
        Commands::Forecast {
            birth,
            start_year,
            years,
        } => {
            let natal = natal_for(birth)?;
            let start_year = start_year.unwrap_or_else(|| Local::now().year());
            let years = years.unwrap_or(settings.forecast_years);
            let forecast = engine.transits(&natal).forecast(start_year, years)?;
            print_json(&forecast)
        }
    }
}
