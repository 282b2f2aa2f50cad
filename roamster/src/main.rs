use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roamster::config::Config;
use roamster::context::{Clock, FixedClock, StaticWeatherTable, SystemClock};
use roamster::models::{Trip, UserPreferences};
use roamster::RecommendationEngine;

#[derive(Parser)]
#[command(name = "roamster")]
#[command(about = "Context-driven travel recommendation engine")]
struct Args {
    /// Path to a trip JSON file
    #[arg(long)]
    trip: PathBuf,

    /// Path to a user preferences JSON file (defaults apply when omitted)
    #[arg(long)]
    preferences: Option<PathBuf>,

    /// Pin the evaluation clock to this hour of day (0-23) for reproducible output
    #[arg(long)]
    hour: Option<u32>,

    /// Pretty-print the result envelope
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roamster=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();

    let trip: Trip = serde_json::from_str(&std::fs::read_to_string(&args.trip)?)?;
    let preferences: UserPreferences = match &args.preferences {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => UserPreferences::default(),
    };

    let clock: Box<dyn Clock> = match args.hour {
        Some(hour) => Box::new(FixedClock::at_hour(hour)),
        None => Box::new(SystemClock),
    };
    let weather = Box::new(StaticWeatherTable::from_config(&config.weather));

    let engine = RecommendationEngine::new(clock, weather);
    let result = engine.generate(&trip, &preferences)?;

    let output = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{output}");

    Ok(())
}
