use anyhow::{Context, Result};
use carbon_footprint_core::{
    estimate, flights_per_month_from_frequency, primary_cooking_system, recycles_any,
    ConsumptionInput, EnergyInput, FootprintProfile, FootprintSummary, PersonalInput, TravelInput,
    WasteInput,
};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

/// Carbon footprint estimate from lifestyle survey answers
#[derive(Parser, Debug)]
#[command(name = "carbon-footprint")]
#[command(about = "Estimate your monthly carbon footprint", long_about = None)]
struct Args {
    /// Load the whole survey from a JSON profile instead of flags
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,

    /// Log every lookup fallback and category total
    #[arg(short, long)]
    verbose: bool,

    /// Height in cm (0-251)
    #[arg(long, default_value_t = 160.0)]
    height: f64,

    /// Weight in kg (0-250)
    #[arg(long, default_value_t = 75.0)]
    weight: f64,

    /// Gender (female, male)
    #[arg(long, default_value = "female")]
    gender: String,

    /// Diet (vegan, vegetarian, omnivore, high-meat)
    #[arg(long, default_value = "omnivore")]
    diet: String,

    /// Social activity (never, sometimes, frequent)
    #[arg(long, default_value = "never")]
    social: String,

    /// Age in years
    #[arg(long)]
    age: Option<f64>,

    /// Transport mode (car, motorcycle, bus, train, bike, none)
    #[arg(short, long, default_value = "none")]
    transport: String,

    /// Monthly road distance in km
    #[arg(long, default_value_t = 100.0)]
    km: f64,

    /// Flights last month (never, rarely, frequently, very frequently)
    #[arg(long, default_value = "never")]
    flights: String,

    /// Waste bag size (small, medium, large, extra large)
    #[arg(long, default_value = "small")]
    waste_bag: String,

    /// Waste bags per week
    #[arg(long, default_value_t = 2.0)]
    waste_count: f64,

    /// Recycled materials, comma separated (plastic, paper, metal, glass)
    #[arg(long, value_delimiter = ',')]
    recycle: Vec<String>,

    /// Heating energy source (natural gas, electricity, wood, coal)
    #[arg(long, default_value = "natural gas")]
    heating: String,

    /// Cooking systems, comma separated; the first one is used
    #[arg(long, value_delimiter = ',')]
    cooking: Vec<String>,

    /// Uses energy-efficient devices (yes, sometimes, no)
    #[arg(long, default_value = "no")]
    efficiency: String,

    /// Daily TV/PC hours
    #[arg(long, default_value_t = 5.0)]
    tv_hours: f64,

    /// Daily internet hours
    #[arg(long, default_value_t = 6.0)]
    internet_hours: f64,

    /// Shower frequency (daily, twice a day, more frequently, less frequently)
    #[arg(long, default_value = "daily")]
    shower: String,

    /// Monthly grocery bill
    #[arg(long, default_value_t = 200.0)]
    grocery: f64,

    /// Clothes bought monthly
    #[arg(long, default_value_t = 5)]
    clothes: u32,
}

impl Args {
    fn survey_profile(&self) -> FootprintProfile {
        let mut personal = PersonalInput::new(
            self.height,
            self.weight,
            &self.gender,
            &self.diet,
            &self.social,
        );
        if let Some(age) = self.age {
            personal = personal.with_age(age);
        }

        FootprintProfile {
            personal,
            travel: TravelInput::new(
                &self.transport,
                self.km,
                flights_per_month_from_frequency(&self.flights),
            ),
            waste: WasteInput::new(&self.waste_bag, self.waste_count, recycles_any(&self.recycle)),
            energy: EnergyInput::new(
                &self.heating,
                primary_cooking_system(&self.cooking),
                &self.efficiency,
                self.tv_hours,
                self.internet_hours,
            ),
            consumption: ConsumptionInput::new(&self.shower, self.grocery, self.clothes),
        }
    }

    fn load_profile(&self) -> Result<FootprintProfile> {
        match &self.profile {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read profile {}", path.display()))?;
                let profile = serde_json::from_str(&text)
                    .with_context(|| format!("Failed to parse profile {}", path.display()))?;
                info!("Loaded profile from {}", path.display());
                Ok(profile)
            }
            None => Ok(self.survey_profile()),
        }
    }
}

/// `RUST_LOG` wins when set; otherwise `--verbose` picks debug over info.
fn env_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(level.as_str()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(rust_log.as_deref(), args.verbose))
        .with_writer(std::io::stderr)
        .init();

    let profile = args.load_profile()?;
    let report = estimate(&profile);

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{json}");
    } else {
        println!("{}", FootprintSummary::from_report(&report));
    }

    Ok(())
}
