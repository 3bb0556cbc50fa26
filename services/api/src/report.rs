use crate::infra::build_engine;
use clap::Args;
use showroom::config::{AppConfig, RecommendationConfig};
use showroom::error::AppError;
use showroom::telemetry;
use showroom::recommendation::{
    CatalogEntryView, FlagInput, NumericInput, PreferencePayload, PriceRangePayload,
    Recommendation,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct CatalogArgs {
    /// Catalog CSV to read instead of the configured one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print JSON instead of a text listing
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Highest price you are willing to pay (USD)
    #[arg(long)]
    pub(crate) budget_max: u32,
    /// Lowest price of interest (USD)
    #[arg(long, default_value_t = 0)]
    pub(crate) budget_min: u32,
    /// Typical miles driven per day
    #[arg(long)]
    pub(crate) daily_distance: u32,
    /// Number of passengers to seat, including the driver
    #[arg(long)]
    pub(crate) passengers: u8,
    /// Preferred body style (Sedan, SUV, Pickup) or Any
    #[arg(long, default_value = "Any")]
    pub(crate) style: String,
    /// Performance, Efficiency, or Balanced
    #[arg(long)]
    pub(crate) priority: Option<String>,
    /// Require towing capability
    #[arg(long)]
    pub(crate) towing: bool,
    /// Require Full Self-Driving availability
    #[arg(long)]
    pub(crate) fsd: bool,
    /// Catalog CSV to read instead of the configured one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print JSON instead of a text listing
    #[arg(long)]
    pub(crate) json: bool,
}

impl RecommendArgs {
    fn payload(&self) -> PreferencePayload {
        PreferencePayload {
            price_range: Some(PriceRangePayload {
                min: Some(NumericInput::from(self.budget_min)),
                max: Some(NumericInput::from(self.budget_max)),
            }),
            daily_distance: Some(NumericInput::from(self.daily_distance)),
            passengers: Some(NumericInput::from(u32::from(self.passengers))),
            style: Some(self.style.clone()),
            priority: self.priority.clone(),
            towing: Some(FlagInput::from(self.towing)),
            fsd: Some(FlagInput::from(self.fsd)),
            ..PreferencePayload::default()
        }
    }
}

/// Loads configuration and installs the subscriber so catalog warnings reach stderr.
fn recommendation_config(catalog: Option<PathBuf>) -> Result<RecommendationConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let mut recommendations = config.recommendations;
    if catalog.is_some() {
        recommendations.catalog_path = catalog;
    }
    Ok(recommendations)
}

pub(crate) fn run_catalog_list(args: CatalogArgs) -> Result<(), AppError> {
    let engine = build_engine(&recommendation_config(args.catalog)?)?;
    let listing = engine.catalog_listing();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        render_catalog(&listing);
    }
    Ok(())
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let engine = build_engine(&recommendation_config(args.catalog.clone())?)?;
    let recommendations = engine.recommend(&args.payload())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
    } else {
        render_recommendations(&recommendations);
    }
    Ok(())
}

fn render_catalog(listing: &[CatalogEntryView]) {
    println!("Vehicle catalog ({} variants)", listing.len());
    for entry in listing {
        println!(
            "- {} | {} | {} | {} | 0-60 {} | seats {} | towing {} | FSD {}",
            entry.name,
            entry.body_type,
            entry.base_price,
            entry.range,
            entry.acceleration,
            entry.seating,
            entry.towing,
            if entry.full_self_driving { "yes" } else { "no" }
        );
    }
}

fn render_recommendations(recommendations: &[Recommendation]) {
    if recommendations.is_empty() {
        let fallback = Recommendation::fallback();
        println!("No catalog vehicles could be scored.");
        println!("Suggested starting point: {} ({})", fallback.name, fallback.base_price);
        return;
    }

    println!("Top {} recommendations", recommendations.len());
    for (position, entry) in recommendations.iter().enumerate() {
        println!(
            "\n{}. {} (score {})",
            position + 1,
            entry.name,
            entry.score
        );
        println!(
            "   {} | {} | 0-60 {} | top speed {}",
            entry.base_price, entry.range, entry.acceleration, entry.top_speed
        );
        if let Some(note) = &entry.over_budget_note {
            println!("   note: {note}");
        }
        for reason in &entry.reasons {
            println!("   - {reason}");
        }
    }
}
