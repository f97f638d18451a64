#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Terminal query tool for the counsel map directory.
//!
//! Builds the same in-memory directory the server uses and runs the
//! search pipeline against it, printing results as pretty JSON. Handy
//! for eyeballing the dataset and for scripting against the filter
//! semantics without a running server.

use clap::{Parser, Subcommand};
use counsel_map_directory::DirectoryStore;
use counsel_map_globe::{GLOBE_RADIUS, marker_radius, project_to_sphere};
use counsel_map_lawyer_models::PracticeArea;
use counsel_map_search::search_lawyers;
use counsel_map_search_models::{FilterState, RangeFilter, SearchQuery};
use counsel_map_server_models::{ApiCity, ApiLawyer, ApiPricingPlan};

#[derive(Parser)]
#[command(name = "counsel_map_cli", about = "Lawyer directory query tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the lawyer directory
    Lawyers {
        /// Keyword matched against names and practice areas
        #[arg(long)]
        keyword: Option<String>,
        /// Location matched against city or state
        #[arg(long)]
        location: Option<String>,
        /// Practice-area label, e.g. "Family Law"
        #[arg(long)]
        domain: Option<String>,
        /// Exact-match city facet
        #[arg(long)]
        city: Option<String>,
        /// Exact-match state facet
        #[arg(long)]
        state: Option<String>,
        /// Practice-area facet, e.g. "Tax Law"; repeatable
        #[arg(long = "practice-area")]
        practice_areas: Vec<String>,
        /// Gender facet; repeatable
        #[arg(long = "gender")]
        genders: Vec<String>,
        /// Bar-association facet; repeatable
        #[arg(long = "bar")]
        bar_associations: Vec<String>,
        /// Experience-band facet, e.g. "20+ years"; repeatable
        #[arg(long = "experience")]
        experience_bands: Vec<String>,
        /// Minimum fee per hearing, inclusive
        #[arg(long)]
        min_fees: Option<u32>,
        /// Maximum fee per hearing, inclusive
        #[arg(long)]
        max_fees: Option<u32>,
        /// Minimum rating, inclusive
        #[arg(long)]
        min_rating: Option<f64>,
        /// Maximum rating, inclusive
        #[arg(long)]
        max_rating: Option<f64>,
    },
    /// Print the city registry
    Cities {
        /// Include each city's globe marker position and radius
        #[arg(long)]
        projected: bool,
    },
    /// Print the pricing catalog
    Pricing,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let directory = DirectoryStore::new();

    match cli.command {
        Commands::Lawyers {
            keyword,
            location,
            domain,
            city,
            state,
            practice_areas,
            genders,
            bar_associations,
            experience_bands,
            min_fees,
            max_fees,
            min_rating,
            max_rating,
        } => {
            let query = SearchQuery {
                keyword: keyword.unwrap_or_default(),
                location: location.unwrap_or_default(),
                domain: domain.unwrap_or_default(),
            };

            let fees = (min_fees.is_some() || max_fees.is_some()).then(|| {
                RangeFilter::new(min_fees.unwrap_or(0), max_fees.unwrap_or(100_000))
            });
            let rating = (min_rating.is_some() || max_rating.is_some()).then(|| {
                RangeFilter::new(min_rating.unwrap_or(0.0), max_rating.unwrap_or(5.0))
            });

            let filters = FilterState {
                city,
                state,
                domains: parse_values::<PracticeArea>("practice area", &practice_areas)?,
                genders: parse_values("gender", &genders)?,
                bar_associations: parse_values("bar association", &bar_associations)?,
                experience_bands: parse_values("experience band", &experience_bands)?,
                fees,
                rating,
            };

            let results: Vec<ApiLawyer> = search_lawyers(directory.lawyers(), &query, &filters)
                .into_iter()
                .map(ApiLawyer::from)
                .collect();

            log::info!("{} lawyers matched", results.len());
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Commands::Cities { projected } => {
            if projected {
                let markers: Vec<serde_json::Value> = directory
                    .cities()
                    .iter()
                    .map(|city| {
                        let position = project_to_sphere(city.coordinates, GLOBE_RADIUS);
                        serde_json::json!({
                            "name": city.name,
                            "state": city.state,
                            "position": { "x": position.x, "y": position.y, "z": position.z },
                            "markerRadius": marker_radius(city.lawyer_count),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&markers)?);
            } else {
                let cities: Vec<ApiCity> = directory.cities().iter().map(ApiCity::from).collect();
                println!("{}", serde_json::to_string_pretty(&cities)?);
            }
        }
        Commands::Pricing => {
            let plans: Vec<ApiPricingPlan> = directory
                .pricing_plans()
                .iter()
                .map(ApiPricingPlan::from)
                .collect();
            println!("{}", serde_json::to_string_pretty(&plans)?);
        }
    }

    Ok(())
}

/// Parses repeated facet flags into taxonomy values, erroring on the
/// first unknown label.
fn parse_values<T: std::str::FromStr>(
    what: &str,
    values: &[String],
) -> Result<Vec<T>, Box<dyn std::error::Error>> {
    let mut parsed = Vec::with_capacity(values.len());
    for value in values {
        match value.parse() {
            Ok(v) => parsed.push(v),
            Err(_) => return Err(format!("unknown {what} '{value}'").into()),
        }
    }
    Ok(parsed)
}
