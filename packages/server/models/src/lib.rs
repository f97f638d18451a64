#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the counsel map server.
//!
//! These types are serialized to JSON for the REST API. They are separate
//! from the directory record types to allow independent evolution of the
//! API contract.

use counsel_map_directory::{BillingCycle, PricingPlan, registry};
use counsel_map_geography_models::City;
use counsel_map_lawyer_models::{
    BarAssociation, EducationEntry, ExperienceBand, Gender, LawyerRecord, PracticeArea,
    ReviewSummary,
};
use serde::{Deserialize, Serialize};

/// A lawyer as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLawyer {
    /// Unique record id.
    pub id: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Full display name.
    pub full_name: String,
    /// Age in years.
    pub age: u8,
    /// Gender.
    pub gender: Gender,
    /// State of practice.
    pub state: String,
    /// City of practice.
    pub city: String,
    /// Contact phone number.
    pub contact_number: String,
    /// Contact email address.
    pub email: String,
    /// Practice areas.
    pub domain_of_law: Vec<PracticeArea>,
    /// Total cases handled.
    pub total_cases: u32,
    /// Cases won.
    pub total_wins: u32,
    /// Cases lost.
    pub total_losses: u32,
    /// Win rate in [0, 1], derived from the case counts.
    pub win_rate: f64,
    /// Fee per hearing.
    pub fees_per_hearing: u32,
    /// Review summary.
    pub review: ReviewSummary,
    /// Bar association affiliation.
    pub bar_association: BarAssociation,
    /// Profile image URL.
    pub image_url: String,
    /// Biography.
    pub about: String,
    /// Years of experience.
    pub years_of_experience: u8,
    /// Experience band the record falls into.
    pub experience_band: ExperienceBand,
    /// Spoken languages.
    pub languages: Vec<String>,
    /// Education entries, oldest first.
    pub education: Vec<EducationEntry>,
}

impl From<&LawyerRecord> for ApiLawyer {
    fn from(record: &LawyerRecord) -> Self {
        let win_rate = if record.total_cases == 0 {
            0.0
        } else {
            f64::from(record.total_wins) / f64::from(record.total_cases)
        };

        Self {
            id: record.id.clone(),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            full_name: record.full_name(),
            age: record.age,
            gender: record.gender,
            state: record.state.clone(),
            city: record.city.clone(),
            contact_number: record.contact_number.clone(),
            email: record.email.clone(),
            domain_of_law: record.domain_of_law.clone(),
            total_cases: record.total_cases,
            total_wins: record.total_wins,
            total_losses: record.total_losses,
            win_rate,
            fees_per_hearing: record.fees_per_hearing,
            review: record.review,
            bar_association: record.bar_association,
            image_url: record.image_url.clone(),
            about: record.about.clone(),
            years_of_experience: record.years_of_experience,
            experience_band: record.experience_band(),
            languages: record.languages.clone(),
            education: record.education.clone(),
        }
    }
}

/// Query parameters for the lawyers endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LawyerQueryParams {
    /// Keyword matched against names and practice areas.
    pub keyword: Option<String>,
    /// Location matched against city or state.
    pub location: Option<String>,
    /// Single practice-area label from the query bar.
    pub domain: Option<String>,
    /// Sidebar city facet.
    pub city: Option<String>,
    /// Sidebar state facet.
    pub state: Option<String>,
    /// Comma-separated practice-area labels for the sidebar facet.
    pub domains: Option<String>,
    /// Comma-separated gender names.
    pub genders: Option<String>,
    /// Comma-separated bar-association names.
    pub bar_associations: Option<String>,
    /// Comma-separated experience-band labels.
    pub experience_bands: Option<String>,
    /// Minimum fee per hearing, inclusive.
    pub min_fees: Option<u32>,
    /// Maximum fee per hearing, inclusive.
    pub max_fees: Option<u32>,
    /// Minimum rating, inclusive.
    pub min_rating: Option<f64>,
    /// Maximum rating, inclusive.
    pub max_rating: Option<f64>,
}

/// A city as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCity {
    /// City name.
    pub name: String,
    /// State the city belongs to.
    pub state: String,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Resident population.
    pub population: u64,
    /// Directory lawyer count, for marker sizing.
    pub lawyer_count: u32,
}

impl From<&City> for ApiCity {
    fn from(city: &City) -> Self {
        Self {
            name: city.name.clone(),
            state: city.state.clone(),
            longitude: city.coordinates.longitude,
            latitude: city.coordinates.latitude,
            population: city.population,
            lawyer_count: city.lawyer_count,
        }
    }
}

/// The facet catalog returned by the filter-options endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiFilterOptions {
    /// All selectable states.
    pub states: Vec<String>,
    /// All registered city names.
    pub cities: Vec<String>,
    /// All practice-area labels.
    pub domain_of_law: Vec<String>,
    /// All gender names.
    pub genders: Vec<String>,
    /// All experience-band labels.
    pub experience_ranges: Vec<String>,
    /// Display labels for the fee bands.
    pub fee_ranges: Vec<String>,
    /// Whole-star rating steps.
    pub ratings: Vec<u8>,
    /// All bar-association names.
    pub bar_associations: Vec<String>,
}

/// Display labels for the fee bands shown in the sidebar.
const FEE_RANGE_LABELS: &[&str] = &[
    "\u{20b9}1,000 - \u{20b9}5,000",
    "\u{20b9}5,000 - \u{20b9}10,000",
    "\u{20b9}10,000 - \u{20b9}20,000",
    "\u{20b9}20,000 - \u{20b9}50,000",
    "\u{20b9}50,000+",
];

impl ApiFilterOptions {
    /// Builds the catalog from the taxonomies and the city registry.
    #[must_use]
    pub fn from_cities(cities: &[City]) -> Self {
        Self {
            states: registry::states()
                .iter()
                .map(ToString::to_string)
                .collect(),
            cities: cities.iter().map(|city| city.name.clone()).collect(),
            domain_of_law: PracticeArea::all()
                .iter()
                .map(ToString::to_string)
                .collect(),
            genders: Gender::all().iter().map(ToString::to_string).collect(),
            experience_ranges: ExperienceBand::all()
                .iter()
                .map(ToString::to_string)
                .collect(),
            fee_ranges: FEE_RANGE_LABELS.iter().map(ToString::to_string).collect(),
            ratings: vec![1, 2, 3, 4, 5],
            bar_associations: BarAssociation::all()
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// A pricing plan as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPricingPlan {
    /// Plan id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Price per billing cycle.
    pub price: u32,
    /// Feature bullet list.
    pub features: Vec<String>,
    /// Whether the plan gets the "popular" highlight.
    pub popular: bool,
    /// Billing cycle name ("monthly" / "yearly").
    pub billing: BillingCycle,
}

impl From<&PricingPlan> for ApiPricingPlan {
    fn from(plan: &PricingPlan) -> Self {
        Self {
            id: plan.id.clone(),
            name: plan.name.clone(),
            price: plan.price,
            features: plan.features.clone(),
            popular: plan.popular,
            billing: plan.billing,
        }
    }
}

/// Body of the simulated login request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Account password; shape-validated only, never verified.
    pub password: String,
}

/// Response of the simulated login endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Opaque session token (fresh UUID, not stored anywhere).
    pub token: String,
    /// The logged-in mock user.
    pub user: ApiUser,
}

/// A mock user, as the simulated login reports it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUser {
    /// User id.
    pub id: String,
    /// Account email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Account type ("client" / "lawyer").
    pub r#type: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use counsel_map_directory::DirectoryStore;

    #[test]
    fn api_lawyer_derives_full_name_and_win_rate() {
        let store = DirectoryStore::new();
        let record = &store.lawyers()[0];
        let api = ApiLawyer::from(record);

        assert_eq!(
            api.full_name,
            format!("{} {}", record.first_name, record.last_name)
        );
        let expected = f64::from(record.total_wins) / f64::from(record.total_cases);
        assert!((api.win_rate - expected).abs() < 1e-12);
        assert!(api.experience_band.contains(record.years_of_experience));
    }

    #[test]
    fn filter_options_cover_every_taxonomy() {
        let store = DirectoryStore::new();
        let options = ApiFilterOptions::from_cities(store.cities());

        assert_eq!(options.states.len(), 28);
        assert_eq!(options.cities.len(), 15);
        assert_eq!(options.domain_of_law.len(), 10);
        assert_eq!(options.genders.len(), 3);
        assert_eq!(options.experience_ranges.len(), 5);
        assert_eq!(options.fee_ranges.len(), 5);
        assert_eq!(options.bar_associations.len(), 10);
        assert!(options.domain_of_law.contains(&"Family Law".to_string()));
    }

    #[test]
    fn api_city_flattens_coordinates() {
        let store = DirectoryStore::new();
        let delhi = store
            .cities()
            .iter()
            .find(|c| c.name == "Delhi")
            .expect("Delhi registered");
        let api = ApiCity::from(delhi);
        assert!((api.longitude - 77.1025).abs() < 1e-9);
        assert!((api.latitude - 28.7041).abs() < 1e-9);
    }
}
