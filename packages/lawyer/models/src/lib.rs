#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Lawyer taxonomy types and the lawyer record shape.
//!
//! This crate defines the canonical fixed taxonomies (gender, practice
//! area, bar association, experience band) and the immutable
//! [`LawyerRecord`] used across the entire counsel-map system. The
//! directory generator produces records of this shape once at startup;
//! nothing mutates them afterwards except the profile-image assignment.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Gender of a lawyer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other / undisclosed
    Other,
}

impl Gender {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Male, Self::Female, Self::Other]
    }
}

/// A practice area (domain of law) from the fixed ten-entry list.
///
/// Display and serde strings are the human-readable labels
/// (e.g. `"Family Law"`). Parsing is exact on the label; the search
/// pipeline does its own case-insensitive comparison on top.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum PracticeArea {
    /// Criminal defense and prosecution
    #[serde(rename = "Criminal Law")]
    #[strum(serialize = "Criminal Law")]
    CriminalLaw,
    /// Civil disputes between private parties
    #[serde(rename = "Civil Law")]
    #[strum(serialize = "Civil Law")]
    CivilLaw,
    /// Company formation, governance, M&A
    #[serde(rename = "Corporate Law")]
    #[strum(serialize = "Corporate Law")]
    CorporateLaw,
    /// Divorce, custody, adoption
    #[serde(rename = "Family Law")]
    #[strum(serialize = "Family Law")]
    FamilyLaw,
    /// Patents, trademarks, copyright
    #[serde(rename = "Intellectual Property")]
    #[strum(serialize = "Intellectual Property")]
    IntellectualProperty,
    /// Employment and industrial relations
    #[serde(rename = "Labor Law")]
    #[strum(serialize = "Labor Law")]
    LaborLaw,
    /// Direct and indirect taxation
    #[serde(rename = "Tax Law")]
    #[strum(serialize = "Tax Law")]
    TaxLaw,
    /// Constitutional and administrative matters
    #[serde(rename = "Constitutional Law")]
    #[strum(serialize = "Constitutional Law")]
    ConstitutionalLaw,
    /// Environmental regulation and compliance
    #[serde(rename = "Environmental Law")]
    #[strum(serialize = "Environmental Law")]
    EnvironmentalLaw,
    /// Property transactions and land disputes
    #[serde(rename = "Real Estate Law")]
    #[strum(serialize = "Real Estate Law")]
    RealEstateLaw,
}

impl PracticeArea {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::CriminalLaw,
            Self::CivilLaw,
            Self::CorporateLaw,
            Self::FamilyLaw,
            Self::IntellectualProperty,
            Self::LaborLaw,
            Self::TaxLaw,
            Self::ConstitutionalLaw,
            Self::EnvironmentalLaw,
            Self::RealEstateLaw,
        ]
    }

    /// Case-insensitive label comparison, used by the search pipeline.
    #[must_use]
    pub fn matches_label(self, label: &str) -> bool {
        self.as_ref().eq_ignore_ascii_case(label.trim())
    }
}

/// Bar association affiliation, one of a fixed enumerated list.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum BarAssociation {
    /// National bar council
    #[serde(rename = "Bar Council of India")]
    #[strum(serialize = "Bar Council of India")]
    BarCouncilOfIndia,
    /// Delhi
    #[serde(rename = "Delhi Bar Council")]
    #[strum(serialize = "Delhi Bar Council")]
    DelhiBarCouncil,
    /// Maharashtra
    #[serde(rename = "Maharashtra Bar Council")]
    #[strum(serialize = "Maharashtra Bar Council")]
    MaharashtraBarCouncil,
    /// Karnataka
    #[serde(rename = "Karnataka Bar Council")]
    #[strum(serialize = "Karnataka Bar Council")]
    KarnatakaBarCouncil,
    /// Tamil Nadu
    #[serde(rename = "Tamil Nadu Bar Council")]
    #[strum(serialize = "Tamil Nadu Bar Council")]
    TamilNaduBarCouncil,
    /// Uttar Pradesh
    #[serde(rename = "Uttar Pradesh Bar Council")]
    #[strum(serialize = "Uttar Pradesh Bar Council")]
    UttarPradeshBarCouncil,
    /// West Bengal
    #[serde(rename = "West Bengal Bar Council")]
    #[strum(serialize = "West Bengal Bar Council")]
    WestBengalBarCouncil,
    /// Punjab
    #[serde(rename = "Punjab Bar Council")]
    #[strum(serialize = "Punjab Bar Council")]
    PunjabBarCouncil,
    /// Gujarat
    #[serde(rename = "Gujarat Bar Council")]
    #[strum(serialize = "Gujarat Bar Council")]
    GujaratBarCouncil,
    /// Rajasthan
    #[serde(rename = "Rajasthan Bar Council")]
    #[strum(serialize = "Rajasthan Bar Council")]
    RajasthanBarCouncil,
}

impl BarAssociation {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::BarCouncilOfIndia,
            Self::DelhiBarCouncil,
            Self::MaharashtraBarCouncil,
            Self::KarnatakaBarCouncil,
            Self::TamilNaduBarCouncil,
            Self::UttarPradeshBarCouncil,
            Self::WestBengalBarCouncil,
            Self::PunjabBarCouncil,
            Self::GujaratBarCouncil,
            Self::RajasthanBarCouncil,
        ]
    }
}

/// Experience band facet. Bands are half-open on the upper bound so every
/// experience value falls into exactly one band; `20+` is unbounded.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum ExperienceBand {
    /// Fewer than 5 years
    #[serde(rename = "0-5 years")]
    #[strum(serialize = "0-5 years")]
    Years0To5,
    /// 5 to 9 years
    #[serde(rename = "5-10 years")]
    #[strum(serialize = "5-10 years")]
    Years5To10,
    /// 10 to 14 years
    #[serde(rename = "10-15 years")]
    #[strum(serialize = "10-15 years")]
    Years10To15,
    /// 15 to 19 years
    #[serde(rename = "15-20 years")]
    #[strum(serialize = "15-20 years")]
    Years15To20,
    /// 20 years or more
    #[serde(rename = "20+ years")]
    #[strum(serialize = "20+ years")]
    Years20Plus,
}

impl ExperienceBand {
    /// Returns the band a given number of years of experience falls into.
    #[must_use]
    pub const fn for_years(years: u8) -> Self {
        match years {
            0..=4 => Self::Years0To5,
            5..=9 => Self::Years5To10,
            10..=14 => Self::Years10To15,
            15..=19 => Self::Years15To20,
            _ => Self::Years20Plus,
        }
    }

    /// Whether the given number of years falls inside this band.
    #[must_use]
    pub fn contains(self, years: u8) -> bool {
        Self::for_years(years) == self
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Years0To5,
            Self::Years5To10,
            Self::Years10To15,
            Self::Years15To20,
            Self::Years20Plus,
        ]
    }
}

/// Aggregated review summary for a lawyer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    /// Average rating in [0, 5].
    pub rating: f64,
    /// Number of reviews behind the average.
    pub count: u32,
}

/// One education entry (ordered oldest-first on the record).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    /// Degree name (e.g. "LLB").
    pub degree: String,
    /// Awarding institution.
    pub institution: String,
    /// Graduation year.
    pub year: i32,
}

/// An immutable lawyer directory record.
///
/// City and state are free text rather than references into the city
/// registry; the search pipeline compares them case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LawyerRecord {
    /// Opaque record id (e.g. "lawyer-17").
    pub id: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Age in years.
    pub age: u8,
    /// Gender.
    pub gender: Gender,
    /// State of practice (free text).
    pub state: String,
    /// City of practice (free text).
    pub city: String,
    /// Contact phone number.
    pub contact_number: String,
    /// Contact email address.
    pub email: String,
    /// Practice areas; non-empty by construction.
    pub domain_of_law: Vec<PracticeArea>,
    /// Total cases handled; equals wins + losses.
    pub total_cases: u32,
    /// Cases won.
    pub total_wins: u32,
    /// Cases lost.
    pub total_losses: u32,
    /// Fee per hearing, positive.
    pub fees_per_hearing: u32,
    /// Review summary.
    pub review: ReviewSummary,
    /// Bar association affiliation.
    pub bar_association: BarAssociation,
    /// Profile image URL.
    pub image_url: String,
    /// Free-text biography.
    pub about: String,
    /// Years of experience, positive.
    pub years_of_experience: u8,
    /// Spoken languages.
    pub languages: Vec<String>,
    /// Education entries, oldest first.
    pub education: Vec<EducationEntry>,
}

impl LawyerRecord {
    /// Full display name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The experience band this record falls into.
    #[must_use]
    pub const fn experience_band(&self) -> ExperienceBand {
        ExperienceBand::for_years(self.years_of_experience)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr as _;

    #[test]
    fn practice_area_label_roundtrip() {
        for area in PracticeArea::all() {
            let label = area.to_string();
            let parsed = PracticeArea::from_str(&label).expect("label should parse back");
            assert_eq!(parsed, *area);
        }
    }

    #[test]
    fn practice_area_label_matching_ignores_case() {
        assert!(PracticeArea::FamilyLaw.matches_label("family law"));
        assert!(PracticeArea::FamilyLaw.matches_label("FAMILY LAW"));
        assert!(!PracticeArea::FamilyLaw.matches_label("Famil Law"));
    }

    #[test]
    fn taxonomy_sizes() {
        assert_eq!(PracticeArea::all().len(), 10);
        assert_eq!(BarAssociation::all().len(), 10);
        assert_eq!(ExperienceBand::all().len(), 5);
        assert_eq!(Gender::all().len(), 3);
    }

    #[test]
    fn experience_bands_partition_all_years() {
        for years in 0..=60u8 {
            let band = ExperienceBand::for_years(years);
            assert!(band.contains(years), "{years} not in {band}");
            let others = ExperienceBand::all()
                .iter()
                .filter(|b| **b != band)
                .filter(|b| b.contains(years))
                .count();
            assert_eq!(others, 0, "{years} falls in more than one band");
        }
    }

    #[test]
    fn experience_band_boundaries() {
        assert_eq!(ExperienceBand::for_years(4), ExperienceBand::Years0To5);
        assert_eq!(ExperienceBand::for_years(5), ExperienceBand::Years5To10);
        assert_eq!(ExperienceBand::for_years(19), ExperienceBand::Years15To20);
        assert_eq!(ExperienceBand::for_years(20), ExperienceBand::Years20Plus);
        assert_eq!(ExperienceBand::for_years(45), ExperienceBand::Years20Plus);
    }

    #[test]
    fn record_serializes_camel_case_with_labels() {
        let record = LawyerRecord {
            id: "lawyer-1".to_string(),
            first_name: "Rajesh".to_string(),
            last_name: "Sharma".to_string(),
            age: 40,
            gender: Gender::Male,
            state: "Maharashtra".to_string(),
            city: "Mumbai".to_string(),
            contact_number: "+91 9000000001".to_string(),
            email: "rajesh.sharma@legalemail.in".to_string(),
            domain_of_law: vec![PracticeArea::FamilyLaw],
            total_cases: 100,
            total_wins: 70,
            total_losses: 30,
            fees_per_hearing: 5000,
            review: ReviewSummary {
                rating: 4.2,
                count: 17,
            },
            bar_association: BarAssociation::MaharashtraBarCouncil,
            image_url: "/placeholder.svg".to_string(),
            about: "A dedicated legal professional.".to_string(),
            years_of_experience: 12,
            languages: vec!["Hindi".to_string(), "English".to_string()],
            education: vec![EducationEntry {
                degree: "LLB".to_string(),
                institution: "National Law School".to_string(),
                year: 2011,
            }],
        };

        let json = serde_json::to_value(&record).expect("serialize");
        assert_eq!(json["firstName"], "Rajesh");
        assert_eq!(json["domainOfLaw"][0], "Family Law");
        assert_eq!(json["barAssociation"], "Maharashtra Bar Council");
        assert_eq!(json["feesPerHearing"], 5000);
        assert_eq!(json["review"]["count"], 17);
    }
}
