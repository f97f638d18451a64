//! Deterministic mock-lawyer generator.
//!
//! Produces the directory's record set from fixed name/attribute tables.
//! Generation is seeded so the same seed always yields the same records,
//! which keeps the dataset reproducible across restarts and in tests.

use chrono::Datelike as _;
use counsel_map_geography_models::City;
use counsel_map_lawyer_models::{
    BarAssociation, EducationEntry, Gender, LawyerRecord, PracticeArea, ReviewSummary,
};

const FIRST_NAMES: &[&str] = &[
    "Rajesh", "Ananya", "Vikram", "Priya", "Amit", "Neha", "Sanjay", "Divya", "Arjun", "Meera",
    "Rahul", "Pooja", "Karan", "Nisha", "Vivek", "Kavita", "Deepak", "Shalini", "Aditya", "Anjali",
    "Siddharth", "Geeta", "Varun", "Ritu", "Ashok", "Lakshmi", "Nitin", "Jaya", "Rakesh", "Sunita",
];

const LAST_NAMES: &[&str] = &[
    "Sharma",
    "Patel",
    "Singh",
    "Verma",
    "Agarwal",
    "Iyer",
    "Joshi",
    "Chopra",
    "Reddy",
    "Malhotra",
    "Gupta",
    "Nair",
    "Mehta",
    "Bose",
    "Kumar",
    "Shah",
    "Chatterjee",
    "Kapoor",
    "Pillai",
    "Banerjee",
    "Rao",
    "Desai",
    "Patil",
    "Mahajan",
    "Mittal",
    "Bajaj",
    "Saxena",
    "Khanna",
    "Menon",
    "Bhatia",
];

const INSTITUTIONS: &[&str] = &[
    "National Law School",
    "ILS Law College",
    "Faculty of Law, Delhi University",
    "Symbiosis Law School",
    "Government Law College Mumbai",
];

const REGIONAL_LANGUAGES: &[&str] = &[
    "Gujarati",
    "Marathi",
    "Bengali",
    "Tamil",
    "Telugu",
    "Kannada",
    "Malayalam",
    "Punjabi",
];

/// SplitMix64 sequence. Good enough statistical quality for mock-data
/// assembly, with a single u64 of state so seeds stay printable.
struct SplitMix64 {
    state: u64,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
impl SplitMix64 {
    const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn next_index(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }

    /// Uniform integer in `[lo, hi]`, inclusive.
    fn next_in(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo + 1)
    }

    /// Uniform float in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }
}

/// Generates `count` lawyer records drawn from the fixed tables and the
/// given city registry.
///
/// # Panics
///
/// Panics if `cities` is empty; the generator needs at least one
/// city/state pair to assign.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn generate_lawyers(seed: u64, count: usize, cities: &[City]) -> Vec<LawyerRecord> {
    assert!(!cities.is_empty(), "city registry is empty");

    let mut rng = SplitMix64::new(seed);
    let current_year = chrono::Utc::now().year();
    let mut lawyers = Vec::with_capacity(count);

    for i in 0..count {
        let first_name = FIRST_NAMES[rng.next_index(FIRST_NAMES.len())];
        let last_name = LAST_NAMES[rng.next_index(LAST_NAMES.len())];
        let age = rng.next_in(28, 64) as u8;
        let gender = Gender::all()[rng.next_index(Gender::all().len())];

        let city = &cities[rng.next_index(cities.len())];

        let domains = pick_practice_areas(&mut rng);

        let total_cases = rng.next_in(10, 209) as u32;
        // Win rate between 50% and 90%.
        let win_rate = 0.5 + rng.next_f64() * 0.4;
        let total_wins = (f64::from(total_cases) * win_rate).floor() as u32;
        let total_losses = total_cases - total_wins;

        let fees_per_hearing = (rng.next_in(1, 10) * 5000) as u32;
        let rating = 3.0 + rng.next_f64() * 2.0;
        let review_count = rng.next_in(5, 104) as u32;

        let bar_association = BarAssociation::all()[rng.next_index(BarAssociation::all().len())];
        let years_of_experience = rng.next_in(1, 30) as u8;

        let mut languages = vec!["Hindi".to_string(), "English".to_string()];
        if rng.chance(0.5) {
            languages
                .push(REGIONAL_LANGUAGES[rng.next_index(REGIONAL_LANGUAGES.len())].to_string());
        }

        let llb_year = current_year - i32::from(years_of_experience);
        let mut education = vec![EducationEntry {
            degree: "LLB".to_string(),
            institution: INSTITUTIONS[rng.next_index(INSTITUTIONS.len())].to_string(),
            year: llb_year,
        }];
        if rng.chance(0.4) {
            education.push(EducationEntry {
                degree: "LLM".to_string(),
                institution: INSTITUTIONS[rng.next_index(INSTITUTIONS.len())].to_string(),
                year: llb_year + 3,
            });
        }

        let domain_labels = domains
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let about = format!(
            "{first_name} {last_name} is a dedicated legal professional with over \
             {years_of_experience} years of experience specializing in {domain_labels}. \
             Known for a strategic approach to cases and strong client advocacy."
        );

        lawyers.push(LawyerRecord {
            id: format!("lawyer-{}", i + 1),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            age,
            gender,
            state: city.state.clone(),
            city: city.name.clone(),
            contact_number: format!("+91 {}", rng.next_in(1_000_000_000, 9_999_999_999)),
            email: format!(
                "{}.{}@legalemail.in",
                first_name.to_lowercase(),
                last_name.to_lowercase()
            ),
            domain_of_law: domains,
            total_cases,
            total_wins,
            total_losses,
            fees_per_hearing,
            review: ReviewSummary {
                rating,
                count: review_count,
            },
            bar_association,
            image_url: "/placeholder.svg".to_string(),
            about,
            years_of_experience,
            languages,
            education,
        });
    }

    lawyers
}

/// Picks 1-3 distinct practice areas via a partial Fisher-Yates shuffle.
fn pick_practice_areas(rng: &mut SplitMix64) -> Vec<PracticeArea> {
    let mut pool: Vec<PracticeArea> = PracticeArea::all().to_vec();
    let take = rng.next_index(3) + 1;

    for slot in 0..take {
        let swap_with = slot + rng.next_index(pool.len() - slot);
        pool.swap(slot, swap_with);
    }

    pool.truncate(take);
    pool
}
