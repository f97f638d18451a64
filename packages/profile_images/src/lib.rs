#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Best-effort gender-bucketed profile image fetching and caching.
//!
//! A thin cache-plus-fetch wrapper around a public people-image API.
//! Images are fetched in batches and cached per gender bucket for the
//! process lifetime: no eviction, no expiry, no invalidation. Every
//! failure is caught, logged, and masked behind a fixed default image
//! per gender, so a lookup never resolves to an empty value.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use counsel_map_lawyer_models::{Gender, LawyerRecord};
use serde::Deserialize;
use thiserror::Error;

/// How many images one API call fetches per gender bucket.
pub const BATCH_SIZE: usize = 10;

/// Default image-listing endpoint.
pub const DEFAULT_BASE_URL: &str = "https://randomuser.me/api/";

/// Errors that can occur while fetching profile images.
///
/// These never escape [`ProfileImageClient::image_for`]; they are logged
/// and replaced with the per-gender fallback.
#[derive(Debug, Error)]
pub enum ProfileImageError {
    /// HTTP request or response decoding failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Image request failed with status {status}")]
    Status {
        /// The unexpected status code.
        status: reqwest::StatusCode,
    },
}

#[derive(Deserialize)]
struct RandomUserResponse {
    results: Vec<RandomUserEntry>,
}

#[derive(Deserialize)]
struct RandomUserEntry {
    picture: RandomUserPicture,
}

#[derive(Deserialize)]
struct RandomUserPicture {
    large: String,
}

/// Fetches and caches profile image URLs per gender bucket.
pub struct ProfileImageClient {
    http: reqwest::Client,
    base_url: String,
    cache: Mutex<HashMap<Gender, VecDeque<String>>>,
}

impl ProfileImageClient {
    /// Creates a client against the default endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom endpoint (tests point this at an
    /// unreachable address to exercise the fallback path).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// The fixed fallback image for a gender bucket.
    #[must_use]
    pub const fn default_image(gender: Gender) -> &'static str {
        match gender {
            Gender::Male => "https://randomuser.me/api/portraits/men/1.jpg",
            Gender::Female => "https://randomuser.me/api/portraits/women/1.jpg",
            Gender::Other => "https://randomuser.me/api/portraits/lego/1.jpg",
        }
    }

    /// The API's gender parameter for a bucket. The API has no "other"
    /// category.
    const fn api_gender(gender: Gender) -> &'static str {
        match gender {
            Gender::Male => "male",
            Gender::Female | Gender::Other => "female",
        }
    }

    /// Resolves one profile image URL for a gender.
    ///
    /// Serves from the bucket cache when possible; otherwise fetches a
    /// batch, serves the first image, and caches the rest. Any failure
    /// resolves to [`Self::default_image`]; this never returns an empty
    /// string.
    pub async fn image_for(&self, gender: Gender) -> String {
        if let Some(url) = self.pop_cached(gender) {
            return url;
        }

        match self.fetch_batch(gender).await {
            Ok(mut batch) => {
                let first = batch.pop_front();
                if !batch.is_empty() {
                    self.cache
                        .lock()
                        .expect("image cache poisoned")
                        .insert(gender, batch);
                }
                first.unwrap_or_else(|| Self::default_image(gender).to_string())
            }
            Err(e) => {
                log::error!("Error fetching profile image: {e}");
                Self::default_image(gender).to_string()
            }
        }
    }

    /// Warms the cache for every gender bucket. Failures are already
    /// masked by [`Self::image_for`], so this cannot fail.
    pub async fn prefetch(&self) {
        for gender in Gender::all() {
            let _ = self.image_for(*gender).await;
        }
    }

    /// Assigns a profile image to every record in the slice, resolving
    /// all lookups concurrently. Fire-and-forget semantics: no timeout,
    /// no cancellation, failures fall back per record.
    pub async fn assign_images(&self, lawyers: &mut [LawyerRecord]) {
        let lookups = lawyers.iter().map(|lawyer| self.image_for(lawyer.gender));
        let urls = futures::future::join_all(lookups).await;

        for (lawyer, url) in lawyers.iter_mut().zip(urls) {
            lawyer.image_url = url;
        }
    }

    fn pop_cached(&self, gender: Gender) -> Option<String> {
        self.cache
            .lock()
            .expect("image cache poisoned")
            .get_mut(&gender)
            .and_then(VecDeque::pop_front)
    }

    async fn fetch_batch(&self, gender: Gender) -> Result<VecDeque<String>, ProfileImageError> {
        let url = format!(
            "{}?gender={}&results={BATCH_SIZE}",
            self.base_url,
            Self::api_gender(gender)
        );

        let resp = self.http.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(ProfileImageError::Status {
                status: resp.status(),
            });
        }

        let body: RandomUserResponse = resp.json().await?;
        Ok(body
            .results
            .into_iter()
            .map(|entry| entry.picture.large)
            .collect())
    }

    #[cfg(test)]
    fn seed_cache(&self, gender: Gender, urls: Vec<String>) {
        self.cache
            .lock()
            .expect("image cache poisoned")
            .insert(gender, urls.into());
    }
}

impl Default for ProfileImageClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use counsel_map_directory::DirectoryStore;

    /// TCP port 9 (discard) refuses connections immediately, so these
    /// tests exercise the failure path without waiting on a timeout.
    const UNREACHABLE: &str = "http://127.0.0.1:9/api/";

    #[test]
    fn default_images_are_never_empty() {
        for gender in Gender::all() {
            assert!(!ProfileImageClient::default_image(*gender).is_empty());
        }
    }

    #[test]
    fn other_maps_to_the_female_api_gender() {
        assert_eq!(ProfileImageClient::api_gender(Gender::Other), "female");
        assert_eq!(ProfileImageClient::api_gender(Gender::Male), "male");
    }

    #[tokio::test]
    async fn unreachable_endpoint_falls_back_per_gender() {
        let client = ProfileImageClient::with_base_url(UNREACHABLE);
        for gender in Gender::all() {
            let url = client.image_for(*gender).await;
            assert_eq!(url, ProfileImageClient::default_image(*gender));
        }
    }

    #[tokio::test]
    async fn cached_images_are_served_before_any_fetch() {
        let client = ProfileImageClient::with_base_url(UNREACHABLE);
        client.seed_cache(
            Gender::Female,
            vec!["https://example.com/a.jpg".to_string()],
        );

        assert_eq!(
            client.image_for(Gender::Female).await,
            "https://example.com/a.jpg"
        );
        // Cache exhausted; the next lookup hits the (dead) endpoint and
        // falls back.
        assert_eq!(
            client.image_for(Gender::Female).await,
            ProfileImageClient::default_image(Gender::Female)
        );
    }

    #[tokio::test]
    async fn assign_images_leaves_no_record_without_an_image() {
        let mut store = DirectoryStore::with_seed(3, 12);
        let client = ProfileImageClient::with_base_url(UNREACHABLE);
        client.assign_images(store.lawyers_mut()).await;

        for lawyer in store.lawyers() {
            assert!(!lawyer.image_url.is_empty());
            assert_eq!(
                lawyer.image_url,
                ProfileImageClient::default_image(lawyer.gender)
            );
        }
    }
}
