use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use thiserror::Error;

use crate::model::{Coordinate, Place};

/// Kakao Local category group code for hospitals.
pub const HOSPITAL_CATEGORY: &str = "HP8";

pub const DEFAULT_BASE_URL: &str = "https://dapi.kakao.com";

#[derive(Error, Debug)]
pub enum PlaceSearchError {
    #[error("place search request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("place search returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Category-coded point-of-interest search around a coordinate.
#[allow(async_fn_in_trait)]
pub trait PlaceSearch {
    async fn search(
        &self,
        category_code: &str,
        center: Coordinate,
    ) -> Result<Vec<Place>, PlaceSearchError>;
}

/// Client for the Kakao Local REST API, authenticated with a static REST
/// API key.
#[derive(Clone)]
pub struct KakaoLocalClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl KakaoLocalClient {
    pub fn new(api_key: String) -> KakaoLocalClient {
        KakaoLocalClient::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> KakaoLocalClient {
        KakaoLocalClient {
            http: reqwest::Client::new(),
            api_key,
            base_url,
        }
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    documents: Vec<Place>,
}

impl PlaceSearch for KakaoLocalClient {
    async fn search(
        &self,
        category_code: &str,
        center: Coordinate,
    ) -> Result<Vec<Place>, PlaceSearchError> {
        let x = center.longitude.to_string();
        let y = center.latitude.to_string();
        let response = self
            .http
            .get(format!("{}/v2/local/search/category.json", self.base_url))
            .query(&[
                ("category_group_code", category_code),
                ("x", x.as_str()),
                ("y", y.as_str()),
            ])
            .header(AUTHORIZATION, format!("KakaoAK {}", self.api_key))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PlaceSearchError::Status(response.status()));
        }

        let body: SearchResponse = response.json().await?;
        Ok(body.documents)
    }
}
