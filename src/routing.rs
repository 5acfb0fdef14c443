use serde_json::{json, Value};
use thiserror::Error;

use crate::model::{Coordinate, RoutePath};

const DIRECTIONS_ENDPOINT: &str = "https://naveropenapi.apigw.ntruss.com/map-direction/v1/driving";

#[derive(Error, Debug)]
pub enum RouteLookupError {
    #[error("route lookup request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("route lookup returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("route response has no data.data.path field")]
    MissingPath,
}

/// Turn-by-turn route lookup between two coordinates.
#[allow(async_fn_in_trait)]
pub trait RouteFinder {
    async fn find(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<RoutePath, RouteLookupError>;
}

/// Client for the backend routing proxy. The proxy relays a fully-formed
/// directions-provider URL, so the Naver driving URL is built here and
/// shipped in the POST body.
#[derive(Clone)]
pub struct RoutingClient {
    http: reqwest::Client,
    proxy_url: String,
}

impl RoutingClient {
    pub fn new(proxy_url: String) -> RoutingClient {
        RoutingClient {
            http: reqwest::Client::new(),
            proxy_url,
        }
    }
}

fn directions_url(origin: Coordinate, destination: Coordinate) -> String {
    format!(
        "{}?start={},{}&goal={},{}",
        DIRECTIONS_ENDPOINT,
        origin.longitude,
        origin.latitude,
        destination.longitude,
        destination.latitude,
    )
}

fn extract_path(body: &Value) -> Result<RoutePath, RouteLookupError> {
    body.pointer("/data/data/path")
        .cloned()
        .map(RoutePath::new)
        .ok_or(RouteLookupError::MissingPath)
}

impl RouteFinder for RoutingClient {
    async fn find(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<RoutePath, RouteLookupError> {
        let response = self
            .http
            .post(format!("{}/paths/find", self.proxy_url))
            .json(&json!({ "url": directions_url(origin, destination) }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RouteLookupError::Status(response.status()));
        }

        let body: Value = response.json().await?;
        extract_path(&body)
    }
}
