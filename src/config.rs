use std::env;

use anyhow::{Context, Result};

use crate::kakao;

pub const DEFAULT_ROUTING_PROXY: &str = "http://tiso.run:8000";

/// Process configuration, read from the environment.
pub struct Config {
    /// Kakao REST API key, sent as `Authorization: KakaoAK {key}`.
    pub kakao_api_key: String,
    pub kakao_base_url: String,
    pub routing_proxy_url: String,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        Ok(Config {
            kakao_api_key: env::var("KAKAO_API_KEY")
                .context("KAKAO_API_KEY is not set")?,
            kakao_base_url: env::var("KAKAO_BASE_URL")
                .unwrap_or_else(|_| kakao::DEFAULT_BASE_URL.to_string()),
            routing_proxy_url: env::var("ROUTING_PROXY_URL")
                .unwrap_or_else(|_| DEFAULT_ROUTING_PROXY.to_string()),
        })
    }
}
