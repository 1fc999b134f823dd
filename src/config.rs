use std::env;

use anyhow::Result;

use crate::serpapi::client::DEFAULT_SERPAPI_URL;

/// Configuration loaded from environment variables.
///
/// The API key is a secret and only ever comes from the environment or
/// the command line. The .env file is loaded automatically at startup
/// via dotenvy.
pub struct Config {
    /// SerpAPI key (SERPAPI_API_KEY). Empty when unset.
    pub serpapi_api_key: String,
    /// Default country code (SERP_COUNTRY). Empty when unset.
    pub country: String,
    /// SerpAPI endpoint (SERPAPI_BASE_URL), defaults to https://serpapi.com/search.
    pub serpapi_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Nothing is required at load time: missing values surface later as
    /// a validation warning, so the user sees every missing input at once.
    pub fn load() -> Result<Self> {
        let serpapi_url = match env::var("SERPAPI_BASE_URL") {
            Ok(url) if !url.trim().is_empty() => url,
            _ => DEFAULT_SERPAPI_URL.to_string(),
        };
        if !serpapi_url.starts_with("http://") && !serpapi_url.starts_with("https://") {
            anyhow::bail!(
                "SERPAPI_BASE_URL must be an http(s) URL, got {serpapi_url:?}.\n\
                 Unset it to use {DEFAULT_SERPAPI_URL}."
            );
        }

        Ok(Self {
            serpapi_api_key: env::var("SERPAPI_API_KEY").unwrap_or_default(),
            country: env::var("SERP_COUNTRY").unwrap_or_default(),
            serpapi_url,
        })
    }
}
