//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    pub secret: String,
    /// Base URL of the content backend, e.g. `http://localhost:5000/api/v1`.
    pub api_url: String,
    /// Seconds a fully loaded home page is served from memory.
    #[serde(default = "default_revalidate_seconds")]
    pub revalidate_seconds: u64,
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,
    pub brand: BrandConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Company identity used by the page chrome, SEO output and fallbacks.
pub struct BrandConfig {
    pub company_name: String,
    pub tagline: String,
    #[serde(default)]
    pub logo_url: String,
    /// Public origin of the site, used for canonical links and the sitemap.
    pub site_url: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

fn default_static_dir() -> String {
    "./assets".to_string()
}

fn default_revalidate_seconds() -> u64 {
    300
}

fn default_request_timeout_seconds() -> u64 {
    10
}

impl ServerConfig {
    pub fn revalidate(&self) -> Duration {
        Duration::from_secs(self.revalidate_seconds)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl BrandConfig {
    /// Site origin without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.site_url.trim_end_matches('/')
    }
}
