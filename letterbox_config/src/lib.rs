use std::{net::IpAddr, path::Path};

use anyhow::Context;
use config::{File, FileFormat};
use letterbox_models::email_address::EmailAddress;
use serde::Deserialize;

mod duration;

pub use duration::Duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub email: EmailConfig,
    pub contact: ContactConfig,
    pub ratelimit: RateLimitConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Origins allowed by the CORS layer. An empty list disables CORS.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    pub real_ip: Option<RealIpConfig>,
}

/// Restore the client address from a reverse proxy header, but only when the
/// connection actually comes from that proxy.
#[derive(Debug, Deserialize)]
pub struct RealIpConfig {
    pub header: String,
    pub set_from: IpAddr,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub smtp_url: String,
    pub from: EmailAddress,
    pub send_timeout: Duration,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub admin_email: EmailAddress,
}

#[derive(Debug, Deserialize)]
pub struct RateLimitConfig {
    pub submission: RateLimitWindowConfig,
    pub hourly: RateLimitWindowConfig,
    pub daily: RateLimitWindowConfig,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RateLimitWindowConfig {
    pub cap: u64,
    pub window: Duration,
}
