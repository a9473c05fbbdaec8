use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use letterbox_api_rest::{RealIpConfig, RestServerConfig};
use letterbox_config::Config;
use letterbox_core_contact_impl::{ContactServiceConfig, ContactServiceImpl};
use letterbox_core_health_impl::HealthServiceImpl;
use letterbox_email_contracts::EmailService;
use letterbox_ratelimit_memory::{MemoryRateLimiter, MemoryRateLimiterConfig, RateLimitWindow};
use letterbox_shared_impl::time::TimeServiceImpl;
use letterbox_templates_impl::TemplateServiceImpl;

use crate::environment::types::RestServer;

pub mod types;

/// Wires the full service graph from the configuration. The email service
/// is passed in so deployments and tests choose the transport.
pub fn build_rest_server<Email: EmailService>(
    config: &Config,
    email: Email,
) -> anyhow::Result<RestServer<Email>> {
    let time = TimeServiceImpl;

    let ratelimit = MemoryRateLimiter::new(
        time,
        MemoryRateLimiterConfig {
            windows: [
                config.ratelimit.submission,
                config.ratelimit.hourly,
                config.ratelimit.daily,
            ]
            .into_iter()
            .map(|window| RateLimitWindow {
                cap: window.cap,
                period: *window.window,
            })
            .collect(),
        },
    );

    let contact = ContactServiceImpl::new(
        ratelimit,
        email,
        TemplateServiceImpl::default(),
        time,
        ContactServiceConfig {
            admin_email: config.contact.admin_email.clone().into(),
        },
    );

    let health = HealthServiceImpl::new(time);

    let rest_config = RestServerConfig {
        addr: SocketAddr::new(config.http.host, config.http.port),
        allowed_origins: config
            .http
            .allowed_origins
            .iter()
            .map(|origin| {
                origin
                    .parse()
                    .with_context(|| format!("Invalid CORS origin {origin:?}"))
            })
            .collect::<anyhow::Result<_>>()?,
        real_ip_config: config.http.real_ip.as_ref().map(|real_ip| {
            Arc::new(RealIpConfig {
                header: real_ip.header.clone(),
                set_from: real_ip.set_from,
            })
        }),
    };

    Ok(RestServer::new(health, contact, rest_config))
}
