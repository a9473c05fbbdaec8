use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    Router,
};
use letterbox_core_contact_contracts::ContactService;
use letterbox_core_health_contracts::HealthService;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

mod middlewares;
mod models;
mod routes;

pub use middlewares::client_ip::RealIpConfig;

/// Submission bodies above this size are rejected before parsing.
pub const REQUEST_BODY_LIMIT: usize = 2 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct RestServer<Health, Contact> {
    health: Health,
    contact: Contact,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub addr: SocketAddr,
    /// Origins allowed by the CORS layer. An empty list disables CORS.
    pub allowed_origins: Vec<HeaderValue>,
    pub real_ip_config: Option<Arc<RealIpConfig>>,
}

impl<Health, Contact> RestServer<Health, Contact>
where
    Health: HealthService,
    Contact: ContactService,
{
    pub fn new(health: Health, contact: Contact, config: RestServerConfig) -> Self {
        Self {
            health,
            contact,
            config,
        }
    }

    pub async fn serve(self) -> anyhow::Result<()> {
        let addr = self.config.addr;
        let listener = TcpListener::bind(addr).await?;
        axum::serve(
            listener,
            self.router()
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .map_err(Into::into)
    }

    pub fn router(self) -> Router<()> {
        let RestServerConfig {
            allowed_origins,
            real_ip_config,
            ..
        } = self.config;

        let router = Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::contact::router(self.contact.into()))
            .layer(DefaultBodyLimit::max(REQUEST_BODY_LIMIT));

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        let router = middlewares::request_id::add(router);
        let router = middlewares::client_ip::add(real_ip_config)(router);

        if allowed_origins.is_empty() {
            router
        } else {
            router.layer(
                CorsLayer::new()
                    .allow_origin(allowed_origins)
                    .allow_methods([Method::GET, Method::POST])
                    .allow_headers([header::CONTENT_TYPE]),
            )
        }
    }
}
