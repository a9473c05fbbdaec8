use letterbox_config::Config;
use letterbox_email_contracts::EmailService;
use tracing::{info, warn};

use crate::{email, environment};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to smtp server");
    let email = email::connect(&config.email)?;

    // A dead SMTP server must not prevent serving; submissions surface 503
    // until it comes back.
    if let Err(err) = email.ping().await {
        warn!("Failed to ping smtp server: {err:#}");
    }

    let server = environment::build_rest_server(&config, email)?;

    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve().await
}
