mod model;
mod server;

use std::time::Duration;

use crate::server::{
    config::Config, error::AppError, router, service::auth::token::TokenCache, startup,
    state::AppState,
};

/// How often expired bearer tokens and admin codes are dropped from memory.
const TOKEN_PURGE_INTERVAL: Duration = Duration::from_secs(300);

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shop_api=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client(&config)?;
    let gateway = startup::setup_payment_gateway(&config, http_client.clone());
    let notifier = startup::setup_notifier(&config, http_client);

    let tokens: TokenCache<i32> = TokenCache::new();
    let admin_codes: TokenCache<()> = TokenCache::new();

    startup::check_for_admin(&db, &admin_codes).await?;

    let purge_tokens = tokens.clone();
    let purge_admin_codes = admin_codes.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TOKEN_PURGE_INTERVAL);
        loop {
            interval.tick().await;
            let purged = purge_tokens.purge_expired().await + purge_admin_codes.purge_expired().await;
            if purged > 0 {
                tracing::debug!("Purged {} expired tokens", purged);
            }
        }
    });

    let state = AppState::new(
        db,
        tokens,
        admin_codes,
        gateway,
        notifier,
        config.admin_fee,
        config.token_ttl(),
        config.midtrans_server_key.clone(),
    );

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, router::router(state)).await?;

    Ok(())
}
