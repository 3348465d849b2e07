use std::{sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    service::{
        auth::{token::TokenCache, ADMIN_CODE_TTL},
        notification::{LogNotifier, OrderNotifier, WebhookNotifier},
        payment::{MidtransGateway, PaymentGateway},
    },
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client shared by the payment gateway and the webhook notifier.
///
/// Redirects are disabled so a misconfigured endpoint cannot bounce requests elsewhere.
pub fn setup_reqwest_client(config: &Config) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(config.http_timeout_seconds))
        .build()?;

    Ok(client)
}

pub fn setup_payment_gateway(
    config: &Config,
    http_client: reqwest::Client,
) -> Arc<dyn PaymentGateway> {
    Arc::new(MidtransGateway::new(
        http_client,
        &config.midtrans_base_url,
        &config.midtrans_server_key,
    ))
}

/// Posts notifications to the configured webhook, or only logs them when none is set.
pub fn setup_notifier(config: &Config, http_client: reqwest::Client) -> Arc<dyn OrderNotifier> {
    match &config.notification_webhook_url {
        Some(url) => {
            tracing::info!("Order notifications are posted to {}", url);
            Arc::new(WebhookNotifier::new(http_client, url))
        }
        None => Arc::new(LogNotifier),
    }
}

/// Issues a one-time admin registration code when no admin account exists.
///
/// The code is logged so the operator can register the first admin with it.
///
/// # Returns
/// - `Ok(Some(code))` - No admin yet; code valid for [`ADMIN_CODE_TTL`]
/// - `Ok(None)` - An admin already exists
/// - `Err(AppError::DbErr)` - Database error during the check
pub async fn check_for_admin(
    db: &DatabaseConnection,
    admin_codes: &TokenCache<()>,
) -> Result<Option<String>, AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.admin_exists().await? {
        return Ok(None);
    }

    let code = admin_codes.issue((), ADMIN_CODE_TTL).await;

    tracing::info!(
        "No admin account exists. Register with admin_code {} within {} minutes to create one.",
        code,
        ADMIN_CODE_TTL.as_secs() / 60
    );

    Ok(Some(code))
}
