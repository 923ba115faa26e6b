use std::sync::Arc;

use auth::Authenticator;
use employee_service::config::AdminSeedConfig;
use employee_service::config::Config;
use employee_service::domain::auth::models::RegisterUserCommand;
use employee_service::domain::auth::ports::AuthServicePort;
use employee_service::domain::auth::service::AuthService;
use employee_service::domain::employee::service::EmployeeService;
use employee_service::domain::user::models::EmailAddress;
use employee_service::domain::user::models::Password;
use employee_service::domain::user::models::Username;
use employee_service::domain::user::service::UserService;
use employee_service::inbound::http::router::create_router;
use employee_service::inbound::http::router::AppState;
use employee_service::outbound::repositories::PostgresEmployeeRepository;
use employee_service::outbound::repositories::PostgresHealthCheck;
use employee_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "employee_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "employee-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        max_connections = config.database.max_connections,
        expose_internal_errors = config.server.expose_internal_errors,
        admin_seed = config.admin.is_some(),
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes()));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let employee_repository = Arc::new(PostgresEmployeeRepository::new(pg_pool.clone()));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        authenticator,
    ));
    let user_service = Arc::new(UserService::new(user_repository));
    let employee_service = Arc::new(EmployeeService::new(employee_repository));

    if let Some(seed) = &config.admin {
        seed_admin(auth_service.as_ref(), seed).await?;
    }

    let state = AppState {
        auth_service,
        user_service,
        employee_service,
        health_check: Arc::new(PostgresHealthCheck::new(pg_pool)),
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(state, config.server.expose_internal_errors);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");

    Ok(())
}

async fn seed_admin(
    auth_service: &impl AuthServicePort,
    seed: &AdminSeedConfig,
) -> Result<(), anyhow::Error> {
    let command = RegisterUserCommand::new(
        Username::new(seed.username.clone())?,
        EmailAddress::new(seed.email.clone())?,
        Password::new(seed.password.clone())?,
        None,
    );

    match auth_service.ensure_admin(command).await? {
        Some(admin) => tracing::info!(
            user_id = %admin.id,
            username = %admin.username,
            "Default admin created"
        ),
        None => tracing::debug!(username = %seed.username, "Admin already present"),
    }

    Ok(())
}
