use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::health::HealthCheckPort;

pub struct PostgresHealthCheck {
    pool: PgPool,
}

impl PostgresHealthCheck {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthCheckPort for PostgresHealthCheck {
    async fn database_connected(&self) -> bool {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Database health check failed");
                false
            }
        }
    }
}
