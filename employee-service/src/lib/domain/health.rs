use async_trait::async_trait;

/// Reachability probe for the backing store.
#[async_trait]
pub trait HealthCheckPort: Send + Sync + 'static {
    /// Returns `true` when the store answers a trivial query.
    async fn database_connected(&self) -> bool;
}
