//! Redis-backed visit repository.

use crate::domain::repositories::VisitRepository;
use crate::error::AppError;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::collections::HashMap;
use tracing::{debug, info};

/// Visit store backed by a single Redis sorted set.
///
/// Domains are members of the set, their visit timestamps the scores. ZADD
/// gives the overwrite-always upsert (a re-added member takes the new score
/// unconditionally) and ZRANGEBYSCORE the inclusive ascending range read.
/// Connections are pooled via `ConnectionManager`.
pub struct RedisVisitRepository {
    client: ConnectionManager,
    key: String,
}

impl RedisVisitRepository {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `key` - name of the sorted set holding recorded domains
    ///
    /// # Errors
    ///
    /// Returns the client error if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, key: String) -> Result<Self, redis::RedisError> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url)?;
        let manager = ConnectionManager::new(client).await?;

        let mut test_conn = manager.clone();
        test_conn.ping::<()>().await?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            key,
        })
    }
}

#[async_trait]
impl VisitRepository for RedisVisitRepository {
    async fn upsert(&self, entries: HashMap<String, f64>) -> Result<(), AppError> {
        if entries.is_empty() {
            return Ok(());
        }

        let items: Vec<(f64, String)> = entries
            .into_iter()
            .map(|(domain, score)| (score, domain))
            .collect();

        let mut conn = self.client.clone();
        conn.zadd_multiple::<_, _, _, ()>(&self.key, &items).await?;

        debug!("ZADD {}: {} member(s)", self.key, items.len());
        Ok(())
    }

    async fn range(&self, from: f64, to: f64) -> Result<Vec<String>, AppError> {
        let mut conn = self.client.clone();
        let domains: Vec<String> = conn.zrangebyscore(&self.key, from, to).await?;

        debug!(
            "ZRANGEBYSCORE {} [{from}, {to}]: {} member(s)",
            self.key,
            domains.len()
        );
        Ok(domains)
    }

    async fn ping(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
