//! Catalog and order-history queries
//!
//! The recommendation service only talks to the store through this trait so
//! the fallback chain can be exercised without a live database.

use sqlx::PgPool;
use tracing::instrument;

use crate::{error::AppResult, models::Commodity};

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CommodityStore: Send + Sync {
    /// Every commodity the user has ordered, one row per order
    async fn purchase_history(&self, user_id: i32) -> AppResult<Vec<Commodity>>;

    /// Uniform random sample of up to `limit` commodities from the whole catalog
    async fn random_products(&self, limit: i64) -> AppResult<Vec<Commodity>>;

    /// Uniform random sample of up to `limit` commodities whose category is
    /// one of `categories`
    async fn random_products_in_categories(
        &self,
        categories: &[String],
        limit: i64,
    ) -> AppResult<Vec<Commodity>>;

    /// Store name for logging and debugging
    fn name(&self) -> &'static str;
}

/// PostgreSQL-backed commodity store
#[derive(Clone)]
pub struct PgCommodityStore {
    pool: PgPool,
}

impl PgCommodityStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CommodityStore for PgCommodityStore {
    #[instrument(skip(self))]
    async fn purchase_history(&self, user_id: i32) -> AppResult<Vec<Commodity>> {
        let rows = sqlx::query_as::<_, Commodity>(
            r#"
            SELECT c.commodity_id, c.name, c.image_path, c.price, c.member_price,
                   c.description, c.type
            FROM orders o
            JOIN commodities c ON o.commodity_id = c.commodity_id
            WHERE o.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    #[instrument(skip(self))]
    async fn random_products(&self, limit: i64) -> AppResult<Vec<Commodity>> {
        let rows = sqlx::query_as::<_, Commodity>(
            r#"
            SELECT commodity_id, name, image_path, price, member_price, description, type
            FROM commodities
            ORDER BY random()
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    #[instrument(skip(self))]
    async fn random_products_in_categories(
        &self,
        categories: &[String],
        limit: i64,
    ) -> AppResult<Vec<Commodity>> {
        let rows = sqlx::query_as::<_, Commodity>(
            r#"
            SELECT commodity_id, name, image_path, price, member_price, description, type
            FROM commodities
            WHERE type = ANY($1)
            ORDER BY random()
            LIMIT $2
            "#,
        )
        .bind(categories)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}
