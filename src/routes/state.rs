use std::sync::Arc;

use sqlx::PgPool;

use crate::services::RecommendationService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub recommendations: Arc<RecommendationService>,
    /// Pool used by the readiness probe. Absent when the store is not
    /// database backed.
    pub db_pool: Option<PgPool>,
}

impl AppState {
    pub fn new(recommendations: RecommendationService, db_pool: Option<PgPool>) -> Self {
        Self {
            recommendations: Arc::new(recommendations),
            db_pool,
        }
    }
}
