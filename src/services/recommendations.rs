use std::sync::Arc;

use crate::{
    config::MAX_RECOMMENDATION_LIMIT,
    db::CommodityStore,
    error::AppResult,
    models::{categories_of, Commodity},
};

/// Outcome of a single store lookup
///
/// Keeps "nothing there" apart from "could not ask" so each tier of the
/// fallback chain can decide what to do next.
#[derive(Debug)]
pub enum Lookup {
    Found(Vec<Commodity>),
    Empty,
    Failed,
}

impl Lookup {
    fn from_result(result: AppResult<Vec<Commodity>>, what: &'static str) -> Self {
        match result {
            Ok(rows) if rows.is_empty() => Lookup::Empty,
            Ok(rows) => {
                tracing::debug!(count = rows.len(), query = what, "Query succeeded");
                Lookup::Found(rows)
            }
            Err(e) => {
                tracing::error!(error = %e, query = what, "Query failed");
                Lookup::Failed
            }
        }
    }

    fn into_rows(self) -> Vec<Commodity> {
        match self {
            Lookup::Found(rows) => rows,
            Lookup::Empty | Lookup::Failed => Vec::new(),
        }
    }
}

/// Which tier of the fallback chain produced a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Products sharing a category with the user's past purchases
    History,
    /// Random sample of the whole catalog
    HotProducts,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::History => write!(f, "history"),
            Source::HotProducts => write!(f, "hot_products"),
        }
    }
}

/// A recommendation together with the tier it came from
#[derive(Debug)]
pub struct Recommendation {
    pub products: Vec<Commodity>,
    pub source: Source,
}

/// Product recommendations for the storefront
///
/// Never fails: every data-access problem degrades to the hot-products
/// tier, and a failing hot-products query degrades to an empty list.
#[derive(Clone)]
pub struct RecommendationService {
    store: Arc<dyn CommodityStore>,
    limit: i64,
}

impl RecommendationService {
    /// `limit` is clamped to `1..=MAX_RECOMMENDATION_LIMIT`
    pub fn new(store: Arc<dyn CommodityStore>, limit: i64) -> Self {
        Self {
            store,
            limit: limit.clamp(1, MAX_RECOMMENDATION_LIMIT),
        }
    }

    /// Commodities the user has bought, empty when the query fails
    pub async fn purchase_history(&self, user_id: i32) -> Vec<Commodity> {
        self.lookup_history(user_id).await.into_rows()
    }

    /// Fresh random sample of the catalog, at most `limit` items
    pub async fn hot_products(&self) -> Vec<Commodity> {
        let result = self.store.random_products(self.limit).await;
        Lookup::from_result(result, "hot_products").into_rows()
    }

    /// Up to `limit` products matching the categories the user has bought
    /// from before, falling back to hot products.
    pub async fn recommended_products(&self, user_id: i32) -> Vec<Commodity> {
        self.recommend(user_id).await.products
    }

    /// Runs the fallback chain and reports which tier answered
    pub async fn recommend(&self, user_id: i32) -> Recommendation {
        let recommendation = match self.by_history(user_id).await {
            Some(products) => Recommendation {
                products,
                source: Source::History,
            },
            None => Recommendation {
                products: self.hot_products().await,
                source: Source::HotProducts,
            },
        };

        tracing::info!(
            user_id,
            source = %recommendation.source,
            count = recommendation.products.len(),
            store = self.store.name(),
            "Recommendation resolved"
        );

        recommendation
    }

    async fn lookup_history(&self, user_id: i32) -> Lookup {
        let result = self.store.purchase_history(user_id).await;
        Lookup::from_result(result, "purchase_history")
    }

    /// History tier. `None` means the caller should fall back.
    async fn by_history(&self, user_id: i32) -> Option<Vec<Commodity>> {
        let history = match self.lookup_history(user_id).await {
            Lookup::Found(rows) => rows,
            Lookup::Empty => {
                tracing::info!(user_id, "No purchase history, using hot products");
                return None;
            }
            Lookup::Failed => return None,
        };

        let categories = categories_of(&history);
        if categories.is_empty() {
            tracing::info!(user_id, "Purchase history has no categories, using hot products");
            return None;
        }

        tracing::debug!(user_id, categories = ?categories, "Derived categories");

        let result = self
            .store
            .random_products_in_categories(&categories, self.limit)
            .await;

        match Lookup::from_result(result, "products_in_categories") {
            Lookup::Found(rows) => Some(rows),
            Lookup::Empty => Some(Vec::new()),
            Lookup::Failed => None,
        }
    }
}
