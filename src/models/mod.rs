use serde::{Deserialize, Serialize};

pub mod commodity;

pub use commodity::{categories_of, Commodity};

/// Body of a successful recommendation response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub recommended_products: Vec<Commodity>,
}

impl From<Vec<Commodity>> for RecommendationResponse {
    fn from(recommended_products: Vec<Commodity>) -> Self {
        Self {
            recommended_products,
        }
    }
}
